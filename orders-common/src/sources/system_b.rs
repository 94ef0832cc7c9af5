//! System B reader (CSV export)
//!
//! Header row with columns `order_num, client_name, date_placed, total,
//! order_status`. Columns are matched by header name, every cell is trimmed
//! and blank lines are skipped. Cells are kept as raw text; the normalizer
//! coerces the numeric ones.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemBOrder {
    pub order_num: String,
    pub client_name: String,
    /// `MM/DD/YYYY`
    pub date_placed: String,
    pub total: String,
    /// Integer code 1-5 as text
    pub order_status: String,
}

/// Parse a System B export from any reader
pub fn parse<R: Read>(input: R) -> Result<Vec<SystemBOrder>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut orders = Vec::new();
    for record in reader.deserialize::<SystemBOrder>() {
        orders.push(record?);
    }
    Ok(orders)
}

/// Read and parse a System B export file
pub fn read_file(path: &Path) -> Result<Vec<SystemBOrder>> {
    let file = std::fs::File::open(path)?;
    parse(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_cells_and_skips_blank_lines() {
        let csv = "order_num, client_name ,date_placed,total,order_status\n\
                   B-1,  Alan Turing ,3/4/2024, 10.00 ,3\n\
                   \n\
                   B-2,Edsger Dijkstra,12/25/2023,99.5,5\n";

        let orders = parse(csv.as_bytes()).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_num, "B-1");
        assert_eq!(orders[0].client_name, "Alan Turing");
        assert_eq!(orders[0].date_placed, "3/4/2024");
        assert_eq!(orders[0].total, "10.00");
        assert_eq!(orders[0].order_status, "3");
        assert_eq!(orders[1].order_num, "B-2");
    }

    #[test]
    fn test_columns_matched_by_header_name() {
        let csv = "order_status,total,date_placed,client_name,order_num\n\
                   1,5.25,1/1/2024,Barbara Liskov,B-9\n";

        let orders = parse(csv.as_bytes()).unwrap();
        assert_eq!(orders[0].order_num, "B-9");
        assert_eq!(orders[0].client_name, "Barbara Liskov");
        assert_eq!(orders[0].order_status, "1");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "order_num,client_name,total,order_status\nB-1,Alan,1,1\n";
        assert!(parse(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let csv = "order_num,client_name,date_placed,total,order_status\n";
        assert!(parse(csv.as_bytes()).unwrap().is_empty());
    }
}
