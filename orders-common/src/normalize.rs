//! Normalization of source records into the unified schema
//!
//! The mapping is total and deterministic: every [`RawOrder`] yields exactly
//! one [`UnifiedOrder`]. Unrecognized status codes fall back to
//! [`OrderStatus::Pending`]; malformed dates and amounts pass through as
//! malformed values rather than rejecting the record.

use tracing::debug;

use crate::model::{OrderStatus, SourceSystem, UnifiedOrder};
use crate::sources::{RawOrder, SystemAOrder, SystemBOrder};

/// Map any source record to the unified schema
pub fn normalize(raw: RawOrder) -> UnifiedOrder {
    match raw {
        RawOrder::SystemA(order) => normalize_system_a(order),
        RawOrder::SystemB(order) => normalize_system_b(order),
    }
}

/// System A: status code lookup, date passed through unchanged
pub fn normalize_system_a(order: SystemAOrder) -> UnifiedOrder {
    let status = status_from_code_a(&order.status);
    UnifiedOrder {
        order_id: order.order_id,
        source_system: SourceSystem::SystemA,
        customer_name: order.customer,
        order_date: order.order_date,
        total_amount: order.total_amount,
        status,
    }
}

/// System B: integer status lookup, `MM/DD/YYYY` rewritten, total coerced
pub fn normalize_system_b(order: SystemBOrder) -> UnifiedOrder {
    let status = match parse_status_code_b(&order.order_status) {
        Some(code) => status_from_code_b(code),
        None => {
            debug!(
                "System B order {}: non-canonical status {:?}, using Pending",
                order.order_num, order.order_status
            );
            OrderStatus::Pending
        }
    };

    UnifiedOrder {
        order_date: reformat_us_date(&order.date_placed),
        total_amount: coerce_amount(&order.total),
        order_id: order.order_num,
        source_system: SourceSystem::SystemB,
        customer_name: order.client_name,
        status,
    }
}

/// System A short status codes (exact, case-sensitive)
pub fn status_from_code_a(code: &str) -> OrderStatus {
    match code {
        "PEND" => OrderStatus::Pending,
        "PROC" => OrderStatus::Processing,
        "SHIP" => OrderStatus::Shipped,
        "COMP" => OrderStatus::Completed,
        "CANC" => OrderStatus::Cancelled,
        other => {
            debug!("Unrecognized System A status code {:?}, using Pending", other);
            OrderStatus::default()
        }
    }
}

/// System B integer status codes
pub fn status_from_code_b(code: i64) -> OrderStatus {
    match code {
        1 => OrderStatus::Pending,
        2 => OrderStatus::Processing,
        3 => OrderStatus::Shipped,
        4 => OrderStatus::Completed,
        5 => OrderStatus::Cancelled,
        other => {
            debug!("Unrecognized System B status code {}, using Pending", other);
            OrderStatus::default()
        }
    }
}

/// Integer code as written in the export: plain decimal digits only
///
/// Leading zeros, signs and fractions (`"03"`, `"+3"`, `"3.0"`) are not codes.
fn parse_status_code_b(raw: &str) -> Option<i64> {
    let code = raw.trim();
    let canonical = !code.is_empty()
        && code.bytes().all(|b| b.is_ascii_digit())
        && (code == "0" || !code.starts_with('0'));
    if canonical {
        code.parse().ok()
    } else {
        None
    }
}

/// Rewrite `MM/DD/YYYY` as `YYYY-MM-DD`, zero-padding month and day
///
/// No range or calendar validation. Missing components become empty strings,
/// so malformed input yields a malformed (but non-panicking) result.
///
/// ```
/// use orders_common::normalize::reformat_us_date;
///
/// assert_eq!(reformat_us_date("3/4/2024"), "2024-03-04");
/// assert_eq!(reformat_us_date("12/25/2023"), "2023-12-25");
/// ```
pub fn reformat_us_date(date: &str) -> String {
    let mut parts = date.split('/');
    let month = parts.next().unwrap_or("");
    let day = parts.next().unwrap_or("");
    let year = parts.next().unwrap_or("");
    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

/// Coerce a raw monetary cell to a number
///
/// Blank text is zero. Decimal numbers (with optional exponent), `0x`/`0o`/`0b`
/// integers and `Infinity` are accepted; anything else is NaN.
pub fn coerce_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan", which are not amounts
    let numeric = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_b(date: &str, total: &str, status: &str) -> SystemBOrder {
        SystemBOrder {
            order_num: "B-1".to_string(),
            client_name: "Alan Turing".to_string(),
            date_placed: date.to_string(),
            total: total.to_string(),
            order_status: status.to_string(),
        }
    }

    #[test]
    fn test_system_a_status_table() {
        assert_eq!(status_from_code_a("PEND"), OrderStatus::Pending);
        assert_eq!(status_from_code_a("PROC"), OrderStatus::Processing);
        assert_eq!(status_from_code_a("SHIP"), OrderStatus::Shipped);
        assert_eq!(status_from_code_a("COMP"), OrderStatus::Completed);
        assert_eq!(status_from_code_a("CANC"), OrderStatus::Cancelled);
    }

    #[test]
    fn test_system_a_unknown_codes_fall_back_to_pending() {
        for code in ["", "ship", "SHIPPED", "HOLD", " SHIP", "Cancelled"] {
            assert_eq!(status_from_code_a(code), OrderStatus::Pending, "code {:?}", code);
        }
    }

    #[test]
    fn test_system_b_status_table() {
        assert_eq!(status_from_code_b(1), OrderStatus::Pending);
        assert_eq!(status_from_code_b(2), OrderStatus::Processing);
        assert_eq!(status_from_code_b(3), OrderStatus::Shipped);
        assert_eq!(status_from_code_b(4), OrderStatus::Completed);
        assert_eq!(status_from_code_b(5), OrderStatus::Cancelled);
    }

    #[test]
    fn test_system_b_out_of_range_codes_fall_back_to_pending() {
        for code in [0, 6, -1, 42, i64::MAX] {
            assert_eq!(status_from_code_b(code), OrderStatus::Pending, "code {}", code);
        }
    }

    #[test]
    fn test_reformat_us_date_pads_month_and_day() {
        assert_eq!(reformat_us_date("3/4/2024"), "2024-03-04");
        assert_eq!(reformat_us_date("12/25/2023"), "2023-12-25");
        assert_eq!(reformat_us_date("01/09/2022"), "2022-01-09");
    }

    #[test]
    fn test_reformat_us_date_does_not_validate() {
        assert_eq!(reformat_us_date("13/45/2024"), "2024-13-45");
        assert_eq!(reformat_us_date("2/30/2023"), "2023-02-30");
        assert_eq!(reformat_us_date("2024-01-05"), "-2024-01-05-00");
        assert_eq!(reformat_us_date(""), "-00-00");
    }

    #[test]
    fn test_coerce_amount() {
        assert_eq!(coerce_amount("10.50"), 10.5);
        assert_eq!(coerce_amount(" 7 "), 7.0);
        assert_eq!(coerce_amount(""), 0.0);
        assert!(coerce_amount("abc").is_nan());
        assert!(coerce_amount("$12.00").is_nan());
        assert_eq!(coerce_amount("1e3"), 1000.0);
        assert_eq!(coerce_amount(".5"), 0.5);
    }

    #[test]
    fn test_coerce_amount_number_literal_forms() {
        assert_eq!(coerce_amount("0x10"), 16.0);
        assert_eq!(coerce_amount("0b101"), 5.0);
        assert_eq!(coerce_amount("0o17"), 15.0);
        assert!(coerce_amount("0x").is_nan());
        assert!(coerce_amount("0xZZ").is_nan());
        assert_eq!(coerce_amount("Infinity"), f64::INFINITY);
        assert_eq!(coerce_amount("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_amount("inf").is_nan());
        assert!(coerce_amount("nan").is_nan());
        assert!(coerce_amount("1,000").is_nan());
    }

    #[test]
    fn test_normalize_system_a_passes_date_through() {
        let order = normalize(RawOrder::SystemA(SystemAOrder {
            order_id: "A-7".to_string(),
            customer: "Grace Hopper".to_string(),
            order_date: "2024-02-29".to_string(),
            total_amount: 250.0,
            status: "COMP".to_string(),
        }));

        assert_eq!(order.order_id, "A-7");
        assert_eq!(order.source_system, SourceSystem::SystemA);
        assert_eq!(order.customer_name, "Grace Hopper");
        assert_eq!(order.order_date, "2024-02-29");
        assert_eq!(order.total_amount, 250.0);
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_normalize_system_b_rewrites_fields() {
        let order = normalize(RawOrder::SystemB(system_b("3/4/2024", "42.10", "3")));

        assert_eq!(order.order_id, "B-1");
        assert_eq!(order.source_system, SourceSystem::SystemB);
        assert_eq!(order.customer_name, "Alan Turing");
        assert_eq!(order.order_date, "2024-03-04");
        assert_eq!(order.total_amount, 42.1);
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_normalize_system_b_is_permissive() {
        let order = normalize(RawOrder::SystemB(system_b("soon", "lots", "done")));

        assert_eq!(order.order_date, "-soon-00");
        assert!(order.total_amount.is_nan());
        assert_eq!(order.status, OrderStatus::Pending);

        for status in ["03", "+3", "3.0", "-1", " ", ""] {
            let order = normalize(RawOrder::SystemB(system_b("1/1/2024", "1", status)));
            assert_eq!(order.status, OrderStatus::Pending, "status {:?}", status);
        }

        let padded = normalize(RawOrder::SystemB(system_b("1/1/2024", "1", " 3 ")));
        assert_eq!(padded.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let raw = RawOrder::SystemB(system_b("7/1/2023", "3", "9"));
        assert_eq!(normalize(raw.clone()), normalize(raw));
    }
}
