//! Error handling foundation for the booking site.
//!
//! Each module owns a domain error enum (`BookingError`, `CartError`,
//! `ContactError`). Code that reports across layers wraps those in a
//! rootcause `Report` through the alias below, so callers can attach their
//! own context with `.context()` without losing the original cause.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartError;

    #[test]
    fn report_keeps_domain_error_message() {
        let result: Result<(), CartError> = Err(CartError::Corrupt {
            reason: "expected value at line 1".to_string(),
        }
        .into());
        let report = result.expect_err("should be an error");
        assert!(report.to_string().contains("cart data is corrupt"));
    }
}
