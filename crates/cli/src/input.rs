//! Parsing of raw console answers into domain values.

use std::io;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use stockbook_core::ArticleId;

/// Failure to obtain a usable answer from the user.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("price must be a decimal number using '.' as separator (got '{0}')")]
    InvalidPrice(String),

    #[error("stock must be a whole number (got '{0}')")]
    InvalidStock(String),

    #[error("the ID must be a number (got '{0}')")]
    InvalidId(String),

    /// The input stream closed while a prompt was waiting.
    #[error("input closed")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn parse_price(text: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(text.trim()).map_err(|_| InputError::InvalidPrice(text.trim().to_string()))
}

pub fn parse_stock(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidStock(text.trim().to_string()))
}

pub fn parse_id(text: &str) -> Result<ArticleId, InputError> {
    text.parse::<ArticleId>()
        .map_err(|_| InputError::InvalidId(text.trim().to_string()))
}

/// Blank answers mean "keep the current value".
pub fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() { None } else { Some(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_dot_decimals() {
        assert_eq!(parse_price("9.99").unwrap(), Decimal::new(999, 2));
        assert_eq!(parse_price(" 12 ").unwrap(), Decimal::new(12, 0));
    }

    #[test]
    fn price_rejects_comma_separator() {
        assert!(matches!(parse_price("9,99"), Err(InputError::InvalidPrice(s)) if s == "9,99"));
    }

    #[test]
    fn stock_keeps_sign_for_domain_validation() {
        assert_eq!(parse_stock("-1").unwrap(), -1);
        assert!(matches!(parse_stock("1.5"), Err(InputError::InvalidStock(_))));
    }

    #[test]
    fn id_must_be_unsigned() {
        assert_eq!(parse_id("3").unwrap(), ArticleId::new(3));
        assert!(matches!(parse_id("x"), Err(InputError::InvalidId(_))));
    }

    #[test]
    fn blank_means_unchanged() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("Gadget"), Some("Gadget"));
    }
}
