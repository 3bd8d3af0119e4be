//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use crate::error::DomainError;

/// Identifier of an article in the inventory.
///
/// Issued by the inventory from a counter starting at 1; never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArticleId(u64);

impl ArticleId {
    /// The first identifier an empty inventory hands out.
    pub const FIRST: ArticleId = ArticleId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier issued right after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ArticleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for u64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ArticleId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surrounding_whitespace() {
        assert_eq!(" 42\n".parse::<ArticleId>().unwrap(), ArticleId::new(42));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = "abc".parse::<ArticleId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn rejects_negative_numbers() {
        assert!("-1".parse::<ArticleId>().is_err());
    }

    #[test]
    fn next_is_strictly_greater() {
        assert!(ArticleId::FIRST.next() > ArticleId::FIRST);
        assert_eq!(ArticleId::FIRST.next().get(), 2);
    }
}
