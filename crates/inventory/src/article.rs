use rust_decimal::Decimal;

use stockbook_core::{DomainError, DomainResult};

pub(crate) const PRICE_RULE: &str = "price must be greater than 0";
pub(crate) const STOCK_RULE: &str = "stock must be greater than or equal to 0";

/// A catalog entry held by the [`Inventory`](crate::Inventory).
///
/// Fields are private; price and stock only change through the validating
/// setters, so `price > 0` and `stock >= 0` hold for every live value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    name: String,
    category: String,
    price: Decimal,
    stock: i64,
}

impl Article {
    /// Build an article, routing price and stock through their setters.
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        stock: i64,
    ) -> DomainResult<Self> {
        let mut article = Self {
            name: name.into(),
            category: category.into(),
            price: Decimal::ONE,
            stock: 0,
        };
        article.set_price(price)?;
        article.set_stock(stock)?;
        Ok(article)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_price(&mut self, price: Decimal) -> DomainResult<()> {
        if price <= Decimal::ZERO {
            return Err(DomainError::validation(PRICE_RULE));
        }
        self.price = price;
        Ok(())
    }

    pub fn set_stock(&mut self, stock: i64) -> DomainResult<()> {
        if stock < 0 {
            return Err(DomainError::validation(STOCK_RULE));
        }
        self.stock = stock;
        Ok(())
    }

    /// One-line summary: `name | category | 9.99 € | stock`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Article {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} | {} | {:.2} € | {}",
            self.name,
            self.category,
            self.price.round_dp(2),
            self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Article {
        Article::new("Widget", "Tools", Decimal::new(999, 2), 10).unwrap()
    }

    #[test]
    fn new_rejects_non_positive_price() {
        for price in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let err = Article::new("Widget", "Tools", price, 1).unwrap_err();
            assert_eq!(err, DomainError::validation(PRICE_RULE));
        }
    }

    #[test]
    fn new_rejects_negative_stock() {
        let err = Article::new("Widget", "Tools", Decimal::ONE, -1).unwrap_err();
        assert_eq!(err, DomainError::validation(STOCK_RULE));
    }

    #[test]
    fn set_price_rejects_zero_and_negative_and_keeps_prior_value() {
        let mut article = widget();

        assert!(article.set_price(Decimal::ZERO).is_err());
        assert!(article.set_price(Decimal::new(-5, 0)).is_err());
        assert_eq!(article.price(), Decimal::new(999, 2));

        article.set_price(Decimal::new(1250, 2)).unwrap();
        assert_eq!(article.price(), Decimal::new(1250, 2));
    }

    #[test]
    fn set_stock_accepts_zero_and_rejects_negative() {
        let mut article = widget();

        let err = article.set_stock(-1).unwrap_err();
        assert_eq!(err.reason(), Some(STOCK_RULE));
        assert_eq!(article.stock(), 10);

        article.set_stock(0).unwrap();
        assert_eq!(article.stock(), 0);
    }

    #[test]
    fn name_and_category_setters_are_unconstrained() {
        let mut article = widget();
        article.set_name("");
        article.set_category("Misc");
        assert_eq!(article.name(), "");
        assert_eq!(article.category(), "Misc");
    }

    #[test]
    fn render_formats_price_with_two_decimals() {
        assert_eq!(widget().render(), "Widget | Tools | 9.99 € | 10");

        let whole = Article::new("Bolt", "Hardware", Decimal::new(3, 0), 0).unwrap();
        assert_eq!(whole.render(), "Bolt | Hardware | 3.00 € | 0");
    }
}
