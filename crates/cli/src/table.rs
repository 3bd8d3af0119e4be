//! Bordered table rendering for inventory listings.

use stockbook_core::ArticleId;
use stockbook_inventory::Article;

const BORDER: &str = "+----+----------------+----------------+-----------+----------+";
const HEADER: &str = "| ID | Name           | Category       | Price/u   | Stock    |";

/// Render rows as a bordered table, one line per article.
pub fn render(rows: &[(ArticleId, &Article)]) -> String {
    let mut out = String::new();
    out.push_str(BORDER);
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');

    for (id, article) in rows {
        let price = format!("{:.2}", article.price().round_dp(2));
        out.push_str(&format!(
            "| {:<2} | {:<14} | {:<14} | {:>7} € | {:<8} |\n",
            id.get(),
            article.name(),
            article.category(),
            price,
            article.stock()
        ));
    }

    out.push_str(BORDER);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockbook_inventory::Inventory;

    #[test]
    fn renders_padded_rows_between_borders() {
        let mut inventory = Inventory::new();
        inventory.add("Widget", "Tools", Decimal::new(999, 2), 10).unwrap();

        let table = render(&inventory.list());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], BORDER);
        assert_eq!(lines[1], HEADER);
        assert_eq!(lines[3], "| 1  | Widget         | Tools          |    9.99 € | 10       |");
        assert_eq!(lines[4], BORDER);
    }

    #[test]
    fn header_and_rows_share_column_widths() {
        let mut inventory = Inventory::new();
        inventory.add("Bolt", "Hardware", Decimal::new(1234, 1), 0).unwrap();

        let table = render(&inventory.list());
        let widths: Vec<_> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == BORDER.len()), "{table}");
    }
}
