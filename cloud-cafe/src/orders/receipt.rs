//! Receipt record and rendering

use std::fmt;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const RULE: &str = "--------------------------------";
const NAME_WIDTH: usize = 18;

/// One printed line: quantity, item name (truncated to 18 chars), line total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: i64,
    pub name: String,
    pub line_total: Decimal,
}

impl ReceiptLine {
    pub fn new(quantity: i64, name: &str, line_total: Decimal) -> Self {
        let name = name.chars().take(NAME_WIDTH).collect();
        Self {
            quantity,
            name,
            line_total,
        }
    }
}

/// Finalized-transaction record handed back by checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub timestamp: DateTime<Local>,
    pub customer: String,
    pub table_id: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "          CLOUD CAFÉ")?;
        writeln!(f, "       Los Baños, Laguna")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "DATE: {}", self.timestamp.format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "CUST: {}", self.customer.to_uppercase())?;
        writeln!(f, "SEAT: {}", self.table_id.to_uppercase())?;
        writeln!(f, "{RULE}")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<2} {:<18} {:>6}",
                line.quantity, line.name, line.line_total
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "TOTAL: ₱{}", self.total)?;
        writeln!(f, "{RULE}")?;
        write!(f, "THANK YOU!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_truncated_to_eighteen_chars() {
        let line = ReceiptLine::new(1, "Cirrus Fog Americano", Decimal::new(14500, 2));
        assert_eq!(line.name, "Cirrus Fog America");
        assert_eq!(line.name.chars().count(), 18);
    }

    #[test]
    fn render_contains_header_lines_and_total() {
        let receipt = Receipt {
            timestamp: Local::now(),
            customer: "Antoni VIP".to_string(),
            table_id: "VIP 1".to_string(),
            lines: vec![
                ReceiptLine::new(2, "Creamy Cumulatte", Decimal::new(33000, 2)),
                ReceiptLine::new(1, "Zest Muffin", Decimal::new(15000, 2)),
            ],
            subtotal: Decimal::new(48000, 2),
            discount: Decimal::new(4800, 2),
            total: Decimal::new(43200, 2),
        };

        let text = receipt.to_string();
        assert!(text.contains("CUST: ANTONI VIP"));
        assert!(text.contains("SEAT: VIP 1"));
        assert!(text.contains("2  Creamy Cumulatte   330.00"));
        assert!(text.contains("TOTAL: ₱432.00"));
    }
}
