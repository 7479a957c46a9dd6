//! Budget categories with a transaction ledger and a text spending chart.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, Result};
use crate::options::ChartOptions;

const TITLE_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 23;
const AMOUNT_WIDTH: usize = 7;

/// A single deposit (positive) or withdrawal (negative).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Signed amount; withdrawals are negative.
    pub amount: f64,
    /// Free-form note shown in the ledger.
    pub description: String,
}

/// A named budget category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    ledger: Vec<LedgerEntry>,
}

impl Category {
    /// Creates an empty category.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    /// Category name, used as the ledger title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transactions in the order they were recorded.
    pub fn ledger(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Records a deposit.
    pub fn deposit<S: Into<String>>(&mut self, amount: f64, description: S) {
        self.ledger.push(LedgerEntry {
            amount,
            description: description.into(),
        });
    }

    /// Records a withdrawal. Leaves the ledger untouched when funds are short.
    pub fn withdraw<S: Into<String>>(&mut self, amount: f64, description: S) -> Result<()> {
        if !self.check_funds(amount) {
            debug!(
                "declined withdrawal of {amount:.2} from `{}` (balance {:.2})",
                self.name,
                self.balance()
            );
            return Err(ExerciseError::InsufficientFunds {
                category: self.name.clone(),
                requested: amount,
                available: self.balance(),
            });
        }
        self.ledger.push(LedgerEntry {
            amount: -amount,
            description: description.into(),
        });
        Ok(())
    }

    /// Sum of every ledger entry.
    pub fn balance(&self) -> f64 {
        self.ledger.iter().map(|entry| entry.amount).sum()
    }

    /// Whether `amount` can be taken out without going negative.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.balance()
    }

    /// Moves `amount` into `destination`, recording both sides.
    pub fn transfer(&mut self, amount: f64, destination: &mut Category) -> Result<()> {
        self.withdraw(amount, format!("Transfer to {}", destination.name))?;
        destination.deposit(amount, format!("Transfer from {}", self.name));
        Ok(())
    }

    /// Total withdrawn, transfers included.
    pub fn spent(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|entry| entry.amount < 0.0)
            .map(|entry| entry.amount.abs())
            .sum()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:*^TITLE_WIDTH$}", self.name)?;
        for entry in &self.ledger {
            let description: String = entry.description.chars().take(DESCRIPTION_WIDTH).collect();
            let amount: String = format!("{:.2}", entry.amount)
                .chars()
                .take(AMOUNT_WIDTH)
                .collect();
            writeln!(f, "{description:<DESCRIPTION_WIDTH$}{amount:>AMOUNT_WIDTH$}")?;
        }
        write!(f, "Total: {:.2}", self.balance())
    }
}

/// Bar chart of each category's share of total spending, in 10% steps.
pub fn create_spend_chart(categories: &[&Category]) -> String {
    render_spend_chart(categories, &ChartOptions::default())
}

/// Spending chart with a custom title and row step.
pub fn render_spend_chart(categories: &[&Category], options: &ChartOptions) -> String {
    let step = options.step.max(1);
    let spent: Vec<f64> = categories.iter().map(|category| category.spent()).collect();
    let total: f64 = spent.iter().sum();
    let percentages: Vec<u32> = spent
        .iter()
        .map(|&amount| {
            if total == 0.0 {
                0
            } else {
                // Truncation toward zero, then down to the step.
                ((amount / total * 100.0) as u32 / step) * step
            }
        })
        .collect();

    let mut lines = vec![options.title.clone()];
    for level in (0..=100).rev().step_by(step as usize) {
        let bars: String = percentages
            .iter()
            .map(|&pct| if pct >= level { " o " } else { "   " })
            .collect();
        lines.push(format!("{level:>3}|{bars} "));
    }
    lines.push(format!("    {}-", "---".repeat(categories.len())));

    let names: Vec<Vec<char>> = categories
        .iter()
        .map(|category| category.name.chars().collect())
        .collect();
    let tallest = names.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..tallest {
        let letters: String = names
            .iter()
            .map(|name| match name.get(row) {
                Some(letter) => format!(" {letter} "),
                None => "   ".to_string(),
            })
            .collect();
        lines.push(format!("    {letters} "));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn withdrawals_require_funds() {
        let mut food = Category::new("Food");
        food.deposit(100.0, "initial deposit");
        assert!(food.withdraw(40.0, "groceries").is_ok());
        let err = food.withdraw(60.01, "feast").unwrap_err();
        assert!(matches!(err, ExerciseError::InsufficientFunds { .. }));
        assert_eq!(food.ledger().len(), 2);
        assert_relative_eq!(food.balance(), 60.0);
        assert!(food.check_funds(60.0));
        assert!(!food.check_funds(60.5));
    }

    #[test]
    fn transfer_records_both_sides() {
        let mut food = Category::new("Food");
        let mut clothing = Category::new("Clothing");
        food.deposit(100.0, "deposit");
        food.transfer(30.0, &mut clothing).unwrap();
        assert_eq!(food.ledger()[1].description, "Transfer to Clothing");
        assert_eq!(clothing.ledger()[0].description, "Transfer from Food");
        assert_relative_eq!(clothing.balance(), 30.0);

        assert!(clothing.transfer(31.0, &mut food).is_err());
        assert_eq!(clothing.ledger().len(), 1);
        assert_eq!(food.ledger().len(), 2);
    }

    #[test]
    fn display_truncates_long_fields() {
        let mut savings = Category::new("Savings");
        savings.deposit(123_456.789, "bonus");
        savings.deposit(1.0, "a description that does not fit");
        assert_eq!(
            savings.to_string(),
            "***********Savings************\n\
             bonus                  123456.\n\
             a description that does   1.00\n\
             Total: 123457.79"
        );
    }

    #[test]
    fn chart_without_spending_puts_everyone_at_zero() {
        let auto = Category::new("Auto");
        let expected = [
            "Percentage spent by category",
            "100|    ",
            " 90|    ",
            " 80|    ",
            " 70|    ",
            " 60|    ",
            " 50|    ",
            " 40|    ",
            " 30|    ",
            " 20|    ",
            " 10|    ",
            "  0| o  ",
            "    ----",
            "     A  ",
            "     u  ",
            "     t  ",
            "     o  ",
        ];
        assert_eq!(create_spend_chart(&[&auto]), expected.join("\n"));
    }

    #[test]
    fn chart_step_controls_rows() {
        let mut a = Category::new("A");
        let mut b = Category::new("B");
        a.deposit(10.0, "");
        b.deposit(10.0, "");
        a.withdraw(3.0, "").unwrap();
        b.withdraw(1.0, "").unwrap();
        let options = ChartOptions::default().with_title("Spent").with_step(25);
        assert_eq!(
            render_spend_chart(&[&a, &b], &options),
            "Spent\n100|       \n 75| o     \n 50| o     \n 25| o  o  \n  0| o  o  \n    -------\n     A  B  "
        );
    }
}
