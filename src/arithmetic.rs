//! Right-aligned table layout for small addition and subtraction problems.
//!
//! Each problem occupies one column made of four stacked cells:
//!
//! ```text
//!     988
//! +    40
//! -------
//!    1028
//! ```
//!
//! Column width is derived from the operand digit counts only. A result that
//! carries into an extra digit is printed as is and may overflow its column.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::{ExerciseError, Result};
use crate::options::{ArrangeOptions, MAX_OPERAND_DIGITS};

/// Arithmetic operators understood by the formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Subtract => f.write_str("-"),
        }
    }
}

/// A validated `<left> <op> <right>` problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    left: String,
    operator: Operator,
    right: String,
    left_value: i64,
    right_value: i64,
}

impl Problem {
    /// Parses and validates a single problem.
    ///
    /// Checks run in a fixed order: shape, operator, digits, length. The first
    /// failing check decides the error.
    pub fn parse(text: &str, options: &ArrangeOptions) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let &[left, operator, right] = tokens.as_slice() else {
            return Err(ExerciseError::MalformedProblem {
                problem: text.to_string(),
            });
        };

        let operator = match operator {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            other => {
                return Err(ExerciseError::UnsupportedOperator {
                    operator: other.to_string(),
                })
            }
        };

        for operand in [left, right] {
            if !operand.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ExerciseError::NonNumericOperand {
                    operand: operand.to_string(),
                });
            }
        }

        let max_digits = options.max_digits.clamp(1, MAX_OPERAND_DIGITS);
        for operand in [left, right] {
            if operand.len() > max_digits {
                return Err(ExerciseError::OperandTooLarge {
                    operand: operand.to_string(),
                    limit: max_digits,
                });
            }
        }

        Ok(Self {
            left: left.to_string(),
            operator,
            right: right.to_string(),
            left_value: parse_operand(left)?,
            right_value: parse_operand(right)?,
        })
    }

    /// Left operand as written.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The operator joining the two operands.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Right operand as written.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Sum or difference of the operands.
    pub fn result(&self) -> i64 {
        self.operator.apply(self.left_value, self.right_value)
    }

    /// Column width: the longer operand plus room for the operator and a space.
    pub fn width(&self) -> usize {
        self.left.len().max(self.right.len()) + 2
    }

    /// The four cells of this problem's column: top, operator line, dashes, result.
    pub fn cells(&self) -> [String; 4] {
        let width = self.width();
        [
            format!("{:>width$}", self.left),
            format!("{}{:>inner$}", self.operator, self.right, inner = width - 1),
            "-".repeat(width),
            format!("{:>width$}", self.result()),
        ]
    }
}

impl FromStr for Problem {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, &ArrangeOptions::default())
    }
}

fn parse_operand(operand: &str) -> Result<i64> {
    // Digits only and at most MAX_OPERAND_DIGITS of them by now, so this fits an i64.
    operand
        .parse()
        .map_err(|_| ExerciseError::NonNumericOperand {
            operand: operand.to_string(),
        })
}

/// Lays out `problems` side by side, or returns the first validation
/// diagnostic in place of the table.
pub fn arrange<S: AsRef<str>>(problems: &[S], show_answers: bool) -> String {
    try_arrange(problems, show_answers, &ArrangeOptions::default())
        .unwrap_or_else(|err| err.to_string())
}

/// Typed variant of [`arrange`] with configurable limits.
pub fn try_arrange<S: AsRef<str>>(
    problems: &[S],
    show_answers: bool,
    options: &ArrangeOptions,
) -> Result<String> {
    if problems.len() > options.max_problems {
        debug!(
            "rejecting {} problems, at most {} fit in one table",
            problems.len(),
            options.max_problems
        );
        return Err(ExerciseError::TooManyProblems {
            limit: options.max_problems,
            found: problems.len(),
        });
    }

    let parsed = problems
        .iter()
        .map(|text| Problem::parse(text.as_ref(), options))
        .collect::<Result<Vec<_>>>()
        .map_err(|err| {
            debug!("problem table rejected: {err:?}");
            err
        })?;

    let gap = " ".repeat(options.gap);
    let mut rows: [String; 4] = Default::default();
    for (index, problem) in parsed.iter().enumerate() {
        trace!("column {index}: width {}", problem.width());
        for (row, cell) in rows.iter_mut().zip(problem.cells()) {
            if index > 0 {
                row.push_str(&gap);
            }
            row.push_str(&cell);
        }
    }

    let visible = if show_answers { 4 } else { 3 };
    Ok(rows[..visible].join("\n"))
}
