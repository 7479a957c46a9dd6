use thiserror::Error;

use crate::equation::EquationKind;

/// Broad classification of every failure the crate can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of supplied values.
    Arity,
    /// A value that should be numeric is not.
    Type,
    /// A well-typed value outside the accepted range.
    Value,
}

/// Unified error type for `arithmos` operations.
#[derive(Debug, Error, PartialEq)]
pub enum ExerciseError {
    /// Raised when more problems are supplied than the formatter accepts.
    #[error("Error: Too many problems.")]
    TooManyProblems {
        /// The configured maximum.
        limit: usize,
        /// The number of problems supplied.
        found: usize,
    },

    /// Raised when a problem string is not `<left> <op> <right>`.
    #[error("Error: Problem `{problem}` must look like '<left> <op> <right>'.")]
    MalformedProblem { problem: String },

    /// Raised when a problem uses anything other than addition or subtraction.
    #[error("Error: Operator must be '+' or '-'.")]
    UnsupportedOperator { operator: String },

    /// Raised when an operand contains anything other than ASCII digits.
    #[error("Error: Numbers must only contain digits.")]
    NonNumericOperand { operand: String },

    /// Raised when an operand has more digits than the formatter allows.
    #[error("Error: Numbers cannot be more than {} digits.", spelled(.limit))]
    OperandTooLarge { operand: String, limit: usize },

    /// Raised when an equation receives the wrong number of coefficients.
    #[error("'{kind}' takes {expected} coefficients but {found} were given")]
    CoefficientCount {
        kind: EquationKind,
        expected: usize,
        found: usize,
    },

    /// Raised when a coefficient is NaN or infinite.
    #[error("coefficient at position {index} must be a finite number, found {value}")]
    NonFiniteCoefficient { index: usize, value: f64 },

    /// Raised when the highest-degree coefficient is zero.
    #[error("highest degree coefficient must be different from zero")]
    ZeroLeadingCoefficient,

    /// Raised when a withdrawal or transfer exceeds the available balance.
    #[error("insufficient funds in `{category}`: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds {
        category: String,
        requested: f64,
        available: f64,
    },

    /// Raised when a clock reading or duration cannot be parsed.
    #[error("cannot read `{input}` as {expected}")]
    InvalidTime {
        input: String,
        expected: &'static str,
    },

    /// Raised when a clock reading has the wrong number of fields.
    #[error("`{input}` must have the form {expected}")]
    MalformedTime {
        input: String,
        expected: &'static str,
    },

    /// Raised when a weekday name is not recognised.
    #[error("unknown day of the week `{0}`")]
    UnknownWeekday(String),

    /// Raised when a simulation parameter is out of range.
    #[error("{parameter} must be positive")]
    NonPositiveParameter { parameter: &'static str },
}

impl ExerciseError {
    /// Helper to format a [`CoefficientCount`](ExerciseError::CoefficientCount) error.
    pub fn coefficient_count(kind: EquationKind, found: usize) -> Self {
        Self::CoefficientCount {
            kind,
            expected: kind.degree() + 1,
            found,
        }
    }

    /// Helper for clock parsing failures.
    pub fn invalid_time(input: &str, expected: &'static str) -> Self {
        Self::InvalidTime {
            input: input.to_string(),
            expected,
        }
    }

    /// Helper for clock readings with missing or extra fields.
    pub fn malformed_time(input: &str, expected: &'static str) -> Self {
        Self::MalformedTime {
            input: input.to_string(),
            expected,
        }
    }

    /// Classifies the error into the arity / type / value taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedProblem { .. }
            | Self::CoefficientCount { .. }
            | Self::MalformedTime { .. } => ErrorKind::Arity,
            Self::NonNumericOperand { .. }
            | Self::NonFiniteCoefficient { .. }
            | Self::InvalidTime { .. } => ErrorKind::Type,
            Self::TooManyProblems { .. }
            | Self::UnsupportedOperator { .. }
            | Self::OperandTooLarge { .. }
            | Self::ZeroLeadingCoefficient
            | Self::InsufficientFunds { .. }
            | Self::UnknownWeekday(_)
            | Self::NonPositiveParameter { .. } => ErrorKind::Value,
        }
    }
}

fn spelled(n: &usize) -> String {
    const WORDS: [&str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    WORDS
        .get(*n)
        .map(|word| word.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ExerciseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_limit_is_spelled_out() {
        let err = ExerciseError::OperandTooLarge {
            operand: "12345".into(),
            limit: 4,
        };
        assert_eq!(
            err.to_string(),
            "Error: Numbers cannot be more than four digits."
        );

        let err = ExerciseError::OperandTooLarge {
            operand: "1".repeat(13),
            limit: 12,
        };
        assert_eq!(
            err.to_string(),
            "Error: Numbers cannot be more than 12 digits."
        );
    }

    #[test]
    fn coefficient_count_reports_expected_arity() {
        let err = ExerciseError::coefficient_count(EquationKind::Quadratic, 2);
        assert_eq!(err.kind(), ErrorKind::Arity);
        assert_eq!(
            err.to_string(),
            "'Quadratic Equation' takes 3 coefficients but 2 were given"
        );
    }
}
