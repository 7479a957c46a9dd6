//! Configuration structures for the formatters and the simulator.
//!
//! Every entry point has a variant that uses [`Default`] options, so these only
//! need to be touched when a caller wants a different table width, a tighter
//! limit, or a reproducible seed.

/// Largest per-operand digit count whose values always fit an `i64`.
pub const MAX_OPERAND_DIGITS: usize = 18;

/// Limits and spacing used by the problem table formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrangeOptions {
    /// Maximum number of problems accepted in one table.
    pub max_problems: usize,
    /// Maximum number of digits per operand. Values outside
    /// `1..=MAX_OPERAND_DIGITS` are clamped when a problem is parsed.
    pub max_digits: usize,
    /// Number of spaces inserted between neighbouring columns.
    pub gap: usize,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        Self {
            max_problems: 5,
            max_digits: 4,
            gap: 4,
        }
    }
}

impl ArrangeOptions {
    /// Override the maximum number of problems.
    pub fn with_max_problems(mut self, max_problems: usize) -> Self {
        self.max_problems = max_problems;
        self
    }

    /// Override the per-operand digit limit, clamped to what an `i64` holds.
    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits.clamp(1, MAX_OPERAND_DIGITS);
        self
    }

    /// Override the column gap.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }
}

/// Presentation settings for the equation report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Column width every banner and centered line is laid out in.
    pub width: usize,
    /// Number of decimals printed for roots and analysis values.
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            width: 24,
            precision: 3,
        }
    }
}

impl ReportOptions {
    /// Override the report width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Override the number of decimals.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Settings for the spending chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    /// First line of the chart.
    pub title: String,
    /// Percentage step between two chart rows; must divide 100.
    pub step: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Percentage spent by category".to_string(),
            step: 10,
        }
    }
}

impl ChartOptions {
    /// Override the chart title.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Override the row step. Values that do not divide 100 fall back to 10.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = if step > 0 && 100 % step == 0 { step } else { 10 };
        self
    }
}

/// Controls a ball-drawing experiment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperimentOptions {
    /// Number of independent trials.
    pub experiments: usize,
    /// Seed for the pseudo-random generator, so runs are reproducible.
    pub seed: u64,
}

impl Default for ExperimentOptions {
    fn default() -> Self {
        Self {
            experiments: 2_000,
            seed: 0,
        }
    }
}

impl ExperimentOptions {
    /// Override the number of trials.
    pub fn with_experiments(mut self, experiments: usize) -> Self {
        self.experiments = experiments;
        self
    }

    /// Override the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_step_must_divide_one_hundred() {
        assert_eq!(ChartOptions::default().with_step(20).step, 20);
        assert_eq!(ChartOptions::default().with_step(30).step, 10);
        assert_eq!(ChartOptions::default().with_step(0).step, 10);
    }
}
