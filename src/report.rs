//! Fixed-width text report for a solved equation.
//!
//! ```text
//!
//! ---Quadratic Equation---
//!
//!     x**2 +2x +1 = 0
//!
//! -------Solutions--------
//!
//!        x = -1.000
//!
//! --------Details---------
//!
//! concavity = upwards
//! min = (-1.000, 0.000)
//! ```

use std::fmt;

use crate::equation::{Analysis, Equation, Roots};
use crate::options::ReportOptions;

/// Solves and analyzes `equation` and renders the default 24-column report.
pub fn solver_report(equation: &Equation) -> String {
    render_report(equation, &ReportOptions::default())
}

/// Renders the report with custom width and precision.
pub fn render_report(equation: &Equation, options: &ReportOptions) -> String {
    Report::new(equation, options).to_string()
}

/// Lazily formatted report; rendering happens in [`fmt::Display`].
#[derive(Clone, Debug)]
pub struct Report<'a> {
    equation: &'a Equation,
    options: &'a ReportOptions,
}

impl<'a> Report<'a> {
    /// Wraps an equation for rendering with `options`.
    pub fn new(equation: &'a Equation, options: &'a ReportOptions) -> Self {
        Self { equation, options }
    }

    fn root_lines(&self) -> Vec<String> {
        let precision = self.options.precision;
        match self.equation.solve() {
            Roots::None => vec!["No real roots".to_string()],
            Roots::Single(x) => vec![format!("x = {:+.precision$}", tidy(x))],
            Roots::Pair(x1, x2) => vec![
                format!("x1 = {:+.precision$}", tidy(x1)),
                format!("x2 = {:+.precision$}", tidy(x2)),
            ],
        }
    }

    fn detail_lines(&self) -> Vec<String> {
        let precision = self.options.precision;
        match self.equation.analyze() {
            Analysis::Line { slope, intercept } => vec![
                aligned("slope = ", slope, self.options),
                aligned("y-intercept = ", intercept, self.options),
            ],
            Analysis::Parabola {
                x,
                y,
                extremum,
                concavity,
            } => vec![
                format!("concavity = {concavity}"),
                format!(
                    "{extremum} = ({:.precision$}, {:.precision$})",
                    tidy(x),
                    tidy(y)
                ),
            ],
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.options.width;
        write!(f, "\n{:-^width$}", self.equation.kind().name())?;
        write!(f, "\n\n{:^width$}\n\n", self.equation.to_string())?;
        writeln!(f, "{:-^width$}\n", "Solutions")?;
        for line in self.root_lines() {
            writeln!(f, "{line:^width$}")?;
        }
        write!(f, "\n{:-^width$}\n\n", "Details")?;
        for line in self.detail_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Left label, value right-aligned so the line fills the report width.
fn aligned(label: &str, value: f64, options: &ReportOptions) -> String {
    let precision = options.precision;
    let field = options.width.saturating_sub(label.len());
    format!("{label}{:>field$.precision$}", tidy(value))
}

// Keeps negative zero from printing as "-0.000".
fn tidy(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
