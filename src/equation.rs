//! Linear and quadratic equations with closed-form roots and shape analysis.
//!
//! Coefficients are supplied highest power first, as they are written, and
//! stored indexed by power. Equations are immutable once built; a quadratic
//! caches its discriminant at construction.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, Result};

/// The supported equation families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    Linear,
    Quadratic,
}

impl EquationKind {
    /// Highest exponent of the polynomial.
    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
        }
    }

    /// Human-readable family name, used as the report title.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear Equation",
            Self::Quadratic => "Quadratic Equation",
        }
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Real roots of an equation, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Roots {
    /// No real roots.
    None,
    /// A single (possibly double) root.
    Single(f64),
    /// Two distinct roots; `x1` uses `+√Δ`, `x2` uses `-√Δ`.
    Pair(f64, f64),
}

impl Roots {
    /// Number of distinct real roots.
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Pair(..) => 2,
        }
    }

    /// Whether there are no real roots.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Roots in reporting order.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Self::None => Vec::new(),
            Self::Single(x) => vec![x],
            Self::Pair(x1, x2) => vec![x1, x2],
        }
    }
}

/// Whether a parabola opens up or down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concavity {
    Upwards,
    Downwards,
}

impl fmt::Display for Concavity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upwards => f.write_str("upwards"),
            Self::Downwards => f.write_str("downwards"),
        }
    }
}

/// Whether a parabola's vertex is its lowest or highest point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extremum {
    Min,
    Max,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// Descriptive analysis of an equation's graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis {
    Line {
        slope: f64,
        intercept: f64,
    },
    Parabola {
        x: f64,
        y: f64,
        #[serde(rename = "min_max")]
        extremum: Extremum,
        concavity: Concavity,
    },
}

/// `a·x + b = 0` with `a != 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Linear {
    coefficients: [f64; 2],
}

impl Linear {
    /// Coefficients indexed by power: `[b, a]`.
    pub fn coefficients(&self) -> &[f64; 2] {
        &self.coefficients
    }

    /// The single root `-b / a`.
    pub fn solve(&self) -> Roots {
        let [b, a] = self.coefficients;
        Roots::Single(-b / a)
    }

    /// Slope and y-intercept of the line.
    pub fn analyze(&self) -> Analysis {
        let [intercept, slope] = self.coefficients;
        Analysis::Line { slope, intercept }
    }
}

/// `a·x² + b·x + c = 0` with `a != 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadratic {
    coefficients: [f64; 3],
    discriminant: f64,
}

impl Quadratic {
    fn new(coefficients: [f64; 3]) -> Self {
        let discriminant = discriminant_of(&coefficients);
        Self {
            coefficients,
            discriminant,
        }
    }

    /// Coefficients indexed by power: `[c, b, a]`.
    pub fn coefficients(&self) -> &[f64; 3] {
        &self.coefficients
    }

    /// `b² − 4ac`, as computed when the equation was built.
    pub fn discriminant(&self) -> f64 {
        self.discriminant
    }

    /// Recomputes `b² − 4ac` from the coefficients. Always equals
    /// [`discriminant`](Self::discriminant).
    pub fn recompute_discriminant(&self) -> f64 {
        discriminant_of(&self.coefficients)
    }

    /// Roots from the quadratic formula; none when the discriminant is negative.
    pub fn solve(&self) -> Roots {
        let [_, b, a] = self.coefficients;
        let delta = self.discriminant;
        if delta < 0.0 {
            Roots::None
        } else if delta == 0.0 {
            Roots::Single(-b / (2.0 * a))
        } else {
            let root = delta.sqrt();
            Roots::Pair((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
        }
    }

    /// Vertex of the parabola and the direction it opens.
    pub fn analyze(&self) -> Analysis {
        let [c, b, a] = self.coefficients;
        let x = -b / (2.0 * a);
        let y = a * x.powi(2) + b * x + c;
        let (extremum, concavity) = if a > 0.0 {
            (Extremum::Min, Concavity::Upwards)
        } else {
            (Extremum::Max, Concavity::Downwards)
        };
        Analysis::Parabola {
            x,
            y,
            extremum,
            concavity,
        }
    }
}

fn discriminant_of(coefficients: &[f64; 3]) -> f64 {
    let [c, b, a] = *coefficients;
    b.powi(2) - 4.0 * a * c
}

/// A validated linear or quadratic equation.
#[derive(Clone, Debug, PartialEq)]
pub enum Equation {
    Linear(Linear),
    Quadratic(Quadratic),
}

impl Equation {
    /// Builds an equation of `kind` from coefficients listed highest power first.
    ///
    /// Fails when the number of coefficients is not `degree + 1`, when any
    /// coefficient is NaN or infinite, or when the leading coefficient is zero.
    pub fn make(kind: EquationKind, coefficients: &[f64]) -> Result<Self> {
        let equation = match (kind, coefficients) {
            (EquationKind::Linear, &[a, b]) => Self::Linear(Linear {
                coefficients: [b, a],
            }),
            (EquationKind::Quadratic, &[a, b, c]) => Self::Quadratic(Quadratic::new([c, b, a])),
            _ => {
                debug!(
                    "{kind} rejected: {} coefficients supplied",
                    coefficients.len()
                );
                return Err(ExerciseError::coefficient_count(kind, coefficients.len()));
            }
        };
        if let Some((index, &value)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            debug!("{kind} rejected: coefficient {index} is {value}");
            return Err(ExerciseError::NonFiniteCoefficient { index, value });
        }
        if coefficients[0] == 0.0 {
            debug!("{kind} rejected: leading coefficient is zero");
            return Err(ExerciseError::ZeroLeadingCoefficient);
        }
        debug!("built {kind}: {equation}");
        Ok(equation)
    }

    /// Shorthand for `a·x + b = 0`.
    pub fn linear(a: f64, b: f64) -> Result<Self> {
        Self::make(EquationKind::Linear, &[a, b])
    }

    /// Shorthand for `a·x² + b·x + c = 0`.
    pub fn quadratic(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::make(EquationKind::Quadratic, &[a, b, c])
    }

    /// Family this equation belongs to.
    pub fn kind(&self) -> EquationKind {
        match self {
            Self::Linear(_) => EquationKind::Linear,
            Self::Quadratic(_) => EquationKind::Quadratic,
        }
    }

    /// Highest exponent, 1 or 2.
    pub fn degree(&self) -> usize {
        self.kind().degree()
    }

    /// Coefficients indexed by power, lowest first.
    pub fn coefficients(&self) -> &[f64] {
        match self {
            Self::Linear(eq) => eq.coefficients().as_slice(),
            Self::Quadratic(eq) => eq.coefficients().as_slice(),
        }
    }

    /// Coefficient of `x^power`, if the equation has that term.
    pub fn coefficient(&self, power: usize) -> Option<f64> {
        self.coefficients().get(power).copied()
    }

    /// Cached discriminant for quadratics.
    pub fn discriminant(&self) -> Option<f64> {
        match self {
            Self::Linear(_) => None,
            Self::Quadratic(eq) => Some(eq.discriminant()),
        }
    }

    /// Real roots in reporting order.
    pub fn solve(&self) -> Roots {
        match self {
            Self::Linear(eq) => eq.solve(),
            Self::Quadratic(eq) => eq.solve(),
        }
    }

    /// Slope and intercept for lines, vertex and concavity for parabolas.
    pub fn analyze(&self) -> Analysis {
        match self {
            Self::Linear(eq) => eq.analyze(),
            Self::Quadratic(eq) => eq.analyze(),
        }
    }
}

impl fmt::Display for Equation {
    /// Canonical form: non-zero terms from the highest power down, unit
    /// coefficients elided, e.g. `x**2 -3x +2 = 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients()
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, coefficient)| **coefficient != 0.0)
            .map(|(power, &coefficient)| render_term(coefficient, power))
            .collect();
        let joined = terms.join(" ");
        write!(f, "{} = 0", joined.strip_prefix('+').unwrap_or(&joined))
    }
}

fn render_term(coefficient: f64, power: usize) -> String {
    let magnitude = if power > 0 && coefficient.abs() == 1.0 {
        let sign = if coefficient > 0.0 { "+" } else { "-" };
        sign.to_string()
    } else {
        format!("{coefficient:+}")
    };
    match power {
        0 => magnitude,
        1 => format!("{magnitude}x"),
        n => format!("{magnitude}x**{n}"),
    }
}
