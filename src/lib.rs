//! Small numeric and text-layout exercises with exact output contracts.
//!
//! The two larger pieces are
//!
//! - a fixed-width table formatter for addition and subtraction problems
//!   (`arithmetic` module), and
//! - a closed-form solver for linear and quadratic equations together with a
//!   bordered text report (`equation` and `report` modules).
//!
//! Alongside them sit a budget ledger with a spending chart (`budget`), 2D/3D
//! vectors (`vector`), rectangles and squares (`geometry`), a ball-drawing
//! simulator (`probability`) and 12-hour clock arithmetic (`clock`). The
//! modules do not depend on each other beyond the shared error type and
//! option structs.
//!
//! # Quick start
//!
//! ```
//! use arithmos::arithmetic::arrange;
//! use arithmos::equation::{Equation, EquationKind};
//! use arithmos::report::solver_report;
//!
//! let table = arrange(&["3 + 855", "988 + 40"], true);
//! assert_eq!(table, "    3      988\n+ 855    +  40\n-----    -----\n  858     1028");
//!
//! let equation = Equation::make(EquationKind::Quadratic, &[1.0, -3.0, 2.0])
//!     .expect("non-zero leading coefficient");
//! assert_eq!(equation.to_string(), "x**2 -3x +2 = 0");
//! println!("{}", solver_report(&equation));
//! ```
//!
//! Every function is pure apart from `debug!`/`trace!` records emitted through
//! the [`log`] facade; install any logger to see them.

pub mod arithmetic;
pub mod budget;
pub mod clock;
pub mod equation;
pub mod error;
pub mod geometry;
pub mod options;
pub mod probability;
pub mod report;
pub mod vector;

pub use arithmetic::{arrange, try_arrange, Problem};
pub use equation::{Analysis, Equation, EquationKind, Roots};
pub use error::{ErrorKind, ExerciseError, Result};
pub use options::{ArrangeOptions, ChartOptions, ExperimentOptions, ReportOptions};
pub use report::{render_report, solver_report};
