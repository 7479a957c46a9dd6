//! Two- and three-dimensional real vectors on top of nalgebra.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

/// A real vector of dimension `D`.
///
/// `*` is overloaded twice: with an `f64` it scales, with another vector it is
/// the dot product.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RVector<const D: usize>(SVector<f64, D>);

/// Vector in the plane.
pub type R2Vector = RVector<2>;
/// Vector in space.
pub type R3Vector = RVector<3>;

impl<const D: usize> RVector<D> {
    /// Wraps an nalgebra vector.
    pub fn from_svector(inner: SVector<f64, D>) -> Self {
        Self(inner)
    }

    /// Borrows the underlying nalgebra vector.
    pub fn as_svector(&self) -> &SVector<f64, D> {
        &self.0
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Orders two vectors by length. Equality stays component-wise, so two
    /// different vectors of the same length compare `Equal` here but `!=`.
    pub fn cmp_norm(&self, other: &Self) -> Option<Ordering> {
        self.norm().partial_cmp(&other.norm())
    }
}

impl RVector<2> {
    /// Creates `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self(SVector::<f64, 2>::new(x, y))
    }

    /// First component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Second component.
    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl RVector<3> {
    /// Creates `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(SVector::<f64, 3>::new(x, y, z))
    }

    /// First component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Second component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Third component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Vector perpendicular to both operands.
    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }
}

impl<const D: usize> Add for RVector<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<const D: usize> Sub for RVector<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<const D: usize> Mul<f64> for RVector<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl<const D: usize> Mul for RVector<D> {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(&rhs)
    }
}

impl<const D: usize> fmt::Display for RVector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components: Vec<String> = self.0.iter().map(f64::to_string).collect();
        write!(f, "({})", components.join(", "))
    }
}
