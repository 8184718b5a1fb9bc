//! 3D vector value type for positions and directions.
//!
//! `Vector3` wraps `nalgebra::Vector3<f64>` and derefs to it, so the `x`,
//! `y`, `z` fields and the rest of nalgebra's API stay reachable. The
//! inherent methods add the chaining style: mutating operations take
//! `&mut self` and return `&mut Self`:
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! v.normalize().multiply_scalar(10.0);
//! assert!((v.length() - 10.0).abs() < 1e-9);
//! assert_eq!(v.x, 6.0);
//! ```
//!
//! # Zero-length vectors
//! `normalize`, `rescale`, `angle` and `project` divide by a length. On a
//! zero-length vector they follow IEEE semantics and produce NaN, logging a
//! `debug` event. The `try_*` variants return
//! [`VectorError::Degenerate`] instead and leave their inputs untouched.
//!
//! Lengths are computed with the components scaled by the largest one, so
//! finite vectors near the ends of the f64 range don't overflow to infinity
//! or underflow to zero.

use std::fmt;
use std::ops::{self, Deref, DerefMut};

use tracing::debug;

use crate::core_types::units::{Degrees, Radians};
use crate::error::VectorError;

/// 3D vector for world positions, offsets and directions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector3(nalgebra::Vector3<f64>);

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Deref for Vector3 {
    type Target = nalgebra::Vector3<f64>;
    #[inline]
    fn deref(&self) -> &nalgebra::Vector3<f64> {
        &self.0
    }
}

impl DerefMut for Vector3 {
    #[inline]
    fn deref_mut(&mut self) -> &mut nalgebra::Vector3<f64> {
        &mut self.0
    }
}

impl Vector3 {
    /// The zero vector `(0, 0, 0)`, same as `Vector3::default()`
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along +X
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along +Y
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along +Z
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a new vector from its components
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3(nalgebra::Vector3::new(x, y, z))
    }

    // ------------------------------------------------------------------
    // Mutating operations
    // ------------------------------------------------------------------

    /// Overwrite all three components
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.0 = nalgebra::Vector3::new(x, y, z);
        self
    }

    /// Overwrite components with `other`'s current values
    #[inline]
    pub fn copy_from(&mut self, other: Vector3) -> &mut Self {
        self.0.copy_from(&other.0);
        self
    }

    /// Flip the sign of every component
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.0.neg_mut();
        self
    }

    /// Component-wise `self += v`
    #[inline]
    pub fn add(&mut self, v: Vector3) -> &mut Self {
        self.0 += v.0;
        self
    }

    /// Component-wise `self -= v`
    #[inline]
    pub fn subtract(&mut self, v: Vector3) -> &mut Self {
        self.0 -= v.0;
        self
    }

    /// Multiply every component by `s`
    #[inline]
    pub fn multiply_scalar(&mut self, s: f64) -> &mut Self {
        self.0 *= s;
        self
    }

    /// Scale to unit length, keeping the direction.
    ///
    /// A zero-length vector becomes all NaN.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            debug!(operation = "normalize", "zero-length vector, components become NaN");
        }
        self.0 /= len;
        self
    }

    /// Scale so that the length becomes `new_scale`, keeping the direction.
    ///
    /// A negative `new_scale` flips the direction. A zero-length vector
    /// becomes all NaN.
    pub fn rescale(&mut self, new_scale: f64) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            debug!(operation = "rescale", "zero-length vector, components become NaN");
        }
        // Divide first: `new_scale / len` overflows for subnormal lengths
        self.0 /= len;
        self.0 *= new_scale;
        self
    }

    /// Like [`Vector3::normalize`] but refuses a zero-length vector.
    ///
    /// # Errors
    /// [`VectorError::Degenerate`] when `self` has zero length; `self` is
    /// left unchanged.
    pub fn try_normalize(&mut self) -> Result<&mut Self, VectorError> {
        if self.is_zero() {
            return Err(VectorError::Degenerate {
                operation: "normalize",
            });
        }
        Ok(self.normalize())
    }

    /// Like [`Vector3::rescale`] but refuses a zero-length vector.
    ///
    /// # Errors
    /// [`VectorError::Degenerate`] when `self` has zero length; `self` is
    /// left unchanged.
    pub fn try_rescale(&mut self, new_scale: f64) -> Result<&mut Self, VectorError> {
        if self.is_zero() {
            return Err(VectorError::Degenerate {
                operation: "rescale",
            });
        }
        Ok(self.rescale(new_scale))
    }

    // ------------------------------------------------------------------
    // Read-only operations
    // ------------------------------------------------------------------

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    ///
    /// The components are divided by the largest absolute one before
    /// squaring, so every finite non-zero vector has a finite non-zero
    /// length.
    #[must_use]
    pub fn length(&self) -> f64 {
        let scale = self.0.amax();
        if scale == 0.0 || !scale.is_finite() {
            return self.0.norm();
        }
        (self.0 / scale).norm() * scale
    }

    /// Squared norm `x² + y² + z²`. Never takes a square root, prefer it
    /// for comparisons.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Scalar dot product `x·ox + y·oy + z·oz`
    #[inline]
    #[must_use]
    pub fn dot(&self, other: Vector3) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product `self × other`
    #[inline]
    #[must_use]
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3(self.0.cross(&other.0))
    }

    /// True when every component is exactly zero
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }

    /// True when no component is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Offset pointing from `from` to `to`, i.e. `to - from`
    #[inline]
    #[must_use]
    pub fn from_to(from: Vector3, to: Vector3) -> Vector3 {
        let mut offset = to;
        offset.subtract(from);
        offset
    }

    /// Euclidean distance between two points
    #[inline]
    #[must_use]
    pub fn distance(a: Vector3, b: Vector3) -> f64 {
        Self::from_to(a, b).length()
    }

    /// Squared distance between two points, without a square root
    #[inline]
    #[must_use]
    pub fn distance_squared(a: Vector3, b: Vector3) -> f64 {
        Self::from_to(a, b).length_squared()
    }

    /// Linear interpolation `a·(1 − t) + b·t`. `t` is not clamped, so values
    /// outside [0, 1] extrapolate along the line.
    #[inline]
    #[must_use]
    pub fn lerp(a: Vector3, b: Vector3, t: f64) -> Vector3 {
        Vector3(a.0.lerp(&b.0, t))
    }

    /// `self` scaled to unit length, without logging.
    fn unit(self) -> Vector3 {
        Vector3(self.0 / self.length())
    }

    /// Angle between `v1` and `v2`, in degrees.
    ///
    /// Both vectors are normalized first and nalgebra measures the angle
    /// between the unit vectors, clamping the cosine to [-1, 1]. NaN when
    /// either vector has zero length.
    #[must_use]
    pub fn angle(v1: Vector3, v2: Vector3) -> Degrees {
        if v1.is_zero() || v2.is_zero() {
            debug!(operation = "angle", "zero-length vector, angle is NaN");
            return Degrees::new(f64::NAN);
        }
        Radians::new(v1.unit().0.angle(&v2.unit().0)).to_degrees()
    }

    /// Like [`Vector3::angle`] but refuses zero-length input.
    ///
    /// # Errors
    /// [`VectorError::Degenerate`] when either vector has zero length.
    pub fn try_angle(v1: Vector3, v2: Vector3) -> Result<Degrees, VectorError> {
        if v1.is_zero() || v2.is_zero() {
            return Err(VectorError::Degenerate { operation: "angle" });
        }
        Ok(Self::angle(v1, v2))
    }

    /// Signed length of `v`'s shadow on `onto`: `(v · onto) / |onto|`
    #[inline]
    #[must_use]
    pub fn scalar_projection(v: Vector3, onto: Vector3) -> f64 {
        v.dot(onto.unit())
    }

    /// Vector projection of `v` onto `onto`.
    ///
    /// The result points along `onto` (or against it when the scalar
    /// projection is negative) and its length is the scalar projection.
    /// Neither argument is modified. NaN components when `onto` has zero
    /// length.
    #[must_use]
    pub fn project(v: Vector3, onto: Vector3) -> Vector3 {
        if onto.is_zero() {
            debug!(operation = "project", "zero-length target, components become NaN");
        }
        let mut direction = onto.unit();
        let scalar = v.dot(direction);
        direction.multiply_scalar(scalar);
        direction
    }

    /// Like [`Vector3::project`] but refuses a zero-length `onto`.
    ///
    /// # Errors
    /// [`VectorError::Degenerate`] when `onto` has zero length.
    pub fn try_project(v: Vector3, onto: Vector3) -> Result<Vector3, VectorError> {
        if onto.is_zero() {
            return Err(VectorError::Degenerate {
                operation: "project",
            });
        }
        Ok(Self::project(v, onto))
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3(v)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// OPERATORS (value-returning counterparts of the mutating methods)
// ============================================================================

impl ops::Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 + rhs.0)
    }
}

impl ops::Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 - rhs.0)
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3(-self.0)
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3(self.0 * s)
    }
}

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl ops::Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, s: f64) -> Vector3 {
        Vector3(self.0 / s)
    }
}

impl ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.0 += rhs.0;
    }
}

impl ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.0 -= rhs.0;
    }
}

impl ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, s: f64) {
        self.0 *= s;
    }
}

// ============================================================================
// TOLERANCE COMPARISONS (delegated to nalgebra's impls)
// ============================================================================

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        <nalgebra::Vector3<f64> as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        <nalgebra::Vector3<f64> as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        approx::RelativeEq::relative_eq(&self.0, &other.0, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl approx::UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        <nalgebra::Vector3<f64> as approx::UlpsEq>::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.0, &other.0, epsilon, max_ulps)
    }
}
