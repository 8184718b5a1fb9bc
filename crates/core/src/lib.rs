//! Vector3 Core Library
//!
//! A small 3D vector value type with the usual geometric operations:
//! arithmetic, normalization, dot and cross products, projection, the angle
//! between two vectors, distance and interpolation.
//!
//! ## Conventions
//!
//! - Components are `f64`.
//! - Mutating operations take `&mut self` and return `&mut Self` for chaining;
//!   the operator traits (`+`, `-`, `*`, `/`) return new values instead.
//! - Angles come back as [`Degrees`].
//! - Zero-length input to `normalize`, `rescale`, `angle` or `project` yields
//!   NaN. Use the `try_*` variants to get a [`VectorError`] instead.
//!
//! ## Storage and features
//!
//! - `Vector3` wraps `nalgebra::Vector3<f64>` and derefs to it
//! - `approx` (default): `AbsDiffEq`, `RelativeEq` and `UlpsEq` impls

// Core types and utilities
pub mod core_types;

pub mod error;

// Re-export core types
pub use core_types::{Degrees, Radians, Vector3};
pub use error::VectorError;
