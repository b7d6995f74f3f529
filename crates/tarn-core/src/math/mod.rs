// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar math foundation shared by every engine subsystem.
//!
//! Constants come in two parallel sets, one per floating-point precision
//! (see [`consts`]); the [`real`] alias and the [`Real`] type both follow
//! the crate-wide `double-precision` toggle, so code written against them
//! is precision-agnostic. The scalar functions are generic over the float
//! type and monomorphize to the standard routine of matching precision.
//!
//! All angular functions operate in **radians** unless the name says
//! otherwise (e.g. `degrees_to_radians`).

use num_traits::{Float, One, Signed, Zero};

pub mod consts;

/// The floating-point type used for all real-valued quantities.
///
/// Defaults to `f32`; enabling the `double-precision` feature switches
/// every consumer of this alias to `f64` in one move.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// The floating-point type used for all real-valued quantities.
///
/// The `double-precision` feature is enabled, so this is `f64`.
#[cfg(feature = "double-precision")]
pub type Real = f64;

/// The constant set matching the active [`Real`] precision.
#[cfg(not(feature = "double-precision"))]
pub use consts::f32 as real;

/// The constant set matching the active [`Real`] precision.
#[cfg(feature = "double-precision")]
pub use consts::f64 as real;

// Re-export the most used constants at module level for convenience.
pub use self::real::{DEG_TO_RAD, PI, RAD_TO_DEG, TAU};

/// Default tolerance for approximate comparisons on [`Real`] values.
pub const EPSILON: Real = real::EPSILON;

// --- Generic Ordering Helpers ---

/// Returns the smaller of two values.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of two values.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `value` from below so it never falls under `lower`.
#[inline]
pub fn clamp_bot<T: PartialOrd>(value: T, lower: T) -> T {
    max(value, lower)
}

/// Clamps `value` from above so it never rises over `upper`.
#[inline]
pub fn clamp_top<T: PartialOrd>(value: T, upper: T) -> T {
    min(value, upper)
}

/// Clamps `value` to the `[lower, upper]` range.
///
/// The upper bound is applied before the lower one, so for inverted bounds
/// (`lower > upper`) the result is `lower`.
///
/// # Examples
///
/// ```
/// use tarn_core::math::clamp;
/// assert_eq!(clamp(5, 1, 10), 5);
/// assert_eq!(clamp(-5, 1, 10), 1);
/// assert_eq!(clamp(50, 1, 10), 10);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    clamp_bot(clamp_top(value, upper), lower)
}

/// Clamps a value to the `[0, 1]` range of its own type.
///
/// # Examples
///
/// ```
/// use tarn_core::math::saturate;
/// assert_eq!(saturate(1.5f32), 1.0);
/// assert_eq!(saturate(-0.5f32), 0.0);
/// ```
#[inline]
pub fn saturate<T: Zero + One + PartialOrd>(value: T) -> T {
    clamp(value, T::zero(), T::one())
}

/// Absolute value.
///
/// Generic over signed numbers; each type dispatches to its own routine, so
/// floats never go through an implicit promotion.
#[inline]
pub fn abs<T: Signed>(value: T) -> T {
    value.abs()
}

// --- Precision-Paired Scalar Functions ---

/// Sine of an angle in radians.
#[inline]
pub fn sine<T: Float>(angle: T) -> T {
    angle.sin()
}

/// Cosine of an angle in radians.
#[inline]
pub fn cosine<T: Float>(angle: T) -> T {
    angle.cos()
}

/// Tangent of an angle in radians.
#[inline]
pub fn tangent<T: Float>(angle: T) -> T {
    angle.tan()
}

/// Arcsine, in radians.
#[inline]
pub fn arc_sine<T: Float>(value: T) -> T {
    value.asin()
}

/// Arccosine, in radians.
#[inline]
pub fn arc_cosine<T: Float>(value: T) -> T {
    value.acos()
}

/// Arctangent, in radians.
#[inline]
pub fn arc_tangent<T: Float>(value: T) -> T {
    value.atan()
}

/// Raises `base` to the power `exponent`.
#[inline]
pub fn pow<T: Float>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// Square root.
#[inline]
pub fn sqrt<T: Float>(value: T) -> T {
    value.sqrt()
}

/// Converts an angle from degrees to radians.
#[inline]
pub fn degrees_to_radians<T: Float>(degrees: T) -> T {
    degrees.to_radians()
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn radians_to_degrees<T: Float>(radians: T) -> T {
    radians.to_degrees()
}

// --- Approximate Comparisons ---

/// Performs an approximate equality comparison between two [`Real`] values
/// with a custom tolerance.
#[inline]
pub fn approx_eq_eps(a: Real, b: Real, epsilon: Real) -> bool {
    abs(a - b) < epsilon
}

/// Performs an approximate equality comparison using the module's default
/// [`EPSILON`].
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_min_max() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(max(1, 2), 2);
        assert_eq!(min(2.0, 1.5), 1.5);
        assert_eq!(max(-3.0, -4.0), -3.0);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(-5, 1, 10), 1);
        assert_eq!(clamp(50, 1, 10), 10);
    }

    #[test]
    fn test_clamp_applies_upper_bound_first() {
        // With inverted bounds the lower bound wins, because the upper bound
        // is applied first and the result then raised to the lower bound.
        assert_eq!(clamp(15, 10, 1), 10);
        assert_eq!(clamp(5, 10, 1), 10);
        assert_eq!(clamp(0, 10, 1), 10);
    }

    #[test]
    fn test_clamp_bot_and_top() {
        assert_eq!(clamp_bot(5, 8), 8);
        assert_eq!(clamp_bot(9, 8), 9);
        assert_eq!(clamp_top(5, 8), 5);
        assert_eq!(clamp_top(9, 8), 8);
    }

    #[test]
    fn test_saturate() {
        assert_eq!(saturate(1.5f32), 1.0);
        assert_eq!(saturate(-0.5f32), 0.0);
        assert_eq!(saturate(0.25f32), 0.25);
        assert_eq!(saturate(1.5f64), 1.0);
        assert_eq!(saturate(2), 1);
        assert_eq!(saturate(-2), 0);
    }

    #[test]
    fn test_abs_per_type() {
        assert_eq!(abs(-3i32), 3);
        assert_eq!(abs(-3.0f32), 3.0);
        assert_eq!(abs(-3.0f64), 3.0);
        assert_eq!(abs(3i64), 3);
    }

    #[test]
    fn test_trigonometry_f32() {
        assert_relative_eq!(sine(consts::f32::FRAC_PI_2), 1.0f32, epsilon = 1e-6);
        assert_relative_eq!(cosine(0.0f32), 1.0, epsilon = 1e-6);
        assert_relative_eq!(tangent(consts::f32::FRAC_PI_4), 1.0, epsilon = 1e-6);
        assert_relative_eq!(arc_sine(1.0f32), consts::f32::FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(arc_cosine(1.0f32), 0.0, epsilon = 1e-6);
        assert_relative_eq!(arc_tangent(1.0f32), consts::f32::FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn test_trigonometry_f64() {
        assert_relative_eq!(sine(consts::f64::FRAC_PI_2), 1.0f64, epsilon = 1e-12);
        assert_relative_eq!(cosine(consts::f64::PI), -1.0, epsilon = 1e-12);
        assert_relative_eq!(arc_tangent(1.0f64), consts::f64::FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_and_sqrt() {
        assert_relative_eq!(pow(2.0f32, 10.0), 1024.0, epsilon = 1e-3);
        assert_relative_eq!(sqrt(2.0f64), consts::f64::SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(sqrt(9.0f32), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(
            degrees_to_radians(180.0f32),
            consts::f32::PI,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            radians_to_degrees(consts::f32::PI),
            180.0f32,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            degrees_to_radians(180.0f64),
            consts::f64::PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_real_and_active_constants_agree() {
        // Type-level check: the active constant set is typed as `Real`.
        let pi: Real = real::PI;
        assert!(pi > 3.0 && pi < 4.0);
        assert_eq!(
            std::mem::size_of::<Real>(),
            crate::platform::Precision::CURRENT.bytes()
        );
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
        assert!(approx_eq_eps(0.001, 0.002, 1e-2));
        assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
    }
}
