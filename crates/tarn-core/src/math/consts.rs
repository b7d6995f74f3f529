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

//! Angle and transcendental constants for both floating-point precisions.
//!
//! The 64-bit set is the source of truth; the 32-bit set is derived from it
//! by constant narrowing, so the two sets can never drift apart. Which set
//! is active for [`Real`](crate::Real) code is decided by the
//! `double-precision` feature through the [`real`](crate::math::real) alias.

/// 64-bit constant set.
pub mod f64 {
    /// Archimedes' constant (π).
    pub const PI: f64 = core::f64::consts::PI;
    /// π/2.
    pub const FRAC_PI_2: f64 = core::f64::consts::FRAC_PI_2;
    /// π/3.
    pub const FRAC_PI_3: f64 = core::f64::consts::FRAC_PI_3;
    /// π/4.
    pub const FRAC_PI_4: f64 = core::f64::consts::FRAC_PI_4;
    /// π/6.
    pub const FRAC_PI_6: f64 = core::f64::consts::FRAC_PI_6;
    /// π/8.
    pub const FRAC_PI_8: f64 = core::f64::consts::FRAC_PI_8;
    /// The full circle constant (τ = 2π).
    pub const TAU: f64 = core::f64::consts::TAU;

    /// The factor to convert degrees to radians (π / 180).
    pub const DEG_TO_RAD: f64 = PI / 180.0;
    /// The factor to convert radians to degrees (180 / π).
    pub const RAD_TO_DEG: f64 = 180.0 / PI;

    /// √2.
    pub const SQRT_2: f64 = core::f64::consts::SQRT_2;
    /// Euler's number (e).
    pub const E: f64 = core::f64::consts::E;
    /// The golden ratio (φ).
    pub const PHI: f64 = 1.618033988749894848204586834365638118_f64;

    /// Default tolerance for approximate comparisons at this precision.
    pub const EPSILON: f64 = 1e-9;
}

/// 32-bit constant set, derived from the 64-bit one.
pub mod f32 {
    /// Archimedes' constant (π).
    pub const PI: f32 = super::f64::PI as f32;
    /// π/2.
    pub const FRAC_PI_2: f32 = super::f64::FRAC_PI_2 as f32;
    /// π/3.
    pub const FRAC_PI_3: f32 = super::f64::FRAC_PI_3 as f32;
    /// π/4.
    pub const FRAC_PI_4: f32 = super::f64::FRAC_PI_4 as f32;
    /// π/6.
    pub const FRAC_PI_6: f32 = super::f64::FRAC_PI_6 as f32;
    /// π/8.
    pub const FRAC_PI_8: f32 = super::f64::FRAC_PI_8 as f32;
    /// The full circle constant (τ = 2π).
    pub const TAU: f32 = super::f64::TAU as f32;

    /// The factor to convert degrees to radians (π / 180).
    pub const DEG_TO_RAD: f32 = super::f64::DEG_TO_RAD as f32;
    /// The factor to convert radians to degrees (180 / π).
    pub const RAD_TO_DEG: f32 = super::f64::RAD_TO_DEG as f32;

    /// √2.
    pub const SQRT_2: f32 = super::f64::SQRT_2 as f32;
    /// Euler's number (e).
    pub const E: f32 = super::f64::E as f32;
    /// The golden ratio (φ).
    pub const PHI: f32 = super::f64::PHI as f32;

    /// Default tolerance for approximate comparisons at this precision.
    pub const EPSILON: f32 = 1e-5;
}

#[cfg(test)]
mod tests {
    use super::{f32 as c32, f64 as c64};
    use approx::assert_relative_eq;

    #[test]
    fn test_tau_is_two_pi() {
        assert_eq!(c64::TAU, 2.0 * c64::PI);
        assert_eq!(c32::TAU, 2.0 * c32::PI);
    }

    #[test]
    fn test_power_of_two_pi_fractions_are_exact() {
        // Scaling by powers of two commutes with rounding.
        assert_eq!(c64::FRAC_PI_2, c64::PI / 2.0);
        assert_eq!(c64::FRAC_PI_4, c64::PI / 4.0);
        assert_eq!(c64::FRAC_PI_8, c64::PI / 8.0);
    }

    #[test]
    fn test_other_pi_fractions() {
        assert_relative_eq!(c64::FRAC_PI_3, c64::PI / 3.0, epsilon = 1e-15);
        assert_relative_eq!(c64::FRAC_PI_6, c64::PI / 6.0, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_factors_are_inverse() {
        assert_relative_eq!(c64::DEG_TO_RAD * c64::RAD_TO_DEG, 1.0, epsilon = 1e-15);
        assert_relative_eq!(c64::DEG_TO_RAD * 180.0, c64::PI, epsilon = 1e-15);
    }

    #[test]
    fn test_phi_satisfies_golden_identity() {
        // φ² = φ + 1
        assert_relative_eq!(c64::PHI * c64::PHI, c64::PHI + 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_f32_set_is_derived_from_f64_set() {
        assert_eq!(c32::PI, c64::PI as f32);
        assert_eq!(c32::TAU, c64::TAU as f32);
        assert_eq!(c32::SQRT_2, c64::SQRT_2 as f32);
        assert_eq!(c32::E, c64::E as f32);
        assert_eq!(c32::PHI, c64::PHI as f32);
        assert_eq!(c32::DEG_TO_RAD, c64::DEG_TO_RAD as f32);
        assert_eq!(c32::RAD_TO_DEG, c64::RAD_TO_DEG as f32);
    }
}
