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

//! Compile-time build configuration.
//!
//! Every configuration axis (operating system, toolchain environment,
//! pointer width, optimization profile, floating-point precision) is
//! resolved exactly once, at compile time, into a plain enum constant.
//! Unsupported configurations reject the build outright instead of falling
//! back to a default. [`BuildConfig::CURRENT`] aggregates all axes.

use std::fmt;

// Unsupported configurations must fail the build, not degrade silently.

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
compile_error!("unsupported target platform: expected windows, linux, or macos");

// macOS is a declared platform without an implementation yet.
#[cfg(target_os = "macos")]
compile_error!("macOS is recognized but not implemented yet");

#[cfg(all(
    target_os = "windows",
    not(any(target_env = "msvc", target_env = "gnu"))
))]
compile_error!("unsupported toolchain environment on Windows: expected msvc or gnu");

#[cfg(all(
    target_os = "linux",
    not(any(target_env = "gnu", target_env = "musl"))
))]
compile_error!("unsupported toolchain environment on Linux: expected gnu or musl");

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("unsupported pointer width: expected 32-bit or 64-bit");

/// The operating system the crate is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Linux.
    Linux,
    /// Apple macOS. Declared for completeness; building for it is rejected
    /// until an implementation lands.
    MacOs,
}

impl Platform {
    /// The platform of the current build.
    pub const CURRENT: Platform = if cfg!(target_os = "windows") {
        Platform::Windows
    } else if cfg!(target_os = "linux") {
        Platform::Linux
    } else {
        Platform::MacOs
    };

    /// Lowercase platform name.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The toolchain/ABI environment of the current target.
///
/// `target_env` is authoritative in `cfg`, so no probe ordering is needed to
/// tell the environments apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetEnv {
    /// Microsoft Visual C++ ABI (Windows).
    Msvc,
    /// GNU ABI (Linux glibc, Windows MinGW).
    Gnu,
    /// musl libc (static Linux builds).
    Musl,
}

impl TargetEnv {
    /// The toolchain environment of the current build.
    pub const CURRENT: TargetEnv = if cfg!(target_env = "msvc") {
        TargetEnv::Msvc
    } else if cfg!(target_env = "musl") {
        TargetEnv::Musl
    } else {
        TargetEnv::Gnu
    };

    /// Lowercase environment name.
    pub const fn name(self) -> &'static str {
        match self {
            TargetEnv::Msvc => "msvc",
            TargetEnv::Gnu => "gnu",
            TargetEnv::Musl => "musl",
        }
    }
}

impl fmt::Display for TargetEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pointer width of the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerWidth {
    /// 32-bit pointers.
    Bits32,
    /// 64-bit pointers.
    Bits64,
}

impl PointerWidth {
    /// The pointer width of the current build.
    pub const CURRENT: PointerWidth = if cfg!(target_pointer_width = "32") {
        PointerWidth::Bits32
    } else {
        PointerWidth::Bits64
    };

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            PointerWidth::Bits32 => 32,
            PointerWidth::Bits64 => 64,
        }
    }
}

impl fmt::Display for PointerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Optimization/assertion profile of the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Profile {
    /// Unoptimized build with debug assertions compiled in.
    Debug,
    /// Optimized build that keeps debug information. Assertions are out.
    RelWithDebInfo,
    /// Fully optimized build. Assertions are out.
    Release,
}

impl Profile {
    /// The profile of the current build.
    ///
    /// Debug assertions take precedence over the `debug-info` feature, so a
    /// dev build with the feature enabled still counts as [`Profile::Debug`].
    pub const CURRENT: Profile = if cfg!(debug_assertions) {
        Profile::Debug
    } else if cfg!(feature = "debug-info") {
        Profile::RelWithDebInfo
    } else {
        Profile::Release
    };

    /// Returns `true` when this profile compiles assertions in.
    pub const fn assertions_enabled(self) -> bool {
        matches!(self, Profile::Debug)
    }

    /// Lowercase profile name.
    pub const fn name(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::RelWithDebInfo => "relwithdebinfo",
            Profile::Release => "release",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `true` in builds with debug assertions compiled in.
pub const IS_DEBUG: bool = matches!(Profile::CURRENT, Profile::Debug);

/// `true` in optimized builds that keep debug information.
pub const IS_REL_WITH_DEB_INFO: bool = matches!(Profile::CURRENT, Profile::RelWithDebInfo);

/// `true` in fully optimized release builds.
pub const IS_RELEASE: bool = matches!(Profile::CURRENT, Profile::Release);

/// Floating-point precision of [`Real`](crate::Real).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// 32-bit floats.
    Single,
    /// 64-bit floats.
    Double,
}

impl Precision {
    /// The precision of the current build.
    pub const CURRENT: Precision = if cfg!(feature = "double-precision") {
        Precision::Double
    } else {
        Precision::Single
    };

    /// Size of the active float type in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }

    /// Lowercase precision name.
    pub const fn name(self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate of every compile-time configuration axis.
///
/// Resolved once per build; every field is immutable for the lifetime of the
/// produced artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    /// Operating system.
    pub platform: Platform,
    /// Toolchain/ABI environment.
    pub target_env: TargetEnv,
    /// Pointer width.
    pub pointer_width: PointerWidth,
    /// Optimization/assertion profile.
    pub profile: Profile,
    /// Floating-point precision of [`Real`](crate::Real).
    pub precision: Precision,
}

impl BuildConfig {
    /// The configuration of the current build.
    pub const CURRENT: BuildConfig = BuildConfig {
        platform: Platform::CURRENT,
        target_env: TargetEnv::CURRENT,
        pointer_width: PointerWidth::CURRENT,
        profile: Profile::CURRENT,
        precision: Precision::CURRENT,
    };

    /// Emits a one-line summary of the active configuration through the
    /// logging facade.
    pub fn log_summary(&self) {
        log::info!("build configuration: {self}");
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}, {}, {} profile, {} precision",
            self.platform, self.target_env, self.pointer_width, self.profile, self.precision
        )
    }
}
