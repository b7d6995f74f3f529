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

//! Byte-size constant tables and suffix-style helpers.
//!
//! Two tables coexist: [`KB`]/[`MB`]/[`GB`] scale by 1024, and
//! [`KIB`]/[`MIB`]/[`GIB`] scale by 1000. In this codebase the `*IB` names
//! are the decimal table. Use the `const fn` forms where a size is needed in
//! a constant-evaluation context; expression code can use the [`ByteUnits`]
//! suffix methods instead.

/// Bytes in a kilobyte (factor 1024).
pub const KB: usize = 1024;
/// Bytes in a megabyte (factor 1024).
pub const MB: usize = 1024 * KB;
/// Bytes in a gigabyte (factor 1024).
pub const GB: usize = 1024 * MB;

/// Bytes in a kilobyte (factor 1000).
pub const KIB: usize = 1000;
/// Bytes in a megabyte (factor 1000).
pub const MIB: usize = 1000 * KIB;
/// Bytes in a gigabyte (factor 1000).
pub const GIB: usize = 1000 * MIB;

/// `n` kilobytes (factor 1024).
#[inline]
pub const fn kb(n: usize) -> usize {
    n * KB
}

/// `n` megabytes (factor 1024).
#[inline]
pub const fn mb(n: usize) -> usize {
    n * MB
}

/// `n` gigabytes (factor 1024).
#[inline]
pub const fn gb(n: usize) -> usize {
    n * GB
}

/// `n` kilobytes (factor 1000).
#[inline]
pub const fn kib(n: usize) -> usize {
    n * KIB
}

/// `n` megabytes (factor 1000).
#[inline]
pub const fn mib(n: usize) -> usize {
    n * MIB
}

/// `n` gigabytes (factor 1000).
#[inline]
pub const fn gib(n: usize) -> usize {
    n * GIB
}

/// Suffix-style byte-size helpers for sizes written inline.
///
/// # Examples
///
/// ```
/// use tarn_core::memory::units::ByteUnits;
/// let scratch: usize = 64.kb();
/// assert_eq!(scratch, 65_536);
/// assert_eq!(2usize.kib(), 2000);
/// ```
pub trait ByteUnits {
    /// Scales by [`KB`] (factor 1024).
    fn kb(self) -> Self;
    /// Scales by [`MB`] (factor 1024).
    fn mb(self) -> Self;
    /// Scales by [`GB`] (factor 1024).
    fn gb(self) -> Self;
    /// Scales by [`KIB`] (factor 1000).
    fn kib(self) -> Self;
    /// Scales by [`MIB`] (factor 1000).
    fn mib(self) -> Self;
    /// Scales by [`GIB`] (factor 1000).
    fn gib(self) -> Self;
}

impl ByteUnits for usize {
    #[inline]
    fn kb(self) -> usize {
        self * KB
    }

    #[inline]
    fn mb(self) -> usize {
        self * MB
    }

    #[inline]
    fn gb(self) -> usize {
        self * GB
    }

    #[inline]
    fn kib(self) -> usize {
        self * KIB
    }

    #[inline]
    fn mib(self) -> usize {
        self * MIB
    }

    #[inline]
    fn gib(self) -> usize {
        self * GIB
    }
}
