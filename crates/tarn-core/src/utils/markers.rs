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

//! Field markers that opt a type out of clone or move semantics.
//!
//! Types that allow member-wise copying simply derive `Clone`/`Copy`;
//! opting *out* is what needs to be spelled. Embedding one of these
//! zero-sized markers makes the opt-out explicit at the definition site and
//! statically enforced.

use std::marker::PhantomPinned;

/// Zero-sized field marker that keeps the containing type from being
/// cloneable or copyable.
///
/// Deriving `Clone` or `Copy` on a type embedding this marker is rejected
/// at compile time:
///
/// ```compile_fail
/// use tarn_core::utils::markers::NonCloneable;
///
/// #[derive(Clone)]
/// struct DeviceHandle {
///     id: u32,
///     _no_clone: NonCloneable,
/// }
/// ```
///
/// # Examples
///
/// ```
/// use tarn_core::utils::markers::NonCloneable;
///
/// #[derive(Debug, Default)]
/// struct DeviceHandle {
///     id: u32,
///     _no_clone: NonCloneable,
/// }
/// let handle = DeviceHandle::default();
/// ```
#[derive(Debug, Default)]
pub struct NonCloneable;

/// Zero-sized field marker that keeps the containing type `!Unpin`.
///
/// Once a value of the containing type is pinned it can never be moved
/// again, which is the strongest move opt-out Rust offers. `Pin::new` is
/// unavailable for such types:
///
/// ```compile_fail
/// use std::pin::Pin;
/// use tarn_core::utils::markers::Immovable;
///
/// #[derive(Default)]
/// struct Anchored {
///     _anchored: Immovable,
/// }
/// let mut value = Anchored::default();
/// let pinned = Pin::new(&mut value);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Immovable {
    _pinned: PhantomPinned,
}
