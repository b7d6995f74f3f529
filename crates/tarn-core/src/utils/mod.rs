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

//! Generic low-level helpers.
//!
//! * [`defer`]: scope-bound deferred execution
//! * [`hint`]: branch-weight hints for hot paths
//! * [`markers`]: field markers that opt a type out of clone or move
//!   semantics

/// Consumes an expression by reference to silence unused-variable
/// diagnostics. Zero runtime cost, no side effects.
#[macro_export]
macro_rules! unused {
    ($value:expr) => {
        let _ = &$value;
    };
}

pub mod defer;
pub mod hint;
pub mod markers;

pub use defer::ScopeGuard;
pub use markers::{Immovable, NonCloneable};
