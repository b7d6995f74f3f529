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

//! Memory size bookkeeping and layout primitives.
//!
//! [`units`] holds the byte-size constant tables and suffix-style helpers;
//! [`flex`] provides the header-plus-trailing-array layout used by
//! variable-sized structures.

pub mod flex;
pub mod units;

pub use flex::Flex;
pub use units::ByteUnits;
