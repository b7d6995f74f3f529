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

// Tarn Engine sandbox
// Exercises the foundation crate from a consumer's point of view.

use anyhow::Result;
use log::info;

use tarn_core::math::{self, Real};
use tarn_core::memory::{ByteUnits, Flex};
use tarn_core::{defer, tarn_assert, BuildConfig};

#[derive(Debug)]
struct ChunkHeader {
    generation: u32,
    tag: &'static str,
}

fn main() -> Result<()> {
    env_logger::init();

    BuildConfig::CURRENT.log_summary();

    let budget: usize = 64.kb();
    let mut scratch: Vec<u8> = Vec::with_capacity(budget);
    defer!(info!("frame scratch released"));
    scratch.extend_from_slice(&[0u8; 16]);
    tarn_assert!(
        scratch.capacity() >= budget,
        "scratch under budget: {}",
        scratch.capacity()
    );
    info!("frame scratch budget: {budget} bytes");

    let samples: [Real; 4] = [0.0, 0.25, 0.5, 0.75];
    let chunk = Flex::boxed(
        ChunkHeader {
            generation: 1,
            tag: "terrain",
        },
        &samples,
    );
    info!(
        "chunk '{}' (generation {}) carries {} samples",
        chunk.header.tag,
        chunk.header.generation,
        chunk.len()
    );

    let quarter_turn: Real = math::degrees_to_radians(90.0);
    tarn_assert!(
        math::approx_eq(quarter_turn, math::real::FRAC_PI_2),
        "quarter turn diverged from pi/2"
    );
    info!("quarter turn is {quarter_turn} rad");

    Ok(())
}
