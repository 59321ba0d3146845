// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


//! HyperLogLog-based set difference estimation.
//!
//! # Overview
//!
//! Each entity is summarised by `size` registers. An item's 32-bit hash is
//! split in two: the top `flag = ceil(log2(size))` bits (reduced modulo
//! `size`) select a register, and the remaining `32 - flag` bits give the
//! register value, the length of their leading zero run plus one. Registers
//! keep the maximum value seen, so a register ranges over `[0, 33 - flag]`.
//!
//! The difference of two sets follows from inclusion-exclusion,
//! `|A Δ B| = 2|A ∪ B| - |A| - |B|`, where the union sketch is the
//! register-wise maximum of both sketches.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::common::DifferenceSketch;
//! use setdiff::hll::Hll;
//!
//! let hll = Hll::new(1024, 0).unwrap();
//! let a = hll.build(&(0..100u64).collect::<Vec<_>>());
//! let b = hll.build(&(100..200u64).collect::<Vec<_>>());
//!
//! assert!((hll.cardinality(&a) - 100.0).abs() < 20.0);
//! let estimate = hll.estimate(&a, &b).unwrap();
//! assert!((estimate - 200.0).abs() < 60.0);
//! ```

mod estimator;
mod sketch;

pub use self::sketch::Hll;
pub use self::sketch::HllSketch;

/// Largest register count; keeps `flag` at most 31 so every hash
/// leaves at least one value bit.
const MAX_SIZE: usize = 1 << 31;

/// Number of hash bits used to select a register, `ceil(log2(size))`.
#[inline]
fn index_bits(size: usize) -> u32 {
    size.next_power_of_two().trailing_zeros()
}

/// Splits a hash into a register index and a register value.
///
/// `flag` must be in `[1, 31]`.
#[inline]
fn index_and_value(hash: u32, flag: u32, size: usize) -> (usize, u8) {
    debug_assert!((1..32).contains(&flag));
    let index = (hash >> (32 - flag)) as usize % size;
    let rest = hash << flag;
    let value = if rest == 0 {
        32 - flag + 1
    } else {
        rest.leading_zeros() + 1
    };
    (index, value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bits() {
        assert_eq!(index_bits(2), 1);
        assert_eq!(index_bits(64), 6);
        assert_eq!(index_bits(1000), 10);
        assert_eq!(index_bits(1024), 10);
        assert_eq!(index_bits(1025), 11);
    }

    #[test]
    fn test_index_and_value() {
        // flag = 4: index from the top nibble, value from the rest
        assert_eq!(index_and_value(0xF800_0000, 4, 16), (15, 1));
        assert_eq!(index_and_value(0x1400_0000, 4, 16), (1, 2));
        assert_eq!(index_and_value(0x1000_0001, 4, 16), (1, 28));
        // all remaining bits zero
        assert_eq!(index_and_value(0x3000_0000, 4, 16), (3, 29));
        // index reduced modulo a non power of two size
        assert_eq!(index_and_value(0xF000_0000, 4, 10), (5, 29));
    }
}
