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


//! Cardinality estimation from HyperLogLog registers.
//!
//! Uses the raw harmonic-mean estimator with the asymptotic bias constant
//! `0.7213 / (1 + 1.079 / m)`, switching to linear counting below `2.5 m`.

/// Estimates the number of distinct items summarised by `registers`.
///
/// The count of empty registers used by linear counting is floored at one,
/// so a saturated sketch in the small range yields `m ln m`.
pub(super) fn estimate_cardinality(registers: &[u8]) -> f64 {
    let m = registers.len() as f64;
    let alpha = 0.7213 / (1.0 + 1.079 / m);

    let mut harmonic_sum = 0.0;
    let mut num_zeros = 0usize;
    for &value in registers {
        harmonic_sum += inv_pow2(value);
        if value == 0 {
            num_zeros += 1;
        }
    }

    let raw = alpha * m * m / harmonic_sum;
    if raw < 2.5 * m {
        let num_zeros = num_zeros.max(1) as f64;
        return -m * (num_zeros / m).ln();
    }
    raw
}

/// Compute 1 / 2^value (inverse power of 2)
#[inline]
fn inv_pow2(value: u8) -> f64 {
    if value == 0 {
        1.0
    } else if value <= 63 {
        1.0 / (1u64 << value) as f64
    } else {
        f64::exp2(-(value as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registers() {
        assert_eq!(estimate_cardinality(&[0u8; 64]), 0.0);
    }

    #[test]
    fn test_linear_counting_range() {
        // one register hit out of 64
        let mut registers = [0u8; 64];
        registers[5] = 1;
        let expected = -64.0 * (63.0f64 / 64.0).ln();
        assert!((estimate_cardinality(&registers) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_no_empty_registers_in_small_range() {
        // every register at 1 keeps the raw estimate below 2.5 m
        let registers = [1u8; 16];
        let expected = 16.0 * 16.0f64.ln();
        assert!((estimate_cardinality(&registers) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_raw_range() {
        let registers = [10u8; 64];
        let m = 64.0;
        let alpha = 0.7213 / (1.0 + 1.079 / m);
        let expected = alpha * m * m / (m / 1024.0);
        assert!((estimate_cardinality(&registers) - expected).abs() < 1e-6);
    }
}
