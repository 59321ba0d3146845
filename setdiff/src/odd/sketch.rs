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


use crate::common::DifferenceSketch;
use crate::common::Method;
use crate::common::check_sizes;
use crate::common::hamming_distance;
use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::HashAssigner;
use crate::hash::ItemKey;

/// Smallest size for which `ln(1 - 2/size)` is negative.
const MIN_SIZE: usize = 3;

/// Odd sketch configuration.
#[derive(Debug, Clone, Copy)]
pub struct Odd {
    size: usize,
    assigner: HashAssigner,
}

/// Parity bits of one entity's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddSketch {
    bits: Vec<u8>,
}

impl OddSketch {
    /// Returns the bits, each 0 or 1.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }
}

impl Odd {
    /// Creates an odd sketch configuration with `size` bits hashing under `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`] if `size` is less than 3.
    pub fn new(size: usize, seed: u32) -> Result<Self, Error> {
        if size < MIN_SIZE {
            return Err(Error::invalid_argument("odd sketch size must be at least 3")
                .with_context("size", size));
        }
        Ok(Self {
            size,
            assigner: HashAssigner::new(seed),
        })
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.assigner.seed()
    }
}

impl DifferenceSketch for Odd {
    type Sketch = OddSketch;

    const METHOD: Method = Method::Odd;

    fn size(&self) -> usize {
        self.size
    }

    fn build<I: ItemKey>(&self, items: &[I]) -> OddSketch {
        let mut bits = vec![0u8; self.size];
        for item in items {
            let index = self.assigner.hash(item) as usize % self.size;
            bits[index] ^= 1;
        }
        OddSketch { bits }
    }

    fn estimate(&self, a: &OddSketch, b: &OddSketch) -> Result<f64, Error> {
        check_sizes(self.size, a.len(), b.len())?;
        let h = hamming_distance(&a.bits, &b.bits);
        closed_form_difference(clamp_hamming(h, self.size), self.size)
    }
}

/// Clamps a Hamming distance of at least `size / 2` to `size / 2 - 1`.
///
/// Real-valued: for odd sizes the clamp lands on a half-integer.
pub(crate) fn clamp_hamming(h: usize, size: usize) -> f64 {
    let half = size as f64 / 2.0;
    let h = h as f64;
    if h >= half { half - 1.0 } else { h }
}

/// Inverts the expected parity of `size` bits: `ln(1 - 2h/size) / ln(1 - 2/size)`.
///
/// This is the raw closed form; it is not clamped.
///
/// # Errors
///
/// Returns [`ErrorKind::Domain`] if `1 - 2h/size` is not positive or if
/// `size` is too small for `ln(1 - 2/size)` to be defined and negative.
///
/// # Examples
///
/// ```
/// use setdiff::odd::closed_form_difference;
///
/// assert_eq!(closed_form_difference(0.0, 64).unwrap(), 0.0);
/// assert!(closed_form_difference(32.0, 64).is_err());
/// ```
pub fn closed_form_difference(h: f64, size: usize) -> Result<f64, Error> {
    let m = size as f64;
    let numerator = 1.0 - 2.0 * h / m;
    let denominator = 1.0 - 2.0 / m;
    if size < MIN_SIZE || denominator <= 0.0 {
        return Err(Error::new(ErrorKind::Domain, "ln(1 - 2/size) is undefined")
            .with_context("size", size));
    }
    if numerator <= 0.0 {
        return Err(Error::new(ErrorKind::Domain, "ln(1 - 2h/size) is undefined")
            .with_context("hamming", h)
            .with_context("size", size));
    }
    Ok(numerator.ln() / denominator.ln())
}
