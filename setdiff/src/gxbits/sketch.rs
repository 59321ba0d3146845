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


use std::sync::Arc;

use crate::common::DifferenceSketch;
use crate::common::Method;
use crate::common::check_sizes;
use crate::common::hamming_distance;
use crate::error::Error;
use crate::gxbits::GxBitsBuilder;
use crate::gxbits::NewtonRaphson;
use crate::gxbits::ProbabilityTable;
use crate::gxbits::probability::GeometricLayout;
use crate::hash::HashAssigner;
use crate::hash::ItemKey;
use crate::odd::clamp_hamming;
use crate::odd::closed_form_difference;

/// GXBITS sketch configuration.
///
/// Clones share the probability table.
#[derive(Debug, Clone)]
pub struct GxBits {
    layout: GeometricLayout,
    table: Arc<ProbabilityTable>,
    solver: NewtonRaphson,
    assigner: HashAssigner,
}

/// Geometrically distributed parity bits of one entity's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GxBitsSketch {
    bits: Vec<u8>,
}

impl GxBitsSketch {
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

impl GxBits {
    /// Create a new builder for GxBits
    ///
    /// # Examples
    ///
    /// ```
    /// # use setdiff::gxbits::GxBits;
    /// let gxbits = GxBits::builder().size(512).probability(0.01).build().unwrap();
    /// assert_eq!(gxbits.segments(), 256);
    /// ```
    pub fn builder() -> GxBitsBuilder {
        GxBitsBuilder::default()
    }

    pub(super) fn from_parts(
        layout: GeometricLayout,
        table: Arc<ProbabilityTable>,
        solver: NewtonRaphson,
        assigner: HashAssigner,
    ) -> Self {
        Self {
            layout,
            table,
            solver,
            assigner,
        }
    }

    /// Returns the same configuration hashing under `seed`.
    ///
    /// The probability table does not depend on the seed and is shared.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            assigner: HashAssigner::new(seed),
            ..self.clone()
        }
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.assigner.seed()
    }

    /// Returns the geometric distribution parameter.
    pub fn geometric_probability(&self) -> f64 {
        self.layout.probability()
    }

    /// Returns true if positions are grouped into segments.
    pub fn block_truncated(&self) -> bool {
        self.layout.block_truncated()
    }

    /// Returns the number of bits per segment.
    pub fn num_bits(&self) -> usize {
        self.layout.num_bits()
    }

    /// Returns `ceil(size / num_bits)`.
    pub fn segments(&self) -> usize {
        self.layout.segments()
    }

    /// Returns the probability that one item toggles position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn probability(&self, index: usize) -> f64 {
        self.table.probability(index)
    }

    /// Returns the shared probability table.
    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Returns the root finder.
    pub fn solver(&self) -> &NewtonRaphson {
        &self.solver
    }
}

impl DifferenceSketch for GxBits {
    type Sketch = GxBitsSketch;

    const METHOD: Method = Method::GxBits;

    fn size(&self) -> usize {
        self.layout.size()
    }

    fn build<I: ItemKey>(&self, items: &[I]) -> GxBitsSketch {
        let mut bits = vec![0u8; self.size()];
        for item in items {
            let mut stream = self.assigner.stream(item);
            bits[self.layout.assign(&mut stream)] ^= 1;
        }
        GxBitsSketch { bits }
    }

    fn estimate(&self, a: &GxBitsSketch, b: &GxBitsSketch) -> Result<f64, Error> {
        let size = self.size();
        check_sizes(size, a.len(), b.len())?;

        let h = hamming_distance(&a.bits, &b.bits);
        let zero_ratio = (size - h) as f64 / size as f64;
        // starts from the odd sketch closed form, which ignores the skew
        let initial_guess = closed_form_difference(clamp_hamming(h, size), size)?;
        self.solver.solve(&self.table, initial_guess, zero_ratio)
    }
}
