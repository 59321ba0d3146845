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


use crate::error::Error;
use crate::hash::ItemStream;

/// How item hashes are spread over the sketch positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct GeometricLayout {
    size: usize,
    probability: f64,
    block_truncated: bool,
    num_bits: usize,
    segments: usize,
    /// `ln(1 - probability)`, negative.
    log_complement: f64,
}

impl GeometricLayout {
    pub(super) fn new(
        size: usize,
        probability: f64,
        block_truncated: bool,
        num_bits: usize,
    ) -> Self {
        Self {
            size,
            probability,
            block_truncated,
            num_bits,
            segments: size.div_ceil(num_bits),
            log_complement: (1.0 - probability).ln(),
        }
    }

    pub(super) fn size(&self) -> usize {
        self.size
    }

    pub(super) fn probability(&self) -> f64 {
        self.probability
    }

    pub(super) fn block_truncated(&self) -> bool {
        self.block_truncated
    }

    pub(super) fn num_bits(&self) -> usize {
        self.num_bits
    }

    pub(super) fn segments(&self) -> usize {
        self.segments
    }

    /// Picks the position toggled by an item.
    ///
    /// Draw 0 of the stream selects the geometric position (or segment);
    /// in block-truncated mode draw 1 selects the bit inside the segment.
    pub(super) fn assign(&self, stream: &mut ItemStream<'_>) -> usize {
        let u = stream.next_uniform();
        if !self.block_truncated {
            return self.geometric_draw(u, self.size - 1);
        }

        let last_segment = self.segments - 1;
        let segment = self.geometric_draw(u, last_segment);
        let lo = segment * self.num_bits;
        let hi = if segment == last_segment {
            self.size - 1
        } else {
            lo + self.num_bits - 1
        };
        lo + stream.next_below(hi - lo + 1)
    }

    /// `floor(ln(1 - u) / ln(1 - p))`, capped at `cap`.
    fn geometric_draw(&self, u: f64, cap: usize) -> usize {
        let x = (1.0 - u).ln() / self.log_complement;
        if x >= cap as f64 { cap } else { x as usize }
    }

    /// Probability that a single item toggles position `index`.
    pub(super) fn compute_probability(&self, index: usize) -> f64 {
        let p = self.probability;
        let q = 1.0 - p;
        if !self.block_truncated {
            if index < self.size - 1 {
                p * q.powf(index as f64)
            } else {
                q.powf((self.size - 1) as f64)
            }
        } else {
            let nb = self.num_bits as f64;
            if index < self.num_bits * (self.segments - 1) {
                p * q.powf((index / self.num_bits) as f64) / nb
            } else {
                q.powf((self.segments - 1) as f64) / nb
            }
        }
    }
}

/// Per-position flip probabilities of a GXBITS configuration.
///
/// Computed once per configuration and read by every root finder iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    probabilities: Box<[f64]>,
    /// `1 - 2q` per position.
    bases: Box<[f64]>,
    /// `ln(1 - 2q)` per position.
    log_bases: Box<[f64]>,
}

impl ProbabilityTable {
    pub(super) fn new(layout: &GeometricLayout) -> Result<Self, Error> {
        let size = layout.size();
        let mut probabilities = Vec::with_capacity(size);
        let mut bases = Vec::with_capacity(size);
        let mut log_bases = Vec::with_capacity(size);
        for index in 0..size {
            let q = layout.compute_probability(index);
            let base = 1.0 - 2.0 * q;
            if !(base > 0.0 && base <= 1.0) {
                return Err(Error::invalid_argument(
                    "flip probability must be in [0, 0.5) at every position",
                )
                .with_context("index", index)
                .with_context("probability", q));
            }
            probabilities.push(q);
            bases.push(base);
            log_bases.push(base.ln());
        }
        Ok(Self {
            probabilities: probabilities.into_boxed_slice(),
            bases: bases.into_boxed_slice(),
            log_bases: log_bases.into_boxed_slice(),
        })
    }

    /// Returns the flip probability of position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn probability(&self, index: usize) -> f64 {
        self.probabilities[index]
    }

    /// Returns all flip probabilities.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Returns true if the table has no positions.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Evaluates the objective and its derivative at difference `d`:
    ///
    /// - `g(d)  = Σ (1 + (1 - 2q_i)^d) / (2 size) - zero_ratio`
    /// - `g'(d) = Σ ln(1 - 2q_i) (1 - 2q_i)^d / (2 size)`
    pub fn objective(&self, d: f64, zero_ratio: f64) -> (f64, f64) {
        let mut value = 0.0;
        let mut derivative = 0.0;
        for (base, log_base) in self.bases.iter().zip(self.log_bases.iter()) {
            let pow = base.powf(d);
            value += 1.0 + pow;
            derivative += log_base * pow;
        }
        let denom = 2.0 * self.len() as f64;
        (value / denom - zero_ratio, derivative / denom)
    }
}
