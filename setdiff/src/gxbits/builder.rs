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

use crate::error::Error;
use crate::gxbits::GxBits;
use crate::gxbits::NewtonRaphson;
use crate::gxbits::ProbabilityTable;
use crate::gxbits::StoppingRule;
use crate::gxbits::probability::GeometricLayout;
use crate::hash::HashAssigner;

const DEFAULT_SIZE: usize = 1000;
const DEFAULT_PROBABILITY: f64 = 0.15;
const DEFAULT_NUM_BITS: usize = 2;
const DEFAULT_TOLERANCE: f64 = 0.001;
const DEFAULT_RATE: f64 = 1.0;
const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Builder for creating GXBITS configurations.
///
/// # Examples
///
/// ```
/// use setdiff::gxbits::GxBits;
/// use setdiff::gxbits::StoppingRule;
///
/// let gxbits = GxBits::builder()
///     .size(1024)
///     .probability(0.01)
///     .block_truncated(true)
///     .num_bits(4)
///     .tolerance(1e-9)
///     .rate(0.5)
///     .stopping_rule(StoppingRule::Objective)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(gxbits.segments(), 256);
/// ```
#[derive(Debug, Clone)]
pub struct GxBitsBuilder {
    size: usize,
    probability: f64,
    block_truncated: bool,
    num_bits: usize,
    tolerance: f64,
    rate: f64,
    max_iterations: u32,
    stopping_rule: StoppingRule,
    seed: u32,
}

impl Default for GxBitsBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            probability: DEFAULT_PROBABILITY,
            block_truncated: false,
            num_bits: DEFAULT_NUM_BITS,
            tolerance: DEFAULT_TOLERANCE,
            rate: DEFAULT_RATE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stopping_rule: StoppingRule::default(),
            seed: 0,
        }
    }
}

impl GxBitsBuilder {
    /// Sets the number of bits in each sketch.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the parameter of the geometric distribution over positions.
    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Sets whether positions are grouped into segments of `num_bits` bits.
    pub fn block_truncated(mut self, block_truncated: bool) -> Self {
        self.block_truncated = block_truncated;
        self
    }

    /// Sets the number of bits per segment; only used when block truncated.
    pub fn num_bits(mut self, num_bits: usize) -> Self {
        self.num_bits = num_bits;
        self
    }

    /// Sets the root finder stopping tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the Newton step multiplier.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the maximum number of Newton updates per estimate.
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the root finder stopping rule.
    pub fn stopping_rule(mut self, stopping_rule: StoppingRule) -> Self {
        self.stopping_rule = stopping_rule;
        self
    }

    /// Sets the hash seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the parameters and computes the probability table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if any parameter is out of range, or if some position would be
    /// toggled with probability 1/2 or more.
    pub fn build(self) -> Result<GxBits, Error> {
        if self.size < 3 {
            return Err(Error::invalid_argument("gxbits size must be at least 3")
                .with_context("size", self.size));
        }
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(Error::invalid_argument("probability must be in (0, 1)")
                .with_context("probability", self.probability));
        }
        if self.num_bits == 0 || self.num_bits > self.size {
            return Err(Error::invalid_argument("num_bits must be in [1, size]")
                .with_context("num_bits", self.num_bits)
                .with_context("size", self.size));
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(Error::invalid_argument("tolerance must be positive")
                .with_context("tolerance", self.tolerance));
        }
        if !(self.rate > 0.0 && self.rate <= 1.0) {
            return Err(Error::invalid_argument("rate must be in (0, 1]")
                .with_context("rate", self.rate));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_argument("max_iterations must be at least 1"));
        }

        let layout = GeometricLayout::new(
            self.size,
            self.probability,
            self.block_truncated,
            self.num_bits,
        );
        let table = ProbabilityTable::new(&layout)?;
        let solver = NewtonRaphson::new(
            self.rate,
            self.tolerance,
            self.max_iterations,
            self.stopping_rule,
        );
        Ok(GxBits::from_parts(
            layout,
            Arc::new(table),
            solver,
            HashAssigner::new(self.seed),
        ))
    }
}
