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
use crate::error::Error;
use crate::hash::HashAssigner;
use crate::hash::ItemKey;
use crate::hll::MAX_SIZE;
use crate::hll::estimator::estimate_cardinality;
use crate::hll::index_and_value;
use crate::hll::index_bits;

/// HyperLogLog difference configuration.
#[derive(Debug, Clone, Copy)]
pub struct Hll {
    size: usize,
    flag: u32,
    assigner: HashAssigner,
}

/// Registers of one entity's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HllSketch {
    registers: Vec<u8>,
}

impl HllSketch {
    /// Returns the registers.
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Returns the number of registers.
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Returns true if every register is zero.
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&r| r == 0)
    }

    /// Returns the union sketch, the register-wise maximum of both sketches.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if the sketches have different lengths.
    pub fn merge(&self, other: &HllSketch) -> Result<HllSketch, Error> {
        check_sizes(self.len(), self.len(), other.len())?;
        let registers = self
            .registers
            .iter()
            .zip(&other.registers)
            .map(|(&a, &b)| a.max(b))
            .collect();
        Ok(HllSketch { registers })
    }
}

impl Hll {
    /// Creates a HyperLogLog configuration with `size` registers hashing under `seed`.
    ///
    /// `size` need not be a power of two.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `size` is outside `[2, 2^31]`.
    pub fn new(size: usize, seed: u32) -> Result<Self, Error> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(
                Error::invalid_argument("hyperloglog size must be in [2, 2^31]")
                    .with_context("size", size),
            );
        }
        Ok(Self {
            size,
            flag: index_bits(size),
            assigner: HashAssigner::new(seed),
        })
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.assigner.seed()
    }

    /// Returns the number of hash bits selecting a register.
    pub fn index_bits(&self) -> u32 {
        self.flag
    }

    /// Returns the largest value a register can hold, `33 - index_bits`.
    pub fn max_register_value(&self) -> u8 {
        (33 - self.flag) as u8
    }

    /// Estimates the number of distinct items summarised by `sketch`.
    pub fn cardinality(&self, sketch: &HllSketch) -> f64 {
        estimate_cardinality(&sketch.registers)
    }
}

impl DifferenceSketch for Hll {
    type Sketch = HllSketch;

    const METHOD: Method = Method::Hll;

    fn size(&self) -> usize {
        self.size
    }

    fn build<I: ItemKey>(&self, items: &[I]) -> HllSketch {
        let mut registers = vec![0u8; self.size];
        for item in items {
            let (index, value) = index_and_value(self.assigner.hash(item), self.flag, self.size);
            if value > registers[index] {
                registers[index] = value;
            }
        }
        HllSketch { registers }
    }

    fn estimate(&self, a: &HllSketch, b: &HllSketch) -> Result<f64, Error> {
        check_sizes(self.size, a.len(), b.len())?;
        let union = a.merge(b)?;
        let card_a = self.cardinality(a);
        let card_b = self.cardinality(b);
        let card_union = self.cardinality(&union);
        Ok((2.0 * card_union - card_a - card_b).abs())
    }
}
