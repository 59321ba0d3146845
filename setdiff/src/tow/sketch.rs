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

/// Tug-of-War sketch configuration.
#[derive(Debug, Clone, Copy)]
pub struct Tow {
    size: usize,
    assigner: HashAssigner,
}

/// Signed counters of one entity's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TowSketch {
    counters: Vec<i64>,
}

impl TowSketch {
    /// Returns the counters.
    pub fn counters(&self) -> &[i64] {
        &self.counters
    }

    /// Returns the number of counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if every counter is zero.
    pub fn is_empty(&self) -> bool {
        self.counters.iter().all(|&c| c == 0)
    }
}

impl Tow {
    /// Creates a Tug-of-War configuration with `size` dimensions hashing under `seed`.
    ///
    /// Dimension `i` hashes with `seed + i`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `size` is zero.
    pub fn new(size: usize, seed: u32) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::invalid_argument("tug-of-war size must be positive")
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

impl DifferenceSketch for Tow {
    type Sketch = TowSketch;

    const METHOD: Method = Method::Tow;

    fn size(&self) -> usize {
        self.size
    }

    fn build<I: ItemKey>(&self, items: &[I]) -> TowSketch {
        let mut counters = vec![0i64; self.size];
        for item in items {
            let mut stream = self.assigner.stream(item);
            for counter in counters.iter_mut() {
                if stream.next_uniform() <= 0.5 {
                    *counter += 1;
                } else {
                    *counter -= 1;
                }
            }
        }
        TowSketch { counters }
    }

    fn estimate(&self, a: &TowSketch, b: &TowSketch) -> Result<f64, Error> {
        check_sizes(self.size, a.len(), b.len())?;
        let sum: f64 = a
            .counters
            .iter()
            .zip(&b.counters)
            .map(|(x, y)| {
                let diff = (x - y) as f64;
                diff * diff
            })
            .sum();
        Ok(sum / self.size as f64)
    }
}
