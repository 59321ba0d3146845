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


//! Shared abstractions for the difference sketch families.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::hash::ItemKey;

/// Sketch family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Odd sketch: XOR parity bits.
    Odd,
    /// Tug-of-War: random ±1 projections.
    Tow,
    /// HyperLogLog inclusion-exclusion.
    Hll,
    /// Geometric XOR bits with a Newton-Raphson estimator.
    GxBits,
}

impl Method {
    /// All methods in id order.
    pub const ALL: [Method; 4] = [Method::Odd, Method::Tow, Method::Hll, Method::GxBits];

    /// Lowercase name used on the command line and in file names.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Odd => "odd",
            Method::Tow => "tow",
            Method::Hll => "hll",
            Method::GxBits => "gxbits",
        }
    }

    /// Stable numeric id used in persisted record sets.
    pub const fn id(self) -> u8 {
        match self {
            Method::Odd => 1,
            Method::Tow => 2,
            Method::Hll => 3,
            Method::GxBits => 4,
        }
    }

    /// Looks a method up by its persisted id.
    pub fn from_id(id: u8) -> Option<Method> {
        Method::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_argument("unknown method, expected one of odd/tow/hll/gxbits")
                    .with_context("method", s)
            })
    }
}

/// A configured sketch family: builds fixed-size sketches from item lists
/// and estimates the symmetric difference cardinality of two of them.
///
/// Implementations are pure functions of their configuration, so sketches
/// for distinct entities can be built in any order.
pub trait DifferenceSketch {
    /// The sketch produced by [`DifferenceSketch::build`].
    type Sketch;

    /// Family of this sketch.
    const METHOD: Method;

    /// Number of elements in every sketch built by this configuration.
    fn size(&self) -> usize;

    /// Builds the sketch of one entity's items.
    fn build<I: ItemKey>(&self, items: &[I]) -> Self::Sketch;

    /// Estimates `|A Δ B|` from the sketches of `A` and `B`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if a sketch does not have [`DifferenceSketch::size`] elements, and
    /// family-specific estimation errors otherwise.
    fn estimate(&self, a: &Self::Sketch, b: &Self::Sketch) -> Result<f64, Error>;
}

/// Counts positions at which two bit vectors differ.
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|&(x, y)| x != y).count()
}

pub(crate) fn check_sizes(expected: usize, left: usize, right: usize) -> Result<(), Error> {
    if left != expected || right != expected {
        return Err(Error::size_mismatch(expected, left, right));
    }
    Ok(())
}
