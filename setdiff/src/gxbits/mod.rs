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


//! GXBITS sketch for set difference estimation.
//!
//! GXBITS is an odd sketch whose positions are not equally likely: an
//! item toggles position `i` with a geometrically decaying probability
//! `q_i`, so low positions saturate on small differences while high
//! positions stay informative for large ones. In block-truncated mode the
//! geometric draw selects a segment of `num_bits` positions and a second
//! hash draw selects the bit inside it.
//!
//! Because the positions are heterogeneous, the difference is recovered by
//! solving `E[zero ratio | d] = observed zero ratio` for `d` with a damped
//! Newton-Raphson iteration ([`NewtonRaphson`]) started from the odd sketch
//! closed form.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::common::DifferenceSketch;
//! use setdiff::gxbits::GxBits;
//! use setdiff::gxbits::StoppingRule;
//!
//! let gxbits = GxBits::builder()
//!     .size(1024)
//!     .probability(0.003)
//!     .tolerance(1e-9)
//!     .stopping_rule(StoppingRule::Objective)
//!     .seed(3)
//!     .build()
//!     .unwrap();
//!
//! let a: Vec<u64> = (0..150).collect();
//! let b: Vec<u64> = (50..200).collect();
//! let estimate = gxbits.estimate(&gxbits.build(&a), &gxbits.build(&b)).unwrap();
//! assert!((estimate - 100.0).abs() < 20.0);
//! ```

mod builder;
mod newton;
mod probability;
mod sketch;

pub use self::builder::GxBitsBuilder;
pub use self::newton::NewtonRaphson;
pub use self::newton::StoppingRule;
pub use self::probability::ProbabilityTable;
pub use self::sketch::GxBits;
pub use self::sketch::GxBitsSketch;
