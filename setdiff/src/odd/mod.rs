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


//! Odd sketch for set difference estimation.
//!
//! Every item toggles one parity bit chosen by its hash, so items shared by
//! two sets cancel out when their sketches are XORed and the Hamming distance
//! between two sketches only reflects the symmetric difference.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::common::DifferenceSketch;
//! use setdiff::odd::Odd;
//!
//! let odd = Odd::new(1024, 0).unwrap();
//! let a: Vec<u64> = (0..150).collect();
//! let b: Vec<u64> = (50..200).collect();
//!
//! let estimate = odd.estimate(&odd.build(&a), &odd.build(&b)).unwrap();
//! assert!((estimate - 100.0).abs() < 30.0);
//! ```

mod sketch;

pub use self::sketch::Odd;
pub use self::sketch::OddSketch;
pub use self::sketch::closed_form_difference;

pub(crate) use self::sketch::clamp_hamming;
