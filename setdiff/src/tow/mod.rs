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


//! Tug-of-War (AMS) sketch for set difference estimation.
//!
//! Each dimension is an independent random ±1 projection of the item set.
//! Subtracting two sketches projects the symmetric difference, and the mean
//! squared difference over all dimensions is an unbiased estimate of its
//! cardinality.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::common::DifferenceSketch;
//! use setdiff::tow::Tow;
//!
//! let tow = Tow::new(256, 0).unwrap();
//! let a: Vec<u64> = (0..100).collect();
//! let b: Vec<u64> = (100..200).collect();
//!
//! let estimate = tow.estimate(&tow.build(&a), &tow.build(&b)).unwrap();
//! assert!(estimate > 100.0 && estimate < 300.0);
//! ```

mod sketch;

pub use self::sketch::Tow;
pub use self::sketch::TowSketch;
