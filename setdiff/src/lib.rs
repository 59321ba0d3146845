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


//! Set difference cardinality estimation.
//!
//! Each sketch family compresses an item set into a fixed-size sketch; the
//! symmetric difference `|A Δ B|` of two sets is then estimated from their
//! sketches alone:
//!
//! * [`odd`]: parity bits with a closed-form estimator.
//! * [`tow`]: Tug-of-War ±1 projections.
//! * [`hll`]: HyperLogLog registers with inclusion-exclusion.
//! * [`gxbits`]: geometrically distributed parity bits with a Newton-Raphson
//!   estimator.
//!
//! The [`experiment`] module drives a family over a [`dataset`], and
//! [`accuracy`] reduces the resulting records to RSE or AARE.

pub mod accuracy;
pub mod common;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod gxbits;
pub mod hash;
pub mod hll;
pub mod odd;
pub mod pairing;
pub mod record;
pub mod tow;
