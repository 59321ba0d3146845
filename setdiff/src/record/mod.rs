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


//! Estimation records and their persisted form.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::common::Method;
//! use setdiff::record::EstimationRecord;
//! use setdiff::record::RecordSet;
//!
//! let set = RecordSet::new(Method::Odd, 3, vec![EstimationRecord::new(100, 97.5)]);
//! assert_eq!(set.file_name(), "odd_3.out");
//!
//! let bytes = set.serialize();
//! assert_eq!(RecordSet::deserialize(&bytes).unwrap(), set);
//! ```

mod serialization;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::common::Method;
use crate::error::Error;
use crate::error::ErrorKind;

/// Actual and estimated difference of one evaluated pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationRecord {
    /// Exact difference computed from the raw item lists.
    pub actual: u64,
    /// Difference estimated from the two sketches.
    pub estimated: f64,
}

impl EstimationRecord {
    /// Creates a record.
    pub fn new(actual: u64, estimated: f64) -> Self {
        Self { actual, estimated }
    }
}

/// Records of one (method, seed) run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    method: Method,
    seed: u32,
    records: Vec<EstimationRecord>,
}

impl RecordSet {
    /// Creates a record set.
    pub fn new(method: Method, seed: u32, records: Vec<EstimationRecord>) -> Self {
        Self {
            method,
            seed,
            records,
        }
    }

    /// Returns the method that produced the records.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the run seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the records.
    pub fn records(&self) -> &[EstimationRecord] {
        &self.records
    }

    /// Consumes the set, returning the records.
    pub fn into_records(self) -> Vec<EstimationRecord> {
        self.records
    }

    /// File name of the persisted set, `<method>_<seed>.out`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.out", self.method, self.seed)
    }

    /// Serializes the set to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        serialization::serialize(self)
    }

    /// Deserializes a set from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MalformedData`] if the bytes are truncated, carry an
    /// unknown version or method id, or have trailing data.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        serialization::deserialize(bytes)
    }

    /// Writes the set to `dir/<file_name>` and returns the path.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`] if the file cannot be written.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = dir.as_ref().join(self.file_name());
        fs::write(&path, self.serialize()).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to write record set")
                .with_context("path", path.display())
                .set_source(err)
        })?;
        Ok(path)
    }

    /// Reads a set previously written with [`RecordSet::write_to_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`] if the file cannot be read and
    /// [`ErrorKind::MalformedData`] if its content is invalid.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to read record set")
                .with_context("path", path.display())
                .set_source(err)
        })?;
        Self::deserialize(&bytes).map_err(|err| err.with_context("path", path.display()))
    }
}
