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


use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::dataset::Dataset;
use crate::dataset::EntityId;
use crate::error::Error;
use crate::error::ErrorKind;

impl Dataset {
    /// Loads a dataset from a file of `user item` pairs, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Io`] if the file cannot be opened or read and
    /// [`ErrorKind::MalformedData`] for a line that is not two unsigned
    /// integers.
    pub fn from_pairs_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to open dataset")
                .with_context("path", path.display())
                .set_source(err)
        })?;
        Self::from_reader(BufReader::new(file))
            .map_err(|err| err.with_context("path", path.display()))
    }

    /// Loads a dataset from `user item` pairs read from `reader`.
    ///
    /// Blank lines are skipped. Repeated items of a user are kept once, in
    /// order of first occurrence.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_pairs_file`].
    pub fn from_reader(reader: impl BufRead) -> Result<Self, Error> {
        let mut entities: BTreeMap<EntityId, (Vec<u64>, HashSet<u64>)> = BTreeMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|err| {
                Error::new(ErrorKind::Io, "failed to read dataset")
                    .with_context("line", line_number)
                    .set_source(err)
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (user, item) = parse_pair(line).map_err(|err| {
                err.with_context("line", line_number)
                    .with_context("content", line)
            })?;
            let (items, seen) = entities.entry(user).or_default();
            if seen.insert(item) {
                items.push(item);
            }
        }

        Ok(entities
            .into_iter()
            .map(|(user, (items, _))| (user, items))
            .collect())
    }
}

fn parse_pair(line: &str) -> Result<(EntityId, u64), Error> {
    let mut fields = line.split_whitespace();
    let (Some(user), Some(item), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::malformed("expected a `user item` pair"));
    };
    let user = user.parse::<EntityId>().map_err(|err| {
        Error::malformed("invalid user id")
            .with_context("user", user)
            .set_source(err)
    })?;
    let item = item.parse::<u64>().map_err(|err| {
        Error::malformed("invalid item id")
            .with_context("item", item)
            .set_source(err)
    })?;
    Ok((user, item))
}
