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


//! Entity datasets evaluated by the experiment driver.
//!
//! A dataset maps each entity to the list of items it holds. Datasets come
//! either from a `user item` pairs file or from a seeded synthetic generator.

mod loader;
mod synthetic;

use std::collections::BTreeMap;
use std::collections::btree_map;

pub use self::synthetic::SyntheticDataset;

/// Identifier of an entity, e.g. a user.
pub type EntityId = u64;

/// Items grouped by entity, enumerated in ascending entity order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entities: BTreeMap<EntityId, Vec<u64>>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the items of `entity`, replacing any previous list.
    pub fn insert(&mut self, entity: EntityId, items: Vec<u64>) {
        self.entities.insert(entity, items);
    }

    /// Returns the items of `entity`.
    pub fn items(&self, entity: EntityId) -> Option<&[u64]> {
        self.entities.get(&entity).map(Vec::as_slice)
    }

    /// Returns entity ids in ascending order.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Iterates over `(entity, items)` in ascending entity order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &[u64])> {
        self.entities
            .iter()
            .map(|(entity, items)| (*entity, items.as_slice()))
    }

    /// Returns the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the dataset has no entity.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<(EntityId, Vec<u64>)> for Dataset {
    fn from_iter<T: IntoIterator<Item = (EntityId, Vec<u64>)>>(iter: T) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Dataset {
    type Item = (EntityId, Vec<u64>);
    type IntoIter = btree_map::IntoIter<EntityId, Vec<u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}
