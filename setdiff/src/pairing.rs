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


//! Deterministic entity pairing.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Shuffles `ids` under a generator seeded with `seed` and pairs
/// consecutive entries: `(ids[i], ids[i + 1])` for `i` in `[0, n - 2]`.
///
/// Returns `n - 1` pairs, or none for fewer than two ids. Interior entities
/// appear in two pairs and the two ends in one.
///
/// # Examples
///
/// ```
/// use setdiff::pairing::pair_entities;
///
/// let pairs = pair_entities(vec![1u64, 2, 3, 4], 7);
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs[0].1, pairs[1].0);
/// assert_eq!(pairs, pair_entities(vec![1u64, 2, 3, 4], 7));
/// ```
pub fn pair_entities<K: Clone>(ids: impl IntoIterator<Item = K>, seed: u64) -> Vec<(K, K)> {
    let mut ids: Vec<K> = ids.into_iter().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
    ids.windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}
