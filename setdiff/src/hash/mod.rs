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


//! Seeded item hashing shared by every sketch builder.
//!
//! Items are hashed with MurmurHash3 (x86, 32-bit). Integers hash the bytes
//! of their decimal representation, so `42u64` and `"42"` land on the same
//! value; strings hash their UTF-8 bytes.
//!
//! # Usage
//!
//! ```rust
//! use setdiff::hash::HashAssigner;
//!
//! let assigner = HashAssigner::new(7);
//! assert_eq!(assigner.hash(&42u64), assigner.hash("42"));
//!
//! let u = assigner.uniform01(&42u64);
//! assert!((0.0..=1.0).contains(&u));
//! ```

use std::borrow::Cow;

mod murmurhash;

pub(crate) use self::murmurhash::murmurhash3_32;

/// Scale mapping a 32-bit hash onto `[0, 1]`.
const UNIFORM_SCALE: f64 = u32::MAX as f64;

/// A value that can be hashed into a sketch.
pub trait ItemKey {
    /// Bytes fed to the hash function.
    fn key_bytes(&self) -> Cow<'_, [u8]>;
}

macro_rules! impl_integer_item_key {
    ($($ty:ty),*) => {
        $(
            impl ItemKey for $ty {
                fn key_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

impl_integer_item_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ItemKey for str {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl ItemKey for String {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl<T: ItemKey + ?Sized> ItemKey for &T {
    fn key_bytes(&self) -> Cow<'_, [u8]> {
        (**self).key_bytes()
    }
}

/// Maps items to deterministic pseudo-random values under a fixed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashAssigner {
    seed: u32,
}

impl HashAssigner {
    /// Creates an assigner hashing with `seed`.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Returns the seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the 32-bit hash of `item`.
    pub fn hash<I: ItemKey + ?Sized>(&self, item: &I) -> u32 {
        murmurhash3_32(&item.key_bytes(), self.seed)
    }

    /// Returns `hash(item) / (2^32 - 1)`, a value in `[0, 1]`.
    pub fn uniform01<I: ItemKey + ?Sized>(&self, item: &I) -> f64 {
        to_uniform(self.hash(item))
    }

    /// Returns the stream of draws for `item`.
    ///
    /// Draw `k` is the hash of `item` under `seed + k` (wrapping), so the
    /// first draw equals [`HashAssigner::hash`].
    ///
    /// # Examples
    ///
    /// ```
    /// use setdiff::hash::HashAssigner;
    ///
    /// let mut stream = HashAssigner::new(5).stream(&"apple");
    /// let first = stream.next_u32();
    /// let second = stream.next_u32();
    /// assert_eq!(first, HashAssigner::new(5).hash("apple"));
    /// assert_eq!(second, HashAssigner::new(6).hash("apple"));
    /// ```
    pub fn stream<'a, I: ItemKey + ?Sized>(&self, item: &'a I) -> ItemStream<'a> {
        ItemStream {
            bytes: item.key_bytes(),
            seed: self.seed,
            position: 0,
        }
    }
}

/// Successive seeded draws for a single item.
#[derive(Debug, Clone)]
pub struct ItemStream<'a> {
    bytes: Cow<'a, [u8]>,
    seed: u32,
    position: u32,
}

impl ItemStream<'_> {
    /// Returns the next 32-bit draw.
    pub fn next_u32(&mut self) -> u32 {
        let hash = murmurhash3_32(&self.bytes, self.seed.wrapping_add(self.position));
        self.position = self.position.wrapping_add(1);
        hash
    }

    /// Returns the next draw scaled onto `[0, 1]`.
    pub fn next_uniform(&mut self) -> f64 {
        to_uniform(self.next_u32())
    }

    /// Returns the next draw reduced into `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        self.next_u32() as usize % bound
    }
}

#[inline]
fn to_uniform(hash: u32) -> f64 {
    hash as f64 / UNIFORM_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_hash_as_decimal_text() {
        let assigner = HashAssigner::new(0);
        assert_eq!(assigner.hash(&42u64), 3159925814);
        assert_eq!(assigner.hash(&42u64), assigner.hash("42"));
        assert_eq!(assigner.hash(&42i32), assigner.hash(&String::from("42")));
    }

    #[test]
    fn test_seed_changes_hash() {
        assert_eq!(HashAssigner::new(1).hash(&42u64), 371412632);
        assert_ne!(HashAssigner::new(0).hash("apple"), HashAssigner::new(1).hash("apple"));
    }

    #[test]
    fn test_uniform_range() {
        let assigner = HashAssigner::new(3);
        for i in 0..1000u64 {
            let u = assigner.uniform01(&i);
            assert!((0.0..=1.0).contains(&u));
        }
        let u = HashAssigner::new(0).uniform01(&0u64);
        assert!((u - 0.8220482170167491).abs() < 1e-12);
    }

    #[test]
    fn test_stream_wraps_seed() {
        let mut stream = HashAssigner::new(u32::MAX).stream(&"apple");
        assert_eq!(stream.next_u32(), HashAssigner::new(u32::MAX).hash("apple"));
        assert_eq!(stream.next_u32(), HashAssigner::new(0).hash("apple"));
    }

    #[test]
    fn test_next_below() {
        let mut stream = HashAssigner::new(9).stream(&17u64);
        for _ in 0..100 {
            assert!(stream.next_below(3) < 3);
        }
    }
}
