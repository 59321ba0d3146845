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


/// MurmurHash3 x86 32-bit of `bytes` under `seed`.
#[inline]
pub(crate) fn murmurhash3_32(bytes: &[u8], seed: u32) -> u32 {
    mur3::murmurhash3_x86_32(bytes, seed)
}

#[cfg(test)]
mod tests {
    use super::murmurhash3_32;

    #[test]
    fn test_empty_input() {
        assert_eq!(murmurhash3_32(b"", 0), 0);
        assert_eq!(murmurhash3_32(b"", 1), 0x514e28b7);
        assert_eq!(murmurhash3_32(b"", 0xffffffff), 0x81f16f39);
    }

    #[test]
    fn test_reference_vectors() {
        // whole blocks only
        assert_eq!(murmurhash3_32(b"aaaa", 0x9747b28c), 0x5a97808a);

        // one trailing byte
        assert_eq!(murmurhash3_32(b"Hello, world!", 0x9747b28c), 0x24884cba);

        // three trailing bytes
        let key = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(murmurhash3_32(key, 0x9747b28c), 0x2fa826cd);
    }

    #[test]
    fn test_short_text() {
        assert_eq!(murmurhash3_32(b"foo", 0), 4138058784);
    }
}
