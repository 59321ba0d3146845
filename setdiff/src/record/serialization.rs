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


//! Binary layout of a record set, little-endian:
//!
//! ```text
//! Byte 0: serial version
//! Byte 1: method id
//! Bytes 2-3: reserved, zero
//! Bytes 4-7: seed (u32)
//! Bytes 8-15: record count (u64)
//! Then per record: actual (u64), estimated (f64)
//! ```

use byteorder::ByteOrder;
use byteorder::LE;

use crate::common::Method;
use crate::error::Error;
use crate::record::EstimationRecord;
use crate::record::RecordSet;

pub(super) const SERIAL_VERSION: u8 = 1;

const SERIAL_VERSION_BYTE: usize = 0;
const METHOD_BYTE: usize = 1;
const SEED_INT: usize = 4;
const COUNT_LONG: usize = 8;
const PREAMBLE_BYTES: usize = 16;
const RECORD_BYTES: usize = 16;

pub(super) fn serialize(set: &RecordSet) -> Vec<u8> {
    let mut bytes = vec![0u8; PREAMBLE_BYTES + set.records.len() * RECORD_BYTES];
    bytes[SERIAL_VERSION_BYTE] = SERIAL_VERSION;
    bytes[METHOD_BYTE] = set.method.id();
    LE::write_u32(&mut bytes[SEED_INT..], set.seed);
    LE::write_u64(&mut bytes[COUNT_LONG..], set.records.len() as u64);

    for (record, chunk) in set
        .records
        .iter()
        .zip(bytes[PREAMBLE_BYTES..].chunks_exact_mut(RECORD_BYTES))
    {
        LE::write_u64(&mut chunk[..8], record.actual);
        LE::write_f64(&mut chunk[8..], record.estimated);
    }
    bytes
}

pub(super) fn deserialize(bytes: &[u8]) -> Result<RecordSet, Error> {
    if bytes.len() < PREAMBLE_BYTES {
        return Err(Error::malformed("record set shorter than its preamble")
            .with_context("len", bytes.len()));
    }

    let version = bytes[SERIAL_VERSION_BYTE];
    if version != SERIAL_VERSION {
        return Err(Error::malformed("unsupported serial version")
            .with_context("expected", SERIAL_VERSION)
            .with_context("actual", version));
    }

    let method_id = bytes[METHOD_BYTE];
    let method = Method::from_id(method_id).ok_or_else(|| {
        Error::malformed("unknown method id").with_context("method_id", method_id)
    })?;

    let seed = LE::read_u32(&bytes[SEED_INT..]);
    let count = LE::read_u64(&bytes[COUNT_LONG..]);
    let body = &bytes[PREAMBLE_BYTES..];
    let expected = usize::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(RECORD_BYTES));
    if expected != Some(body.len()) {
        return Err(Error::malformed("record count does not match data length")
            .with_context("count", count)
            .with_context("len", body.len()));
    }

    let records = body
        .chunks_exact(RECORD_BYTES)
        .map(|chunk| EstimationRecord {
            actual: LE::read_u64(&chunk[..8]),
            estimated: LE::read_f64(&chunk[8..]),
        })
        .collect();
    Ok(RecordSet::new(method, seed, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_layout() {
        let set = RecordSet::new(Method::Hll, 0x01020304, vec![EstimationRecord::new(5, 1.5)]);
        let bytes = serialize(&set);
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..8], &[1, 3, 0, 0, 4, 3, 2, 1]);
        assert_eq!(&bytes[8..16], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[16..24], &[5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[24..], &1.5f64.to_le_bytes());
    }

    #[test]
    fn test_rejects_malformed() {
        let set = RecordSet::new(Method::Tow, 1, vec![EstimationRecord::new(2, 2.0)]);
        let bytes = serialize(&set);

        let err = deserialize(&bytes[..10]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);

        let err = deserialize(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);

        let mut bad_version = bytes.clone();
        bad_version[SERIAL_VERSION_BYTE] = 9;
        assert!(deserialize(&bad_version).is_err());

        let mut bad_method = bytes;
        bad_method[METHOD_BYTE] = 0;
        let err = deserialize(&bad_method).unwrap_err();
        assert_eq!(err.context("method_id"), Some("0"));
    }
}
