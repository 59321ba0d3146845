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


use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use setdiff::accuracy::compute_difference;
use setdiff::dataset::Dataset;
use setdiff::dataset::SyntheticDataset;
use setdiff::error::ErrorKind;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("setdiff_{}_{name}", std::process::id()))
}

#[test]
fn test_from_reader() {
    let input = "1 10\n1 11\n\n2 10\n1 10\n  3\t7  \n1 12\n";
    let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.entity_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(dataset.items(1), Some(&[10, 11, 12][..]));
    assert_eq!(dataset.items(2), Some(&[10][..]));
    assert_eq!(dataset.items(3), Some(&[7][..]));
    assert_eq!(dataset.items(4), None);
}

#[test]
fn test_from_reader_reports_line() {
    let input = "1 10\n\n1 x\n";
    let err = Dataset::from_reader(Cursor::new(input)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
    assert_eq!(err.context("line"), Some("3"));

    let err = Dataset::from_reader(Cursor::new("1 2 3\n")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
    assert_eq!(err.context("line"), Some("1"));
}

#[test]
fn test_from_pairs_file() {
    let path = temp_path("pairs.txt");
    fs::write(&path, "5 1\n5 2\n6 2\n6 3\n").unwrap();
    let dataset = Dataset::from_pairs_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let a = dataset.items(5).unwrap();
    let b = dataset.items(6).unwrap();
    assert_eq!(compute_difference(a, b), 2);
}

#[test]
fn test_from_missing_file() {
    let err = Dataset::from_pairs_file(temp_path("missing.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.context("path").is_some());
}

#[test]
fn test_synthetic_dataset() {
    let dataset = SyntheticDataset::new(100, 100).seed(3).generate().unwrap();
    assert_eq!(dataset.len(), 2);
    let a = dataset.items(0).unwrap();
    let b = dataset.items(1).unwrap();
    assert_eq!(a.len(), 150);
    assert_eq!(b.len(), 150);
    assert_eq!(compute_difference(a, b), 100);
    assert!(a.iter().chain(b).all(|&v| v <= u64::from(u32::MAX)));

    let skewed = SyntheticDataset::new(10, 9).ratio(1.0).generate().unwrap();
    assert_eq!(skewed.items(0).unwrap().len(), 19);
    assert_eq!(skewed.items(1).unwrap().len(), 10);

    let other = SyntheticDataset::new(100, 100).seed(4).generate().unwrap();
    assert_ne!(dataset, other);
}

#[test]
fn test_synthetic_dataset_rejects_ratio() {
    let err = SyntheticDataset::new(1, 1).ratio(-0.1).generate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
