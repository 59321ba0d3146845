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

use googletest::assert_that;
use googletest::prelude::near;
use setdiff::accuracy::ErrorMetric;
use setdiff::common::Method;
use setdiff::dataset::Dataset;
use setdiff::dataset::SyntheticDataset;
use setdiff::error::ErrorKind;
use setdiff::experiment::Sketcher;
use setdiff::experiment::evaluate;
use setdiff::gxbits::GxBits;
use setdiff::gxbits::StoppingRule;
use setdiff::hll::Hll;
use setdiff::odd::Odd;
use setdiff::record::EstimationRecord;
use setdiff::record::RecordSet;
use setdiff::tow::Tow;

fn chain_dataset() -> Dataset {
    (0..6u64)
        .map(|entity| (entity, (entity * 10..entity * 10 + 40).collect::<Vec<u64>>()))
        .collect()
}

#[test]
fn test_evaluate_synthetic_pair() {
    let dataset = SyntheticDataset::new(200, 60).seed(2).generate().unwrap();
    let sketchers: Vec<Sketcher> = vec![
        Odd::new(2048, 2).unwrap().into(),
        Tow::new(512, 2).unwrap().into(),
        Hll::new(2048, 2).unwrap().into(),
        GxBits::builder()
            .size(2048)
            .probability(0.002)
            .tolerance(1e-9)
            .stopping_rule(StoppingRule::Objective)
            .seed(2)
            .build()
            .unwrap()
            .into(),
    ];
    for sketcher in &sketchers {
        let records = sketcher.evaluate(&dataset, 2).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actual, 60);
        assert!(records[0].estimated.is_finite());
        assert!(records[0].estimated >= 0.0);
    }
    assert_eq!(sketchers[3].method(), Method::GxBits);
    assert_eq!(sketchers[1].size(), 512);
}

#[test]
fn test_evaluate_pairs_every_entity() {
    let dataset = chain_dataset();
    let odd = Odd::new(1024, 0).unwrap();
    let records = evaluate(&odd, &dataset, 9).unwrap();
    assert_eq!(records.len(), dataset.len() - 1);
    assert!(records.iter().all(|r| r.actual > 0 && r.actual <= 80));

    // same seed, same pairing
    assert_eq!(records, evaluate(&odd, &dataset, 9).unwrap());
}

#[test]
fn test_evaluate_single_entity() {
    let mut dataset = Dataset::new();
    dataset.insert(1, vec![1, 2, 3]);
    let records = evaluate(&Tow::new(16, 0).unwrap(), &dataset, 0).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_evaluate_error_context() {
    let dataset = SyntheticDataset::new(50, 100).seed(4).generate().unwrap();
    // the derivative never gets this small near the root
    let gxbits = GxBits::builder()
        .size(1024)
        .probability(0.003)
        .tolerance(1e-12)
        .max_iterations(10)
        .seed(4)
        .build()
        .unwrap();
    let err = evaluate(&gxbits, &dataset, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConverged);
    assert_eq!(err.context("method"), Some("gxbits"));
    assert_eq!(err.context("seed"), Some("4"));
    assert!(err.context("pair").is_some());
}

#[test]
fn test_records_round_trip_through_files() {
    let dataset = chain_dataset();
    let hll = Hll::new(512, 5).unwrap();
    let records = evaluate(&hll, &dataset, 5).unwrap();
    let set = RecordSet::new(Method::Hll, 5, records);

    let dir = std::env::temp_dir().join(format!("setdiff_records_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = set.write_to_dir(&dir).unwrap();
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("hll_5.out"));

    let restored = RecordSet::read_from(&path).unwrap();
    fs::remove_dir_all(&dir).unwrap();
    assert_eq!(restored, set);
    assert_eq!(restored.method(), Method::Hll);
    assert_eq!(restored.seed(), 5);
}

#[test]
fn test_deserialize_rejects_truncated_records() {
    let set = RecordSet::new(
        Method::Odd,
        0,
        vec![EstimationRecord::new(1, 1.0), EstimationRecord::new(2, 2.5)],
    );
    let bytes = set.serialize();
    assert_eq!(bytes.len(), 16 + 2 * 16);
    let err = RecordSet::deserialize(&bytes[..bytes.len() - 16]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
}

#[test]
fn test_aggregate_records() {
    let dataset = SyntheticDataset::new(300, 100).seed(1).generate().unwrap();
    let mut records = Vec::new();
    for seed in 0..4 {
        let odd = Odd::new(4096, seed).unwrap();
        records.extend(evaluate(&odd, &dataset, seed).unwrap());
    }
    let rse = ErrorMetric::Rse { truth: 100 }.evaluate(&records).unwrap();
    assert_that!(rse, near(0.0, 0.5));
}
