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


use googletest::assert_that;
use googletest::prelude::near;
use setdiff::common::DifferenceSketch;
use setdiff::error::ErrorKind;
use setdiff::gxbits::GxBits;
use setdiff::gxbits::GxBitsBuilder;
use setdiff::gxbits::StoppingRule;

fn overlapping_sets() -> (Vec<u64>, Vec<u64>) {
    ((0..150).collect(), (50..200).collect())
}

fn objective_builder(size: usize, probability: f64) -> GxBitsBuilder {
    GxBits::builder()
        .size(size)
        .probability(probability)
        .tolerance(1e-9)
        .stopping_rule(StoppingRule::Objective)
        .seed(3)
}

fn estimate(gxbits: &GxBits) -> f64 {
    let (a, b) = overlapping_sets();
    gxbits
        .estimate(&gxbits.build(&a), &gxbits.build(&b))
        .unwrap()
}

#[test]
fn test_estimate_overlapping_sets() {
    let gxbits = objective_builder(1024, 0.003).build().unwrap();
    assert_that!(estimate(&gxbits), near(100.0, 10.0));

    let gxbits = objective_builder(256, 0.01).build().unwrap();
    assert_that!(estimate(&gxbits), near(100.0, 10.0));
}

#[test]
fn test_estimate_block_truncated() {
    let gxbits = objective_builder(1024, 0.01)
        .block_truncated(true)
        .num_bits(4)
        .build()
        .unwrap();
    assert_eq!(gxbits.segments(), 256);
    assert_that!(estimate(&gxbits), near(100.0, 10.0));
}

#[test]
fn test_estimate_is_stable_across_rates() {
    for (size, probability) in [(1024, 0.003), (256, 0.01)] {
        let estimates: Vec<f64> = [0.25, 0.5, 1.0]
            .into_iter()
            .map(|rate| {
                let gxbits = objective_builder(size, probability)
                    .rate(rate)
                    .build()
                    .unwrap();
                estimate(&gxbits)
            })
            .collect();
        for estimate in &estimates[1..] {
            assert_that!(*estimate, near(estimates[0], 1e-4));
        }
    }
}

#[test]
fn test_iteration_bound() {
    // a small rate needs dozens of iterations from the initial guess
    let gxbits = objective_builder(1024, 0.003)
        .rate(0.25)
        .max_iterations(5)
        .build()
        .unwrap();
    let (a, b) = overlapping_sets();
    let err = gxbits
        .estimate(&gxbits.build(&a), &gxbits.build(&b))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConverged);
    assert_eq!(err.context("iterations"), Some("5"));
}

#[test]
fn test_probability_table() {
    let gxbits = GxBits::builder().size(16).probability(0.25).build().unwrap();
    let table = gxbits.table();
    assert_eq!(table.len(), 16);
    assert_eq!(gxbits.probability(0), 0.25);
    let total: f64 = table.probabilities().iter().sum();
    assert_that!(total, near(1.0, 1e-12));
    assert!(table.probabilities().iter().all(|&q| q > 0.0 && q < 0.5));

    let truncated = GxBits::builder()
        .size(16)
        .probability(0.25)
        .block_truncated(true)
        .num_bits(4)
        .build()
        .unwrap();
    assert_eq!(truncated.segments(), 4);
    // bits of a segment share its probability
    assert_eq!(truncated.probability(0), truncated.probability(3));
    assert_that!(truncated.probability(0), near(0.25 / 4.0, 1e-15));
    let total: f64 = truncated.table().probabilities().iter().sum();
    assert_that!(total, near(1.0, 1e-12));
}

#[test]
fn test_with_seed_shares_table() {
    let gxbits = GxBits::builder().size(128).seed(1).build().unwrap();
    let reseeded = gxbits.with_seed(2);
    assert_eq!(reseeded.seed(), 2);
    assert!(std::ptr::eq(gxbits.table(), reseeded.table()));

    let items: Vec<u64> = (0..50).collect();
    assert_ne!(gxbits.build(&items), reseeded.build(&items));
}

#[test]
fn test_rejects_half_probability() {
    // the first position would flip with probability 1/2
    let err = GxBits::builder()
        .size(8)
        .probability(0.5)
        .build()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
