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
use setdiff::accuracy::ErrorMetric;
use setdiff::accuracy::average_absolute_relative_error;
use setdiff::accuracy::compute_difference;
use setdiff::accuracy::relative_standard_error;
use setdiff::error::ErrorKind;
use setdiff::record::EstimationRecord;

#[test]
fn test_compute_difference() {
    assert_eq!(compute_difference(&[1, 2, 3], &[2, 3, 4]), 2);
    assert_eq!(compute_difference::<u64>(&[], &[]), 0);
    assert_eq!(compute_difference(&[1, 1, 2], &[2, 2]), 1);
    assert_eq!(compute_difference(&["a", "b"], &["c"]), 3);
}

#[test]
fn test_relative_standard_error() {
    let records = [EstimationRecord::new(100, 110.0), EstimationRecord::new(100, 90.0)];
    let rse = relative_standard_error(&records, 100).unwrap();
    assert_that!(rse, near(0.1, 1e-12));

    let exact = [EstimationRecord::new(50, 50.0)];
    assert_eq!(relative_standard_error(&exact, 50).unwrap(), 0.0);
}

#[test]
fn test_relative_standard_error_rejects_degenerate_input() {
    let err = relative_standard_error(&[], 100).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);

    let records = [EstimationRecord::new(0, 1.0)];
    let err = relative_standard_error(&records, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_average_absolute_relative_error() {
    let records = [
        EstimationRecord::new(100, 110.0),
        EstimationRecord::new(200, 160.0),
        // skipped
        EstimationRecord::new(0, 7.0),
    ];
    let aare = average_absolute_relative_error(&records).unwrap();
    assert_that!(aare, near(0.15, 1e-12));
}

#[test]
fn test_average_absolute_relative_error_without_positive_actual() {
    let records = [EstimationRecord::new(0, 3.0), EstimationRecord::new(0, 0.0)];
    let err = average_absolute_relative_error(&records).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.context("records"), Some("2"));

    assert!(average_absolute_relative_error(&[]).is_err());
}

#[test]
fn test_error_metric() {
    let records = [EstimationRecord::new(100, 110.0), EstimationRecord::new(100, 90.0)];
    let rse = ErrorMetric::Rse { truth: 100 };
    assert_eq!(rse.name(), "RSE");
    assert_that!(rse.evaluate(&records).unwrap(), near(0.1, 1e-12));

    assert_eq!(ErrorMetric::Aare.name(), "AARE");
    assert_that!(ErrorMetric::Aare.evaluate(&records).unwrap(), near(0.1, 1e-12));
}
