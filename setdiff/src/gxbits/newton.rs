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


//! Damped Newton-Raphson solver for the GXBITS difference estimate.

use crate::error::Error;
use crate::error::ErrorKind;
use crate::gxbits::ProbabilityTable;

/// When the root finder stops iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoppingRule {
    /// Stop once `|g'(d)| <= tolerance`.
    ///
    /// This tests the derivative, not the objective. Because `|g'|` shrinks
    /// as `d` grows, iteration stops at the first estimate past the point
    /// where the derivative falls below the tolerance, which need not be a
    /// root. When the root lies before that point the iteration settles on
    /// the root without ever meeting the rule and reports
    /// [`ErrorKind::NotConverged`].
    #[default]
    Derivative,
    /// Stop once `|g(d)| <= tolerance`.
    Objective,
}

/// Damped Newton-Raphson iteration `d <- d - rate * g(d) / g'(d)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    rate: f64,
    tolerance: f64,
    max_iterations: u32,
    rule: StoppingRule,
}

impl NewtonRaphson {
    pub(super) fn new(rate: f64, tolerance: f64, max_iterations: u32, rule: StoppingRule) -> Self {
        Self {
            rate,
            tolerance,
            max_iterations,
            rule,
        }
    }

    /// Step size multiplier in `(0, 1]`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Stopping tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Maximum number of Newton updates.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Stopping rule.
    pub fn stopping_rule(&self) -> StoppingRule {
        self.rule
    }

    /// Solves for the difference `d` whose expected zero ratio under `table`
    /// matches `zero_ratio`, starting from `initial_guess`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotConverged`] if the stopping rule is not met
    /// within [`NewtonRaphson::max_iterations`] updates, or if an update
    /// produces a non-finite estimate.
    pub fn solve(
        &self,
        table: &ProbabilityTable,
        initial_guess: f64,
        zero_ratio: f64,
    ) -> Result<f64, Error> {
        let mut d = initial_guess;
        let (mut value, mut derivative) = table.objective(d, zero_ratio);
        let mut iterations = 0;

        while !self.should_stop(value, derivative) {
            if iterations == self.max_iterations {
                return Err(Error::new(
                    ErrorKind::NotConverged,
                    "stopping rule not met within the iteration bound",
                )
                .with_context("iterations", iterations)
                .with_context("estimate", d)
                .with_context("objective", value)
                .with_context("derivative", derivative)
                .with_context("tolerance", self.tolerance));
            }

            d -= self.rate * value / derivative;
            if !d.is_finite() {
                return Err(Error::new(ErrorKind::NotConverged, "estimate diverged")
                    .with_context("iterations", iterations + 1)
                    .with_context("objective", value)
                    .with_context("derivative", derivative));
            }

            (value, derivative) = table.objective(d, zero_ratio);
            iterations += 1;
            log::trace!(
                "newton iteration {iterations}: d={d}, g={value}, g'={derivative}"
            );
        }

        Ok(d)
    }

    fn should_stop(&self, value: f64, derivative: f64) -> bool {
        match self.rule {
            StoppingRule::Derivative => derivative.abs() <= self.tolerance,
            StoppingRule::Objective => value.abs() <= self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gxbits::probability::GeometricLayout;

    fn table(size: usize, probability: f64) -> ProbabilityTable {
        ProbabilityTable::new(&GeometricLayout::new(size, probability, false, 2)).unwrap()
    }

    /// Zero ratio expected for a true difference of `d`.
    fn expected_zero_ratio(table: &ProbabilityTable, d: f64) -> f64 {
        table.objective(d, 0.0).0
    }

    #[test]
    fn test_derivative_rule_returns_initial_guess_when_met() {
        let table = table(1024, 0.15);
        let (_, derivative) = table.objective(8.0, 0.99);
        assert!(derivative.abs() <= 0.001);

        let solver = NewtonRaphson::new(1.0, 0.001, 100, StoppingRule::Derivative);
        assert_eq!(solver.solve(&table, 8.0, 0.99).unwrap(), 8.0);
    }

    #[test]
    fn test_derivative_rule_reports_not_converged_at_flat_root() {
        // the root is found, but |g'| there stays above the tolerance
        let table = table(1024, 0.003);
        let zero_ratio = expected_zero_ratio(&table, 100.0);
        let solver = NewtonRaphson::new(1.0, 1e-5, 50, StoppingRule::Derivative);
        let err = solver.solve(&table, 90.0, zero_ratio).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotConverged);
        assert_eq!(err.context("iterations"), Some("50"));
        let estimate: f64 = err.context("estimate").unwrap().parse().unwrap();
        assert!((estimate - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_objective_rule_finds_root() {
        let table = table(1024, 0.003);
        let zero_ratio = expected_zero_ratio(&table, 100.0);
        let solver = NewtonRaphson::new(1.0, 1e-12, 100, StoppingRule::Objective);
        let d = solver.solve(&table, 90.0, zero_ratio).unwrap();
        assert!((d - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_identical_sketches_stop_at_zero() {
        let table = table(256, 0.15);
        let solver = NewtonRaphson::new(0.5, 1e-9, 10, StoppingRule::Objective);
        assert_eq!(solver.solve(&table, 0.0, 1.0).unwrap(), 0.0);
    }
}
