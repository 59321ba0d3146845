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


//! Runs a set difference estimation experiment and reports its error.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap::ValueEnum;
use setdiff::accuracy::ErrorMetric;
use setdiff::common::Method;
use setdiff::dataset::Dataset;
use setdiff::dataset::SyntheticDataset;
use setdiff::experiment::Sketcher;
use setdiff::gxbits::GxBits;
use setdiff::gxbits::StoppingRule;
use setdiff::hll::Hll;
use setdiff::odd::Odd;
use setdiff::record::RecordSet;
use setdiff::tow::Tow;

const SYNTHETIC: &str = "synthetic";

#[derive(Parser, Debug)]
#[command(name = "setdiff-experiment", version, about = "Estimate set differences with sketches")]
struct Args {
    /// Sketch family: odd, tow, hll or gxbits.
    #[arg(long, default_value = "odd")]
    method: Method,

    /// Path of a `user item` pairs file, or `synthetic`.
    #[arg(long, default_value = SYNTHETIC)]
    dataset: String,

    /// Shared items of the synthetic pair.
    #[arg(long, default_value_t = 100)]
    intersection: usize,

    /// Difference of the synthetic pair.
    #[arg(long, default_value_t = 100)]
    difference: usize,

    /// Share of the synthetic difference held by the first entity.
    #[arg(long, default_value_t = 0.5)]
    ratio: f64,

    /// Number of rounds; round `r` uses `r` as every seed.
    #[arg(long, default_value_t = 1)]
    exp_rounds: u32,

    /// Directory receiving one record file per round.
    #[arg(long, default_value = "result")]
    output: PathBuf,

    /// Size of the odd sketch.
    #[arg(long, default_value_t = 1000)]
    odd_size: usize,

    /// Size of the Tug-of-War sketch.
    #[arg(long, default_value_t = 1000)]
    tow_size: usize,

    /// Size of the HyperLogLog sketch.
    #[arg(long, default_value_t = 1000)]
    hll_size: usize,

    /// Size of the gxbits sketch.
    #[arg(long, default_value_t = 1000)]
    gxbits_size: usize,

    /// Geometric distribution parameter of gxbits.
    #[arg(long, default_value_t = 0.15)]
    probability: f64,

    /// Use block-truncated gxbits offsets.
    #[arg(long)]
    block_truncated: bool,

    /// Bits per block-truncated segment.
    #[arg(long, default_value_t = 2)]
    num_bits: usize,

    /// Newton-Raphson iteration bound.
    #[arg(long, default_value_t = 100)]
    num_iterations: u32,

    /// Newton-Raphson stopping tolerance.
    #[arg(long, default_value_t = 0.001)]
    exp_error: f64,

    /// Newton-Raphson step scale.
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Quantity compared against the tolerance.
    #[arg(long, value_enum, default_value_t = Stopping::Derivative)]
    stopping: Stopping,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stopping {
    /// Stop once the objective's derivative is within tolerance.
    Derivative,
    /// Stop once the objective is within tolerance.
    Objective,
}

impl From<Stopping> for StoppingRule {
    fn from(value: Stopping) -> Self {
        match value {
            Stopping::Derivative => StoppingRule::Derivative,
            Stopping::Objective => StoppingRule::Objective,
        }
    }
}

impl Args {
    fn is_synthetic(&self) -> bool {
        self.dataset == SYNTHETIC
    }

    fn load_dataset(&self, round: u32) -> anyhow::Result<Dataset> {
        let dataset = if self.is_synthetic() {
            SyntheticDataset::new(self.intersection, self.difference)
                .ratio(self.ratio)
                .seed(u64::from(round))
                .generate()?
        } else {
            Dataset::from_pairs_file(&self.dataset)?
        };
        Ok(dataset)
    }

    fn sketcher(&self, seed: u32) -> anyhow::Result<Sketcher> {
        let sketcher: Sketcher = match self.method {
            Method::Odd => Odd::new(self.odd_size, seed)?.into(),
            Method::Tow => Tow::new(self.tow_size, seed)?.into(),
            Method::Hll => Hll::new(self.hll_size, seed)?.into(),
            Method::GxBits => GxBits::builder()
                .size(self.gxbits_size)
                .probability(self.probability)
                .block_truncated(self.block_truncated)
                .num_bits(self.num_bits)
                .max_iterations(self.num_iterations)
                .tolerance(self.exp_error)
                .rate(self.rate)
                .stopping_rule(self.stopping.into())
                .seed(seed)
                .build()?
                .into(),
        };
        Ok(sketcher)
    }

    fn metric(&self) -> ErrorMetric {
        if self.is_synthetic() {
            ErrorMetric::Rse {
                truth: self.difference as u64,
            }
        } else {
            ErrorMetric::Aare
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let mut sketcher = args.sketcher(0)?;
    let mut records = Vec::new();
    for round in 0..args.exp_rounds {
        let dataset = args
            .load_dataset(round)
            .with_context(|| format!("failed to load dataset {}", args.dataset))?;
        sketcher = match sketcher {
            // the probability table does not depend on the seed
            Sketcher::GxBits(gxbits) => Sketcher::GxBits(gxbits.with_seed(round)),
            _ => args.sketcher(round)?,
        };

        let round_records = sketcher.evaluate(&dataset, round)?;
        let set = RecordSet::new(args.method, round, round_records);
        let path = set.write_to_dir(&args.output)?;
        log::info!(
            "round {round}: {} records of {} entities written to {}",
            set.records().len(),
            dataset.len(),
            path.display()
        );
        records.extend(set.into_records());
    }

    let metric = args.metric();
    let error = metric.evaluate(&records)?;
    println!("{} {}: {error:.6}", args.method, metric.name());
    Ok(())
}
