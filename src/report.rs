//! Text and JSON rendering of harness results.

use serde::Serialize;

use crate::config::{Algorithm, TestConfig};
use crate::error::Result;
use crate::harness::{CrossCheck, SuiteReport, TestOutcome};

#[derive(Debug, Serialize)]
struct BenchmarkResult {
    name: &'static str,
    label: &'static str,
    size: usize,
    seed: u64,
    elapsed_seconds: f64,
    correct: bool,
}

#[derive(Debug, Serialize)]
struct FullResults<'a> {
    results: Vec<BenchmarkResult>,
    #[serde(skip_serializing_if = "no_checks")]
    cross_checks: &'a [CrossCheck],
    correctness: bool,
}

fn no_checks(checks: &&[CrossCheck]) -> bool {
    checks.is_empty()
}

impl From<&TestOutcome> for BenchmarkResult {
    fn from(outcome: &TestOutcome) -> Self {
        BenchmarkResult {
            name: outcome.algorithm.name(),
            label: outcome.algorithm.label(),
            size: outcome.size,
            seed: outcome.seed,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            correct: outcome.sorted,
        }
    }
}

fn header(algorithm: Algorithm, size: usize) -> String {
    format!("Testing {} with array size {}", algorithm.label(), size)
}

/// Header printed before a run starts
pub fn config_header(config: &TestConfig) -> String {
    header(config.algorithm(), config.size())
}

pub fn header_line(outcome: &TestOutcome) -> String {
    header(outcome.algorithm, outcome.size)
}

pub fn result_line(outcome: &TestOutcome) -> String {
    if outcome.sorted {
        format!(
            "✓ Sort completed successfully in {:.6} seconds",
            outcome.elapsed.as_secs_f64()
        )
    } else {
        "✗ Sort failed - array not properly sorted".to_string()
    }
}

pub fn cross_check_line(check: &CrossCheck) -> String {
    match (check.agree, check.sorted) {
        (true, true) => format!("✓ Cross-check at size {}: quicksort and radix agree", check.size),
        (false, _) => format!("✗ Cross-check at size {}: quicksort and radix disagree", check.size),
        (true, false) => format!("✗ Cross-check at size {}: outputs not sorted", check.size),
    }
}

pub fn render_outcome(outcome: &TestOutcome) -> String {
    format!("{}\n{}\n", header_line(outcome), result_line(outcome))
}

pub fn render_suite(report: &SuiteReport) -> String {
    let mut out = String::new();
    for outcome in &report.outcomes {
        out.push_str(&render_outcome(outcome));
    }
    for check in &report.cross_checks {
        out.push_str(&cross_check_line(check));
        out.push('\n');
    }
    let passed = report.outcomes.iter().filter(|o| o.sorted).count();
    out.push_str(&format!(
        "{}/{} runs sorted correctly, correctness: {}\n",
        passed,
        report.outcomes.len(),
        report.correctness()
    ));
    out
}

pub fn outcome_json(outcome: &TestOutcome) -> Result<String> {
    let full = FullResults {
        results: vec![outcome.into()],
        cross_checks: &[],
        correctness: outcome.sorted,
    };
    Ok(serde_json::to_string(&full)?)
}

pub fn suite_json(report: &SuiteReport) -> Result<String> {
    let full = FullResults {
        results: report.outcomes.iter().map(BenchmarkResult::from).collect(),
        cross_checks: &report.cross_checks,
        correctness: report.correctness(),
    };
    Ok(serde_json::to_string(&full)?)
}
