//! Collected outcome of several structural checks.

use crate::error::{Result, ValidationError};

/// Failures gathered from a run of checks.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Number of checks that ran.
    pub checks_run: usize,
    /// Failures, in the order the checks ran.
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check's outcome.
    pub fn record(&mut self, outcome: Result<()>) {
        self.checks_run += 1;
        if let Err(err) = outcome {
            self.errors.push(err);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Names of the failed checks.
    pub fn failed_checks(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::check_name).collect()
    }

    /// `Ok` when every check passed, otherwise the first failure.
    pub fn into_result(self) -> Result<()> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
