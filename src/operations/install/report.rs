//! Per-package results of a batch install

use log::error;

use crate::error::{InstallError, Result};

use super::policy::Stage;

#[derive(Debug)]
pub enum Outcome {
    Installed,
    /// `--download-only` stopped after fetching
    Downloaded,
    /// `--shim` mode created the declared shims
    ShimsCreated,
    /// Not in the registry; skipped without counting as a failure
    Unknown,
    Failed { stage: Stage, error: InstallError },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

#[derive(Debug)]
pub struct PackageReport {
    pub name: String,
    pub outcome: Outcome,
}

/// Outcomes in request order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub packages: Vec<PackageReport>,
}

impl BatchReport {
    pub fn push(&mut self, name: &str, outcome: Outcome) {
        self.packages.push(PackageReport {
            name: name.to_string(),
            outcome,
        });
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.packages
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.outcome)
    }

    pub fn has_failures(&self) -> bool {
        self.packages.iter().any(|p| p.outcome.is_failure())
    }

    /// Failed packages with the stage that failed, in request order
    pub fn failures(&self) -> impl Iterator<Item = (&str, Stage, &InstallError)> {
        self.packages.iter().filter_map(|p| match &p.outcome {
            Outcome::Failed { stage, error } => Some((p.name.as_str(), *stage, error)),
            _ => None,
        })
    }

    /// One line per failed package
    pub fn failure_summary(&self) -> Vec<String> {
        self.failures()
            .map(|(name, stage, error)| format!("{} ({}): {}", name, stage, error))
            .collect()
    }

    /// Fail with [`InstallError::BatchFailed`] if any package failed
    ///
    /// The failed packages are logged before the aggregate error is returned.
    pub fn into_result(self) -> Result<Self> {
        if !self.has_failures() {
            return Ok(self);
        }

        error!("failed packages:");
        for line in self.failure_summary() {
            error!("  {}", line);
        }
        Err(InstallError::BatchFailed)
    }
}
