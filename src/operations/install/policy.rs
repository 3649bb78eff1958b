//! Per-stage failure policy

use std::fmt;

/// Pipeline stage a package failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Unwrap,
    Install,
    Shims,
    /// Shim creation in `--shim` mode
    ShimOnly,
}

impl Stage {
    fn index(self) -> usize {
        match self {
            Stage::Fetch => 0,
            Stage::Unwrap => 1,
            Stage::Install => 2,
            Stage::Shims => 3,
            Stage::ShimOnly => 4,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Fetch => "fetch",
            Stage::Unwrap => "unwrap",
            Stage::Install => "install",
            Stage::Shims => "shims",
            Stage::ShimOnly => "shim-only",
        })
    }
}

/// What a stage failure does to the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Record the package as failed and move on
    Continue,
    /// Stop the batch and return the error
    Abort,
}

/// Stage to policy mapping consulted by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    policies: [Policy; 5],
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            policies: [
                Policy::Continue, // fetch
                Policy::Abort,    // unwrap
                Policy::Continue, // install
                Policy::Continue, // shims
                Policy::Abort,    // shim-only
            ],
        }
    }
}

impl PolicyTable {
    pub fn policy(&self, stage: Stage) -> Policy {
        self.policies[stage.index()]
    }

    #[cfg(test)]
    pub fn with(mut self, stage: Stage, policy: Policy) -> Self {
        self.policies[stage.index()] = policy;
        self
    }
}
