//! Immutable snapshot of the process environment
//!
//! The snapshot is captured once at startup and threaded through every component that expands
//! templates, so expansion never reads the live environment.

use std::collections::HashMap;

/// Normalize a variable name the way template lookups expect it.
///
/// Names are upper-cased and a literal `(X86)` becomes `_X86`, which makes
/// `ProgramFiles(x86)` addressable as `PROGRAMFILES_X86`.
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase().replace("(X86)", "_X86")
}

/// Case-normalized environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the current process environment
    pub fn capture() -> Self {
        Self::from_pairs(std::env::vars_os().map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Build a snapshot from explicit key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .filter(|(k, _)| !k.as_ref().is_empty())
            .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
            .collect();

        Self { vars }
    }

    /// Look up a variable by any spelling of its name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&normalize_key(name)).map(String::as_str)
    }

    /// Return a copy of this snapshot with one variable replaced
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(normalize_key(key), value.into());
        self
    }
}
