//! Template expansion for registry strings
//!
//! Registry entries use `${NAME}` placeholders in URLs, destinations, arguments, shortcuts and
//! shims. Names resolve against the [`Environment`] snapshot overlaid with per-call overrides
//! such as `version` or `installer`.

mod environment;

pub use environment::{Environment, normalize_key};

use log::warn;

use crate::error::{InstallError, Result};

/// What to do with a `${NAME}` that neither the overrides nor the environment define
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndefinedPolicy {
    /// Substitute the empty string and log a warning
    #[default]
    Empty,
    /// Fail with [`InstallError::UndefinedVariable`]
    Error,
}

/// Expands `${NAME}` placeholders against an environment snapshot
#[derive(Debug, Clone, Default)]
pub struct TemplateExpander {
    env: Environment,
    policy: UndefinedPolicy,
}

impl TemplateExpander {
    pub fn new(env: Environment, policy: UndefinedPolicy) -> Self {
        Self { env, policy }
    }

    /// Expand `template`, letting `overrides` win over environment variables.
    pub fn expand(&self, template: &str, overrides: &[(&str, &str)]) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find("${") {
            out.push_str(&rest[..pos]);
            let body = &rest[pos + 2..];

            let end = body
                .find('}')
                .ok_or_else(|| malformed(template, "unterminated variable reference"))?;
            let name = &body[..end];
            validate_name(template, name)?;

            match self.lookup(name, overrides) {
                Some(value) => out.push_str(value),
                None => match self.policy {
                    UndefinedPolicy::Empty => {
                        warn!("undefined variable '{}' in '{}', using \"\"", name, template);
                    }
                    UndefinedPolicy::Error => {
                        return Err(InstallError::UndefinedVariable {
                            name: name.to_string(),
                            template: template.to_string(),
                        });
                    }
                },
            }

            rest = &body[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn lookup<'a>(&'a self, name: &str, overrides: &'a [(&'a str, &'a str)]) -> Option<&'a str> {
        let key = normalize_key(name);
        overrides
            .iter()
            .rev()
            .find(|(k, _)| normalize_key(k) == key)
            .map(|(_, v)| *v)
            .or_else(|| self.env.get(&key))
    }
}

fn validate_name(template: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(malformed(template, "empty variable name"));
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '(' | ')')))
    {
        return Err(malformed(
            template,
            &format!("invalid character '{}' in variable name", c),
        ));
    }

    Ok(())
}

fn malformed(template: &str, reason: &str) -> InstallError {
    InstallError::TemplateExpansionFailed {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
