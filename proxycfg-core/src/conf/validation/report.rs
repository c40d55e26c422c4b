use crate::conf::error::{ConfigError, ParseError, ValidationError};
use crate::conf::validation::ValidationErrors;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in &self.errors {
            let _ = writeln!(out, "{}: {} error: {}", issue.path, issue.kind, issue.message);
            if let Some(help) = issue.help {
                let _ = writeln!(out, "  help: {help}");
            }
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        if !self.has_violations() {
            return out;
        }

        let _ = writeln!(
            out,
            "configuration validation failed ({} errors)\n",
            self.errors.len()
        );
        for issue in &self.errors {
            let _ = writeln!(out, "{}", issue.path.bold());
            let _ = writeln!(out, "  {}: {}", "error".red().bold(), issue.message);
            if let Some(help) = issue.help {
                let _ = writeln!(out, "  {}: {}", "help".cyan().bold(), help);
            }
            let _ = writeln!(out);
        }
        out
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors
                .iter()
                .map(|e| ValidationIssue {
                    path: e.path().to_owned(),
                    kind: e.kind(),
                    message: e.message(),
                    help: error_hint(e),
                })
                .collect(),
        }
    }
}

fn error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { source, .. } => match source {
            ParseError::MissingPortSeparator { .. } | ParseError::InvalidPort { .. } => {
                Some("Listener addresses are written as host:port, e.g. 0.0.0.0:6379")
            }
            ParseError::MalformedOptions { .. } => {
                Some("Protocol options must be a JSON document, or empty for none")
            }
            ParseError::InvalidDuration { .. } => {
                Some("Durations are seconds with an 's' suffix, or empty to leave them unset")
            }
            _ => None,
        },
        ConfigError::Validation { source, .. } => match source {
            ValidationError::Immutable { .. } => {
                Some("Create a new configuration to use a different service name")
            }
            ValidationError::OrphanedVariant { .. } => {
                Some("Only the selected variant may carry a payload; select it first")
            }
            _ => None,
        },
    }
}
