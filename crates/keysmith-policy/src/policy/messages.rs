//! Violation message templates.

use std::collections::HashMap;
use std::fmt::Display;

use keysmith_core::types::ViolationKind;

/// Message templates keyed by violation kind.
///
/// A template holds at most one placeholder for the relevant parameter:
/// `{}`, or the legacy `%s`. Overrides are merged onto the English defaults,
/// so a partial table (e.g. one localized message) is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages {
    templates: HashMap<ViolationKind, String>,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        let templates = ViolationKind::ALL
            .into_iter()
            .map(|kind| (kind, default_template(kind).to_string()))
            .collect();
        Self { templates }
    }
}

impl ErrorMessages {
    /// Template for the given kind.
    pub fn template(&self, kind: ViolationKind) -> &str {
        self.templates
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_template(kind))
    }

    /// Replace the template for one kind.
    pub fn set(&mut self, kind: ViolationKind, template: impl Into<String>) {
        self.templates.insert(kind, template.into());
    }

    /// Merge a set of overrides onto the current templates.
    pub fn merge<I, S>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (ViolationKind, S)>,
        S: Into<String>,
    {
        for (kind, template) in overrides {
            self.set(kind, template);
        }
    }

    /// Render the message for `kind`, substituting `param` into the placeholder.
    pub fn format(&self, kind: ViolationKind, param: impl Display) -> String {
        let template = self.template(kind);
        if template.contains("{}") {
            template.replacen("{}", &param.to_string(), 1)
        } else {
            template.replacen("%s", &param.to_string(), 1)
        }
    }
}

fn default_template(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::TooShort => "The password must be at least {} characters long.",
        ViolationKind::TooLong => "The password must have a maximum of {} characters.",
        ViolationKind::TooFewNumbers => "The password must contain at least {} numbers.",
        ViolationKind::TooFewLowercase => {
            "The password must contain at least {} lowercase characters."
        }
        ViolationKind::TooFewUppercase => {
            "The password must contain at least {} uppercase characters."
        }
        ViolationKind::SymbolsNotAllowed => "Symbols are not allowed in the password.",
        ViolationKind::TooFewSymbols => "The password must contain at least {} symbols.",
        ViolationKind::TooManySymbols => "The password must contain at most {} symbols.",
        ViolationKind::DisallowedSymbol => "The {} symbol is not allowed in the password.",
    }
}
