//! Pure validation rules for uploads and the bridge parameter form.
//!
//! Nothing here touches the view: the [`Gatekeeper`](crate::Gatekeeper)
//! applies the side effects around these checks.
//!
//! # Parameter rules
//!
//! | field     | min  | max   | kind    |
//! |-----------|------|-------|---------|
//! | `scale1`  | 1    | 10000 | number  |
//! | `scale2`  | 1    | 10000 | number  |
//! | `skew`    | -45  | 45    | number  |
//! | `nspan`   | 1    | 20    | integer |
//! | `lbridge` | 1    | 1000  | number  |
//! | `ccbr`    | 1    | 50    | number  |

use std::collections::BTreeMap;

use crate::config::GatekeeperConfig;
use crate::error::UploadError;
use crate::models::{SelectedFile, ValidationResult};

// =============================================================================
// File Validation
// =============================================================================

/// Checks a file against the size limit and the MIME allow-list.
///
/// Both checks always run; the size error comes first.
pub fn validate_file_constraints(config: &GatekeeperConfig, file: &SelectedFile) -> Vec<UploadError> {
    let mut errors = Vec::new();

    if file.size_bytes > config.max_file_size {
        errors.push(UploadError::OversizedFile {
            limit: config.max_file_size_label(),
        });
    }

    if !config.is_allowed_type(&file.mime_type) {
        errors.push(UploadError::UnsupportedFileType {
            allowed: config.allowed_types_label(),
        });
    }

    errors
}

/// [`validate_file_constraints`] folded into a [`ValidationResult`].
pub fn validate_file(config: &GatekeeperConfig, file: &SelectedFile) -> ValidationResult {
    ValidationResult::from_issues(validate_file_constraints(config, file))
}

// =============================================================================
// Parameter Validation
// =============================================================================

/// Numeric kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Any finite number
    Number,
    /// Whole numbers only
    Integer,
}

/// Bounds and kind for one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRule {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub kind: ParameterKind,
}

impl ParameterRule {
    const fn number(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max, kind: ParameterKind::Number }
    }

    const fn integer(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max, kind: ParameterKind::Integer }
    }

    /// Every violation for `value`. A kind failure skips the bound checks.
    pub fn check(&self, value: f64) -> Vec<UploadError> {
        match self.kind {
            ParameterKind::Number if !value.is_finite() => {
                return vec![self.non_numeric("Must be a valid number")];
            }
            ParameterKind::Integer if !value.is_finite() || value.fract() != 0.0 => {
                return vec![self.non_numeric("Must be an integer")];
            }
            _ => {}
        }

        let mut errors = Vec::new();
        if value < self.min {
            errors.push(self.out_of_range(format!("Must be at least {}", self.min)));
        }
        if value > self.max {
            errors.push(self.out_of_range(format!("Must be at most {}", self.max)));
        }
        errors
    }

    fn non_numeric(&self, message: &str) -> UploadError {
        UploadError::NonNumericParameter {
            field: self.field.to_string(),
            message: message.to_string(),
        }
    }

    fn out_of_range(&self, message: String) -> UploadError {
        UploadError::OutOfRangeParameter {
            field: self.field.to_string(),
            message,
        }
    }
}

/// Rules for the bridge parameter form, in declaration order.
pub const PARAMETER_RULES: &[ParameterRule] = &[
    ParameterRule::number("scale1", 1.0, 10000.0),
    ParameterRule::number("scale2", 1.0, 10000.0),
    ParameterRule::number("skew", -45.0, 45.0),
    ParameterRule::integer("nspan", 1.0, 20.0),
    ParameterRule::number("lbridge", 1.0, 1000.0),
    ParameterRule::number("ccbr", 1.0, 50.0),
];

/// Parameter name to value mapping submitted by the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw form inputs.
    ///
    /// Blank inputs are treated as absent; text that does not parse as a
    /// number is kept as NaN so it fails the kind check.
    pub fn from_form<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut set = Self::new();
        for (name, raw) in fields {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            set.insert(name, raw.parse::<f64>().unwrap_or(f64::NAN));
        }
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON object for the backend `/validate` endpoint. The backend
    /// names parameters in upper case (`SCALE1`, `NSPAN`); non-finite
    /// values serialize as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(name, value)| {
                let json = serde_json::Number::from_f64(*value)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null);
                (name.to_ascii_uppercase(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Validates `parameters` against [`PARAMETER_RULES`].
pub fn validate_parameters(parameters: &ParameterSet) -> ValidationResult {
    validate_parameters_with(PARAMETER_RULES, parameters)
}

/// Validates `parameters` against an arbitrary rule table.
///
/// Fields absent from the set are skipped. All violations are collected,
/// ordered by the rule table.
pub fn validate_parameters_with(rules: &[ParameterRule], parameters: &ParameterSet) -> ValidationResult {
    let issues = rules.iter().flat_map(|rule| {
        parameters
            .get(rule.field)
            .map(|value| rule.check(value))
            .unwrap_or_default()
    });
    ValidationResult::from_issues(issues)
}
