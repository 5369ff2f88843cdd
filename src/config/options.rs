//! Formatter option model and the rules used to validate it

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use toml::{Table, Value};

use super::error::{ConfigError, Result};

/// Resolved option name/value mapping
pub type Options = BTreeMap<String, OptionValue>;

/// Every key the formatter understands
pub const OPTION_KEYS: &[&str] = &[
    "wrap",
    "number",
    "end_of_line",
    "validate",
    "exclude",
    "plugin",
    "extensions",
    "codeformatters",
];

/// A single option value.
///
/// Serialized untagged so JSON output mirrors the TOML it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    String(String),
    List(Vec<String>),
    /// Only used by `plugin`, whose values are per-plugin tables
    Table(Table),
}

impl OptionValue {
    /// Convert a TOML value. Floats, datetimes and non-string arrays have no
    /// counterpart and yield `None`.
    pub fn from_toml(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(OptionValue::Bool(*b)),
            Value::Integer(i) => Some(OptionValue::Integer(*i)),
            Value::String(s) => Some(OptionValue::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(OptionValue::List),
            Value::Table(table) => Some(OptionValue::Table(table.clone())),
            Value::Float(_) | Value::Datetime(_) => None,
        }
    }

    pub fn to_toml(&self) -> Value {
        match self {
            OptionValue::Bool(b) => Value::Boolean(*b),
            OptionValue::Integer(i) => Value::Integer(*i),
            OptionValue::String(s) => Value::String(s.clone()),
            OptionValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            OptionValue::Table(table) => Value::Table(table.clone()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_toml())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Integer(i)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::String(s)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

/// The formatter's built-in option values.
///
/// `extensions` and `codeformatters` have no default: absent means "all
/// installed".
pub fn default_options() -> Options {
    let mut options = Options::new();
    options.insert("wrap".to_string(), "keep".into());
    options.insert("number".to_string(), false.into());
    options.insert("end_of_line".to_string(), "lf".into());
    options.insert("validate".to_string(), true.into());
    options.insert("exclude".to_string(), OptionValue::List(vec![]));
    options.insert("plugin".to_string(), OptionValue::Table(Table::new()));
    options
}

/// Key and value checks applied to an options table read from `path`.
///
/// The formatter host supplies these; [`MdformatRules`] is the stock set.
pub trait OptionValidator {
    fn validate_keys(&self, options: &Table, path: &Path) -> Result<()>;
    fn validate_values(&self, options: &Table, path: &Path) -> Result<()>;
}

/// Validation rules of the mdformat option set
#[derive(Debug, Default, Clone, Copy)]
pub struct MdformatRules;

impl OptionValidator for MdformatRules {
    fn validate_keys(&self, options: &Table, path: &Path) -> Result<()> {
        match options
            .keys()
            .find(|key| !OPTION_KEYS.contains(&key.as_str()))
        {
            Some(key) => Err(ConfigError::InvalidKey {
                key: key.clone(),
                path: path.to_path_buf(),
            }),
            None => Ok(()),
        }
    }

    fn validate_values(&self, options: &Table, path: &Path) -> Result<()> {
        for (key, value) in options {
            if !is_valid_value(key, value) {
                return Err(ConfigError::InvalidValue {
                    key: key.clone(),
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

fn is_valid_value(key: &str, value: &Value) -> bool {
    match key {
        "wrap" => match value {
            Value::Integer(width) => *width > 1,
            Value::String(mode) => mode == "keep" || mode == "no",
            _ => false,
        },
        "end_of_line" => matches!(value.as_str(), Some("lf" | "crlf" | "keep")),
        "validate" | "number" => value.is_bool(),
        "exclude" | "extensions" | "codeformatters" => is_string_list(value),
        "plugin" => value
            .as_table()
            .is_some_and(|plugins| plugins.values().all(Value::is_table)),
        // Unknown keys are the key validator's concern
        _ => true,
    }
}

fn is_string_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_str))
}

/// Validate `table` and convert it into an [`Options`] mapping.
///
/// Keys are checked before values, matching the order in which the
/// formatter itself reports problems.
pub fn options_from_table(
    table: &Table,
    path: &Path,
    validator: &dyn OptionValidator,
) -> Result<Options> {
    validator.validate_keys(table, path)?;
    validator.validate_values(table, path)?;

    table
        .iter()
        .map(|(key, value)| match OptionValue::from_toml(value) {
            Some(option) => Ok((key.clone(), option)),
            None => Err(ConfigError::InvalidValue {
                key: key.clone(),
                path: path.to_path_buf(),
            }),
        })
        .collect()
}
