//! Task options.
//!
//! Options arrive loosely typed (plain strings, delimited lists, stringified
//! booleans) from the command line or a calling framework. They are parsed
//! into typed structs exactly once, before any remote call is made.

use std::collections::HashMap;

use thiserror::Error;

/// Option names shared by the tasks.
pub mod names {
    pub const SERVICE_ALIAS: &str = "service_alias";
    pub const URL: &str = "url";
    pub const EVENTS: &str = "events";
    pub const IGNORE_MISSING: &str = "ignore_missing";
}

/// A single raw option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

/// Option parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid option '{option}': {message}")]
pub struct OptionError {
    pub option: &'static str,
    pub message: String,
}

impl OptionError {
    fn new(option: &'static str, message: impl Into<String>) -> Self {
        Self {
            option,
            message: message.into(),
        }
    }

    fn required(option: &'static str) -> Self {
        Self::new(option, "option is required")
    }
}

/// Raw options keyed by name.
#[derive(Debug, Clone, Default)]
pub struct TaskOptions {
    values: HashMap<String, OptionValue>,
}

impl TaskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    fn text(&self, name: &'static str) -> Result<Option<String>, OptionError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(OptionValue::Text(s)) => Ok(Some(s.clone())),
            Some(OptionValue::List(_)) => Err(OptionError::new(name, "expected a single value, got a list")),
            Some(OptionValue::Bool(_)) => Err(OptionError::new(name, "expected a string, got a boolean")),
        }
    }

    fn required_text(&self, name: &'static str) -> Result<String, OptionError> {
        self.text(name)?.ok_or_else(|| OptionError::required(name))
    }

    fn list(&self, name: &'static str) -> Result<Option<Vec<String>>, OptionError> {
        match self.get(name) {
            None => Ok(None),
            Some(OptionValue::Text(s)) => Ok(Some(parse_list(s))),
            Some(OptionValue::List(items)) => Ok(Some(normalize_list(items.iter()))),
            Some(OptionValue::Bool(_)) => Err(OptionError::new(name, "expected a list, got a boolean")),
        }
    }

    fn flag(&self, name: &'static str, default: bool) -> Result<bool, OptionError> {
        match self.get(name) {
            None => Ok(default),
            Some(OptionValue::Bool(b)) => Ok(*b),
            Some(OptionValue::Text(s)) => {
                parse_bool(s).ok_or_else(|| OptionError::new(name, format!("'{}' is not a boolean", s)))
            }
            Some(OptionValue::List(_)) => Err(OptionError::new(name, "expected a boolean, got a list")),
        }
    }
}

/// Split a comma-delimited string into trimmed, non-empty items.
pub fn parse_list(raw: &str) -> Vec<String> {
    normalize_list(raw.split(','))
}

fn normalize_list<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Parse a stringified boolean. Returns `None` for unrecognized input.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Options common to every Stripe task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripeTaskOptions {
    /// Non-default Stripe account to use.
    pub service_alias: Option<String>,
}

impl StripeTaskOptions {
    pub fn from_options(options: &TaskOptions) -> Result<Self, OptionError> {
        Ok(Self {
            service_alias: options.text(names::SERVICE_ALIAS)?,
        })
    }
}

/// Validated options for creating a webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWebhookOptions {
    pub service: StripeTaskOptions,

    /// Endpoint URL. Syntax is left to the provider to validate.
    pub url: String,

    /// Events to subscribe, in configured order. May be empty.
    pub events: Vec<String>,
}

impl CreateWebhookOptions {
    pub fn from_options(options: &TaskOptions) -> Result<Self, OptionError> {
        Ok(Self {
            service: StripeTaskOptions::from_options(options)?,
            url: options.required_text(names::URL)?,
            events: options
                .list(names::EVENTS)?
                .ok_or_else(|| OptionError::required(names::EVENTS))?,
        })
    }
}

/// Validated options for deleting a webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteWebhookOptions {
    pub service: StripeTaskOptions,

    /// Target URL of the endpoint to delete.
    pub url: String,

    /// Succeed without deleting when no endpoint matches.
    pub ignore_missing: bool,
}

impl DeleteWebhookOptions {
    pub fn from_options(options: &TaskOptions) -> Result<Self, OptionError> {
        Ok(Self {
            service: StripeTaskOptions::from_options(options)?,
            url: options.required_text(names::URL)?,
            ignore_missing: options.flag(names::IGNORE_MISSING, false)?,
        })
    }
}
