use serde_json::Value;

use super::token::ChangeToken;
use crate::error::{BumpError, Result};

/// Category name -> change tokens, kept in the order the categories were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpMapping {
    categories: Vec<(String, Vec<String>)>,
}

impl BumpMapping {
    /// Build a mapping from `(category, tokens)` pairs
    pub fn new<C, T>(categories: impl IntoIterator<Item = (C, Vec<T>)>) -> Self
    where
        C: Into<String>,
        T: Into<String>,
    {
        BumpMapping {
            categories: categories
                .into_iter()
                .map(|(name, tokens)| (name.into(), tokens.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Parse the JSON form, e.g. `{"major":["breaking"],"patch":["fix"]}`
    ///
    /// An empty string or `{}` counts as a missing mapping.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(BumpError::config("map is required"));
        }

        let value: Value = serde_json::from_str(text)
            .map_err(|e| BumpError::config(format!("map is not valid JSON ({}): {}", e, text)))?;

        Self::from_json_value(&value)
    }

    fn from_json_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| BumpError::config(format!("map must be a JSON object, got: {}", value)))?;

        let mut categories = Vec::with_capacity(object.len());
        for (name, tokens) in object {
            let tokens = tokens
                .as_array()
                .ok_or_else(|| {
                    BumpError::config(format!(
                        "map entry '{}' must be an array of strings, got: {}",
                        name, tokens
                    ))
                })?
                .iter()
                .map(|token| {
                    token.as_str().map(str::to_string).ok_or_else(|| {
                        BumpError::config(format!(
                            "map entry '{}' contains a non-string token: {}",
                            name, token
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            categories.push((name.clone(), tokens));
        }

        Self::non_empty(categories)
    }

    /// Parse the `[map]` table of a TOML config file
    pub fn from_toml_table(table: &toml::Table) -> Result<Self> {
        let mut categories = Vec::with_capacity(table.len());
        for (name, tokens) in table {
            let tokens = tokens
                .as_array()
                .ok_or_else(|| {
                    BumpError::config(format!("map entry '{}' must be an array of strings", name))
                })?
                .iter()
                .map(|token| {
                    token.as_str().map(str::to_string).ok_or_else(|| {
                        BumpError::config(format!(
                            "map entry '{}' contains a non-string token: {}",
                            name, token
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            categories.push((name.clone(), tokens));
        }

        Self::non_empty(categories)
    }

    fn non_empty(categories: Vec<(String, Vec<String>)>) -> Result<Self> {
        if categories.is_empty() {
            return Err(BumpError::config("map is required"));
        }
        Ok(BumpMapping { categories })
    }

    /// Name of the first category listing `token`, compared exactly
    pub fn resolve(&self, token: &ChangeToken) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, tokens)| tokens.iter().any(|t| t == token.as_str()))
            .map(|(name, _)| name.as_str())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }
}
