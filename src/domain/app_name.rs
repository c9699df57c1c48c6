use serde::{Deserialize, Deserializer};

use super::AppError;

/// A validated application name, used as the packaging tool's output base name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - Not `.` or `..`, so it can never escape `dist/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(pub(super) String);

impl AppName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidAppName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the metadata file the packaging tool writes next to the entry file.
    pub fn spec_file_name(&self) -> String {
        format!("{}.spec", self.0)
    }
}

fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl std::ops::Deref for AppName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for AppName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for AppName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AppName::new(&s).map_err(serde::de::Error::custom)
    }
}
