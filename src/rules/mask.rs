use regex::Regex;
use serde::Deserialize;
use std::fmt;

/// A compiled rule mask.
///
/// Deserializes from the pattern string so an invalid regex is rejected while
/// the configuration is parsed, before any rule runs.
#[derive(Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Mask {
    regex: Regex,
}

impl Mask {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl TryFrom<String> for Mask {
    type Error = String;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Mask::new(&pattern).map_err(|e| format!("invalid mask `{pattern}`: {e}"))
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mask").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
