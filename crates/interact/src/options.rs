//! Keyboard behavior configuration.
//!
//! Loaded from host-provided JSON (camelCase keys, every field optional).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which keyboard conveniences the embedding application has opted into.
/// Everything defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardOptions {
    /// Ctrl/Cmd+A selects the whole grid.
    pub select_all_on_ctrl_a: bool,
    /// The copy event exports the current selection to the clipboard.
    pub copy_selected: bool,
}

impl KeyboardOptions {
    /// Parse options from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(json).map_err(OptionsError::Parse)
    }
}

/// Errors from keyboard-option parsing.
#[derive(Debug)]
pub enum OptionsError {
    Parse(serde_json::Error),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Parse(e) => write!(f, "invalid keyboard options: {}", e),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Parse(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        let opts = KeyboardOptions::from_json(
            r#"{"selectAllOnCtrlA": true, "copySelected": true}"#,
        )
        .unwrap();
        assert!(opts.select_all_on_ctrl_a);
        assert!(opts.copy_selected);
    }

    #[test]
    fn test_missing_fields_default_off() {
        let opts = KeyboardOptions::from_json(r#"{"copySelected": true}"#).unwrap();
        assert!(!opts.select_all_on_ctrl_a);
        assert!(opts.copy_selected);

        let opts = KeyboardOptions::from_json("{}").unwrap();
        assert_eq!(opts, KeyboardOptions::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = KeyboardOptions::from_json("{nope").unwrap_err();
        assert!(err.to_string().contains("invalid keyboard options"));
    }
}
