//! Enrichment settings
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! [enum_labels]
//! code_field = "code"
//! message_field = "message"
//!
//! [examples]
//! enabled = true
//! number = "1"
//! boolean = "true"
//! ```

use crate::enums::EnumLabels;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every enrichment pass
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentSettings {
	/// Field names looked up on labeled enum types
	pub enum_labels: EnumLabels,

	/// Example values filled in for scalar properties
	pub examples: ExampleSettings,
}

impl EnrichmentSettings {
	/// Replaces the enum field names.
	pub fn with_enum_labels(mut self, labels: EnumLabels) -> Self {
		self.enum_labels = labels;
		self
	}

	/// Replaces the example settings.
	pub fn with_examples(mut self, examples: ExampleSettings) -> Self {
		self.examples = examples;
		self
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if the file cannot be read, parsed or validated.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| SettingsError::Io {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string.
	pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(content).map_err(|e| SettingsError::Parse {
			message: e.to_string(),
		})?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that configured field names are identifiers.
	///
	/// An empty name is accepted and means the field is not looked up.
	pub fn validate(&self) -> Result<(), SettingsError> {
		for field in [&self.enum_labels.code_field, &self.enum_labels.message_field] {
			if !field.is_empty() && !is_identifier(field) {
				return Err(SettingsError::InvalidFieldName {
					field: field.clone(),
				});
			}
		}
		Ok(())
	}
}

/// Example values for scalar properties
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleSettings {
	pub enabled: bool,

	/// Example for numeric properties
	pub number: String,

	/// Example for boolean properties
	pub boolean: String,
}

impl Default for ExampleSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			number: "1".to_string(),
			boolean: "true".to_string(),
		}
	}
}

impl ExampleSettings {
	/// Settings that never fill in examples.
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			..Self::default()
		}
	}
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Settings loading errors
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings: {message}")]
	Parse { message: String },

	#[error("Invalid enum field name: '{field}'")]
	InvalidFieldName { field: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = EnrichmentSettings::default();
		assert_eq!(settings.enum_labels.code_field, "code");
		assert_eq!(settings.enum_labels.message_field, "message");
		assert!(settings.examples.enabled);
		assert_eq!(settings.examples.number, "1");
		assert_eq!(settings.examples.boolean, "true");
	}

	#[rstest]
	fn test_empty_toml_gives_defaults() {
		let settings = EnrichmentSettings::from_toml("").unwrap();
		assert_eq!(settings, EnrichmentSettings::default());
	}

	#[rstest]
	fn test_partial_toml() {
		let settings = EnrichmentSettings::from_toml(
			r#"
[enum_labels]
code_field = "value"

[examples]
enabled = false
"#,
		)
		.unwrap();
		assert_eq!(settings.enum_labels.code_field, "value");
		assert_eq!(settings.enum_labels.message_field, "message");
		assert!(!settings.examples.enabled);
		assert_eq!(settings.examples.number, "1");
	}

	#[rstest]
	#[case("code", true)]
	#[case("_code2", true)]
	#[case("2code", false)]
	#[case("code field", false)]
	#[case("code-field", false)]
	fn test_is_identifier(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(is_identifier(name), expected);
	}

	#[rstest]
	fn test_invalid_field_name_rejected() {
		let err = EnrichmentSettings::from_toml("[enum_labels]\nmessage_field = \"my message\"\n")
			.unwrap_err();
		assert!(matches!(err, SettingsError::InvalidFieldName { ref field } if field == "my message"));
	}

	#[rstest]
	fn test_empty_field_name_accepted() {
		let settings = EnrichmentSettings::from_toml("[enum_labels]\nmessage_field = \"\"\n").unwrap();
		assert!(settings.enum_labels.message_field.is_empty());
	}

	#[rstest]
	fn test_malformed_toml() {
		let err = EnrichmentSettings::from_toml("[enum_labels\n").unwrap_err();
		assert!(matches!(err, SettingsError::Parse { .. }));
	}
}
