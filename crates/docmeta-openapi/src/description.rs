//! Placeholder resolution in annotation text

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\$\{([^}:]+)(?::([^}]*))?\}").expect("PLACEHOLDER_REGEX: invalid regex pattern")
});

/// Resolves the text of an annotation into the description that is emitted
pub trait DescriptionResolver {
	fn resolve(&self, text: &str) -> String;
}

/// Emits annotation text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDescriptions;

impl DescriptionResolver for PlainDescriptions {
	fn resolve(&self, text: &str) -> String {
		text.to_string()
	}
}

/// Replaces `${key}` and `${key:default}` placeholders from a property map
///
/// A placeholder whose key is unknown falls back to its default; without a
/// default it is left as written.
///
/// # Examples
///
/// ```
/// use docmeta_openapi::{DescriptionResolver, PropertyDescriptions};
///
/// let descriptions = PropertyDescriptions::new().property("status.doc", "Order status");
///
/// assert_eq!(descriptions.resolve("${status.doc}"), "Order status");
/// assert_eq!(descriptions.resolve("${missing:Fallback}"), "Fallback");
/// assert_eq!(descriptions.resolve("${missing}"), "${missing}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyDescriptions {
	properties: HashMap<String, String>,
}

impl PropertyDescriptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.properties.insert(key.into(), value.into());
		self
	}
}

impl FromIterator<(String, String)> for PropertyDescriptions {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			properties: iter.into_iter().collect(),
		}
	}
}

impl DescriptionResolver for PropertyDescriptions {
	fn resolve(&self, text: &str) -> String {
		PLACEHOLDER_REGEX
			.replace_all(text, |caps: &Captures<'_>| {
				let key = caps[1].trim();
				match (self.properties.get(key), caps.get(2)) {
					(Some(value), _) => value.clone(),
					(None, Some(default)) => default.as_str().to_string(),
					(None, None) => {
						tracing::debug!(key, "No description property for placeholder");
						caps[0].to_string()
					}
				}
			})
			.into_owned()
	}
}
