//! Declarative documentation directives attached to fields
//!
//! Both annotations deserialize from the same shape a field attribute would
//! carry. Every key is optional.

use serde::{Deserialize, Serialize};

/// Documentation directive on a model property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyAnnotation {
	/// Short description of the property
	pub value: String,

	/// Constraint expression, see [`docmeta_core::parse_constraint`]
	pub allowable_values: String,

	/// Declared type name overriding the inferred one
	pub data_type: String,

	pub example: String,
	pub required: bool,
	pub read_only: bool,
	pub hidden: bool,
	pub position: i32,
}

impl PropertyAnnotation {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			..Self::default()
		}
	}

	pub fn allowable_values(mut self, expression: impl Into<String>) -> Self {
		self.allowable_values = expression.into();
		self
	}

	pub fn data_type(mut self, name: impl Into<String>) -> Self {
		self.data_type = name.into();
		self
	}

	pub fn example(mut self, example: impl Into<String>) -> Self {
		self.example = example.into();
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn read_only(mut self, read_only: bool) -> Self {
		self.read_only = read_only;
		self
	}

	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	pub fn position(mut self, position: i32) -> Self {
		self.position = position;
		self
	}
}

/// Documentation directive on a request parameter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterAnnotation {
	/// Description, may contain `${key}` placeholders
	pub value: String,

	/// Constraint expression, see [`docmeta_core::parse_constraint`]
	pub allowable_values: String,
}

impl ParameterAnnotation {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			allowable_values: String::new(),
		}
	}

	pub fn allowable_values(mut self, expression: impl Into<String>) -> Self {
		self.allowable_values = expression.into();
		self
	}
}

impl From<&PropertyAnnotation> for ParameterAnnotation {
	fn from(property: &PropertyAnnotation) -> Self {
		Self {
			value: property.value.clone(),
			allowable_values: property.allowable_values.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_property_annotation_from_json() {
		let annotation: PropertyAnnotation = serde_json::from_str(
			r#"{"value": "Status", "allowable_values": "A,B", "read_only": true, "position": 3}"#,
		)
		.unwrap();
		assert_eq!(
			annotation,
			PropertyAnnotation::new("Status")
				.allowable_values("A,B")
				.read_only(true)
				.position(3)
		);
		assert!(annotation.data_type.is_empty());
		assert!(!annotation.required);
	}

	#[rstest]
	fn test_parameter_annotation_from_property() {
		let property = PropertyAnnotation::new("Page size").allowable_values("range[1,100]");
		let parameter = ParameterAnnotation::from(&property);
		assert_eq!(
			parameter,
			ParameterAnnotation::new("Page size").allowable_values("range[1,100]")
		);
	}
}
