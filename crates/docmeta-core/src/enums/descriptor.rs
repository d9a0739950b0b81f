//! Built enum descriptors

use crate::constraint::ValueConstraint;
use serde::Serialize;

/// Opening of the display text when no designated field resolved.
///
/// The leading comma lets callers append the text directly to an existing
/// description.
pub const UNLABELED_PREFIX: &str = ",(";

/// Opening of the display text when a designated field resolved
pub const LABELED_PREFIX: &str = "(";

pub const DISPLAY_SUFFIX: &str = ")";

const ENTRY_SEPARATOR: &str = ";";

/// One constant of an enum type, as documented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstantEntry {
	pub(crate) code: String,
	pub(crate) label: String,
	pub(crate) ordinal: usize,
	pub(crate) name: String,
}

impl EnumConstantEntry {
	/// Ordinal position (decimal) or the stringified code field
	pub fn code(&self) -> &str {
		&self.code
	}

	/// Canonical name or the stringified message field
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Zero-based declaration position
	pub fn ordinal(&self) -> usize {
		self.ordinal
	}

	/// Canonical constant name, whatever the label is
	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Which designated fields resolved on the type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldResolution {
	pub code: bool,
	pub message: bool,
}

impl FieldResolution {
	/// Neither field resolved: codes are ordinals and labels are names.
	pub fn is_unlabeled(&self) -> bool {
		!self.code && !self.message
	}
}

/// Ordered code/label pairs of an enum type plus their display text
///
/// Immutable once built. A different field-name configuration needs a new
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
	entries: Vec<EnumConstantEntry>,
	display_text: String,
	resolution: FieldResolution,
}

impl EnumDescriptor {
	pub(crate) fn new(entries: Vec<EnumConstantEntry>, resolution: FieldResolution) -> Self {
		let display_text = render_display_text(&entries, resolution);
		Self {
			entries,
			display_text,
			resolution,
		}
	}

	pub fn entries(&self) -> &[EnumConstantEntry] {
		&self.entries
	}

	/// Display text, e.g. `,(0:RED;1:GREEN)` or `(R:Red;G:Green)`
	pub fn display_text(&self) -> &str {
		&self.display_text
	}

	pub fn resolution(&self) -> FieldResolution {
		self.resolution
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Appends the display text to an existing description, if there is one.
	///
	/// # Examples
	///
	/// ```
	/// use docmeta_core::enums::{build_enum_descriptor, EnumTable};
	///
	/// let color = EnumTable::new("Color").with_constants(["RED", "GREEN"]);
	/// let descriptor = build_enum_descriptor(&color, None, None).unwrap();
	///
	/// assert_eq!(descriptor.describe(Some("Paint color")), "Paint color,(0:RED;1:GREEN)");
	/// assert_eq!(descriptor.describe(None), ",(0:RED;1:GREEN)");
	/// ```
	pub fn describe(&self, existing: Option<&str>) -> String {
		match existing {
			Some(description) => format!("{}{}", description, self.display_text),
			None => self.display_text.clone(),
		}
	}

	/// Values a field of this enum type accepts.
	///
	/// The codes when the code field resolved, the canonical constant names
	/// otherwise.
	pub fn allowable_values(&self) -> ValueConstraint {
		let values = self.entries.iter().map(|entry| {
			if self.resolution.code {
				entry.code.clone()
			} else {
				entry.name.clone()
			}
		});
		ValueConstraint::list(values)
	}
}

fn render_display_text(entries: &[EnumConstantEntry], resolution: FieldResolution) -> String {
	let body = entries
		.iter()
		.map(|entry| format!("{}:{}", entry.code, entry.label))
		.collect::<Vec<_>>()
		.join(ENTRY_SEPARATOR);
	let prefix = if resolution.is_unlabeled() {
		UNLABELED_PREFIX
	} else {
		LABELED_PREFIX
	};
	format!("{}{}{}", prefix, body, DISPLAY_SUFFIX)
}
