//! Constraint expression parsing
//!
//! A constraint expression is the compact string a field carries to declare
//! its allowed values. Two grammars are recognized:
//!
//! - `range[1,10]`, `range(0,infinity)`: a numeric range, `[`/`]` inclusive and
//!   `(`/`)` exclusive, with `infinity` marking an unbounded side
//! - `A, B, C` or `single`: an ordered list of literals
//!
//! Parsing never fails. Anything that matches neither grammar becomes an empty
//! list.
//!
//! ## Example
//!
//! ```rust
//! use docmeta_core::constraint::{parse_constraint, ValueConstraint};
//!
//! let range = parse_constraint("range(1, infinity)");
//! assert_eq!(
//!     range,
//!     ValueConstraint::Range {
//!         min: Some("1".to_string()),
//!         min_exclusive: true,
//!         max: None,
//!         max_exclusive: false,
//!     }
//! );
//!
//! let list = parse_constraint("A, B ,C");
//! assert_eq!(list.as_list(), Some(&["A".to_string(), "B".to_string(), "C".to_string()][..]));
//! ```

mod range;

use crate::error::EnrichError;
use range::RangeScan;
use serde::{Deserialize, Serialize};

/// Allowed values of a field, as declared by its constraint expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueConstraint {
	/// Enumerated literals in declaration order
	List { values: Vec<String> },

	/// Numeric range. A `None` bound is unbounded and its exclusivity flag is `false`.
	///
	/// Bounds are kept as written; interpreting them as numbers is up to the consumer.
	Range {
		min: Option<String>,
		min_exclusive: bool,
		max: Option<String>,
		max_exclusive: bool,
	},
}

impl Default for ValueConstraint {
	fn default() -> Self {
		Self::List { values: Vec::new() }
	}
}

impl ValueConstraint {
	/// Parses a constraint expression. See [`parse_constraint`].
	pub fn parse(raw: &str) -> Self {
		parse_constraint(raw)
	}

	/// Creates a list constraint from already split values.
	pub fn list<I, S>(values: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::List {
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	/// Returns the literals of a list constraint.
	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			Self::List { values } => Some(values),
			Self::Range { .. } => None,
		}
	}

	pub fn is_range(&self) -> bool {
		matches!(self, Self::Range { .. })
	}

	/// Returns `true` for a list without values.
	///
	/// A range is never empty, even when both sides are unbounded.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::List { values } if values.is_empty())
	}
}

impl From<&str> for ValueConstraint {
	fn from(raw: &str) -> Self {
		parse_constraint(raw)
	}
}

/// Parses a constraint expression into a [`ValueConstraint`].
///
/// The trimmed input is tried against, in order:
///
/// 1. the range grammar, with all whitespace removed first
/// 2. a comma separated list (tokens trimmed, blank tokens dropped)
/// 3. a single literal
///
/// and otherwise yields an empty list. A `range` expression that does not
/// split into its four parts is logged and handled by the later steps.
///
/// # Examples
///
/// ```rust
/// use docmeta_core::constraint::{parse_constraint, ValueConstraint};
///
/// assert_eq!(parse_constraint("single"), ValueConstraint::list(["single"]));
/// assert!(parse_constraint("  ,  , ").is_empty());
/// assert!(parse_constraint("range[1,10]").is_range());
/// ```
pub fn parse_constraint(raw: &str) -> ValueConstraint {
	let trimmed = raw.trim();

	match parse_range(trimmed) {
		Ok(Some(range)) => return range,
		Ok(None) => {}
		Err(err) => tracing::warn!("{}", err),
	}

	if trimmed.contains(',') {
		return ValueConstraint::List {
			values: trimmed
				.split(',')
				.map(str::trim)
				.filter(|item| !item.is_empty())
				.map(str::to_string)
				.collect(),
		};
	}

	if !trimmed.is_empty() {
		return ValueConstraint::List {
			values: vec![trimmed.to_string()],
		};
	}

	ValueConstraint::default()
}

/// Tries the range grammar on a trimmed expression.
///
/// Returns `Ok(None)` when the expression is not a range at all and
/// [`EnrichError::MalformedRange`] when it starts like one but is incomplete.
fn parse_range(trimmed: &str) -> Result<Option<ValueConstraint>, EnrichError> {
	let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

	match range::scan(&compact) {
		RangeScan::NotRange => Ok(None),
		RangeScan::Partial(tokens) => Err(EnrichError::MalformedRange {
			expression: trimmed.to_string(),
			tokens,
		}),
		RangeScan::Complete(tokens) => {
			let min = range::bound(tokens.lower);
			let max = range::bound(tokens.upper);
			// an unbounded side is never exclusive
			Ok(Some(ValueConstraint::Range {
				min_exclusive: min.is_some() && tokens.open.is_exclusive(),
				max_exclusive: max.is_some() && tokens.close.is_exclusive(),
				min,
				max,
			}))
		}
	}
}
