//! Tokenizer for `range<open><lower>,<upper><close>` expressions.
//!
//! The scanner works on the compacted expression (whitespace already removed)
//! and yields the four parts in order: opening delimiter, lower bound, upper
//! bound, closing delimiter. Once the keyword and an opening delimiter are
//! seen, scanning stops at the first part it cannot find and reports how many
//! parts it found, so the caller can tell a malformed range from an expression
//! that is not a range at all.

/// Keyword every range expression starts with
pub(crate) const RANGE_KEYWORD: &str = "range";

/// Bound text that marks a side as unbounded
pub(crate) const INFINITY_SENTINEL: &str = "infinity";

/// Bracket style of one side of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
	/// `[` or `]`
	Inclusive,
	/// `(` or `)`
	Exclusive,
}

impl Delimiter {
	fn opening(c: char) -> Option<Self> {
		match c {
			'[' => Some(Self::Inclusive),
			'(' => Some(Self::Exclusive),
			_ => None,
		}
	}

	fn closing(c: char) -> Option<Self> {
		match c {
			']' => Some(Self::Inclusive),
			')' => Some(Self::Exclusive),
			_ => None,
		}
	}

	pub(crate) fn is_exclusive(self) -> bool {
		self == Self::Exclusive
	}
}

/// The four parts of a complete range expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RangeTokens<'a> {
	pub open: Delimiter,
	pub lower: &'a str,
	pub upper: &'a str,
	pub close: Delimiter,
}

/// Outcome of scanning one compacted expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RangeScan<'a> {
	/// The expression does not start with the keyword and an opening delimiter
	NotRange,
	/// The keyword and opening delimiter were present but only this many parts were found
	Partial(usize),
	/// All four parts were found
	Complete(RangeTokens<'a>),
}

/// Scans a compacted expression for the range grammar.
///
/// The lower and upper bounds are split at the last comma, so a lower bound
/// may itself contain commas while the upper bound never does.
pub(crate) fn scan(compact: &str) -> RangeScan<'_> {
	let Some(rest) = compact.strip_prefix(RANGE_KEYWORD) else {
		return RangeScan::NotRange;
	};

	let mut chars = rest.chars();
	let Some(open) = chars.next().and_then(Delimiter::opening) else {
		// `ranger`, `range{...}`: a literal that happens to start with the keyword
		return RangeScan::NotRange;
	};
	let body = chars.as_str();

	let Some((lower, tail)) = body.rsplit_once(',') else {
		return RangeScan::Partial(1);
	};

	let mut tail_chars = tail.chars();
	let Some(close) = tail_chars.next_back().and_then(Delimiter::closing) else {
		return RangeScan::Partial(3);
	};

	RangeScan::Complete(RangeTokens {
		open,
		lower,
		upper: tail_chars.as_str(),
		close,
	})
}

/// Maps a bound token to its stored form: `None` when it names infinity.
pub(crate) fn bound(token: &str) -> Option<String> {
	if token.contains(INFINITY_SENTINEL) {
		None
	} else {
		Some(token.to_string())
	}
}
