use text_size::{TextRange, TextSize};

/// Source range tracking for tree nodes
///
/// A node either has a known range (`start >= 0`, `length >= 0`) or none at all.
/// The "unknown" form is written `(-1, 0)` at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange(Option<TextRange>);

impl SourceRange {
    /// Start position used to denote an unknown range.
    pub const UNKNOWN_START: i64 = -1;
    /// Length used to denote an unknown range.
    pub const UNKNOWN_LENGTH: i64 = 0;
    /// The unknown range.
    pub const UNKNOWN: SourceRange = SourceRange(None);

    /// Build a range from raw start/length values.
    ///
    /// Returns `None` when the pair is neither a valid range nor the
    /// explicit unknown sentinel.
    pub fn from_raw(start: i64, length: i64) -> Option<Self> {
        if start == Self::UNKNOWN_START && length == Self::UNKNOWN_LENGTH {
            return Some(Self::UNKNOWN);
        }
        if start < 0 || length < 0 {
            return None;
        }
        let start = u32::try_from(start).ok()?;
        let length = u32::try_from(length).ok()?;
        let end = start.checked_add(length)?;
        Some(Self(Some(TextRange::new(
            TextSize::new(start),
            TextSize::new(end),
        ))))
    }

    pub fn new(range: TextRange) -> Self {
        Self(Some(range))
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    pub fn text_range(&self) -> Option<TextRange> {
        self.0
    }

    /// Start offset, or `-1` when unknown.
    pub fn start(&self) -> i64 {
        self.0
            .map_or(Self::UNKNOWN_START, |r| i64::from(u32::from(r.start())))
    }

    /// Length, or `0` when unknown.
    pub fn length(&self) -> i64 {
        self.0
            .map_or(Self::UNKNOWN_LENGTH, |r| i64::from(u32::from(r.len())))
    }

    /// Exclusive end offset, or `-1` when unknown.
    pub fn end(&self) -> i64 {
        self.0
            .map_or(Self::UNKNOWN_START, |r| i64::from(u32::from(r.end())))
    }

    /// Check whether `other` lies entirely within this range.
    pub fn covers(&self, other: &SourceRange) -> bool {
        match (self.0, other.0) {
            (Some(outer), Some(inner)) => outer.contains_range(inner),
            _ => false,
        }
    }
}
