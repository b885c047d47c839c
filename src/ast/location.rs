//! Source locations for comment nodes
//!
//! ## Types
//!
//! - [`SourceLocation`] - a byte offset into the translation unit's comment buffer
//! - [`SourceRange`] - a begin/end pair of locations
//!
//! Locations may be invalid. The parser creates some nodes before their extent is known
//! (an empty paragraph has no location at all), and derived locations of an invalid location
//! stay invalid, so callers never do arithmetic on a missing value by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte offset into the comment source, or the invalid location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceLocation(u32);

impl SourceLocation {
    pub const INVALID: SourceLocation = SourceLocation(u32::MAX);

    pub fn new(offset: u32) -> Self {
        debug_assert!(offset != u32::MAX, "offset collides with the invalid location");
        Self(offset)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Byte offset, or `None` for the invalid location.
    pub fn offset(self) -> Option<u32> {
        self.is_valid().then_some(self.0)
    }

    /// Location `delta` bytes away from this one. Invalid stays invalid.
    pub fn with_offset(self, delta: i32) -> Self {
        if !self.is_valid() {
            return self;
        }
        match self.0.checked_add_signed(delta) {
            Some(offset) if offset != u32::MAX => Self(offset),
            _ => Self::INVALID,
        }
    }

    /// Location `len` bytes after this one, for spans measured by text length.
    pub(crate) fn advanced_by(self, len: usize) -> Self {
        i32::try_from(len).map_or(Self::INVALID, |delta| self.with_offset(delta))
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "{}", offset),
            None => f.write_str("<invalid>"),
        }
    }
}

/// A begin/end pair of locations. Both ends are inclusive positions of the
/// first and last meaningful byte boundaries, as produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceRange {
    pub begin: SourceLocation,
    pub end: SourceLocation,
}

impl SourceRange {
    pub fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        Self { begin, end }
    }

    /// Range built from raw offsets.
    pub fn from_offsets(begin: u32, end: u32) -> Self {
        Self::new(SourceLocation::new(begin), SourceLocation::new(end))
    }

    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.begin.is_valid() && self.end.is_valid()
    }

    /// Whether `other` lies entirely inside this range. Invalid ranges contain nothing
    /// and an invalid `other` is contained by any valid range.
    pub fn contains_range(&self, other: &SourceRange) -> bool {
        if !self.is_valid() {
            return false;
        }
        if !other.is_valid() {
            return true;
        }
        self.begin <= other.begin && other.end <= self.end
    }

    /// Smallest range covering both. Invalid ranges are ignored.
    pub fn union(&self, other: &SourceRange) -> SourceRange {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => SourceRange::new(self.begin.min(other.begin), self.end.max(other.end)),
            (true, false) => *self,
            (false, _) => *other,
        }
    }

    /// Build a bounding box that contains all valid ranges provided.
    pub fn bounding_box<I>(ranges: I) -> Option<SourceRange>
    where
        I: IntoIterator<Item = SourceRange>,
    {
        ranges
            .into_iter()
            .filter(SourceRange::is_valid)
            .fold(None, |acc: Option<SourceRange>, range| {
                Some(acc.map_or(range, |acc| acc.union(&range)))
            })
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_is_default() {
        assert_eq!(SourceLocation::default(), SourceLocation::INVALID);
        assert!(!SourceRange::default().is_valid());
    }

    #[test]
    fn test_with_offset() {
        let loc = SourceLocation::new(10);
        assert_eq!(loc.with_offset(1), SourceLocation::new(11));
        assert_eq!(loc.with_offset(-1), SourceLocation::new(9));
        assert_eq!(loc.with_offset(-11), SourceLocation::INVALID);
        assert_eq!(SourceLocation::INVALID.with_offset(3), SourceLocation::INVALID);
    }

    #[test]
    fn test_contains_range() {
        let outer = SourceRange::from_offsets(2, 20);
        assert!(outer.contains_range(&SourceRange::from_offsets(2, 20)));
        assert!(outer.contains_range(&SourceRange::from_offsets(5, 6)));
        assert!(!outer.contains_range(&SourceRange::from_offsets(1, 6)));
        assert!(!outer.contains_range(&SourceRange::from_offsets(5, 21)));
        assert!(outer.contains_range(&SourceRange::invalid()));
        assert!(!SourceRange::invalid().contains_range(&outer));
    }

    #[test]
    fn test_bounding_box_skips_invalid() {
        let ranges = [
            SourceRange::from_offsets(8, 12),
            SourceRange::invalid(),
            SourceRange::from_offsets(3, 5),
        ];
        assert_eq!(
            SourceRange::bounding_box(ranges),
            Some(SourceRange::from_offsets(3, 12))
        );
        assert_eq!(SourceRange::bounding_box(std::iter::empty()), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SourceRange::from_offsets(1, 4).to_string(), "1..4");
        assert_eq!(SourceLocation::INVALID.to_string(), "<invalid>");
    }
}
