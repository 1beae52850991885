//! Document position bitmask
//!
//! Result of `compareDocumentPosition`, see
//! <https://dom.spec.whatwg.org/#dom-node-comparedocumentposition>.

use std::fmt;

/// Set of document position flags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DocumentPosition(u16);

impl DocumentPosition {
    /// Same node
    pub const EQUAL: Self = Self(0);
    /// Nodes are in different trees
    pub const DISCONNECTED: Self = Self(0x01);
    /// Other node comes before the reference node
    pub const PRECEDING: Self = Self(0x02);
    /// Other node comes after the reference node
    pub const FOLLOWING: Self = Self(0x04);
    /// Other node is an ancestor of the reference node
    pub const CONTAINS: Self = Self(0x08);
    /// Other node is a descendant of the reference node
    pub const CONTAINED_BY: Self = Self(0x10);
    /// Ordering is implementation defined
    pub const IMPLEMENTATION_SPECIFIC: Self = Self(0x20);

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build from raw bits, dropping unknown flags.
    #[inline]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & 0x3f)
    }

    /// Check if every flag of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any flag of `other` is set.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for DocumentPosition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for DocumentPosition {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl std::ops::BitAnd for DocumentPosition {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for DocumentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(DocumentPosition, &str); 6] = [
            (DocumentPosition::DISCONNECTED, "DISCONNECTED"),
            (DocumentPosition::PRECEDING, "PRECEDING"),
            (DocumentPosition::FOLLOWING, "FOLLOWING"),
            (DocumentPosition::CONTAINS, "CONTAINS"),
            (DocumentPosition::CONTAINED_BY, "CONTAINED_BY"),
            (DocumentPosition::IMPLEMENTATION_SPECIFIC, "IMPLEMENTATION_SPECIFIC"),
        ];
        if self.is_empty() {
            return f.write_str("DocumentPosition(EQUAL)");
        }
        f.write_str("DocumentPosition(")?;
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}
