//! Pre-release tag handling
//!
//! A pre-release tag is a named qualifier (alpha, beta, dev, rc, post) plus a
//! numeric suffix, marking a version as not-yet-final. "final" is the absence
//! of a tag and is modeled as `Option<Tag>::None` on the version.

use crate::error::{EbumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release tag kind
///
/// Release ordering of kinds is `dev < alpha < beta < rc < (final) < post`,
/// where final sits between `rc` and `post` as the absence of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Development snapshot
    Dev,
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
    /// Post-release
    Post,
}

impl TagKind {
    /// All recognized tag keywords, in release order
    pub const ALL: &'static [TagKind] = &[
        TagKind::Dev,
        TagKind::Alpha,
        TagKind::Beta,
        TagKind::Rc,
        TagKind::Post,
    ];

    /// Keyword as it appears in version strings
    pub fn keyword(&self) -> &'static str {
        match self {
            TagKind::Dev => "dev",
            TagKind::Alpha => "alpha",
            TagKind::Beta => "beta",
            TagKind::Rc => "rc",
            TagKind::Post => "post",
        }
    }

    /// Release-order rank. Final (no tag) conceptually ranks 4, between
    /// `rc` and `post`.
    fn rank(&self) -> u8 {
        match self {
            TagKind::Dev => 0,
            TagKind::Alpha => 1,
            TagKind::Beta => 2,
            TagKind::Rc => 3,
            TagKind::Post => 5,
        }
    }
}

impl Ord for TagKind {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for TagKind {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for TagKind {
    type Err = EbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(TagKind::Dev),
            "alpha" => Ok(TagKind::Alpha),
            "beta" => Ok(TagKind::Beta),
            "rc" => Ok(TagKind::Rc),
            "post" => Ok(TagKind::Post),
            other => Err(EbumpError::parse(format!(
                "unrecognized pre-release tag: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Pre-release tag with its iteration number
///
/// # Examples
/// - "alpha4" -> Tag { kind: Alpha, num: 4 }
/// - "beta0" -> Tag { kind: Beta, num: 0 }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// The tag kind (alpha, beta, dev, rc, post)
    pub kind: TagKind,
    /// Iteration number, incremented per release cycle
    pub num: u64,
}

impl Tag {
    /// Create a new tag
    pub fn new(kind: TagKind, num: u64) -> Self {
        Tag { kind, num }
    }

    /// The first tag of a kind, numbered 0
    pub fn starting(kind: TagKind) -> Self {
        Tag { kind, num: 0 }
    }

    /// Next iteration of the same kind
    pub fn increment(&self) -> Self {
        Tag {
            kind: self.kind,
            num: self.num + 1,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.num)
    }
}
