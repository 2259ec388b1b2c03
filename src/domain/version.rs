use crate::domain::tag::{Tag, TagKind};
use std::fmt;

/// Parsed representation of one version string
///
/// Constructed fresh on every invocation by parsing the persisted version
/// string against the configured pattern. Never mutated in place; every bump
/// produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release tag; `None` means final
    pub tag: Option<Tag>,
}

impl VersionInfo {
    /// Create a final version (no pre-release tag)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionInfo {
            major,
            minor,
            patch,
            tag: None,
        }
    }

    /// Create a pre-release version
    pub fn with_tag(major: u64, minor: u64, patch: u64, kind: TagKind, num: u64) -> Self {
        VersionInfo {
            major,
            minor,
            patch,
            tag: Some(Tag::new(kind, num)),
        }
    }

    /// Same numeric triple with a different tag
    pub fn retagged(&self, tag: Option<Tag>) -> Self {
        VersionInfo { tag, ..*self }
    }

    /// Whether this is a final release (no pre-release tag)
    pub fn is_final(&self) -> bool {
        self.tag.is_none()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = &self.tag {
            write!(f, "-{}", tag)?;
        }
        Ok(())
    }
}
