//! Domain logic - pure version rules independent of configuration and I/O

pub mod tag;
pub mod version;

pub use tag::{Tag, TagKind};
pub use version::VersionInfo;
