//! Bump engine - computes the next version for a requested action
//!
//! Pure functions over [`VersionInfo`]; no file or process interaction. The
//! caller parses the current version, runs [`bump`], and serializes and
//! persists the result.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Tag, TagKind, VersionInfo};
use crate::error::{EbumpError, Result};

/// Action requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Patch,
    Minor,
    Major,
    /// Re-bump the number of the current pre-release tag
    Tag,
    Alpha,
    Beta,
    Dev,
    Rc,
    Post,
    /// Clear the pre-release tag
    Final,
    /// Print the current version; handled above the engine
    Show,
}

impl FromStr for Action {
    type Err = EbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "patch" => Ok(Action::Patch),
            "minor" => Ok(Action::Minor),
            "major" => Ok(Action::Major),
            "tag" => Ok(Action::Tag),
            "alpha" => Ok(Action::Alpha),
            "beta" => Ok(Action::Beta),
            "dev" => Ok(Action::Dev),
            "rc" => Ok(Action::Rc),
            "post" => Ok(Action::Post),
            "final" => Ok(Action::Final),
            "show" => Ok(Action::Show),
            other => Err(EbumpError::unrecognized_action(other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Patch => "patch",
            Action::Minor => "minor",
            Action::Major => "major",
            Action::Tag => "tag",
            Action::Alpha => "alpha",
            Action::Beta => "beta",
            Action::Dev => "dev",
            Action::Rc => "rc",
            Action::Post => "post",
            Action::Final => "final",
            Action::Show => "show",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a bump computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpOutcome {
    /// A new version was computed and should be persisted
    Bumped(VersionInfo),
    /// `final` was requested on an already-final version; nothing to persist
    AlreadyFinal,
}

/// Compute the next version for an action
///
/// `explicit_tag` applies only to the numeric actions (patch/minor/major),
/// meaning "bump this part and set this tag"; it is ignored for every other
/// action, matching the command-line contract.
///
/// # Errors
/// * [`EbumpError::NoPreReleaseTag`] when `tag` is requested on a final version
/// * [`EbumpError::UnrecognizedAction`] when a non-bump action reaches the engine
pub fn bump(
    current: &VersionInfo,
    action: Action,
    explicit_tag: Option<TagKind>,
) -> Result<BumpOutcome> {
    let outcome = match action {
        Action::Major => BumpOutcome::Bumped(VersionInfo {
            major: current.major + 1,
            minor: 0,
            patch: 0,
            tag: explicit_tag.map(Tag::starting),
        }),
        Action::Minor => BumpOutcome::Bumped(VersionInfo {
            major: current.major,
            minor: current.minor + 1,
            patch: 0,
            tag: explicit_tag.map(Tag::starting),
        }),
        Action::Patch => BumpOutcome::Bumped(VersionInfo {
            major: current.major,
            minor: current.minor,
            patch: current.patch + 1,
            tag: explicit_tag.map(Tag::starting),
        }),
        Action::Tag => match &current.tag {
            Some(tag) => BumpOutcome::Bumped(current.retagged(Some(tag.increment()))),
            None => return Err(EbumpError::NoPreReleaseTag),
        },
        Action::Alpha => BumpOutcome::Bumped(retag(current, TagKind::Alpha)),
        Action::Beta => BumpOutcome::Bumped(retag(current, TagKind::Beta)),
        Action::Dev => BumpOutcome::Bumped(retag(current, TagKind::Dev)),
        Action::Rc => BumpOutcome::Bumped(retag(current, TagKind::Rc)),
        Action::Post => BumpOutcome::Bumped(retag(current, TagKind::Post)),
        Action::Final => {
            if current.is_final() {
                BumpOutcome::AlreadyFinal
            } else {
                BumpOutcome::Bumped(current.retagged(None))
            }
        }
        // The calling layer resolves `show` before the engine; guard anyway.
        Action::Show => return Err(EbumpError::unrecognized_action(action.to_string())),
    };
    Ok(outcome)
}

/// Move to a named tag kind: same kind increments, a different kind starts
/// over at 0. The numeric triple is untouched.
fn retag(current: &VersionInfo, kind: TagKind) -> VersionInfo {
    let tag = match &current.tag {
        Some(tag) if tag.kind == kind => tag.increment(),
        _ => Tag::starting(kind),
    };
    current.retagged(Some(tag))
}
