//! Version pattern compilation, parsing and formatting
//!
//! A pattern is a template string encoding which version fields appear and
//! their literal separators. Two placeholder dialects are supported behind one
//! parse/format contract:
//!
//! - **Modern**: bare uppercase tokens, e.g. `MAJOR.MINOR.PATCH[-TAGNUM]`
//! - **Legacy**: brace placeholders, e.g. `{major}.{minor}.{patch}[-{tag}{tag_num}]`
//!
//! Square brackets delimit an optional segment: it is rendered only when the
//! version carries the fields inside it (a non-final tag for `TAG`/`NUM`, a
//! post-release for `POST`), and is allowed to be absent when parsing.
//!
//! The dialect is auto-detected once per compilation: a pattern is legacy iff
//! it contains any brace placeholder from the legacy field vocabulary.

use regex::Regex;

use crate::domain::{Tag, TagKind, VersionInfo};
use crate::error::{EbumpError, Result};

/// Version fields a pattern placeholder can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Major,
    Minor,
    Patch,
    Tag,
    TagNum,
    Post,
}

impl Field {
    fn capture_name(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Tag => "tag",
            Field::TagNum => "tag_num",
            Field::Post => "post",
        }
    }

    fn capture_pattern(&self) -> &'static str {
        match self {
            Field::Tag => "dev|alpha|beta|rc|post",
            _ => "[0-9]+",
        }
    }
}

/// Legacy brace-placeholder vocabulary
const LEGACY_FIELDS: &[(&str, Field)] = &[
    ("major", Field::Major),
    ("minor", Field::Minor),
    ("patch", Field::Patch),
    ("tag", Field::Tag),
    ("tag_num", Field::TagNum),
    ("post", Field::Post),
];

/// Modern bare-token vocabulary. Matched longest-first so `PATCH` and `POST`
/// win over `TAG`.
const MODERN_TOKENS: &[(&str, Field)] = &[
    ("MAJOR", Field::Major),
    ("MINOR", Field::Minor),
    ("PATCH", Field::Patch),
    ("POST", Field::Post),
    ("TAG", Field::Tag),
    ("NUM", Field::TagNum),
];

/// Placeholder dialect a pattern uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Brace placeholders: `{major}`, `{tag_num}`, ...
    Legacy,
    /// Bare uppercase tokens: `MAJOR`, `NUM`, ...
    Modern,
}

/// One parsed element of a pattern template
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Literal(String),
    Field(Field),
    /// Optional segment; no nesting
    Optional(Vec<Piece>),
}

/// A compiled version pattern
///
/// Compilation detects the dialect, checks the placeholder vocabulary and
/// builds the match regex once; `parse` and `format` then work off the
/// compiled form.
#[derive(Debug)]
pub struct Pattern {
    raw: String,
    dialect: Dialect,
    pieces: Vec<Piece>,
    regex: Regex,
    has_post: bool,
}

impl Pattern {
    /// Compile a pattern template string
    ///
    /// Fails when the template uses an unknown brace placeholder, repeats a
    /// field, contains no fields at all, or has unbalanced `[`/`]`.
    pub fn compile(raw: &str) -> Result<Self> {
        let dialect = detect_dialect(raw);
        let pieces = tokenize(raw, dialect)?;

        let fields = collect_fields(&pieces);
        if fields.is_empty() {
            return Err(EbumpError::pattern(format!(
                "'{}' contains no version fields",
                raw
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].contains(field) {
                return Err(EbumpError::pattern(format!(
                    "'{}' uses the {} field more than once",
                    raw,
                    field.capture_name()
                )));
            }
        }

        let mut body = String::from("^");
        append_regex(&pieces, &mut body);
        body.push('$');
        let regex = Regex::new(&body)
            .map_err(|e| EbumpError::pattern(format!("'{}' cannot be compiled: {}", raw, e)))?;

        let has_post = fields.contains(&Field::Post);
        Ok(Pattern {
            raw: raw.to_string(),
            dialect,
            pieces,
            regex,
            has_post,
        })
    }

    /// The dialect this pattern was detected as
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The original template string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parse a version string against this pattern
    ///
    /// Fails when the string does not match the pattern's structure: a missing
    /// numeric component, a non-numeric value in a numeric field, or an
    /// unrecognized tag keyword.
    pub fn parse(&self, version: &str) -> Result<VersionInfo> {
        let caps = self.regex.captures(version).ok_or_else(|| {
            EbumpError::parse(format!(
                "version '{}' does not match pattern '{}'",
                version, self.raw
            ))
        })?;

        let number = |name: &str| -> Result<u64> {
            match caps.name(name) {
                Some(m) => m.as_str().parse::<u64>().map_err(|_| {
                    EbumpError::parse(format!(
                        "value '{}' is out of range for the {} field",
                        m.as_str(),
                        name
                    ))
                }),
                None => Ok(0),
            }
        };

        let major = number("major")?;
        let minor = number("minor")?;
        let patch = number("patch")?;

        let tag = if let Some(m) = caps.name("tag") {
            let kind: TagKind = m.as_str().parse()?;
            Some(Tag::new(kind, number("tag_num")?))
        } else if caps.name("post").is_some() {
            Some(Tag::new(TagKind::Post, number("post")?))
        } else {
            None
        };

        Ok(VersionInfo {
            major,
            minor,
            patch,
            tag,
        })
    }

    /// Render a version back into a string following this pattern
    ///
    /// Left-inverse of [`Pattern::parse`] for every version the bump engine
    /// can produce: `parse(format(v)) == v`.
    pub fn format(&self, info: &VersionInfo) -> String {
        let mut out = String::new();
        self.render(&self.pieces, info, &mut out);
        out
    }

    fn render(&self, pieces: &[Piece], info: &VersionInfo, out: &mut String) {
        for piece in pieces {
            match piece {
                Piece::Literal(lit) => out.push_str(lit),
                Piece::Field(field) => match field {
                    Field::Major => out.push_str(&info.major.to_string()),
                    Field::Minor => out.push_str(&info.minor.to_string()),
                    Field::Patch => out.push_str(&info.patch.to_string()),
                    Field::Tag => {
                        if let Some(tag) = &info.tag {
                            out.push_str(tag.kind.keyword());
                        }
                    }
                    Field::TagNum => {
                        if let Some(tag) = &info.tag {
                            out.push_str(&tag.num.to_string());
                        }
                    }
                    Field::Post => {
                        if let Some(tag) = &info.tag {
                            if tag.kind == TagKind::Post {
                                out.push_str(&tag.num.to_string());
                            }
                        }
                    }
                },
                Piece::Optional(parts) => {
                    if self.segment_present(parts, info) {
                        self.render(parts, info, out);
                    }
                }
            }
        }
    }

    /// Whether an optional segment carries a value for this version
    ///
    /// A segment holding the `POST` field renders only for post-releases. A
    /// segment holding `TAG`/`NUM` renders for any non-final tag, except that
    /// post-releases route to their dedicated `POST` segment when the pattern
    /// has one.
    fn segment_present(&self, parts: &[Piece], info: &VersionInfo) -> bool {
        let fields = collect_fields(parts);
        if fields.contains(&Field::Post) {
            return matches!(&info.tag, Some(tag) if tag.kind == TagKind::Post);
        }
        if fields.contains(&Field::Tag) || fields.contains(&Field::TagNum) {
            return match &info.tag {
                None => false,
                Some(tag) => !(self.has_post && tag.kind == TagKind::Post),
            };
        }
        true
    }
}

/// A pattern is legacy iff any legacy brace placeholder appears in it
fn detect_dialect(raw: &str) -> Dialect {
    let is_legacy = LEGACY_FIELDS
        .iter()
        .any(|(name, _)| raw.contains(&format!("{{{}}}", name)));
    if is_legacy {
        Dialect::Legacy
    } else {
        Dialect::Modern
    }
}

fn tokenize(raw: &str, dialect: Dialect) -> Result<Vec<Piece>> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut optional: Option<Vec<Piece>> = None;
    let mut literal = String::new();

    fn flush(literal: &mut String, target: &mut Vec<Piece>) {
        if !literal.is_empty() {
            target.push(Piece::Literal(std::mem::take(literal)));
        }
    }

    let mut i = 0;
    while i < raw.len() {
        let rest = &raw[i..];

        if rest.starts_with('[') {
            if optional.is_some() {
                return Err(EbumpError::pattern(format!(
                    "'{}' nests optional segments",
                    raw
                )));
            }
            flush(&mut literal, &mut pieces);
            optional = Some(Vec::new());
            i += 1;
            continue;
        }

        if rest.starts_with(']') {
            match optional.take() {
                Some(mut parts) => {
                    flush(&mut literal, &mut parts);
                    pieces.push(Piece::Optional(parts));
                }
                None => {
                    return Err(EbumpError::pattern(format!(
                        "']' without matching '[' in '{}'",
                        raw
                    )));
                }
            }
            i += 1;
            continue;
        }

        if rest.starts_with('{') {
            let end = rest.find('}').ok_or_else(|| {
                EbumpError::pattern(format!("unclosed placeholder in '{}'", raw))
            })?;
            let name = &rest[1..end];
            let field = LEGACY_FIELDS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, f)| *f)
                .ok_or_else(|| {
                    EbumpError::pattern(format!("unknown placeholder '{{{}}}'", name))
                })?;
            let target = optional.as_mut().unwrap_or(&mut pieces);
            flush(&mut literal, target);
            target.push(Piece::Field(field));
            i += end + 1;
            continue;
        }

        if dialect == Dialect::Modern {
            if let Some((token, field)) = MODERN_TOKENS
                .iter()
                .find(|(token, _)| rest.starts_with(token))
            {
                let target = optional.as_mut().unwrap_or(&mut pieces);
                flush(&mut literal, target);
                target.push(Piece::Field(*field));
                i += token.len();
                continue;
            }
        }

        let ch = rest
            .chars()
            .next()
            .unwrap_or_default();
        literal.push(ch);
        i += ch.len_utf8();
    }

    if optional.is_some() {
        return Err(EbumpError::pattern(format!(
            "unclosed optional segment in '{}'",
            raw
        )));
    }
    flush(&mut literal, &mut pieces);
    Ok(pieces)
}

fn collect_fields(pieces: &[Piece]) -> Vec<Field> {
    let mut fields = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Field(field) => fields.push(*field),
            Piece::Optional(parts) => fields.extend(collect_fields(parts)),
            Piece::Literal(_) => {}
        }
    }
    fields
}

fn append_regex(pieces: &[Piece], out: &mut String) {
    for piece in pieces {
        match piece {
            Piece::Literal(lit) => out.push_str(&regex::escape(lit)),
            Piece::Field(field) => {
                out.push_str("(?P<");
                out.push_str(field.capture_name());
                out.push('>');
                out.push_str(field.capture_pattern());
                out.push(')');
            }
            Piece::Optional(parts) => {
                out.push_str("(?:");
                append_regex(parts, out);
                out.push_str(")?");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODERN: &str = "MAJOR.MINOR.PATCH[-TAGNUM]";
    const LEGACY: &str = "{major}.{minor}.{patch}[-{tag}{tag_num}]";

    #[test]
    fn test_detect_modern() {
        let pattern = Pattern::compile(MODERN).unwrap();
        assert_eq!(pattern.dialect(), Dialect::Modern);
    }

    #[test]
    fn test_detect_legacy() {
        let pattern = Pattern::compile(LEGACY).unwrap();
        assert_eq!(pattern.dialect(), Dialect::Legacy);
    }

    #[test]
    fn test_parse_final() {
        let pattern = Pattern::compile(MODERN).unwrap();
        let v = pattern.parse("1.2.3").unwrap();
        assert_eq!(v, VersionInfo::new(1, 2, 3));
    }

    #[test]
    fn test_parse_tagged() {
        let pattern = Pattern::compile(MODERN).unwrap();
        let v = pattern.parse("1.0.0-beta0").unwrap();
        assert_eq!(v, VersionInfo::with_tag(1, 0, 0, TagKind::Beta, 0));
    }

    #[test]
    fn test_parse_legacy_tagged() {
        let pattern = Pattern::compile(LEGACY).unwrap();
        let v = pattern.parse("2.1.0-rc3").unwrap();
        assert_eq!(v, VersionInfo::with_tag(2, 1, 0, TagKind::Rc, 3));
    }

    #[test]
    fn test_parse_rejects_mismatch() {
        let pattern = Pattern::compile(MODERN).unwrap();
        assert!(pattern.parse("1.2").is_err());
        assert!(pattern.parse("1.2.x").is_err());
        assert!(pattern.parse("1.2.3-gamma1").is_err());
        assert!(pattern.parse("v1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_bare_tag_without_number() {
        let pattern = Pattern::compile(MODERN).unwrap();
        assert!(pattern.parse("1.2.3-beta").is_err());
    }

    #[test]
    fn test_format_final() {
        let pattern = Pattern::compile(MODERN).unwrap();
        assert_eq!(pattern.format(&VersionInfo::new(1, 2, 3)), "1.2.3");
    }

    #[test]
    fn test_format_tagged() {
        let pattern = Pattern::compile(MODERN).unwrap();
        let v = VersionInfo::with_tag(1, 1, 0, TagKind::Beta, 0);
        assert_eq!(pattern.format(&v), "1.1.0-beta0");
    }

    #[test]
    fn test_round_trip_both_dialects() {
        let versions = [
            VersionInfo::new(0, 0, 0),
            VersionInfo::new(10, 20, 30),
            VersionInfo::with_tag(1, 0, 0, TagKind::Dev, 0),
            VersionInfo::with_tag(1, 0, 0, TagKind::Alpha, 4),
            VersionInfo::with_tag(2, 5, 1, TagKind::Rc, 11),
            VersionInfo::with_tag(3, 0, 0, TagKind::Post, 1),
        ];
        for raw in [MODERN, LEGACY] {
            let pattern = Pattern::compile(raw).unwrap();
            for v in &versions {
                let rendered = pattern.format(v);
                let parsed = pattern.parse(&rendered).unwrap();
                assert_eq!(&parsed, v, "round trip through '{}' for {}", raw, rendered);
            }
        }
    }

    #[test]
    fn test_post_segment_pattern() {
        let pattern = Pattern::compile("MAJOR.MINOR.PATCH[-TAGNUM][.postPOST]").unwrap();

        let pre = VersionInfo::with_tag(1, 2, 3, TagKind::Beta, 1);
        assert_eq!(pattern.format(&pre), "1.2.3-beta1");

        let post = VersionInfo::with_tag(1, 2, 3, TagKind::Post, 2);
        assert_eq!(pattern.format(&post), "1.2.3.post2");
        assert_eq!(pattern.parse("1.2.3.post2").unwrap(), post);

        let fin = VersionInfo::new(1, 2, 3);
        assert_eq!(pattern.format(&fin), "1.2.3");
    }

    #[test]
    fn test_unknown_placeholder_is_config_error() {
        let err = Pattern::compile("{major}.{oops}").unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        assert!(Pattern::compile("MAJOR.MAJOR").is_err());
        assert!(Pattern::compile("{patch}.{patch}").is_err());
    }

    #[test]
    fn test_no_fields_rejected() {
        assert!(Pattern::compile("release").is_err());
    }

    #[test]
    fn test_unbalanced_brackets_rejected() {
        assert!(Pattern::compile("MAJOR.MINOR.PATCH[-TAGNUM").is_err());
        assert!(Pattern::compile("MAJOR.MINOR.PATCH-TAGNUM]").is_err());
        assert!(Pattern::compile("MAJOR[[-TAG]NUM]").is_err());
    }

    #[test]
    fn test_unclosed_brace_rejected() {
        assert!(Pattern::compile("{major.{minor}").is_err());
    }

    #[test]
    fn test_literal_text_with_regex_metacharacters() {
        let pattern = Pattern::compile("v(MAJOR.MINOR.PATCH)").unwrap();
        let v = pattern.parse("v(1.2.3)").unwrap();
        assert_eq!(v, VersionInfo::new(1, 2, 3));
        assert_eq!(pattern.format(&v), "v(1.2.3)");
    }
}
