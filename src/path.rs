use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<'a> {
    pub segments: Vec<PathSegment<'a>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(tag = "type", content = "value")]
pub enum PathSegment<'a> {
    Field(Cow<'a, str>),
    Index(usize),
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum PathParseError {
    #[error("Empty field name at byte {0}")]
    EmptyField(usize),

    #[error("Invalid array index at byte {0}")]
    InvalidIndex(usize),

    #[error("Unclosed `[` at byte {0}")]
    UnclosedBracket(usize),

    #[error("Expected `.` or `[` at byte {0}")]
    MissingSeparator(usize),

    #[error("Invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
}

impl Path<'_> {
    /// An empty path - pointing to the root.
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// Converts and path segment references into Owned strings so the lifetime can be static.
    pub fn into_static(&self) -> Path<'static> {
        Path {
            segments: self.segments.iter().map(PathSegment::into_static).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if a field segment has an empty name. Such a path has no display form.
    pub fn has_empty_field(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PathSegment::Field(field) if field.is_empty()))
    }
}

impl Path<'static> {
    /// Parses the format produced by `Display`: fields separated by `.`, array indices in
    /// brackets, e.g. `contacts[1].phone`. A `.`, `[` or `\\` inside a field name is escaped
    /// with a backslash. Indices are plain decimal without leading zeros.
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        let mut segments = vec![];
        let mut i = 0;
        while i < input.len() {
            i = match (i, input.as_bytes()[i]) {
                (_, b'[') => parse_index(input, i, &mut segments)?,
                (0, _) => parse_field(input, 0, &mut segments)?,
                (_, b'.') => parse_field(input, i + 1, &mut segments)?,
                // only reachable right after an index
                _ => return Err(PathParseError::MissingSeparator(i)),
            };
        }
        Ok(Path { segments })
    }
}

impl FromStr for Path<'static> {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

/// Reads a field name starting at `start` up to the next unescaped `.` or `[`.
fn parse_field(
    input: &str,
    start: usize,
    segments: &mut Vec<PathSegment<'static>>,
) -> Result<usize, PathParseError> {
    let mut field = String::new();
    let mut end = input.len();
    let mut chars = input[start..].char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '.' | '[' => {
                end = start + offset;
                break;
            }
            '\\' => match chars.next() {
                Some((_, escaped @ ('.' | '[' | '\\'))) => field.push(escaped),
                _ => return Err(PathParseError::InvalidEscape(start + offset)),
            },
            c => field.push(c),
        }
    }
    if field.is_empty() {
        return Err(PathParseError::EmptyField(start));
    }
    segments.push(PathSegment::Field(Cow::Owned(field)));
    Ok(end)
}

/// Reads `[<index>]` starting at the `[` at `open`.
fn parse_index(
    input: &str,
    open: usize,
    segments: &mut Vec<PathSegment<'static>>,
) -> Result<usize, PathParseError> {
    let close = input[open..]
        .find(']')
        .map(|offset| open + offset)
        .ok_or(PathParseError::UnclosedBracket(open))?;
    let digits = &input[open + 1..close];
    let canonical = match digits.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if !canonical {
        return Err(PathParseError::InvalidIndex(open + 1));
    }
    let index = digits
        .parse()
        .map_err(|_| PathParseError::InvalidIndex(open + 1))?;
    segments.push(PathSegment::Index(index));
    Ok(close + 1)
}

impl PathSegment<'_> {
    pub fn into_static(&self) -> PathSegment<'static> {
        match self {
            PathSegment::Field(cow) => PathSegment::Field(Cow::Owned(cow.as_ref().to_owned())),
            PathSegment::Index(i) => PathSegment::Index(*i),
        }
    }
}

impl Debug for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(field) => {
                    if i != 0 {
                        write!(f, ".")?;
                    }
                    for c in field.chars() {
                        if matches!(c, '.' | '[' | '\\') {
                            f.write_char('\\')?;
                        }
                        f.write_char(c)?;
                    }
                }
                PathSegment::Index(i) => {
                    write!(f, "[{}]", i)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> From<Vec<PathSegment<'a>>> for Path<'a> {
    fn from(segments: Vec<PathSegment<'a>>) -> Self {
        Self { segments }
    }
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(value: &'a str) -> Self {
        Self::Field(Cow::Borrowed(value))
    }
}

impl From<usize> for PathSegment<'static> {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Path::from(vec!["contacts".into(), 1.into(), "phone".into()]).to_string(),
            "contacts[1].phone"
        );
        assert_eq!(Path::from(vec![0.into(), "id".into()]).to_string(), "[0].id");
        assert_eq!(Path::root().to_string(), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Path::parse("contacts[1].phone").unwrap(),
            Path::from(vec!["contacts".into(), 1.into(), "phone".into()])
        );
        assert_eq!(
            Path::parse("[0][2].id").unwrap(),
            Path::from(vec![0.into(), 2.into(), "id".into()])
        );
        assert_eq!(Path::parse("身份证号").unwrap(), Path::from(vec!["身份证号".into()]));
        assert_eq!(Path::parse("").unwrap(), Path::root());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Path::parse("a..b"), Err(PathParseError::EmptyField(2)));
        assert_eq!(Path::parse("a."), Err(PathParseError::EmptyField(2)));
        assert_eq!(Path::parse(".a"), Err(PathParseError::EmptyField(0)));
        assert_eq!(Path::parse("a[x]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[1"), Err(PathParseError::UnclosedBracket(1)));
    }

    #[test]
    fn index_must_be_followed_by_a_separator() {
        assert_eq!(Path::parse("a[0]b"), Err(PathParseError::MissingSeparator(4)));
        assert_eq!(Path::parse("[0]]"), Err(PathParseError::MissingSeparator(3)));
        assert_eq!(
            Path::parse("a[0].b[1][2]").unwrap(),
            Path::from(vec!["a".into(), 0.into(), "b".into(), 1.into(), 2.into()])
        );
    }

    #[test]
    fn index_must_be_canonical() {
        assert_eq!(Path::parse("a[+1]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[-1]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[01]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[ 1]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(Path::parse("a[１]"), Err(PathParseError::InvalidIndex(2)));
        assert_eq!(
            Path::parse("a[99999999999999999999999]"),
            Err(PathParseError::InvalidIndex(2))
        );
        assert_eq!(
            Path::parse("a[0][10]").unwrap(),
            Path::from(vec!["a".into(), 0.into(), 10.into()])
        );
    }

    #[test]
    fn special_characters_in_field_names_are_escaped() {
        let path = Path::from(vec!["a.b".into()]);
        assert_eq!(path.to_string(), r"a\.b");
        assert_eq!(Path::parse(r"a\.b").unwrap(), path);

        let path = Path::from(vec![r"c:\tmp".into(), "x[0]".into(), 2.into(), "]".into()]);
        assert_eq!(path.to_string(), r"c:\\tmp.x\[0][2].]");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn invalid_escapes() {
        assert_eq!(Path::parse(r"a\b"), Err(PathParseError::InvalidEscape(1)));
        assert_eq!(Path::parse(r"a.b\"), Err(PathParseError::InvalidEscape(3)));
    }

    #[test]
    fn empty_field_names() {
        let path = Path::from(vec!["a".into(), "".into()]);
        assert!(path.has_empty_field());
        assert!(!Path::parse("a[0].b").unwrap().has_empty_field());
        assert!(!Path::root().has_empty_field());
    }

    #[test]
    fn test_parse_display_agree() {
        for input in ["user.id_card", "rows[3].mobile", "a[0][1]", "x"] {
            assert_eq!(Path::parse(input).unwrap().to_string(), input);
        }
    }
}
