//! Parsed path types and their canonical text rendering.

use std::fmt;
use std::str::FromStr;

use super::error::PathError;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named mapping entry (`name`)
    Key(String),
    /// Sequence element by position (`[n]`)
    Index(usize),
    /// Every element of a sequence (`[]`)
    Wildcard,
}

impl Segment {
    /// Returns true for segments written inside brackets.
    pub fn is_bracket(&self) -> bool {
        matches!(self, Segment::Index(_) | Segment::Wildcard)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(name) => write!(f, "{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
            Segment::Wildcard => write!(f, "[]"),
        }
    }
}

/// An ordered, immutable sequence of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates a path from already-parsed segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the final segment, returning it with the segments before it.
    pub fn split_last(&self) -> Option<(&Segment, &[Segment])> {
        self.segments.split_last()
    }

    /// Renders the first `n` segments back to canonical path text.
    ///
    /// A bracket segment is glued onto the key before it (`items[0]`) only
    /// when that key could have carried the bracket in the source text;
    /// otherwise it becomes its own part (`[0].[1]`). Either way the output
    /// parses back to the same segments.
    ///
    /// # Example
    ///
    /// ```
    /// use pathquill::path::parse;
    ///
    /// let path = parse("a.b[5].c").unwrap();
    /// assert_eq!(path.prefix(3), "a.b[5]");
    /// assert_eq!(path.prefix(1), "a");
    /// ```
    pub fn prefix(&self, n: usize) -> String {
        let mut out = String::new();
        let mut previous: Option<&Segment> = None;
        for segment in self.segments.iter().take(n) {
            if let Some(prev) = previous {
                if !(segment.is_bracket() && accepts_bracket(prev)) {
                    out.push('.');
                }
            }
            out.push_str(&segment.to_string());
            previous = Some(segment);
        }
        out
    }
}

/// Whether a bracket suffix may follow this segment in the same part.
fn accepts_bracket(segment: &Segment) -> bool {
    match segment {
        Segment::Key(name) => !name.is_empty() && !name.contains(['[', ']']),
        _ => false,
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix(self.len()))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parser::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path::new(segments)
    }
}
