//! Path string parser.
//!
//! A path is a `.`-separated list of parts. Each part is a key, optionally
//! followed by one bracket suffix: `name`, `name[3]`, `name[]`, `[3]` or `[]`.

use super::ast::{Path, Segment};
use super::error::{PathError, SegmentFault};

/// Parses a path string into its segments.
///
/// Parts without a well-formed trailing bracket are taken verbatim as keys,
/// stray bracket characters included. Only a bracket body that is present but
/// not a canonical non-negative integer is rejected.
///
/// # Example
///
/// ```
/// use pathquill::path::{parse, Segment};
///
/// let path = parse("items[].name").unwrap();
/// assert_eq!(
///     path.segments(),
///     &[
///         Segment::Key("items".to_string()),
///         Segment::Wildcard,
///         Segment::Key("name".to_string()),
///     ]
/// );
/// assert!(parse("items[01]").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Path, PathError> {
    let parts: Vec<&str> = raw.split('.').collect();
    let mut segments = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        split_part(part, &mut segments).map_err(|reason| PathError::InvalidSegment {
            prefix: parts[..=i].join("."),
            reason,
        })?;
    }

    Ok(Path::new(segments))
}

/// Appends the segments for one `.`-separated part.
fn split_part(part: &str, segments: &mut Vec<Segment>) -> Result<(), SegmentFault> {
    let (open, close) = match (part.find('['), part.find(']')) {
        (Some(open), Some(close)) if open < close && close == part.len() - 1 => (open, close),
        _ => {
            segments.push(Segment::Key(part.to_string()));
            return Ok(());
        }
    };

    let name = &part[..open];
    let body = &part[open + 1..close];

    let bracket = if body.is_empty() {
        Segment::Wildcard
    } else {
        Segment::Index(parse_index(body)?)
    };

    if !name.is_empty() {
        segments.push(Segment::Key(name.to_string()));
    }
    segments.push(bracket);
    Ok(())
}

/// Parses a canonical non-negative decimal integer.
fn parse_index(body: &str) -> Result<usize, SegmentFault> {
    if let Some(digits) = body.strip_prefix('-') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SegmentFault::NegativeIndex);
        }
        return Err(SegmentFault::InvalidIndex);
    }

    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SegmentFault::InvalidIndex);
    }
    // Leading zeros would not survive re-serialization.
    if body.len() > 1 && body.starts_with('0') {
        return Err(SegmentFault::InvalidIndex);
    }

    body.parse::<usize>().map_err(|_| SegmentFault::InvalidIndex)
}
