use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The title shape an extractor expects to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleShape {
    /// `(<start>-`, as read by [`extract_year_start`]
    RangeStart,
    /// `-<end>)`, as read by [`extract_year_end`]
    RangeEnd,
    /// `(<year>)` with no dash anywhere in the title
    SingleYear,
    /// Either of the above, as tried by [`parse_year_info`]
    Any,
}

impl fmt::Display for TitleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            TitleShape::RangeStart => "range start year",
            TitleShape::RangeEnd => "range end year",
            TitleShape::SingleYear => "single year",
            TitleShape::Any => "year or year range",
        };
        f.write_str(description)
    }
}

/// A title did not match the shape an extractor was looking for.
///
/// Missing delimiters and unparseable numbers are reported the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("title {title:?} does not contain a {expected}")]
pub struct FormatError {
    pub title: String,
    pub expected: TitleShape,
}

impl FormatError {
    fn new(title: &str, expected: TitleShape) -> Self {
        FormatError {
            title: title.to_string(),
            expected,
        }
    }
}

/// Year information found in a show title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum YearRange {
    Single { year: i32 },
    Range { start: i32, end: i32 },
}

impl YearRange {
    pub fn start(&self) -> i32 {
        match *self {
            YearRange::Single { year } => year,
            YearRange::Range { start, .. } => start,
        }
    }

    pub fn end(&self) -> i32 {
        match *self {
            YearRange::Single { year } => year,
            YearRange::Range { end, .. } => end,
        }
    }

    /// False for ranges like `(2010-2004)`, which are parsed as written.
    pub fn is_chronological(&self) -> bool {
        self.start() <= self.end()
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearRange::Single { year } => write!(f, "{}", year),
            YearRange::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

/// A show title such as `The Wire (2002-2008)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowTitle(String);

impl ShowTitle {
    pub fn new(title: impl Into<String>) -> Self {
        ShowTitle(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title text before the year information.
    pub fn name(&self) -> &str {
        match self.0.find('(') {
            Some(open) => self.0[..open].trim(),
            None => self.0.trim(),
        }
    }

    pub fn year_range(&self) -> Result<YearRange, FormatError> {
        parse_year_info(&self.0)
    }
}

impl From<&str> for ShowTitle {
    fn from(title: &str) -> Self {
        ShowTitle::new(title)
    }
}

impl fmt::Display for ShowTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Zero of every Unicode decimal digit (Nd) block; each block runs zero to nine.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn decimal_digit(c: char) -> Option<i32> {
    let code = c as u32;
    DECIMAL_ZEROS
        .iter()
        .find_map(|&zero| code.checked_sub(zero).filter(|&digit| digit < 10))
        .map(|digit| digit as i32)
}

/// Parses an optionally signed decimal number written in any script's
/// digits, e.g. `２０１９` or `+2019`. No whitespace is allowed.
fn parse_year(title: &str, digits: &str, shape: TitleShape) -> Result<i32, FormatError> {
    let error = || FormatError::new(title, shape);

    let (negative, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.strip_prefix('+').unwrap_or(digits)),
    };
    if unsigned.is_empty() {
        return Err(error());
    }

    let mut year: i32 = 0;
    for c in unsigned.chars() {
        let digit = decimal_digit(c).ok_or_else(error)?;
        // accumulate negatives downwards so i32::MIN still fits
        year = year
            .checked_mul(10)
            .and_then(|shifted| {
                if negative {
                    shifted.checked_sub(digit)
                } else {
                    shifted.checked_add(digit)
                }
            })
            .ok_or_else(error)?;
    }
    Ok(year)
}

/// Reads the year between the first `(` and the first `-`.
///
/// The dash has to come at least two characters after the opening bracket,
/// so `Chernobyl (2019)` and `Spider-Man (2002)` both fail.
pub fn extract_year_start(title: &str) -> Result<i32, FormatError> {
    let shape = TitleShape::RangeStart;
    match (title.find('('), title.find('-')) {
        (Some(open), Some(dash)) if dash > open + 1 => {
            parse_year(title, &title[open + 1..dash], shape)
        }
        _ => Err(FormatError::new(title, shape)),
    }
}

/// Reads the year between the first `-` and the first `)`.
pub fn extract_year_end(title: &str) -> Result<i32, FormatError> {
    let shape = TitleShape::RangeEnd;
    match (title.find('-'), title.find(')')) {
        (Some(dash), Some(close)) if close > dash + 1 => {
            parse_year(title, &title[dash + 1..close], shape)
        }
        _ => Err(FormatError::new(title, shape)),
    }
}

/// Reads the year between the first `(` and the first `)` of a title
/// that contains no dash at all.
pub fn extract_single_year(title: &str) -> Result<i32, FormatError> {
    let shape = TitleShape::SingleYear;
    if title.contains('-') {
        return Err(FormatError::new(title, shape));
    }
    match (title.find('('), title.find(')')) {
        (Some(open), Some(close)) if close > open + 1 => {
            parse_year(title, &title[open + 1..close], shape)
        }
        _ => Err(FormatError::new(title, shape)),
    }
}

/// Tries the range shape first, then the single year shape.
pub fn parse_year_info(title: &str) -> Result<YearRange, FormatError> {
    if let (Ok(start), Ok(end)) = (extract_year_start(title), extract_year_end(title)) {
        return Ok(YearRange::Range { start, end });
    }

    extract_single_year(title)
        .map(|year| YearRange::Single { year })
        .map_err(|_| FormatError::new(title, TitleShape::Any))
}
