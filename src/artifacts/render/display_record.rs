use crate::artifacts::diff::char_diff::CharClass;
use std::fmt::Display;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Color hint, only populated when color output is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Removed,
    Added,
    /// Right-hand line of a substituted pair
    Changed,
}

/// A run of lines in 1-based numbering. An empty span starts at the line
/// preceding the position it marks (0 at the top of a file).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub count: usize,
}

impl LineSpan {
    pub fn from_range(range: &Range<usize>) -> Self {
        let count = range.len();
        let start = if count == 0 {
            range.start
        } else {
            range.start + 1
        };
        LineSpan { start, count }
    }

    pub fn last(&self) -> usize {
        (self.start + self.count).saturating_sub(1)
    }
}

impl Display for LineSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            0 => write!(f, "no lines (after line {})", self.start),
            1 => write!(f, "line {}", self.start),
            _ => write!(f, "lines {}-{}", self.start, self.last()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkLineTag {
    Context,
    Removed,
    Added,
}

impl HunkLineTag {
    pub fn prefix(&self) -> char {
        match self {
            HunkLineTag::Context => ' ',
            HunkLineTag::Removed => '-',
            HunkLineTag::Added => '+',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub class: CharClass,
    pub text: String,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRecord {
    /// `---`/`+++` lines opening unified output
    FileHeader { left: String, right: String },
    DifferenceHeader { left: LineSpan, right: LineSpan },
    /// `number` is `None` when the op covers no line on this side.
    SideLine {
        side: Side,
        number: Option<usize>,
        text: String,
        tone: Option<Tone>,
    },
    CharDiff { segments: Vec<Segment> },
    Separator,
    HunkHeader { left: LineSpan, right: LineSpan },
    HunkLine {
        tag: HunkLineTag,
        text: String,
        tone: Option<Tone>,
    },
    NoNewlineAtEof,
    Summary { differences: usize },
}

/// Everything one run renders, plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub records: Vec<DisplayRecord>,
    pub differences: usize,
}

impl Report {
    pub fn identical(&self) -> bool {
        self.differences == 0
    }
}
