use crate::artifacts::normalize::normalize;
use crate::artifacts::options::NormalizeOptions;

/// One line of an input, immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the source
    index: usize,
    /// Original text including its terminator, if any
    raw: String,
    /// Normalized comparison key
    key: String,
}

impl Line {
    pub fn new(index: usize, raw: String, options: &NormalizeOptions) -> Self {
        let key = normalize(&raw, options);
        Line { index, raw, key }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display text without the line terminator.
    pub fn text(&self) -> &str {
        let text = self.raw.strip_suffix('\n').unwrap_or(&self.raw);
        text.strip_suffix('\r').unwrap_or(text)
    }

    pub fn has_newline(&self) -> bool {
        self.raw.ends_with('\n')
    }
}
