use crate::artifacts::options::NormalizeOptions;
use crate::artifacts::sequence::line::Line;

/// The ordered lines of one input. Line `i` (1-based) lives at offset `i - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    label: String,
    lines: Vec<Line>,
}

impl Sequence {
    /// Splits `text` after every `\n`; a trailing fragment without a newline is
    /// kept as the last line.
    pub fn from_text(label: impl Into<String>, text: &str, options: &NormalizeOptions) -> Self {
        let lines = text
            .split_inclusive('\n')
            .enumerate()
            .map(|(offset, raw)| Line::new(offset + 1, raw.to_string(), options))
            .collect();

        Sequence {
            label: label.into(),
            lines,
        }
    }

    /// Builds a sequence from already split lines, each given without terminator.
    pub fn from_lines<S: AsRef<str>>(
        label: impl Into<String>,
        lines: &[S],
        options: &NormalizeOptions,
    ) -> Self {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(offset, line)| Line::new(offset + 1, format!("{}\n", line.as_ref()), options))
            .collect();

        Sequence {
            label: label.into(),
            lines,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn keys(&self) -> Vec<&str> {
        self.lines.iter().map(Line::key).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
