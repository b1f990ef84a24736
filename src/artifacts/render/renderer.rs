use crate::artifacts::diff::char_diff::{CharAlignment, CharClass};
use crate::artifacts::diff::edit_script::{EditOp, EditScript};
use crate::artifacts::options::{DiffOptions, RenderFlags};
use crate::artifacts::render::display_record::{
    DisplayRecord, HunkLineTag, LineSpan, Report, Segment, Side, Tone,
};
use crate::artifacts::render::hunk::{Hunk, HunkEntry};
use crate::artifacts::sequence::line::Line;
use crate::artifacts::sequence::sequence::Sequence;
use crate::errors::DiffResult;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Every changed region on its own, with before/after lines and a separator
    PerDifference,
    /// Hunks with `context` unchanged lines around the changes
    Unified { context: usize },
}

impl OutputMode {
    pub fn from_options(options: &DiffOptions) -> Self {
        if options.unified_format {
            OutputMode::Unified {
                context: options.context(),
            }
        } else {
            OutputMode::PerDifference
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    flags: RenderFlags,
    max_cells: usize,
}

impl Renderer {
    pub fn new(options: &DiffOptions) -> Self {
        Renderer {
            flags: options.render_flags(),
            max_cells: options.max_cells,
        }
    }

    pub fn render(
        &self,
        script: &EditScript,
        left: &Sequence,
        right: &Sequence,
        mode: OutputMode,
    ) -> DiffResult<Report> {
        let mut records = match mode {
            OutputMode::PerDifference => self.render_per_difference(script, left, right)?,
            OutputMode::Unified { context } => self.render_unified(script, left, right, context),
        };

        let differences = script.differences();
        records.push(DisplayRecord::Summary { differences });
        debug!(records = records.len(), differences, ?mode, "rendered script");

        Ok(Report {
            records,
            differences,
        })
    }

    fn render_per_difference(
        &self,
        script: &EditScript,
        left: &Sequence,
        right: &Sequence,
    ) -> DiffResult<Vec<DisplayRecord>> {
        let mut records = Vec::new();

        for op in script.ops() {
            if let EditOp::Equal { .. } = op {
                continue;
            }

            records.push(DisplayRecord::DifferenceHeader {
                left: LineSpan::from_range(op.left()),
                right: LineSpan::from_range(op.right()),
            });

            let left_lines = &left.lines()[op.left().clone()];
            let right_lines = &right.lines()[op.right().clone()];

            match op {
                EditOp::Delete { .. } => {
                    records.extend(left_lines.iter().map(|l| self.side_line(Side::Left, l)));
                    records.push(Self::absent(Side::Right));
                }
                EditOp::Insert { .. } => {
                    records.push(Self::absent(Side::Left));
                    records.extend(right_lines.iter().map(|r| self.side_line(Side::Right, r)));
                }
                EditOp::Substitute { .. } => {
                    for k in 0..left_lines.len().max(right_lines.len()) {
                        let pair = (left_lines.get(k), right_lines.get(k));
                        records.push(match pair.0 {
                            Some(l) => self.side_line(Side::Left, l),
                            None => Self::absent(Side::Left),
                        });
                        records.push(match pair {
                            (Some(_), Some(r)) => self.changed_line(r),
                            (None, Some(r)) => self.side_line(Side::Right, r),
                            (_, None) => Self::absent(Side::Right),
                        });

                        if let (Some(l), Some(r)) = pair
                            && self.flags.contains(RenderFlags::CHAR_DIFF)
                        {
                            records.push(DisplayRecord::CharDiff {
                                segments: self.segments(l, r)?,
                            });
                        }
                    }
                }
                EditOp::Equal { .. } => {}
            }

            records.push(DisplayRecord::Separator);
        }

        Ok(records)
    }

    fn render_unified(
        &self,
        script: &EditScript,
        left: &Sequence,
        right: &Sequence,
        context: usize,
    ) -> Vec<DisplayRecord> {
        let mut records = Vec::new();
        if script.is_identical() {
            return records;
        }

        records.push(DisplayRecord::FileHeader {
            left: left.label().to_string(),
            right: right.label().to_string(),
        });

        for hunk in Hunk::filter(script.ops(), context) {
            records.push(DisplayRecord::HunkHeader {
                left: hunk.left_span(),
                right: hunk.right_span(),
            });

            for entry in hunk.entries() {
                let (tag, line) = match *entry {
                    HunkEntry::Context { left: offset, .. } => {
                        (HunkLineTag::Context, &left.lines()[offset])
                    }
                    HunkEntry::Removed(offset) => (HunkLineTag::Removed, &left.lines()[offset]),
                    HunkEntry::Added(offset) => (HunkLineTag::Added, &right.lines()[offset]),
                };
                let tone = match tag {
                    HunkLineTag::Context => None,
                    HunkLineTag::Removed => self.tone(Tone::Removed),
                    HunkLineTag::Added => self.tone(Tone::Added),
                };

                records.push(DisplayRecord::HunkLine {
                    tag,
                    text: line.text().to_string(),
                    tone,
                });
                if !line.has_newline() {
                    records.push(DisplayRecord::NoNewlineAtEof);
                }
            }
        }

        records
    }

    fn segments(&self, left: &Line, right: &Line) -> DiffResult<Vec<Segment>> {
        let alignment = CharAlignment::compute(left.text(), right.text(), self.max_cells)?;

        Ok(alignment
            .runs()
            .into_iter()
            .map(|(class, text)| Segment {
                class,
                text,
                tone: match class {
                    CharClass::Unchanged => None,
                    CharClass::Deleted => self.tone(Tone::Removed),
                    CharClass::Inserted => self.tone(Tone::Added),
                },
            })
            .collect())
    }

    fn side_line(&self, side: Side, line: &Line) -> DisplayRecord {
        let tone = match side {
            Side::Left => Tone::Removed,
            Side::Right => Tone::Added,
        };
        self.numbered(side, line, tone)
    }

    fn changed_line(&self, line: &Line) -> DisplayRecord {
        self.numbered(Side::Right, line, Tone::Changed)
    }

    fn numbered(&self, side: Side, line: &Line, tone: Tone) -> DisplayRecord {
        DisplayRecord::SideLine {
            side,
            number: Some(line.index()),
            text: line.text().to_string(),
            tone: self.tone(tone),
        }
    }

    fn absent(side: Side) -> DisplayRecord {
        DisplayRecord::SideLine {
            side,
            number: None,
            text: String::new(),
            tone: None,
        }
    }

    fn tone(&self, tone: Tone) -> Option<Tone> {
        self.flags.contains(RenderFlags::COLOR).then_some(tone)
    }
}
