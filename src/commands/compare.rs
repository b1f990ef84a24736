use crate::areas::session::Session;
use crate::artifacts::diff::char_diff::CharClass;
use crate::artifacts::render::display_record::{DisplayRecord, LineSpan, Report, Side, Tone};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

const SEPARATOR: &str = "---------------------------------";
const NO_NEWLINE: &str = "\\ No newline at end of file";
const ABSENT: &str = "<none>";

impl Session {
    /// Runs the comparison and prints the whole report. Output starts only once
    /// the report is complete.
    pub fn compare(&self, left: &Path, right: &Path) -> anyhow::Result<Report> {
        let report = self.run(left, right)?;
        self.print_report(&report)?;

        Ok(report)
    }

    fn print_report(&self, report: &Report) -> anyhow::Result<()> {
        let color = self.options().color_output;
        let mut writer = self.writer();

        for record in &report.records {
            writeln!(writer, "{}", format_record(record, color))?;
        }
        writer.flush()?;

        Ok(())
    }
}

pub fn format_record(record: &DisplayRecord, color: bool) -> String {
    match record {
        DisplayRecord::FileHeader { left, right } => {
            let header = format!("--- {left}\n+++ {right}");
            if color {
                header.bold().to_string()
            } else {
                header
            }
        }
        DisplayRecord::DifferenceHeader { left, right } => difference_header(left, right),
        DisplayRecord::SideLine {
            side, number: None, ..
        } => format!("{}: {ABSENT}", side_label(*side)),
        DisplayRecord::SideLine {
            side, text, tone, ..
        } => format!("{}: {}", side_label(*side), paint(text, *tone)),
        DisplayRecord::CharDiff { segments } => {
            let highlighted: String = segments
                .iter()
                .map(|segment| {
                    let marked = match segment.class {
                        CharClass::Unchanged => segment.text.clone(),
                        CharClass::Deleted => format!("[-{}-]", segment.text),
                        CharClass::Inserted => format!("{{+{}+}}", segment.text),
                    };
                    paint(&marked, segment.tone)
                })
                .collect();
            format!("Char diff:\n  {highlighted}")
        }
        DisplayRecord::Separator => SEPARATOR.to_string(),
        DisplayRecord::HunkHeader { left, right } => {
            let header = format!(
                "@@ -{},{} +{},{} @@",
                left.start, left.count, right.start, right.count
            );
            if color {
                header.cyan().to_string()
            } else {
                header
            }
        }
        DisplayRecord::HunkLine { tag, text, tone } => {
            paint(&format!("{}{}", tag.prefix(), text), *tone)
        }
        DisplayRecord::NoNewlineAtEof => NO_NEWLINE.to_string(),
        DisplayRecord::Summary { differences: 0 } => "Files are identical.".to_string(),
        DisplayRecord::Summary { differences } => format!("Total differences {differences}"),
    }
}

fn difference_header(left: &LineSpan, right: &LineSpan) -> String {
    if left == right && left.count == 1 {
        format!("Difference at line {}:", left.start)
    } else {
        format!("Difference at File1 {left} / File2 {right}:")
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Left => "File1",
        Side::Right => "File2",
    }
}

fn paint(text: &str, tone: Option<Tone>) -> String {
    match tone {
        Some(Tone::Removed) => text.red().to_string(),
        Some(Tone::Added) => text.green().to_string(),
        Some(Tone::Changed) => text.yellow().to_string(),
        None => text.to_string(),
    }
}
