use anyhow::{Context, Result};
use clap::Parser;
use ldiff::areas::session::Session;
use ldiff::artifacts::core::{PagerWriter, use_pager};
use ldiff::artifacts::options::{DEFAULT_MAX_CELLS, DiffOptions};
use ldiff::artifacts::render::display_record::Report;
use minus::Pager;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ldiff",
    version,
    about = "Compare two text files line by line",
    long_about = "Compares two text files by aligning their lines on a longest common \
    subsequence, so a single inserted or deleted line is reported once instead of \
    shifting every line after it. Exits with 0 when the files are identical, \
    1 when they differ and 2 on error.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    file1: PathBuf,
    #[arg(index = 2, help = "The file to compare against")]
    file2: PathBuf,
    #[arg(short = 'c', long = "colored", help = "Color removed and added text")]
    colored: bool,
    #[arg(
        long = "charbychar",
        visible_alias = "char-diff",
        help = "Highlight character differences inside changed line pairs"
    )]
    char_by_char: bool,
    #[arg(short = 'i', long = "ignorecase", help = "Ignore case differences")]
    ignore_case: bool,
    #[arg(short = 'u', long = "unified", help = "Print hunks in unified format")]
    unified: bool,
    #[arg(
        short = 'U',
        long = "context",
        value_name = "LINES",
        help = "Context lines around each unified hunk [default: 3]"
    )]
    context: Option<usize>,
    #[arg(short = 'w', long = "wsignore", help = "Ignore all whitespace")]
    ignore_whitespace: bool,
    #[arg(
        long = "max-cells",
        env = "LDIFF_MAX_CELLS",
        default_value_t = DEFAULT_MAX_CELLS,
        help = "Largest alignment table allowed before giving up"
    )]
    max_cells: usize,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        DiffOptions {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
            color_output: self.colored,
            character_diff: self.char_by_char,
            unified_format: self.unified,
            context_lines: self.context,
            max_cells: self.max_cells,
        }
    }
}

fn main() -> ExitCode {
    // Set RUST_LOG=debug for verbose logging; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) if report.identical() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("ldiff: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<Report> {
    let options = cli.options();
    if options.color_output {
        colored::control::set_override(true);
    }

    if use_pager() {
        let pager = Pager::new();
        let session = Session::new(options, Box::new(PagerWriter::new(pager.clone())))?;
        let report = session.compare(&cli.file1, &cli.file2)?;
        minus::page_all(pager).context("failed to run the pager")?;

        Ok(report)
    } else {
        let session = Session::new(options, Box::new(std::io::stdout()))?;
        session.compare(&cli.file1, &cli.file2)
    }
}
