use crate::common::command::{run_ldiff_command, work_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

// the inputs do not exist: option errors must win over read errors
#[rstest]
#[case::char_diff_with_unified(&["--charbychar", "--unified"], "--charbychar cannot be combined with --unified")]
#[case::context_without_unified(&["-U", "2"], "--context requires --unified")]
#[case::zero_cell_limit(&["--max-cells", "0"], "--max-cells must be greater than zero")]
fn reject_conflicting_options(work_dir: TempDir, #[case] flags: &[&str], #[case] message: &str) {
    let mut args = vec!["nope-left.txt", "nope-right.txt"];
    args.extend_from_slice(flags);

    run_ldiff_command(work_dir.path(), &args)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid options"))
        .stderr(predicate::str::contains(message));
}
