use crate::common::command::{compare_pair, stdout_of, work_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::case_only(&["-i"], "Hello\n", "hello\n")]
#[case::long_case_flag(&["--ignorecase"], "HELLO world\n", "hello WORLD\n")]
#[case::internal_whitespace(&["-w"], "a b\n", "ab\n")]
#[case::long_whitespace_flag(&["--wsignore"], "\tx  =  1\n", "x=1\n")]
#[case::both(&["-i", "-w"], "Hello World\n", "helloworld\n")]
fn normalized_lines_compare_equal(
    work_dir: TempDir,
    #[case] flags: &[&str],
    #[case] left: &str,
    #[case] right: &str,
) {
    write_pair(work_dir.path(), left, right);

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), flags), 0);

    pretty_assertions::assert_eq!(stdout, "Files are identical.\n");
}

#[rstest]
fn case_matters_without_the_flag(work_dir: TempDir) {
    write_pair(work_dir.path(), "Hello\n", "hello\n");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &[]), 1);

    assert!(stdout.ends_with("Total differences 1\n"));
}
