use crate::common::command::{compare_pair, file_a, stdout_of, work_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_identical_files(work_dir: TempDir, file_a: String) {
    write_pair(work_dir.path(), &file_a, &file_a);

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &[]), 0);

    pretty_assertions::assert_eq!(stdout, "Files are identical.\n");
}

#[rstest]
fn report_identical_empty_files(work_dir: TempDir) {
    write_pair(work_dir.path(), "", "");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["-u"]), 0);

    pretty_assertions::assert_eq!(stdout, "Files are identical.\n");
}
