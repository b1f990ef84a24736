use crate::common::command::{compare_pair, stdout_of, work_dir, write_pair};
use crate::common::file::{as_text, generated_lines};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn generated_file_is_identical_to_itself(work_dir: TempDir) {
    let text = as_text(&generated_lines(50));
    write_pair(work_dir.path(), &text, &text);

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["-u"]), 0);

    pretty_assertions::assert_eq!(stdout, "Files are identical.\n");
}

#[rstest]
fn inserted_line_in_generated_file_is_one_difference(work_dir: TempDir) {
    let left = generated_lines(50);
    let mut right = left.clone();
    right.insert(25, "an extra line".to_string());
    write_pair(work_dir.path(), &as_text(&left), &as_text(&right));

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["-u"]), 1);

    assert!(stdout.contains("@@ -23,6 +23,7 @@\n"));
    assert!(stdout.contains("\n+an extra line\n"));
    assert!(stdout.ends_with("Total differences 1\n"));
}
