use crate::common::command::{
    compare_pair, diff_hunks_output, file_a, file_b, stdout_of, work_dir, write_pair,
};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_unified_hunks(
    work_dir: TempDir,
    file_a: String,
    file_b: String,
    diff_hunks_output: String,
) {
    write_pair(work_dir.path(), &file_a, &file_b);

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["--unified"]), 1);

    let expected_output = format!(
        "--- left.txt\n+++ right.txt\n{}Total differences 2\n",
        diff_hunks_output
    );
    pretty_assertions::assert_eq!(stdout, expected_output);
}

#[rstest]
fn show_unified_hunks_with_custom_context(work_dir: TempDir) {
    write_pair(work_dir.path(), "1\n2\n3\n4\n5\n", "1\n2\nthree\n4\n5\n");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["-u", "-U", "1"]), 1);

    pretty_assertions::assert_eq!(
        stdout,
        r#"--- left.txt
+++ right.txt
@@ -2,3 +2,3 @@
 2
-3
+three
 4
Total differences 1
"#
    );
}

#[rstest]
fn show_missing_newline_marker(work_dir: TempDir) {
    write_pair(work_dir.path(), "a\nb\n", "a\nb");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["-u"]), 1);

    pretty_assertions::assert_eq!(
        stdout,
        r#"--- left.txt
+++ right.txt
@@ -1,2 +1,2 @@
 a
-b
+b
\ No newline at end of file
Total differences 1
"#
    );
}
