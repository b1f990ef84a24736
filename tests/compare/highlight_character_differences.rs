use crate::common::command::{compare_pair, stdout_of, work_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn highlight_character_differences(work_dir: TempDir) {
    write_pair(work_dir.path(), "let x = 1;\n", "let y = 10;\n");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["--charbychar"]), 1);

    pretty_assertions::assert_eq!(
        stdout,
        r#"Difference at line 1:
File1: let x = 1;
File2: let y = 10;
Char diff:
  let [-x-]{+y+} = 1{+0+};
---------------------------------
Total differences 1
"#
    );
}

#[rstest]
fn colored_output_uses_escape_codes(work_dir: TempDir) {
    write_pair(work_dir.path(), "cat\n", "cut\n");

    let stdout = stdout_of(
        &mut compare_pair(work_dir.path(), &["--colored", "--char-diff"]),
        1,
    );

    assert!(stdout.contains("\u{1b}[31m"));
    assert!(stdout.contains("\u{1b}[32m"));
}

#[rstest]
fn plain_output_has_no_escape_codes(work_dir: TempDir) {
    write_pair(work_dir.path(), "cat\n", "cut\n");

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &["--charbychar"]), 1);

    assert!(!stdout.contains('\u{1b}'));
}
