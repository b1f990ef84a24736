use crate::common::command::{compare_pair, stdout_of, work_dir, write_pair};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_single_inserted_line_once(work_dir: TempDir) {
    write_pair(
        work_dir.path(),
        "one\ntwo\nthree\nfour\n",
        "one\nnew\ntwo\nthree\nfour\n",
    );

    let stdout = stdout_of(&mut compare_pair(work_dir.path(), &[]), 1);

    pretty_assertions::assert_eq!(
        stdout,
        r#"Difference at File1 no lines (after line 1) / File2 line 2:
File1: <none>
File2: new
---------------------------------
Total differences 1
"#
    );
}
