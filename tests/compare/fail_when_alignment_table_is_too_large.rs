use crate::common::command::{compare_pair, work_dir, write_pair};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

fn distinct_lines(prefix: &str) -> String {
    (0..20).map(|i| format!("{prefix}{i}\n")).collect()
}

#[rstest]
fn fail_when_alignment_table_is_too_large(work_dir: TempDir) {
    write_pair(work_dir.path(), &distinct_lines("l"), &distinct_lines("r"));

    compare_pair(work_dir.path(), &["--max-cells", "10"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the limit of 10"));
}

#[rstest]
fn limit_can_come_from_the_environment(work_dir: TempDir) {
    write_pair(work_dir.path(), &distinct_lines("l"), &distinct_lines("r"));

    compare_pair(work_dir.path(), &[])
        .env("LDIFF_MAX_CELLS", "10")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds the limit of 10"));
}

#[rstest]
fn shared_tail_does_not_count_against_the_limit(work_dir: TempDir) {
    let tail = distinct_lines("same");
    write_pair(
        work_dir.path(),
        &format!("left\n{tail}"),
        &format!("right\n{tail}"),
    );

    compare_pair(work_dir.path(), &["--max-cells", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with("Total differences 1\n"));
}
