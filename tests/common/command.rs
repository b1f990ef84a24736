use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}
"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}
"#
    .to_string()
}

#[fixture]
pub fn diff_hunks_output() -> String {
    "@@ -1,9 +1,6 @@\n fn main() {\n     let s = String::new();\n     std::io::stdin().read_line(&mut s).unwrap();\n-    for i in 0..1000000000 {\n-        println!(\"{}\",  s);\n-    }\n \n     println!(\"Done\");\n \n@@ -13,7 +10,9 @@\n         }\n     });\n \n-    tx.join().unwrap();\n+    if let Err(e) = tx.join() {\n+        eprintln!(\"Thread error: {}\", e);\n+    }\n \n     println!(\"All threads completed\");\n }\n"
    .to_string()
}

/// Writes `left.txt` and `right.txt` into `dir`.
pub fn write_pair(dir: &Path, left: &str, right: &str) {
    write_file(FileSpec::new(dir.join("left.txt"), left.to_string()));
    write_file(FileSpec::new(dir.join("right.txt"), right.to_string()));
}

pub fn run_ldiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ldiff").expect("Failed to find ldiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("LDIFF_MAX_CELLS");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn compare_pair(dir: &Path, flags: &[&str]) -> Command {
    let mut args = vec!["left.txt", "right.txt"];
    args.extend_from_slice(flags);
    run_ldiff_command(dir, &args)
}

pub fn stdout_of(cmd: &mut Command, code: i32) -> String {
    let output = cmd.assert().code(code);
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}
