use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use csx_ast::ast::{BinOp, Expr, LiteProgram, Stmt, WhileStmt};
use csx_ast::testutil::{chain, pos};
use csx_ast::{interchange, Program};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_tree(dir: &TempDir, name: &str, program: &Program) -> PathBuf {
    let path = dir.path().join(name);
    let json = interchange::to_json_pretty(program).unwrap();
    fs::write(&path, json).unwrap();
    path
}

fn broken_program() -> Program {
    // while (x < ) with no body
    let condition = Expr::binary(Expr::name("x", pos(2, 12)), BinOp::Lt, Expr::Empty, pos(2, 14));
    let body = chain(vec![Stmt::While(WhileStmt::new(
        Expr::Empty,
        condition,
        Stmt::Empty,
        pos(2, 5),
    ))]);
    Program::Lite(LiteProgram::new(chain(vec![]), body, pos(1, 1)))
}

#[test]
fn print_renders_source() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "sample.json", &csx_ast::testutil::sample_class_program());

    cargo_bin_cmd!("csx")
        .arg("print")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("class Sample {\n    int count = 0;\n"))
        .stdout(predicate::str::contains("        outer: while ((i < n) && !done)\n"));
}

#[test]
fn print_honours_indent_flags() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "lite.json", &csx_ast::testutil::sample_lite_program());

    cargo_bin_cmd!("csx")
        .args(["print", "--indent", "2", "--no-trailing-newline"])
        .arg(&path)
        .assert()
        .success()
        .stdout("{\n  int x;\n  int y = 2;\n  read(x);\n  y = (x + y);\n  print(y);\n}");
}

#[test]
fn stats_reports_total() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "lite.json", &csx_ast::testutil::sample_lite_program());

    cargo_bin_cmd!("csx")
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("lite_program").and(predicate::str::contains("total")));
}

#[test]
fn check_accepts_sample() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "sample.json", &csx_ast::testutil::sample_class_program());

    cargo_bin_cmd!("csx")
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("ok\n"));
}

#[test]
fn check_reports_violations() {
    let dir = TempDir::new().unwrap();
    let path = write_tree(&dir, "broken.json", &broken_program());

    cargo_bin_cmd!("csx")
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing operand expression"))
        .stderr(predicate::str::contains("missing loop body statement"))
        .stderr(predicate::str::contains("2 violation(s) found"));
}

#[test]
fn malformed_tree_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"Lite\": [] }").unwrap();

    cargo_bin_cmd!("csx")
        .arg("print")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read tree"));
}

#[test]
fn missing_file_fails() {
    cargo_bin_cmd!("csx")
        .args(["stats", "no-such-tree.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn version_flag() {
    cargo_bin_cmd!("csx")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(csx_ast::VERSION));
}
