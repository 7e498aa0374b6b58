use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use astwriter_ast::{Ast, AstDocument, Declaration, NodeId, Problem, Rewrite, SimpleType};
use tempfile::TempDir;

fn astw(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_astw"))
        .args(args)
        .current_dir(dir)
        .env_remove("ASTW_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_document(dir: &TempDir, name: &str, document: &AstDocument) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, document.to_json_pretty().unwrap()).unwrap();
    path
}

fn declaration_document() -> AstDocument {
    let mut ast = Ast::new();
    let int = ast.simple_type(SimpleType::Int);
    let one = ast.int("1");
    let x = ast.initialized_declarator("x", one);
    let declaration = ast.simple_declaration(int, vec![x]);
    let unit = ast.translation_unit("x.c", vec![declaration]);
    AstDocument::new(ast, unit)
}

fn block_document() -> AstDocument {
    let mut ast = Ast::new();
    let zero = ast.int("0");
    let ret = ast.return_statement(Some(zero));
    let block = ast.compound(vec![ret]);
    AstDocument::new(ast, block)
}

fn problem_document() -> AstDocument {
    let mut ast = Ast::new();
    let broken = ast.add(Declaration::Problem(Problem::new("missing semicolon")));
    let unit = ast.translation_unit("bad.c", vec![broken]);
    AstDocument::new(ast, unit)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_render_to_stdout() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "x.json", &declaration_document());
    let output = astw(dir.path(), &["render", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "int x = 1;\n");
}

#[test]
fn test_render_with_prefix_to_file() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "block.json", &block_document());
    let target = dir.path().join("block.c");
    let output = astw(
        dir.path(),
        &[
            "render",
            path.to_str().unwrap(),
            "--prefix",
            "> ",
            "--output",
            target.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        "> {\n>     return 0;\n> }\n"
    );
}

#[test]
fn test_default_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("astwriter.toml"), "indent = \"tab\"\n").unwrap();
    let path = write_document(&dir, "block.json", &block_document());
    let output = astw(dir.path(), &["render", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "{\n\treturn 0;\n}\n");
}

#[test]
fn test_explicit_config_overrides_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("astwriter.toml"), "indent = \"tab\"\n").unwrap();
    let narrow = dir.path().join("narrow.toml");
    std::fs::write(&narrow, "indent = { spaces = 2 }\n").unwrap();
    let path = write_document(&dir, "block.json", &block_document());
    let output = astw(
        dir.path(),
        &["render", path.to_str().unwrap(), "--config", narrow.to_str().unwrap()],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "{\n  return 0;\n}\n");
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("astwriter.toml"), "indent = 4\n").unwrap();
    let path = write_document(&dir, "x.json", &declaration_document());
    let output = astw(dir.path(), &["render", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse"));
}

#[test]
fn test_render_fails_on_problem_node() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "bad.json", &problem_document());
    let output = astw(dir.path(), &["render", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("missing semicolon"));
}

#[test]
fn test_check_valid_document() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "x.json", &declaration_document());
    let output = astw(dir.path(), &["check", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("is valid"));
}

#[test]
fn test_check_lists_problems() {
    let dir = TempDir::new().unwrap();
    let path = write_document(&dir, "bad.json", &problem_document());
    let output = astw(dir.path(), &["check", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("problem declaration at #"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.json");
    std::fs::write(&path, "{ not json").unwrap();
    let output = astw(dir.path(), &["check", path.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_dangling_replacement_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut document = declaration_document();
    document
        .modifications
        .insert(document.root, Rewrite::ReplaceNode(NodeId::new(999)));
    let path = write_document(&dir, "dangling.json", &document);
    let output = astw(dir.path(), &["render", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not in the arena"));
}

#[test]
fn test_completions_to_stdout() {
    let dir = TempDir::new().unwrap();
    let output = astw(dir.path(), &["completions", "bash"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("astw"));
}

#[test]
fn test_completions_to_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("astw.zsh");
    let output = astw(
        dir.path(),
        &["completions", "zsh", "--output", target.to_str().unwrap()],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert!(std::fs::read_to_string(&target).unwrap().contains("#compdef astw"));
}
