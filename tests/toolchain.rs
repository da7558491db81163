//! Driver tests: file discovery, output placement, batch semantics.

use std::fs;
use std::path::Path;

use jackc::driver::{self, ToolError};
use jackc::translate::TranslateOptions;
use tempfile::tempdir;

const MAIN_JACK: &str = "class Main { function void main() { return; } }";
const SQUARE_JACK: &str = "class Square { function int side() { return 4; } }";

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test input");
    path
}

#[test]
fn test_compile_single_file_writes_sibling_vm() {
    let dir = tempdir().unwrap();
    let jack = write(dir.path(), "Main.jack", MAIN_JACK);

    let outputs = driver::compile(&jack).expect("compile should succeed");
    assert_eq!(outputs, vec![dir.path().join("Main.vm")]);

    let vm_text = fs::read_to_string(&outputs[0]).unwrap();
    assert_eq!(vm_text, "function Main.main 0\npush constant 0\nreturn\n");
}

#[test]
fn test_compile_directory_writes_one_vm_per_jack() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Main.jack", MAIN_JACK);
    write(dir.path(), "Square.jack", SQUARE_JACK);
    write(dir.path(), "README.txt", "not a source file");

    let outputs = driver::compile(dir.path()).expect("compile should succeed");
    assert_eq!(outputs.len(), 2);
    assert!(dir.path().join("Main.vm").is_file());
    assert!(dir.path().join("Square.vm").is_file());
}

#[test]
fn test_compile_directory_order_is_sorted() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Zeta.jack", "class Zeta { }");
    write(dir.path(), "Alpha.jack", "class Alpha { }");

    let outputs = driver::compile(dir.path()).unwrap();
    let names: Vec<_> = outputs
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["Alpha.vm", "Zeta.vm"]);
}

#[test]
fn test_translate_file_writes_sibling_asm() {
    let dir = tempdir().unwrap();
    let vm = write(dir.path(), "Main.vm", "push constant 7\npush constant 8\nadd\n");

    let output = driver::translate(&vm, TranslateOptions::default()).unwrap();
    assert_eq!(output, dir.path().join("Main.asm"));
    let asm = fs::read_to_string(&output).unwrap();
    assert!(asm.starts_with("@7\n"));
    assert!(asm.trim_end().ends_with("0;JMP"));
}

#[test]
fn test_translate_directory_combines_into_dir_named_asm() {
    let dir = tempdir().unwrap();
    let program = dir.path().join("Pong");
    fs::create_dir(&program).unwrap();
    write(&program, "Main.vm", "push static 0\n");
    write(&program, "Ball.vm", "push static 0\n");

    let output = driver::translate(&program, TranslateOptions::default()).unwrap();
    assert_eq!(output, program.join("Pong.asm"));

    // Statics are scoped per source file.
    let asm = fs::read_to_string(&output).unwrap();
    assert!(asm.contains("@Main.0"));
    assert!(asm.contains("@Ball.0"));
}

#[test]
fn test_assemble_writes_sibling_hack() {
    let dir = tempdir().unwrap();
    let asm = write(dir.path(), "Add.asm", "@2\nD=A\n@3\nD=D+A\n");

    let output = driver::assemble(&asm).unwrap();
    assert_eq!(output, dir.path().join("Add.hack"));

    let hack = fs::read_to_string(&output).unwrap();
    let words: Vec<&str> = hack.lines().collect();
    assert_eq!(words.len(), 4);
    assert_eq!(words[0], "0000000000000010");
}

#[test]
fn test_build_runs_whole_pipeline() {
    let dir = tempdir().unwrap();
    let jack = write(dir.path(), "Main.jack", MAIN_JACK);

    let hack = driver::build(&jack, TranslateOptions::default()).unwrap();
    assert_eq!(hack, dir.path().join("Main.hack"));
    assert!(dir.path().join("Main.vm").is_file());
    assert!(dir.path().join("Main.asm").is_file());

    let contents = fs::read_to_string(&hack).unwrap();
    assert!(contents.lines().all(|w| w.len() == 16));
}

#[test]
fn test_build_directory() {
    let dir = tempdir().unwrap();
    let program = dir.path().join("Game");
    fs::create_dir(&program).unwrap();
    write(&program, "Main.jack", MAIN_JACK);
    write(&program, "Square.jack", SQUARE_JACK);

    let hack = driver::build(&program, TranslateOptions::default()).unwrap();
    assert_eq!(hack, program.join("Game.hack"));
}

#[test]
fn test_missing_path_is_invalid_target() {
    let dir = tempdir().unwrap();
    let err = driver::compile(&dir.path().join("Nope.jack")).unwrap_err();
    assert!(matches!(err.error(), ToolError::InvalidTarget { .. }));
}

#[test]
fn test_wrong_extension_is_invalid_target() {
    let dir = tempdir().unwrap();
    let txt = write(dir.path(), "Main.txt", MAIN_JACK);
    let err = driver::compile(&txt).unwrap_err();
    assert!(matches!(err.error(), ToolError::InvalidTarget { .. }));
}

#[test]
fn test_empty_directory_is_invalid_target() {
    let dir = tempdir().unwrap();
    let err = driver::compile(dir.path()).unwrap_err();
    assert!(matches!(err.error(), ToolError::InvalidTarget { .. }));
}

#[test]
fn test_parse_error_carries_file_context() {
    let dir = tempdir().unwrap();
    let jack = write(dir.path(), "Broken.jack", "class Broken {");

    let err = driver::compile(&jack).unwrap_err();
    assert!(matches!(err.error(), ToolError::Parse(_)));
    assert!(err.filename().ends_with("Broken.jack"));
    assert_eq!(err.source(), "class Broken {");
}

#[test]
fn test_batch_aborts_on_first_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Bad.jack", "class Bad {");
    write(dir.path(), "Good.jack", MAIN_JACK);

    let err = driver::compile(dir.path()).unwrap_err();
    assert!(err.filename().ends_with("Bad.jack"));
    // Sorted order: Bad.jack fails first, Good.jack is never compiled.
    assert!(!dir.path().join("Good.vm").exists());
}

#[test]
fn test_vm_parse_error_reports_line() {
    let dir = tempdir().unwrap();
    let vm = write(dir.path(), "Bad.vm", "push constant 1\nbogus\n");

    let err = driver::translate(&vm, TranslateOptions::default()).unwrap_err();
    match err.error() {
        ToolError::VmParse(vm_error) => assert_eq!(vm_error.line(), 2),
        other => panic!("Expected a VM parse error, got {:?}", other),
    }
}

#[test]
fn test_assemble_rejects_directory() {
    let dir = tempdir().unwrap();
    let err = driver::assemble(dir.path()).unwrap_err();
    assert!(matches!(err.error(), ToolError::InvalidTarget { .. }));
}
