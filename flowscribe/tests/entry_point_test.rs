//! CLI entry point behavior: exit codes, JSON output, and output-root
//! resolution through the configuration file.

use std::fs;
use std::path::Path;

use flowscribe::entry_point::run_with_args_to;
use tempfile::tempdir;

const SOURCE: &str = "\
void Foo(void)
{
    Work();
}
";

fn run(args: &[String]) -> (i32, String) {
    let mut captured = Vec::new();
    let code = run_with_args_to(args.to_vec(), &mut captured).expect("entry point");
    (code, String::from_utf8_lossy(&captured).into_owned())
}

fn write_source(dir: &Path) -> std::path::PathBuf {
    let file = dir.join("module.c");
    fs::write(&file, SOURCE).expect("write source");
    file
}

#[test]
fn successful_run_reports_written_path() {
    let root = tempdir().expect("tempdir");
    let file = write_source(root.path());
    let out = root.path().join("Gen");

    let (code, output) = run(&[
        "Foo".to_owned(),
        file.display().to_string(),
        "--out".to_owned(),
        out.display().to_string(),
    ]);

    assert_eq!(code, 0);
    assert!(output.contains("Flow chart created at"));
    assert!(out.join("Foo.md").exists());
}

#[test]
fn json_mode_emits_machine_readable_summary() {
    let root = tempdir().expect("tempdir");
    let file = write_source(root.path());
    let out = root.path().join("Gen");

    let (code, output) = run(&[
        "Foo".to_owned(),
        file.display().to_string(),
        "--out".to_owned(),
        out.display().to_string(),
        "--json".to_owned(),
    ]);

    assert_eq!(code, 0);
    let payload: serde_json::Value = serde_json::from_str(output.trim()).expect("valid JSON");
    assert_eq!(payload["status"], "ok");
    assert!(payload["md_path"]
        .as_str()
        .is_some_and(|p| p.ends_with("Foo.md")));
    assert!(payload["switches_path"].is_null());
}

#[test]
fn missing_function_exits_nonzero() {
    let root = tempdir().expect("tempdir");
    let file = write_source(root.path());

    let (code, _) = run(&[
        "DoesNotExist".to_owned(),
        file.display().to_string(),
        "--out".to_owned(),
        root.path().join("Gen").display().to_string(),
    ]);

    assert_eq!(code, 1);
}

#[test]
fn json_mode_reports_errors_in_payload() {
    let root = tempdir().expect("tempdir");
    let file = write_source(root.path());

    let (code, output) = run(&[
        "DoesNotExist".to_owned(),
        file.display().to_string(),
        "--out".to_owned(),
        root.path().join("Gen").display().to_string(),
        "--json".to_owned(),
    ]);

    assert_eq!(code, 1);
    let payload: serde_json::Value = serde_json::from_str(output.trim()).expect("valid JSON");
    assert_eq!(payload["status"], "error");
    assert!(payload["message"]
        .as_str()
        .is_some_and(|m| m.contains("DoesNotExist")));
}

#[test]
fn missing_arguments_exit_with_usage_error() {
    let (code, _) = run(&[]);
    assert_eq!(code, 2);
}

#[test]
fn help_flag_prints_and_exits_cleanly() {
    let (code, output) = run(&["--help".to_owned()]);
    assert_eq!(code, 0);
    assert!(output.contains("Usage"));
}

#[test]
fn config_file_supplies_default_output_root() {
    let root = tempdir().expect("tempdir");
    let file = write_source(root.path());
    let configured = root.path().join("Docs").join("Gen");
    fs::write(
        root.path().join("flowscribe.toml"),
        format!(
            "[flowscribe]\noutput_root = \"{}\"\n",
            configured.display().to_string().replace('\\', "/")
        ),
    )
    .expect("write config");

    let (code, _) = run(&["Foo".to_owned(), file.display().to_string()]);

    assert_eq!(code, 0);
    assert!(configured.join("Foo.md").exists());
}
