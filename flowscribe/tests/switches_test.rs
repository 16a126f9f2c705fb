//! Secondary-document generation for preprocessor-guarded statement runs.

use std::fs;

use flowscribe::create_flow_chart;
use tempfile::tempdir;

const SOURCE: &str = "\
void Variants(void)
{
    Common();
#ifdef MODE_A
    RcvMESG(&l_A, MESG_A);
    ApplyA();
#endif
#ifdef MODE_B
    ApplyB();
#endif
}
";

#[test]
fn two_guards_yield_two_lanes_in_switches_document() {
    let root = tempdir().expect("tempdir");
    let file = root.path().join("module.c");
    fs::write(&file, SOURCE).expect("write source");
    let out = root.path().join("Gen");

    let output = create_flow_chart("Variants", &file, &out).expect("diagram");

    let switches_path = output.switches_path.expect("switches document");
    assert_eq!(switches_path, out.join("Variants_switches.md"));

    let document = fs::read_to_string(&switches_path).expect("read document");
    assert!(document
        .starts_with("# Preprocessor Directive Function Switches for Variants\n"));
    assert!(document.contains("```mermaid\nflowchart TD\n"));

    assert_eq!(document.matches("subgraph").count(), 2);
    assert!(document.contains("  subgraph MODE_A[\"MODE_A\"]\n"));
    assert!(document.contains("  subgraph MODE_B[\"MODE_B\"]\n"));

    // Each lane is a linear chain with no branching.
    assert!(document
        .contains("    MODE_A_0[Receive the value from MESG_A and store it in l_A]\n"));
    assert!(document.contains("    MODE_A_1[ApplyA()]\n"));
    assert!(document.contains("    MODE_A_0 --> MODE_A_1\n"));
    assert!(document.contains("    MODE_B_0[ApplyB()]\n"));
    assert!(!document.contains("-- Yes -->"));
    assert!(!document.contains("-- No -->"));
}

#[test]
fn primary_document_ignores_guard_directives() {
    let root = tempdir().expect("tempdir");
    let file = root.path().join("module.c");
    fs::write(&file, SOURCE).expect("write source");
    let out = root.path().join("Gen");

    let output = create_flow_chart("Variants", &file, &out).expect("diagram");
    let document = fs::read_to_string(&output.md_path).expect("read document");

    assert!(!document.contains("ifdef"));
    assert!(!document.contains("numifdef"));
    // The guarded statements themselves still chart in the primary graph.
    assert!(document.contains("ApplyA()"));
    assert!(document.contains("ApplyB()"));
}

#[test]
fn no_switches_document_without_guards() {
    let root = tempdir().expect("tempdir");
    let file = root.path().join("module.c");
    fs::write(&file, "void Plain(void)\n{\n    Work();\n}\n").expect("write source");
    let out = root.path().join("Gen");

    let output = create_flow_chart("Plain", &file, &out).expect("diagram");
    assert!(output.switches_path.is_none());
    assert!(!out.join("Plain_switches.md").exists());
}
