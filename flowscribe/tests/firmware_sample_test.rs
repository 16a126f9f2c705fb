//! Pipeline test over a realistic firmware handler shape: local
//! declarations, messaging macros, and a guarded output decision.

use std::fs;

use flowscribe::create_flow_chart;
use tempfile::tempdir;

const SOURCE: &str = "\
/**********************************************************
 * Actuator output processing
 **********************************************************/
void PRC_ActuatorOutput(void)
{
    boolean  l_Output_B;        // local output actuation flag
    uint16 l_MESG_Act_u16; // actuation message

    RcvMESG( l_VehicleCfg_ST, MESG_VehicleCfg_ST);

    RBMESG_SendMESG( RBMESG_AvailableHSW_B, TRUE );
    RBMESG_RcvMESG( l_MESG_Act_u16, RBMESG_Act_u16 );

    if( l_MESG_Act_u16 != 0)
    {
        l_Output_B = TRUE;
    }
    else
    {
        l_Output_B = FALSE;
    }
}
";

#[test]
fn firmware_handler_charts_macros_and_decision() {
    let root = tempdir().expect("tempdir");
    let file = root.path().join("prc_actuator.c");
    fs::write(&file, SOURCE).expect("write source");
    let out = root.path().join("Gen");

    let output = create_flow_chart("PRC_ActuatorOutput", &file, &out).expect("diagram");
    let document = fs::read_to_string(&output.md_path).expect("read document");

    // Declarations survive as "Type Name" actions.
    assert!(document.contains("[\"boolean l_Output_B\"]"));
    assert!(document.contains("[\"uint16 l_MESG_Act_u16\"]"));

    // Messaging macros get their semantic labels.
    assert!(document.contains(
        "[\"Receive the value from MESG_VehicleCfg_ST and store it in l_VehicleCfg_ST\"]"
    ));
    assert!(document
        .contains("[\"Update the interface RBMESG_AvailableHSW_B with the value from TRUE\"]"));
    assert!(document
        .contains("[\"Receive the value from RBMESG_Act_u16 and store it in l_MESG_Act_u16\"]"));

    // The decision keeps its condition text.
    assert!(document.contains("{l_MESG_Act_u16 != 0}"));
    assert!(document.contains("-- Yes -->"));
    assert!(document.contains("-- No -->"));

    // Comment banners never become nodes.
    assert!(!document.contains("Actuator output processing"));

    // Both assignments reconverge on a merge before the end node.
    assert!(document.contains("[\"l_Output_B = TRUE\"]"));
    assert!(document.contains("[\"l_Output_B = FALSE\"]"));
    let merge_line = document
        .lines()
        .find(|line| line.trim_start().starts_with("merge"))
        .expect("merge node line");
    assert!(merge_line.contains("[\" \"]"));
}
