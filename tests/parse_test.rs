mod common;

use common::program;
use fpl::mach::listing;

#[test]
fn test_forward_reference_resolves_at_definition() {
    let program = program("bra fin\nnop 0\nfin:\nend");
    assert!(program.parse_ok());
    let fin = program.labels().lookup("fin").unwrap();
    assert_eq!(program.labels().target(fin).unwrap(), Some(2));
}

#[test]
fn test_backward_reference_uses_existing_entry() {
    let program = program("fin:\nnop 0\nbra fin");
    assert!(program.parse_ok());
    let fin = program.labels().lookup("fin").unwrap();
    assert_eq!(program.labels().target(fin).unwrap(), Some(0));
    assert_eq!(program.labels().len(), 1);
}

#[test]
fn test_command_deduplication() {
    let program = program("cmd <land>\ncmd <land>\nend");
    assert!(program.parse_ok());
    assert_eq!(program.commands().len(), 1);
    assert_eq!(program.op(0).unwrap(), program.op(1).unwrap());
}

#[test]
fn test_duplicate_label_keeps_first_definition() {
    let program = program("loop:\nnop 0\nloop:\nend");
    assert!(program.parse_ok());
    assert_eq!(program.warnings().len(), 1);
    assert!(program.warnings()[0].to_string().starts_with("DUPLICATE LABEL"));
    let loop_label = program.labels().lookup("loop").unwrap();
    assert_eq!(program.labels().target(loop_label).unwrap(), Some(0));
}

#[test]
fn test_unrecognized_opcode() {
    let program = program("launch x 1");
    assert!(!program.parse_ok());
    assert_eq!(
        program.errors()[0].to_string(),
        "UNRECOGNIZED OPCODE IN LINE 1; \"launch x 1\""
    );
}

#[test]
fn test_operand_mismatch_drops_instruction() {
    let program = program("int x\nend");
    assert!(!program.parse_ok());
    assert_eq!(program.len(), 1);
    assert_eq!(
        program.errors()[0].to_string(),
        "INVALID OR MISSING OPERAND(S) IN LINE 1; \"int x\""
    );
}

#[test]
fn test_label_line_must_stand_alone() {
    let program = program("loop: end");
    assert!(!program.parse_ok());
    assert_eq!(
        program.errors()[0].to_string(),
        "INVALID LABEL DEFINITION IN LINE 1; \"loop: end\""
    );
}

#[test]
fn test_unparseable_constant() {
    let program = program("int x 99999999999");
    assert!(!program.parse_ok());
    assert_eq!(program.len(), 0);
}

#[test]
fn test_undeclared_variable_is_a_validation_warning() {
    let program = program("add x 1\nend");
    assert!(program.parse_ok());
    let warnings = program.validate();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].to_string(),
        "UNDECLARED INTEGER VARIABLE; IN add INSTRUCTION AT LOCATION 0 - PROGRAM EXECUTION MAY FAIL"
    );
}

#[test]
fn test_unresolved_label_is_a_validation_warning() {
    let program = program("bra away\nend");
    assert!(program.parse_ok());
    let warnings = program.validate();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().starts_with("UNDEFINED LABEL"));
}

#[test]
fn test_clean_program_validates_clean() {
    let program = program(
        "int x 5\nloop:\nadd x -1\ncmp x 0\nbne loop\ncmd <land>\nend",
    );
    assert!(program.parse_ok());
    assert!(program.validate().is_empty());
}

#[test]
fn test_listing_reconstruction() {
    let program = program(
        "int laps 2\ncircle:\ncmd <move 40 0 0>\nsub laps 1\ncmp laps 0\nbne circle\nend",
    );
    assert!(program.parse_ok());
    let listing = listing::instructions(&program);
    assert!(listing.contains("circle:\n"));
    assert!(listing.contains("int laps 2"));
    assert!(listing.contains("cmd <move 40 0 0>"));
    assert!(listing.contains("sub laps 1"));
    assert!(listing.contains("bne circle"));
    assert!(listing.contains("end"));
}

#[test]
fn test_variable_table_overflow_is_soft() {
    let source: String = (0..=fpl::mach::MAX_VARIABLES)
        .map(|i| format!("int v{} 1\n", i))
        .collect();
    let program = program(&source);
    assert!(!program.parse_ok());
    assert_eq!(program.vars().len(), fpl::mach::MAX_VARIABLES);
    // the rejected definition still produced an instruction with a
    // dangling handle for validation to report
    assert_eq!(program.len(), fpl::mach::MAX_VARIABLES + 1);
    assert!(!program.validate().is_empty());
    // existing entries and their handles are untouched
    assert_eq!(program.vars().lookup("v0"), Some(0));
    assert_eq!(
        program.vars().lookup(&format!("v{}", fpl::mach::MAX_VARIABLES)),
        None
    );
}

#[test]
fn test_comments_and_blank_lines_produce_nothing() {
    let program = program("\n   \n# a comment\nend # trailing\n");
    assert!(program.parse_ok());
    assert_eq!(program.len(), 1);
}
