//! End-to-end validity checks over ARM decode bodies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use armspec::{
    is_valid, Checker, EvalConfig, EvalError, LoadError, Template, TemplateError, Verdict,
};
use pretty_assertions::assert_eq;

const ADD_IMM_LAYOUT: &str = "cond:4|0|0|1|0|1|0|0|S|Rn:4|Rd:4|imm12:12";

const ADD_IMM_BODY: &str = "\
if Rn == '1111' && S == '0' then SEE ADR;
if Rn == '1101' then SEE ADD (SP plus immediate);
d = UInt(Rd);  n = UInt(Rn);  setflags = (S == '1');  imm32 = ARMExpandImm(imm12);
if d == 15 && setflags then UNPREDICTABLE;
";

const MOV_SHIFTED_LAYOUT: &str =
    "cond:4|0|0|0|1|1|0|1|S|(0)|(0)|(0)|(0)|Rd:4|imm5:5|type:2|0|Rm:4";

const MOV_SHIFTED_BODY: &str = "\
if Rd == '1111' && S == '1' then SEE SUBS PC, LR and related instructions;
case type of
\twhen '00'
\t\tif imm5 == '00000' then SEE MOV (register);
\t\tshift_n = UInt(imm5);
\twhen '11'
\t\tif imm5 == '00000' then
\t\t\tshift_n = 1;
\t\telse
\t\t\tshift_n = UInt(imm5);
\totherwise
\t\tshift_n = if imm5 == '00000' then 32 else UInt(imm5);
d = UInt(Rd);  m = UInt(Rm);  setflags = (S == '1');
";

fn template(name: &str, layout: &str, body: &str) -> Template {
    Template::from_source(name, layout, body).expect("template loads")
}

fn verdict(template: &Template, word: u32) -> Verdict {
    Checker::default().check(template, word).unwrap()
}

#[test]
fn test_add_immediate() {
    armspec::init_tracing().unwrap();
    let add = template("ADD_imm", ADD_IMM_LAYOUT, ADD_IMM_BODY);

    // add r1, r2, #0xAB000000
    assert_eq!(verdict(&add, 0xE282_14AB), Verdict::Valid);
    // Rn == PC without S is ADR.
    assert_eq!(verdict(&add, 0xE28F_14AB), Verdict::SeeOther);
    // Rn == SP has its own encoding.
    assert_eq!(verdict(&add, 0xE28D_14AB), Verdict::SeeOther);
    // adds pc, r2, #imm is reachable but unpredictable.
    assert_eq!(verdict(&add, 0xE292_F4AB), Verdict::Unspecified);
    // sub r1, r2, #imm does not match the opcode bits.
    assert_eq!(verdict(&add, 0xE242_14AB), Verdict::NotApplicable);

    assert!(is_valid(&add, 0xE282_14AB).unwrap());
    assert!(is_valid(&add, 0xE292_F4AB).unwrap());
    assert!(!is_valid(&add, 0xE28F_14AB).unwrap());
    assert!(!is_valid(&add, 0xE242_14AB).unwrap());
}

#[test]
fn test_shifted_move_case_arms() {
    let mov = template("MOV_shifted", MOV_SHIFTED_LAYOUT, MOV_SHIFTED_BODY);

    // asr r0, r1, #3
    assert_eq!(verdict(&mov, 0xE1A0_01C1), Verdict::Valid);
    // lsl #0 is plain MOV (register).
    assert_eq!(verdict(&mov, 0xE1A0_0001), Verdict::SeeOther);
    // rrx
    assert_eq!(verdict(&mov, 0xE1A0_0061), Verdict::Valid);
    // movs pc, ... belongs to the exception-return instructions.
    assert_eq!(verdict(&mov, 0xE1B0_F1C1), Verdict::SeeOther);
    // A parenthesized (0) bit set to 1 does not match.
    assert_eq!(verdict(&mov, 0xE1A1_0001), Verdict::NotApplicable);
}

#[test]
fn test_unconditional_sentinels() {
    let unpredictable = template("U", "x:32", "UNPREDICTABLE;");
    let see = template("S", "x:32", "SEE ADD (register);");
    for word in [0, 0x1234_5678, u32::MAX] {
        assert!(is_valid(&unpredictable, word).unwrap());
        assert!(!is_valid(&see, word).unwrap());
    }
}

#[test]
fn test_field_dependent_undefined() {
    let t = template("T", "cond|rest:31", "if cond == '1' then UNDEFINED; else x = 1;");
    assert_eq!(verdict(&t, 0x8000_0000), Verdict::Undefined);
    assert_eq!(verdict(&t, 0x0000_0000), Verdict::Valid);
}

#[test]
fn test_inconsistent_field() {
    let guarded = template(
        "G",
        "size:2|size:2|rest:28",
        "if !Consistent(size) then UNDEFINED;",
    );
    assert!(is_valid(&guarded, 0x5000_0000).unwrap());
    assert!(!is_valid(&guarded, 0x6000_0000).unwrap());

    // A failing assert is evaluated and discarded.
    let asserted = template("A", "size:2|size:2|rest:28", "assert Consistent(size);");
    assert!(is_valid(&asserted, 0x6000_0000).unwrap());
}

#[test]
fn test_defects_are_errors() {
    let t = template("D", "Rd:4|rest:28", "x = Rd + 1;");
    assert_eq!(
        Checker::default().check(&t, 0),
        Err(EvalError::BinaryTypeMismatch {
            op: armspec_ir::BinaryOp::Add,
            left: "bits",
            right: "integer"
        })
    );
}

#[test]
fn test_strict_names() {
    let t = template("N", "x:32", "shift_t = SRType_LSL;");
    assert!(is_valid(&t, 0).unwrap());

    let strict = Checker::new(EvalConfig::strict());
    assert_eq!(
        strict.is_valid(&t, 0),
        Err(EvalError::UnresolvedName {
            name: "SRType_LSL".into()
        })
    );
}

#[test]
fn test_block_comments_in_body() {
    let body = "\
/* Encoding-specific operations,
   see the instruction description. */
if Rn == '1111' then SEE ADR;
d /* destination */ = UInt(Rd);
if d == 15 then
\t/* Writes to the PC
are unpredictable. */
\tUNPREDICTABLE;
";
    let t = template("CMT", "cond:4|0|0|1|0|1|0|0|S|Rn:4|Rd:4|imm12:12", body);
    assert!(is_valid(&t, 0xE282_14AB).unwrap());
    assert_eq!(verdict(&t, 0xE282_F4AB), Verdict::Unspecified);
    assert_eq!(verdict(&t, 0xE28F_14AB), Verdict::SeeOther);

    let header = template("H", "x:32", "/* header */\nx = 1;");
    assert!(is_valid(&header, 0).unwrap());
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        Template::from_source("P", "x:32", "x = ;"),
        Err(LoadError::Parse(_))
    ));
    assert_eq!(
        Template::from_source("L", "x:31", "x = 1;"),
        Err(LoadError::Layout(TemplateError::WidthMismatch { total: 31 }))
    );
    assert!(matches!(
        Template::from_source("C", "x:32", "x = 1; /* open"),
        Err(LoadError::Parse(_))
    ));
}
