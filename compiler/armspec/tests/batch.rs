//! Batch checking across many templates.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use armspec::{Checker, EvalConfig, EvalError, Template};
use pretty_assertions::assert_eq;

fn template(name: &str, layout: &str, body: &str) -> Template {
    Template::from_source(name, layout, body).expect("template loads")
}

fn templates() -> Vec<Template> {
    vec![
        template(
            "BX",
            "cond:4|0|0|0|1|0|0|1|0|(1)|(1)|(1)|(1)|(1)|(1)|(1)|(1)|(1)|(1)|(1)|(1)|0|0|0|1|Rm:4",
            "m = UInt(Rm);\nif m == 15 then UNPREDICTABLE;",
        ),
        template("BROKEN", "Rd:4|rest:28", "x = Rd + 1;"),
        template(
            "UDF",
            "cond:4|0|1|1|1|1|1|1|1|imm12:12|1|1|1|1|imm4:4",
            "if cond != '1110' then UNPREDICTABLE;\nUNDEFINED;",
        ),
    ]
}

const WORDS: [u32; 5] = [
    0xE12F_FF1E, // bx lr
    0xE12F_FF1F, // bx pc
    0xE7F0_00F0, // udf #0
    0xD7F0_00F0, // udf with a condition
    0x0000_0000,
];

#[test]
fn test_batch_isolates_defects() {
    let report = Checker::default().check_batch(&templates(), &WORDS);
    assert_eq!(report.templates.len(), 3);

    let bx = report.get("BX").unwrap();
    assert_eq!(bx.valid_words, vec![0xE12F_FF1E, 0xE12F_FF1F]);
    assert!(!bx.is_defective());

    let broken = report.get("BROKEN").unwrap();
    assert!(broken.valid_words.is_empty());
    assert_eq!(broken.defective_words, WORDS.len());
    let defect = broken.defect.as_ref().unwrap();
    assert_eq!(defect.word, WORDS[0]);
    assert!(matches!(defect.error, EvalError::BinaryTypeMismatch { .. }));

    let udf = report.get("UDF").unwrap();
    assert_eq!(udf.valid_words, vec![0xD7F0_00F0]);

    let defective: Vec<_> = report.defective().map(|t| t.name.as_str()).collect();
    assert_eq!(defective, ["BROKEN"]);
}

#[test]
fn test_batch_preserves_template_order() {
    let report = Checker::new(EvalConfig::default()).check_batch(&templates(), &[]);
    let names: Vec<_> = report.templates.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["BX", "BROKEN", "UDF"]);
    assert!(report.templates.iter().all(|t| t.valid_words.is_empty()));
}
