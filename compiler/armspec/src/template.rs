//! Instruction templates: a 32-bit field layout plus the decode body.

use std::fmt;

use armspec_eval::{Bits, Environment};
use armspec_ir::Program;
use armspec_parse::ParseFailure;
use thiserror::Error;
use tracing::debug;

/// Total width every layout must cover.
pub const WORD_BITS: u32 = 32;

/// One specifier of a template layout, most significant first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldSpec {
    /// Fixed bit. `(0)` and `(1)` are parenthesized literals: architecturally
    /// "should be" values, matched exactly like plain ones.
    Literal { bit: bool, parenthesized: bool },
    /// Named field bound as a concrete `Bits` value.
    Field { name: String, width: u32 },
}

impl FieldSpec {
    pub fn width(&self) -> u32 {
        match self {
            FieldSpec::Literal { .. } => 1,
            FieldSpec::Field { width, .. } => *width,
        }
    }

    /// Parse one `|`-separated layout item.
    fn parse(item: &str) -> Result<Self, TemplateError> {
        let item = item.trim();
        let literal = |bit, parenthesized| Ok(FieldSpec::Literal { bit, parenthesized });
        match item {
            "0" => return literal(false, false),
            "1" => return literal(true, false),
            "(0)" => return literal(false, true),
            "(1)" => return literal(true, true),
            _ => {}
        }
        let (name, width) = match item.split_once(':') {
            Some((name, width)) => {
                let width = width.trim().parse::<u32>().map_err(|_| TemplateError::BadWidth {
                    item: item.to_string(),
                })?;
                (name.trim(), width)
            }
            None => (item, 1),
        };
        if name.is_empty() {
            return Err(TemplateError::EmptyName {
                item: item.to_string(),
            });
        }
        if width == 0 {
            return Err(TemplateError::ZeroWidth {
                name: name.to_string(),
            });
        }
        Ok(FieldSpec::Field {
            name: name.to_string(),
            width,
        })
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSpec::Literal { bit, parenthesized } => {
                let digit = u8::from(*bit);
                if *parenthesized {
                    write!(f, "({digit})")
                } else {
                    write!(f, "{digit}")
                }
            }
            FieldSpec::Field { name, width: 1 } => f.write_str(name),
            FieldSpec::Field { name, width } => write!(f, "{name}:{width}"),
        }
    }
}

/// Malformed template layout.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("layout covers {total} bits, expected 32")]
    WidthMismatch { total: u64 },
    #[error("field {name} has zero width")]
    ZeroWidth { name: String },
    #[error("layout item `{item}` has no field name")]
    EmptyName { item: String },
    #[error("layout item `{item}` has an invalid width")]
    BadWidth { item: String },
}

/// Failure building a template from layout and source text.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    #[error(transparent)]
    Layout(#[from] TemplateError),
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

/// An instruction encoding: field layout plus decode pseudocode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    specifiers: Vec<FieldSpec>,
    program: Program,
}

impl Template {
    /// Build a template; the specifier widths must total 32.
    pub fn new(
        name: impl Into<String>,
        specifiers: Vec<FieldSpec>,
        program: Program,
    ) -> Result<Self, TemplateError> {
        let total: u64 = specifiers.iter().map(|s| u64::from(s.width())).sum();
        if total != u64::from(WORD_BITS) {
            return Err(TemplateError::WidthMismatch { total });
        }
        let name = name.into();
        debug!(
            template = %name,
            fields = specifiers.len(),
            stmts = program.body.len(),
            "template built"
        );
        Ok(Template {
            name,
            specifiers,
            program,
        })
    }

    /// Build from a layout string such as `"cond:4|0|0|1|S|Rn:4|..."`.
    pub fn from_layout(
        name: impl Into<String>,
        layout: &str,
        program: Program,
    ) -> Result<Self, TemplateError> {
        let specifiers = layout
            .split('|')
            .map(FieldSpec::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, specifiers, program)
    }

    /// Parse `source` as the decode body and build from `layout`.
    pub fn from_source(
        name: impl Into<String>,
        layout: &str,
        source: &str,
    ) -> Result<Self, LoadError> {
        let name = name.into();
        let program = armspec_parse::parse(&name, source).into_result()?;
        Ok(Self::from_layout(name, layout, program)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specifiers(&self) -> &[FieldSpec] {
        &self.specifiers
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Match `word` against the literal bits and bind every named field in
    /// `env`. Returns `false` at the first literal mismatch.
    pub fn bind(&self, word: u32, env: &mut Environment) -> bool {
        let mut offset = 0u32;
        for spec in &self.specifiers {
            match spec {
                FieldSpec::Literal { bit, .. } => {
                    if ((word >> (WORD_BITS - 1 - offset)) & 1 != 0) != *bit {
                        return false;
                    }
                }
                FieldSpec::Field { name, width } => {
                    let value = (word >> (WORD_BITS - offset - width)) & (u32::MAX >> (WORD_BITS - width));
                    // Widths are 1..=32 and fit the word, so this cannot fail.
                    if let Ok(bits) = Bits::new(*width, value) {
                        env.bind_field(name, bits.into());
                    }
                }
            }
            offset += spec.width();
        }
        true
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, spec) in self.specifiers.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{spec}")?;
        }
        Ok(())
    }
}
