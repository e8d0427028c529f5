//! Plain-text rendering of diagnostics.
//!
//! Produces one `file:line: message` line per diagnostic, with notes
//! indented underneath.

use std::io::{self, Write};

use crate::Diagnostic;

/// Render one diagnostic as `file:line: message`.
pub fn render(source_name: &str, line: u32, diag: &Diagnostic) -> String {
    format!("{source_name}:{line}: {}", diag.message)
}

/// Writes rendered diagnostics to any `io::Write` sink.
pub struct LineEmitter<'a, W: Write> {
    source_name: &'a str,
    writer: W,
}

impl<'a, W: Write> LineEmitter<'a, W> {
    pub fn new(source_name: &'a str, writer: W) -> Self {
        LineEmitter {
            source_name,
            writer,
        }
    }

    /// Emit every `(diagnostic, line)` pair in order.
    pub fn emit_all<'d>(
        &mut self,
        diagnostics: impl IntoIterator<Item = &'d (Diagnostic, u32)>,
    ) -> io::Result<()> {
        for (diag, line) in diagnostics {
            writeln!(self.writer, "{}", render(self.source_name, *line, diag))?;
            for note in &diag.notes {
                writeln!(self.writer, "\tnote: {note}")?;
            }
        }
        self.writer.flush()
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_file_line_message() {
        let diag = Diagnostic::error(ErrorCode::E1001).with_message("syntax error");
        assert_eq!(render("ADD.txt", 4, &diag), "ADD.txt:4: syntax error");
    }

    #[test]
    fn test_emit_all_writes_notes() {
        let diags = vec![(
            Diagnostic::error(ErrorCode::E1003)
                .with_message("unclosed '('")
                .with_note("opened here"),
            2,
        )];
        let mut emitter = LineEmitter::new("t.txt", Vec::new());
        emitter.emit_all(&diags).unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "t.txt:2: unclosed '('\n\tnote: opened here\n");
    }
}
