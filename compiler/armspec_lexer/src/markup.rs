//! Markup pass: transcription fixups and explicit block markers.
//!
//! Pseudocode blocks are delimited by leading tabs. Rather than tracking
//! columns in the tokenizer, this pass rewrites the text so each depth
//! change carries an explicit marker character at the start of the line:
//! [`INDENT`] for one level deeper, one [`UNINDENT`] per level closed. Line
//! structure is preserved, so byte offsets in the marked text still map to
//! the original line numbers.

use std::borrow::Cow;

/// Marker opening a block.
pub const INDENT: char = '»';

/// Marker closing a block.
pub const UNINDENT: char = '«';

/// Known transcription typos in the manual text and their corrections.
const TYPO_FIXES: &[(&str, &str)] = &[
    ("R[i}", "R[i]"),
    ("R[n}", "R[n]"),
    (
        "(1 << (3-UInt(op)-UInt(size));",
        "(1 << (3-UInt(op)-UInt(size)));",
    ),
    ("(D[n+r] AND NOT(D[m+r]);", "(D[n+r] AND NOT(D[m+r]));"),
    ("(D[d+r] AND NOT(D[m+r]);", "(D[d+r] AND NOT(D[m+r]));"),
    (
        "(D[n+r] AND D[d+r]) OR (D[m+r] AND NOT(D[d+r]);",
        "(D[n+r] AND D[d+r]) OR (D[m+r] AND NOT(D[d+r]));",
    ),
];

/// Apply typo fixups, then inject block markers.
pub fn markup(text: &str) -> String {
    let fixed = fix_typos(text);
    insert_block_markers(&fixed)
}

fn fix_typos(text: &str) -> Cow<'_, str> {
    let mut fixed = Cow::Borrowed(text);
    for (from, to) in TYPO_FIXES {
        if fixed.contains(from) {
            fixed = Cow::Owned(fixed.replace(from, to));
        }
    }
    fixed
}

fn insert_block_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    // Open tab depths, outermost first. The bottom entry is the base level.
    let mut levels: Vec<usize> = Vec::new();
    let mut in_comment = false;

    for (i, raw_line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let continues_comment = in_comment;
        in_comment = block_comment_open_after(raw_line, in_comment);
        let line = raw_line.find("//").map_or(raw_line, |pos| &raw_line[..pos]);
        if continues_comment || line.trim().is_empty() {
            out.push_str(raw_line);
            continue;
        }

        let depth = line.bytes().take_while(|&b| b == b'\t').count();
        let mut top = *levels.last().unwrap_or(&depth);
        if levels.is_empty() {
            levels.push(depth);
        }

        while top > depth {
            out.push(UNINDENT);
            levels.pop();
            if let Some(&outer) = levels.last() {
                top = outer;
            } else {
                levels.push(depth);
                top = depth;
            }
        }
        if top < depth {
            out.push(INDENT);
            levels.push(depth);
        }
        out.push_str(line);
    }

    for _ in 1..levels.len() {
        out.push(UNINDENT);
    }
    out
}

/// Whether a `/* ... */` comment is still open at the end of `line`.
fn block_comment_open_after(line: &str, mut open: bool) -> bool {
    let mut rest = line;
    loop {
        if open {
            let Some(end) = rest.find("*/") else {
                return true;
            };
            rest = &rest[end + 2..];
            open = false;
        } else {
            let Some(start) = rest.find("/*") else {
                return false;
            };
            if matches!(rest.find("//"), Some(line_comment) if line_comment < start) {
                return false;
            }
            rest = &rest[start + 2..];
            open = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_text_unchanged() {
        assert_eq!(markup("a = 1;\nb = 2;"), "a = 1;\nb = 2;");
    }

    #[test]
    fn test_indent_and_close_at_eof() {
        let text = "if c then\n\tx = 1;\n\ty = 2;";
        assert_eq!(markup(text), "if c then\n»\tx = 1;\n\ty = 2;«");
    }

    #[test]
    fn test_multi_level_dedent_emits_one_marker_per_level() {
        let text = "if a then\n\tif b then\n\t\tx = 1;\nz = 0;";
        let marked = markup(text);
        assert_eq!(marked, "if a then\n»\tif b then\n»\t\tx = 1;\n««z = 0;");
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let text = "if c then\n\n// note\n\tx = 1;";
        assert_eq!(markup(text), "if c then\n\n// note\n»\tx = 1;«");
    }

    #[test]
    fn test_trailing_comment_stripped_before_measuring() {
        let text = "x = 1; // first\n\ty = 2;";
        assert_eq!(markup(text), "x = 1; \n»\ty = 2;«");
    }

    #[test]
    fn test_dedent_below_base_resets_level() {
        let text = "\tx = 1;\ny = 2;\n\tz = 3;";
        assert_eq!(markup(text), "\tx = 1;\n«y = 2;\n»\tz = 3;«");
    }

    #[test]
    fn test_block_comment_lines_carry_no_markers() {
        let text = "if c then\n\tx = 1; /* spans\nseveral\n\t\tlines */\n\ty = 2;";
        assert_eq!(
            markup(text),
            "if c then\n»\tx = 1; /* spans\nseveral\n\t\tlines */\n\ty = 2;«"
        );
    }

    #[test]
    fn test_block_comment_state() {
        assert!(block_comment_open_after("x = 1; /* open", false));
        assert!(!block_comment_open_after("/* a */ /* b */", false));
        assert!(!block_comment_open_after("still */ x = 1;", true));
        assert!(!block_comment_open_after("// no /* here", false));
        assert!(block_comment_open_after("nothing closes", true));
    }

    #[test]
    fn test_typo_fixups() {
        assert_eq!(markup("x = R[i};"), "x = R[i];");
        assert_eq!(
            markup("y = (1 << (3-UInt(op)-UInt(size));"),
            "y = (1 << (3-UInt(op)-UInt(size)));"
        );
    }

    #[test]
    fn test_line_count_preserved() {
        let text = "if c then\n\tx = 1;\n\n\ty = 2;\nz = 3;";
        assert_eq!(markup(text).matches('\n').count(), text.matches('\n').count());
    }
}
