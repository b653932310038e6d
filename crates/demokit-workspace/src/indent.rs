// indent.rs — Indent normalization for multi-line text fixtures.
//
// A text body that starts with '\n' is treated as an indented block, the
// shape a multi-line string literal takes when written inline in a test:
//
//     "
//         first line
//           nested
//         last line
//     "
//
// The indent of the first line with content is stripped from every line.
// Lines are numbered from 1, starting after the leading newline.

use crate::error::WorkspaceError;

/// Normalize `body` for writing.
///
/// Bodies that do not begin with `\n` are returned unchanged. Otherwise the
/// leading newline is removed, the common indent is stripped, and the final
/// whitespace-only line (if any) becomes a single trailing newline when
/// `insert_final_newline` is set, or is dropped when it is not.
pub fn normalize_indent(body: &str, insert_final_newline: bool) -> Result<String, WorkspaceError> {
    let Some(block) = body.strip_prefix('\n') else {
        return Ok(body.to_string());
    };

    let mut lines: Vec<&str> = block.split('\n').collect();

    let has_trailing_blank = lines.last().is_some_and(|line| line.trim().is_empty());
    if has_trailing_blank {
        lines.pop();
    }

    let indent = lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .map(|line| leading_whitespace(line))
        .unwrap_or("");

    let mut normalized = Vec::with_capacity(lines.len() + 1);
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            normalized.push("");
            continue;
        }
        match line.strip_prefix(indent) {
            Some(rest) => normalized.push(rest),
            None => {
                return Err(WorkspaceError::IndentationMismatch {
                    line: index + 1,
                    expected: indent.chars().count(),
                })
            }
        }
    }

    if has_trailing_blank && insert_final_newline {
        normalized.push("");
    }

    Ok(normalized.join("\n"))
}

fn leading_whitespace(line: &str) -> &str {
    let content_start = line.len() - line.trim_start().len();
    &line[..content_start]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbatim_when_not_starting_with_newline() {
        let body = "  keep\n    as is";
        assert_eq!(normalize_indent(body, true).unwrap(), body);
        assert_eq!(normalize_indent(body, false).unwrap(), body);
    }

    #[test]
    fn strips_common_indent_and_keeps_one_trailing_newline() {
        let body = "\n    foo\n      bar\n    baz\n  ";
        assert_eq!(normalize_indent(body, true).unwrap(), "foo\n  bar\nbaz\n");
    }

    #[test]
    fn drops_trailing_line_without_final_newline() {
        let body = "\n    foo\n    baz\n  ";
        assert_eq!(normalize_indent(body, false).unwrap(), "foo\nbaz");
    }

    #[test]
    fn non_blank_last_line_is_kept_without_newline() {
        let body = "\n  one\n  two";
        assert_eq!(normalize_indent(body, true).unwrap(), "one\ntwo");
    }

    #[test]
    fn empty_lines_inside_block_are_preserved() {
        let body = "\n    # Title\n\n    Body text\n";
        assert_eq!(normalize_indent(body, true).unwrap(), "# Title\n\nBody text\n");
    }

    #[test]
    fn tab_indent_is_detected() {
        let body = "\n\tfn main() {\n\t\tprintln!();\n\t}\n";
        assert_eq!(
            normalize_indent(body, true).unwrap(),
            "fn main() {\n\tprintln!();\n}\n"
        );
    }

    #[test]
    fn mismatch_reports_line_and_width() {
        let body = "\n    foo\n  bar\n    baz\n";
        let err = normalize_indent(body, true).unwrap_err();
        assert!(matches!(
            err,
            WorkspaceError::IndentationMismatch { line: 2, expected: 4 }
        ));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn whitespace_only_line_with_short_indent_is_a_mismatch() {
        let body = "\n    foo\n  \n    bar\n";
        let err = normalize_indent(body, true).unwrap_err();
        assert!(matches!(
            err,
            WorkspaceError::IndentationMismatch { line: 2, .. }
        ));
    }

    #[test]
    fn lone_newline_becomes_empty() {
        assert_eq!(normalize_indent("\n", true).unwrap(), "");
        assert_eq!(normalize_indent("\n", false).unwrap(), "");
    }

    #[test]
    fn unindented_block_only_loses_leading_newline() {
        assert_eq!(normalize_indent("\na\nb\n", true).unwrap(), "a\nb\n");
    }
}
