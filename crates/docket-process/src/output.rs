//! Captured output of a finished child process and its line decoding.

/// Exit code and full captured output of one finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    exit_code: i32,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl ProcessResult {
    /// Assemble a result from its parts.
    #[must_use]
    pub const fn new(exit_code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Exit code; a child killed by signal `N` reports `-N`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Whether the command exited with code zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Raw standard output bytes.
    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    /// Raw standard error bytes.
    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    /// Decoded standard output lines.
    #[must_use]
    pub fn stdout_lines(&self) -> Vec<String> {
        parse_output_lines(&self.stdout)
    }

    /// Decoded standard error lines.
    #[must_use]
    pub fn stderr_lines(&self) -> Vec<String> {
        parse_output_lines(&self.stderr)
    }
}

/// Decode captured output into lines.
///
/// Bytes that are not valid UTF-8 are dropped (not replaced), whitespace is
/// trimmed from both ends of the whole text (so the first line loses its
/// indentation), and the text is split on line boundaries in order.
#[must_use]
pub fn parse_output_lines(output: &[u8]) -> Vec<String> {
    let mut text = String::with_capacity(output.len());
    for chunk in output.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    split_lines(text.trim())
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(index) = rest.find(is_line_boundary) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..index].to_string());
        let tail = &rest[index..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    lines
}

const fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_drops_trailing_newline() {
        assert_eq!(parse_output_lines(b"line1\nline2\n"), vec!["line1", "line2"]);
    }

    #[test]
    fn empty_and_blank_output_has_no_lines() {
        assert!(parse_output_lines(b"").is_empty());
        assert!(parse_output_lines(b" \n\t\n").is_empty());
    }

    #[test]
    fn invalid_utf8_is_dropped_not_replaced() {
        let lines = parse_output_lines(b"ok\xff\xfe\nna\xc3\xafve\n\x80tail");
        assert_eq!(lines, vec!["ok", "na\u{ef}ve", "tail"]);
        assert!(lines.iter().all(|line| !line.contains('\u{fffd}')));
    }

    #[test]
    fn trims_both_ends_but_keeps_interior_lines() {
        assert_eq!(
            parse_output_lines(b"  first\n\n  third   \n\n"),
            vec!["first", "", "  third"]
        );
        assert_eq!(parse_output_lines(b"  indented\n"), vec!["indented"]);
    }

    #[test]
    fn handles_crlf_and_other_boundaries() {
        assert_eq!(
            parse_output_lines("a\r\nb\rc\u{2028}d\x0ce".as_bytes()),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn result_accessors_decode_both_streams() {
        let result = ProcessResult::new(3, b"out\n".to_vec(), b"err1\nerr2".to_vec());
        assert_eq!(result.exit_code(), 3);
        assert!(!result.success());
        assert_eq!(result.stdout(), b"out\n");
        assert_eq!(result.stdout_lines(), vec!["out"]);
        assert_eq!(result.stderr_lines(), vec!["err1", "err2"]);
    }
}
