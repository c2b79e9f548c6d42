use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::extraction::{Extraction, TextExtractor};

/// Returned when the document contains no recoverable text operators.
pub const NO_TEXT_PLACEHOLDER: &str =
    "Unable to extract readable text from this PDF. Please ensure the PDF contains selectable text.";

/// Returned when the document content could not be processed at all.
pub const PROCESSING_ERROR_PLACEHOLDER: &str =
    "Error processing PDF content. The file may be corrupted or contain only images.";

// PDF text objects are delimited by BT/ET in the content stream.
static TEXT_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)BT\s*(.*?)\s*ET").unwrap());

// Font selection: a name token, one or two numeric operands, then Tf.
static FONT_SELECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\w+(\s+\d+(\.\d+)?){1,2}\s+Tf").unwrap());

// Text positioning: two numeric operands followed by Td.
static TEXT_MOVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?\s+\d+(\.\d+)?\s+Td").unwrap());

// Single-string show: a parenthesized literal followed by Tj.
static SHOW_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)\s*Tj").unwrap());

// Array show: a bracketed array of literals and kerning numbers, then TJ.
static SHOW_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\s*TJ").unwrap());

static LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Best-effort extractor that pattern-matches text-show operators in raw
/// PDF content streams.
///
/// This is deliberately not a PDF parser: compressed content streams, font
/// encoding maps and object streams are not handled, so most modern PDFs
/// yield the placeholder. The trait seam allows swapping in a real
/// content-stream decoder without touching the rest of the pipeline.
pub struct ContentStreamExtractor;

impl ContentStreamExtractor {
    pub fn new() -> Self {
        ContentStreamExtractor
    }
}

impl Default for ContentStreamExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for ContentStreamExtractor {
    fn extract(&self, bytes: &[u8]) -> Extraction {
        if bytes.is_empty() {
            return Extraction {
                text: PROCESSING_ERROR_PLACEHOLDER.to_string(),
                succeeded: false,
            };
        }

        let decoded = decode_latin1(bytes);
        match scan_text_objects(&decoded) {
            Some(text) => Extraction {
                text,
                succeeded: true,
            },
            None => Extraction {
                text: NO_TEXT_PLACEHOLDER.to_string(),
                succeeded: false,
            },
        }
    }

    fn backend_name(&self) -> &str {
        "content-stream"
    }
}

/// Single-byte decode: every byte maps to exactly one char, so the operator
/// regexes can run over arbitrary binary input without losing offsets.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Scan BT..ET blocks in document order and recover the show-operator
/// operands, one block per line. Returns None when nothing was recovered.
fn scan_text_objects(decoded: &str) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    for block in TEXT_OBJECT.captures_iter(decoded) {
        let inner = &block[1];

        let stripped = FONT_SELECT.replace_all(inner, "");
        let stripped = TEXT_MOVE.replace_all(&stripped, "");

        let shown = SHOW_SINGLE.replace_all(&stripped, |caps: &Captures| {
            let mut out = unescape_literal(&caps[1]);
            out.push(' ');
            out
        });
        let shown = SHOW_ARRAY.replace_all(&shown, |caps: &Captures| {
            let mut out = String::new();
            for lit in LITERAL.captures_iter(&caps[1]) {
                out.push_str(&unescape_literal(&lit[1]));
                out.push(' ');
            }
            out
        });

        lines.push(shown.into_owned());
    }

    let text = lines.join("\n").trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Resolve backslash-escaped parentheses and backslashes inside a string
/// literal. Other escape sequences pass through untouched.
fn unescape_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('(') => out.push('('),
            Some(')') => out.push(')'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(bytes: &[u8]) -> Extraction {
        ContentStreamExtractor::new().extract(bytes)
    }

    #[test]
    fn single_show_operator() {
        let result = extract(b"%PDF-1.4 BT(Hello) Tj ET trailer");
        assert!(result.succeeded);
        assert!(result.text.contains("Hello"));
    }

    #[test]
    fn array_show_discards_kerning() {
        let result = extract(b"BT[(A)-20(B)]TJ ET");
        assert!(result.succeeded);
        assert!(result.text.contains('A'));
        assert!(result.text.contains('B'));
        assert!(!result.text.contains("-20"));
    }

    #[test]
    fn kerning_value_does_not_change_output() {
        let a = extract(b"BT[(A)-20(B)]TJ ET");
        let b = extract(b"BT[(A)-999(B)]TJ ET");
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn font_and_positioning_directives_stripped() {
        let result = extract(b"BT /F1 12 Tf 100 700 Td (Session notes) Tj ET");
        assert!(result.succeeded);
        assert!(result.text.contains("Session notes"));
        assert!(!result.text.contains("F1"));
        assert!(!result.text.contains("700"));
    }

    #[test]
    fn multiple_blocks_one_line_each() {
        let result = extract(b"BT(first) Tj ET junk BT(second) Tj ET");
        assert!(result.succeeded);
        let lines: Vec<&str> = result.text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
    }

    #[test]
    fn no_text_markers_yields_placeholder() {
        let result = extract(b"%PDF-1.4 stream endstream");
        assert!(!result.succeeded);
        assert_eq!(result.text, NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn block_with_no_show_operators_yields_placeholder() {
        let result = extract(b"BT /F1 12 Tf 10 20 Td ET");
        assert!(!result.succeeded);
        assert_eq!(result.text, NO_TEXT_PLACEHOLDER);
    }

    #[test]
    fn empty_buffer_yields_error_placeholder() {
        let result = extract(b"");
        assert!(!result.succeeded);
        assert_eq!(result.text, PROCESSING_ERROR_PLACEHOLDER);
    }

    #[test]
    fn binary_garbage_never_panics() {
        let bytes: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        let result = extract(&bytes);
        assert!(!result.text.is_empty());
    }

    #[test]
    fn escaped_parens_are_unescaped() {
        assert_eq!(unescape_literal(r"a\(b\)c"), "a(b)c");
        assert_eq!(unescape_literal(r"back\\slash"), r"back\slash");
        assert_eq!(unescape_literal(r"keep\nother"), r"keep\nother");
    }

    #[test]
    fn high_bytes_decode_one_to_one() {
        // 0xE9 is é in Latin-1; the decode must not merge or drop bytes.
        let bytes = b"BT(caf\xe9) Tj ET";
        let result = extract(bytes);
        assert!(result.text.contains("caf\u{e9}"));
    }
}
