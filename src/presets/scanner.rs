//! Lexical layer for the preset catalog source.
//!
//! The catalog is program text rather than a data file, so it cannot be
//! deserialized directly. Instead it is read as a small grammar:
//!
//! ```text
//! Entry  := name ':' '{' [ label ] Block(light) [ Block(dark) ] '}'
//! Block  := ('light' | 'dark') ':' '{' KvPair* '}'
//! KvPair := key ':' string
//! ```
//!
//! Entries are located by [`super::extract`]; this module recognises the parts
//! inside one entry's text. Comments are skipped everywhere: they neither
//! change brace depth nor contribute labels, blocks or pairs.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::schema::Mode;

static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\blabel\s*:\s*(?:"([^"]+)"|'([^']+)')"#).expect("Should compile: LABEL_RE")
});

// A sub-block key must open a line or follow `{` or `,`, so `"solar-dark": {` never matches
static LIGHT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)(?:^|[{,])[ \t]*(?:"light"|'light'|light)\s*:\s*\{"#)
        .expect("Should compile: LIGHT_BLOCK_RE")
});

static DARK_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)(?:^|[{,])[ \t]*(?:"dark"|'dark'|dark)\s*:\s*\{"#)
        .expect("Should compile: DARK_BLOCK_RE")
});

static KV_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["']?\b([a-z][a-z0-9-]*)["']?\s*:\s*(?:"([^"]+)"|'([^']+)')"#)
        .expect("Should compile: KV_PAIR_RE")
});

/// A `key: "value"` pair inside a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KvPair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// A `light` or `dark` sub-block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub mode: Mode,
    /// Text between the block's braces.
    pub body: &'a str,
    /// Pairs in source order; duplicates are kept here and resolved by the caller.
    pub pairs: Vec<KvPair<'a>>,
    /// False when the closing brace was never found and the body runs to the end of the entry.
    pub terminated: bool,
}

/// One top-level catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    /// Byte offset of the entry in the catalog text.
    pub offset: usize,
    /// Entry text, running up to the next entry.
    pub text: &'a str,
    pub label: Option<&'a str>,
    pub light: Option<Block<'a>>,
    pub dark: Option<Block<'a>>,
}

impl<'a> Entry<'a> {
    /// Parse the parts of an entry whose text has already been delimited.
    ///
    /// Only the text after the entry's own opening brace is searched, so the
    /// entry name never reads as a label or sub-block key.
    pub fn parse(name: &'a str, offset: usize, text: &'a str) -> Self {
        let body = text.find('{').map_or(text, |open| &text[open + 1..]);
        Self {
            name,
            offset,
            text,
            label: find_label(body),
            light: find_block(body, Mode::Light),
            dark: find_block(body, Mode::Dark),
        }
    }
}

/// Index of the `}` closing the `{` at byte `open`.
///
/// Braces inside string literals (`"`, `'`, `` ` ``) and comments do not count.
/// Returns `None` if `open` is not a `{` or the block never closes.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 1usize;
    let mut pos = open + 1;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            b'"' | b'\'' | b'`' => pos = skip_string(bytes, pos),
            b'/' if bytes.get(pos + 1) == Some(&b'/') => pos = skip_line_comment(bytes, pos),
            b'/' if bytes.get(pos + 1) == Some(&b'*') => pos = skip_block_comment(bytes, pos),
            _ => {}
        }
        pos += 1;
    }
    None
}

/// Returns the index of the closing quote of the string starting at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;
    while let Some(&byte) = bytes.get(pos) {
        if byte == b'\\' {
            pos += 2;
            continue;
        }
        if byte == quote {
            return pos;
        }
        pos += 1;
    }
    bytes.len()
}

/// Returns the index of the newline ending the comment at `start`.
fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes
        .iter()
        .skip(start)
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

/// Returns the index of the `/` closing the comment at `start`.
fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes
        .windows(2)
        .skip(start + 2)
        .position(|pair| pair == b"*/")
        .map_or(bytes.len(), |offset| start + 2 + offset + 1)
}

/// Byte ranges of every comment in `text`, skipping comment markers inside strings.
fn comment_spans(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'"' | b'\'' | b'`' => pos = skip_string(bytes, pos),
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                let end = skip_line_comment(bytes, pos);
                spans.push(pos..end);
                pos = end;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                let end = skip_block_comment(bytes, pos);
                spans.push(pos..end);
                pos = end;
            }
            _ => {}
        }
        pos += 1;
    }
    spans
}

fn in_comment(spans: &[Range<usize>], at: usize) -> bool {
    spans.iter().any(|span| span.contains(&at))
}

/// Find the display label declared in an entry.
pub fn find_label(text: &str) -> Option<&str> {
    let comments = comment_spans(text);
    LABEL_RE
        .captures_iter(text)
        .find(|caps| caps.get(0).is_some_and(|m| !in_comment(&comments, m.start())))
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
}

/// Find and scan the `light` or `dark` sub-block of an entry.
pub fn find_block(text: &str, mode: Mode) -> Option<Block<'_>> {
    let re = match mode {
        Mode::Light => &*LIGHT_BLOCK_RE,
        Mode::Dark => &*DARK_BLOCK_RE,
    };
    let comments = comment_spans(text);
    let found = re
        .find_iter(text)
        .find(|m| !in_comment(&comments, m.end() - 1))?;
    let open = found.end() - 1;
    let body_start = found.end();

    let (body, terminated) = match matching_brace(text, open) {
        Some(close) => (&text[body_start..close], true),
        None => (&text[body_start..], false),
    };

    Some(Block {
        mode,
        body,
        pairs: parse_pairs(body),
        terminated,
    })
}

/// Extract every `key: "value"` / `key: 'value'` pair from a block body.
///
/// Pairs inside comments are ignored.
pub fn parse_pairs(body: &str) -> Vec<KvPair<'_>> {
    let comments = comment_spans(body);
    KV_PAIR_RE
        .captures_iter(body)
        .filter_map(|caps| {
            if in_comment(&comments, caps.get(0)?.start()) {
                return None;
            }
            let key = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some(KvPair { key, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_brace_nested() {
        let text = "{ a: { b: 1 }, c: {} } tail";
        assert_eq!(matching_brace(text, 0), Some(21));
        assert_eq!(matching_brace(text, 5), Some(12));
    }

    #[test]
    fn test_matching_brace_ignores_braces_in_strings() {
        let text = r#"{ primary: "}", accent: '{', note: `}}` }"#;
        assert_eq!(matching_brace(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn test_matching_brace_ignores_escaped_quotes() {
        let text = r#"{ label: "a \" } b" }"#;
        assert_eq!(matching_brace(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn test_matching_brace_ignores_comments() {
        let text = "{ // closing } here\n  a: 'b', /* { */ }";
        assert_eq!(matching_brace(text, 0), Some(text.len() - 1));
    }

    #[test]
    fn test_matching_brace_unterminated() {
        assert_eq!(matching_brace("{ a: { b: 'c' }", 0), None);
        assert_eq!(matching_brace("no brace", 0), None);
    }

    #[test]
    fn test_parse_pairs_both_quote_styles() {
        let pairs = parse_pairs(
            r##" primary: "#112233", 'card-foreground': '#fff', "chart-1": "red" "##,
        );
        assert_eq!(
            pairs,
            vec![
                KvPair { key: "primary", value: "#112233" },
                KvPair { key: "card-foreground", value: "#fff" },
                KvPair { key: "chart-1", value: "red" },
            ]
        );
    }

    #[test]
    fn test_parse_pairs_rejects_camel_case_fragments() {
        let pairs = parse_pairs(r#"fontSans: "Inter", radius: "0.5rem""#);
        assert_eq!(pairs, vec![KvPair { key: "radius", value: "0.5rem" }]);
    }

    #[test]
    fn test_find_block_with_brace_in_value() {
        let text = r##"light: { primary: "#111", note: "a } b", accent: "#222" },
dark: { primary: "#333" }"##;
        let light = find_block(text, Mode::Light).unwrap();
        assert!(light.terminated);
        assert_eq!(light.pairs.len(), 3);
        assert_eq!(light.pairs[2], KvPair { key: "accent", value: "#222" });

        let dark = find_block(text, Mode::Dark).unwrap();
        assert_eq!(dark.pairs, vec![KvPair { key: "primary", value: "#333" }]);
    }

    #[test]
    fn test_find_block_requires_whole_word() {
        assert!(find_block(r#"highlight: { a: "b" }"#, Mode::Light).is_none());
        assert!(find_block(r#""light": { a: "b" }"#, Mode::Light).is_some());
    }

    #[test]
    fn test_find_label() {
        assert_eq!(find_label(r#"label: "Modern Minimal","#), Some("Modern Minimal"));
        assert_eq!(find_label("label: 'Notebook',"), Some("Notebook"));
        assert_eq!(find_label("styles: {}"), None);
    }

    #[test]
    fn test_entry_parse() {
        let text = r##"  sample: {
    label: "Sample",
    styles: {
      light: { primary: "#112233" },
    },
  },
"##;
        let entry = Entry::parse("sample", 0, text);
        assert_eq!(entry.label, Some("Sample"));
        assert_eq!(entry.light.unwrap().pairs.len(), 1);
        assert!(entry.dark.is_none());
    }

    #[test]
    fn test_parse_pairs_skips_commented_pairs() {
        let body = r##"
        primary: "#111111",
        // primary: "#ff0000",
        /* accent: "#00ff00", */
        accent: "#222222",
        "##;
        assert_eq!(
            parse_pairs(body),
            vec![
                KvPair { key: "primary", value: "#111111" },
                KvPair { key: "accent", value: "#222222" },
            ]
        );
    }

    #[test]
    fn test_comment_markers_inside_strings_are_text() {
        let pairs = parse_pairs(r#"font: "a // b", radius: "0.5rem""#);
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_entry_name_ending_in_light_is_not_a_block() {
        let text = r##"  "high-contrast-light": {
    label: "HC Light",
    styles: {
      light: { primary: "#111111" },
      dark: { primary: "#eeeeee" },
    },
  },
"##;
        let entry = Entry::parse("high-contrast-light", 0, text);
        let light = entry.light.unwrap();
        assert_eq!(light.pairs, vec![KvPair { key: "primary", value: "#111111" }]);
        assert_eq!(
            entry.dark.unwrap().pairs,
            vec![KvPair { key: "primary", value: "#eeeeee" }]
        );
    }

    #[test]
    fn test_entry_name_ending_in_dark_has_no_dark_block() {
        let text = r##"  "solar-dark": {
    label: "Solar Dark",
    styles: {
      light: { primary: "#222222" },
    },
  },
"##;
        let entry = Entry::parse("solar-dark", 0, text);
        assert_eq!(entry.label, Some("Solar Dark"));
        assert!(entry.dark.is_none());
        assert_eq!(entry.light.unwrap().pairs.len(), 1);
    }
}
