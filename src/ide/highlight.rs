//! # Syntax Highlighter
//!
//! A best-effort regex colorizer for the canned snippets. It runs five passes
//! in a fixed order:
//!
//! 1. comments
//! 2. strings
//! 3. keywords
//! 4. numbers
//! 5. identifiers followed by `(` (function calls)
//!
//! Each pass only scans text that no earlier pass has claimed, so a keyword
//! inside a string literal, or a string inside a comment, keeps the colour of
//! the outer token.

use anyhow::{Context, Result};
use regex::Regex;

use super::panel::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Number,
    Function,
}

/// A run of text with at most one token kind. `None` is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: Option<TokenKind>,
    pub text: String,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        Self {
            kind: None,
            text: text.to_string(),
        }
    }
}

const COMMENT_PATTERN: &str = r"(?m)#.*$|//.*$|/\*[\s\S]*?\*/";
// CSS has no line comments, and `#` starts hex colours and id selectors
const CSS_COMMENT_PATTERN: &str = r"/\*[\s\S]*?\*/";
const STRING_PATTERN: &str = r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\.)*`"#;
const KEYWORD_PATTERN: &str = r"\b(?:import|from|def|class|if|else|elif|for|while|return|const|let|var|function|async|await|try|catch|export|default)\b";
const NUMBER_PATTERN: &str = r"\b\d+\.?\d*\b";
const FUNCTION_PATTERN: &str = r"\b([a-zA-Z_][a-zA-Z0-9_]*)\s*\(";

pub struct Highlighter {
    comment: Regex,
    css_comment: Regex,
    string: Regex,
    keyword: Regex,
    number: Regex,
    function: Regex,
}

impl Highlighter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            comment: Regex::new(COMMENT_PATTERN).context("Failed to compile comment pattern")?,
            css_comment: Regex::new(CSS_COMMENT_PATTERN)
                .context("Failed to compile CSS comment pattern")?,
            string: Regex::new(STRING_PATTERN).context("Failed to compile string pattern")?,
            keyword: Regex::new(KEYWORD_PATTERN).context("Failed to compile keyword pattern")?,
            number: Regex::new(NUMBER_PATTERN).context("Failed to compile number pattern")?,
            function: Regex::new(FUNCTION_PATTERN)
                .context("Failed to compile function pattern")?,
        })
    }

    pub fn highlight(&self, code: &str, language: Language) -> Vec<HighlightSpan> {
        let comment = match language {
            Language::Css => &self.css_comment,
            _ => &self.comment,
        };

        let spans = vec![HighlightSpan::plain(code)];
        let spans = claim(spans, comment, TokenKind::Comment, 0);
        let spans = claim(spans, &self.string, TokenKind::String, 0);
        let spans = claim(spans, &self.keyword, TokenKind::Keyword, 0);
        let spans = claim(spans, &self.number, TokenKind::Number, 0);
        claim(spans, &self.function, TokenKind::Function, 1)
    }
}

/// Split unclaimed spans around every match of `re` (capture `group`).
/// Spans that already carry a kind pass through untouched.
fn claim(spans: Vec<HighlightSpan>, re: &Regex, kind: TokenKind, group: usize) -> Vec<HighlightSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind.is_some() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut last = 0;
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(group) else {
                continue;
            };
            if m.is_empty() {
                continue;
            }
            if m.start() > last {
                out.push(HighlightSpan::plain(&text[last..m.start()]));
            }
            out.push(HighlightSpan {
                kind: Some(kind),
                text: m.as_str().to_string(),
            });
            last = m.end();
        }
        if last < text.len() {
            out.push(HighlightSpan::plain(&text[last..]));
        }
    }
    out
}

/// Break a span stream into display lines. Spans crossing a newline (block
/// comments, template strings) are cut and keep their kind on every line.
pub fn split_lines(spans: &[HighlightSpan]) -> Vec<Vec<HighlightSpan>> {
    let mut lines = vec![Vec::new()];
    for span in spans {
        for (i, piece) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if piece.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                line.push(HighlightSpan {
                    kind: span.kind,
                    text: piece.to_string(),
                });
            }
        }
    }
    lines
}
