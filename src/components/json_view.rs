//! Syntax-highlighted JSON rendering for the response panel.
//!
//! The body is pretty-printed once and split into colorable spans by a small
//! tokenizer. The tokenizer only has to handle serializer output, so strings
//! are always well-formed and escapes are backslash pairs.

use leptos::prelude::*;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An object key (a string followed by `:`).
    Key,
    Str,
    Number,
    /// `true`, `false`, `null`.
    Keyword,
    /// Structural characters and whitespace runs.
    Punct,
}

impl TokenKind {
    fn class(self) -> &'static str {
        match self {
            TokenKind::Key => "text-sky-300",
            TokenKind::Str => "text-amber-300",
            TokenKind::Number => "text-emerald-300",
            TokenKind::Keyword => "text-blue-400",
            TokenKind::Punct => "text-gray-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSpan {
    pub kind: TokenKind,
    pub text: String,
}

/// Split pretty-printed JSON into colorable spans. Concatenating the span
/// texts reproduces the input exactly.
pub fn tokenize(pretty: &str) -> Vec<JsonSpan> {
    let mut spans: Vec<JsonSpan> = Vec::new();
    let mut punct = String::new();
    let mut rest = pretty;

    while let Some(c) = rest.chars().next() {
        if c == '"' {
            let (token, after) = scan_string(rest);
            let kind = if after.trim_start().starts_with(':') {
                TokenKind::Key
            } else {
                TokenKind::Str
            };
            flush_punct(&mut spans, &mut punct);
            spans.push(JsonSpan {
                kind,
                text: token.to_string(),
            });
            rest = after;
        } else if c == '-' || c.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !matches!(ch, '0'..='9' | '-' | '+' | '.' | 'e' | 'E'))
                .unwrap_or(rest.len());
            flush_punct(&mut spans, &mut punct);
            spans.push(JsonSpan {
                kind: TokenKind::Number,
                text: rest[..end].to_string(),
            });
            rest = &rest[end..];
        } else if let Some(after) = strip_keyword(rest) {
            let taken = rest.len() - after.len();
            flush_punct(&mut spans, &mut punct);
            spans.push(JsonSpan {
                kind: TokenKind::Keyword,
                text: rest[..taken].to_string(),
            });
            rest = after;
        } else {
            punct.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    flush_punct(&mut spans, &mut punct);
    spans
}

fn strip_keyword(s: &str) -> Option<&str> {
    for keyword in ["true", "false", "null"] {
        if let Some(after) = s.strip_prefix(keyword) {
            return Some(after);
        }
    }
    None
}

/// `s` starts with `"`. Returns the string token (quotes included) and the
/// remainder. Serializer output always closes its strings.
fn scan_string(s: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return s.split_at(i + 1),
            _ => {}
        }
    }
    (s, "")
}

fn flush_punct(spans: &mut Vec<JsonSpan>, punct: &mut String) {
    if !punct.is_empty() {
        spans.push(JsonSpan {
            kind: TokenKind::Punct,
            text: std::mem::take(punct),
        });
    }
}

#[component]
pub fn JsonView(value: Value) -> impl IntoView {
    let pretty = serde_json::to_string_pretty(&value).unwrap_or_default();
    let spans = tokenize(&pretty);

    view! {
        <pre class="m-0 p-4 text-xs leading-relaxed font-mono bg-[#1e1e1e] max-h-96 overflow-y-auto">
            <code>
                {spans
                    .into_iter()
                    .map(|span| {
                        let class = span.kind.class();
                        view! { <span class=class>{span.text}</span> }
                    })
                    .collect_view()}
            </code>
        </pre>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kinds(spans: &[JsonSpan]) -> Vec<TokenKind> {
        spans.iter().map(|s| s.kind).collect()
    }

    fn rejoin(spans: &[JsonSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_keys_and_string_values_are_distinguished() {
        let spans = tokenize(r#"{"title": "One Piece"}"#);
        assert_eq!(
            kinds(&spans),
            vec![
                TokenKind::Punct,
                TokenKind::Key,
                TokenKind::Punct,
                TokenKind::Str,
                TokenKind::Punct,
            ]
        );
        assert_eq!(spans[1].text, r#""title""#);
        assert_eq!(spans[3].text, r#""One Piece""#);
    }

    #[test]
    fn test_numbers_and_keywords() {
        let spans = tokenize(r#"{"rating": 9.1, "ongoing": true, "ended": null}"#);
        let numbers: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == TokenKind::Number)
            .collect();
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].text, "9.1");

        let keywords: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == TokenKind::Keyword)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(keywords, vec!["true", "null"]);
    }

    #[test]
    fn test_negative_and_exponent_numbers() {
        let spans = tokenize("[-1, 2.5e10]");
        let numbers: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == TokenKind::Number)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(numbers, vec!["-1", "2.5e10"]);
    }

    #[test]
    fn test_escaped_quotes_stay_inside_the_string() {
        let spans = tokenize(r#"{"q": "say \"hi\""}"#);
        let strings: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == TokenKind::Str)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(strings, vec![r#""say \"hi\"""#]);
    }

    #[test]
    fn test_spans_rejoin_to_the_input() {
        let pretty = serde_json::to_string_pretty(&json!({
            "status": "success",
            "data": {
                "title": "Jujutsu Kaisen",
                "rating": 8.8,
                "episodes": [1, 2, 3],
                "finished": false
            }
        }))
        .unwrap();
        let spans = tokenize(&pretty);
        assert_eq!(rejoin(&spans), pretty);
    }

    #[test]
    fn test_key_detection_survives_pretty_printed_newlines() {
        let pretty = "{\n  \"a\"\n    : 1\n}";
        let spans = tokenize(pretty);
        assert_eq!(spans[1].kind, TokenKind::Key);
    }
}
