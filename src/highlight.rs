//! Terminal syntax highlighting for generated script code.
//!
//! A single-pass regex tokenizer; enough for the fixed shapes the emitter
//! produces, not a general-purpose script lexer.
use colored::{ColoredString, Colorize};
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    String,
    Number,
    Keyword,
    Literal,
    Builtin,
    Plain,
}

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"(?P<comment>//[^\n]*)"#,
        r#"|(?P<string>"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#,
        r#"|(?P<number>\b\d+(?:\.\d+)?(?:e[+-]?\d+)?\b)"#,
        r#"|(?P<keyword>\b(?:let|const|var|function|return|if|else|new|typeof)\b)"#,
        r#"|(?P<literal>\b(?:true|false|null|undefined|Infinity|NaN)\b)"#,
        r#"|(?P<builtin>\b(?:window|Date|obj)\b)"#,
    ))
    .expect("static highlight regex")
});

const GROUPS: &[(&str, TokenKind)] = &[
    ("comment", TokenKind::Comment),
    ("string", TokenKind::String),
    ("number", TokenKind::Number),
    ("keyword", TokenKind::Keyword),
    ("literal", TokenKind::Literal),
    ("builtin", TokenKind::Builtin),
];

/// Splits `code` into classified spans covering every byte, in order.
pub fn tokenize(code: &str) -> Vec<(TokenKind, &str)> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in TOKEN.captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > cursor {
            out.push((TokenKind::Plain, &code[cursor..whole.start()]));
        }
        let kind = GROUPS
            .iter()
            .find(|(name, _)| caps.name(name).is_some())
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::Plain);
        out.push((kind, whole.as_str()));
        cursor = whole.end();
    }
    if cursor < code.len() {
        out.push((TokenKind::Plain, &code[cursor..]));
    }
    out
}

fn paint(kind: TokenKind, text: &str) -> ColoredString {
    match kind {
        TokenKind::Comment => text.bright_black().italic(),
        TokenKind::String => text.green(),
        TokenKind::Number | TokenKind::Literal => text.yellow(),
        TokenKind::Keyword => text.magenta(),
        TokenKind::Builtin => text.cyan(),
        TokenKind::Plain => text.normal(),
    }
}

/// `code` with ANSI colors; respects `colored`'s global override.
pub fn highlight(code: &str) -> String {
    tokenize(code)
        .into_iter()
        .map(|(kind, text)| paint(kind, text).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(code: &str) -> Vec<(TokenKind, &str)> {
        tokenize(code)
            .into_iter()
            .filter(|(k, _)| *k != TokenKind::Plain)
            .collect()
    }

    #[test]
    fn spans_cover_input() {
        let code = crate::generate(crate::example::EXAMPLE_CONFIG);
        let code = code.code().unwrap();
        let joined: String = tokenize(code).into_iter().map(|(_, t)| t).collect();
        assert_eq!(joined, code);
    }

    #[test]
    fn declaration_tokens() {
        assert_eq!(
            kinds(r#"let a = 5, b = "x;y", c = true;"#),
            [
                (TokenKind::Keyword, "let"),
                (TokenKind::Number, "5"),
                (TokenKind::String, r#""x;y""#),
                (TokenKind::Literal, "true"),
            ]
        );
    }

    #[test]
    fn comments_and_builtins() {
        assert_eq!(kinds("// No fields found"), [(TokenKind::Comment, "// No fields found")]);
        assert_eq!(
            kinds("window.addEventListener('onWidgetLoad', function (obj) {"),
            [
                (TokenKind::Builtin, "window"),
                (TokenKind::String, "'onWidgetLoad'"),
                (TokenKind::Keyword, "function"),
                (TokenKind::Builtin, "obj"),
            ]
        );
    }

    #[test]
    fn identifiers_with_digits_are_plain() {
        assert!(kinds("let size2 = x1;").iter().all(|(k, _)| *k == TokenKind::Keyword));
    }
}
