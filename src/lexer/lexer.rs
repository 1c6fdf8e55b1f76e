/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Turns raw Pebble source text into the token stream the
 *            parsing engine consumes.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pebble-lang.dev
 * Github:    https://github.com/samwilcox/pebble
 *
 * License:
 * This file is part of the Pebble scripting language project.
 *
 * Pebble is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use regex::Regex;

use crate::error::PebbleError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// One alternation per token class, tried in order at every scan
/// position: line comment, number, string, then identifier-or-symbol.
/// The final branch accepts any single non-space character except `"`,
/// so a lone quote (an unterminated string) fails the whole pattern.
const TOKEN_PATTERN: &str = r#"^\s*(?:(?P<comment>//.*)|(?P<number>\d+)|(?P<string>"(?:\\.|[^"\\])*")|(?P<ident>[A-Za-z_][A-Za-z0-9_]*|==|<=|>=|&&|\|\||[^\s"]))"#;

/// The Pebble lexer.
///
/// Scans the source line by line. Every line is reduced to tokens by
/// repeatedly matching [`TOKEN_PATTERN`] at the current position, and
/// is terminated by an end-of-line `Identifier` token (lexeme `"\n"`),
/// which the grammar treats as a statement separator. A final
/// `TokenKind::Eof` sentinel closes the stream.
pub struct Lexer {
    lines: Vec<String>,
    pattern: Regex,
    line: usize,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer over `source`.
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(String::from).collect(),
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern compiles"),
            line: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs the complete scan, filling `self.tokens`.
    ///
    /// Call exactly once per lexer instance. Stops at the first
    /// piece of input no token pattern matches.
    pub fn scan_tokens(&mut self) -> Result<(), PebbleError> {
        for index in 0..self.lines.len() {
            self.line = index + 1;
            self.scan_line(index)?;

            let column = self.lines[index].len();
            self.tokens.push(Token::new(
                TokenKind::Identifier,
                "\n",
                Span::new(self.line, column),
            ));
        }

        self.tokens.push(Token::eof(self.line.max(1)));
        Ok(())
    }

    /// Scans one source line into tokens.
    fn scan_line(&mut self, index: usize) -> Result<(), PebbleError> {
        let mut pos = 0;

        while pos < self.lines[index].len() {
            let rest = &self.lines[index][pos..];

            let caps = match self.pattern.captures(rest) {
                Some(caps) => caps,
                None => {
                    // Only trailing whitespace left on the line.
                    if rest.trim().is_empty() {
                        break;
                    }
                    let column = pos + (rest.len() - rest.trim_start().len());
                    return Err(self.unrecognized(rest, column));
                }
            };

            if let Some(m) = caps.name("number") {
                let span = Span::new(self.line, pos + m.start());
                self.tokens
                    .push(Token::new(TokenKind::Number, m.as_str(), span));
            } else if let Some(m) = caps.name("string") {
                let span = Span::new(self.line, pos + m.start());
                let value = decode_string(m.as_str());
                self.tokens.push(Token::new(TokenKind::String, value, span));
            } else if let Some(m) = caps.name("ident") {
                let span = Span::new(self.line, pos + m.start());
                self.tokens
                    .push(Token::new(TokenKind::Identifier, m.as_str(), span));
            }
            // A comment match consumes the rest of the line and emits nothing.

            pos += caps
                .get(0)
                .map(|whole| whole.end())
                .unwrap_or(rest.len());
        }

        Ok(())
    }

    fn unrecognized(&self, rest: &str, column: usize) -> PebbleError {
        let span = Span::new(self.line, column);
        if rest.trim_start().starts_with('"') {
            PebbleError::lex_error("unterminated string literal", span)
                .with_help("close the string with '\"'")
        } else {
            PebbleError::lex_error("unrecognized token", span)
        }
    }
}

/// Strips the surrounding quotes and decodes `\"`, `\\` and `\n`
/// escapes. Any other escaped character is kept as itself.
fn decode_string(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    #[test]
    fn classifies_core_token_kinds() {
        let tokens = tokenize("x = 42 + \"hi\"").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::String,
                TokenKind::Identifier, // end of line
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[4].lexeme, "hi");
    }

    #[test]
    fn multi_char_operators_lex_as_one_token() {
        assert_eq!(lexemes("a == b"), vec!["a", "==", "b", "\n", ""]);
        assert_eq!(lexemes("a <= b"), vec!["a", "<=", "b", "\n", ""]);
    }

    #[test]
    fn single_char_operators_fall_through() {
        assert_eq!(lexemes("a = b"), vec!["a", "=", "b", "\n", ""]);
        assert_eq!(lexemes("a / 2"), vec!["a", "/", "2", "\n", ""]);
    }

    #[test]
    fn every_line_ends_with_an_eol_token() {
        assert_eq!(lexemes("a\nb"), vec!["a", "\n", "b", "\n", ""]);
    }

    #[test]
    fn tracks_line_numbers() {
        let tokens = tokenize("a\n\nb").unwrap();
        let b = tokens.iter().find(|t| t.lexeme == "b").unwrap();
        assert_eq!(b.span.line, 3);
    }

    #[test]
    fn tracks_columns() {
        let tokens = tokenize("if x").unwrap();
        assert_eq!(tokens[0].span.column, 0);
        assert_eq!(tokens[1].span.column, 3);
    }

    #[test]
    fn comments_produce_no_tokens() {
        assert_eq!(lexemes("a // the rest is noise"), vec!["a", "\n", ""]);
    }

    #[test]
    fn string_escapes_are_decoded() {
        let tokens = tokenize(r#""a\nb\"c""#).unwrap();
        assert_eq!(tokens[0].lexeme, "a\nb\"c");
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        let err = tokenize("x = \"abc").unwrap_err();
        assert_eq!(err.code, "E_LEX");
        assert_eq!(err.span.line, 1);
        assert_eq!(err.span.column, 4);
        assert!(err.help.is_some());
    }

    #[test]
    fn empty_source_is_just_the_sentinel() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }
}
