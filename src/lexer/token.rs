/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types consumed by the Pebble
 *            parsing engine.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The category of a lexical token.
///
/// Pebble deliberately keeps the set small: keywords, operators,
/// punctuation, and the end-of-line marker all lex as `Identifier`
/// tokens carrying their literal text. The grammar decides which
/// identifiers are reserved, which are operators, and which name
/// variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A numeric literal, e.g. `42`.
    Number,

    /// A quoted string literal. The lexeme holds the decoded value,
    /// without the surrounding quotes.
    String,

    /// Everything else: names, keywords, operators, punctuation, and
    /// the end-of-line marker (lexeme `"\n"`).
    Identifier,

    /// End-of-input sentinel, always the final token of a stream.
    Eof,
}

/// A single classified unit of source code.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The token's text. For strings this is the decoded value; for
    /// everything else it is the source text verbatim.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The end-of-input sentinel for the given line.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(line, 0))
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, so error messages show what the
    /// user actually wrote rather than internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
