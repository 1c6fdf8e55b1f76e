/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pebble-lang.dev
 * Github:   https://github.com/samwilcox/pebble
 *
 * License:
 * This file is part of the Pebble scripting language project.
 *
 * Pebble is dual-licensed under the terms of:
 *   - The MIT license
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

#[derive(Debug, Clone)]
pub struct PebbleError {
    /// Stable error code (E_LEX, E_PARSE)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl PebbleError {
    /// Generic constructor
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Lexical error (input text no token pattern matches)
    pub fn lex_error(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new("E_LEX", message, span)
    }

    /// Parse error (a required rule or element did not match)
    pub fn parse_error(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::new("E_PARSE", message, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
