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

use serde::Serialize;
use std::fmt;

/// A source location attached to tokens, AST nodes, and errors.
///
/// Lines are 1-based, columns are 0-based; the diagnostic printer adds
/// one to the column when rendering for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// The 1-based source line.
    pub line: usize,

    /// The 0-based column of the first character.
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
