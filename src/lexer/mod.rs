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

/// Token model:
/// - token kinds (number / string / identifier / end-of-input)
/// - lexeme + source span carried by every token
pub mod token;

/// The regex-driven line scanner that produces the token stream.
pub mod lexer;

/// Cursor over scanned tokens: the read / peek boundary the parsing
/// engine consumes.
pub mod stream;

pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};

use crate::error::PebbleError;

/// Scans `source` into its full token list, including the per-line
/// end-of-line markers and the final end-of-input sentinel.
pub fn tokenize(source: &str) -> Result<Vec<Token>, PebbleError> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens()?;
    Ok(lexer.tokens)
}
