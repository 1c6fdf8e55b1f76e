/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root for the Pebble parsing engine.
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

//! Pebble is a tiny imperative scripting language; this crate is its
//! front end. The lexer scans source text into tokens, and a small
//! library of parser combinators (rules built from grammar elements,
//! with precedence climbing for binary operators) turns those tokens
//! into an abstract syntax tree.
//!
//! ```
//! let nodes = pebble::parse("a = 1 + 2 * 3").unwrap();
//! assert_eq!(nodes[0].to_string(), "(a = (1 + (2 * 3)))");
//! ```

/// The abstract syntax tree: leaf and list nodes tagged by role.
pub mod ast;

/// Compiler-style diagnostic rendering for Pebble errors.
pub mod diagnostics;

/// The crate-wide error type.
pub mod error;

/// Lexical analysis: tokens, the scanner, and the token stream.
pub mod lexer;

/// The combinator engine and the concrete Pebble grammar.
pub mod parser;

/// Source locations.
pub mod span;

pub use ast::{AstNode, LeafRole, ListRole};
pub use diagnostics::DiagnosticPrinter;
pub use error::PebbleError;
pub use lexer::{tokenize, Token, TokenKind, TokenStream};
pub use parser::{parse, Grammar};
pub use span::Span;
