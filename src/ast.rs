/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      ast.rs
 * Purpose:   The abstract syntax tree produced by the parsing engine.
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

use crate::lexer::token::Token;
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The role of a leaf node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeafRole {
    /// A structurally meaningful token kept verbatim, e.g. an operator
    /// consumed inside a binary expression.
    Plain,

    /// A numeric literal.
    Number,

    /// A string literal.
    String,

    /// A variable or function name.
    Name,
}

/// The role of a list node. Child positions are fixed by the grammar
/// rule that built the node; the typed accessors below document them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListRole {
    /// An anonymous sequence with no dedicated accessors.
    Generic,

    /// `[left, operator, right]`
    Binary,

    /// `[operand]`
    Negation,

    /// Zero or more statements in source order.
    Block,

    /// `[condition, then-block]` or `[condition, then-block, else-block]`
    If,

    /// `[condition, body]`
    While,

    /// The empty statement; never has children.
    Empty,
}

/// A node of the abstract syntax tree.
///
/// Exactly two shapes exist: a `Leaf` wraps one token and has no
/// children, a `List` holds an ordered sequence of child nodes. Both
/// are tagged with a role so downstream stages can dispatch without an
/// open class hierarchy. Nodes are immutable once built: the parser
/// creates them bottom-up and immediately attaches them to a parent or
/// returns them to the caller.
///
/// The typed accessors (`left`, `condition`, ...) assume the child
/// layout documented on [`ListRole`]. Calling one on the wrong shape
/// is a programmer error and panics; it is not a recoverable runtime
/// state.
#[derive(Debug, Clone, Serialize)]
pub enum AstNode {
    Leaf { role: LeafRole, token: Token },
    List { role: ListRole, children: Vec<AstNode> },
}

impl AstNode {
    pub fn leaf(role: LeafRole, token: Token) -> Self {
        AstNode::Leaf { role, token }
    }

    pub fn list(role: ListRole, children: Vec<AstNode>) -> Self {
        AstNode::List { role, children }
    }

    /// The `i`-th child. Panics when out of range or on a leaf.
    pub fn child(&self, i: usize) -> &AstNode {
        match self {
            AstNode::List { children, .. } if i < children.len() => &children[i],
            AstNode::List { children, .. } => {
                panic!("child index {} out of range ({} children)", i, children.len())
            }
            AstNode::Leaf { .. } => panic!("child({}) called on a leaf node", i),
        }
    }

    pub fn num_children(&self) -> usize {
        match self {
            AstNode::Leaf { .. } => 0,
            AstNode::List { children, .. } => children.len(),
        }
    }

    /// The children in order; empty for leaves.
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::Leaf { .. } => &[],
            AstNode::List { children, .. } => children,
        }
    }

    /// The source location of this node: a leaf's own token, or the
    /// first child of a list that has one.
    pub fn location(&self) -> Option<Span> {
        match self {
            AstNode::Leaf { token, .. } => Some(token.span),
            AstNode::List { children, .. } => {
                children.iter().find_map(|child| child.location())
            }
        }
    }

    /// The wrapped token of a leaf node.
    pub fn token(&self) -> &Token {
        match self {
            AstNode::Leaf { token, .. } => token,
            AstNode::List { .. } => panic!("token() called on a list node"),
        }
    }

    /// The numeric value of a number literal.
    pub fn number_value(&self) -> f64 {
        match self {
            AstNode::Leaf { role: LeafRole::Number, token } => token
                .lexeme
                .parse()
                .expect("number leaf carries a numeric lexeme"),
            _ => panic!("number_value() called on a non-number node"),
        }
    }

    /// The decoded text of a string literal.
    pub fn string_value(&self) -> &str {
        match self {
            AstNode::Leaf { role: LeafRole::String, token } => &token.lexeme,
            _ => panic!("string_value() called on a non-string node"),
        }
    }

    /// The identifier text of a name node.
    pub fn name(&self) -> &str {
        match self {
            AstNode::Leaf { role: LeafRole::Name, token } => &token.lexeme,
            _ => panic!("name() called on a non-name node"),
        }
    }

    /// The left operand of a binary expression.
    pub fn left(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::Binary, children } => &children[0],
            _ => panic!("left() called on a non-binary node"),
        }
    }

    /// The operator text of a binary expression.
    pub fn operator(&self) -> &str {
        match self {
            AstNode::List { role: ListRole::Binary, children } => &children[1].token().lexeme,
            _ => panic!("operator() called on a non-binary node"),
        }
    }

    /// The right operand of a binary expression.
    pub fn right(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::Binary, children } => &children[2],
            _ => panic!("right() called on a non-binary node"),
        }
    }

    /// The operand of a negation expression.
    pub fn operand(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::Negation, children } => &children[0],
            _ => panic!("operand() called on a non-negation node"),
        }
    }

    /// The statements of a block, in source order.
    pub fn statements(&self) -> &[AstNode] {
        match self {
            AstNode::List { role: ListRole::Block, children } => children,
            _ => panic!("statements() called on a non-block node"),
        }
    }

    /// The condition of an `if` or `while` statement.
    pub fn condition(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::If, children }
            | AstNode::List { role: ListRole::While, children } => &children[0],
            _ => panic!("condition() called on a non-conditional node"),
        }
    }

    /// The then-branch of an `if` statement.
    pub fn then_block(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::If, children } => &children[1],
            _ => panic!("then_block() called on a non-if node"),
        }
    }

    /// The else-branch of an `if` statement, absent when the source
    /// carried none.
    pub fn else_block(&self) -> Option<&AstNode> {
        match self {
            AstNode::List { role: ListRole::If, children } => children.get(2),
            _ => panic!("else_block() called on a non-if node"),
        }
    }

    /// The body of a `while` statement.
    pub fn body(&self) -> &AstNode {
        match self {
            AstNode::List { role: ListRole::While, children } => &children[1],
            _ => panic!("body() called on a non-while node"),
        }
    }
}

impl fmt::Display for AstNode {
    /// Renders the tree in a compact bracketed form, e.g.
    /// `(if x ((a = 1)) else ((b = 2)))`. Useful for tests and debug
    /// output; not meant to round-trip source text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Leaf { token, .. } => write!(f, "{}", token),
            AstNode::List { role: ListRole::Negation, children } => {
                write!(f, "-{}", children[0])
            }
            AstNode::List { role: ListRole::If, children } => {
                write!(f, "(if {} {}", children[0], children[1])?;
                if let Some(els) = children.get(2) {
                    write!(f, " else {}", els)?;
                }
                write!(f, ")")
            }
            AstNode::List { role: ListRole::While, children } => {
                write!(f, "(while {} {})", children[0], children[1])
            }
            AstNode::List { children, .. } => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;

    fn name(text: &str, line: usize) -> AstNode {
        AstNode::leaf(
            LeafRole::Name,
            Token::new(TokenKind::Identifier, text, Span::new(line, 0)),
        )
    }

    fn number(text: &str) -> AstNode {
        AstNode::leaf(
            LeafRole::Number,
            Token::new(TokenKind::Number, text, Span::new(1, 0)),
        )
    }

    fn plain(text: &str) -> AstNode {
        AstNode::leaf(
            LeafRole::Plain,
            Token::new(TokenKind::Identifier, text, Span::new(1, 0)),
        )
    }

    #[test]
    fn leaf_accessors() {
        assert_eq!(number("42").number_value(), 42.0);
        assert_eq!(name("x", 1).name(), "x");

        let s = AstNode::leaf(
            LeafRole::String,
            Token::new(TokenKind::String, "hello", Span::new(1, 0)),
        );
        assert_eq!(s.string_value(), "hello");
        assert_eq!(s.num_children(), 0);
        assert!(s.children().is_empty());
    }

    #[test]
    fn binary_accessors_use_fixed_child_positions() {
        let node = AstNode::list(
            ListRole::Binary,
            vec![name("a", 1), plain("+"), number("1")],
        );
        assert_eq!(node.left().name(), "a");
        assert_eq!(node.operator(), "+");
        assert_eq!(node.right().number_value(), 1.0);
        assert_eq!(node.num_children(), 3);
    }

    #[test]
    fn missing_else_reports_absent() {
        let without = AstNode::list(
            ListRole::If,
            vec![name("c", 1), AstNode::list(ListRole::Block, vec![name("y", 1)])],
        );
        assert!(without.else_block().is_none());

        let with = AstNode::list(
            ListRole::If,
            vec![
                name("c", 1),
                AstNode::list(ListRole::Block, vec![name("y", 1)]),
                AstNode::list(ListRole::Block, vec![name("z", 1)]),
            ],
        );
        assert!(with.else_block().is_some());
    }

    #[test]
    fn location_comes_from_the_first_located_child() {
        let node = AstNode::list(
            ListRole::Block,
            vec![AstNode::list(ListRole::Empty, Vec::new()), name("a", 7)],
        );
        assert_eq!(node.location().map(|s| s.line), Some(7));
        assert!(AstNode::list(ListRole::Empty, Vec::new()).location().is_none());
    }

    #[test]
    fn display_renders_bracketed_trees() {
        let sum = AstNode::list(
            ListRole::Binary,
            vec![name("a", 1), plain("+"), number("1")],
        );
        assert_eq!(sum.to_string(), "(a + 1)");

        let neg = AstNode::list(ListRole::Negation, vec![name("x", 1)]);
        assert_eq!(neg.to_string(), "-x");

        assert_eq!(AstNode::list(ListRole::Empty, Vec::new()).to_string(), "()");
    }

    #[test]
    fn serializes_with_role_tags() {
        let node = AstNode::list(ListRole::Binary, vec![name("a", 1), plain("="), number("2")]);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["List"]["role"], "Binary");
        assert_eq!(value["List"]["children"][0]["Leaf"]["role"], "Name");
        assert_eq!(
            value["List"]["children"][0]["Leaf"]["token"]["lexeme"],
            "a"
        );
    }

    #[test]
    #[should_panic(expected = "non-binary")]
    fn wrong_shape_accessor_is_a_programmer_error() {
        name("x", 1).left();
    }
}
