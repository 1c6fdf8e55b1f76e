/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      element.rs
 * Purpose:   The atomic grammar elements rules are composed of, plus
 *            the precedence-climbing expression element.
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

use crate::ast::{AstNode, LeafRole, ListRole};
use crate::error::PebbleError;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::stream::TokenStream;
use crate::parser::precedence::Precedence;
use crate::parser::rules::{RuleId, RuleSet};

/// One atomic step of a grammar rule.
///
/// Every element supports the same two operations:
/// - [`Element::matches`] is a non-consuming lookahead test, used by
///   alternation and repetition to choose a path before committing.
/// - [`Element::parse`] consumes exactly the tokens the element is
///   responsible for and appends its result nodes to the accumulator.
///
/// Callers are expected to `parse` only after a successful `matches`;
/// `parse` still re-validates and fails loudly on misuse rather than
/// silently skipping.
#[derive(Debug, Clone)]
pub enum Element {
    /// One number token, attached as a number-literal leaf.
    Number,

    /// One string token, attached as a string-literal leaf.
    StringLit,

    /// One identifier token not in the grammar's reserved-word set,
    /// attached as a name leaf.
    Identifier,

    /// One token whose text equals one of the candidate strings.
    /// With `keep` the token is attached as a plain leaf; without it
    /// the token is structurally required but discarded (punctuation,
    /// keywords).
    Literal { candidates: Vec<String>, keep: bool },

    /// Delegates to an embedded rule and appends its single node.
    SubRule(RuleId),

    /// Ordered alternation over candidate rules; the first whose
    /// lookahead matches wins, with no backtracking once chosen.
    Or(Vec<RuleId>),

    /// Applies the inner rule at most once. A non-match is a normal
    /// absent outcome, never an error.
    Optional(RuleId),

    /// Applies the inner rule as long as it matches. Produced lists
    /// with zero children are suppressed from the accumulator.
    Repeated(RuleId),

    /// A precedence-climbed chain of binary operators whose operands
    /// come from the `factor` rule and whose operators come from the
    /// grammar's operator table.
    Expression { factor: RuleId },
}

impl Element {
    /// Non-consuming lookahead: may peek, never advances the stream.
    pub fn matches(&self, rules: &RuleSet, src: &TokenStream) -> bool {
        match self {
            Element::Number => src.peek(0).is_number(),
            Element::StringLit => src.peek(0).is_string(),
            Element::Identifier => {
                let token = src.peek(0);
                token.is_identifier() && !rules.is_reserved(&token.lexeme)
            }
            Element::Literal { candidates, .. } => {
                let token = src.peek(0);
                token.is_identifier() && candidates.iter().any(|c| c == &token.lexeme)
            }
            Element::SubRule(id) => rules.matches(*id, src),
            Element::Or(candidates) => candidates.iter().any(|id| rules.matches(*id, src)),
            Element::Optional(id) | Element::Repeated(id) => rules.matches(*id, src),
            Element::Expression { factor } => rules.matches(*factor, src),
        }
    }

    /// Consumes this element's tokens and appends its nodes to `out`.
    pub fn parse(
        &self,
        rules: &RuleSet,
        src: &mut TokenStream,
        out: &mut Vec<AstNode>,
    ) -> Result<(), PebbleError> {
        match self {
            Element::Number => {
                if !self.matches(rules, src) {
                    return Err(unexpected("a number", src.peek(0)));
                }
                out.push(AstNode::leaf(LeafRole::Number, src.read()));
                Ok(())
            }
            Element::StringLit => {
                if !self.matches(rules, src) {
                    return Err(unexpected("a string", src.peek(0)));
                }
                out.push(AstNode::leaf(LeafRole::String, src.read()));
                Ok(())
            }
            Element::Identifier => {
                if !self.matches(rules, src) {
                    return Err(unexpected("an identifier", src.peek(0)));
                }
                out.push(AstNode::leaf(LeafRole::Name, src.read()));
                Ok(())
            }
            Element::Literal { candidates, keep } => {
                if !self.matches(rules, src) {
                    return Err(unexpected(&expected_literals(candidates), src.peek(0)));
                }
                let token = src.read();
                if *keep {
                    out.push(AstNode::leaf(LeafRole::Plain, token));
                }
                Ok(())
            }
            Element::SubRule(id) => {
                out.push(rules.parse(*id, src)?);
                Ok(())
            }
            Element::Or(candidates) => {
                // Same first-match selection as `matches`; exhaustion
                // here means the caller committed without a lookahead.
                match candidates.iter().find(|id| rules.matches(**id, src)) {
                    Some(id) => {
                        out.push(rules.parse(*id, src)?);
                        Ok(())
                    }
                    None => {
                        let token = src.peek(0);
                        Err(PebbleError::parse_error(
                            format!("unexpected {}", describe(token)),
                            token.span,
                        ))
                    }
                }
            }
            Element::Optional(id) => {
                if rules.matches(*id, src) {
                    let node = rules.parse(*id, src)?;
                    push_unless_empty(out, node);
                }
                Ok(())
            }
            Element::Repeated(id) => {
                while rules.matches(*id, src) {
                    let node = rules.parse(*id, src)?;
                    push_unless_empty(out, node);
                }
                Ok(())
            }
            Element::Expression { factor } => {
                out.push(parse_expression(rules, *factor, src)?);
                Ok(())
            }
        }
    }
}

/// An empty list is an absent optional slot, not a child.
fn push_unless_empty(out: &mut Vec<AstNode>, node: AstNode) {
    match &node {
        AstNode::List { children, .. } if children.is_empty() => {}
        _ => out.push(node),
    }
}

/// Parses `factor (OP factor)*` into a correctly nested tree of binary
/// nodes by precedence climbing: each operator is shifted, and pending
/// operators that bind tighter are absorbed into its right operand
/// before the node is folded. Runs in one left-to-right pass.
fn parse_expression(
    rules: &RuleSet,
    factor: RuleId,
    src: &mut TokenStream,
) -> Result<AstNode, PebbleError> {
    let mut right = rules.parse(factor, src)?;
    while let Some(precedence) = next_operator(rules, src) {
        right = do_shift(rules, factor, src, right, precedence)?;
    }
    Ok(right)
}

/// Consumes one operator and its right operand, absorbing any
/// tighter-binding operators that follow, then folds
/// `[left, operator, right]` into one binary node.
fn do_shift(
    rules: &RuleSet,
    factor: RuleId,
    src: &mut TokenStream,
    left: AstNode,
    precedence: Precedence,
) -> Result<AstNode, PebbleError> {
    let operator = AstNode::leaf(LeafRole::Plain, src.read());
    let mut right = rules.parse(factor, src)?;

    while let Some(next) = next_operator(rules, src) {
        if !next.continues_rhs(&precedence) {
            break;
        }
        right = do_shift(rules, factor, src, right, next)?;
    }

    Ok(AstNode::list(ListRole::Binary, vec![left, operator, right]))
}

/// The precedence of the next token, when it is a registered operator.
fn next_operator(rules: &RuleSet, src: &TokenStream) -> Option<Precedence> {
    let token = src.peek(0);
    if token.kind != TokenKind::Identifier {
        return None;
    }
    rules.operators().get(&token.lexeme)
}

fn unexpected(expected: &str, found: &Token) -> PebbleError {
    PebbleError::parse_error(
        format!("expected {}, found {}", expected, describe(found)),
        found.span,
    )
}

fn describe(token: &Token) -> String {
    if token.is_eof() {
        "end of input".to_string()
    } else if token.lexeme == "\n" {
        "end of line".to_string()
    } else {
        format!("'{}'", token.lexeme)
    }
}

fn expected_literals(candidates: &[String]) -> String {
    let names: Vec<String> = candidates
        .iter()
        .map(|text| {
            if text == "\n" {
                "end of line".to_string()
            } else {
                format!("'{}'", text)
            }
        })
        .collect();
    names.join(" or ")
}
