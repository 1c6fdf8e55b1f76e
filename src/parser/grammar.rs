/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      grammar.rs
 * Purpose:   The concrete Pebble grammar: statements, blocks and
 *            expressions wired out of the combinator engine.
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

use crate::ast::{AstNode, ListRole};
use crate::error::PebbleError;
use crate::lexer::stream::TokenStream;
use crate::lexer::tokenize;
use crate::parser::precedence::Precedence;
use crate::parser::rules::{RuleBuilder, RuleId, RuleSet};

/// The Pebble grammar.
///
/// ```text
/// primary    : "(" expr ")" | NUMBER | IDENTIFIER | STRING
/// factor     : "-" primary | primary
/// expr       : factor { OP factor }          (precedence climbing)
/// block      : "{" [ statement ] { (";" | EOL) [ statement ] } "}"
/// simple     : expr
/// statement  : "if" "(" expr ")" block [ "else" block ]
///            | "while" "(" expr ")" block
///            | simple
/// program    : [ statement ] (";" | EOL)
/// ```
///
/// This is the only place tied to Pebble's concrete syntax: it owns
/// the reserved-word set and the operator table, and everything else
/// is combinator wiring. A constructed grammar is read-only and can be
/// reused for any number of sequential parses.
pub struct Grammar {
    rules: RuleSet,
    program: RuleId,
    expr: RuleId,
    block: RuleId,
}

impl Grammar {
    pub fn new() -> Self {
        let mut rules = RuleSet::new();

        // Statement terminators and the closing delimiters that an
        // identifier must never swallow.
        rules.reserve(&[";", "}", ")", "\n"]);

        rules.add_operator("=", Precedence::right(1));
        rules.add_operator("==", Precedence::left(2));
        rules.add_operator(">", Precedence::left(2));
        rules.add_operator("<", Precedence::left(2));
        rules.add_operator("+", Precedence::left(3));
        rules.add_operator("-", Precedence::left(3));
        rules.add_operator("*", Precedence::left(4));
        rules.add_operator("/", Precedence::left(4));
        rules.add_operator("%", Precedence::left(4));

        // Expressions nest inside themselves through the parenthesized
        // primary, so `expr` starts out as a placeholder.
        let expr = rules.placeholder();

        let paren = rules.rule(RuleBuilder::new().sep(&["("]).ast(expr).sep(&[")"]));
        let number = rules.rule(RuleBuilder::new().number());
        let name = rules.rule(RuleBuilder::new().identifier());
        let string = rules.rule(RuleBuilder::new().string());
        let primary = rules.rule(RuleBuilder::new().or(&[paren, number, name, string]));

        let negation =
            rules.rule(RuleBuilder::shaped(ListRole::Negation).sep(&["-"]).ast(primary));
        let factor = rules.rule(RuleBuilder::new().or(&[negation, primary]));

        rules.define(expr, RuleBuilder::new().expression(factor));

        // Statements likewise nest through blocks.
        let statement = rules.placeholder();

        let block_item = rules.rule(RuleBuilder::new().sep(&[";", "\n"]).option(statement));
        let block = rules.rule(
            RuleBuilder::shaped(ListRole::Block)
                .sep(&["{"])
                .option(statement)
                .repeat(block_item)
                .sep(&["}"]),
        );

        let simple = rules.rule(RuleBuilder::new().ast(expr));
        let else_clause = rules.rule(RuleBuilder::new().sep(&["else"]).ast(block));
        let if_stmt = rules.rule(
            RuleBuilder::shaped(ListRole::If)
                .sep(&["if"])
                .sep(&["("])
                .ast(expr)
                .sep(&[")"])
                .ast(block)
                .option(else_clause),
        );
        let while_stmt = rules.rule(
            RuleBuilder::shaped(ListRole::While)
                .sep(&["while"])
                .sep(&["("])
                .ast(expr)
                .sep(&[")"])
                .ast(block),
        );
        rules.define(statement, RuleBuilder::new().or(&[if_stmt, while_stmt, simple]));

        let empty = rules.rule(RuleBuilder::shaped(ListRole::Empty));
        let program = rules.rule(
            RuleBuilder::new()
                .or(&[statement, empty])
                .sep(&[";", "\n"]),
        );

        Self {
            rules,
            program,
            expr,
            block,
        }
    }

    /// Parses exactly one top-level construct: a statement, or the
    /// empty statement when the line carries none. Callers loop until
    /// the stream is exhausted.
    pub fn parse_program(&self, src: &mut TokenStream) -> Result<AstNode, PebbleError> {
        self.rules.parse(self.program, src)
    }

    /// Parses one expression, for embedders that evaluate expressions
    /// outside of statement context.
    pub fn parse_expression(&self, src: &mut TokenStream) -> Result<AstNode, PebbleError> {
        self.rules.parse(self.expr, src)
    }

    /// Parses one braced statement block.
    pub fn parse_block(&self, src: &mut TokenStream) -> Result<AstNode, PebbleError> {
        self.rules.parse(self.block, src)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans `source` and parses it to the end, one top-level construct
/// per returned node. The first lexical or syntax error aborts the
/// whole parse; callers wanting per-statement resilience must drive
/// [`Grammar::parse_program`] themselves and resynchronize.
pub fn parse(source: &str) -> Result<Vec<AstNode>, PebbleError> {
    let mut stream = TokenStream::new(tokenize(source)?);
    let grammar = Grammar::new();

    let mut nodes = Vec::new();
    while !stream.at_end() {
        nodes.push(grammar.parse_program(&mut stream)?);
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LeafRole;

    fn parse_one(source: &str) -> AstNode {
        let mut nodes = parse(source).unwrap();
        assert!(!nodes.is_empty());
        nodes.remove(0)
    }

    fn stream(source: &str) -> TokenStream {
        TokenStream::new(tokenize(source).unwrap())
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse_one("a + b * c").to_string(), "(a + (b * c))");
    }

    #[test]
    fn same_rank_left_associative_nests_left() {
        assert_eq!(parse_one("a - b - c").to_string(), "((a - b) - c)");
    }

    #[test]
    fn assignment_nests_right() {
        assert_eq!(parse_one("a = b = c").to_string(), "(a = (b = c))");
    }

    #[test]
    fn mixed_precedence_chain() {
        assert_eq!(
            parse_one("a = b + c * d == e").to_string(),
            "(a = ((b + (c * d)) == e))"
        );
    }

    #[test]
    fn parenthesized_primary_collapses_to_its_inner_node() {
        let bare = parse_one("x");
        let wrapped = parse_one("(x)");
        assert!(matches!(bare, AstNode::Leaf { role: LeafRole::Name, .. }));
        assert!(matches!(wrapped, AstNode::Leaf { role: LeafRole::Name, .. }));
        assert_eq!(wrapped.to_string(), "x");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse_one("(a + b) * c").to_string(), "((a + b) * c)");
    }

    #[test]
    fn negation_wraps_its_primary() {
        let node = parse_one("-x");
        assert!(matches!(node, AstNode::List { role: ListRole::Negation, .. }));
        assert_eq!(node.operand().name(), "x");
        assert_eq!(parse_one("-x * 2").to_string(), "(-x * 2)");
    }

    #[test]
    fn literals_parse_to_typed_leaves() {
        assert_eq!(parse_one("42").number_value(), 42.0);
        assert_eq!(parse_one("\"hi\"").string_value(), "hi");
    }

    #[test]
    fn bare_separator_is_the_empty_statement() {
        let nodes = parse(";").unwrap();
        assert!(matches!(
            nodes[0],
            AstNode::List { role: ListRole::Empty, .. }
        ));
        assert_eq!(nodes[0].num_children(), 0);
    }

    #[test]
    fn newline_separates_statements() {
        let nodes = parse("a = 1\nb = 2").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].to_string(), "(a = 1)");
        assert_eq!(nodes[1].to_string(), "(b = 2)");
    }

    #[test]
    fn expressions_parse_standalone() {
        let grammar = Grammar::new();
        let mut src = stream("1 + 2");
        let node = grammar.parse_expression(&mut src).unwrap();
        assert_eq!(node.to_string(), "(1 + 2)");
    }

    #[test]
    fn block_keeps_its_statements_in_source_order() {
        let grammar = Grammar::new();
        let mut src = stream("{ a = 1 ; b = 2 }");

        let block = grammar.parse_block(&mut src).unwrap();
        let statements = block.statements();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].operator(), "=");
        assert_eq!(statements[0].left().name(), "a");
        assert_eq!(statements[1].left().name(), "b");
    }

    #[test]
    fn if_without_else_reports_an_absent_branch() {
        let node = parse_one("if (x) { y }");
        assert!(matches!(node, AstNode::List { role: ListRole::If, .. }));
        assert_eq!(node.condition().name(), "x");
        assert_eq!(node.then_block().statements().len(), 1);
        assert!(node.else_block().is_none());
    }

    #[test]
    fn if_with_else_reports_the_else_block() {
        let node = parse_one("if (x) { y } else { z }");
        let else_block = node.else_block().expect("else branch present");
        assert_eq!(else_block.statements().len(), 1);
        assert_eq!(node.to_string(), "(if x (y) else (z))");
    }

    #[test]
    fn while_statement_exposes_condition_and_body() {
        let node = parse_one("while (n > 0) { n = n - 1 }");
        assert!(matches!(node, AstNode::List { role: ListRole::While, .. }));
        assert_eq!(node.condition().to_string(), "(n > 0)");
        assert_eq!(node.body().statements().len(), 1);
    }

    #[test]
    fn missing_condition_paren_fails_at_the_offending_token() {
        let err = parse("if x { y }").unwrap_err();
        assert_eq!(err.code, "E_PARSE");
        assert_eq!(err.span.line, 1);
        assert!(err.message.contains("'('"));
        assert!(err.message.contains("'x'"));
    }

    #[test]
    fn a_failed_statement_leaves_earlier_results_intact() {
        let grammar = Grammar::new();
        let mut src = stream("a = 1\nif x { y }");

        let first = grammar.parse_program(&mut src).unwrap();
        assert_eq!(first.to_string(), "(a = 1)");

        let err = grammar.parse_program(&mut src).unwrap_err();
        assert_eq!(err.span.line, 2);

        // The previously returned sibling is untouched by the failure.
        assert_eq!(first.to_string(), "(a = 1)");
    }

    #[test]
    fn one_grammar_serves_many_sequential_parses() {
        let grammar = Grammar::new();

        for source in ["a = 1", "while (x) { y }", "if (a < b) { c } else { d }"] {
            let mut src = stream(source);
            grammar.parse_program(&mut src).unwrap();
        }
    }

    #[test]
    fn else_must_be_followed_by_a_block() {
        // Chained `else if` is deliberately not part of the grammar.
        let err = parse("if (x) { y } else if (z) { w }").unwrap_err();
        assert_eq!(err.code, "E_PARSE");
        assert!(err.message.contains("'{'"));
    }

    #[test]
    fn statements_inside_blocks_nest_recursively() {
        let node = parse_one("while (x) { if (y) { z } }");
        let inner = &node.body().statements()[0];
        assert!(matches!(inner, AstNode::List { role: ListRole::If, .. }));
    }
}
