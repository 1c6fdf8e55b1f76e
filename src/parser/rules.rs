/*
 * ==========================================================================
 * PEBBLE - Little Stones, Big Scripts!
 * ==========================================================================
 *
 * File:      rules.rs
 * Purpose:   Rules (ordered element sequences) and the rule set they
 *            live in, with the fluent builder grammar authors use.
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

use std::collections::HashSet;

use crate::ast::{AstNode, ListRole};
use crate::error::PebbleError;
use crate::lexer::stream::TokenStream;
use crate::parser::element::Element;
use crate::parser::precedence::{OperatorTable, Precedence};

/// Identity-stable handle to a rule inside one [`RuleSet`].
///
/// Handles can be captured by other rules before the rule they name is
/// populated, which is what makes recursive and forward-referencing
/// grammars expressible (see [`RuleSet::placeholder`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleId(usize);

/// An ordered sequence of grammar elements plus a node-shape policy.
///
/// With a concrete [`ListRole`], the accumulated children are always
/// wrapped in a list of that role. Without one the rule is
/// *collapsing*: exactly one child degenerates to that child itself
/// (a parenthesized primary is just its inner expression), anything
/// else becomes a generic list.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    shape: Option<ListRole>,
    elements: Vec<Element>,
}

impl Rule {
    fn build(&self, mut children: Vec<AstNode>) -> AstNode {
        match self.shape {
            Some(role) => AstNode::list(role, children),
            None => {
                if children.len() == 1 {
                    children.remove(0)
                } else {
                    AstNode::list(ListRole::Generic, children)
                }
            }
        }
    }
}

/// Fluent builder for one rule's element sequence, mirroring the order
/// the grammar is written in:
///
/// ```text
/// RuleBuilder::shaped(ListRole::While)
///     .sep(&["while"]).sep(&["("]).ast(expr).sep(&[")"])
///     .ast(block)
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    shape: Option<ListRole>,
    elements: Vec<Element>,
}

impl RuleBuilder {
    /// A collapsing rule (no dedicated node shape).
    pub fn new() -> Self {
        Self::default()
    }

    /// A rule whose children are always wrapped in a `role` list.
    pub fn shaped(role: ListRole) -> Self {
        Self {
            shape: Some(role),
            elements: Vec::new(),
        }
    }

    /// Match one number token.
    pub fn number(mut self) -> Self {
        self.elements.push(Element::Number);
        self
    }

    /// Match one string token.
    pub fn string(mut self) -> Self {
        self.elements.push(Element::StringLit);
        self
    }

    /// Match one non-reserved identifier token.
    pub fn identifier(mut self) -> Self {
        self.elements.push(Element::Identifier);
        self
    }

    /// Consume one of the given literal tokens and discard it.
    pub fn sep(mut self, candidates: &[&str]) -> Self {
        self.elements.push(Element::Literal {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            keep: false,
        });
        self
    }

    /// Consume one of the given literal tokens and keep it as a leaf.
    pub fn literal(mut self, candidates: &[&str]) -> Self {
        self.elements.push(Element::Literal {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            keep: true,
        });
        self
    }

    /// Invoke another rule and append its node.
    pub fn ast(mut self, rule: RuleId) -> Self {
        self.elements.push(Element::SubRule(rule));
        self
    }

    /// First-match-wins alternation over candidate rules.
    pub fn or(mut self, candidates: &[RuleId]) -> Self {
        self.elements.push(Element::Or(candidates.to_vec()));
        self
    }

    /// Apply `rule` at most once.
    pub fn option(mut self, rule: RuleId) -> Self {
        self.elements.push(Element::Optional(rule));
        self
    }

    /// Apply `rule` zero or more times.
    pub fn repeat(mut self, rule: RuleId) -> Self {
        self.elements.push(Element::Repeated(rule));
        self
    }

    /// A precedence-climbed binary-operator chain over `factor`
    /// operands, driven by the rule set's operator table.
    pub fn expression(mut self, factor: RuleId) -> Self {
        self.elements.push(Element::Expression { factor });
        self
    }
}

/// All rules of one grammar, together with the reserved-word set and
/// operator table they share.
///
/// A populated rule set is read-only and re-entrant: the same rules
/// are safely invoked many times, including recursively, across any
/// number of sequential parses.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    reserved: HashSet<String>,
    operators: OperatorTable,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an empty rule and returns its handle, to be populated
    /// later with [`RuleSet::define`]. Until then the rule trivially
    /// matches and produces an empty list; grammars that parse before
    /// defining every placeholder are authoring defects.
    pub fn placeholder(&mut self) -> RuleId {
        self.rules.push(Rule::default());
        RuleId(self.rules.len() - 1)
    }

    /// Populates a previously allocated rule.
    pub fn define(&mut self, id: RuleId, builder: RuleBuilder) {
        self.rules[id.0] = Rule {
            shape: builder.shape,
            elements: builder.elements,
        };
    }

    /// Allocates and populates a rule in one step.
    pub fn rule(&mut self, builder: RuleBuilder) -> RuleId {
        let id = self.placeholder();
        self.define(id, builder);
        id
    }

    /// Adds words the identifier matcher must reject.
    pub fn reserve(&mut self, words: &[&str]) {
        for word in words {
            self.reserved.insert(word.to_string());
        }
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    /// Registers a binary operator for expression elements.
    pub fn add_operator(&mut self, text: &str, precedence: Precedence) {
        self.operators.add(text, precedence);
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// One-token lookahead: delegates to the rule's first element. An
    /// empty rule trivially matches; the grammar is designed so that
    /// the first element of every alternative disambiguates.
    pub fn matches(&self, id: RuleId, src: &TokenStream) -> bool {
        let rule = &self.rules[id.0];
        rule.elements
            .first()
            .map_or(true, |element| element.matches(self, src))
    }

    /// Runs every element of the rule in order against one growing
    /// child list, then applies the rule's node-shape policy. Errors
    /// propagate unchanged from the first failing element.
    pub fn parse(&self, id: RuleId, src: &mut TokenStream) -> Result<AstNode, PebbleError> {
        let rule = &self.rules[id.0];
        let mut children = Vec::new();
        for element in &rule.elements {
            element.parse(self, src, &mut children)?;
        }
        Ok(rule.build(children))
    }
}
