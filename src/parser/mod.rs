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

/// The atomic grammar elements:
/// - token-kind matchers, literal consumers
/// - sub-rule invocation, alternation, option, repetition
/// - the precedence-climbing expression element
pub mod element;

/// Rules and rule sets:
/// - ordered element sequences with a node-shape policy
/// - the arena that makes recursive grammars expressible
/// - the fluent builder grammar authors use
pub mod rules;

/// Operator precedence:
/// - per-operator rank and associativity
/// - the operator table shared across one grammar
pub mod precedence;

/// The concrete Pebble grammar and the public parse entry points.
pub mod grammar;

/// Re-export the public surface so callers can use
/// `pebble::parser::parse(...)` and friends.
pub use element::Element;
pub use grammar::{parse, Grammar};
pub use precedence::{Assoc, OperatorTable, Precedence};
pub use rules::{Rule, RuleBuilder, RuleId, RuleSet};
