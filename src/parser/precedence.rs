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

use std::collections::HashMap;

/// How equal-precedence operators nest: `(a op b) op c` for left,
/// `a op (b op c)` for right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// The binding strength of one binary operator. Higher rank binds
/// tighter.
#[derive(Debug, Clone, Copy)]
pub struct Precedence {
    pub rank: u32,
    pub assoc: Assoc,
}

impl Precedence {
    pub fn left(rank: u32) -> Self {
        Self { rank, assoc: Assoc::Left }
    }

    pub fn right(rank: u32) -> Self {
        Self { rank, assoc: Assoc::Right }
    }

    /// Whether this pending operator should be absorbed into the right
    /// operand of an operator already shifted at `outer`. Ties resolve
    /// by this operator's associativity.
    pub fn continues_rhs(&self, outer: &Precedence) -> bool {
        match self.assoc {
            Assoc::Left => self.rank > outer.rank,
            Assoc::Right => self.rank >= outer.rank,
        }
    }
}

/// The operator table of one grammar: operator text mapped to its
/// precedence entry. Built once at grammar-definition time and
/// read-only afterwards; never process-global, so independent grammars
/// cannot interfere.
#[derive(Debug, Default)]
pub struct OperatorTable {
    ops: HashMap<String, Precedence>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: &str, precedence: Precedence) {
        self.ops.insert(text.to_string(), precedence);
    }

    pub fn get(&self, text: &str) -> Option<Precedence> {
        self.ops.get(text).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_operator_text() {
        let mut table = OperatorTable::new();
        table.add("+", Precedence::left(3));
        assert_eq!(table.get("+").map(|p| p.rank), Some(3));
        assert!(table.get("?").is_none());
    }

    #[test]
    fn left_associative_requires_strictly_tighter_binding() {
        let outer = Precedence::left(3);
        assert!(!Precedence::left(3).continues_rhs(&outer));
        assert!(Precedence::left(4).continues_rhs(&outer));
        assert!(!Precedence::left(2).continues_rhs(&outer));
    }

    #[test]
    fn right_associative_continues_on_ties() {
        let outer = Precedence::right(1);
        assert!(Precedence::right(1).continues_rhs(&outer));
        assert!(!Precedence::left(1).continues_rhs(&outer));
    }
}
