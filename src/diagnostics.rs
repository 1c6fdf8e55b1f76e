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

use crate::error::PebbleError;
use crate::span::Span;
use std::fmt::Write;

/// Renders human-friendly, compiler-style diagnostics for Pebble errors.
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for Pebble and designed to remain readable without color:
///
/// ```text
/// error[E_PARSE]: expected '(', found 'x'
///   --> script.peb:1:4
///    |
///  1 | if x { y }
///    |    ^
/// help: the condition of an 'if' statement must be parenthesized
/// ```
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `main.peb`), display only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a full diagnostic for `error` as a string.
    pub fn render(&self, error: &PebbleError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; guard against line == 0.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        let mut out = String::new();
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );

        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);

        // Caret underline pointing at the error column.
        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        let _ = writeln!(out, "   | {}", underline);

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &PebbleError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_source_line_and_caret() {
        let printer = DiagnosticPrinter::new("script.peb", "if x { y }");
        let err = PebbleError::parse_error("expected '(', found 'x'", Span::new(1, 3));
        let out = printer.render(&err);

        assert!(out.contains("error[E_PARSE]: expected '(', found 'x'"));
        assert!(out.contains("--> script.peb:1:4"));
        assert!(out.contains("  1 | if x { y }"));
        assert!(out.contains("   |    ^"));
        assert!(!out.contains("help:"));
    }

    #[test]
    fn renders_optional_help() {
        let printer = DiagnosticPrinter::new("script.peb", "\"oops");
        let err = PebbleError::lex_error("unterminated string literal", Span::new(1, 0))
            .with_help("close the string with '\"'");
        let out = printer.render(&err);
        assert!(out.contains("help: close the string with '\"'"));
    }

    #[test]
    fn tolerates_out_of_range_lines() {
        let printer = DiagnosticPrinter::new("script.peb", "");
        let err = PebbleError::parse_error("unexpected end of input", Span::new(9, 0));
        let out = printer.render(&err);
        assert!(out.contains("--> script.peb:9:1"));
    }
}
