// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal reporting of scan diagnostics.
//!
//! The [`Reporter`] is the driver's [`DiagnosticSink`]. It prints each
//! diagnostic with the offending source line and remembers whether anything
//! went wrong, which decides the process exit status.

use bugsy_lexer::{Diagnostic, DiagnosticSink};
use owo_colors::OwoColorize;

/// A diagnostic sink that prints to stderr and tracks failure.
pub struct Reporter<'a> {
    source: &'a str,
    origin: Option<&'a str>,
    errors: usize,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for diagnostics about `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            origin: None,
            errors: 0,
        }
    }

    /// Prefix every message with the name of the file being scanned.
    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Returns true if at least one diagnostic was reported.
    pub fn had_error(&self) -> bool {
        self.errors > 0
    }

    /// Number of diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Uncolored header line, e.g. `script.bg:[line 2] Error: Unterminated string.`
    pub fn header(&self, diagnostic: &Diagnostic) -> String {
        match self.origin {
            Some(origin) => format!("{}:{}", origin, diagnostic),
            None => diagnostic.to_string(),
        }
    }

    /// The source line containing the start of the diagnostic, with its
    /// 1-based number and the byte column of the diagnostic within it.
    pub fn snippet(&self, diagnostic: &Diagnostic) -> Option<(usize, &'a str, usize)> {
        let start = diagnostic.span.start;
        let before = self.source.get(..start)?;

        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);
        let number = before.matches('\n').count() + 1;

        Some((number, &self.source[line_start..line_end], start - line_start))
    }

    /// Caret text under a snippet shown at `snippet_line`.
    ///
    /// A string that runs past the end of its line is reported where the
    /// input ends but shown where it starts, and the label says so.
    pub fn caret_label(diagnostic: &Diagnostic, snippet_line: usize) -> &'static str {
        if snippet_line == diagnostic.line {
            "^--- Here."
        } else {
            "^--- String starts here."
        }
    }
}

impl DiagnosticSink for Reporter<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.errors += 1;
        tracing::debug!(line = diagnostic.line, error = %diagnostic.error, "diagnostic");

        let prefix = match self.origin {
            Some(origin) => format!("{}:", origin),
            None => String::new(),
        };
        eprintln!(
            "{}{} {}: {}",
            prefix.dimmed(),
            format!("[line {}]", diagnostic.line).dimmed(),
            "Error".red().bold(),
            diagnostic.message()
        );

        if let Some((number, text, column)) = self.snippet(&diagnostic) {
            let gutter = format!("{:>5} | ", number);
            eprintln!("{}{}", gutter.dimmed(), text);
            eprintln!(
                "{}{}",
                " ".repeat(gutter.len() + column),
                Self::caret_label(&diagnostic, number).red()
            );
        }
    }
}
