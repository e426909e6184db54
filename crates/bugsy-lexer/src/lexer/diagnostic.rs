// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Diagnostic reporting.
//!
//! The scanner never decides whether a run has failed. It hands every
//! problem to a [`DiagnosticSink`] supplied by the caller and keeps going.

use std::fmt;

use super::Span;
use crate::LexError;

/// A problem reported during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line the problem was found on
    pub line: usize,
    /// Source bytes the problem covers
    pub span: Span,
    /// What went wrong
    pub error: LexError,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(line: usize, span: Span, error: LexError) -> Self {
        Self { line, span, error }
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

/// Receives diagnostics as the scanner finds them.
pub trait DiagnosticSink {
    /// Reports one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardDiagnostics;

impl DiagnosticSink for DiscardDiagnostics {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
