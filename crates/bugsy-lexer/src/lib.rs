// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # bugsy-lexer
//!
//! The lexical analyzer for Bugsy, a small dynamically-typed scripting
//! language.
//!
//! ## Overview
//!
//! This crate turns source text into an ordered sequence of tokens for a
//! parser to consume:
//! - A single left-to-right pass with at most two bytes of lookahead
//! - Tokens borrow their lexemes from the source, no per-token allocation
//! - Problems are handed to a caller-supplied [`DiagnosticSink`]; the scan
//!   itself never fails
//! - Optional parallel scanning of independent sources (`parallel` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use bugsy_lexer::{tokenize, TokenKind};
//!
//! let output = tokenize("print 1 != 2;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[0].kind, TokenKind::Print);
//! assert_eq!(output.tokens[2].kind, TokenKind::BangEqual);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod lexer;
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-exports for convenience
pub use error::LexError;
pub use lexer::{
    scan, tokenize, Diagnostic, DiagnosticSink, DiscardDiagnostics, Literal, ScanOutput, Scanner,
    Span, Token, TokenKind,
};
