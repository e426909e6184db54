// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Bugsy source code.
//!
//! The lexer transforms Bugsy source text into a sequence of tokens
//! that can be consumed by the parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token` and `TokenKind` definitions
//! - `keywords.rs` - The reserved-word table
//! - `diagnostic.rs` - `Diagnostic` and the `DiagnosticSink` trait
//!
//! ## Documentation Submodules
//!
//! - `operators` - One and two character operator scanning
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use bugsy_lexer::lexer::{Scanner, TokenKind};
//!
//! let mut diagnostics = Vec::new();
//! let tokens = Scanner::new("var x = 42;").scan_tokens(&mut diagnostics);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert!(tokens.last().is_some_and(|t| t.is_eof()));
//! ```

mod diagnostic;
mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use diagnostic::{Diagnostic, DiagnosticSink, DiscardDiagnostics};
pub use keywords::{keyword, keywords};
pub use scanner::{scan, tokenize, ScanOutput, Scanner};
pub use token::{Literal, Span, Token, TokenKind};
