// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the lexer

use thiserror::Error;

/// Problems found while scanning. None of them stop the scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot begin any token
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    /// A string literal that runs into the end of input
    #[error("Unterminated string.")]
    UnterminatedString,

    /// A numeric lexeme that failed to decode
    ///
    /// The scanner only accepts `digits [ '.' digits ]`, which always parses
    /// as `f64`. The variant exists so a decode failure is reported instead
    /// of panicking.
    #[error("Invalid number literal '{0}'.")]
    InvalidNumber(String),
}
