// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//! The lexer handles two-character operators by looking one byte ahead.
//!
//! ## Single-Character Punctuation
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` map directly to their token kind.
//! There is no unary-minus token; `-1` is `Minus` followed by `Number`.
//!
//! ## One or Two Character Operators
//!
//! | Token | Method | Variants |
//! |-------|--------|----------|
//! | `!` | `scan_bang` | `!`, `!=` |
//! | `=` | `scan_equal` | `=`, `==` |
//! | `<` | `scan_less` | `<`, `<=` |
//! | `>` | `scan_greater` | `>`, `>=` |
//! | `/` | `scan_slash` | `/`, `//...` |
//!
//! ## Lookahead Logic
//!
//! `match_next` consumes the next byte only when it is the expected one:
//!
//! ```text
//! // For input "!=+"
//! scan_bang():
//!   consume '!'
//!   match_next('=') -> true, consumes '='
//!   return BangEqual
//! // next loop iteration starts at '+'
//! ```
//!
//! On a mismatch the cursor is left untouched, so `!+` scans as `Bang`
//! followed by `Plus`.
//!
//! ## Comment Handling
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Line comment: `// comment`, running up to (not including) the newline
//!
//! There are no block comments.

// This module serves as documentation. The actual implementation is in scanner.rs.
