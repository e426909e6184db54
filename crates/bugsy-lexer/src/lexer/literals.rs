// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//! The lexer handles numeric, string, and identifier literals.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42        -> Number(42.0)
//! 3.14      -> Number(3.14)
//! 3.        -> Number(3.0), Dot
//! .5        -> Dot, Number(5.0)
//! -7        -> Minus, Number(7.0)
//! ```
//!
//! Every number decodes to an `f64`. There are no exponents, separators,
//! or radix prefixes.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! ```text
//! "hello"   -> String("hello")
//! "a
//! b"        -> String("a\nb"), line counter advanced
//! "abc      -> no token, "Unterminated string." reported
//! ```
//!
//! Strings are double-quoted only. The literal is the raw text between the
//! quotes; backslashes have no special meaning.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! ### Identifier Rules
//!
//! - Start: `A-Z`, `a-z`, `_`
//! - Continue: Start chars + `0-9`
//!
//! ### Keyword Detection
//!
//! The whole lexeme is looked up in the reserved-word table:
//!
//! ```text
//! "class"     -> TokenKind::Class
//! "classroom" -> TokenKind::Identifier
//! "Class"     -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{tokenize, Literal, TokenKind};
    use crate::LexError;

    fn scan_single(src: &str) -> TokenKind<'_> {
        tokenize(src).tokens[0].kind
    }

    // Number tests
    #[test]
    fn test_integer() {
        assert!(matches!(scan_single("42"), TokenKind::Number(n) if n == 42.0));
    }

    #[test]
    fn test_float() {
        assert!(matches!(scan_single("3.14"), TokenKind::Number(n) if (n - 3.14).abs() < 0.001));
    }

    #[test]
    fn test_trailing_dot() {
        let tokens = tokenize("3.").tokens;
        assert_eq!(tokens.len(), 3);
        assert!(matches!(tokens[0].kind, TokenKind::Number(n) if n == 3.0));
        assert_eq!(tokens[0].lexeme, "3");
        assert!(matches!(tokens[1].kind, TokenKind::Dot));
    }

    #[test]
    fn test_leading_dot() {
        let tokens = tokenize(".5").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Dot));
        assert!(matches!(tokens[1].kind, TokenKind::Number(n) if n == 5.0));
    }

    #[test]
    fn test_method_call_on_number() {
        let tokens = tokenize("12.abs").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Number(n) if n == 12.0));
        assert!(matches!(tokens[1].kind, TokenKind::Dot));
        assert!(matches!(tokens[2].kind, TokenKind::Identifier));
    }

    #[test]
    fn test_number_literal_value() {
        let tokens = tokenize("2.5").tokens;
        assert_eq!(tokens[0].literal(), Some(Literal::Number(2.5)));
    }

    // String tests
    #[test]
    fn test_double_quote_string() {
        assert!(matches!(scan_single("\"hello\""), TokenKind::String(s) if s == "hello"));
    }

    #[test]
    fn test_empty_string() {
        assert!(matches!(scan_single("\"\""), TokenKind::String(s) if s.is_empty()));
    }

    #[test]
    fn test_backslash_is_literal() {
        assert!(matches!(scan_single(r#""a\nb""#), TokenKind::String(s) if s == r"a\nb"));
    }

    #[test]
    fn test_unterminated_string() {
        let output = tokenize("\"abc");
        assert_eq!(output.tokens.len(), 1);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].error, LexError::UnterminatedString);
    }

    // Identifier and keyword tests
    #[test]
    fn test_identifier() {
        let tokens = tokenize("myVar").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Identifier));
        assert_eq!(tokens[0].lexeme, "myVar");
        assert_eq!(tokens[0].literal(), None);
    }

    #[test]
    fn test_identifier_with_underscore() {
        let tokens = tokenize("_private_1").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Identifier));
        assert_eq!(tokens[0].lexeme, "_private_1");
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = tokenize("classroom").tokens;
        assert_eq!(tokens.len(), 2);
        assert!(matches!(tokens[0].kind, TokenKind::Identifier));
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert!(matches!(scan_single("Class"), TokenKind::Identifier));
        assert!(matches!(scan_single("NIL"), TokenKind::Identifier));
    }

    #[test]
    fn test_all_keywords() {
        let src = "and class else false fun for if nil or print return super this true var while";
        let kinds: Vec<_> = tokenize(src).tokens.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::And,
                TokenKind::Class,
                TokenKind::Else,
                TokenKind::False,
                TokenKind::Fun,
                TokenKind::For,
                TokenKind::If,
                TokenKind::Nil,
                TokenKind::Or,
                TokenKind::Print,
                TokenKind::Return,
                TokenKind::Super,
                TokenKind::This,
                TokenKind::True,
                TokenKind::Var,
                TokenKind::While,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_digit_then_letters() {
        let tokens = tokenize("1st").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Number(n) if n == 1.0));
        assert!(matches!(tokens[1].kind, TokenKind::Identifier));
        assert_eq!(tokens[1].lexeme, "st");
    }
}
