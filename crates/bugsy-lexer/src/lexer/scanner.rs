// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use tracing::{debug, trace};

use super::{keyword, Diagnostic, DiagnosticSink, Span, Token, TokenKind};
use crate::LexError;

/// A single-pass scanner over one Bugsy source text.
///
/// A scanner is consumed by [`Scanner::scan_tokens`], so each instance
/// produces exactly one token sequence.
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token<'src>>,
    reported: usize,
}

/// Tokens and diagnostics from scanning one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput<'src> {
    /// The token sequence, always ending with end-of-input
    pub tokens: Vec<Token<'src>>,
    /// Everything reported during the scan, in source order
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutput<'_> {
    /// Returns true if any diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            reported: 0,
        }
    }

    /// Scans the whole source, reporting problems to `sink`.
    ///
    /// Always returns a sequence terminated by a single [`TokenKind::Eof`]
    /// token, even when diagnostics were reported.
    pub fn scan_tokens<S>(mut self, sink: &mut S) -> Vec<Token<'src>>
    where
        S: DiagnosticSink + ?Sized,
    {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(sink);
        }

        self.tokens.push(Token::eof(self.line, self.source.len()));

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.reported,
            lines = self.line,
            "scan complete"
        );

        self.tokens
    }

    fn scan_token<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        let c = self.advance();

        match c {
            // Single-character tokens
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),

            // One or two character tokens
            b'!' => self.scan_bang(),
            b'=' => self.scan_equal(),
            b'<' => self.scan_less(),
            b'>' => self.scan_greater(),
            b'/' => self.scan_slash(),

            // Whitespace
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,

            // Literals
            b'"' => self.scan_string(sink),
            b'0'..=b'9' => self.scan_number(sink),
            c if is_alpha(c) => self.scan_identifier(),

            _ => self.unexpected_character(sink),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Consumes the next byte. Callers check `is_at_end` first.
    fn advance(&mut self) -> u8 {
        let c = self.bytes[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.current + 1).copied()
    }

    /// Consumes the next byte only if it is `expected`.
    fn match_next(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    fn add_token(&mut self, kind: TokenKind<'src>) {
        let token = Token::new(kind, self.lexeme(), self.line, self.span());
        self.tokens.push(token);
    }

    fn report<S>(&mut self, sink: &mut S, error: LexError)
    where
        S: DiagnosticSink + ?Sized,
    {
        trace!(line = self.line, start = self.start, %error, "lexical error");
        self.reported += 1;
        sink.report(Diagnostic::new(self.line, self.span(), error));
    }

    fn scan_bang(&mut self) {
        let kind = if self.match_next(b'=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        };
        self.add_token(kind);
    }

    fn scan_equal(&mut self) {
        let kind = if self.match_next(b'=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        };
        self.add_token(kind);
    }

    fn scan_less(&mut self) {
        let kind = if self.match_next(b'=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        };
        self.add_token(kind);
    }

    fn scan_greater(&mut self) {
        let kind = if self.match_next(b'=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        };
        self.add_token(kind);
    }

    fn scan_slash(&mut self) {
        if self.match_next(b'/') {
            // Comment runs to the end of the line; the newline is left for
            // the main loop so the line counter sees it.
            while self.peek().is_some_and(|c| c != b'\n') {
                self.current += 1;
            }
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn scan_string<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        while let Some(c) = self.peek() {
            if c == b'"' {
                break;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.report(sink, LexError::UnterminatedString);
            return;
        }

        // Closing quote
        self.current += 1;

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_token(TokenKind::String(value));
    }

    fn scan_number<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        self.skip_digits();

        // A trailing dot stays a separate token unless a digit follows it
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            self.skip_digits();
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(n) => self.add_token(TokenKind::Number(n)),
            Err(_) => self.report(sink, LexError::InvalidNumber(text.to_string())),
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.current += 1;
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn unexpected_character<S>(&mut self, sink: &mut S)
    where
        S: DiagnosticSink + ?Sized,
    {
        // Swallow the whole character so multi-byte input is reported once
        let ch = self.source[self.start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        self.current = self.start + ch.len_utf8();

        self.report(sink, LexError::UnexpectedCharacter(ch));
    }
}

/// Checks if a byte can start an identifier.
fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Checks if a byte can continue an identifier.
fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

/// Scans `source`, reporting problems to `sink`.
pub fn scan<'src, S>(source: &'src str, sink: &mut S) -> Vec<Token<'src>>
where
    S: DiagnosticSink + ?Sized,
{
    Scanner::new(source).scan_tokens(sink)
}

/// Scans `source`, collecting diagnostics alongside the tokens.
pub fn tokenize(source: &str) -> ScanOutput<'_> {
    let mut diagnostics = Vec::new();
    let tokens = scan(source, &mut diagnostics);

    ScanOutput {
        tokens,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind<'_>> {
        tokenize(src).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("{ } ( )"),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        let output = tokenize("");
        assert_eq!(output.tokens, vec![Token::eof(1, 0)]);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 3.14 007").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Number(n) if n == 42.0));
        assert!(matches!(tokens[1].kind, TokenKind::Number(n) if n == 3.14));
        assert!(matches!(tokens[2].kind, TokenKind::Number(n) if n == 7.0));
        assert_eq!(tokens[2].lexeme, "007");
    }

    #[test]
    fn test_strings() {
        let tokens = tokenize(r#""hello" "world""#).tokens;
        assert!(matches!(tokens[0].kind, TokenKind::String(s) if s == "hello"));
        assert!(matches!(tokens[1].kind, TokenKind::String(s) if s == "world"));
        assert_eq!(tokens[0].lexeme, "\"hello\"");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("fun var class print"),
            vec![
                TokenKind::Fun,
                TokenKind::Var,
                TokenKind::Class,
                TokenKind::Print,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        let tokens = tokenize("foo _bar baz9").tokens;
        let names: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(names, vec!["foo", "_bar", "baz9"]);
    }

    #[test]
    fn test_single_line_comments() {
        let tokens = tokenize("42 // this is a comment\n43").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::Number(n) if n == 42.0));
        assert!(matches!(tokens[1].kind, TokenKind::Number(n) if n == 43.0));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("1 // trailing"), vec![TokenKind::Number(1.0), TokenKind::Eof]);
    }

    #[test]
    fn test_division_vs_comment() {
        assert_eq!(
            kinds("6 / 2"),
            vec![
                TokenKind::Number(6.0),
                TokenKind::Slash,
                TokenKind::Number(2.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_match_leaves_cursor_on_mismatch() {
        let tokens = tokenize("!+").tokens;
        assert_eq!(tokens[0].kind, TokenKind::Bang);
        assert_eq!(tokens[0].lexeme, "!");
        assert_eq!(tokens[1].kind, TokenKind::Plus);
    }

    #[test]
    fn test_operator_runs() {
        assert_eq!(
            kinds("===!=<=>="),
            vec![
                TokenKind::EqualEqual,
                TokenKind::Equal,
                TokenKind::BangEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multiline_string_line() {
        let tokens = tokenize("\"a\nb\" x").tokens;
        assert!(matches!(tokens[0].kind, TokenKind::String(s) if s == "a\nb"));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unexpected_character_is_skipped() {
        let output = tokenize("1 @ 2");
        assert_eq!(
            output.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].error,
            LexError::UnexpectedCharacter('@')
        );
        assert_eq!(output.diagnostics[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_non_ascii_reported_once() {
        let output = tokenize("é+");
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].error,
            LexError::UnexpectedCharacter('é')
        );
        assert_eq!(output.tokens[0].kind, TokenKind::Plus);
        assert_eq!(output.tokens[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_unterminated_string_emits_no_token() {
        let output = tokenize("x \"abc\ndef");
        assert_eq!(
            output.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].error, LexError::UnterminatedString);
        assert_eq!(output.diagnostics[0].line, 2);
        assert_eq!(output.tokens[1].line, 2);
    }

    #[test]
    fn test_spans_cover_lexemes() {
        let src = "var answer = 42;";
        for token in tokenize(src).tokens {
            assert_eq!(&src[token.span.start..token.span.end], token.lexeme);
        }
    }

    #[test]
    fn test_eof_span_at_end() {
        let tokens = tokenize("a\n").tokens;
        let eof = tokens.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!(eof.span, Span::new(2, 2));
        assert_eq!(eof.line, 2);
    }

    #[test]
    fn test_closure_sink() {
        let mut lines = Vec::new();
        let tokens = scan("@\n#", &mut |d: Diagnostic| lines.push(d.line));
        assert_eq!(tokens.len(), 1);
        assert_eq!(lines, vec![1, 2]);
    }
}
