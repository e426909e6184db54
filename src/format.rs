// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Colored rendering of tokens for the terminal.

use bugsy_lexer::{Token, TokenKind};
use owo_colors::OwoColorize;

/// Paint `text` in the color used for tokens of `kind`.
pub fn paint(kind: &TokenKind<'_>, text: &str) -> String {
    match kind {
        k if k.is_keyword() => text.magenta().bold().to_string(),
        TokenKind::Number(_) => text.yellow().to_string(),
        TokenKind::String(_) => text.green().to_string(),
        TokenKind::Identifier => text.to_string(),
        TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::LeftBrace
        | TokenKind::RightBrace => text.yellow().to_string(),
        TokenKind::Comma | TokenKind::Dot | TokenKind::Semicolon => text.to_string(),
        TokenKind::Eof => text.dimmed().to_string(),
        _ => text.cyan().to_string(),
    }
}

/// Format one token as a `line | KIND lexeme literal` row.
pub fn format_token(token: &Token<'_>) -> String {
    let mut row = format!(
        "{} {} {}",
        format!("{:>4} |", token.line).dimmed(),
        paint(&token.kind, token.kind.name()),
        token.lexeme
    );

    if let Some(literal) = token.literal() {
        row.push(' ');
        row.push_str(&literal.to_string().dimmed().to_string());
    }

    row
}

/// Print every token, one per line.
pub fn print_tokens(tokens: &[Token<'_>]) {
    for token in tokens {
        println!("{}", format_token(token));
    }
}
