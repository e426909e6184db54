// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The reserved-word table.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::TokenKind;

const RESERVED: [(&str, TokenKind<'static>); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind<'static>>> =
    LazyLock::new(|| RESERVED.into_iter().collect());

/// Looks up a reserved word. Matching is exact and case-sensitive.
pub fn keyword(text: &str) -> Option<TokenKind<'static>> {
    KEYWORDS.get(text).copied()
}

/// Returns every reserved word, in alphabetical order.
pub fn keywords() -> impl Iterator<Item = &'static str> {
    RESERVED.iter().map(|(word, _)| *word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reserved_word_resolves() {
        for (word, kind) in RESERVED {
            assert_eq!(keyword(word), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(keyword("class"), Some(TokenKind::Class));
        assert_eq!(keyword("Class"), None);
        assert_eq!(keyword("CLASS"), None);
    }

    #[test]
    fn test_lookup_is_whole_word() {
        assert_eq!(keyword("classroom"), None);
        assert_eq!(keyword("cla"), None);
        assert_eq!(keyword(""), None);
    }

    #[test]
    fn test_keywords_listing() {
        let words: Vec<_> = keywords().collect();
        assert_eq!(words.len(), 16);
        assert!(words.contains(&"while"));
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
