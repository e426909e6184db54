// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Eval-Print Loop) for the Bugsy lexer.
//!
//! Every entered line is scanned and its token stream printed.

use bugsy_lexer::lexer::keywords;
use bugsy_lexer::{scan, tokenize, DiscardDiagnostics, LexError, Token, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::format::{paint, print_tokens};
use crate::report::Reporter;

/// REPL configuration constants
const HISTORY_FILE: &str = ".bugsy_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Bugsy file and print its tokens"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
#[derive(Default)]
struct BugsyHelper {
    /// Reserved words and REPL commands for completion
    words: Vec<String>,
}

impl BugsyHelper {
    fn new() -> Self {
        let commands = [".help", ".exit", ".clear", ".version", ".load"];

        let words = keywords()
            .chain(commands)
            .map(String::from)
            .collect();

        Self { words }
    }

    /// Start of the word ending at `pos`.
    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_' && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl Completer for BugsyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for BugsyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        // Find first matching word
        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for BugsyHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        Cow::Owned(highlight_source(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Color `source` by token kind, leaving whitespace untouched and dimming comments.
fn highlight_source(source: &str) -> String {
    let tokens = scan(source, &mut DiscardDiagnostics);
    let mut result = String::with_capacity(source.len() * 2);
    let mut last = 0;

    for token in tokens.iter().filter(|t| !t.is_eof()) {
        push_gap(&mut result, &source[last..token.span.start]);
        result.push_str(&paint(&token.kind, token.lexeme));
        last = token.span.end;
    }
    push_gap(&mut result, &source[last..]);

    result
}

/// Text between tokens is whitespace, comments, or unscannable input.
///
/// A `//` after an open quote belongs to an unterminated string, not a comment.
fn push_gap(result: &mut String, gap: &str) {
    let comment = gap
        .find("//")
        .filter(|&i| !gap[..i].contains('"'));

    match comment {
        Some(i) => {
            result.push_str(&gap[..i]);
            result.push_str(&gap[i..].to_string().dimmed().to_string());
        }
        None => result.push_str(gap),
    }
}

impl Validator for BugsyHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_incomplete(ctx.input()) {
            return Ok(ValidationResult::Incomplete);
        }

        Ok(ValidationResult::Valid(None))
    }
}

/// Input needs another line: an open string, unclosed brackets, or a
/// trailing operator.
fn is_incomplete(input: &str) -> bool {
    if input.trim_start().starts_with('.') {
        return false;
    }

    let output = tokenize(input);

    if output
        .diagnostics
        .iter()
        .any(|d| d.error == LexError::UnterminatedString)
    {
        return true;
    }

    if !is_balanced(&output.tokens) {
        return true;
    }

    let last = output.tokens.iter().rev().find(|t| !t.is_eof());
    matches!(
        last.map(|t| t.kind),
        Some(
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equal
                | TokenKind::Comma
                | TokenKind::LeftBrace
                | TokenKind::LeftParen
        )
    )
}

/// Check if parentheses and braces are balanced
fn is_balanced(tokens: &[Token<'_>]) -> bool {
    let mut stack = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => stack.push(TokenKind::RightParen),
            TokenKind::LeftBrace => stack.push(TokenKind::RightBrace),
            TokenKind::RightParen | TokenKind::RightBrace => {
                if stack.pop() != Some(token.kind) {
                    return true; // Unbalanced but we should let the parser handle the error
                }
            }
            _ => {}
        }
    }

    stack.is_empty()
}

impl Helper for BugsyHelper {}

/// The interactive token REPL
pub struct Repl {
    editor: Editor<BugsyHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(BugsyHelper::new()));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bugsy")
            .join(HISTORY_FILE);

        // Create parent directory if it doesn't exist
        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            tracing::debug!(error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    // Check for REPL commands
                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(e) = self.editor.save_history(&self.history_path) {
            tracing::warn!(error = %e, "failed to save history");
        }

        self.print_goodbye();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "{}",
            r#"   ___                      "#.bright_cyan().bold()
        );
        println!(
            "{}",
            r#"  / __\_   _  __ _ ___ _   _ "#.bright_cyan().bold()
        );
        println!(
            "{}",
            r#" /__\// | | |/ _` / __| | | |"#.bright_cyan().bold()
        );
        println!(
            "{}",
            r#"/ \/  \ |_| | (_| \__ \ |_| |"#.bright_cyan().bold()
        );
        println!(
            "{}",
            r#"\_____/\__,_|\__, |___/\__, |"#.bright_cyan().bold()
        );
        println!(
            "{}",
            r#"             |___/     |___/ "#.bright_cyan().bold()
        );
        println!();
        println!(
            "  {} {} {}",
            "Bugsy Lexer".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {}",
            "Type Bugsy code to see its tokens".dimmed()
        );
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye!".bright_cyan());
        println!();
    }

    fn format_prompt(&self) -> String {
        format!("{} ", "bugsy>".bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                self.print_version();
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    self.load_file(path);
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    );
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Ctrl+L".yellow(), "Clear screen".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Complete keywords".dimmed());
        println!("  {:16} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn print_version(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!("{}: {}", "Bugsy".bright_cyan().bold(), version.yellow());
        println!("{}: {}", "Rust".dimmed(), env!("CARGO_PKG_RUST_VERSION"));
        println!();
    }

    fn load_file(&mut self, path: &str) {
        let path = std::path::Path::new(path);

        match std::fs::read_to_string(path) {
            Ok(source) => {
                let origin = path.display().to_string();
                let mut reporter = Reporter::new(&source).with_origin(&origin);
                let tokens = scan(&source, &mut reporter);
                print_tokens(&tokens);
            }
            Err(e) => {
                eprintln!(
                    "{}: cannot read '{}': {}",
                    "Error".red().bold(),
                    path.display().cyan(),
                    e
                );
            }
        }
    }

    fn scan_and_print(&mut self, input: &str) {
        let mut reporter = Reporter::new(input);
        let tokens = scan(input, &mut reporter);
        print_tokens(&tokens);
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}
