use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::token::{lookup_ident, Lexeme, Token, TokenKind};
use crate::span::Span;

/// Single-pass scanner over one immutable input.
///
/// Tokens are produced on demand by [`Scanner::next_token`]. Once the input
/// is exhausted every further call yields [`TokenKind::Eof`].
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of `ch`.
    position: usize,
    /// Byte offset of the character after `ch`.
    read_position: usize,
    /// Character under examination, `None` past the end of input.
    ch: Option<char>,
    line: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            finished: false,
        };
        scanner.read_char();
        debug!(len = source.len(), "scanner primed");

        scanner
    }

    pub fn next_token(&mut self) -> Token {
        self.next_lexeme().token
    }

    pub fn next_lexeme(&mut self) -> Lexeme {
        self.skip_whitespace();

        let start = self.position;
        let line = self.line;

        let Some(c) = self.ch else {
            let end = self.source.len();
            return Lexeme {
                token: Token::eof(),
                span: Span::new(end..end, line),
            };
        };

        let kind = match c {
            '=' => {
                if self.expect_char('=') {
                    TokenKind::Equal
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.expect_char('=') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::Bang
                }
            }
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '*' => TokenKind::Asterisk,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            c if is_letter(c) => {
                // the accumulation loop already left the cursor on the next character
                self.read_while(is_letter);
                let kind = lookup_ident(&self.source[start..self.position]);
                return self.lexeme(kind, start, line);
            }
            c if c.is_ascii_digit() => {
                self.read_while(|c| c.is_ascii_digit());
                return self.lexeme(TokenKind::Int, start, line);
            }
            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.lexeme(kind, start, line)
    }

    /// Drains the input, `Eof` included.
    pub fn scan(self) -> Vec<Lexeme> {
        self.collect()
    }
}

impl Scanner<'_> {
    fn lexeme(&self, kind: TokenKind, start: usize, line: usize) -> Lexeme {
        let range = start..self.position;
        let token = Token::new(kind, &self.source[range.clone()]);
        trace!(%token, ?range, line, keyword = kind.is_keyword(), "scanned");

        Lexeme {
            token,
            span: Span::new(range, line),
        }
    }

    fn read_char(&mut self) {
        if self.ch == Some('\n') {
            self.line += 1;
        }

        self.position = self.read_position;
        self.ch = self.char_at(self.read_position);
        self.read_position += self.ch.map_or(1, char::len_utf8);
    }

    fn peek_char(&self) -> Option<char> {
        self.char_at(self.read_position)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.source.get(offset..).and_then(|s| s.chars().next())
    }

    /// Consumes the current character only if the next one is `expected`,
    /// leaving `expected` as the current character.
    fn expect_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.read_char();
            true
        } else {
            false
        }
    }

    fn read_while<F>(&mut self, pred: F)
    where
        F: Fn(char) -> bool,
    {
        while self.ch.is_some_and(&pred) {
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        self.read_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }
}

impl Iterator for Scanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let lexeme = self.next_lexeme();
        self.finished = lexeme.token.is_eof();
        Some(lexeme)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Identifiers are letters and underscores only; digits end them.
const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
