//! Logos-based lexer for nlang
//!
//! Every byte of the input ends up in exactly one token: trivia is kept, and
//! malformed input becomes `INVALID` tokens instead of errors.

use super::token_kind::TokenKind;
use logos::Logos;
use std::fmt::Write;
use std::ops::Range;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Adjacent invalid fragments are merged into a single `INVALID` token.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    source: &'a str,
    base: TextSize,
    peeked: Option<(TokenKind, Range<usize>)>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, TextSize::new(0))
    }

    /// Lex `input` as if it started at `base` in a larger buffer.
    pub fn with_offset(input: &'a str, base: TextSize) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            source: input,
            base,
            peeked: None,
        }
    }

    fn next_raw(&mut self) -> Option<(TokenKind, Range<usize>)> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        let logos_token = self.inner.next()?;
        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::INVALID,
        };
        Some((kind, self.inner.span()))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, mut span) = self.next_raw()?;

        if kind == TokenKind::INVALID {
            while let Some((next_kind, next_span)) = self.next_raw() {
                if next_kind == TokenKind::INVALID && next_span.start == span.end {
                    span.end = next_span.end;
                } else {
                    self.peeked = Some((next_kind, next_span));
                    break;
                }
            }
        }

        let offset = self.base + TextSize::new(span.start as u32);
        let text = &self.source[span];
        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Render the tokens of `input` as `<offset> <LABEL>` lines.
pub fn dump_tokens(input: &str) -> String {
    let mut out = String::new();
    for token in Lexer::new(input) {
        let _ = writeln!(out, "{} {}", u32::from(token.offset), token.kind);
    }
    out
}

/// Scan the rest of a `"` string literal.
///
/// A backslash escapes the next character unless it is a line break.
/// Without a closing quote only the opening `"` is consumed, and logos
/// reports it as an error so lexing resumes right after it.
fn lex_string(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return true;
            }
            '\\' => match chars.next() {
                Some((_, '\n' | '\r')) | None => return false,
                Some(_) => {}
            },
            _ => {}
        }
    }
    false
}

/// Same recovery as strings: an unclosed `/*` is a bad delimiter, not a
/// comment running to the end of the range.
fn lex_block_comment(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Consume an optional `.digits` fraction after the integer part.
fn lex_number(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder().as_bytes();
    if rest.first() == Some(&b'.') {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            lex.bump(1 + digits);
        }
    }
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r]+")]
    Space,

    #[token("\n")]
    Newline,

    // Includes the terminating newline
    #[regex(r"//[^\n]*\n?", allow_greedy = true)]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"([a-zA-Z]|[^\x00-\x7F])([a-zA-Z0-9_]|[^\x00-\x7F])*")]
    Ident,

    #[regex(r"[0-9]+", lex_number)]
    Number,

    #[token("\"", lex_string)]
    String,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("if")]
    IfKw,
    #[token("else")]
    ElseKw,
    #[token("for")]
    ForKw,
    #[token("while")]
    WhileKw,
    #[token("loop")]
    LoopKw,
    #[token("fn")]
    FnKw,
    #[token("let")]
    LetKw,
    #[token("const")]
    ConstKw,
    #[token("return")]
    ReturnKw,
    #[token("continue")]
    ContinueKw,
    #[token("break")]
    BreakKw,
    #[token("null")]
    NullKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("and")]
    AndKw,
    #[token("or")]
    OrKw,
    #[token("xor")]
    XorKw,
    #[token("not")]
    NotKw,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS
    // =========================================================================
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("%")]
    Percent,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,
    #[token("~")]
    Tilde,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("!")]
    Bang,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Space => TokenKind::SPACE,
            Newline => TokenKind::NEWLINE,
            LineComment => TokenKind::COMMENT,
            BlockComment => TokenKind::COMMENT,

            Ident => TokenKind::IDENTIFIER,
            Number => TokenKind::NUMBER,
            String => TokenKind::STRING,

            IfKw => TokenKind::IF,
            ElseKw => TokenKind::ELSE,
            ForKw => TokenKind::FOR,
            WhileKw => TokenKind::WHILE,
            LoopKw => TokenKind::LOOP,
            FnKw => TokenKind::FN,
            LetKw => TokenKind::LET,
            ConstKw => TokenKind::CONST,
            ReturnKw => TokenKind::RETURN,
            ContinueKw => TokenKind::CONTINUE,
            BreakKw => TokenKind::BREAK,
            NullKw => TokenKind::THE_NULL,
            TrueKw => TokenKind::TRUE,
            FalseKw => TokenKind::FALSE,
            AndKw => TokenKind::AND,
            OrKw => TokenKind::OR,
            XorKw => TokenKind::XOR,
            NotKw => TokenKind::NOT,

            PlusEq => TokenKind::ASSIGN_ADD,
            MinusEq => TokenKind::ASSIGN_SUB,
            StarEq => TokenKind::ASSIGN_MUL,
            SlashEq => TokenKind::ASSIGN_DIV,
            PercentEq => TokenKind::ASSIGN_REMAINDER,
            PlusPlus => TokenKind::ADD_ADD,
            MinusMinus => TokenKind::SUB_SUB,
            LtLt => TokenKind::LEFT_SHIFT,
            GtGt => TokenKind::RIGHT_SHIFT,
            EqEq => TokenKind::EQUALS,
            BangEq => TokenKind::NOT_EQUALS,
            GtEq => TokenKind::GREATER_EQUALS,
            LtEq => TokenKind::LESS_EQUALS,

            LParen => TokenKind::LEFT_PAR,
            RParen => TokenKind::RIGHT_PAR,
            LBrace => TokenKind::LEFT_BRACE,
            RBrace => TokenKind::RIGHT_BRACE,
            LBracket => TokenKind::LEFT_BRACKET,
            RBracket => TokenKind::RIGHT_BRACKET,
            Comma => TokenKind::COMMA,
            Semicolon => TokenKind::SEMICOLON,
            Colon => TokenKind::COLON,
            Dot => TokenKind::DOT,
            Eq => TokenKind::ASSIGN,
            Star => TokenKind::MUL,
            Slash => TokenKind::DIV,
            Plus => TokenKind::ADD,
            Minus => TokenKind::SUB,
            Percent => TokenKind::REMAINDER,
            Pipe => TokenKind::BIT_OR,
            Caret => TokenKind::BIT_XOR,
            Amp => TokenKind::BIT_AND,
            Tilde => TokenKind::TILDE,
            Gt => TokenKind::GREATER,
            Lt => TokenKind::LESS,
            Bang => TokenKind::BANG,
        }
    }
}
