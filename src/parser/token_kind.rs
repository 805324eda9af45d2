//! Token kinds produced by the nlang tokenizer
//!
//! Each kind has a stable SCREAMING_CASE label. Labels are the vocabulary
//! shared with highlighters and other consumers that only see strings.

use std::fmt;

/// All token kinds of the nlang lexical grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    SPACE = 0,
    NEWLINE,
    COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENTIFIER,
    STRING,
    NUMBER,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    IF,
    ELSE,
    FOR,
    WHILE,
    LOOP,
    FN,
    LET,
    CONST,
    RETURN,
    CONTINUE,
    BREAK,
    THE_NULL,
    TRUE,
    FALSE,
    AND,
    OR,
    XOR,
    NOT,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    LEFT_PAR,      // (
    RIGHT_PAR,     // )
    LEFT_BRACE,    // {
    RIGHT_BRACE,   // }
    LEFT_BRACKET,  // [
    RIGHT_BRACKET, // ]
    COMMA,         // ,
    SEMICOLON,     // ;
    COLON,         // :
    DOT,           // .

    // =========================================================================
    // OPERATORS
    // =========================================================================
    ASSIGN,           // =
    ASSIGN_ADD,       // +=
    ASSIGN_SUB,       // -=
    ASSIGN_MUL,       // *=
    ASSIGN_DIV,       // /=
    ASSIGN_REMAINDER, // %=
    MUL,              // *
    DIV,              // /
    ADD,              // +
    SUB,              // -
    REMAINDER,        // %
    ADD_ADD,          // ++
    SUB_SUB,          // --
    BIT_OR,           // |
    BIT_XOR,          // ^
    BIT_AND,          // &
    TILDE,            // ~
    LEFT_SHIFT,       // <<
    RIGHT_SHIFT,      // >>
    EQUALS,           // ==
    NOT_EQUALS,       // !=
    GREATER,          // >
    GREATER_EQUALS,   // >=
    LESS,             // <
    LESS_EQUALS,      // <=
    BANG,             // !

    // Malformed input: unterminated literals, stray characters
    INVALID,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        Self::SPACE,
        Self::NEWLINE,
        Self::COMMENT,
        Self::IDENTIFIER,
        Self::STRING,
        Self::NUMBER,
        Self::IF,
        Self::ELSE,
        Self::FOR,
        Self::WHILE,
        Self::LOOP,
        Self::FN,
        Self::LET,
        Self::CONST,
        Self::RETURN,
        Self::CONTINUE,
        Self::BREAK,
        Self::THE_NULL,
        Self::TRUE,
        Self::FALSE,
        Self::AND,
        Self::OR,
        Self::XOR,
        Self::NOT,
        Self::LEFT_PAR,
        Self::RIGHT_PAR,
        Self::LEFT_BRACE,
        Self::RIGHT_BRACE,
        Self::LEFT_BRACKET,
        Self::RIGHT_BRACKET,
        Self::COMMA,
        Self::SEMICOLON,
        Self::COLON,
        Self::DOT,
        Self::ASSIGN,
        Self::ASSIGN_ADD,
        Self::ASSIGN_SUB,
        Self::ASSIGN_MUL,
        Self::ASSIGN_DIV,
        Self::ASSIGN_REMAINDER,
        Self::MUL,
        Self::DIV,
        Self::ADD,
        Self::SUB,
        Self::REMAINDER,
        Self::ADD_ADD,
        Self::SUB_SUB,
        Self::BIT_OR,
        Self::BIT_XOR,
        Self::BIT_AND,
        Self::TILDE,
        Self::LEFT_SHIFT,
        Self::RIGHT_SHIFT,
        Self::EQUALS,
        Self::NOT_EQUALS,
        Self::GREATER,
        Self::GREATER_EQUALS,
        Self::LESS,
        Self::LESS_EQUALS,
        Self::BANG,
        Self::INVALID,
    ];

    /// The label of this kind, e.g. `"LEFT_PAR"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::SPACE => "SPACE",
            Self::NEWLINE => "NEWLINE",
            Self::COMMENT => "COMMENT",
            Self::IDENTIFIER => "IDENTIFIER",
            Self::STRING => "STRING",
            Self::NUMBER => "NUMBER",
            Self::IF => "IF",
            Self::ELSE => "ELSE",
            Self::FOR => "FOR",
            Self::WHILE => "WHILE",
            Self::LOOP => "LOOP",
            Self::FN => "FN",
            Self::LET => "LET",
            Self::CONST => "CONST",
            Self::RETURN => "RETURN",
            Self::CONTINUE => "CONTINUE",
            Self::BREAK => "BREAK",
            Self::THE_NULL => "THE_NULL",
            Self::TRUE => "TRUE",
            Self::FALSE => "FALSE",
            Self::AND => "AND",
            Self::OR => "OR",
            Self::XOR => "XOR",
            Self::NOT => "NOT",
            Self::LEFT_PAR => "LEFT_PAR",
            Self::RIGHT_PAR => "RIGHT_PAR",
            Self::LEFT_BRACE => "LEFT_BRACE",
            Self::RIGHT_BRACE => "RIGHT_BRACE",
            Self::LEFT_BRACKET => "LEFT_BRACKET",
            Self::RIGHT_BRACKET => "RIGHT_BRACKET",
            Self::COMMA => "COMMA",
            Self::SEMICOLON => "SEMICOLON",
            Self::COLON => "COLON",
            Self::DOT => "DOT",
            Self::ASSIGN => "ASSIGN",
            Self::ASSIGN_ADD => "ASSIGN_ADD",
            Self::ASSIGN_SUB => "ASSIGN_SUB",
            Self::ASSIGN_MUL => "ASSIGN_MUL",
            Self::ASSIGN_DIV => "ASSIGN_DIV",
            Self::ASSIGN_REMAINDER => "ASSIGN_REMAINDER",
            Self::MUL => "MUL",
            Self::DIV => "DIV",
            Self::ADD => "ADD",
            Self::SUB => "SUB",
            Self::REMAINDER => "REMAINDER",
            Self::ADD_ADD => "ADD_ADD",
            Self::SUB_SUB => "SUB_SUB",
            Self::BIT_OR => "BIT_OR",
            Self::BIT_XOR => "BIT_XOR",
            Self::BIT_AND => "BIT_AND",
            Self::TILDE => "TILDE",
            Self::LEFT_SHIFT => "LEFT_SHIFT",
            Self::RIGHT_SHIFT => "RIGHT_SHIFT",
            Self::EQUALS => "EQUALS",
            Self::NOT_EQUALS => "NOT_EQUALS",
            Self::GREATER => "GREATER",
            Self::GREATER_EQUALS => "GREATER_EQUALS",
            Self::LESS => "LESS",
            Self::LESS_EQUALS => "LESS_EQUALS",
            Self::BANG => "BANG",
            Self::INVALID => "INVALID",
        }
    }

    /// Look a kind up by its label. Returns `None` for unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.label() == label)
    }

    /// Check if this is a trivia token (space, newline or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::SPACE | Self::NEWLINE | Self::COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u8) >= (Self::IF as u8) && (self as u8) <= (Self::NOT as u8)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u8) >= (Self::LEFT_PAR as u8) && (self as u8) <= (Self::DOT as u8)
    }

    /// Check if this is an operator
    pub fn is_operator(self) -> bool {
        (self as u8) >= (Self::ASSIGN as u8) && (self as u8) <= (Self::BANG as u8)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::IDENTIFIER | Self::STRING | Self::NUMBER)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
