use rustc_hash::FxHashMap;
use std::{
    fmt::{self, Display},
    rc::Rc,
    sync::OnceLock,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Rc<str>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<Rc<str>>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Illegal,

    Ident,
    IntData,
    Int16Data,
    FloatData,
    StringData,

    Assign,
    Eq,
    NotEq,
    Bang,
    Lt,
    Gt,
    LTensor,
    RTensor,

    Plus,
    Minus,
    Slash,
    Asterisk,

    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Never produced by the scanner; the parser builds these for postfix and ternary nodes.
    Increment,
    Decrement,
    Question,
    Colon,

    StringDec,
    IntDec,
    FloatDec,
    VectorDec,
    MatrixDec,
    Global,
    Proc,
    Return,
    If,
    Else,
    For,
    In,
    While,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    True,
    False,
}

const KEYWORDS: [(&str, TokenKind); 21] = [
    ("string", TokenKind::StringDec),
    ("int", TokenKind::IntDec),
    ("float", TokenKind::FloatDec),
    ("vector", TokenKind::VectorDec),
    ("matrix", TokenKind::MatrixDec),
    ("global", TokenKind::Global),
    ("proc", TokenKind::Proc),
    ("return", TokenKind::Return),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.into_iter().collect())
}

/// Classifies a bareword: the keyword's kind if it is one, `Ident` otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Eof => "end of input",
            Self::Illegal => "illegal character",
            Self::Ident => "identifier",
            Self::IntData => "integer",
            Self::Int16Data => "hexadecimal integer",
            Self::FloatData => "float",
            Self::StringData => "string literal",
            Self::Assign => "=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Bang => "!",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LTensor => "<<",
            Self::RTensor => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Slash => "/",
            Self::Asterisk => "*",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Question => "?",
            Self::Colon => ":",
            Self::StringDec => "string",
            Self::IntDec => "int",
            Self::FloatDec => "float",
            Self::VectorDec => "vector",
            Self::MatrixDec => "matrix",
            Self::Global => "global",
            Self::Proc => "proc",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::In => "in",
            Self::While => "while",
            Self::Do => "do",
            Self::Switch => "switch",
            Self::Case => "case",
            Self::Default => "default",
            Self::Break => "break",
            Self::Continue => "continue",
            Self::True => "true",
            Self::False => "false",
        };
        write!(f, "{text}")
    }
}
