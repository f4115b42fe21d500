use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::MK_LOOKUP;
use crate::MK_MUNCH;

/// Reserved words of the language. Lexemes are disjoint from the symbol and
/// operator tables.
pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("as", Keyword::As),
    ("else", Keyword::Else),
    ("enum", Keyword::Enum),
    ("exposing", Keyword::Exposing),
    ("ext", Keyword::Ext),
    ("fun", Keyword::Fun),
    ("if", Keyword::If),
    ("import", Keyword::Import),
    ("is", Keyword::Is),
    ("let", Keyword::Let),
    ("pub", Keyword::Pub),
    ("ret", Keyword::Ret),
    ("run", Keyword::Run),
    ("then", Keyword::Then),
    ("where", Keyword::Where),
];

pub const SYMBOLS: &[(&str, Symbol)] = &[
    ("(", Symbol::LParen),
    (")", Symbol::RParen),
    ("[", Symbol::LBracket),
    ("]", Symbol::RBracket),
    ("{", Symbol::LBrace),
    ("}", Symbol::RBrace),
    (",", Symbol::Comma),
    (":", Symbol::Colon),
    (";", Symbol::Semicolon),
    (".", Symbol::Dot),
    ("_", Symbol::Underscore),
];

pub const OPERATORS: &[(&str, Operator)] = &[
    ("|>", Operator::Pipe),
    (">>", Operator::Compose),
    ("==", Operator::Eq),
    ("!=", Operator::NotEq),
    ("<=", Operator::Lte),
    (">=", Operator::Gte),
    ("++", Operator::Concat),
    ("::", Operator::Cons),
    ("..", Operator::Spread),
    ("=>", Operator::Arrow),
    ("<", Operator::Lt),
    (">", Operator::Gt),
    ("+", Operator::Add),
    ("-", Operator::Sub),
    ("*", Operator::Mul),
    ("/", Operator::Div),
    ("^", Operator::Pow),
    ("%", Operator::Mod),
    ("=", Operator::Assign),
    ("&", Operator::And),
    ("|", Operator::Or),
];

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = MK_LOOKUP!(KEYWORDS);
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, Symbol> = MK_LOOKUP!(SYMBOLS);
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, Operator> = MK_LOOKUP!(OPERATORS);

    /// Trial orders for maximal munch: longest lexemes first.
    pub static ref KEYWORD_MUNCH: Vec<(&'static str, Keyword)> = MK_MUNCH!(KEYWORDS);
    pub static ref SYMBOL_MUNCH: Vec<(&'static str, Symbol)> = MK_MUNCH!(SYMBOLS);
    pub static ref OPERATOR_MUNCH: Vec<(&'static str, Operator)> = MK_MUNCH!(OPERATORS);

    static ref LOWER_NAME: Regex = Regex::new("^[a-z][a-z0-9_]*$").unwrap();
    static ref UPPER_NAME: Regex = Regex::new("^[A-Z][A-Za-z0-9_]*$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    As,
    Else,
    Enum,
    Exposing,
    Ext,
    Fun,
    If,
    Import,
    Is,
    Let,
    Pub,
    Ret,
    Run,
    Then,
    Where,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Underscore,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Pipe,
    Compose,
    Eq,
    NotEq,
    Lte,
    Gte,
    Lt,
    Gt,
    Concat,
    Cons,
    Spread,
    Arrow,
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    And,
    Or,
}

/// Identifier variants. The prefix character of `Tag` and `Extern` names is
/// not stored in the payload.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Ident {
    /// A lowercase-initial binding name, e.g. `x` or `to_string`.
    Lower(String),
    /// An uppercase-initial type or namespace component, e.g. `Maybe`.
    Upper(String),
    /// An enum variant tag, written `#name` in source.
    Tag(String),
    /// An external (FFI) name, written `@name` in source.
    Extern(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    Str(String),
    /// Everything from the leading `//` up to (exclusive) the end of line.
    Comment(String),
    Keyword(Keyword),
    Symbol(Symbol),
    Operator(Operator),
    Identifier(Ident),
    Unknown(String),
}

pub fn kw_of(text: &str) -> Option<Keyword> {
    KEYWORD_LOOKUP.get(text).copied()
}

pub fn sym_of(text: &str) -> Option<Symbol> {
    SYMBOL_LOOKUP.get(text).copied()
}

pub fn op_of(text: &str) -> Option<Operator> {
    OPERATOR_LOOKUP.get(text).copied()
}

/// Classifies free text as an identifier. Reserved words and anything that
/// fits no identifier shape yield `None`.
pub fn id_of(text: &str) -> Option<Ident> {
    if let Some(name) = text.strip_prefix('#') {
        if LOWER_NAME.is_match(name) {
            return Some(Ident::Tag(name.to_string()));
        }
        return None;
    }

    if let Some(name) = text.strip_prefix('@') {
        if LOWER_NAME.is_match(name) {
            return Some(Ident::Extern(name.to_string()));
        }
        return None;
    }

    if UPPER_NAME.is_match(text) {
        return Some(Ident::Upper(text.to_string()));
    }

    if LOWER_NAME.is_match(text) && kw_of(text).is_none() {
        return Some(Ident::Lower(text.to_string()));
    }

    None
}

impl Keyword {
    pub fn lexeme(&self) -> &'static str {
        match self {
            Keyword::As => "as",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Exposing => "exposing",
            Keyword::Ext => "ext",
            Keyword::Fun => "fun",
            Keyword::If => "if",
            Keyword::Import => "import",
            Keyword::Is => "is",
            Keyword::Let => "let",
            Keyword::Pub => "pub",
            Keyword::Ret => "ret",
            Keyword::Run => "run",
            Keyword::Then => "then",
            Keyword::Where => "where",
        }
    }
}

impl Symbol {
    pub fn lexeme(&self) -> &'static str {
        match self {
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::LBracket => "[",
            Symbol::RBracket => "]",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
            Symbol::Comma => ",",
            Symbol::Colon => ":",
            Symbol::Semicolon => ";",
            Symbol::Dot => ".",
            Symbol::Underscore => "_",
        }
    }
}

impl Operator {
    pub fn lexeme(&self) -> &'static str {
        match self {
            Operator::Pipe => "|>",
            Operator::Compose => ">>",
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Concat => "++",
            Operator::Cons => "::",
            Operator::Spread => "..",
            Operator::Arrow => "=>",
            Operator::Assign => "=",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Mod => "%",
            Operator::And => "&",
            Operator::Or => "|",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ident::Lower(name) | Ident::Upper(name) => write!(f, "{}", name),
            Ident::Tag(name) => write!(f, "#{}", name),
            Ident::Extern(name) => write!(f, "@{}", name),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Str(text) => {
                write!(f, "\"")?;
                for c in text.chars() {
                    match c {
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        _ => write!(f, "{}", c)?,
                    }
                }
                write!(f, "\"")
            }
            Token::Comment(text) => write!(f, "{}", text),
            Token::Keyword(kw) => write!(f, "{}", kw),
            Token::Symbol(sym) => write!(f, "{}", sym),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Identifier(id) => write!(f, "{}", id),
            Token::Unknown(text) => write!(f, "{}", text),
        }
    }
}
