//! Logos-based lexer for Swift
//!
//! Fast tokenization using the logos crate. Contextual keywords
//! (`get`, `mutating`, `actor`, `some`, ...) are lexed as identifiers and
//! recognised by text in the parser.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Scan the remainder of a string literal whose opening delimiter was just
/// consumed. Returns the byte length up to and including the closing
/// delimiter, following `\( ... )` interpolations so that quotes nested in
/// them do not terminate the literal.
fn scan_string(rest: &str, quote: &str, hashes: usize) -> Option<usize> {
    let bytes = rest.as_bytes();
    let multiline = quote.len() == 3;
    let mut close = String::from(quote);
    close.extend(std::iter::repeat_n('#', hashes));
    let mut escape = String::from("\\");
    escape.extend(std::iter::repeat_n('#', hashes));

    // Matching is done on bytes; `rest` is only sliced right after an ASCII byte
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(close.as_bytes()) {
            return Some(i + close.len());
        }
        if bytes[i..].starts_with(escape.as_bytes()) {
            let after = i + escape.len();
            if bytes.get(after) == Some(&b'(') {
                i = after + 1 + scan_interpolation(&rest[after + 1..])?;
            } else {
                // Skip the escaped byte; continuation bytes never match a delimiter
                i = after + 1;
            }
            continue;
        }
        if !multiline && bytes[i] == b'\n' {
            return None;
        }
        i += 1;
    }
    None
}

/// Scan an interpolation body up to and including its closing `)`.
fn scan_interpolation(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            b'"' => {
                i += 1 + scan_string(&rest[i + 1..], "\"", 0)?;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn lex_string(lex: &mut logos::Lexer<'_, LogosToken>, quote: &str, hashes: usize) -> bool {
    match scan_string(lex.remainder(), quote, hashes) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

/// Swift block comments nest. Consumes through the `*/` matching the
/// opening `/*`; an unterminated comment runs to the end of input and is an
/// error token.
fn lex_block_comment(lex: &mut logos::Lexer<'_, LogosToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"/*") {
            depth += 1;
            i += 2;
        } else if bytes[i..].starts_with(b"*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                lex.bump(i);
                return true;
            }
        } else {
            i += 1;
        }
    }
    lex.bump(bytes.len());
    false
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    #[regex(r"`[^`\n]+`")]
    #[regex(r"\$[a-zA-Z0-9_]+")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0x[0-9a-fA-F_]+")]
    #[regex(r"0b[01_]+")]
    #[regex(r"0o[0-7_]+")]
    Integer,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Float,

    #[token("\"", |lex| lex_string(lex, "\"", 0))]
    #[token("\"\"\"", |lex| lex_string(lex, "\"\"\"", 0))]
    #[token("#\"", |lex| lex_string(lex, "\"", 1))]
    String,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("->")]
    Arrow,

    #[token("...")]
    Ellipsis,

    #[token("..<")]
    HalfOpenRange,

    /// Operator character runs. `<`, `>` and `?` are always lexed alone so
    /// that `Array<Array<Int>>` and `Int??` split into their type markers.
    #[regex(r"[/=\-+!*%&|\^~]+")]
    Operator,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    LAngle,
    #[token(">")]
    RAngle,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=", priority = 3)]
    Eq,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token("!", priority = 3)]
    Bang,
    #[token("&", priority = 3)]
    Amp,
    #[token("\\")]
    Backslash,

    // =========================================================================
    // CONDITIONAL COMPILATION
    // =========================================================================
    #[token("#if")]
    PoundIf,
    #[token("#elseif")]
    PoundElseif,
    #[token("#else")]
    PoundElse,
    #[token("#endif")]
    PoundEndif,
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_]*")]
    PoundIdent,

    // =========================================================================
    // KEYWORDS (alphabetical, longest match wins in logos)
    // =========================================================================
    #[token("associatedtype")]
    AssociatedtypeKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("class")]
    ClassKw,
    #[token("defer")]
    DeferKw,
    #[token("deinit")]
    DeinitKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("extension")]
    ExtensionKw,
    #[token("for")]
    ForKw,
    #[token("func")]
    FuncKw,
    #[token("guard")]
    GuardKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("init")]
    InitKw,
    #[token("inout")]
    InoutKw,
    #[token("let")]
    LetKw,
    #[token("operator")]
    OperatorKw,
    #[token("precedencegroup")]
    PrecedencegroupKw,
    #[token("protocol")]
    ProtocolKw,
    #[token("repeat")]
    RepeatKw,
    #[token("rethrows")]
    RethrowsKw,
    #[token("return")]
    ReturnKw,
    #[token("struct")]
    StructKw,
    #[token("subscript")]
    SubscriptKw,
    #[token("switch")]
    SwitchKw,
    #[token("throws")]
    ThrowsKw,
    #[token("typealias")]
    TypealiasKw,
    #[token("var")]
    VarKw,
    #[token("where")]
    WhereKw,
    #[token("while")]
    WhileKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            Float => SyntaxKind::FLOAT,
            String => SyntaxKind::STRING,

            // Multi-char punctuation
            Arrow => SyntaxKind::ARROW,
            Ellipsis => SyntaxKind::ELLIPSIS,
            HalfOpenRange => SyntaxKind::HALF_OPEN_RANGE,
            Operator => SyntaxKind::OPERATOR,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LAngle => SyntaxKind::L_ANGLE,
            RAngle => SyntaxKind::R_ANGLE,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            At => SyntaxKind::AT,
            Question => SyntaxKind::QUESTION,
            Bang => SyntaxKind::BANG,
            Amp => SyntaxKind::AMP,
            Backslash => SyntaxKind::BACKSLASH,

            // Conditional compilation
            PoundIf => SyntaxKind::POUND_IF,
            PoundElseif => SyntaxKind::POUND_ELSEIF,
            PoundElse => SyntaxKind::POUND_ELSE,
            PoundEndif => SyntaxKind::POUND_ENDIF,
            PoundIdent => SyntaxKind::POUND_IDENT,

            // Keywords
            AssociatedtypeKw => SyntaxKind::ASSOCIATEDTYPE_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            DeferKw => SyntaxKind::DEFER_KW,
            DeinitKw => SyntaxKind::DEINIT_KW,
            DoKw => SyntaxKind::DO_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            ExtensionKw => SyntaxKind::EXTENSION_KW,
            ForKw => SyntaxKind::FOR_KW,
            FuncKw => SyntaxKind::FUNC_KW,
            GuardKw => SyntaxKind::GUARD_KW,
            IfKw => SyntaxKind::IF_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InKw => SyntaxKind::IN_KW,
            InitKw => SyntaxKind::INIT_KW,
            InoutKw => SyntaxKind::INOUT_KW,
            LetKw => SyntaxKind::LET_KW,
            OperatorKw => SyntaxKind::OPERATOR_KW,
            PrecedencegroupKw => SyntaxKind::PRECEDENCEGROUP_KW,
            ProtocolKw => SyntaxKind::PROTOCOL_KW,
            RepeatKw => SyntaxKind::REPEAT_KW,
            RethrowsKw => SyntaxKind::RETHROWS_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            StructKw => SyntaxKind::STRUCT_KW,
            SubscriptKw => SyntaxKind::SUBSCRIPT_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            ThrowsKw => SyntaxKind::THROWS_KW,
            TypealiasKw => SyntaxKind::TYPEALIAS_KW,
            VarKw => SyntaxKind::VAR_KW,
            WhereKw => SyntaxKind::WHERE_KW,
            WhileKw => SyntaxKind::WHILE_KW,
        }
    }
}
