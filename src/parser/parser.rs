//! Recursive descent parser for Swift
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! All grammar rules live in the `grammar` modules; this file owns the token
//! cursor and the tree builder and exposes them through [`BaseParser`].

use super::grammar::{self, BaseParser};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Swift source code into a CST rooted at `SOURCE_FILE`
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, input.len());
    grammar::parse_source_file(&mut parser);
    parser.finish()
}

/// Parse a standalone type (`[String: Int]?`) into a CST rooted at `TYPE_ROOT`
pub fn parse_type_text(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, input.len());
    grammar::parse_type_root(&mut parser);
    parser.finish()
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    input_len: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], input_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            input_len,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Index of the nth significant token at or after the cursor
    fn nth_index(&self, n: usize) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .skip(self.pos)
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(idx, _)| idx)
    }

    fn end_offset(&self) -> TextSize {
        TextSize::new(self.input_len as u32)
    }
}

impl BaseParser for Parser<'_> {
    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_token_text(&self) -> Option<&str> {
        self.current().map(|t| t.text)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        self.current().is_some_and(|t| kinds.contains(&t.kind))
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn get_pos(&self) -> usize {
        self.pos
    }

    fn peek_kind(&self, n: usize) -> SyntaxKind {
        self.nth_index(n)
            .map(|idx| self.tokens[idx].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn peek_text(&self, n: usize) -> &str {
        self.nth_index(n).map(|idx| self.tokens[idx].text).unwrap_or("")
    }

    fn newline_before(&self, n: usize) -> bool {
        let Some(idx) = self.nth_index(n) else {
            return false;
        };
        self.tokens[self.pos..idx]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.text.contains('\n'))
    }

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.bump();
        }
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn error(&mut self, message: String) {
        let range = self
            .nth_index(0)
            .map(|idx| {
                let token = &self.tokens[idx];
                TextRange::at(token.offset, TextSize::of(token.text))
            })
            .unwrap_or_else(|| TextRange::empty(self.end_offset()));
        self.errors.push(SyntaxError::new(message, range));
    }
}
