//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Only declaration-bearing structure is modelled in detail; expressions are
//! kept as opaque token runs.

/// All syntax kinds (tokens and nodes) in the Swift subset
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (declarations, types, clauses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier, `escaped`, $0
    INTEGER,            // 42, 0xFF
    FLOAT,              // 3.14
    STRING,             // "hello", """multi"""

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    L_ANGLE,            // <
    R_ANGLE,            // >
    SEMICOLON,          // ;
    COLON,              // :
    COMMA,              // ,
    DOT,                // .
    ELLIPSIS,           // ...
    HALF_OPEN_RANGE,    // ..<
    EQ,                 // =
    ARROW,              // ->
    AT,                 // @
    QUESTION,           // ?
    BANG,               // !
    AMP,                // &
    BACKSLASH,          // \
    OPERATOR,           // any other operator character run: ==, +=, ??, ...

    // =========================================================================
    // KEYWORDS - declarations
    // =========================================================================
    ASSOCIATEDTYPE_KW,
    CLASS_KW,
    DEINIT_KW,
    ENUM_KW,
    EXTENSION_KW,
    FUNC_KW,
    IMPORT_KW,
    INIT_KW,
    INOUT_KW,
    LET_KW,
    OPERATOR_KW,
    PRECEDENCEGROUP_KW,
    PROTOCOL_KW,
    STRUCT_KW,
    SUBSCRIPT_KW,
    TYPEALIAS_KW,
    VAR_KW,

    // =========================================================================
    // KEYWORDS - statements
    // =========================================================================
    CASE_KW,
    CATCH_KW,
    DEFER_KW,
    DO_KW,
    ELSE_KW,
    FOR_KW,
    GUARD_KW,
    IF_KW,
    IN_KW,
    REPEAT_KW,
    RETURN_KW,
    SWITCH_KW,
    WHERE_KW,
    WHILE_KW,

    // =========================================================================
    // KEYWORDS - effects
    // =========================================================================
    THROWS_KW,
    RETHROWS_KW,

    // =========================================================================
    // KEYWORDS - conditional compilation
    // =========================================================================
    POUND_IF,
    POUND_ELSEIF,
    POUND_ELSE,
    POUND_ENDIF,
    POUND_IDENT,        // #available, #selector, #file, ...

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,
    /// Root of a standalone type parse
    TYPE_ROOT,

    // Bodies
    MEMBER_BLOCK,
    CODE_BLOCK,

    // Shared declaration parts
    NAME,
    ATTRIBUTE_LIST,
    ATTRIBUTE,
    ATTRIBUTE_ARGUMENTS,
    MODIFIER_LIST,
    MODIFIER,
    MODIFIER_DETAIL,
    GENERIC_PARAMETER_CLAUSE,
    GENERIC_PARAMETER,
    GENERIC_WHERE_CLAUSE,
    GENERIC_REQUIREMENT,
    INHERITANCE_CLAUSE,
    INHERITED_TYPE,
    TYPE_ANNOTATION,
    TYPE_INITIALIZER,
    INITIALIZER_CLAUSE,
    FUNCTION_SIGNATURE,
    PARAMETER_CLAUSE,
    PARAMETER,
    EFFECT_SPECIFIERS,
    RETURN_CLAUSE,

    // Container declarations
    STRUCT_DECL,
    CLASS_DECL,
    ACTOR_DECL,
    ENUM_DECL,
    EXTENSION_DECL,
    PROTOCOL_DECL,

    // Leaf declarations
    FUNCTION_DECL,
    VARIABLE_DECL,
    PATTERN_BINDING,
    PATTERN,
    ACCESSOR_BLOCK,
    ACCESSOR_DECL,
    ACCESSOR_PARAMETER,
    INITIALIZER_DECL,
    DEINITIALIZER_DECL,
    SUBSCRIPT_DECL,
    TYPEALIAS_DECL,
    ASSOCIATED_TYPE_DECL,
    OPERATOR_DECL,
    OPERATOR_PRECEDENCE,
    PRECEDENCE_GROUP_DECL,
    PRECEDENCE_GROUP_ATTRIBUTE,
    IMPORT_DECL,
    IMPORT_PATH,
    ENUM_CASE_DECL,
    ENUM_CASE_ELEMENT,

    // Conditional compilation
    IF_CONFIG_DECL,
    IF_CONFIG_CLAUSE,
    IF_CONFIG_CONDITION,

    // Statements
    CONTROL_STMT,
    EXPR_STMT,
    EXPR,

    // Types
    SIMPLE_TYPE,
    MEMBER_TYPE,
    GENERIC_ARGUMENT_CLAUSE,
    GENERIC_ARGUMENT,
    ARRAY_TYPE,
    DICTIONARY_TYPE,
    TUPLE_TYPE,
    TUPLE_TYPE_ELEMENT,
    FUNCTION_TYPE,
    OPTIONAL_TYPE,
    IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE,
    ATTRIBUTED_TYPE,
    SOME_OR_ANY_TYPE,
    COMPOSITION_TYPE,
    METATYPE_TYPE,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ASSOCIATEDTYPE_KW as u16) && (self as u16) <= (Self::POUND_ENDIF as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::OPERATOR as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::IDENT | Self::INTEGER | Self::FLOAT | Self::STRING)
    }

    /// Check if this is a type node
    pub fn is_type(self) -> bool {
        (self as u16) >= (Self::SIMPLE_TYPE as u16) && (self as u16) <= (Self::METATYPE_TYPE as u16)
            && !matches!(self, Self::GENERIC_ARGUMENT_CLAUSE | Self::GENERIC_ARGUMENT | Self::TUPLE_TYPE_ELEMENT)
    }

    /// Tokens that may appear inside an operator name (`==`, `<*>`, `??`)
    pub fn is_operator_part(self) -> bool {
        matches!(
            self,
            Self::OPERATOR
                | Self::L_ANGLE
                | Self::R_ANGLE
                | Self::EQ
                | Self::QUESTION
                | Self::BANG
                | Self::AMP
                | Self::DOT
                | Self::ELLIPSIS
                | Self::HALF_OPEN_RANGE
        )
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::IDENT => "identifier",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_ANGLE => "'<'",
            Self::R_ANGLE => "'>'",
            Self::COLON => "':'",
            Self::COMMA => "','",
            Self::EQ => "'='",
            Self::ARROW => "'->'",
            Self::POUND_ENDIF => "'#endif'",
            Self::ERROR => "error",
            _ if self.is_keyword() => "keyword",
            _ if self.is_punct() => "punctuation",
            _ => "token",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SwiftLanguage {}

impl rowan::Language for SwiftLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<SwiftLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<SwiftLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<SwiftLanguage>;
