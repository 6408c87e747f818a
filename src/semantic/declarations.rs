//! Declaration model
//!
//! One struct per declaration category, each wrapping its typed AST node.
//! Every derived property is recomputed from the node on read. Declarations
//! that own a body region also own the [`DeclarationCollection`] collected
//! from it.

use rowan::TextRange;
use unicode_ident::is_xid_start;

use super::collection::DeclarationCollection;
use super::entity_type::{EntityType, Parameter};
use super::resolvers::{
    Accessor, AccessorKind, Associativity, Attribute, BranchKeyword, Fixity, FunctionSignature,
    GenericParameter, GenericRequirement, Modifier, accessors_of, attributes_of, generic_parameters_of,
    generic_requirements_of, inheritance_of, modifiers_of, parameters_of, signature_of,
};
use crate::parser::SyntaxNode;
use crate::parser::ast::{self, AstNode};

/// Declaration category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DeclarationKind {
    Structure,
    Class,
    Actor,
    Enumeration,
    Extension,
    Protocol,
    Function,
    Variable,
    Initializer,
    Deinitializer,
    Subscript,
    Typealias,
    Operator,
    PrecedenceGroup,
    Import,
    AssociatedType,
    EnumCase,
    ConditionalCompilationBlock,
}

impl DeclarationKind {
    pub const ALL: [DeclarationKind; 18] = [
        Self::Structure,
        Self::Class,
        Self::Actor,
        Self::Enumeration,
        Self::Extension,
        Self::Protocol,
        Self::Function,
        Self::Variable,
        Self::Initializer,
        Self::Deinitializer,
        Self::Subscript,
        Self::Typealias,
        Self::Operator,
        Self::PrecedenceGroup,
        Self::Import,
        Self::AssociatedType,
        Self::EnumCase,
        Self::ConditionalCompilationBlock,
    ];

    /// Kinds that own a member block
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Structure
                | Self::Class
                | Self::Actor
                | Self::Enumeration
                | Self::Extension
                | Self::Protocol
        )
    }

    /// Introducing keyword as written in source
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Structure => "struct",
            Self::Class => "class",
            Self::Actor => "actor",
            Self::Enumeration => "enum",
            Self::Extension => "extension",
            Self::Protocol => "protocol",
            Self::Function => "func",
            Self::Variable => "var",
            Self::Initializer => "init",
            Self::Deinitializer => "deinit",
            Self::Subscript => "subscript",
            Self::Typealias => "typealias",
            Self::Operator => "operator",
            Self::PrecedenceGroup => "precedencegroup",
            Self::Import => "import",
            Self::AssociatedType => "associatedtype",
            Self::EnumCase => "case",
            Self::ConditionalCompilationBlock => "#if",
        }
    }
}

/// Capabilities shared by every declaration
pub trait DeclarationNode {
    /// The node this declaration covers. Attributes are included; leading
    /// comments are not.
    fn syntax(&self) -> &SyntaxNode;

    fn kind(&self) -> DeclarationKind;

    fn attributes(&self) -> Vec<Attribute> {
        Vec::new()
    }

    fn modifiers(&self) -> Vec<Modifier> {
        Vec::new()
    }

    fn range(&self) -> TextRange {
        self.syntax().text_range()
    }

    /// Verbatim source of the declaration
    fn description(&self) -> String {
        self.syntax().text().to_string()
    }

    /// Collections owned by this declaration, in source order
    fn nested(&self) -> Vec<&DeclarationCollection> {
        Vec::new()
    }

    fn has_modifier(&self, name: &str) -> bool {
        self.modifiers().iter().any(|m| m.is(name))
    }
}

/// Declarations with a name
pub trait Named {
    /// Declared name; empty when the source omits it
    fn name(&self) -> String;
}

fn name_of(name: Option<ast::Name>) -> String {
    name.map(|n| n.text()).unwrap_or_default()
}

/// `DeclarationNode` for a struct whose `node` field carries the attribute
/// and modifier lists
macro_rules! declaration_node {
    ($name:ident, $kind:ident $(, $nested:ident)*) => {
        impl DeclarationNode for $name {
            fn syntax(&self) -> &SyntaxNode {
                self.node.syntax()
            }

            fn kind(&self) -> DeclarationKind {
                DeclarationKind::$kind
            }

            fn attributes(&self) -> Vec<Attribute> {
                attributes_of(self.node.attribute_list())
            }

            fn modifiers(&self) -> Vec<Modifier> {
                modifiers_of(self.node.modifier_list())
            }

            fn nested(&self) -> Vec<&DeclarationCollection> {
                vec![$(&self.$nested),*]
            }
        }
    };
}

// ============================================================================
// Containers
// ============================================================================

macro_rules! container_declaration {
    ($(#[$meta:meta])* $name:ident, $ast:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            node: ast::$ast,
            members: DeclarationCollection,
        }

        impl $name {
            pub(crate) fn new(node: ast::$ast, members: DeclarationCollection) -> Self {
                Self { node, members }
            }

            pub fn node(&self) -> &ast::$ast {
                &self.node
            }

            /// Declarations inside the member block
            pub fn members(&self) -> &DeclarationCollection {
                &self.members
            }

            pub fn generic_parameters(&self) -> Vec<GenericParameter> {
                generic_parameters_of(self.node.generic_parameter_clause())
            }

            pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
                generic_requirements_of(self.node.generic_where_clause())
            }

            pub fn inheritance(&self) -> Vec<String> {
                inheritance_of(self.node.inheritance_clause())
            }
        }

        impl Named for $name {
            fn name(&self) -> String {
                name_of(self.node.name())
            }
        }

        declaration_node!($name, $name, members);
    };
}

container_declaration!(
    /// `struct`
    Structure,
    StructDecl
);
container_declaration!(
    /// `class`
    Class,
    ClassDecl
);
container_declaration!(
    /// `actor`
    Actor,
    ActorDecl
);
container_declaration!(
    /// `enum`
    Enumeration,
    EnumDecl
);
container_declaration!(
    /// `protocol`
    Protocol,
    ProtocolDecl
);

impl Enumeration {
    /// Case elements in source order
    pub fn cases(&self) -> impl Iterator<Item = &EnumCase> + '_ {
        self.members.enum_cases()
    }
}

impl Protocol {
    /// `Element` in `protocol Container<Element>`
    pub fn primary_associated_types(&self) -> Vec<String> {
        self.generic_parameters().into_iter().map(|p| p.name).collect()
    }
}

/// `extension`
#[derive(Debug, Clone)]
pub struct Extension {
    node: ast::ExtensionDecl,
    members: DeclarationCollection,
}

impl Extension {
    pub(crate) fn new(node: ast::ExtensionDecl, members: DeclarationCollection) -> Self {
        Self { node, members }
    }

    pub fn node(&self) -> &ast::ExtensionDecl {
        &self.node
    }

    pub fn members(&self) -> &DeclarationCollection {
        &self.members
    }

    pub fn extended_type(&self) -> EntityType {
        EntityType::from_type(self.node.extended_type())
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }

    pub fn inheritance(&self) -> Vec<String> {
        inheritance_of(self.node.inheritance_clause())
    }
}

impl Named for Extension {
    /// Extended type as written
    fn name(&self) -> String {
        self.node.extended_type().map(|t| t.text()).unwrap_or_default()
    }
}

declaration_node!(Extension, Extension, members);

// ============================================================================
// Functions, initializers, subscripts
// ============================================================================

/// `func`
#[derive(Debug, Clone)]
pub struct Function {
    node: ast::FunctionDecl,
    locals: DeclarationCollection,
}

impl Function {
    pub(crate) fn new(node: ast::FunctionDecl, locals: DeclarationCollection) -> Self {
        Self { node, locals }
    }

    pub fn node(&self) -> &ast::FunctionDecl {
        &self.node
    }

    pub fn signature(&self) -> FunctionSignature {
        signature_of(self.node.signature())
    }

    pub fn generic_parameters(&self) -> Vec<GenericParameter> {
        generic_parameters_of(self.node.generic_parameter_clause())
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }

    /// `func ==`, `static func +`, ...
    pub fn is_operator(&self) -> bool {
        self.name()
            .chars()
            .next()
            .is_some_and(|c| !(is_xid_start(c) || c == '_' || c == '`'))
    }

    pub fn is_static(&self) -> bool {
        self.has_modifier("static") || self.has_modifier("class")
    }

    /// False for protocol requirements
    pub fn has_body(&self) -> bool {
        self.node.body().is_some()
    }

    /// Declarations local to the body
    pub fn locals(&self) -> &DeclarationCollection {
        &self.locals
    }
}

impl Named for Function {
    fn name(&self) -> String {
        name_of(self.node.name())
    }
}

declaration_node!(Function, Function, locals);

/// `init`
#[derive(Debug, Clone)]
pub struct Initializer {
    node: ast::InitializerDecl,
    locals: DeclarationCollection,
}

impl Initializer {
    pub(crate) fn new(node: ast::InitializerDecl, locals: DeclarationCollection) -> Self {
        Self { node, locals }
    }

    pub fn node(&self) -> &ast::InitializerDecl {
        &self.node
    }

    /// `init?`
    pub fn is_optional(&self) -> bool {
        self.node.is_failable()
    }

    /// `init!`
    pub fn is_implicitly_unwrapped(&self) -> bool {
        self.node.is_implicitly_unwrapped()
    }

    pub fn is_convenience(&self) -> bool {
        self.has_modifier("convenience")
    }

    /// Parameters and effects; the output is always `Empty`
    pub fn signature(&self) -> FunctionSignature {
        signature_of(self.node.signature())
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        self.signature().parameters
    }

    pub fn generic_parameters(&self) -> Vec<GenericParameter> {
        generic_parameters_of(self.node.generic_parameter_clause())
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }

    pub fn locals(&self) -> &DeclarationCollection {
        &self.locals
    }
}

impl Named for Initializer {
    fn name(&self) -> String {
        "init".to_string()
    }
}

declaration_node!(Initializer, Initializer, locals);

/// `deinit`
#[derive(Debug, Clone)]
pub struct Deinitializer {
    node: ast::DeinitializerDecl,
    locals: DeclarationCollection,
}

impl Deinitializer {
    pub(crate) fn new(node: ast::DeinitializerDecl, locals: DeclarationCollection) -> Self {
        Self { node, locals }
    }

    pub fn node(&self) -> &ast::DeinitializerDecl {
        &self.node
    }

    pub fn locals(&self) -> &DeclarationCollection {
        &self.locals
    }
}

impl Named for Deinitializer {
    fn name(&self) -> String {
        "deinit".to_string()
    }
}

declaration_node!(Deinitializer, Deinitializer, locals);

/// `subscript`
#[derive(Debug, Clone)]
pub struct Subscript {
    node: ast::SubscriptDecl,
    locals: DeclarationCollection,
}

impl Subscript {
    pub(crate) fn new(node: ast::SubscriptDecl, locals: DeclarationCollection) -> Self {
        Self { node, locals }
    }

    pub fn node(&self) -> &ast::SubscriptDecl {
        &self.node
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        parameters_of(self.node.parameter_clause())
    }

    pub fn return_type(&self) -> EntityType {
        EntityType::from_type(self.node.return_clause().and_then(|r| r.ty()))
    }

    pub fn accessors(&self) -> Vec<Accessor> {
        accessors_of(self.node.accessor_block())
    }

    pub fn has_setter(&self) -> bool {
        self.accessors().iter().any(|a| a.kind == AccessorKind::Set)
    }

    pub fn generic_parameters(&self) -> Vec<GenericParameter> {
        generic_parameters_of(self.node.generic_parameter_clause())
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }

    /// Declarations local to the accessor bodies
    pub fn locals(&self) -> &DeclarationCollection {
        &self.locals
    }
}

impl Named for Subscript {
    fn name(&self) -> String {
        "subscript".to_string()
    }
}

declaration_node!(Subscript, Subscript, locals);

// ============================================================================
// Variables and enum cases
// ============================================================================

/// One binding of a `let`/`var` declaration
///
/// `var a = 1, b = 2` yields two variables. With several bindings each one
/// covers only its own binding; a single binding covers the whole declaration.
#[derive(Debug, Clone)]
pub struct Variable {
    decl: ast::VariableDecl,
    binding: Option<ast::PatternBinding>,
    is_single: bool,
    locals: DeclarationCollection,
}

impl Variable {
    pub(crate) fn new(
        decl: ast::VariableDecl,
        binding: Option<ast::PatternBinding>,
        is_single: bool,
        locals: DeclarationCollection,
    ) -> Self {
        Self {
            decl,
            binding,
            is_single,
            locals,
        }
    }

    pub fn decl(&self) -> &ast::VariableDecl {
        &self.decl
    }

    pub fn binding(&self) -> Option<&ast::PatternBinding> {
        self.binding.as_ref()
    }

    /// `let` or `var`
    pub fn keyword(&self) -> &'static str {
        if self.is_let() { "let" } else { "var" }
    }

    pub fn is_let(&self) -> bool {
        self.decl.is_let()
    }

    /// Annotated type; `Empty` when the type is inferred
    pub fn ty(&self) -> EntityType {
        EntityType::from_type(
            self.binding
                .as_ref()
                .and_then(|b| b.type_annotation())
                .and_then(|a| a.ty()),
        )
    }

    pub fn is_optional(&self) -> bool {
        self.ty().is_optional()
    }

    /// Initializer expression as written
    pub fn initialized_value(&self) -> Option<String> {
        self.binding
            .as_ref()
            .and_then(|b| b.initializer())
            .and_then(|i| i.value())
            .map(|v| v.text())
    }

    pub fn accessors(&self) -> Vec<Accessor> {
        accessors_of(self.binding.as_ref().and_then(|b| b.accessor_block()))
    }

    /// Has getter/setter accessors (observers alone keep it stored)
    pub fn is_computed(&self) -> bool {
        self.accessors().iter().any(|a| !a.kind.is_observer())
    }

    /// An explicit `set`, or a stored `var`
    pub fn has_setter(&self) -> bool {
        let accessors = self.accessors();
        if accessors.iter().any(|a| a.kind == AccessorKind::Set) {
            return true;
        }
        !self.is_let() && !accessors.iter().any(|a| !a.kind.is_observer())
    }

    pub fn is_static(&self) -> bool {
        self.has_modifier("static") || self.has_modifier("class")
    }

    /// Declarations local to accessor bodies
    pub fn locals(&self) -> &DeclarationCollection {
        &self.locals
    }
}

impl Named for Variable {
    /// Bound name, or the pattern text for destructuring patterns
    fn name(&self) -> String {
        let Some(pattern) = self.binding.as_ref().and_then(|b| b.pattern()) else {
            return String::new();
        };
        match pattern.name() {
            Some(name) => name.text(),
            None => pattern.text(),
        }
    }
}

impl DeclarationNode for Variable {
    fn syntax(&self) -> &SyntaxNode {
        match &self.binding {
            Some(binding) if !self.is_single => binding.syntax(),
            _ => self.decl.syntax(),
        }
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::Variable
    }

    fn attributes(&self) -> Vec<Attribute> {
        attributes_of(self.decl.attribute_list())
    }

    fn modifiers(&self) -> Vec<Modifier> {
        modifiers_of(self.decl.modifier_list())
    }

    fn nested(&self) -> Vec<&DeclarationCollection> {
        vec![&self.locals]
    }
}

/// One element of an enum `case` declaration
///
/// `case a, b(Int)` yields two cases, each covering its own element.
#[derive(Debug, Clone)]
pub struct EnumCase {
    decl: ast::EnumCaseDecl,
    element: Option<ast::EnumCaseElement>,
    is_single: bool,
}

impl EnumCase {
    pub(crate) fn new(
        decl: ast::EnumCaseDecl,
        element: Option<ast::EnumCaseElement>,
        is_single: bool,
    ) -> Self {
        Self {
            decl,
            element,
            is_single,
        }
    }

    pub fn decl(&self) -> &ast::EnumCaseDecl {
        &self.decl
    }

    pub fn associated_values(&self) -> Vec<Parameter> {
        parameters_of(self.element.as_ref().and_then(|e| e.parameter_clause()))
    }

    pub fn raw_value(&self) -> Option<String> {
        self.element
            .as_ref()
            .and_then(|e| e.raw_value())
            .and_then(|r| r.value())
            .map(|v| v.text())
    }

    pub fn is_indirect(&self) -> bool {
        self.has_modifier("indirect")
    }
}

impl Named for EnumCase {
    fn name(&self) -> String {
        name_of(self.element.as_ref().and_then(|e| e.name()))
    }
}

impl DeclarationNode for EnumCase {
    fn syntax(&self) -> &SyntaxNode {
        match &self.element {
            Some(element) if !self.is_single => element.syntax(),
            _ => self.decl.syntax(),
        }
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::EnumCase
    }

    fn attributes(&self) -> Vec<Attribute> {
        attributes_of(self.decl.attribute_list())
    }

    fn modifiers(&self) -> Vec<Modifier> {
        modifiers_of(self.decl.modifier_list())
    }
}

// ============================================================================
// Type aliases and associated types
// ============================================================================

/// `typealias`
#[derive(Debug, Clone)]
pub struct Typealias {
    node: ast::TypealiasDecl,
}

impl Typealias {
    pub(crate) fn new(node: ast::TypealiasDecl) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ast::TypealiasDecl {
        &self.node
    }

    /// Aliased type
    pub fn initialized_type(&self) -> EntityType {
        EntityType::from_type(self.node.initializer().and_then(|i| i.ty()))
    }

    pub fn generic_parameters(&self) -> Vec<GenericParameter> {
        generic_parameters_of(self.node.generic_parameter_clause())
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }
}

impl Named for Typealias {
    fn name(&self) -> String {
        name_of(self.node.name())
    }
}

declaration_node!(Typealias, Typealias);

/// `associatedtype`
#[derive(Debug, Clone)]
pub struct AssociatedType {
    node: ast::AssociatedTypeDecl,
}

impl AssociatedType {
    pub(crate) fn new(node: ast::AssociatedTypeDecl) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ast::AssociatedTypeDecl {
        &self.node
    }

    pub fn inheritance(&self) -> Vec<String> {
        inheritance_of(self.node.inheritance_clause())
    }

    /// `= Default`; `Empty` when absent
    pub fn default_type(&self) -> EntityType {
        EntityType::from_type(self.node.initializer().and_then(|i| i.ty()))
    }

    pub fn generic_requirements(&self) -> Vec<GenericRequirement> {
        generic_requirements_of(self.node.generic_where_clause())
    }
}

impl Named for AssociatedType {
    fn name(&self) -> String {
        name_of(self.node.name())
    }
}

declaration_node!(AssociatedType, AssociatedType);

// ============================================================================
// Operators
// ============================================================================

/// `prefix operator +++`, `infix operator <*>: AdditionPrecedence`
#[derive(Debug, Clone)]
pub struct Operator {
    node: ast::OperatorDecl,
}

impl Operator {
    pub(crate) fn new(node: ast::OperatorDecl) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ast::OperatorDecl {
        &self.node
    }

    /// `None` when no fixity modifier is written
    pub fn fixity(&self) -> Option<Fixity> {
        Fixity::from_modifiers(&self.modifiers())
    }

    pub fn precedence_group(&self) -> Option<String> {
        self.node
            .precedence()
            .and_then(|p| p.names().next())
            .map(|n| n.text())
    }
}

impl Named for Operator {
    fn name(&self) -> String {
        name_of(self.node.name())
    }
}

declaration_node!(Operator, Operator);

/// `precedencegroup`
#[derive(Debug, Clone)]
pub struct PrecedenceGroup {
    node: ast::PrecedenceGroupDecl,
}

impl PrecedenceGroup {
    pub(crate) fn new(node: ast::PrecedenceGroupDecl) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ast::PrecedenceGroupDecl {
        &self.node
    }

    fn values(&self, label: &str) -> Vec<String> {
        self.node
            .group_attributes()
            .filter(|a| a.label().is_some_and(|l| l.text() == label))
            .flat_map(|a| a.values().map(|v| v.text()).collect::<Vec<_>>())
            .collect()
    }

    pub fn associativity(&self) -> Associativity {
        self.values("associativity")
            .first()
            .map_or(Associativity::None, |v| Associativity::from_name(v))
    }

    pub fn assignment(&self) -> bool {
        self.values("assignment").first().is_some_and(|v| v == "true")
    }

    pub fn higher_than(&self) -> Vec<String> {
        self.values("higherThan")
    }

    pub fn lower_than(&self) -> Vec<String> {
        self.values("lowerThan")
    }
}

impl Named for PrecedenceGroup {
    fn name(&self) -> String {
        name_of(self.node.name())
    }
}

declaration_node!(PrecedenceGroup, PrecedenceGroup);

// ============================================================================
// Imports
// ============================================================================

/// `import`
#[derive(Debug, Clone)]
pub struct Import {
    node: ast::ImportDecl,
}

impl Import {
    pub(crate) fn new(node: ast::ImportDecl) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &ast::ImportDecl {
        &self.node
    }

    /// `["Foundation", "Date"]` for `import struct Foundation.Date`
    pub fn path(&self) -> Vec<String> {
        self.node
            .path()
            .map(|p| p.components().map(|c| c.text()).collect())
            .unwrap_or_default()
    }

    /// `struct` in `import struct Foundation.Date`
    pub fn import_kind(&self) -> Option<String> {
        self.node.kind_token().map(|t| t.text().to_string())
    }
}

impl Named for Import {
    /// Dotted module path
    fn name(&self) -> String {
        self.path().join(".")
    }
}

declaration_node!(Import, Import);

// ============================================================================
// Conditional compilation
// ============================================================================

/// One `#if`/`#elseif`/`#else` branch with its own collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub keyword: BranchKeyword,
    /// Condition text; `None` for `#else`
    pub condition: Option<String>,
    pub declarations: DeclarationCollection,
}

/// An `#if ... #endif` block
#[derive(Debug, Clone)]
pub struct ConditionalCompilationBlock {
    node: ast::IfConfigDecl,
    branches: Vec<Branch>,
}

impl ConditionalCompilationBlock {
    pub(crate) fn new(node: ast::IfConfigDecl, branches: Vec<Branch>) -> Self {
        Self { node, branches }
    }

    pub fn node(&self) -> &ast::IfConfigDecl {
        &self.node
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }
}

impl DeclarationNode for ConditionalCompilationBlock {
    fn syntax(&self) -> &SyntaxNode {
        self.node.syntax()
    }

    fn kind(&self) -> DeclarationKind {
        DeclarationKind::ConditionalCompilationBlock
    }

    fn nested(&self) -> Vec<&DeclarationCollection> {
        self.branches.iter().map(|b| &b.declarations).collect()
    }
}

// ============================================================================
// Declaration
// ============================================================================

macro_rules! declaration_enum {
    ($($variant:ident),* $(,)?) => {
        /// Any collected declaration
        #[derive(Debug, Clone)]
        pub enum Declaration {
            $($variant($variant),)*
        }

        impl DeclarationNode for Declaration {
            fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(d) => DeclarationNode::syntax(d),)*
                }
            }

            fn kind(&self) -> DeclarationKind {
                match self {
                    $(Self::$variant(d) => DeclarationNode::kind(d),)*
                }
            }

            fn attributes(&self) -> Vec<Attribute> {
                match self {
                    $(Self::$variant(d) => d.attributes(),)*
                }
            }

            fn modifiers(&self) -> Vec<Modifier> {
                match self {
                    $(Self::$variant(d) => d.modifiers(),)*
                }
            }

            fn nested(&self) -> Vec<&DeclarationCollection> {
                match self {
                    $(Self::$variant(d) => d.nested(),)*
                }
            }
        }

        $(
            impl From<$variant> for Declaration {
                fn from(declaration: $variant) -> Self {
                    Self::$variant(declaration)
                }
            }
        )*
    };
}

declaration_enum!(
    Structure,
    Class,
    Actor,
    Enumeration,
    Extension,
    Protocol,
    Function,
    Variable,
    Initializer,
    Deinitializer,
    Subscript,
    Typealias,
    Operator,
    PrecedenceGroup,
    Import,
    AssociatedType,
    EnumCase,
    ConditionalCompilationBlock,
);

impl Declaration {
    /// Declared name; empty for `#if` blocks
    pub fn name(&self) -> String {
        match self {
            Self::Structure(d) => d.name(),
            Self::Class(d) => d.name(),
            Self::Actor(d) => d.name(),
            Self::Enumeration(d) => d.name(),
            Self::Extension(d) => d.name(),
            Self::Protocol(d) => d.name(),
            Self::Function(d) => d.name(),
            Self::Variable(d) => d.name(),
            Self::Initializer(d) => d.name(),
            Self::Deinitializer(d) => d.name(),
            Self::Subscript(d) => d.name(),
            Self::Typealias(d) => d.name(),
            Self::Operator(d) => d.name(),
            Self::PrecedenceGroup(d) => d.name(),
            Self::Import(d) => d.name(),
            Self::AssociatedType(d) => d.name(),
            Self::EnumCase(d) => d.name(),
            Self::ConditionalCompilationBlock(_) => String::new(),
        }
    }

    /// Member collection of a container declaration
    pub fn members(&self) -> Option<&DeclarationCollection> {
        match self {
            Self::Structure(d) => Some(d.members()),
            Self::Class(d) => Some(d.members()),
            Self::Actor(d) => Some(d.members()),
            Self::Enumeration(d) => Some(d.members()),
            Self::Extension(d) => Some(d.members()),
            Self::Protocol(d) => Some(d.members()),
            _ => None,
        }
    }
}

/// Structural equality: same kind, range and source text, and equal nested
/// collections. Two builds of identical source compare equal.
impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.range() == other.range()
            && self.description() == other.description()
            && self.nested() == other.nested()
    }
}

impl Eq for Declaration {}

#[cfg(test)]
mod tests;
