//! Declaration nodes

use super::*;

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    /// Top-level item nodes in source order
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

ast_node!(TypeRoot, TYPE_ROOT);

impl TypeRoot {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

// ============================================================================
// Nominal types
// ============================================================================

macro_rules! type_decl {
    ($name:ident, $kind:ident) => {
        ast_node!($name, $kind);

        impl $name {
            decl_prefix_methods!();
            first_child_method!(name, Name);
            first_child_method!(generic_parameter_clause, GenericParameterClause);
            first_child_method!(inheritance_clause, InheritanceClause);
            first_child_method!(generic_where_clause, GenericWhereClause);
            first_child_method!(member_block, MemberBlock);
        }
    };
}

type_decl!(StructDecl, STRUCT_DECL);
type_decl!(ClassDecl, CLASS_DECL);
type_decl!(ActorDecl, ACTOR_DECL);
type_decl!(EnumDecl, ENUM_DECL);
type_decl!(ProtocolDecl, PROTOCOL_DECL);

ast_node!(ExtensionDecl, EXTENSION_DECL);

impl ExtensionDecl {
    decl_prefix_methods!();
    first_child_method!(inheritance_clause, InheritanceClause);
    first_child_method!(generic_where_clause, GenericWhereClause);
    first_child_method!(member_block, MemberBlock);

    pub fn extended_type(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

// ============================================================================
// Functions and properties
// ============================================================================

ast_node!(FunctionDecl, FUNCTION_DECL);

impl FunctionDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    first_child_method!(generic_parameter_clause, GenericParameterClause);
    first_child_method!(signature, FunctionSignature);
    first_child_method!(generic_where_clause, GenericWhereClause);
    first_child_method!(body, CodeBlock);
}

ast_node!(VariableDecl, VARIABLE_DECL);

impl VariableDecl {
    decl_prefix_methods!();
    has_token_method!(is_let, LET_KW, "let x = 1");
    children_method!(bindings, PatternBinding);
}

ast_node!(PatternBinding, PATTERN_BINDING);

impl PatternBinding {
    first_child_method!(pattern, Pattern);
    first_child_method!(type_annotation, TypeAnnotation);
    first_child_method!(initializer, InitializerClause);
    first_child_method!(accessor_block, AccessorBlock);
}

ast_node!(Pattern, PATTERN);

impl Pattern {
    first_child_method!(name, Name);
}

ast_node!(InitializerDecl, INITIALIZER_DECL);

impl InitializerDecl {
    decl_prefix_methods!();
    has_token_method!(is_failable, QUESTION, "init?()");
    has_token_method!(is_implicitly_unwrapped, BANG, "init!()");
    first_child_method!(generic_parameter_clause, GenericParameterClause);
    first_child_method!(signature, FunctionSignature);
    first_child_method!(generic_where_clause, GenericWhereClause);
    first_child_method!(body, CodeBlock);
}

ast_node!(DeinitializerDecl, DEINITIALIZER_DECL);

impl DeinitializerDecl {
    decl_prefix_methods!();
    first_child_method!(body, CodeBlock);
}

ast_node!(SubscriptDecl, SUBSCRIPT_DECL);

impl SubscriptDecl {
    decl_prefix_methods!();
    first_child_method!(generic_parameter_clause, GenericParameterClause);
    first_child_method!(parameter_clause, ParameterClause);
    first_child_method!(return_clause, ReturnClause);
    first_child_method!(generic_where_clause, GenericWhereClause);
    first_child_method!(accessor_block, AccessorBlock);
}

// ============================================================================
// Type aliases and associated types
// ============================================================================

ast_node!(TypealiasDecl, TYPEALIAS_DECL);

impl TypealiasDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    first_child_method!(generic_parameter_clause, GenericParameterClause);
    first_child_method!(initializer, TypeInitializer);
    first_child_method!(generic_where_clause, GenericWhereClause);
}

ast_node!(AssociatedTypeDecl, ASSOCIATED_TYPE_DECL);

impl AssociatedTypeDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    first_child_method!(inheritance_clause, InheritanceClause);
    first_child_method!(initializer, TypeInitializer);
    first_child_method!(generic_where_clause, GenericWhereClause);
}

// ============================================================================
// Operators
// ============================================================================

ast_node!(OperatorDecl, OPERATOR_DECL);

impl OperatorDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    first_child_method!(precedence, OperatorPrecedence);
}

ast_node!(OperatorPrecedence, OPERATOR_PRECEDENCE);

impl OperatorPrecedence {
    children_method!(names, Name);
}

ast_node!(PrecedenceGroupDecl, PRECEDENCE_GROUP_DECL);

impl PrecedenceGroupDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    children_method!(group_attributes, PrecedenceGroupAttribute);
}

ast_node!(PrecedenceGroupAttribute, PRECEDENCE_GROUP_ATTRIBUTE);

impl PrecedenceGroupAttribute {
    /// `higherThan`, `lowerThan`, `associativity`, `assignment`
    pub fn label(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn values(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.children().filter_map(Name::cast).skip(1)
    }
}

// ============================================================================
// Imports
// ============================================================================

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    decl_prefix_methods!();
    first_child_method!(path, ImportPath);

    /// Keyword between `import` and the path (`struct` in `import struct A.B`)
    pub fn kind_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind().is_keyword())
            .nth(1)
    }
}

ast_node!(ImportPath, IMPORT_PATH);

impl ImportPath {
    children_method!(components, Name);
}

// ============================================================================
// Enum cases
// ============================================================================

ast_node!(EnumCaseDecl, ENUM_CASE_DECL);

impl EnumCaseDecl {
    decl_prefix_methods!();
    children_method!(elements, EnumCaseElement);
}

ast_node!(EnumCaseElement, ENUM_CASE_ELEMENT);

impl EnumCaseElement {
    first_child_method!(name, Name);
    first_child_method!(parameter_clause, ParameterClause);
    first_child_method!(raw_value, InitializerClause);
}

// ============================================================================
// Conditional compilation
// ============================================================================

ast_node!(IfConfigDecl, IF_CONFIG_DECL);

impl IfConfigDecl {
    children_method!(clauses, IfConfigClause);
}
