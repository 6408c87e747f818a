//! Shared declaration parts: names, attributes, modifiers, generic clauses,
//! parameters, signatures and bodies.

use super::*;

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// The identifier token (for operator names, the first of the glued tokens)
    pub fn token(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.0)
    }
}

// ============================================================================
// Attributes and modifiers
// ============================================================================

ast_node!(AttributeList, ATTRIBUTE_LIST);

impl AttributeList {
    children_method!(attributes, Attribute);
}

ast_node!(Attribute, ATTRIBUTE);

impl Attribute {
    first_child_method!(arguments, AttributeArguments);

    /// Attribute name without the `@` (`available`, `objc`, `Foo.Bar`)
    pub fn name(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia() && t.kind() != SyntaxKind::AT)
            .map(|t| t.text().to_string())
            .collect()
    }
}

ast_node!(AttributeArguments, ATTRIBUTE_ARGUMENTS);

impl AttributeArguments {
    /// Argument text without the surrounding parentheses
    pub fn inner(&self) -> String {
        inner_text(&self.0)
    }
}

ast_node!(ModifierList, MODIFIER_LIST);

impl ModifierList {
    children_method!(modifiers, Modifier);
}

ast_node!(Modifier, MODIFIER);

impl Modifier {
    first_child_method!(detail, ModifierDetail);

    pub fn name(&self) -> String {
        first_significant_token(&self.0)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

ast_node!(ModifierDetail, MODIFIER_DETAIL);

impl ModifierDetail {
    /// Detail text without parentheses (`set` in `private(set)`)
    pub fn inner(&self) -> String {
        inner_text(&self.0)
    }
}

// ============================================================================
// Generics
// ============================================================================

ast_node!(GenericParameterClause, GENERIC_PARAMETER_CLAUSE);

impl GenericParameterClause {
    children_method!(parameters, GenericParameter);
}

ast_node!(GenericParameter, GENERIC_PARAMETER);

impl GenericParameter {
    first_child_method!(name, Name);

    /// Constraint after the colon
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    /// `each T`
    pub fn is_pack(&self) -> bool {
        has_contextual_token(&self.0, "each")
    }
}

ast_node!(GenericWhereClause, GENERIC_WHERE_CLAUSE);

impl GenericWhereClause {
    children_method!(requirements, GenericRequirement);
}

ast_node!(GenericRequirement, GENERIC_REQUIREMENT);

impl GenericRequirement {
    pub fn left(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    pub fn right(&self) -> Option<Type> {
        self.0.children().filter_map(Type::cast).nth(1)
    }

    /// `T == U` rather than `T: U`
    pub fn is_same_type(&self) -> bool {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .any(|t| t.kind() == SyntaxKind::OPERATOR && t.text() == "==")
    }
}

// ============================================================================
// Inheritance, annotations and initializers
// ============================================================================

ast_node!(InheritanceClause, INHERITANCE_CLAUSE);

impl InheritanceClause {
    children_method!(inherited_types, InheritedType);
}

ast_node!(InheritedType, INHERITED_TYPE);

impl InheritedType {
    has_token_method!(is_class_constraint, CLASS_KW, "protocol P: class");

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

ast_node!(TypeAnnotation, TYPE_ANNOTATION);

impl TypeAnnotation {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

ast_node!(TypeInitializer, TYPE_INITIALIZER);

impl TypeInitializer {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

ast_node!(InitializerClause, INITIALIZER_CLAUSE);

impl InitializerClause {
    first_child_method!(value, Expr);
}

ast_node!(Expr, EXPR);

// ============================================================================
// Parameters and signatures
// ============================================================================

ast_node!(FunctionSignature, FUNCTION_SIGNATURE);

impl FunctionSignature {
    first_child_method!(parameter_clause, ParameterClause);
    first_child_method!(effects, EffectSpecifiers);
    first_child_method!(return_clause, ReturnClause);
}

ast_node!(ParameterClause, PARAMETER_CLAUSE);

impl ParameterClause {
    children_method!(parameters, Parameter);
}

ast_node!(Parameter, PARAMETER);

impl Parameter {
    first_child_method!(attribute_list, AttributeList);
    first_child_method!(default_value, InitializerClause);
    has_token_method!(is_variadic, ELLIPSIS, "values: Int...");

    /// Argument label, or the only name
    pub fn first_name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    /// Parameter name when a separate label is given
    pub fn second_name(&self) -> Option<Name> {
        self.0.children().filter_map(Name::cast).nth(1)
    }

    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

ast_node!(EffectSpecifiers, EFFECT_SPECIFIERS);

impl EffectSpecifiers {
    has_token_method!(is_throwing, THROWS_KW, "throws");
    has_token_method!(is_rethrowing, RETHROWS_KW, "rethrows");

    pub fn is_async(&self) -> bool {
        has_contextual_token(&self.0, "async")
    }
}

ast_node!(ReturnClause, RETURN_CLAUSE);

impl ReturnClause {
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }
}

// ============================================================================
// Bodies
// ============================================================================

ast_node!(MemberBlock, MEMBER_BLOCK);

impl MemberBlock {
    /// Member nodes in source order
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

ast_node!(CodeBlock, CODE_BLOCK);

impl CodeBlock {
    /// Statement and declaration nodes in source order
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

ast_node!(AccessorBlock, ACCESSOR_BLOCK);

impl AccessorBlock {
    children_method!(accessors, AccessorDecl);

    /// Body of a getter-only block written without `get`
    pub fn implicit_getter(&self) -> Option<CodeBlock> {
        self.0.children().find_map(CodeBlock::cast)
    }
}

ast_node!(AccessorDecl, ACCESSOR_DECL);

impl AccessorDecl {
    decl_prefix_methods!();
    first_child_method!(name, Name);
    first_child_method!(parameter, AccessorParameter);
    first_child_method!(effects, EffectSpecifiers);
    first_child_method!(body, CodeBlock);
}

ast_node!(AccessorParameter, ACCESSOR_PARAMETER);

impl AccessorParameter {
    first_child_method!(name, Name);
}

// ============================================================================
// Conditional compilation
// ============================================================================

ast_node!(IfConfigClause, IF_CONFIG_CLAUSE);

impl IfConfigClause {
    first_child_method!(condition, IfConfigCondition);

    /// `#if`, `#elseif` or `#else`
    pub fn keyword(&self) -> Option<SyntaxKind> {
        first_significant_token(&self.0).map(|t| t.kind())
    }

    /// Item nodes of this branch in source order
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() != SyntaxKind::IF_CONFIG_CONDITION)
    }
}

ast_node!(IfConfigCondition, IF_CONFIG_CONDITION);
