//! Type nodes

use super::*;

/// Any type node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Simple(SimpleType),
    Member(MemberType),
    Array(ArrayType),
    Dictionary(DictionaryType),
    Tuple(TupleType),
    Function(FunctionType),
    Optional(OptionalType),
    ImplicitlyUnwrapped(ImplicitlyUnwrappedOptionalType),
    Attributed(AttributedType),
    SomeOrAny(SomeOrAnyType),
    Composition(CompositionType),
    Metatype(MetatypeType),
}

impl AstNode for Type {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_type()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SIMPLE_TYPE => Some(Self::Simple(SimpleType(node))),
            SyntaxKind::MEMBER_TYPE => Some(Self::Member(MemberType(node))),
            SyntaxKind::ARRAY_TYPE => Some(Self::Array(ArrayType(node))),
            SyntaxKind::DICTIONARY_TYPE => Some(Self::Dictionary(DictionaryType(node))),
            SyntaxKind::TUPLE_TYPE => Some(Self::Tuple(TupleType(node))),
            SyntaxKind::FUNCTION_TYPE => Some(Self::Function(FunctionType(node))),
            SyntaxKind::OPTIONAL_TYPE => Some(Self::Optional(OptionalType(node))),
            SyntaxKind::IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE => {
                Some(Self::ImplicitlyUnwrapped(ImplicitlyUnwrappedOptionalType(node)))
            }
            SyntaxKind::ATTRIBUTED_TYPE => Some(Self::Attributed(AttributedType(node))),
            SyntaxKind::SOME_OR_ANY_TYPE => Some(Self::SomeOrAny(SomeOrAnyType(node))),
            SyntaxKind::COMPOSITION_TYPE => Some(Self::Composition(CompositionType(node))),
            SyntaxKind::METATYPE_TYPE => Some(Self::Metatype(MetatypeType(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Simple(n) => n.syntax(),
            Self::Member(n) => n.syntax(),
            Self::Array(n) => n.syntax(),
            Self::Dictionary(n) => n.syntax(),
            Self::Tuple(n) => n.syntax(),
            Self::Function(n) => n.syntax(),
            Self::Optional(n) => n.syntax(),
            Self::ImplicitlyUnwrapped(n) => n.syntax(),
            Self::Attributed(n) => n.syntax(),
            Self::SomeOrAny(n) => n.syntax(),
            Self::Composition(n) => n.syntax(),
            Self::Metatype(n) => n.syntax(),
        }
    }
}

fn first_type(node: &SyntaxNode) -> Option<Type> {
    node.children().find_map(Type::cast)
}

ast_node!(SimpleType, SIMPLE_TYPE);

impl SimpleType {
    first_child_method!(generic_argument_clause, GenericArgumentClause);

    /// The leading identifier (`Array` in `Array<Int>`)
    pub fn name(&self) -> String {
        first_significant_token(&self.0)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

ast_node!(MemberType, MEMBER_TYPE);

impl MemberType {
    first_child_method!(generic_argument_clause, GenericArgumentClause);

    pub fn base(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(GenericArgumentClause, GENERIC_ARGUMENT_CLAUSE);

impl GenericArgumentClause {
    children_method!(arguments, GenericArgument);
}

ast_node!(GenericArgument, GENERIC_ARGUMENT);

impl GenericArgument {
    pub fn ty(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(ArrayType, ARRAY_TYPE);

impl ArrayType {
    pub fn element(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(DictionaryType, DICTIONARY_TYPE);

impl DictionaryType {
    pub fn key(&self) -> Option<Type> {
        first_type(&self.0)
    }

    pub fn value(&self) -> Option<Type> {
        self.0.children().filter_map(Type::cast).nth(1)
    }
}

ast_node!(TupleType, TUPLE_TYPE);

impl TupleType {
    children_method!(elements, TupleTypeElement);
}

ast_node!(TupleTypeElement, TUPLE_TYPE_ELEMENT);

impl TupleTypeElement {
    has_token_method!(is_variadic, ELLIPSIS, "(Int...)");

    pub fn first_name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn second_name(&self) -> Option<Name> {
        self.0.children().filter_map(Name::cast).nth(1)
    }

    pub fn ty(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(FunctionType, FUNCTION_TYPE);

impl FunctionType {
    first_child_method!(parameters, TupleType);
    first_child_method!(effects, EffectSpecifiers);
    first_child_method!(return_clause, ReturnClause);
}

ast_node!(OptionalType, OPTIONAL_TYPE);

impl OptionalType {
    pub fn wrapped(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(ImplicitlyUnwrappedOptionalType, IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE);

impl ImplicitlyUnwrappedOptionalType {
    pub fn wrapped(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(AttributedType, ATTRIBUTED_TYPE);

impl AttributedType {
    first_child_method!(attribute_list, AttributeList);

    /// `inout`, `borrowing`, ... in source order
    pub fn specifiers(&self) -> Vec<String> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn base(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(SomeOrAnyType, SOME_OR_ANY_TYPE);

impl SomeOrAnyType {
    pub fn constraint(&self) -> Option<Type> {
        first_type(&self.0)
    }
}

ast_node!(CompositionType, COMPOSITION_TYPE);

impl CompositionType {
    pub fn members(&self) -> impl Iterator<Item = Type> + '_ {
        self.0.children().filter_map(Type::cast)
    }
}

ast_node!(MetatypeType, METATYPE_TYPE);

impl MetatypeType {
    pub fn base(&self) -> Option<Type> {
        first_type(&self.0)
    }

    /// `Type` or `Protocol`
    pub fn metatype_specifier(&self) -> String {
        significant_token_text(&self.0).trim_start_matches('.').to_string()
    }
}
