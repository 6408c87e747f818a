//! Declaration resolvers
//!
//! Plain value types derived from the typed AST, plus the functions that
//! build them. Nothing here is cached; declarations call these on every read.

use std::fmt;

use smol_str::SmolStr;

use super::entity_type::{EntityType, Parameter};
use crate::parser::ast::{
    self, AccessorBlock, AccessorDecl, AstNode, AttributeList, EffectSpecifiers, GenericParameterClause,
    GenericWhereClause, InheritanceClause, ModifierList, ParameterClause,
};

// ============================================================================
// Attributes and modifiers
// ============================================================================

/// `@available(iOS 15, *)`: the name without `@`, arguments kept raw
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    pub name: SmolStr,
    pub arguments: Option<String>,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if let Some(arguments) = &self.arguments {
            write!(f, "({arguments})")?;
        }
        Ok(())
    }
}

/// `public`, `private(set)`, `static`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Modifier {
    pub name: SmolStr,
    pub detail: Option<SmolStr>,
}

impl Modifier {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(detail) = &self.detail {
            write!(f, "({detail})")?;
        }
        Ok(())
    }
}

pub(crate) fn attributes_of(list: Option<AttributeList>) -> Vec<Attribute> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.attributes()
        .map(|attribute| Attribute {
            name: SmolStr::new(attribute.name()),
            arguments: attribute.arguments().map(|a| a.inner()),
        })
        .collect()
}

pub(crate) fn modifiers_of(list: Option<ModifierList>) -> Vec<Modifier> {
    let Some(list) = list else {
        return Vec::new();
    };
    list.modifiers()
        .map(|modifier| Modifier {
            name: SmolStr::new(modifier.name()),
            detail: modifier.detail().map(|d| SmolStr::new(d.inner())),
        })
        .collect()
}

// ============================================================================
// Generics and inheritance
// ============================================================================

/// `T`, `T: Equatable`, `each T`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenericParameter {
    pub name: String,
    /// Inline constraint after the colon
    pub ty: Option<String>,
    pub is_pack: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Relation {
    /// `T: Protocol`
    Conformance,
    /// `T == U`
    SameType,
}

/// One requirement of a `where` clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GenericRequirement {
    pub left: String,
    pub right: String,
    pub relation: Relation,
}

impl fmt::Display for GenericRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relation {
            Relation::Conformance => write!(f, "{}: {}", self.left, self.right),
            Relation::SameType => write!(f, "{} == {}", self.left, self.right),
        }
    }
}

pub(crate) fn generic_parameters_of(clause: Option<GenericParameterClause>) -> Vec<GenericParameter> {
    let Some(clause) = clause else {
        return Vec::new();
    };
    clause
        .parameters()
        .map(|parameter| GenericParameter {
            name: parameter.name().map(|n| n.text()).unwrap_or_default(),
            ty: parameter.ty().map(|t| t.text()),
            is_pack: parameter.is_pack(),
        })
        .collect()
}

pub(crate) fn generic_requirements_of(clause: Option<GenericWhereClause>) -> Vec<GenericRequirement> {
    let Some(clause) = clause else {
        return Vec::new();
    };
    clause
        .requirements()
        .map(|requirement| GenericRequirement {
            left: requirement.left().map(|t| t.text()).unwrap_or_default(),
            right: requirement.right().map(|t| t.text()).unwrap_or_default(),
            relation: if requirement.is_same_type() {
                Relation::SameType
            } else {
                Relation::Conformance
            },
        })
        .collect()
}

/// Inherited type names in source order; a `class` constraint is `"class"`
pub(crate) fn inheritance_of(clause: Option<InheritanceClause>) -> Vec<String> {
    let Some(clause) = clause else {
        return Vec::new();
    };
    clause.inherited_types().map(|inherited| inherited.text()).collect()
}

// ============================================================================
// Signatures
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Throwing {
    #[default]
    None,
    Throws,
    Rethrows,
}

/// Parameters, effects and return type of a function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionSignature {
    pub parameters: Vec<Parameter>,
    /// `Empty` when no return clause is written
    pub output: EntityType,
    pub is_async: bool,
    pub throwing: Throwing,
}

impl FunctionSignature {
    pub fn is_throwing(&self) -> bool {
        self.throwing != Throwing::None
    }
}

pub(crate) fn parameters_of(clause: Option<ParameterClause>) -> Vec<Parameter> {
    let Some(clause) = clause else {
        return Vec::new();
    };
    clause
        .parameters()
        .map(|parameter| Parameter::from_parameter(&parameter))
        .collect()
}

/// `(is_async, throwing)`
pub(crate) fn effects_of(effects: Option<EffectSpecifiers>) -> (bool, Throwing) {
    let Some(effects) = effects else {
        return (false, Throwing::None);
    };
    let throwing = if effects.is_rethrowing() {
        Throwing::Rethrows
    } else if effects.is_throwing() {
        Throwing::Throws
    } else {
        Throwing::None
    };
    (effects.is_async(), throwing)
}

pub(crate) fn signature_of(signature: Option<ast::FunctionSignature>) -> FunctionSignature {
    let Some(signature) = signature else {
        return FunctionSignature {
            parameters: Vec::new(),
            output: EntityType::Empty,
            is_async: false,
            throwing: Throwing::None,
        };
    };
    let (is_async, throwing) = effects_of(signature.effects());
    FunctionSignature {
        parameters: parameters_of(signature.parameter_clause()),
        output: EntityType::from_type(signature.return_clause().and_then(|r| r.ty())),
        is_async,
        throwing,
    }
}

// ============================================================================
// Accessors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AccessorKind {
    Get,
    Set,
    WillSet,
    DidSet,
    Read,
    Modify,
    Init,
    /// `unsafeAddress`, `_read`, ...
    Other(SmolStr),
}

impl AccessorKind {
    fn from_name(name: &str) -> Self {
        match name {
            "get" => Self::Get,
            "set" => Self::Set,
            "willSet" => Self::WillSet,
            "didSet" => Self::DidSet,
            "_read" | "read" => Self::Read,
            "_modify" | "modify" => Self::Modify,
            "init" => Self::Init,
            other => Self::Other(SmolStr::new(other)),
        }
    }

    pub fn is_observer(&self) -> bool {
        matches!(self, Self::WillSet | Self::DidSet)
    }
}

/// One accessor of a property or subscript
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Accessor {
    pub kind: AccessorKind,
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<Modifier>,
    /// `newValue` in `set(newValue)`
    pub parameter: Option<String>,
    pub is_async: bool,
    pub throwing: Throwing,
    /// False for protocol requirements (`{ get set }`)
    pub has_body: bool,
}

impl Accessor {
    fn from_decl(decl: &AccessorDecl) -> Self {
        let (is_async, throwing) = effects_of(decl.effects());
        Self {
            kind: AccessorKind::from_name(&decl.name().map(|n| n.text()).unwrap_or_default()),
            attributes: attributes_of(decl.attribute_list()),
            modifiers: modifiers_of(decl.modifier_list()),
            parameter: decl
                .parameter()
                .and_then(|p| p.name())
                .map(|n| n.text()),
            is_async,
            throwing,
            has_body: decl.body().is_some(),
        }
    }

    fn implicit_getter() -> Self {
        Self {
            kind: AccessorKind::Get,
            attributes: Vec::new(),
            modifiers: Vec::new(),
            parameter: None,
            is_async: false,
            throwing: Throwing::None,
            has_body: true,
        }
    }
}

/// Accessors in source order. A bare `{ ... }` body is one implicit getter.
pub(crate) fn accessors_of(block: Option<AccessorBlock>) -> Vec<Accessor> {
    let Some(block) = block else {
        return Vec::new();
    };
    if block.implicit_getter().is_some() {
        return vec![Accessor::implicit_getter()];
    }
    block.accessors().map(|decl| Accessor::from_decl(&decl)).collect()
}

// ============================================================================
// Operators and precedence groups
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

impl Fixity {
    pub(crate) fn from_modifiers(modifiers: &[Modifier]) -> Option<Self> {
        modifiers.iter().find_map(|m| match m.name.as_str() {
            "prefix" => Some(Self::Prefix),
            "infix" => Some(Self::Infix),
            "postfix" => Some(Self::Postfix),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Associativity {
    Left,
    Right,
    #[default]
    None,
}

impl Associativity {
    pub(crate) fn from_name(name: &str) -> Self {
        match name {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::None,
        }
    }
}

// ============================================================================
// Conditional compilation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BranchKeyword {
    If,
    ElseIf,
    Else,
}

impl fmt::Display for BranchKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::If => "#if",
            Self::ElseIf => "#elseif",
            Self::Else => "#else",
        })
    }
}
