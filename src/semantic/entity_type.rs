//! Type classification
//!
//! Maps a type node to one of a small closed set of shapes. Shorthand and
//! generic spellings of the standard collections classify to the same
//! variant; only [`Spelling`] tells them apart. Optional markers are stripped
//! before the shape is inspected and come back as a single flag.
//!
//! Classification never fails: anything without a dedicated shape becomes
//! [`EntityType::Simple`] holding the raw source text.

use std::fmt;

use crate::parser::ast::{self, AstNode, FunctionType, SimpleType, TupleType, TupleTypeElement, Type};
use crate::parser::{TypeRoot, parse_type_text};

/// How a collection type was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Spelling {
    /// `[T]`, `[K: V]`
    Shorthand,
    /// `Array<T>`, `Dictionary<K, V>`
    Generic,
}

/// The semantic shape of a type reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntityType {
    /// Anything without a dedicated shape, kept as raw source text
    /// (optional suffix included)
    Simple(String),
    Array {
        element: Box<EntityType>,
        spelling: Spelling,
        is_optional: bool,
    },
    Set {
        element: Box<EntityType>,
        is_optional: bool,
    },
    Dictionary {
        key: Box<EntityType>,
        value: Box<EntityType>,
        spelling: Spelling,
        is_optional: bool,
    },
    Tuple(Tuple),
    Closure(Closure),
    Result {
        success: Box<EntityType>,
        failure: Box<EntityType>,
        is_optional: bool,
    },
    /// `()` or `Void`, as written
    Void { raw: String, is_optional: bool },
    /// No type was written
    Empty,
}

/// A parenthesized group of two or more elements, or of labeled elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tuple {
    pub elements: Vec<Parameter>,
    pub is_optional: bool,
}

/// One element of a tuple type, a closure parameter list, or a function
/// parameter clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parameter {
    /// Declaration attributes written before the labels
    pub attributes: Vec<String>,
    /// Argument label, or the only name
    pub first_name: Option<String>,
    /// Local name when a separate argument label is given
    pub second_name: Option<String>,
    pub ty: EntityType,
    pub is_inout: bool,
    pub is_variadic: bool,
    pub default_value: Option<String>,
}

/// A function type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Closure {
    /// Type attributes in source order (`@escaping`, `@Sendable`, ...)
    pub attributes: Vec<String>,
    pub input: Box<EntityType>,
    pub output: Box<EntityType>,
    pub is_async: bool,
    pub is_throwing: bool,
    /// Explicitly `@escaping`, or implicitly escaping because it is optional
    pub is_escaping: bool,
    pub is_optional: bool,
}

impl EntityType {
    /// Classify a type node.
    pub fn classify(ty: &Type) -> Self {
        let mut is_optional = false;
        let mut current = ty.clone();
        loop {
            let next = match &current {
                Type::Optional(optional) => {
                    is_optional = true;
                    optional.wrapped()
                }
                Type::Tuple(tuple) => grouped_type(tuple),
                _ => None,
            };
            match next {
                Some(inner) => current = inner,
                None => break,
            }
        }
        Self::classify_shape(&current, is_optional).unwrap_or_else(|| Self::Simple(ty.text()))
    }

    /// Classify an optional type node; a missing type is [`EntityType::Empty`].
    pub fn from_type(ty: Option<Type>) -> Self {
        ty.map_or(Self::Empty, |ty| Self::classify(&ty))
    }

    /// Parse `text` as a standalone type and classify it.
    pub fn parse(text: &str) -> Self {
        let parsed = parse_type_text(text);
        Self::from_type(TypeRoot::cast(parsed.syntax()).and_then(|root| root.ty()))
    }

    pub fn is_optional(&self) -> bool {
        match self {
            Self::Simple(raw) => raw.ends_with('?'),
            Self::Array { is_optional, .. }
            | Self::Set { is_optional, .. }
            | Self::Dictionary { is_optional, .. }
            | Self::Result { is_optional, .. }
            | Self::Void { is_optional, .. } => *is_optional,
            Self::Tuple(tuple) => tuple.is_optional,
            Self::Closure(closure) => closure.is_optional,
            Self::Empty => false,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Source-style rendering of the type. Same as `to_string()`.
    pub fn description(&self) -> String {
        self.to_string()
    }

    fn classify_shape(ty: &Type, is_optional: bool) -> Option<Self> {
        match ty {
            Type::Simple(simple) => classify_named(simple, is_optional),
            Type::Array(array) => Some(Self::Array {
                element: Box::new(Self::from_type(array.element())),
                spelling: Spelling::Shorthand,
                is_optional,
            }),
            Type::Dictionary(dictionary) => Some(Self::Dictionary {
                key: Box::new(Self::from_type(dictionary.key())),
                value: Box::new(Self::from_type(dictionary.value())),
                spelling: Spelling::Shorthand,
                is_optional,
            }),
            Type::Tuple(tuple) => {
                let elements: Vec<Parameter> = tuple
                    .elements()
                    .map(|element| Parameter::from_tuple_element(&element))
                    .collect();
                if elements.is_empty() {
                    Some(Self::Void {
                        raw: "()".to_string(),
                        is_optional,
                    })
                } else {
                    Some(Self::Tuple(Tuple {
                        elements,
                        is_optional,
                    }))
                }
            }
            Type::Function(function) => Some(Self::Closure(Closure::from_function(
                function,
                Vec::new(),
                is_optional,
            ))),
            Type::Attributed(attributed) => {
                if !attributed.specifiers().is_empty() {
                    return None;
                }
                let Some(Type::Function(function)) = attributed.base() else {
                    return None;
                };
                let attributes = attributed
                    .attribute_list()
                    .map(|list| list.attributes().map(|a| a.text()).collect())
                    .unwrap_or_default();
                Some(Self::Closure(Closure::from_function(
                    &function,
                    attributes,
                    is_optional,
                )))
            }
            _ => None,
        }
    }
}

/// The closure inside a parenthesized group such as `((Int) -> Void)`.
/// Any other single-element group stays a one-element tuple.
fn grouped_type(tuple: &TupleType) -> Option<Type> {
    let mut elements = tuple.elements();
    let element = elements.next()?;
    if elements.next().is_some() || element.first_name().is_some() || element.is_variadic() {
        return None;
    }
    element.ty().filter(is_closure_shape)
}

fn is_closure_shape(ty: &Type) -> bool {
    match ty {
        Type::Function(_) => true,
        Type::Attributed(attributed) => {
            attributed.specifiers().is_empty()
                && matches!(attributed.base(), Some(Type::Function(_)))
        }
        Type::Tuple(tuple) => grouped_type(tuple).is_some(),
        _ => false,
    }
}

/// `Array<T>`, `Set<T>`, `Dictionary<K, V>`, `Result<S, F>` and `Void`.
/// The leading identifier decides; wrong arity falls back to `Simple`.
fn classify_named(simple: &SimpleType, is_optional: bool) -> Option<EntityType> {
    let name = simple.name();
    let Some(clause) = simple.generic_argument_clause() else {
        return (name == "Void").then(|| EntityType::Void {
            raw: name,
            is_optional,
        });
    };

    let mut arguments: Vec<EntityType> = clause
        .arguments()
        .map(|argument| EntityType::from_type(argument.ty()))
        .collect();
    let shape = match (name.as_str(), arguments.len()) {
        ("Array", 1) => EntityType::Array {
            element: Box::new(arguments.remove(0)),
            spelling: Spelling::Generic,
            is_optional,
        },
        ("Set", 1) => EntityType::Set {
            element: Box::new(arguments.remove(0)),
            is_optional,
        },
        ("Dictionary", 2) => {
            let value = arguments.remove(1);
            EntityType::Dictionary {
                key: Box::new(arguments.remove(0)),
                value: Box::new(value),
                spelling: Spelling::Generic,
                is_optional,
            }
        }
        ("Result", 2) => {
            let failure = arguments.remove(1);
            EntityType::Result {
                success: Box::new(arguments.remove(0)),
                failure: Box::new(failure),
                is_optional,
            }
        }
        _ => return None,
    };
    Some(shape)
}

impl Parameter {
    pub(crate) fn from_tuple_element(element: &TupleTypeElement) -> Self {
        let (ty, is_inout) = strip_inout(element.ty());
        Self {
            attributes: Vec::new(),
            first_name: element.first_name().map(|n| n.text()),
            second_name: element.second_name().map(|n| n.text()),
            ty,
            is_inout,
            is_variadic: element.is_variadic(),
            default_value: None,
        }
    }

    pub(crate) fn from_parameter(parameter: &ast::Parameter) -> Self {
        let (ty, is_inout) = strip_inout(parameter.ty());
        Self {
            attributes: parameter
                .attribute_list()
                .map(|list| list.attributes().map(|a| a.text()).collect())
                .unwrap_or_default(),
            first_name: parameter.first_name().map(|n| n.text()),
            second_name: parameter.second_name().map(|n| n.text()),
            ty,
            is_inout,
            is_variadic: parameter.is_variadic(),
            default_value: parameter
                .default_value()
                .and_then(|clause| clause.value())
                .map(|value| value.text()),
        }
    }

    /// Name used inside the body: the second name if given, else the first
    pub fn local_name(&self) -> Option<&str> {
        self.second_name.as_deref().or(self.first_name.as_deref())
    }

    /// No labels, attributes, default or `inout`/variadic marker
    fn is_bare(&self) -> bool {
        self.attributes.is_empty()
            && self.first_name.is_none()
            && !self.is_inout
            && !self.is_variadic
            && self.default_value.is_none()
    }
}

/// `inout T` is only meaningful on a parameter; anywhere else it stays `Simple`.
fn strip_inout(ty: Option<Type>) -> (EntityType, bool) {
    if let Some(Type::Attributed(attributed)) = &ty {
        if attributed.attribute_list().is_none() && attributed.specifiers() == ["inout"] {
            return (EntityType::from_type(attributed.base()), true);
        }
    }
    (EntityType::from_type(ty), false)
}

impl Closure {
    fn from_function(function: &FunctionType, attributes: Vec<String>, is_optional: bool) -> Self {
        let parameters: Vec<Parameter> = function
            .parameters()
            .map(|tuple| {
                tuple
                    .elements()
                    .map(|element| Parameter::from_tuple_element(&element))
                    .collect()
            })
            .unwrap_or_default();
        let effects = function.effects();
        let is_escaping = is_optional || attributes.iter().any(|a| a == "@escaping");
        Self {
            input: Box::new(closure_input(parameters)),
            output: Box::new(EntityType::from_type(
                function.return_clause().and_then(|clause| clause.ty()),
            )),
            is_async: effects.as_ref().is_some_and(|e| e.is_async()),
            is_throwing: effects
                .as_ref()
                .is_some_and(|e| e.is_throwing() || e.is_rethrowing()),
            attributes,
            is_escaping,
            is_optional,
        }
    }
}

/// No parameters is `()`, a single bare parameter is its own type,
/// anything else is a tuple of the parameters.
fn closure_input(mut parameters: Vec<Parameter>) -> EntityType {
    match parameters.len() {
        0 => EntityType::Void {
            raw: "()".to_string(),
            is_optional: false,
        },
        1 if parameters[0].is_bare()
            && !matches!(parameters[0].ty, EntityType::Tuple(_) | EntityType::Void { .. }) =>
        {
            parameters.remove(0).ty
        }
        _ => EntityType::Tuple(Tuple {
            elements: parameters,
            is_optional: false,
        }),
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(raw) => return f.write_str(raw),
            Self::Tuple(tuple) => return write!(f, "{tuple}"),
            Self::Closure(closure) => return write!(f, "{closure}"),
            Self::Empty => return Ok(()),
            Self::Array {
                element,
                spelling: Spelling::Shorthand,
                ..
            } => write!(f, "[{element}]")?,
            Self::Array { element, .. } => write!(f, "Array<{element}>")?,
            Self::Set { element, .. } => write!(f, "Set<{element}>")?,
            Self::Dictionary {
                key,
                value,
                spelling: Spelling::Shorthand,
                ..
            } => write!(f, "[{key}: {value}]")?,
            Self::Dictionary { key, value, .. } => write!(f, "Dictionary<{key}, {value}>")?,
            Self::Result {
                success, failure, ..
            } => write!(f, "Result<{success}, {failure}>")?,
            Self::Void { raw, .. } => f.write_str(raw)?,
        }
        if self.is_optional() {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str(")")?;
        if self.is_optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in &self.attributes {
            write!(f, "{attribute} ")?;
        }
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => write!(f, "{first} {second}: ")?,
            (Some(first), None) => write!(f, "{first}: ")?,
            _ => {}
        }
        if self.is_inout {
            f.write_str("inout ")?;
        }
        write!(f, "{}", self.ty)?;
        if self.is_variadic {
            f.write_str("...")?;
        }
        if let Some(default) = &self.default_value {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_optional {
            f.write_str("(")?;
        }
        for attribute in &self.attributes {
            write!(f, "{attribute} ")?;
        }
        match self.input.as_ref() {
            EntityType::Tuple(tuple) => write!(f, "{tuple}")?,
            EntityType::Void { raw, .. } if raw == "()" => f.write_str("()")?,
            other => write!(f, "({other})")?,
        }
        if self.is_async {
            f.write_str(" async")?;
        }
        if self.is_throwing {
            f.write_str(" throws")?;
        }
        write!(f, " -> {}", self.output)?;
        if self.is_optional {
            f.write_str(")?")?;
        }
        Ok(())
    }
}
