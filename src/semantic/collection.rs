//! Declaration collections
//!
//! A collection holds the declarations of one body region in source order,
//! indexed by category. Nesting is a tree: each declaration owns the
//! collections of its own body regions.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::declarations::{
    Actor, AssociatedType, Class, ConditionalCompilationBlock, Declaration, DeclarationKind,
    DeclarationNode, Deinitializer, EnumCase, Enumeration, Extension, Function, Import, Initializer,
    Operator, PrecedenceGroup, Protocol, Structure, Subscript, Typealias, Variable,
};

/// Declarations of one body region
#[derive(Debug, Clone, Default)]
pub struct DeclarationCollection {
    /// All declarations in source order
    declarations: Vec<Declaration>,
    /// Category -> indices into `declarations`, categories in first-seen order
    by_kind: IndexMap<DeclarationKind, Vec<usize>, FxBuildHasher>,
}

macro_rules! category_accessors {
    ($($(#[$meta:meta])* $method:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $method(&self) -> impl Iterator<Item = &$variant> + '_ {
                self.of_kind(DeclarationKind::$variant).filter_map(|declaration| match declaration {
                    Declaration::$variant(inner) => Some(inner),
                    _ => None,
                })
            }
        )*
    };
}

impl DeclarationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, declaration: impl Into<Declaration>) {
        let declaration = declaration.into();
        self.by_kind
            .entry(declaration.kind())
            .or_default()
            .push(self.declarations.len());
        self.declarations.push(declaration);
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// All declarations in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Declaration> {
        self.declarations.get(index)
    }

    /// Categories present, in order of first appearance
    pub fn kinds(&self) -> impl Iterator<Item = DeclarationKind> + '_ {
        self.by_kind.keys().copied()
    }

    /// Declarations of one category in source order
    pub fn of_kind(&self, kind: DeclarationKind) -> impl Iterator<Item = &Declaration> + '_ {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.declarations.get(index))
    }

    pub fn count(&self, kind: DeclarationKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// First declaration in this region with the given name
    pub fn find(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name() == name)
    }

    /// Declarations of the given categories across this collection and every
    /// nested one, pre-order: a parent before its children, siblings left to
    /// right, `#if` branches in branch order.
    pub fn recursively_collect(&self, kinds: &[DeclarationKind]) -> Vec<&Declaration> {
        let mut found = Vec::new();
        self.collect_into(kinds, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, kinds: &[DeclarationKind], found: &mut Vec<&'a Declaration>) {
        for declaration in &self.declarations {
            if kinds.contains(&declaration.kind()) {
                found.push(declaration);
            }
            for nested in declaration.nested() {
                nested.collect_into(kinds, found);
            }
        }
    }

    category_accessors! {
        structures => Structure,
        classes => Class,
        actors => Actor,
        enumerations => Enumeration,
        extensions => Extension,
        protocols => Protocol,
        functions => Function,
        variables => Variable,
        initializers => Initializer,
        deinitializers => Deinitializer,
        subscripts => Subscript,
        typealiases => Typealias,
        operators => Operator,
        precedence_groups => PrecedenceGroup,
        imports => Import,
        associated_types => AssociatedType,
        enum_cases => EnumCase,
        /// `#if` blocks; their branches hold the conditional declarations
        conditional_compilation_blocks => ConditionalCompilationBlock,
    }
}

/// Equal when the declarations are pairwise equal in source order
impl PartialEq for DeclarationCollection {
    fn eq(&self, other: &Self) -> bool {
        self.declarations == other.declarations
    }
}

impl Eq for DeclarationCollection {}

impl<'a> IntoIterator for &'a DeclarationCollection {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

#[cfg(test)]
mod tests;
