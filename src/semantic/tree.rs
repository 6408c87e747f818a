//! Source tree
//!
//! Owns a buffer and the declaration collection built from it. The tree is
//! either fresh (the collection reflects the buffer) or stale (the buffer
//! changed since the last collection). Reads while stale return the previous
//! collection, or an empty one if nothing was ever collected.

use tracing::{debug, warn};

use super::collection::DeclarationCollection;
use super::collector::{CollectOptions, Collector};
use super::declarations::{
    Actor, AssociatedType, Class, ConditionalCompilationBlock, Declaration, DeclarationKind,
    DeclarationNode, Deinitializer, EnumCase, Enumeration, Extension, Function, Import, Initializer,
    Operator, PrecedenceGroup, Protocol, Structure, Subscript, Typealias, Variable,
};
use super::error::{SemanticError, SemanticResult};
use super::location;
use crate::base::SourceLocation;
use crate::parser::{self, SyntaxError, SyntaxNode};

/// A buffer and its top-level declarations
#[derive(Debug, Clone)]
pub struct SourceTree {
    source: String,
    options: CollectOptions,
    /// Root of the tree the collection was built from
    root: Option<SyntaxNode>,
    /// Buffer the collection was built from
    collected_source: String,
    collection: DeclarationCollection,
    errors: Vec<SyntaxError>,
    is_stale: bool,
}

macro_rules! delegate_categories {
    ($($method:ident => $ty:ident),* $(,)?) => {
        $(
            pub fn $method(&self) -> impl Iterator<Item = &$ty> + '_ {
                self.collection.$method()
            }
        )*
    };
}

impl SourceTree {
    /// A stale tree over `source` with an empty collection
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, CollectOptions::default())
    }

    pub fn with_options(source: impl Into<String>, options: CollectOptions) -> Self {
        Self {
            source: source.into(),
            options,
            root: None,
            collected_source: String::new(),
            collection: DeclarationCollection::new(),
            errors: Vec::new(),
            is_stale: true,
        }
    }

    /// Replace the buffer. The current collection stays readable until the
    /// next [`collect_children`](Self::collect_children).
    pub fn update_to_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.is_stale = true;
        debug!("[TREE] source updated ({} bytes), marked stale", self.source.len());
    }

    /// Parse the whole buffer and rebuild the collection from scratch
    pub fn collect_children(&mut self) {
        let parse = parser::parse(&self.source);
        for error in &parse.errors {
            warn!("[TREE] syntax error at {:?}: {}", error.range, error.message);
        }
        let root = parse.syntax();
        let collection = Collector::new(self.options).collect_source_file(&root);
        debug!(
            "[TREE] collected {} top-level declarations ({} syntax errors)",
            collection.len(),
            parse.errors.len()
        );

        self.collection = collection;
        self.errors = parse.errors;
        self.root = Some(root);
        self.collected_source.clone_from(&self.source);
        self.is_stale = false;
    }

    pub fn is_stale(&self) -> bool {
        self.is_stale
    }

    pub fn options(&self) -> CollectOptions {
        self.options
    }

    /// Current buffer, which may be newer than the collection
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Syntax root of the last collection
    pub fn syntax(&self) -> Option<&SyntaxNode> {
        self.root.as_ref()
    }

    /// Parse errors of the last collection
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Top-level declarations of the last collection
    pub fn collection(&self) -> &DeclarationCollection {
        &self.collection
    }

    pub fn recursively_collect(&self, kinds: &[DeclarationKind]) -> Vec<&Declaration> {
        self.collection.recursively_collect(kinds)
    }

    delegate_categories! {
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
        conditional_compilation_blocks => ConditionalCompilationBlock,
    }

    /// Location of a declaration from the last collection, resolved against
    /// the buffer it was collected from
    pub fn source_location<D>(&self, declaration: &D) -> SemanticResult<SourceLocation>
    where
        D: DeclarationNode + ?Sized,
    {
        self.check_owned(declaration)?;
        location::source_location(declaration, &self.collected_source)
    }

    /// Verbatim source of a declaration from the last collection
    pub fn extract<D>(&self, declaration: &D) -> SemanticResult<&str>
    where
        D: DeclarationNode + ?Sized,
    {
        self.check_owned(declaration)?;
        location::extract(declaration, &self.collected_source)
    }

    fn check_owned<D>(&self, declaration: &D) -> SemanticResult<()>
    where
        D: DeclarationNode + ?Sized,
    {
        let root = declaration.syntax().ancestors().last();
        match (&self.root, root) {
            (Some(own), Some(root)) if *own == root => Ok(()),
            _ => Err(SemanticError::ForeignDeclaration),
        }
    }
}

#[cfg(test)]
mod tests;
