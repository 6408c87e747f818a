//! # Semantic Analysis
//!
//! Turns a parsed Swift syntax tree into a queryable model:
//!
//! - [`EntityType`] classifies a type reference into a small closed set of
//!   shapes (array, dictionary, closure, ...).
//! - [`SourceTree`] owns a buffer and rebuilds its [`DeclarationCollection`]
//!   on demand, tracking whether the collection is stale.
//! - Every declaration category has a model struct implementing
//!   [`DeclarationNode`]; containers and executable bodies own nested
//!   collections, forming a tree.
//! - [`source_location`] and [`extract`] resolve a declaration's range
//!   against a buffer.

mod collection;
mod collector;
mod declarations;
mod entity_type;
mod error;
mod location;
mod resolvers;
mod tree;

pub use collection::DeclarationCollection;
pub use collector::CollectOptions;
pub use declarations::{
    Actor, AssociatedType, Branch, Class, ConditionalCompilationBlock, Declaration, DeclarationKind,
    DeclarationNode, Deinitializer, EnumCase, Enumeration, Extension, Function, Import, Initializer,
    Named, Operator, PrecedenceGroup, Protocol, Structure, Subscript, Typealias, Variable,
};
pub use entity_type::{Closure, EntityType, Parameter, Spelling, Tuple};
pub use error::{SemanticError, SemanticResult};
pub use location::{extract, source_location};
pub use resolvers::{
    Accessor, AccessorKind, Associativity, Attribute, BranchKeyword, Fixity, FunctionSignature,
    GenericParameter, GenericRequirement, Modifier, Relation, Throwing,
};
pub use tree::SourceTree;
