//! Child collector
//!
//! Walks the body regions of a syntax tree and builds a
//! [`DeclarationCollection`] for each, recursing into every declaration's own
//! body. Each node is dispatched on its `SyntaxKind`:
//!
//! - declaration nodes become model objects,
//! - control-flow statements and code blocks are transparent (their
//!   declarations belong to the enclosing region),
//! - everything else is pruned without descending into it.

use tracing::trace;

use super::collection::DeclarationCollection;
use super::declarations::{
    Actor, AssociatedType, Branch, Class, ConditionalCompilationBlock, DeclarationKind,
    Deinitializer, EnumCase, Enumeration, Extension, Function, Import, Initializer, Operator,
    PrecedenceGroup, Protocol, Structure, Subscript, Typealias, Variable,
};
use super::resolvers::BranchKeyword;
use crate::parser::ast::{self, AstNode};
use crate::parser::{SyntaxKind, SyntaxNode};

/// Collector configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Descend into function, initializer, deinitializer and accessor bodies.
    /// Member blocks of containers are always collected.
    pub collect_local_declarations: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            collect_local_declarations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Declaration(DeclarationKind),
    Transparent,
    Prune,
}

fn dispatch(kind: SyntaxKind) -> Dispatch {
    let declaration = match kind {
        SyntaxKind::STRUCT_DECL => DeclarationKind::Structure,
        SyntaxKind::CLASS_DECL => DeclarationKind::Class,
        SyntaxKind::ACTOR_DECL => DeclarationKind::Actor,
        SyntaxKind::ENUM_DECL => DeclarationKind::Enumeration,
        SyntaxKind::EXTENSION_DECL => DeclarationKind::Extension,
        SyntaxKind::PROTOCOL_DECL => DeclarationKind::Protocol,
        SyntaxKind::FUNCTION_DECL => DeclarationKind::Function,
        SyntaxKind::VARIABLE_DECL => DeclarationKind::Variable,
        SyntaxKind::INITIALIZER_DECL => DeclarationKind::Initializer,
        SyntaxKind::DEINITIALIZER_DECL => DeclarationKind::Deinitializer,
        SyntaxKind::SUBSCRIPT_DECL => DeclarationKind::Subscript,
        SyntaxKind::TYPEALIAS_DECL => DeclarationKind::Typealias,
        SyntaxKind::OPERATOR_DECL => DeclarationKind::Operator,
        SyntaxKind::PRECEDENCE_GROUP_DECL => DeclarationKind::PrecedenceGroup,
        SyntaxKind::IMPORT_DECL => DeclarationKind::Import,
        SyntaxKind::ASSOCIATED_TYPE_DECL => DeclarationKind::AssociatedType,
        SyntaxKind::ENUM_CASE_DECL => DeclarationKind::EnumCase,
        SyntaxKind::IF_CONFIG_DECL => DeclarationKind::ConditionalCompilationBlock,
        SyntaxKind::CONTROL_STMT | SyntaxKind::CODE_BLOCK => return Dispatch::Transparent,
        _ => return Dispatch::Prune,
    };
    Dispatch::Declaration(declaration)
}

pub(crate) struct Collector {
    options: CollectOptions,
}

impl Collector {
    pub(crate) fn new(options: CollectOptions) -> Self {
        Self { options }
    }

    /// Collect the top-level declarations of a `SOURCE_FILE` node.
    pub(crate) fn collect_source_file(&self, root: &SyntaxNode) -> DeclarationCollection {
        self.collect_region(root.children())
    }

    fn collect_region(&self, nodes: impl Iterator<Item = SyntaxNode>) -> DeclarationCollection {
        let mut collection = DeclarationCollection::new();
        for node in nodes {
            self.visit(node, &mut collection);
        }
        collection
    }

    fn visit(&self, node: SyntaxNode, out: &mut DeclarationCollection) {
        match dispatch(node.kind()) {
            Dispatch::Declaration(kind) => self.collect_declaration(kind, node, out),
            Dispatch::Transparent if self.options.collect_local_declarations => {
                for child in node.children() {
                    self.visit(child, out);
                }
            }
            Dispatch::Transparent | Dispatch::Prune => {
                trace!(
                    "[COLLECT] pruned {:?} at {:?}",
                    node.kind(),
                    node.text_range()
                );
            }
        }
    }

    fn members(&self, block: Option<ast::MemberBlock>) -> DeclarationCollection {
        match block {
            Some(block) => self.collect_region(block.items()),
            None => DeclarationCollection::new(),
        }
    }

    fn body(&self, block: Option<ast::CodeBlock>) -> DeclarationCollection {
        match block {
            Some(block) if self.options.collect_local_declarations => {
                self.collect_region(block.items())
            }
            _ => DeclarationCollection::new(),
        }
    }

    /// Locals of every accessor body of a property or subscript, in source order
    fn accessor_bodies(&self, block: Option<ast::AccessorBlock>) -> DeclarationCollection {
        let mut collection = DeclarationCollection::new();
        let Some(block) = block else {
            return collection;
        };
        if !self.options.collect_local_declarations {
            return collection;
        }
        if let Some(getter) = block.implicit_getter() {
            for node in getter.items() {
                self.visit(node, &mut collection);
            }
        }
        for body in block.accessors().filter_map(|accessor| accessor.body()) {
            for node in body.items() {
                self.visit(node, &mut collection);
            }
        }
        collection
    }

    fn collect_declaration(
        &self,
        kind: DeclarationKind,
        node: SyntaxNode,
        out: &mut DeclarationCollection,
    ) {
        trace!("[COLLECT] {:?} at {:?}", kind, node.text_range());
        match kind {
            DeclarationKind::Structure => {
                if let Some(decl) = ast::StructDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Structure::new(decl, members));
                }
            }
            DeclarationKind::Class => {
                if let Some(decl) = ast::ClassDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Class::new(decl, members));
                }
            }
            DeclarationKind::Actor => {
                if let Some(decl) = ast::ActorDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Actor::new(decl, members));
                }
            }
            DeclarationKind::Enumeration => {
                if let Some(decl) = ast::EnumDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Enumeration::new(decl, members));
                }
            }
            DeclarationKind::Extension => {
                if let Some(decl) = ast::ExtensionDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Extension::new(decl, members));
                }
            }
            DeclarationKind::Protocol => {
                if let Some(decl) = ast::ProtocolDecl::cast(node) {
                    let members = self.members(decl.member_block());
                    out.push(Protocol::new(decl, members));
                }
            }
            DeclarationKind::Function => {
                if let Some(decl) = ast::FunctionDecl::cast(node) {
                    let locals = self.body(decl.body());
                    out.push(Function::new(decl, locals));
                }
            }
            DeclarationKind::Initializer => {
                if let Some(decl) = ast::InitializerDecl::cast(node) {
                    let locals = self.body(decl.body());
                    out.push(Initializer::new(decl, locals));
                }
            }
            DeclarationKind::Deinitializer => {
                if let Some(decl) = ast::DeinitializerDecl::cast(node) {
                    let locals = self.body(decl.body());
                    out.push(Deinitializer::new(decl, locals));
                }
            }
            DeclarationKind::Subscript => {
                if let Some(decl) = ast::SubscriptDecl::cast(node) {
                    let locals = self.accessor_bodies(decl.accessor_block());
                    out.push(Subscript::new(decl, locals));
                }
            }
            DeclarationKind::Variable => {
                if let Some(decl) = ast::VariableDecl::cast(node) {
                    self.collect_variables(decl, out);
                }
            }
            DeclarationKind::EnumCase => {
                if let Some(decl) = ast::EnumCaseDecl::cast(node) {
                    let elements: Vec<_> = decl.elements().collect();
                    if elements.is_empty() {
                        out.push(EnumCase::new(decl, None, true));
                    } else {
                        let is_single = elements.len() == 1;
                        for element in elements {
                            out.push(EnumCase::new(decl.clone(), Some(element), is_single));
                        }
                    }
                }
            }
            DeclarationKind::Typealias => {
                if let Some(decl) = ast::TypealiasDecl::cast(node) {
                    out.push(Typealias::new(decl));
                }
            }
            DeclarationKind::AssociatedType => {
                if let Some(decl) = ast::AssociatedTypeDecl::cast(node) {
                    out.push(AssociatedType::new(decl));
                }
            }
            DeclarationKind::Operator => {
                if let Some(decl) = ast::OperatorDecl::cast(node) {
                    out.push(Operator::new(decl));
                }
            }
            DeclarationKind::PrecedenceGroup => {
                if let Some(decl) = ast::PrecedenceGroupDecl::cast(node) {
                    out.push(PrecedenceGroup::new(decl));
                }
            }
            DeclarationKind::Import => {
                if let Some(decl) = ast::ImportDecl::cast(node) {
                    out.push(Import::new(decl));
                }
            }
            DeclarationKind::ConditionalCompilationBlock => {
                if let Some(decl) = ast::IfConfigDecl::cast(node) {
                    let branches = self.branches(&decl);
                    out.push(ConditionalCompilationBlock::new(decl, branches));
                }
            }
        }
    }

    /// One variable per binding
    fn collect_variables(&self, decl: ast::VariableDecl, out: &mut DeclarationCollection) {
        let bindings: Vec<_> = decl.bindings().collect();
        if bindings.is_empty() {
            out.push(Variable::new(decl, None, true, DeclarationCollection::new()));
            return;
        }
        let is_single = bindings.len() == 1;
        for binding in bindings {
            let locals = self.accessor_bodies(binding.accessor_block());
            out.push(Variable::new(decl.clone(), Some(binding), is_single, locals));
        }
    }

    fn branches(&self, decl: &ast::IfConfigDecl) -> Vec<Branch> {
        decl.clauses()
            .map(|clause| {
                let keyword = match clause.keyword() {
                    Some(SyntaxKind::POUND_ELSEIF) => BranchKeyword::ElseIf,
                    Some(SyntaxKind::POUND_ELSE) => BranchKeyword::Else,
                    _ => BranchKeyword::If,
                };
                Branch {
                    keyword,
                    condition: clause.condition().map(|c| c.text()),
                    declarations: self.collect_region(clause.items()),
                }
            })
            .collect()
    }
}
