//! Arena-based concrete parse tree.
//!
//! This module defines the parse tree produced by the parser and consumed
//! by the code generator. Nodes live in an arena owned by [`ParseTree`]
//! and reference each other through [`NodeId`] handles, so the parent
//! back-references form no ownership cycles.
//!
//! # Shape
//!
//! - Interior nodes are labeled with a [`NodeLabel`]: either a grammar
//!   rule name (`class`, `letStatement`, `expression`, ...) or a token
//!   category name (`keyword`, `identifier`, ...).
//! - Leaf nodes carry literal token text and have no label. Every leaf's
//!   parent is a token-category node, and every token-category node has
//!   exactly one leaf child.
//! - Identifier nodes additionally carry the [`IdentifierCategory`] the
//!   grammar expected at their position, stamped during parsing.
//!
//! The tree is immutable after parsing; traversal state belongs to the
//! consumer, never to the nodes.

use crate::grammar::IdentifierCategory;

/// A label on an interior parse-tree node.
///
/// Covers the grammar rule names that produce nodes plus the five token
/// category names used for terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLabel {
    Class,
    ClassVarDec,
    SubroutineDec,
    ParameterList,
    SubroutineBody,
    VarDec,
    Statements,
    LetStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    Expression,
    Term,
    ExpressionList,
    Keyword,
    Symbol,
    IntegerConstant,
    StringConstant,
    Identifier,
}

impl NodeLabel {
    /// Returns the canonical rule or category name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeLabel::Class => "class",
            NodeLabel::ClassVarDec => "classVarDec",
            NodeLabel::SubroutineDec => "subroutineDec",
            NodeLabel::ParameterList => "parameterList",
            NodeLabel::SubroutineBody => "subroutineBody",
            NodeLabel::VarDec => "varDec",
            NodeLabel::Statements => "statements",
            NodeLabel::LetStatement => "letStatement",
            NodeLabel::IfStatement => "ifStatement",
            NodeLabel::WhileStatement => "whileStatement",
            NodeLabel::DoStatement => "doStatement",
            NodeLabel::ReturnStatement => "returnStatement",
            NodeLabel::Expression => "expression",
            NodeLabel::Term => "term",
            NodeLabel::ExpressionList => "expressionList",
            NodeLabel::Keyword => "keyword",
            NodeLabel::Symbol => "symbol",
            NodeLabel::IntegerConstant => "integerConstant",
            NodeLabel::StringConstant => "stringConstant",
            NodeLabel::Identifier => "identifier",
        }
    }

    /// Returns `true` if this label names a token category rather than a
    /// grammar rule.
    pub fn is_token(self) -> bool {
        matches!(
            self,
            NodeLabel::Keyword
                | NodeLabel::Symbol
                | NodeLabel::IntegerConstant
                | NodeLabel::StringConstant
                | NodeLabel::Identifier
        )
    }
}

/// A handle to a node in a [`ParseTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A single parse-tree node.
#[derive(Debug)]
struct Node {
    /// `Some` for interior nodes, `None` for text leaves.
    label: Option<NodeLabel>,
    /// Literal token text; non-empty only for leaves.
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Stamped grammar category; set only on identifier nodes.
    category: Option<IdentifierCategory>,
}

/// A concrete parse tree stored in an arena.
///
/// The first node added is the root; for trees built by the parser the
/// root is always labeled `class`.
#[derive(Debug, Default)]
pub struct ParseTree {
    nodes: Vec<Node>,
}

impl ParseTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        ParseTree { nodes: Vec::new() }
    }

    /// Returns the root node handle.
    ///
    /// # Panics
    /// Panics if the tree is empty. The parser always creates the root
    /// before anything else.
    pub fn root(&self) -> NodeId {
        assert!(!self.nodes.is_empty(), "Parse tree must not be empty");
        NodeId(0)
    }

    /// Adds an unattached interior node with the given label.
    pub fn add_interior(&mut self, label: NodeLabel) -> NodeId {
        self.push(Node {
            label: Some(label),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            category: None,
        })
    }

    /// Adds an unattached leaf carrying literal token text.
    pub fn add_leaf(&mut self, text: impl Into<String>) -> NodeId {
        self.push(Node {
            label: None,
            text: text.into(),
            parent: None,
            children: Vec::new(),
            category: None,
        })
    }

    /// Attaches `child` as the next child of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Attaches every node in `children`, in order, to `parent`.
    pub fn attach_all(&mut self, parent: NodeId, children: Vec<NodeId>) {
        for child in children {
            self.attach(parent, child);
        }
    }

    /// Stamps an identifier node with its grammar category.
    pub fn set_category(&mut self, id: NodeId, category: IdentifierCategory) {
        self.nodes[id.0].category = Some(category);
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // Queries

    /// Returns the label of an interior node, or `None` for a leaf.
    pub fn label(&self, id: NodeId) -> Option<NodeLabel> {
        self.nodes[id.0].label
    }

    /// Returns `true` if the node is a text leaf.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].label.is_none()
    }

    /// Returns the literal text of a leaf, or `None` for interior nodes.
    pub fn leaf_text(&self, id: NodeId) -> Option<&str> {
        let node = &self.nodes[id.0];
        node.label.is_none().then_some(node.text.as_str())
    }

    /// Returns the parent handle, or `None` for the root and unattached
    /// nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns the ordered children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns the stamped identifier category, if any.
    pub fn category(&self, id: NodeId) -> Option<IdentifierCategory> {
        self.nodes[id.0].category
    }

    /// Returns the token text of a token-category node.
    ///
    /// Token nodes hold their lexeme in a single leaf child; this is the
    /// query the code generator uses to read terminal values.
    pub fn token_text(&self, id: NodeId) -> Option<&str> {
        let node = &self.nodes[id.0];
        if !node.label.is_some_and(NodeLabel::is_token) {
            return None;
        }
        node.children.first().and_then(|c| self.leaf_text(*c))
    }

    /// Returns the first child of `id` with the given label.
    pub fn first_child(&self, id: NodeId, label: NodeLabel) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|c| self.label(*c) == Some(label))
    }

    /// Returns all children of `id` with the given label, in order.
    pub fn children_labeled(&self, id: NodeId, label: NodeLabel) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.label(*c) == Some(label))
            .collect()
    }

    /// Returns `true` if some child of `id` is a symbol node holding the
    /// given symbol text.
    pub fn has_symbol_child(&self, id: NodeId, symbol: &str) -> bool {
        self.children(id).iter().any(|c| {
            self.label(*c) == Some(NodeLabel::Symbol) && self.token_text(*c) == Some(symbol)
        })
    }

    /// Returns handles of every node in the arena, including unattached
    /// ones. Intended for whole-tree invariant checks.
    pub fn all_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }
}
