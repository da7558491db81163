//! The reified Jack grammar.
//!
//! This module models the Jack grammar as data: every production is a
//! [`GrammarElement`] value, and the parser is an interpreter over these
//! values. Recursive productions reference each other through the tagged
//! [`RuleRef`] enum rather than function pointers, so the whole grammar is
//! a set of immutable values built once at startup (see [`rules`]).
//!
//! # Element semantics
//!
//! - [`GrammarElement::FixedTerminal`] matches exactly one keyword or
//!   symbol by its source text.
//! - [`GrammarElement::VarTerminal`] matches any identifier; its
//!   [`IdentifierCategory`] records what the grammar expected at that
//!   position and is stamped onto the resulting tree node.
//! - [`GrammarElement::IntegerConstant`] / [`GrammarElement::StringConstant`]
//!   match a token of that kind.
//! - [`GrammarElement::Sequence`] matches all elements in order; on a
//!   partial match it rewinds the token index before failing, so an
//!   enclosing [`GrammarElement::Alternative`] can try its next branch.
//! - [`GrammarElement::Alternative`] tries branches in order; the first
//!   match wins, a full miss propagates the failure.
//! - [`GrammarElement::ZeroOrOne`] and [`GrammarElement::Repeat`] absorb
//!   failure (empty match, stop repeating).
//! - [`GrammarElement::Rule`] is the indirection enabling recursion.
//!
//! # See Also
//!
//! * [`crate::parser`] - The interpreter over these elements
//! * [`crate::tree`] - The parse tree the interpreter builds

pub mod rules;

pub use rules::{class_rule, element, label};

use crate::tree::NodeLabel;

/// What the grammar expects an identifier at a given position to name.
///
/// Stamped onto identifier nodes during parsing, this removes all
/// ancestor-walking from the code generator: a node knows whether it was
/// parsed as a class name, a subroutine name, or a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCategory {
    ClassName,
    SubroutineName,
    VarName,
}

impl IdentifierCategory {
    /// Returns the category label as it appears in the grammar.
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierCategory::ClassName => "className",
            IdentifierCategory::SubroutineName => "subroutineName",
            IdentifierCategory::VarName => "varName",
        }
    }
}

/// A reified grammar element.
///
/// Each variant corresponds to one parser combinator; see the module
/// documentation for matching semantics.
#[derive(Debug)]
pub enum GrammarElement {
    /// Matches exactly this keyword or symbol text.
    FixedTerminal(&'static str),
    /// Matches any identifier and stamps it with the category.
    VarTerminal(IdentifierCategory),
    /// Matches an integer constant token.
    IntegerConstant,
    /// Matches a string constant token.
    StringConstant,
    /// All elements must match, in order.
    Sequence(Vec<GrammarElement>),
    /// The first matching branch wins.
    Alternative(Vec<GrammarElement>),
    /// Optional element.
    ZeroOrOne(Box<GrammarElement>),
    /// Zero or more repetitions.
    Repeat(Box<GrammarElement>),
    /// Indirect reference to a named production.
    Rule(RuleRef),
}

/// The fixed set of named Jack productions.
///
/// Labeled productions wrap their children in a parse-tree node (see
/// [`label`]); the unlabeled ones (`Type`, `KeywordConstant`, `Op`,
/// `UnaryOp`, `SubroutineCall`) splice their children into the enclosing
/// node, matching the standard Jack tree shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleRef {
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
    SubroutineCall,
    Type,
    KeywordConstant,
    Op,
    UnaryOp,
}

impl RuleRef {
    /// Returns the node label this production builds, or `None` for
    /// productions whose children splice into the enclosing node.
    pub fn node_label(self) -> Option<NodeLabel> {
        match self {
            RuleRef::ClassVarDec => Some(NodeLabel::ClassVarDec),
            RuleRef::SubroutineDec => Some(NodeLabel::SubroutineDec),
            RuleRef::ParameterList => Some(NodeLabel::ParameterList),
            RuleRef::SubroutineBody => Some(NodeLabel::SubroutineBody),
            RuleRef::VarDec => Some(NodeLabel::VarDec),
            RuleRef::Statements => Some(NodeLabel::Statements),
            RuleRef::LetStatement => Some(NodeLabel::LetStatement),
            RuleRef::IfStatement => Some(NodeLabel::IfStatement),
            RuleRef::WhileStatement => Some(NodeLabel::WhileStatement),
            RuleRef::DoStatement => Some(NodeLabel::DoStatement),
            RuleRef::ReturnStatement => Some(NodeLabel::ReturnStatement),
            RuleRef::Expression => Some(NodeLabel::Expression),
            RuleRef::Term => Some(NodeLabel::Term),
            RuleRef::ExpressionList => Some(NodeLabel::ExpressionList),
            RuleRef::SubroutineCall
            | RuleRef::Type
            | RuleRef::KeywordConstant
            | RuleRef::Op
            | RuleRef::UnaryOp => None,
        }
    }
}
