//! The grammar-element interpreter.
//!
//! Each method matches one element variant against the token stream and
//! returns the parse-tree nodes it built. Failures are ordinary
//! [`ParseError`] values; combinators that backtrack restore the token
//! index before absorbing or propagating them, so a failed branch leaves
//! the stream exactly where it found it. Nodes built by a failed branch
//! stay unattached in the arena.

use super::Parser;
use super::error::ParseError;
use crate::grammar::{self, GrammarElement, IdentifierCategory, RuleRef};
use crate::token::{TokenCategory, TokenKind};
use crate::tree::{NodeId, NodeLabel, ParseTree};

impl Parser {
    /// Matches one grammar element, returning the nodes it produced.
    pub(super) fn apply(
        &mut self,
        element: &GrammarElement,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        match element {
            GrammarElement::FixedTerminal(text) => self.match_fixed(text, tree),
            GrammarElement::VarTerminal(category) => self.match_identifier(*category, tree),
            GrammarElement::IntegerConstant => {
                self.match_constant(TokenCategory::IntegerConstant, tree)
            }
            GrammarElement::StringConstant => {
                self.match_constant(TokenCategory::StringConstant, tree)
            }
            GrammarElement::Sequence(elements) => self.match_sequence(elements, tree),
            GrammarElement::Alternative(elements) => self.match_alternative(elements, tree),
            GrammarElement::ZeroOrOne(element) => self.match_zero_or_one(element, tree),
            GrammarElement::Repeat(element) => self.match_repeat(element, tree),
            GrammarElement::Rule(rule) => self.match_rule(*rule, tree),
        }
    }

    /// Matches a fixed keyword or symbol by its source text.
    fn match_fixed(
        &mut self,
        expected: &'static str,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let token = self
            .peek()
            .ok_or_else(|| ParseError::unexpected_end_of_input(expected, self.end_span()))?;

        let matches = match &token.kind {
            TokenKind::Keyword(keyword) => keyword.as_str() == expected,
            TokenKind::Symbol(symbol) => {
                expected.len() == 1 && expected.starts_with(symbol.as_char())
            }
            _ => false,
        };
        if !matches {
            return Err(ParseError::unexpected_token(
                &format!("'{}'", expected),
                &format!("'{}'", token.kind.text()),
                token.span,
            ));
        }

        let label = match token.kind.category() {
            TokenCategory::Keyword => NodeLabel::Keyword,
            _ => NodeLabel::Symbol,
        };
        let text = token.kind.text();
        self.pos += 1;

        Ok(vec![Self::token_node(tree, label, text, None)])
    }

    /// Matches any identifier and stamps its grammar category.
    fn match_identifier(
        &mut self,
        category: IdentifierCategory,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let token = self.peek().ok_or_else(|| {
            ParseError::unexpected_end_of_input(category.as_str(), self.end_span())
        })?;

        let name = match &token.kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => {
                return Err(ParseError::unexpected_token(
                    category.as_str(),
                    &format!("'{}'", token.kind.text()),
                    token.span,
                ));
            }
        };
        self.pos += 1;

        Ok(vec![Self::token_node(
            tree,
            NodeLabel::Identifier,
            name,
            Some(category),
        )])
    }

    /// Matches an integer or string constant token.
    fn match_constant(
        &mut self,
        category: TokenCategory,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let token = self.peek().ok_or_else(|| {
            ParseError::unexpected_end_of_input(category.as_str(), self.end_span())
        })?;

        if token.kind.category() != category {
            return Err(ParseError::unexpected_token(
                category.as_str(),
                &format!("'{}'", token.kind.text()),
                token.span,
            ));
        }

        let label = match category {
            TokenCategory::IntegerConstant => NodeLabel::IntegerConstant,
            _ => NodeLabel::StringConstant,
        };
        let text = token.kind.text();
        self.pos += 1;

        Ok(vec![Self::token_node(tree, label, text, None)])
    }

    /// Matches every element in order, rewinding the token index on a
    /// partial match before propagating the failure.
    fn match_sequence(
        &mut self,
        elements: &[GrammarElement],
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let checkpoint = self.pos;
        let mut nodes = Vec::new();

        for element in elements {
            match self.apply(element, tree) {
                Ok(children) => nodes.extend(children),
                Err(error) => {
                    self.pos = checkpoint;
                    return Err(error);
                }
            }
        }

        Ok(nodes)
    }

    /// Tries each branch in order; the first match wins. On a full miss,
    /// the error of the branch that consumed the most input is kept: it
    /// points at the most specific expectation.
    fn match_alternative(
        &mut self,
        elements: &[GrammarElement],
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let checkpoint = self.pos;
        let mut best: Option<ParseError> = None;

        for element in elements {
            match self.apply(element, tree) {
                Ok(nodes) => return Ok(nodes),
                Err(error) => {
                    self.pos = checkpoint;
                    let further = best
                        .as_ref()
                        .is_none_or(|b| error.span().start > b.span().start);
                    if further {
                        best = Some(error);
                    }
                }
            }
        }

        Err(match best {
            Some(error) => error,
            None => ParseError::no_matching_branch(self.end_span()),
        })
    }

    /// Matches the element zero or one times.
    fn match_zero_or_one(
        &mut self,
        element: &GrammarElement,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let checkpoint = self.pos;
        match self.apply(element, tree) {
            Ok(nodes) => Ok(nodes),
            Err(_) => {
                self.pos = checkpoint;
                Ok(Vec::new())
            }
        }
    }

    /// Matches the element zero or more times, stopping at the first
    /// failure of its body.
    fn match_repeat(
        &mut self,
        element: &GrammarElement,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            let checkpoint = self.pos;
            match self.apply(element, tree) {
                Ok(children) => {
                    // A nullable body that consumed nothing would repeat
                    // forever; treat it as done.
                    if self.pos == checkpoint {
                        nodes.extend(children);
                        return Ok(nodes);
                    }
                    nodes.extend(children);
                }
                Err(_) => {
                    self.pos = checkpoint;
                    return Ok(nodes);
                }
            }
        }
    }

    /// Dispatches on a production tag. Labeled productions wrap their
    /// children in a new interior node; unlabeled ones splice them into
    /// the caller.
    fn match_rule(
        &mut self,
        rule: RuleRef,
        tree: &mut ParseTree,
    ) -> Result<Vec<NodeId>, ParseError> {
        let element = grammar::element(rule);

        match grammar::label(rule) {
            Some(label) => {
                let node = tree.add_interior(label);
                let children = self.apply(element, tree)?;
                tree.attach_all(node, children);
                Ok(vec![node])
            }
            None => self.apply(element, tree),
        }
    }

    /// Builds a token node: a category-labeled interior node holding one
    /// text leaf.
    fn token_node(
        tree: &mut ParseTree,
        label: NodeLabel,
        text: String,
        category: Option<IdentifierCategory>,
    ) -> NodeId {
        let node = tree.add_interior(label);
        let leaf = tree.add_leaf(text);
        tree.attach(node, leaf);
        if let Some(category) = category {
            tree.set_category(node, category);
        }
        node
    }
}
