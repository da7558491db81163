//! The Jack production table.
//!
//! Every production is built once, lazily, and lives for the program's
//! lifetime. [`element`] resolves a [`RuleRef`] to its grammar element;
//! [`label`] resolves it to the parse-tree node label it builds, if any.
//!
//! Branch order matters in two places:
//! - in `TERM`, subroutine calls are tried before array access, which is
//!   tried before a bare variable name, so the trailing `(`, `.`, or `[`
//!   decides which branch survives;
//! - in `SUBROUTINE_CALL`, the undotted form is tried first and fails on
//!   the `.` of a dotted call, rewinding for the second branch.

use once_cell::sync::Lazy;

use super::{GrammarElement, IdentifierCategory, RuleRef};
use crate::tree::NodeLabel;

use GrammarElement::{IntegerConstant, StringConstant};

fn fixed(text: &'static str) -> GrammarElement {
    GrammarElement::FixedTerminal(text)
}

fn var(category: IdentifierCategory) -> GrammarElement {
    GrammarElement::VarTerminal(category)
}

fn seq(elements: Vec<GrammarElement>) -> GrammarElement {
    GrammarElement::Sequence(elements)
}

fn alt(elements: Vec<GrammarElement>) -> GrammarElement {
    GrammarElement::Alternative(elements)
}

fn opt(element: GrammarElement) -> GrammarElement {
    GrammarElement::ZeroOrOne(Box::new(element))
}

fn repeat(element: GrammarElement) -> GrammarElement {
    GrammarElement::Repeat(Box::new(element))
}

fn rule(rule: RuleRef) -> GrammarElement {
    GrammarElement::Rule(rule)
}

// class ::= 'class' className '{' classVarDec* subroutineDec* '}'
static CLASS: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("class"),
        var(IdentifierCategory::ClassName),
        fixed("{"),
        repeat(rule(RuleRef::ClassVarDec)),
        repeat(rule(RuleRef::SubroutineDec)),
        fixed("}"),
    ])
});

// type ::= 'int' | 'char' | 'boolean' | className
static TYPE: Lazy<GrammarElement> = Lazy::new(|| {
    alt(vec![
        fixed("int"),
        fixed("char"),
        fixed("boolean"),
        var(IdentifierCategory::ClassName),
    ])
});

// keywordConstant ::= 'true' | 'false' | 'null' | 'this'
static KEYWORD_CONSTANT: Lazy<GrammarElement> = Lazy::new(|| {
    alt(vec![
        fixed("true"),
        fixed("false"),
        fixed("null"),
        fixed("this"),
    ])
});

// op ::= '+' | '-' | '*' | '/' | '&' | '|' | '<' | '>' | '='
static OP: Lazy<GrammarElement> = Lazy::new(|| {
    alt(vec![
        fixed("+"),
        fixed("-"),
        fixed("*"),
        fixed("/"),
        fixed("&"),
        fixed("|"),
        fixed("<"),
        fixed(">"),
        fixed("="),
    ])
});

// unaryOp ::= '-' | '~'
static UNARY_OP: Lazy<GrammarElement> = Lazy::new(|| alt(vec![fixed("-"), fixed("~")]));

// classVarDec ::= ('static' | 'field') type varName (',' varName)* ';'
static CLASS_VAR_DEC: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        alt(vec![fixed("static"), fixed("field")]),
        rule(RuleRef::Type),
        var(IdentifierCategory::VarName),
        repeat(seq(vec![fixed(","), var(IdentifierCategory::VarName)])),
        fixed(";"),
    ])
});

// subroutineDec ::= ('constructor' | 'function' | 'method')
//                   ('void' | type) subroutineName
//                   '(' parameterList ')' subroutineBody
static SUBROUTINE_DEC: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        alt(vec![fixed("constructor"), fixed("function"), fixed("method")]),
        alt(vec![fixed("void"), rule(RuleRef::Type)]),
        var(IdentifierCategory::SubroutineName),
        fixed("("),
        rule(RuleRef::ParameterList),
        fixed(")"),
        rule(RuleRef::SubroutineBody),
    ])
});

// parameterList ::= ((type varName) (',' type varName)*)?
static PARAMETER_LIST: Lazy<GrammarElement> = Lazy::new(|| {
    opt(seq(vec![
        rule(RuleRef::Type),
        var(IdentifierCategory::VarName),
        repeat(seq(vec![
            fixed(","),
            rule(RuleRef::Type),
            var(IdentifierCategory::VarName),
        ])),
    ]))
});

// subroutineBody ::= '{' varDec* statements '}'
static SUBROUTINE_BODY: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("{"),
        repeat(rule(RuleRef::VarDec)),
        rule(RuleRef::Statements),
        fixed("}"),
    ])
});

// varDec ::= 'var' type varName (',' varName)* ';'
static VAR_DEC: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("var"),
        rule(RuleRef::Type),
        var(IdentifierCategory::VarName),
        repeat(seq(vec![fixed(","), var(IdentifierCategory::VarName)])),
        fixed(";"),
    ])
});

// statements ::= statement*
static STATEMENTS: Lazy<GrammarElement> = Lazy::new(|| {
    repeat(alt(vec![
        rule(RuleRef::LetStatement),
        rule(RuleRef::IfStatement),
        rule(RuleRef::WhileStatement),
        rule(RuleRef::DoStatement),
        rule(RuleRef::ReturnStatement),
    ]))
});

// letStatement ::= 'let' varName ('[' expression ']')? '=' expression ';'
static LET_STATEMENT: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("let"),
        var(IdentifierCategory::VarName),
        opt(seq(vec![
            fixed("["),
            rule(RuleRef::Expression),
            fixed("]"),
        ])),
        fixed("="),
        rule(RuleRef::Expression),
        fixed(";"),
    ])
});

// ifStatement ::= 'if' '(' expression ')' '{' statements '}'
//                 ('else' '{' statements '}')?
static IF_STATEMENT: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("if"),
        fixed("("),
        rule(RuleRef::Expression),
        fixed(")"),
        fixed("{"),
        rule(RuleRef::Statements),
        fixed("}"),
        opt(seq(vec![
            fixed("else"),
            fixed("{"),
            rule(RuleRef::Statements),
            fixed("}"),
        ])),
    ])
});

// whileStatement ::= 'while' '(' expression ')' '{' statements '}'
static WHILE_STATEMENT: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("while"),
        fixed("("),
        rule(RuleRef::Expression),
        fixed(")"),
        fixed("{"),
        rule(RuleRef::Statements),
        fixed("}"),
    ])
});

// doStatement ::= 'do' subroutineCall ';'
static DO_STATEMENT: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("do"),
        rule(RuleRef::SubroutineCall),
        fixed(";"),
    ])
});

// returnStatement ::= 'return' expression? ';'
static RETURN_STATEMENT: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        fixed("return"),
        opt(rule(RuleRef::Expression)),
        fixed(";"),
    ])
});

// expression ::= term (op term)*
static EXPRESSION: Lazy<GrammarElement> = Lazy::new(|| {
    seq(vec![
        rule(RuleRef::Term),
        repeat(seq(vec![rule(RuleRef::Op), rule(RuleRef::Term)])),
    ])
});

// term ::= integerConstant | stringConstant | keywordConstant
//        | subroutineCall | varName '[' expression ']' | varName
//        | '(' expression ')' | unaryOp term
static TERM: Lazy<GrammarElement> = Lazy::new(|| {
    alt(vec![
        IntegerConstant,
        StringConstant,
        rule(RuleRef::KeywordConstant),
        rule(RuleRef::SubroutineCall),
        seq(vec![
            var(IdentifierCategory::VarName),
            fixed("["),
            rule(RuleRef::Expression),
            fixed("]"),
        ]),
        var(IdentifierCategory::VarName),
        seq(vec![fixed("("), rule(RuleRef::Expression), fixed(")")]),
        seq(vec![rule(RuleRef::UnaryOp), rule(RuleRef::Term)]),
    ])
});

// expressionList ::= (expression (',' expression)*)?
static EXPRESSION_LIST: Lazy<GrammarElement> = Lazy::new(|| {
    opt(seq(vec![
        rule(RuleRef::Expression),
        repeat(seq(vec![fixed(","), rule(RuleRef::Expression)])),
    ]))
});

// subroutineCall ::= subroutineName '(' expressionList ')'
//                  | (className | varName) '.' subroutineName
//                    '(' expressionList ')'
static SUBROUTINE_CALL: Lazy<GrammarElement> = Lazy::new(|| {
    alt(vec![
        seq(vec![
            var(IdentifierCategory::SubroutineName),
            fixed("("),
            rule(RuleRef::ExpressionList),
            fixed(")"),
        ]),
        seq(vec![
            var(IdentifierCategory::ClassName),
            fixed("."),
            var(IdentifierCategory::SubroutineName),
            fixed("("),
            rule(RuleRef::ExpressionList),
            fixed(")"),
        ]),
    ])
});

/// Returns the top-level class production.
pub fn class_rule() -> &'static GrammarElement {
    &CLASS
}

/// Resolves a production tag to its grammar element.
pub fn element(rule: RuleRef) -> &'static GrammarElement {
    match rule {
        RuleRef::ClassVarDec => &CLASS_VAR_DEC,
        RuleRef::SubroutineDec => &SUBROUTINE_DEC,
        RuleRef::ParameterList => &PARAMETER_LIST,
        RuleRef::SubroutineBody => &SUBROUTINE_BODY,
        RuleRef::VarDec => &VAR_DEC,
        RuleRef::Statements => &STATEMENTS,
        RuleRef::LetStatement => &LET_STATEMENT,
        RuleRef::IfStatement => &IF_STATEMENT,
        RuleRef::WhileStatement => &WHILE_STATEMENT,
        RuleRef::DoStatement => &DO_STATEMENT,
        RuleRef::ReturnStatement => &RETURN_STATEMENT,
        RuleRef::Expression => &EXPRESSION,
        RuleRef::Term => &TERM,
        RuleRef::ExpressionList => &EXPRESSION_LIST,
        RuleRef::SubroutineCall => &SUBROUTINE_CALL,
        RuleRef::Type => &TYPE,
        RuleRef::KeywordConstant => &KEYWORD_CONSTANT,
        RuleRef::Op => &OP,
        RuleRef::UnaryOp => &UNARY_OP,
    }
}

/// Resolves a production tag to the node label it builds, if any.
pub fn label(rule: RuleRef) -> Option<NodeLabel> {
    rule.node_label()
}
