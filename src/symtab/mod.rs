//! Two-scope symbol table for Jack code generation.
//!
//! A class scope holds `static` and `field` symbols; a subroutine scope
//! holds `argument` and local `var` symbols and is replaced wholesale at
//! the start of every subroutine. Each of the four kinds numbers its
//! symbols densely from zero, which is exactly the index the generated
//! VM code uses within the kind's memory segment.
//!
//! Lookups search the subroutine scope first, then the class scope, so
//! locals and arguments shadow fields and statics of the same name.

use std::collections::HashMap;

/// The storage class of a named identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A class-level `static` variable.
    Static,
    /// A class-level `field` variable.
    Field,
    /// A subroutine argument.
    Arg,
    /// A subroutine local declared with `var`.
    Var,
}

/// A defined symbol: its declared type and its index within its kind.
#[derive(Debug, Clone)]
struct Entry {
    ty: String,
    index: u16,
}

/// One kind's name → (type, index) sub-table.
#[derive(Debug, Default)]
struct KindTable {
    entries: HashMap<String, Entry>,
}

impl KindTable {
    /// Inserts a symbol at the next free index and returns that index.
    fn define(&mut self, name: &str, ty: &str) -> u16 {
        let index = self.entries.len() as u16;
        self.entries.insert(
            name.to_string(),
            Entry {
                ty: ty.to_string(),
                index,
            },
        );
        index
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    fn len(&self) -> u16 {
        self.entries.len() as u16
    }
}

/// The two-scope symbol table.
///
/// # Example
///
/// ```
/// use jackc::symtab::{SymbolKind, SymbolTable};
///
/// let mut symbols = SymbolTable::new();
/// symbols.define("x", "int", SymbolKind::Field);
/// symbols.start_subroutine();
/// symbols.define("x", "Point", SymbolKind::Arg);
///
/// // The argument shadows the field.
/// assert_eq!(symbols.kind_of("x"), Some(SymbolKind::Arg));
/// assert_eq!(symbols.type_of("x"), Some("Point"));
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    statics: KindTable,
    fields: KindTable,
    args: KindTable,
    vars: KindTable,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Drops and recreates the subroutine scope.
    ///
    /// Called at the start of every subroutine; class-scope symbols are
    /// untouched.
    pub fn start_subroutine(&mut self) {
        self.args = KindTable::default();
        self.vars = KindTable::default();
    }

    /// Defines a symbol, assigning the next free index for its kind.
    ///
    /// Names must be unique within their scope; redefining a name
    /// replaces the previous entry. Returns the assigned index.
    pub fn define(&mut self, name: &str, ty: &str, kind: SymbolKind) -> u16 {
        self.table_mut(kind).define(name, ty)
    }

    /// Returns the number of symbols defined for a kind.
    pub fn var_count(&self, kind: SymbolKind) -> u16 {
        self.table(kind).len()
    }

    /// Returns the kind of a symbol, searching subroutine scope first.
    pub fn kind_of(&self, name: &str) -> Option<SymbolKind> {
        self.lookup(name).map(|(kind, _)| kind)
    }

    /// Returns the declared type of a symbol.
    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.lookup(name).map(|(_, entry)| entry.ty.as_str())
    }

    /// Returns the index of a symbol within its kind.
    pub fn index_of(&self, name: &str) -> Option<u16> {
        self.lookup(name).map(|(_, entry)| entry.index)
    }

    fn lookup(&self, name: &str) -> Option<(SymbolKind, &Entry)> {
        for kind in [
            SymbolKind::Arg,
            SymbolKind::Var,
            SymbolKind::Static,
            SymbolKind::Field,
        ] {
            if let Some(entry) = self.table(kind).get(name) {
                return Some((kind, entry));
            }
        }
        None
    }

    fn table(&self, kind: SymbolKind) -> &KindTable {
        match kind {
            SymbolKind::Static => &self.statics,
            SymbolKind::Field => &self.fields,
            SymbolKind::Arg => &self.args,
            SymbolKind::Var => &self.vars,
        }
    }

    fn table_mut(&mut self, kind: SymbolKind) -> &mut KindTable {
        match kind {
            SymbolKind::Static => &mut self.statics,
            SymbolKind::Field => &mut self.fields,
            SymbolKind::Arg => &mut self.args,
            SymbolKind::Var => &mut self.vars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense_per_kind() {
        let mut symbols = SymbolTable::new();
        assert_eq!(symbols.define("a", "int", SymbolKind::Field), 0);
        assert_eq!(symbols.define("b", "int", SymbolKind::Field), 1);
        assert_eq!(symbols.define("c", "int", SymbolKind::Static), 0);
        symbols.start_subroutine();
        assert_eq!(symbols.define("d", "int", SymbolKind::Arg), 0);
        assert_eq!(symbols.define("e", "int", SymbolKind::Var), 0);
        assert_eq!(symbols.define("f", "int", SymbolKind::Var), 1);
    }

    #[test]
    fn test_var_count() {
        let mut symbols = SymbolTable::new();
        symbols.define("a", "int", SymbolKind::Field);
        symbols.define("b", "boolean", SymbolKind::Field);
        assert_eq!(symbols.var_count(SymbolKind::Field), 2);
        assert_eq!(symbols.var_count(SymbolKind::Static), 0);
    }

    #[test]
    fn test_lookup_searches_subroutine_scope_first() {
        let mut symbols = SymbolTable::new();
        symbols.define("x", "int", SymbolKind::Field);
        symbols.start_subroutine();
        symbols.define("x", "Point", SymbolKind::Var);

        assert_eq!(symbols.kind_of("x"), Some(SymbolKind::Var));
        assert_eq!(symbols.type_of("x"), Some("Point"));
        assert_eq!(symbols.index_of("x"), Some(0));
    }

    #[test]
    fn test_class_scope_visible_from_subroutine() {
        let mut symbols = SymbolTable::new();
        symbols.define("total", "int", SymbolKind::Static);
        symbols.start_subroutine();
        assert_eq!(symbols.kind_of("total"), Some(SymbolKind::Static));
    }

    #[test]
    fn test_start_subroutine_replaces_scope() {
        let mut symbols = SymbolTable::new();
        symbols.start_subroutine();
        symbols.define("i", "int", SymbolKind::Var);
        symbols.define("j", "int", SymbolKind::Var);
        symbols.start_subroutine();

        assert_eq!(symbols.kind_of("i"), None);
        assert_eq!(symbols.var_count(SymbolKind::Var), 0);
        assert_eq!(symbols.define("k", "int", SymbolKind::Var), 0);
    }

    #[test]
    fn test_absent_symbol() {
        let symbols = SymbolTable::new();
        assert_eq!(symbols.kind_of("missing"), None);
        assert_eq!(symbols.type_of("missing"), None);
        assert_eq!(symbols.index_of("missing"), None);
    }

    #[test]
    fn test_method_receiver_convention() {
        // Inside a method the receiver is ARG 0, typed as the class.
        let mut symbols = SymbolTable::new();
        symbols.start_subroutine();
        symbols.define("this", "Square", SymbolKind::Arg);
        symbols.define("dx", "int", SymbolKind::Arg);

        assert_eq!(symbols.index_of("this"), Some(0));
        assert_eq!(symbols.type_of("this"), Some("Square"));
        assert_eq!(symbols.index_of("dx"), Some(1));
    }
}
