//! The assembler's symbol table.
//!
//! Predefines the Hack register symbols, binds labels to ROM addresses
//! in pass 1, and allocates variables from RAM address 16 in pass 2.

use std::collections::HashMap;

/// The RAM address where variable allocation starts.
const FIRST_VARIABLE_ADDRESS: u16 = 16;

/// Label and variable resolution for one assembly unit.
#[derive(Debug)]
pub struct SymbolTable {
    map: HashMap<String, u16>,
    next_variable: u16,
}

impl SymbolTable {
    /// Creates a table holding the predefined Hack symbols.
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("SP".to_string(), 0);
        map.insert("LCL".to_string(), 1);
        map.insert("ARG".to_string(), 2);
        map.insert("THIS".to_string(), 3);
        map.insert("THAT".to_string(), 4);
        for register in 0..16 {
            map.insert(format!("R{}", register), register);
        }
        map.insert("SCREEN".to_string(), 16384);
        map.insert("KBD".to_string(), 24576);

        SymbolTable {
            map,
            next_variable: FIRST_VARIABLE_ADDRESS,
        }
    }

    /// Returns `true` if the symbol is known.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Binds a label to a ROM address (pass 1).
    pub fn bind_label(&mut self, name: &str, address: u16) {
        self.map.insert(name.to_string(), address);
    }

    /// Resolves a symbol, allocating the next RAM address for a new
    /// variable (pass 2).
    pub fn resolve_or_allocate(&mut self, name: &str) -> u16 {
        if let Some(address) = self.map.get(name) {
            return *address;
        }
        let address = self.next_variable;
        self.map.insert(name.to_string(), address);
        self.next_variable += 1;
        address
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
