use std::fmt;

use goblin::elf::section_header::{SHT_DYNSYM, SHT_SYMTAB};

/// Symbol table a symbol originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTableKind {
    /// Static symbol table (`.symtab`).
    Static,

    /// Dynamic symbol table (`.dynsym`).
    Dynamic,
}

impl SymbolTableKind {
    /// Section type (`sh_type`) holding this kind of table.
    pub fn section_type(self) -> u32 {
        match self {
            Self::Static => SHT_SYMTAB,
            Self::Dynamic => SHT_DYNSYM,
        }
    }
}

impl fmt::Display for SymbolTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => f.write_str(".symtab"),
            Self::Dynamic => f.write_str(".dynsym"),
        }
    }
}

/// ELF symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Name of the symbol.
    pub name: String,

    /// Value of the symbol (its virtual address for functions and objects).
    pub value: u64,

    /// Table the symbol was read from.
    pub table: SymbolTableKind,
}

/// Symbols of both symbol tables of a binary, static ones first.
#[derive(Debug, Default)]
pub struct SymbolPool(Vec<Symbol>);

impl SymbolPool {
    /// Concatenates the static and dynamic symbols, without de-duplication.
    pub fn merge(static_syms: Vec<Symbol>, dynamic_syms: Vec<Symbol>) -> Self {
        let mut syms = static_syms;
        syms.extend(dynamic_syms);
        Self(syms)
    }

    /// Returns the first symbol named exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.0.iter().find(|sym| sym.name == name)
    }

    /// Iterates over the symbols in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.0.iter()
    }
}
