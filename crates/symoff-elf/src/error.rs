use std::path::PathBuf;

use crate::symbol::SymbolTableKind;

/// Error type of this crate.
#[derive(thiserror::Error, miette::Diagnostic, Debug)]
pub enum Error {
    /// The binary could not be read, or is not a valid ELF.
    #[error("could not open elf file {} to resolve symbol offset", path.display())]
    #[diagnostic(code(symoff::parse))]
    Parse {
        /// Path of the binary.
        path: PathBuf,

        /// Underlying cause.
        #[source]
        source: ParseError,
    },

    /// Neither the static nor the dynamic symbol table could be read.
    #[error(
        "could not open regular or dynamic symbol sections to resolve symbol offset: {symtab}, {dynsym}"
    )]
    #[diagnostic(
        code(symoff::symbol_table),
        help("the binary is probably stripped of its symbols")
    )]
    SymbolTable {
        /// Cause of the static symbol table read failure.
        symtab: TableError,

        /// Cause of the dynamic symbol table read failure.
        dynsym: TableError,
    },

    /// No symbol with the requested name exists in either symbol table.
    #[error("symbol {symbol} not found in {}", path.display())]
    #[diagnostic(
        code(symoff::symbol_not_found),
        help("symbol names are matched exactly, mangled names included")
    )]
    SymbolNotFound {
        /// Requested symbol name.
        symbol: String,

        /// Path of the binary.
        path: PathBuf,
    },

    /// The symbol does not lie within any executable section.
    #[error("could not find symbol {symbol} ({value:#x}) in executable sections of binary")]
    #[diagnostic(code(symoff::section_not_found))]
    SectionNotFound {
        /// Requested symbol name.
        symbol: String,

        /// Virtual address of the matched symbol.
        value: u64,
    },
}

/// Failure to load a binary as an ELF image.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// File read error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed ELF.
    #[error(transparent)]
    Elf(#[from] goblin::error::Error),
}

/// Failure to read a single symbol table.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// No section of the table's type.
    #[error("missing {0}")]
    Missing(SymbolTableKind),

    /// The table section is empty.
    #[error("empty {0}")]
    Empty(SymbolTableKind),

    /// The table size is not a multiple of the symbol entry size.
    #[error("size of {0} ({1:#x}) is not a multiple of the symbol size")]
    BadSize(SymbolTableKind, u64),

    /// The table links to a section index out of bounds.
    #[error("invalid string table index: {0}")]
    InvalidStrtabIndex(usize),

    /// Malformed table.
    #[error(transparent)]
    Elf(#[from] goblin::error::Error),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
