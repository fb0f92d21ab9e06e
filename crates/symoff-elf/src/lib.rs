//! This crate resolves named symbols of an ELF binary to file offsets.
//!
//! Symbols are looked up in both the static (`.symtab`) and the dynamic
//! (`.dynsym`) symbol tables, static ones first. The first symbol matching
//! the requested name is then located in the executable sections of the
//! binary (sections flagged exactly `SHF_ALLOC | SHF_EXECINSTR`), and its
//! file offset is computed from the containing section:
//!
//! ```text
//! symbol_offset = symbol.value - section.address + section.offset
//! ```
//!
//! # Example
//!
//! ```no_run
//! let resolution = symoff_elf::resolve("/bin/sh", "main").unwrap();
//!
//! println!(
//!     "{} is at {:#x} in {}",
//!     resolution.symbol.name, resolution.symbol_offset, resolution.section.name,
//! );
//! ```

mod error;
mod image;
mod resolve;
mod section;
mod symbol;

pub use self::error::{Error, ParseError, Result, TableError};
pub use self::image::ElfImage;
pub use self::resolve::{Resolution, resolve};
pub use self::section::{EXECUTABLE_FLAGS, Section, find_containing};
pub use self::symbol::{Symbol, SymbolPool, SymbolTableKind};
