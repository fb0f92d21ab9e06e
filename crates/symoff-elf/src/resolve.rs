use std::path::Path;

use crate::error::Error;
use crate::image::ElfImage;
use crate::section::Section;
use crate::symbol::Symbol;

/// Symbol resolved to a location in its binary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The matched symbol.
    pub symbol: Symbol,

    /// The executable section containing the symbol.
    pub section: Section,

    /// Offset of the symbol in the binary file.
    pub symbol_offset: u64,
}

impl Resolution {
    /// Creates a `Resolution` of `symbol` within `section`.
    pub fn new(symbol: Symbol, section: Section) -> Self {
        let symbol_offset = section.file_offset_of(symbol.value);

        Self {
            symbol,
            section,
            symbol_offset,
        }
    }
}

/// Resolves the symbol named `symbol` in the ELF binary at `path`.
pub fn resolve(path: impl AsRef<Path>, symbol: &str) -> crate::Result<Resolution> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    ElfImage::parse(path, &bytes)?.resolve(symbol)
}
