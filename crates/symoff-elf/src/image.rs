use std::path::PathBuf;

use goblin::container::Ctx;
use goblin::elf::section_header::{SHN_UNDEF, SHN_XINDEX};
use goblin::elf::{Elf, SectionHeader, Sym, Symtab};
use goblin::strtab::Strtab;

use crate::error::{Error, ParseError, TableError};
use crate::resolve::Resolution;
use crate::section::{Section, find_containing};
use crate::symbol::{Symbol, SymbolPool, SymbolTableKind};

/// ELF binary loaded in memory, with its section header table parsed.
pub struct ElfImage<'a> {
    /// Path the binary was read from.
    path: PathBuf,

    /// Raw content of the binary.
    bytes: &'a [u8],

    /// Container (32/64-bit) and endianness of the binary.
    ctx: Ctx,

    /// Raw section headers.
    shdrs: Vec<SectionHeader>,

    /// Named sections, in section header table order.
    sections: Vec<Section>,
}

impl<'a> ElfImage<'a> {
    /// Parses the ELF header and section header table of `bytes`.
    ///
    /// `path` is only used to describe the binary in errors.
    pub fn parse(path: impl Into<PathBuf>, bytes: &'a [u8]) -> crate::Result<Self> {
        let path = path.into();

        match parse_sections(bytes) {
            Ok((ctx, shdrs, sections)) => {
                tracing::debug!(
                    path = %path.display(),
                    sections = sections.len(),
                    "parsed section headers"
                );

                Ok(Self {
                    path,
                    bytes,
                    ctx,
                    shdrs,
                    sections,
                })
            }
            Err(source) => Err(Error::Parse { path, source }),
        }
    }

    /// All sections of the binary.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections flagged exactly `SHF_ALLOC | SHF_EXECINSTR`, in listing order.
    pub fn executable_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|sect| sect.is_executable())
    }

    /// Reads a single symbol table.
    ///
    /// The reserved null symbol at index 0 is not returned.
    pub fn symbol_table(&self, kind: SymbolTableKind) -> Result<Vec<Symbol>, TableError> {
        let shdr = self
            .shdrs
            .iter()
            .find(|shdr| shdr.sh_type == kind.section_type())
            .ok_or(TableError::Missing(kind))?;

        // `sh_entsize` is not trusted, entries always have the container's size
        let size = Sym::size(self.ctx.container) as u64;
        if shdr.sh_size == 0 {
            return Err(TableError::Empty(kind));
        }
        if shdr.sh_size % size != 0 {
            return Err(TableError::BadSize(kind, shdr.sh_size));
        }

        let count = shdr.sh_size / size;
        let syms = Symtab::parse(self.bytes, shdr.sh_offset as usize, count as usize, self.ctx)?;

        let index = shdr.sh_link as usize;
        let shdr = self
            .shdrs
            .get(index)
            .ok_or(TableError::InvalidStrtabIndex(index))?;

        let strtab = Strtab::parse(
            self.bytes,
            shdr.sh_offset as usize,
            shdr.sh_size as usize,
            0x0,
        )?;

        let syms = syms
            .iter()
            .skip(1)
            .map(|sym| Symbol {
                name: strtab.get_at(sym.st_name).unwrap_or_default().to_owned(),
                value: sym.st_value,
                table: kind,
            })
            .collect::<Vec<_>>();

        tracing::debug!(count = syms.len(), "read {kind}");

        Ok(syms)
    }

    /// Reads both symbol tables and merges them, static symbols first.
    ///
    /// Fails only if neither table can be read.
    pub fn symbols(&self) -> crate::Result<SymbolPool> {
        let symtab = self.symbol_table(SymbolTableKind::Static);
        let dynsym = self.symbol_table(SymbolTableKind::Dynamic);

        let (static_syms, dynamic_syms) = match (symtab, dynsym) {
            (Err(symtab), Err(dynsym)) => return Err(Error::SymbolTable { symtab, dynsym }),
            (symtab, dynsym) => (
                skip_unreadable(symtab, SymbolTableKind::Static),
                skip_unreadable(dynsym, SymbolTableKind::Dynamic),
            ),
        };

        Ok(SymbolPool::merge(static_syms, dynamic_syms))
    }

    /// Resolves `symbol` to its file offset.
    #[tracing::instrument(name = "Resolve", skip(self), fields(path = %self.path.display()))]
    pub fn resolve(&self, symbol: &str) -> crate::Result<Resolution> {
        let pool = self.symbols()?;

        let sym = pool
            .find(symbol)
            .ok_or_else(|| Error::SymbolNotFound {
                symbol: symbol.to_owned(),
                path: self.path.clone(),
            })?;

        tracing::debug!(
            value = format_args!("{:#x}", sym.value),
            table = %sym.table,
            "found symbol"
        );

        let Some(section) = find_containing(self.executable_sections(), sym.value) else {
            if let Some(sect) = self
                .executable_sections()
                .find(|sect| sect.is_boundary(sym.value))
            {
                tracing::warn!(
                    section = %sect.name,
                    "symbol lies on a boundary of an executable section, which is excluded"
                );
            }

            return Err(Error::SectionNotFound {
                symbol: symbol.to_owned(),
                value: sym.value,
            });
        };

        tracing::debug!(
            section = %section.name,
            addr = format_args!("{:#x}", section.address),
            "found containing section"
        );

        Ok(Resolution::new(sym.clone(), section.clone()))
    }
}

fn parse_sections(bytes: &[u8]) -> Result<(Ctx, Vec<SectionHeader>, Vec<Section>), ParseError> {
    let header = Elf::parse_header(bytes)?;
    let ctx = Ctx::new(header.container()?, header.endianness()?);

    let shdrs = SectionHeader::parse(bytes, header.e_shoff as usize, header.e_shnum as usize, ctx)?;

    let idx = match header.e_shstrndx.into() {
        SHN_XINDEX => shdrs.first().map(|shdr| shdr.sh_link as usize),
        SHN_UNDEF => None,
        n => Some(n as usize),
    };

    let shstrtab = idx
        .and_then(|i| shdrs.get(i))
        .map(|shdr| Strtab::parse(bytes, shdr.sh_offset as usize, shdr.sh_size as usize, 0x0))
        .transpose()?;

    let sections = shdrs
        .iter()
        .map(|shdr| {
            let name = shstrtab
                .as_ref()
                .and_then(|strtab| strtab.get_at(shdr.sh_name))
                .unwrap_or_default();

            Section::from_header(name, shdr)
        })
        .collect();

    Ok((ctx, shdrs, sections))
}

fn skip_unreadable(syms: Result<Vec<Symbol>, TableError>, kind: SymbolTableKind) -> Vec<Symbol> {
    syms.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "skipping {kind}");
        Vec::new()
    })
}
