use goblin::elf::SectionHeader;
use goblin::elf::section_header::{SHF_ALLOC, SHF_EXECINSTR};

/// Flags a section must carry, and carry exclusively, to be searched for symbols.
pub const EXECUTABLE_FLAGS: u64 = (SHF_ALLOC | SHF_EXECINSTR) as u64;

/// ELF section, as listed in the section header table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Name of the section (e.g., `.text`).
    pub name: String,

    /// Raw `sh_flags` value.
    pub flags: u64,

    /// Virtual address of the section once loaded.
    pub address: u64,

    /// Size of the section in memory.
    pub size: u64,

    /// Offset of the section in the file.
    pub offset: u64,
}

impl Section {
    pub(crate) fn from_header(name: impl Into<String>, shdr: &SectionHeader) -> Self {
        Self {
            name: name.into(),
            flags: shdr.sh_flags,
            address: shdr.sh_addr,
            size: shdr.sh_size,
            offset: shdr.sh_offset,
        }
    }

    /// Whether the section flags are exactly `SHF_ALLOC | SHF_EXECINSTR`.
    ///
    /// Sections with any additional flag (e.g., `SHF_WRITE`) are not
    /// considered executable.
    pub fn is_executable(&self) -> bool {
        self.flags == EXECUTABLE_FLAGS
    }

    /// Whether `addr` lies strictly inside the section's address range.
    ///
    /// Both bounds are exclusive: a symbol located at the very start of a
    /// section is not contained in it.
    pub fn contains(&self, addr: u64) -> bool {
        self.address < addr && addr < self.end_address()
    }

    /// Whether `addr` is exactly the start or the end of the section.
    pub fn is_boundary(&self, addr: u64) -> bool {
        addr == self.address || addr == self.end_address()
    }

    /// Translates a virtual address of this section into a file offset.
    pub fn file_offset_of(&self, addr: u64) -> u64 {
        addr.wrapping_sub(self.address).wrapping_add(self.offset)
    }

    fn end_address(&self) -> u64 {
        self.address.wrapping_add(self.size)
    }
}

/// Returns the section containing `addr`.
///
/// If several sections contain the address, the last one listed wins.
pub fn find_containing<'s>(
    sections: impl IntoIterator<Item = &'s Section>,
    addr: u64,
) -> Option<&'s Section> {
    sections.into_iter().filter(|sect| sect.contains(addr)).last()
}
