use std::fmt;

use symoff_elf::Resolution;

const HEADERS: [&str; 6] = [
    "Symbol",
    "Symbol VA",
    "Symbol offset",
    "Section",
    "Section VA",
    "Section offset",
];

/// Single-row table describing a resolved symbol.
pub struct ResolutionTable<'r>(pub &'r Resolution);

impl ResolutionTable<'_> {
    /// Cells of the table row, addresses and offsets in upper-case hex.
    pub fn row(&self) -> [String; 6] {
        let Resolution {
            symbol,
            section,
            symbol_offset,
        } = self.0;

        [
            symbol.name.clone(),
            format!("{:X}", symbol.value),
            format!("{symbol_offset:X}"),
            section.name.clone(),
            format!("{:X}", section.address),
            format!("{:X}", section.offset),
        ]
    }
}

impl fmt::Display for ResolutionTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row();

        let widths: Vec<usize> = HEADERS
            .iter()
            .zip(&row)
            .map(|(header, cell)| header.chars().count().max(cell.chars().count()))
            .collect();

        write_separator(f, &widths)?;

        f.write_str("|")?;
        for (header, &width) in HEADERS.iter().zip(&widths) {
            write!(f, " {:^width$} |", header.to_uppercase())?;
        }
        f.write_str("\n")?;

        write_separator(f, &widths)?;

        f.write_str("|")?;
        for (cell, &width) in row.iter().zip(&widths) {
            write!(f, " {cell:<width$} |")?;
        }
        f.write_str("\n")?;

        write_separator(f, &widths)
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    f.write_str("+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    f.write_str("\n")
}
