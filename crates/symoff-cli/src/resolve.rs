use std::io::Write;
use std::path::Path;

use miette::IntoDiagnostic;

use crate::ResolutionTable;

/// Runs the symbol resolution, writing the resulting table to `output`.
pub fn evaluate_resolve(
    executable: &Path,
    symbol: &str,
    mut output: impl Write,
) -> miette::Result<()> {
    let resolution = symoff_elf::resolve(executable, symbol)?;

    tracing::info!(
        symbol,
        offset = format_args!("{:#x}", resolution.symbol_offset),
        section = %resolution.section.name,
        "resolved symbol"
    );

    write!(output, "{}", ResolutionTable(&resolution)).into_diagnostic()?;

    Ok(())
}
