use std::path::Path;
use std::process::Command;

use goblin::elf::Elf;
use test_log::test;

const HELLO: &str = r#"
#include <stdio.h>

int main(void) {
    puts("hello");
    return 0;
}
"#;

/// Compiles `source` with the system C compiler, if there is one.
fn compile_c(source: &str, is_pie: bool) -> Option<tempfile::TempPath> {
    let src_dir = tempfile::tempdir().expect("tempdir");
    let src = src_dir.path().join("main.c");
    std::fs::write(&src, source).expect("write source");

    let out_file = tempfile::NamedTempFile::new().expect("tempfile");

    let mut cc = Command::new("cc");
    cc.arg(&src).arg("-o").arg(out_file.path());

    if is_pie {
        cc.arg("-pie");
    } else {
        cc.arg("-no-pie");
    }

    println!("running: {cc:?}");

    let Ok(cc) = cc.output() else {
        println!("skipping: no C compiler available");
        return None;
    };

    if !cc.status.success() {
        let msg = String::from_utf8_lossy(&cc.stderr);
        panic!("{msg}");
    }

    Some(out_file.into_temp_path())
}

/// Computes the expected `(value, section name, file offset)` of `symbol`
/// with goblin's high-level ELF API.
fn expected_location(path: &Path, symbol: &str) -> (u64, String, u64) {
    let bytes = std::fs::read(path).expect("read binary");
    let elf = Elf::parse(&bytes).expect("parse binary");

    let sym = elf
        .syms
        .iter()
        .find(|sym| elf.strtab.get_at(sym.st_name) == Some(symbol))
        .expect("symbol");

    let shdr = elf
        .section_headers
        .iter()
        .find(|shdr| shdr.is_alloc() && shdr.vm_range().contains(&(sym.st_value as usize)))
        .expect("section");

    let name = elf.shdr_strtab.get_at(shdr.sh_name).expect("section name");

    (
        sym.st_value,
        name.to_owned(),
        sym.st_value - shdr.sh_addr + shdr.sh_offset,
    )
}

fn test_resolve_main(is_pie: bool) {
    let Some(binary) = compile_c(HELLO, is_pie) else {
        return;
    };

    let (value, section, offset) = expected_location(&binary, "main");

    let resolution = symoff_elf::resolve(&binary, "main").expect("resolve");

    assert_eq!(resolution.symbol.name, "main");
    assert_eq!(resolution.symbol.value, value);
    assert_eq!(resolution.section.name, section);
    assert_eq!(resolution.section.name, ".text");
    assert_eq!(resolution.symbol_offset, offset);
}

#[test]
fn resolve_main_nopie() {
    test_resolve_main(false);
}

#[test]
fn resolve_main_pie() {
    test_resolve_main(true);
}

#[test]
fn resolve_undefined_import() {
    let Some(binary) = compile_c(HELLO, false) else {
        return;
    };

    // `puts` is imported: its dynamic symbol has no address in the binary
    let err = symoff_elf::resolve(&binary, "puts").unwrap_err();

    assert!(
        matches!(err, symoff_elf::Error::SectionNotFound { .. }),
        "unexpected error: {err:?}"
    );
}
