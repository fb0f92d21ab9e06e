use std::ffi::OsString;
use std::path::PathBuf;

/// Resolves a symbol of an ELF executable to its file offset.
#[derive(clap::Parser, Debug)]
#[clap(name = "symbol-to-offset", version)]
pub struct CliOpts {
    /// Path to the executable ELF file.
    #[clap(value_name = "EXECUTABLE")]
    pub executable: PathBuf,

    /// The name of the symbol in the executable file.
    #[clap(value_name = "SYMBOL")]
    pub symbol: String,

    /// Trailing arguments, ignored.
    #[clap(hide = true, num_args = 0.., allow_hyphen_values = true)]
    _ignored: Vec<OsString>,
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error. Missing or invalid arguments print the usage to the
    /// standard output and exit with code 1.
    pub fn parse_from_cmdline() -> Self {
        Self::parse_from_args(std::env::args_os())
    }

    #[allow(clippy::print_stdout)]
    fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        use clap::error::ErrorKind;

        match <Self as clap::Parser>::try_parse_from(args) {
            Ok(opts) => opts,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => {
                print!("{}", e.render());
                std::process::exit(1);
            }
        }
    }
}
