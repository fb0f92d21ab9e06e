#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use std::io::IsTerminal;

use symoff_cli::CliOpts;

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("SYMOFF_LOG")
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    // reports are printed on stdout, so colors must follow stdout
    let color = std::io::stdout().is_terminal();
    if let Err(e) = miette::set_hook(Box::new(move |_| {
        Box::new(miette::MietteHandlerOpts::new().color(color).build())
    })) {
        tracing::debug!(error = %e, "failed to install report handler");
    }

    if let Err(e) = symoff_cli::evaluate_resolve(&cli.executable, &cli.symbol, std::io::stdout()) {
        println!("{e:?}");
        std::process::exit(1);
    }
}
