mod cli;
mod info_cmd;
mod outline_cmd;
mod page_range;
mod shared;
mod tables_cmd;
mod text_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Tables(ref args) => tables_cmd::run(args),
        cli::Commands::Text {
            ref file,
            ref pages,
            ref format,
            unicode_norm,
        } => text_cmd::run(
            file,
            pages.as_deref(),
            format,
            unicode_norm.map(cli::UnicodeNormArg::to_unicode_norm),
        ),
        cli::Commands::Info {
            ref file,
            ref format,
        } => info_cmd::run(file, format),
        cli::Commands::Outline {
            ref file,
            ref format,
        } => outline_cmd::run(file, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the level chosen by
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
