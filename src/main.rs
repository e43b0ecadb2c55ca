use clap::Parser;
use tracing_subscriber::EnvFilter;

use tcrdb::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("tcrdb=debug,info")
    } else {
        EnvFilter::new("tcrdb=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        cli::Commands::Allele(args) => {
            cli::allele::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Tcr(args) => {
            cli::tcr::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Table(args) => {
            cli::table::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
