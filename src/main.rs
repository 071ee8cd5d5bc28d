use anyhow::Result;
use clap::Parser;
use depender_render::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides -v; fetch failures are warnings and show by default.
    let filter = match cli.verbose {
        0 => "depender_render=info",
        1 => "depender_render=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let rendered = cli.run()?;
    println!("{}", rendered.display());
    Ok(())
}
