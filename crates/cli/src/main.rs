use anyhow::Context;
use clap::{Parser, Subcommand};

use folio_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "folio", about = "Library catalog service", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the resolved configuration and exit
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().with_context(|| "failed to load folio settings")?;

    match cli.command {
        Command::Serve => {
            folio_telemetry::init(&settings.telemetry)?;
            folio_app::run(settings).await
        }
        Command::Config => {
            println!("{settings:#?}");
            Ok(())
        }
    }
}
