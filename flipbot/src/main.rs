//! Binary for the flip bot: run over Socket Mode, or flip text / rotate images locally.

use anyhow::Result;
use clap::Parser;
use flip_markup::{flip_markedup_text, MarkupFlipper};
use flipbot::{rotation::rotate_file, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, app_token } => {
            let config = load_config(token, app_token)?;
            run_bot(config).await
        }
        Commands::Flip { text } => {
            println!("{}", flip_markedup_text(&text, &MarkupFlipper::default()));
            Ok(())
        }
        Commands::Rotate { input, output } => {
            rotate_file(&input, &output)?;
            Ok(())
        }
    }
}
