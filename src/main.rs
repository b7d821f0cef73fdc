use anyhow::Result;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use zadachi::commands::Cli;
use zadachi::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zadachi=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu()
}
