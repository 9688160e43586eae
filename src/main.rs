use clap::Parser;

use docthread::infrastructure::observability::{TracingConfig, init_tracing};
use docthread::presentation::cli::{GenerateOptions, config_command, generate_command};
use docthread::presentation::{Cli, Command, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    let mut tracing_config = TracingConfig::default();
    tracing_config.json_format |= settings.logging.json_format;
    init_tracing(&tracing_config);

    tracing::debug!(%environment, provider = %settings.llm.provider, "Settings loaded");

    match cli.command {
        Command::Generate {
            path,
            mime,
            user,
            offline,
            pretty,
        } => {
            generate_command(
                settings,
                GenerateOptions {
                    path: &path,
                    mime,
                    user,
                    offline,
                    pretty,
                },
            )
            .await
        }
        Command::Config { user } => config_command(settings, user).await,
    }
}
