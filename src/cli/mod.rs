pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "admin-dashboard-api")]
#[command(about = "Admin dashboard backend - companies, profiles and sidebar navigation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,

    #[command(about = "Print the sidebar navigation document as JSON")]
    Navigation,

    #[command(about = "Mint a session token for local testing (not available in production)")]
    Token {
        #[arg(help = "Identity-provider user id to put in the token subject")]
        user_id: String,
        #[arg(long, help = "Email claim")]
        email: Option<String>,
        #[arg(long, default_value_t = 24, help = "Token lifetime in hours")]
        hours: i64,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = crate::config::config().clone();

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Migrate => commands::migrate::handle(config).await,
        Commands::Navigation => commands::navigation::handle(),
        Commands::Token { user_id, email, hours } => commands::token::handle(&config, user_id, email, hours),
    }
}
