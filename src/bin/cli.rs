use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use warden::cli::{guard_identity, issue_token};
use warden_config::JwtConfig;

#[derive(Parser)]
#[command(name = "warden-cli")]
#[command(about = "Warden CLI - Guard identities and test tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the identity a route guard would be registered under
    Identity {
        /// Route pattern, e.g. "admin/*"
        #[arg(short = 'r', long)]
        route: String,

        /// Comma-separated role names
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,

        /// Comma-separated permission names
        #[arg(short = 'p', long, value_delimiter = ',')]
        permissions: Vec<String>,
    },
    /// Issue a signed access token using JWT_SECRET
    Token {
        /// Subject identifier
        #[arg(short = 's', long)]
        sub: String,

        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Comma-separated role names
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,

        /// Comma-separated permission names
        #[arg(short = 'p', long, value_delimiter = ',')]
        permissions: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Identity {
            route,
            roles,
            permissions,
        } => {
            let identity = guard_identity(&route, roles, permissions)?;
            println!("{}", identity);
        }
        Commands::Token {
            sub,
            email,
            roles,
            permissions,
        } => {
            let token = issue_token(&sub, &email, roles, permissions, &JwtConfig::from_env())?;
            println!("{}", token);
        }
    }

    Ok(())
}
