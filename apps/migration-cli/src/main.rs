use clap::{Parser, ValueEnum};
use holonet::config::db::{database_url, sanitize_db_url, DbKind};
use holonet::infra::db::connect_db;
use migration::MigrationCommand;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Holonet database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Connection string; defaults to DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,holonet=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let url = args.database_url.unwrap_or_else(database_url);

    match DbKind::from_url(&url) {
        Ok(DbKind::SqliteMemory) => {
            // a fresh in-memory store vanishes when the command exits
            eprintln!("In-memory SQLite is not supported here; use a file or Postgres url.");
            std::process::exit(2);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }

    let conn = match connect_db(&url).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect to {}: {e}", sanitize_db_url(&url));
            std::process::exit(1);
        }
    };

    if let Err(e) = migration::migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
