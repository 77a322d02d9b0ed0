use std::process::ExitCode;
use std::time::Duration;

use albumfetch::{
    build_client, AlbumApi, AlbumRecord, CallResult, ClientConfig, LogLevel,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "albumfetch-cli")]
#[command(about = "CLI for albumfetch - fetch and upload albums", long_about = None)]
struct Cli {
    /// Base URL of the albums service
    #[arg(long, default_value = albumfetch::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 30)]
    connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, default_value_t = 20)]
    read_timeout: u64,

    /// Write timeout in seconds
    #[arg(long, default_value_t = 25)]
    write_timeout: u64,

    /// HTTP logging verbosity
    #[arg(long, value_enum, default_value_t = Verbosity::Body)]
    log_level: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Verbosity {
    None,
    Basic,
    Headers,
    Body,
}

impl From<Verbosity> for LogLevel {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::None => LogLevel::None,
            Verbosity::Basic => LogLevel::Basic,
            Verbosity::Headers => LogLevel::Headers,
            Verbosity::Body => LogLevel::Body,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every album
    List,
    /// List the albums of one user
    ByUser {
        /// User ID to filter on
        user_id: i64,
    },
    /// Show the title of a single album
    Get {
        /// Album ID
        id: i64,
    },
    /// Upload an album
    Create {
        /// Album ID to submit (the server assigns its own)
        #[arg(long, default_value_t = 0)]
        id: i64,

        /// Album title
        #[arg(long)]
        title: String,

        /// Owning user ID
        #[arg(long)]
        user_id: i64,
    },
}

impl Cli {
    fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
            .with_connect_timeout(Duration::from_secs(self.connect_timeout))
            .with_read_timeout(Duration::from_secs(self.read_timeout))
            .with_write_timeout(Duration::from_secs(self.write_timeout))
            .with_log_level(self.log_level.into())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api = match build_client(&cli.config()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if run(&api, &cli.command).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run one command and print its outcome. Returns whether it succeeded.
async fn run(api: &AlbumApi, command: &Commands) -> bool {
    match command {
        Commands::List => report(api.list_albums().await, print_albums),
        Commands::ByUser { user_id } => {
            report(api.list_albums_by_user(*user_id).await, print_albums)
        }
        Commands::Get { id } => report(api.get_album(*id).await, |album| {
            println!("{}", album.title)
        }),
        Commands::Create { id, title, user_id } => {
            let album = AlbumRecord::new(*id, title.as_str(), *user_id);
            report(api.create_album(&album).await, |created| {
                print!("{}", created)
            })
        }
    }
}

fn print_albums(albums: Vec<AlbumRecord>) {
    for album in albums {
        println!("{}\n", album);
    }
}

fn report<T>(result: CallResult<T>, on_success: impl FnOnce(T)) -> bool {
    match result {
        CallResult::Success { body, .. } => {
            on_success(body);
            true
        }
        CallResult::Failure {
            status, raw_body, ..
        } => {
            eprintln!(
                "Request failed (HTTP {}): {}",
                status.map_or_else(|| "?".to_string(), |s| s.to_string()),
                raw_body.unwrap_or_default()
            );
            false
        }
        CallResult::TransportError { cause } => {
            eprintln!("Could not reach server: {}", cause);
            false
        }
    }
}
