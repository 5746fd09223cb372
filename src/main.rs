use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spladl::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Save Spotify client credentials
    Auth(AuthOptions),

    /// Resolve a playlist into its album set and cache it in the ledger
    Resolve(ResolveOptions),

    /// Review a cached playlist and drop unwanted albums
    Edit(EditOptions),

    /// Download pending albums of a cached playlist
    Download(DownloadOptions),

    /// Show cached playlists or the entries of one playlist
    List(ListOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Spotify client ID
    #[clap(long)]
    pub client_id: Option<String>,

    /// Spotify client secret
    #[clap(long)]
    pub client_secret: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// Playlist id, spotify: URI or share link
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct EditOptions {
    /// Playlist id, spotify: URI or share link
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Playlist id, spotify: URI or share link
    pub playlist: String,

    /// Folder to download into (defaults to the current directory)
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Maximum number of download attempts this run
    #[clap(long, short)]
    pub count: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Playlist id, spotify: URI or share link
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.client_id, opt.client_secret).await,
        Command::Resolve(opt) => cli::resolve(opt.playlist).await,
        Command::Edit(opt) => cli::edit(opt.playlist).await,
        Command::Download(opt) => cli::download(opt.playlist, opt.output, opt.count).await,
        Command::List(opt) => cli::list(opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
