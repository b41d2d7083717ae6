use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use forgemeta::metadata::{from_lookup_version, ForgeVersionList, RemoteVersion};
use forgemeta::version::VersionNumber;

/// forgemeta - Forge installer metadata index
///
/// Fetches the remote Forge metadata document and answers which installer
/// builds exist for a given game version.
///
/// Examples:
///   forgemeta list 1.12.2     # List installer builds for Minecraft 1.12.2
#[derive(Parser, Debug)]
#[command(author, version = env!("FORGEMETA_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Metadata endpoint URL (overrides the default mirror)
    #[arg(long = "url", env = "FORGEMETA_URL", value_name = "URL", global = true)]
    pub metadata_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List all game versions with installer builds
    Versions,

    /// List installer builds for a game version
    List(ListArgs),

    /// Download an installer for a game version
    Download(DownloadArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// The game version (e.g., "1.12.2")
    #[arg(value_name = "GAME_VERSION")]
    pub game_version: String,
}

#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// The game version (e.g., "1.12.2")
    #[arg(value_name = "GAME_VERSION")]
    pub game_version: String,

    /// Loader version to download (defaults to the newest build)
    #[arg(long = "loader", value_name = "VERSION")]
    pub loader_version: Option<String>,

    /// Directory to download the installer into
    #[arg(long = "output", short = 'o', value_name = "PATH", default_value = ".")]
    pub output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let client = reqwest::Client::new();
    let list = match cli.metadata_url.as_deref() {
        Some(url) => ForgeVersionList::with_metadata_url(client, url),
        None => ForgeVersionList::new(client),
    };
    list.refresh().await.context("Failed to refresh the version index")?;

    match cli.command {
        Commands::Versions => versions(&list),
        Commands::List(args) => list_builds(&list, &args.game_version),
        Commands::Download(args) => download(&list, &args).await,
    }
}

/// Resolves user input to the canonical index key.
fn canonical_key(game_version: &str) -> String {
    from_lookup_version(&VersionNumber::normalize(game_version)).to_string()
}

fn versions(list: &ForgeVersionList) -> Result<()> {
    let mut game_versions = list.index().game_versions();
    game_versions.sort_by_key(|version| VersionNumber::parse(version));

    for game_version in game_versions {
        println!("{}", game_version);
    }
    Ok(())
}

/// Returns the builds for a game version, newest loader version first.
fn sorted_builds(list: &ForgeVersionList, game_version: &str) -> Vec<RemoteVersion> {
    let mut builds = list.index().get(&canonical_key(game_version));
    builds.sort_by(|a, b| {
        VersionNumber::parse(&b.version).cmp(&VersionNumber::parse(&a.version))
    });
    builds
}

fn list_builds(list: &ForgeVersionList, game_version: &str) -> Result<()> {
    let builds = sorted_builds(list, game_version);
    if builds.is_empty() {
        bail!("No installer builds found for game version {}", game_version);
    }

    for build in builds {
        let released = build
            .release_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let url = build.installer_url().unwrap_or_default();
        println!("{}\t{}\t{}", build.version, released, url);
    }
    Ok(())
}

async fn download(list: &ForgeVersionList, args: &DownloadArgs) -> Result<()> {
    let builds = sorted_builds(list, &args.game_version);
    if builds.is_empty() {
        bail!(
            "No installer builds found for game version {}",
            args.game_version
        );
    }

    let build = match args.loader_version.as_deref() {
        Some(loader) => builds
            .iter()
            .find(|build| build.version == loader)
            .with_context(|| {
                format!(
                    "No installer build {} for game version {}",
                    loader, args.game_version
                )
            })?,
        None => &builds[0],
    };

    let url = build
        .installer_url()
        .context("Build has no installer URL")?;
    let file_name = url
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .context("Installer URL has no file name")?;
    let target = args.output.join(file_name);

    let bytes = list
        .http()
        .download_file(url, || {
            std::fs::File::create(&target)
                .with_context(|| format!("Failed to create file at {:?}", target))
        })
        .await?;

    println!("Downloaded {} ({} bytes) to {}", file_name, bytes, target.display());
    Ok(())
}
