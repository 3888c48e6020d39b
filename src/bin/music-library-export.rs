use clap::{Parser, Subcommand};
use music_library_export::config::{DEVELOPER_TOKEN_VAR, USER_TOKEN_VAR};
use music_library_export::export::{DEFAULT_ALBUMS_FILE, DEFAULT_PLAYLISTS_FILE};
use music_library_export::{
    export_albums_with_progress, export_playlists_with_progress, AppleMusicClient, Config,
};
use std::path::Path;

/// Export your Apple Music library to JSON
#[derive(Parser)]
#[command(
    name = "music-library-export",
    about = "Export your Apple Music library to JSON",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Save library albums to albums.json (the default)
    Albums,
    /// Save library playlists to playlists.json
    Playlists,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("music_library_export=info"),
    )
    .init();

    let args = Cli::parse();
    let command = args.command.unwrap_or(Commands::Albums);

    // Get credentials from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            eprintln!();
            eprintln!("Please set the following environment variables:");
            eprintln!("  {DEVELOPER_TOKEN_VAR}=your_developer_token");
            eprintln!("  {USER_TOKEN_VAR}=your_music_user_token");
            std::process::exit(1);
        }
    };

    let http_client = http_client::native::NativeClient::new();
    let client = AppleMusicClient::new(Box::new(http_client), config);

    let result = match command {
        Commands::Albums => {
            println!("Fetching your Apple Music album library...");
            export_albums_with_progress(&client, Path::new(DEFAULT_ALBUMS_FILE), |total| {
                println!("📀 Fetched {total} albums so far...")
            })
            .await
        }
        Commands::Playlists => {
            println!("Fetching your Apple Music playlists...");
            export_playlists_with_progress(&client, Path::new(DEFAULT_PLAYLISTS_FILE), |total| {
                println!("📋 Fetched {total} playlists so far...")
            })
            .await
        }
    };

    match result {
        Ok(summary) => {
            println!("✅ Fetched {} items", summary.fetched);
            if summary.removed > 0 {
                println!("🔁 Merged {} consecutive duplicates", summary.removed);
            }
            println!(
                "💾 Saved {} records to {}",
                summary.written,
                summary.path.display()
            );
        }
        Err(e) => {
            eprintln!("❌ Export failed: {e}");
            std::process::exit(1);
        }
    }
}
