use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use crate::config;
use crate::domain::{DetailLevel, Genre, Track};

#[derive(Parser)]
#[command(name = "trackcard")]
#[command(version = "0.1")]
#[command(about = "Print music track metadata at a chosen level of detail")]
pub struct Cli {
    /// Path to the track description TOML file
    #[arg(short, long, default_value = "track.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the track described in the config file
    Show {
        /// Overrides the detail level from the file
        #[arg(short, long)]
        level: Option<DetailLevel>,
    },
    /// Print a track described entirely by flags
    Render(RenderArgs),
    /// List genre and detail level labels
    Labels,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub release_year: Option<String>,
    #[arg(long)]
    pub media_url: Option<String>,
    #[arg(long)]
    pub genre: Option<Genre>,

    #[arg(long)]
    pub artist_name: Option<String>,
    #[arg(long)]
    pub artist_alias: Option<String>,
    #[arg(long)]
    pub artist_image_url: Option<String>,

    #[arg(long)]
    pub album_name: Option<String>,
    #[arg(long)]
    pub album_cover_url: Option<String>,

    #[arg(short, long, default_value_t = DetailLevel::FullDetails)]
    pub level: DetailLevel,
}

impl RenderArgs {
    fn build(self) -> anyhow::Result<Track> {
        let mut track = Track::create(self.id, self.title, self.release_year, self.media_url)?;
        if let Some(genre) = self.genre {
            track.set_genre(Some(genre))?;
        }

        let artist_given = self.artist_name.is_some()
            || self.artist_alias.is_some()
            || self.artist_image_url.is_some();
        if artist_given {
            track
                .set_artist(self.artist_name, self.artist_alias, self.artist_image_url)
                .context("incomplete artist flags")?;
        }

        if self.album_name.is_some() || self.album_cover_url.is_some() {
            track
                .set_album(self.album_name, self.album_cover_url)
                .context("incomplete album flags")?;
        }
        Ok(track)
    }
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    if let Err(e) = execute(cli, &mut stdout.lock()) {
        debug!("command failed: {e:?}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

pub fn execute<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::Show { level } => {
            let cfg = config::Config::load(&cli.config)?;
            info!("loaded track file {} (version {})", cli.config.display(), cfg.version);

            let level = level.unwrap_or(cfg.output.detail_level);
            let track = cfg
                .track
                .build()
                .with_context(|| format!("invalid track in {}", cli.config.display()))?;
            track.render(Some(level), out)?;
        }

        Commands::Render(args) => {
            let level = args.level;
            let track = args.build()?;
            track.render(Some(level), out)?;
        }

        Commands::Labels => {
            writeln!(out, "genres:")?;
            for genre in Genre::ALL {
                writeln!(out, "    - {genre}")?;
            }
            writeln!(out, "detail levels:")?;
            for level in DetailLevel::ALL {
                writeln!(out, "    - {level}")?;
            }
        }
    }
    Ok(())
}
