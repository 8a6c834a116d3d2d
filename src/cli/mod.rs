use crate::config::Config;
use crate::core::{resolve, HttpThumbnailLoader, PlayerState, ThumbnailLoader, VideoPlayer};
use crate::render::{card_html, player_html};
use anyhow::Result;
use clap::{Parser, Subcommand};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "Resolve portfolio video links and preview click-to-load players")]
#[command(version)]
pub struct Cli {
    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a YouTube or Vimeo URL
    Resolve {
        #[arg(value_name = "URL")]
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the player markup for a URL
    Render {
        #[arg(value_name = "URL")]
        url: String,

        #[arg(short, long)]
        title: String,

        /// Thumbnail to show instead of the provider's
        #[arg(long)]
        thumbnail: Option<String>,

        /// Simulate the user pressing play
        #[arg(long)]
        play: bool,

        /// Simulate a thumbnail load error
        #[arg(long)]
        thumbnail_failed: bool,

        /// Fetch the thumbnail before rendering
        #[arg(long)]
        probe: bool,
    },
    /// List portfolio cards
    Catalog {
        /// Fetch every card thumbnail
        #[arg(long)]
        probe: bool,
    },
    /// Render the detail page player for a portfolio entry
    Show {
        #[arg(value_name = "SLUG")]
        slug: String,

        #[arg(long)]
        play: bool,

        #[arg(long)]
        probe: bool,
    },
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Command::Resolve { url, json } => Self::print_resolution(url, *json),
            Command::Render {
                url,
                title,
                thumbnail,
                play,
                thumbnail_failed,
                probe,
            } => {
                let mut player = VideoPlayer::new(url, title.clone());
                if let Some(thumbnail) = thumbnail {
                    player = player.with_thumbnail_override(thumbnail.clone());
                }
                if *thumbnail_failed {
                    player.thumbnail_failed();
                }
                Self::present(&config, player, *play, *probe).await
            }
            Command::Catalog { probe } => Self::catalog(&config, *probe).await,
            Command::Show { slug, play, probe } => {
                let entry = config
                    .portfolio
                    .find(slug)
                    .ok_or_else(|| anyhow::anyhow!("No portfolio entry named {:?}", slug))?;

                println!("{} ({})", entry.title, entry.subtitle);
                if !entry.description.is_empty() {
                    println!("{}", entry.description);
                }

                let (prev, next) = config.portfolio.neighbors(slug);
                if let Some(prev) = prev {
                    println!("Previous: {} {}", prev.title, prev.detail_path());
                }
                if let Some(next) = next {
                    println!("Next: {} {}", next.title, next.detail_path());
                }

                Self::present(&config, entry.player(), *play, *probe).await
            }
        }
    }

    fn print_resolution(url: &str, json: bool) -> Result<()> {
        let video = resolve(url);

        if json {
            println!("{}", serde_json::to_string_pretty(&video)?);
            return Ok(());
        }

        match video {
            Some(video) => {
                println!("Provider: {} {}", video.provider.icon(), video.provider);
                println!("ID: {}", video.id);
                println!("Embed: {}", video.embed_url);
                println!("Thumbnail: {}", video.thumbnail_url);
            }
            None => println!("Cannot display this video: unsupported URL"),
        }

        Ok(())
    }

    async fn present(config: &Config, mut player: VideoPlayer, play: bool, probe: bool) -> Result<()> {
        if probe {
            let loader = HttpThumbnailLoader::new(&config.user_agent, config.timeout())?;
            player.observe_thumbnail(&loader).await;
        }
        if play {
            player.play();
        }

        info!("Player state: {:?}", player.state());
        if player.state() == PlayerState::Facade && player.is_thumbnail_failed() {
            info!("Thumbnail unavailable, showing title fallback");
        }

        println!("{}", player_html(&player));
        Ok(())
    }

    async fn catalog(config: &Config, probe: bool) -> Result<()> {
        let cards = config.portfolio.cards();

        let failures: Vec<bool> = if probe {
            let loader = HttpThumbnailLoader::new(&config.user_agent, config.timeout())?;
            let loader: &dyn ThumbnailLoader = &loader;
            let mut results: Vec<(usize, bool)> = stream::iter(cards.iter().enumerate())
                .map(|(i, card)| async move {
                    let failed = match &card.thumbnail_url {
                        Some(url) => loader.load(url).await.is_err(),
                        None => false,
                    };
                    (i, failed)
                })
                .buffer_unordered(config.concurrent_probes.max(1))
                .collect()
                .await;
            results.sort_by_key(|(i, _)| *i);
            results.into_iter().map(|(_, failed)| failed).collect()
        } else {
            vec![false; cards.len()]
        };

        for (mut card, failed) in cards.into_iter().zip(failures) {
            if failed {
                info!("Thumbnail for {} unavailable, showing title", card.entry.slug);
                card.thumbnail_url = None;
            }
            println!("{}", card_html(&card));
        }

        Ok(())
    }
}
