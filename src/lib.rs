pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod render;
pub mod utils;

pub use config::Config;
pub use core::{resolve, PlayerState, Presentation, VideoInfo, VideoPlayer, VideoProvider};
