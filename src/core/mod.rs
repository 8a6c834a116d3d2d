pub mod catalog;
pub mod player;
pub mod resolver;
pub mod thumbnail;
pub mod video;

pub use catalog::{Catalog, CatalogError, PortfolioCard, PortfolioEntry};
pub use player::{FacadeThumbnail, PlayerEvent, PlayerState, Presentation, VideoPlayer};
pub use resolver::{resolve, Provider, Resolver};
pub use thumbnail::{HttpThumbnailLoader, ThumbnailError, ThumbnailLoader};
pub use video::{VideoInfo, VideoProvider};
