//! Showreel site core
//!
//! Platform-agnostic controllers for the portfolio site: the three-language
//! localizer with right-to-left support and the auto-advancing reel carousel.
//! Browser access goes through the [`dom::Dom`], [`carousel::CarouselView`]
//! and [`carousel::Ticker`] traits so everything here runs under plain
//! `cargo test`.
#![forbid(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod dom;
pub mod filter;
pub mod i18n;
pub mod localizer;
pub mod media;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use carousel::{
    Carousel, CarouselFrame, CarouselView, CarouselWindow, SlideSelector, Ticker,
    page_size_for_width,
};
pub use config::{Breakpoints, CarouselConfig, ConfigError, SiteConfig};
pub use dom::{Dom, Target};
pub use filter::{PortfolioFilter, apply_filter};
pub use i18n::{Catalog, CatalogError, Direction, Lang, LocaleError, LocaleMeta, locales};
pub use localizer::{Localizer, RenderReport};
pub use media::MediaItem;
