//! # pipeguide-core - Page Model
//!
//! Foundation crate for the city-gas pipeline protection guide. Holds
//! everything the page needs that does not touch the DOM, so it can be
//! exercised natively.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, url, tracing).
//!
//! ## Public API
//!
//! ### View State (`header`, `font_scale`, `expansion`, `page`)
//! - [`derive_header_state()`] - Title layout for a viewport width
//! - [`HeaderState`] - Header labels plus the hero image, recomputed on resize
//! - [`FontScale`] - Shared two-level text size
//! - [`Expansion`] - Collapsed/expanded flag owned by each accordion
//! - [`PageState`] - The one page-owned state value and its transitions
//!
//! ### Content (`content`)
//! - [`SectionId`] - The four accordion sections in display order
//! - [`contact_rows()`], [`rule_groups()`], [`pipe_markers()`] - Static copy
//!
//! ### Configuration (`config`)
//! - [`PageConfig`] - Breakpoint, theme, outbound links and log level
//! - [`Theme`] - Colors and font injected into every component
//!
//! ### Navigation (`navigation`)
//! - [`Navigator`] - Seam over the host's "open new browsing context"
//! - [`LinkTarget`] - Android store, iOS store, corporate homepage
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Configuration and navigation failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod config;
pub mod content;
pub mod error;
pub mod expansion;
pub mod font_scale;
pub mod header;
pub mod navigation;
pub mod page;

/// Prelude for common imports used throughout the pipeguide crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use config::{Links, LogLevel, LoggingConfig, PageConfig, Theme};
pub use content::{
    contact_rows, pipe_markers, rule_groups, ContactRow, ContactValue, PipeMarker, RuleGroup,
    SectionId, CONTACT_HEADING, COPYRIGHT, FONT_TOGGLE_LABEL, PENALTY_NOTICE,
};
pub use error::{Error, Result};
pub use expansion::Expansion;
pub use font_scale::{FontScale, TextVariant};
pub use header::{
    derive_header_state, derive_header_state_at, derive_hero_image, HeaderLabels, HeaderState,
    HeroImageRef, DEFAULT_BREAKPOINT_PX, DEFAULT_HERO_IMAGE,
};
pub use navigation::{open_link, LinkTarget, Navigator};
pub use page::PageState;
