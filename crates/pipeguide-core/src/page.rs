//! The page-owned view state.
//!
//! `InfoPage` keeps one [`PageState`] in a signal and funnels every resize and
//! font-toggle click through the methods here.

use crate::config::PageConfig;
use crate::font_scale::FontScale;
use crate::header::HeaderState;
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub header: HeaderState,
    pub font_scale: FontScale,
    breakpoint_px: u32,
    hero_image: String,
}

impl PageState {
    /// Initial state for a viewport `width` pixels wide.
    pub fn new(width: f64, config: &PageConfig) -> Self {
        Self {
            header: HeaderState::for_width(width, config.breakpoint_px, &config.hero_image),
            font_scale: FontScale::default(),
            breakpoint_px: config.breakpoint_px,
            hero_image: config.hero_image.clone(),
        }
    }

    /// Recompute the header for a new width. Returns whether anything changed.
    pub fn on_resize(&mut self, width: f64) -> bool {
        let header = HeaderState::for_width(width, self.breakpoint_px, &self.hero_image);
        if header == self.header {
            return false;
        }
        trace!(
            "Header layout changed at width {}: split={}",
            width,
            header.labels.is_split()
        );
        self.header = header;
        true
    }

    /// Root class selecting the narrow or wide image layout, switched at the
    /// same breakpoint as the header.
    pub fn layout_class(&self) -> &'static str {
        if self.header.labels.is_split() {
            "layout-narrow"
        } else {
            "layout-wide"
        }
    }

    pub fn toggle_font_scale(&mut self) {
        self.font_scale.toggle();
        debug!("Font scale now {:?}", self.font_scale);
    }
}
