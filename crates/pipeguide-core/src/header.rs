//! Responsive header derivation.
//!
//! The header title wraps onto two lines on narrow viewports. Both the labels
//! and the hero image are recomputed from the viewport width on mount and on
//! every resize; the functions here are pure so the adapter in the page only
//! has to read `innerWidth` and store the result.

/// Viewport width (px) at or below which the title is split.
pub const DEFAULT_BREAKPOINT_PX: u32 = 500;

/// Procedure diagram shown in the first accordion section.
pub const DEFAULT_HERO_IMAGE: &str = "/eocs.png";

const TITLE_FULL: &str = "도시가스 배관보호 안내";
const TITLE_FIRST: &str = "도시가스";
const TITLE_SECOND: &str = "배관보호 안내";

/// The two title lines. `line2` is empty whenever the title fits on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLabels {
    pub line1: &'static str,
    pub line2: &'static str,
}

impl HeaderLabels {
    pub fn is_split(&self) -> bool {
        !self.line2.is_empty()
    }
}

/// Path of the procedure image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroImageRef {
    pub path: String,
}

/// Everything recomputed together on a resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub labels: HeaderLabels,
    pub hero: HeroImageRef,
}

impl HeaderState {
    pub fn for_width(width: f64, breakpoint: u32, hero_image: &str) -> Self {
        Self {
            labels: derive_header_state_at(width, breakpoint),
            hero: derive_hero_image(width, breakpoint, hero_image),
        }
    }
}

/// Header labels for `width` against [`DEFAULT_BREAKPOINT_PX`].
pub fn derive_header_state(width: f64) -> HeaderLabels {
    derive_header_state_at(width, DEFAULT_BREAKPOINT_PX)
}

/// Header labels for `width` against an explicit breakpoint.
///
/// A width the host could not report (NaN, infinite, negative) gets the
/// one-line layout.
pub fn derive_header_state_at(width: f64, breakpoint: u32) -> HeaderLabels {
    if is_narrow(width, breakpoint) {
        HeaderLabels {
            line1: TITLE_FIRST,
            line2: TITLE_SECOND,
        }
    } else {
        HeaderLabels {
            line1: TITLE_FULL,
            line2: "",
        }
    }
}

/// Hero image for `width`. Both layouts currently resolve to the same image.
pub fn derive_hero_image(_width: f64, _breakpoint: u32, hero_image: &str) -> HeroImageRef {
    HeroImageRef {
        path: hero_image.to_string(),
    }
}

fn is_narrow(width: f64, breakpoint: u32) -> bool {
    width.is_finite() && width >= 0.0 && width <= f64::from(breakpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_width_splits_title() {
        let labels = derive_header_state(400.0);
        assert_eq!(labels.line1, "도시가스");
        assert_eq!(labels.line2, "배관보호 안내");
        assert!(labels.is_split());
    }

    #[test]
    fn test_wide_width_single_line() {
        let labels = derive_header_state(800.0);
        assert_eq!(labels.line1, "도시가스 배관보호 안내");
        assert_eq!(labels.line2, "");
        assert!(!labels.is_split());
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert!(derive_header_state(500.0).is_split());
        assert!(!derive_header_state(500.5).is_split());
        assert!(!derive_header_state(501.0).is_split());
    }

    #[test]
    fn test_second_line_empty_above_breakpoint() {
        for width in [501.0, 768.0, 1024.0, 1920.0, 3840.0] {
            assert_eq!(derive_header_state(width).line2, "", "width {width}");
        }
        for width in [0.0, 320.0, 375.0, 499.0] {
            assert!(!derive_header_state(width).line2.is_empty(), "width {width}");
        }
    }

    #[test]
    fn test_custom_breakpoint() {
        assert!(derive_header_state_at(700.0, 768).is_split());
        assert!(!derive_header_state_at(800.0, 768).is_split());
    }

    #[test]
    fn test_unreported_width_uses_single_line() {
        assert!(!derive_header_state(f64::NAN).is_split());
        assert!(!derive_header_state(f64::INFINITY).is_split());
        assert!(!derive_header_state(-1.0).is_split());
    }

    #[test]
    fn test_hero_image_constant_across_widths() {
        let narrow = HeaderState::for_width(320.0, DEFAULT_BREAKPOINT_PX, DEFAULT_HERO_IMAGE);
        let wide = HeaderState::for_width(1280.0, DEFAULT_BREAKPOINT_PX, DEFAULT_HERO_IMAGE);
        assert_eq!(narrow.hero, wide.hero);
        assert_eq!(narrow.hero.path, "/eocs.png");
        assert_ne!(narrow.labels, wide.labels);
    }
}
