//! Shared font-size toggle.

/// Text size shared by every bound paragraph on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontScale {
    #[default]
    Normal,
    Large,
}

impl FontScale {
    pub fn toggled(self) -> Self {
        match self {
            FontScale::Normal => FontScale::Large,
            FontScale::Large => FontScale::Normal,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn variant(self) -> TextVariant {
        match self {
            FontScale::Normal => TextVariant::Body1,
            FontScale::Large => TextVariant::H6,
        }
    }
}

/// The two typography variants a bound paragraph can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    Body1,
    H6,
}

impl TextVariant {
    pub fn name(self) -> &'static str {
        match self {
            TextVariant::Body1 => "body1",
            TextVariant::H6 => "h6",
        }
    }

    /// Inline style for the variant.
    pub fn style(self) -> &'static str {
        match self {
            TextVariant::Body1 => "font-size: 1rem; line-height: 1.5; font-weight: 400;",
            TextVariant::H6 => "font-size: 1.25rem; line-height: 1.6; font-weight: 500;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(FontScale::default(), FontScale::Normal);
        assert_eq!(FontScale::default().variant(), TextVariant::Body1);
    }

    #[test]
    fn test_toggle_switches_variant() {
        let mut scale = FontScale::Normal;
        scale.toggle();
        assert_eq!(scale, FontScale::Large);
        assert_eq!(scale.variant(), TextVariant::H6);
        assert_eq!(scale.variant().name(), "h6");
    }

    #[test]
    fn test_even_toggles_restore_original() {
        for start in [FontScale::Normal, FontScale::Large] {
            let mut scale = start;
            for _ in 0..6 {
                scale.toggle();
            }
            assert_eq!(scale, start);
            assert_eq!(scale.variant().style(), start.variant().style());
        }
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(TextVariant::Body1.style(), TextVariant::H6.style());
    }
}
