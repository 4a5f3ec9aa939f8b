//! Accordion expansion flag.
//!
//! Each accordion owns one of these; the page never sees them, so opening one
//! section cannot touch another.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        assert_eq!(Expansion::default(), Expansion::Collapsed);
        assert!(!Expansion::default().is_expanded());
    }

    #[test]
    fn test_toggle() {
        let mut e = Expansion::Collapsed;
        e.toggle();
        assert!(e.is_expanded());
        e.toggle();
        assert_eq!(e, Expansion::Collapsed);
    }
}
