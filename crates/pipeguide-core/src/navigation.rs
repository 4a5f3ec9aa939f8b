//! Outbound navigation.
//!
//! The page never looks at whether a new browsing context actually opened.
//! [`open_link`] logs a failure and drops it.

use crate::config::Links;
use crate::prelude::*;

/// The host's "open in a new browsing context" capability.
pub trait Navigator {
    fn open(&self, url: &str) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn open(&self, url: &str) -> Result<()> {
        (**self).open(url)
    }
}

/// The three buttons that leave the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    AndroidStore,
    IosStore,
    CorporateHome,
}

impl LinkTarget {
    pub const ALL: [LinkTarget; 3] = [
        LinkTarget::AndroidStore,
        LinkTarget::IosStore,
        LinkTarget::CorporateHome,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::AndroidStore => "안드로이드",
            LinkTarget::IosStore => "아이폰",
            LinkTarget::CorporateHome => "JB 홈페이지 바로가기",
        }
    }

    pub fn url(self, links: &Links) -> &str {
        match self {
            LinkTarget::AndroidStore => &links.android,
            LinkTarget::IosStore => &links.ios,
            LinkTarget::CorporateHome => &links.homepage,
        }
    }
}

/// Fire-and-forget open of `target`.
pub fn open_link(navigator: &impl Navigator, links: &Links, target: LinkTarget) {
    let url = target.url(links);
    debug!("Opening {:?}: {}", target, url);
    if let Err(e) = navigator.open(url) {
        warn!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every URL it is asked to open.
    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(Error::navigation(url, "popup blocked"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_each_button_opens_its_literal_url_once() {
        let links = Links::default();
        let expected = [
            "https://play.google.com/store/apps/details?id=com.eocs.mobile",
            "https://apps.apple.com/kr/app/%EA%B5%B4%EC%B0%A9%EA%B3%B5%EC%82%AC%EC%A0%95%EB%B3%B4%EC%A7%80%EC%9B%90%EC%8B%9C%EC%8A%A4%ED%85%9C/id1189086746",
            "https://www.jbcorporation.com/index/service_09.php",
        ];

        for (target, url) in LinkTarget::ALL.into_iter().zip(expected) {
            let nav = RecordingNavigator::default();
            open_link(&nav, &links, target);
            assert_eq!(*nav.opened.borrow(), vec![url.to_string()], "{target:?}");
        }
    }

    #[test]
    fn test_failure_is_swallowed() {
        let nav = RecordingNavigator {
            fail: true,
            ..Default::default()
        };
        open_link(&nav, &Links::default(), LinkTarget::CorporateHome);
        assert_eq!(nav.opened.borrow().len(), 1);
    }

    #[test]
    fn test_configured_links_are_used() {
        let links = Links {
            homepage: "https://example.com/".to_string(),
            ..Links::default()
        };
        let nav = RecordingNavigator::default();
        open_link(&&nav, &links, LinkTarget::CorporateHome);
        assert_eq!(*nav.opened.borrow(), vec!["https://example.com/".to_string()]);
    }
}
