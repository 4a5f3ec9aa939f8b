use pipeguide_core::{Error, Navigator, Result};

/// Opens URLs in a new tab through `window.open`.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::navigation(url, "no window"))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(Error::navigation(url, "blocked by the browser")),
            Err(e) => Err(Error::navigation(url, format!("{e:?}"))),
        }
    }
}
