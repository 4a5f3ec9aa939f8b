//! Page configuration.
//!
//! The theme and page constants are one explicit struct handed down through
//! component props. The defaults ship as `page.toml`, compiled into the binary.

use serde::Deserialize;
use url::Url;

use crate::header::{DEFAULT_BREAKPOINT_PX, DEFAULT_HERO_IMAGE};
use crate::prelude::*;

const EMBEDDED_CONFIG: &str = include_str!("../page.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Viewport width (px) at or below which the header title is split
    pub breakpoint_px: u32,

    /// Procedure diagram path
    pub hero_image: String,

    pub theme: Theme,
    pub links: Links,
    pub logging: LoggingConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            hero_image: DEFAULT_HERO_IMAGE.to_string(),
            theme: Theme::default(),
            links: Links::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in `page.toml`.
    ///
    /// Pass the result through [`PageConfig::or_default`]; the page renders
    /// either way.
    pub fn embedded() -> Result<Self> {
        let config = Self::from_toml_str(EMBEDDED_CONFIG)?;
        debug!("Loaded embedded page configuration");
        Ok(config)
    }

    /// Resolve a load attempt, using defaults on a configuration error.
    pub fn or_default(loaded: Result<Self>) -> Self {
        match loaded {
            Ok(config) => config,
            Err(e) if e.is_config() => {
                warn!("{}, using defaults", e);
                Self::default()
            }
            Err(e) => {
                error!("Unexpected error loading page configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.breakpoint_px == 0 {
            return Err(Error::config_invalid("breakpoint_px must be positive"));
        }
        if !self.hero_image.starts_with('/') {
            return Err(Error::config_invalid(format!(
                "hero_image must be an absolute path, got {:?}",
                self.hero_image
            )));
        }
        self.theme.validate()?;
        self.links.validate()
    }
}

/// Colors and font applied through component props.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub font_family: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
    /// Circle behind the rule-group and marker headings
    pub round: String,
    /// Background of the penalty notice banner
    pub notice: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Noto Sans KR, Arial, sans-serif".to_string(),
            primary: "#1E88E5".to_string(),
            secondary: "#D32F2F".to_string(),
            background: "#F5F5F5".to_string(),
            text_primary: "#333".to_string(),
            text_secondary: "#757575".to_string(),
            round: "#B0E7FA".to_string(),
            notice: "tomato".to_string(),
        }
    }
}

impl Theme {
    fn validate(&self) -> Result<()> {
        let colors = [
            ("theme.primary", &self.primary),
            ("theme.secondary", &self.secondary),
            ("theme.background", &self.background),
            ("theme.text_primary", &self.text_primary),
            ("theme.text_secondary", &self.text_secondary),
            ("theme.round", &self.round),
            ("theme.notice", &self.notice),
        ];
        for (field, value) in colors {
            if !is_css_color(value) {
                return Err(Error::config_invalid(format!(
                    "{field} is not a color: {value:?}"
                )));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::config_invalid("theme.font_family is empty"));
        }
        Ok(())
    }
}

/// `#rgb`, `#rrggbb`, `#rrggbbaa` or a bare CSS color keyword.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Outbound link targets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Links {
    pub android: String,
    pub ios: String,
    pub homepage: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            android: "https://play.google.com/store/apps/details?id=com.eocs.mobile".to_string(),
            ios: "https://apps.apple.com/kr/app/%EA%B5%B4%EC%B0%A9%EA%B3%B5%EC%82%AC%EC%A0%95%EB%B3%B4%EC%A7%80%EC%9B%90%EC%8B%9C%EC%8A%A4%ED%85%9C/id1189086746".to_string(),
            homepage: "https://www.jbcorporation.com/index/service_09.php".to_string(),
        }
    }
}

impl Links {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("links.android", &self.android),
            ("links.ios", &self.ios),
            ("links.homepage", &self.homepage),
        ] {
            let url = Url::parse(value).map_err(|e| Error::invalid_url(field, e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::invalid_url(
                    field,
                    format!("unsupported scheme {:?}", url.scheme()),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
