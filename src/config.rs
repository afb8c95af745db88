//! Render configuration as read from a JSON file.
//!
//! ```json
//! {
//!     "page_size": "letter",
//!     "fonts": { "regular": "Helvetica", "bold": { "file": "fonts/Inter-Bold.ttf" } },
//!     "fonts_by_locale": { "tr": { "regular": { "file": "fonts/DejaVuSerif.ttf" } } },
//!     "metrics": { "bold": 0.62 },
//!     "output_dir": "out"
//! }
//! ```
//!
//! Everything is optional; missing values keep the A4 defaults. A font class
//! a locale doesn't override keeps the font from `fonts`.

use crate::context::{FontSet, PageGeometry, RenderSettings};
use crate::font::{BuiltinFont, FontSpec};
use crate::layout::TextMetrics;
use crate::locale::Locale;
use crate::pagesize;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub page_size: Option<String>,
    pub fonts: FontConfig,
    pub fonts_by_locale: HashMap<Locale, FontConfig>,
    pub metrics: TextMetrics,
    pub output_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Option<FontSource>,
    pub bold: Option<FontSource>,
    pub italic: Option<FontSource>,
    pub icon: Option<FontSource>,
}

/// Either the name of a PDF base-14 font or a font file to embed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSource {
    Builtin(String),
    File { file: PathBuf },
}

impl FontSource {
    fn load(&self) -> Result<FontSpec, Error> {
        match self {
            FontSource::Builtin(name) => Ok(FontSpec::Builtin(name.parse::<BuiltinFont>()?)),
            FontSource::File { file } => {
                log::debug!("loading font file {}", file.display());
                FontSpec::from_file(file)
            }
        }
    }
}

fn load_or(source: &Option<FontSource>, default: FontSpec) -> Result<FontSpec, Error> {
    source.as_ref().map_or(Ok(default), FontSource::load)
}

impl FontConfig {
    /// This configuration with the classes it leaves unset taken from `base`
    fn over(&self, base: &FontConfig) -> FontConfig {
        FontConfig {
            regular: self.regular.clone().or_else(|| base.regular.clone()),
            bold: self.bold.clone().or_else(|| base.bold.clone()),
            italic: self.italic.clone().or_else(|| base.italic.clone()),
            icon: self.icon.clone().or_else(|| base.icon.clone()),
        }
    }

    fn load(&self) -> Result<FontSet, Error> {
        let defaults = FontSet::default();
        Ok(FontSet {
            regular: load_or(&self.regular, defaults.regular)?,
            bold: load_or(&self.bold, defaults.bold)?,
            italic: load_or(&self.italic, defaults.italic)?,
            icon: load_or(&self.icon, defaults.icon)?,
        })
    }
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RenderConfig, Error> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Validate the configuration and load any font files it names
    pub fn into_settings(self) -> Result<RenderSettings, Error> {
        let size = match &self.page_size {
            Some(name) => pagesize::by_name(name)?,
            None => pagesize::A4,
        };

        let fonts = self.fonts.load()?;
        let mut fonts_by_locale = HashMap::new();
        for (locale, overrides) in &self.fonts_by_locale {
            log::debug!("loading fonts for `{}`", locale.code());
            fonts_by_locale.insert(*locale, overrides.over(&self.fonts).load()?);
        }

        Ok(RenderSettings {
            geometry: PageGeometry::new(size),
            metrics: self.metrics,
            fonts,
            fonts_by_locale,
            ..Default::default()
        })
    }
}
