//! Everything a render needs besides the résumé itself: page geometry,
//! type sizes, width factors and the fonts.

use crate::font::{BuiltinFont, FontSpec};
use crate::layout::{Margins, TextMetrics};
use crate::locale::{Locale, LocaleStrings};
use crate::pagesize::{self, PageSize};
use crate::units::Pt;
use std::collections::HashMap;

/// Fixed positions and distances of the two-column layout. Derived from the
/// page size once, never changed during a render.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub sidebar_width: Pt,
    /// `left` is the sidebar text margin, `top` where both columns start
    /// without a photo, `right` where the main column ends
    pub margins: Margins,
    /// Gap between the sidebar and the main column
    pub column_gap: Pt,
    pub section_spacing: Pt,
    /// Offset of the timeline guide from the main column's left edge
    pub timeline_offset: Pt,
    /// Offset of timeline text from the guide
    pub timeline_text_offset: Pt,
    /// Length of the guide drawn for every timeline entry up front
    pub guide_length: Pt,
    pub photo_top: Pt,
    /// Room kept above and below the photo before the sidebar text starts
    pub photo_margin: (Pt, Pt),
}

impl PageGeometry {
    pub fn new(size: PageSize) -> PageGeometry {
        let (width, height) = size;
        PageGeometry {
            width,
            height,
            sidebar_width: width * 0.3,
            margins: Margins::trbl(Pt(50.0), Pt(30.0), Pt(0.0), Pt(20.0)),
            column_gap: Pt(10.0),
            section_spacing: Pt(20.0),
            timeline_offset: Pt(55.0),
            timeline_text_offset: Pt(10.0),
            guide_length: Pt(50.0),
            photo_top: Pt(10.0),
            photo_margin: (Pt(20.0), Pt(30.0)),
        }
    }

    /// Left edge of the main column
    pub fn main_left(&self) -> Pt {
        self.sidebar_width + self.column_gap
    }

    /// Right edge of everything in the main column
    pub fn right_edge(&self) -> Pt {
        self.width - self.margins.right
    }

    pub fn sidebar_text_width(&self) -> Pt {
        self.sidebar_width - self.margins.left
    }

    /// The longest side a profile photo is drawn at
    pub fn photo_box(&self) -> Pt {
        (self.sidebar_width * 0.8).floor()
    }

    /// Where the sidebar text starts, below the photo when there is one
    pub fn sidebar_start(&self, has_photo: bool) -> Pt {
        if has_photo {
            self.photo_margin.0 + self.photo_box() + self.photo_margin.1
        } else {
            self.margins.top
        }
    }

    pub fn timeline_line_x(&self) -> Pt {
        self.main_left() + self.timeline_offset
    }

    pub fn timeline_text_x(&self) -> Pt {
        self.timeline_line_x() + self.timeline_text_offset
    }

    pub fn timeline_text_width(&self) -> Pt {
        self.width - self.timeline_text_x() - self.margins.right
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::new(pagesize::A4)
    }
}

/// Font sizes of the different kinds of text
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Typography {
    pub title_size: Pt,
    pub text_size: Pt,
    pub name_size: Pt,
    /// Room reserved for a contact icon in front of its text
    pub icon_spacing: Pt,
}

impl Default for Typography {
    fn default() -> Self {
        Typography {
            title_size: Pt(12.0),
            text_size: Pt(10.0),
            name_size: Pt(14.0),
            icon_spacing: Pt(15.0),
        }
    }
}

/// The face behind each [FontClass](crate::FontClass)
#[derive(Clone, Debug)]
pub struct FontSet {
    pub regular: FontSpec,
    pub bold: FontSpec,
    pub italic: FontSpec,
    pub icon: FontSpec,
}

impl Default for FontSet {
    fn default() -> Self {
        FontSet {
            regular: FontSpec::Builtin(BuiltinFont::TimesRoman),
            bold: FontSpec::Builtin(BuiltinFont::HelveticaBold),
            italic: FontSpec::Builtin(BuiltinFont::TimesItalic),
            icon: FontSpec::Builtin(BuiltinFont::ZapfDingbats),
        }
    }
}

/// Immutable render configuration, shareable between renders
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    pub geometry: PageGeometry,
    pub typography: Typography,
    pub metrics: TextMetrics,
    pub fonts: FontSet,
    /// Replaces `fonts` when rendering in one of these locales
    pub fonts_by_locale: HashMap<Locale, FontSet>,
}

impl RenderSettings {
    /// The fonts a résumé in `locale` is set in
    pub fn fonts_for(&self, locale: Locale) -> &FontSet {
        self.fonts_by_locale.get(&locale).unwrap_or(&self.fonts)
    }
}

/// The state shared by every layout step of a single render
#[derive(Copy, Clone, Debug)]
pub struct RenderContext<'s> {
    pub geometry: &'s PageGeometry,
    pub typography: &'s Typography,
    pub metrics: &'s TextMetrics,
    pub locale: Locale,
    pub strings: &'static LocaleStrings,
}

impl<'s> RenderContext<'s> {
    pub fn new(settings: &'s RenderSettings, locale: Locale) -> RenderContext<'s> {
        RenderContext {
            geometry: &settings.geometry,
            typography: &settings.typography,
            metrics: &settings.metrics,
            locale,
            strings: locale.strings(),
        }
    }
}
