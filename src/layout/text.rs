use super::metrics::TextMetrics;
use super::wrap::wrap;
use crate::canvas::{Canvas, TextStyle};
use crate::colour::Colour;
use crate::font::FontClass;
use crate::units::Pt;

/// Distance between consecutive baselines, as a multiple of the font size
pub const LINE_SPACING: f32 = 1.5;

pub fn line_height(size: Pt) -> Pt {
    size * LINE_SPACING
}

/// Draw `text` wrapped to `max_width` with the first baseline at `origin`.
/// Returns the y coordinate just below the last line drawn.
pub fn place_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &TextMetrics,
    origin: (Pt, Pt),
    text: &str,
    style: TextStyle,
    max_width: Option<Pt>,
) -> Pt {
    let (x, mut y) = origin;
    for line in wrap(metrics, text, style.font, style.size, max_width) {
        canvas.text((x, y), &line, style);
        y += line_height(style.size);
    }
    y
}

/// A line of text led by a coloured icon glyph, such as a contact entry
#[derive(Clone, PartialEq, Debug)]
pub struct IconPrefixedText {
    pub icon: char,
    pub icon_colour: Colour,
    /// Horizontal room reserved for the icon
    pub spacing: Pt,
    pub text: String,
}

/// Draw the icon at `origin` in the icon font and the text after it, wrapped
/// to what is left of `max_width`. Returns the y below the last text line.
pub fn place_icon_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    metrics: &TextMetrics,
    origin: (Pt, Pt),
    item: &IconPrefixedText,
    style: TextStyle,
    max_width: Option<Pt>,
) -> Pt {
    let icon_style = TextStyle {
        font: FontClass::Icon,
        colour: item.icon_colour,
        ..style
    };
    canvas.text(origin, &item.icon.to_string(), icon_style);

    let text_origin = (origin.0 + item.spacing, origin.1);
    let width = max_width.map(|width| width - item.spacing);
    place_text(canvas, metrics, text_origin, &item.text, style, width)
}
