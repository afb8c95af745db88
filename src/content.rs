//! Turns recorded page contents into a PDF content stream.

use crate::canvas::Stroke;
use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout};
use crate::units::Pt;
use id_arena::Arena;
use std::io::Write;

/// Control point distance for approximating a quarter circle with a cubic
/// bezier curve
const KAPPA: f32 = 0.552_284_8;

#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width(),
                    image.position.height(),
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::Line(line) => {
                write!(&mut content, "q\n")?;
                write_stroke(&mut content, line.stroke)?;
                write!(&mut content, "{} {} m\n", line.from.0, line.from.1)?;
                write!(&mut content, "{} {} l\n", line.to.0, line.to.1)?;
                write!(&mut content, "S\nQ\n")?;
            }
            PageContents::Circle(circle) => {
                write!(&mut content, "q\n")?;
                write_stroke(&mut content, circle.stroke)?;
                if let Some(fill) = circle.fill {
                    write_fill(&mut content, fill)?;
                }
                write_circle_path(&mut content, circle.centre, circle.radius)?;
                let op = if circle.fill.is_some() { "B" } else { "S" };
                write!(&mut content, "{op}\nQ\n")?;
            }
            PageContents::Rectangle(rect) => {
                if rect.stroke.is_none() && rect.fill.is_none() {
                    continue;
                }
                write!(&mut content, "q\n")?;
                if let Some(stroke) = rect.stroke {
                    write_stroke(&mut content, stroke)?;
                }
                if let Some(fill) = rect.fill {
                    write_fill(&mut content, fill)?;
                }
                write!(
                    &mut content,
                    "{} {} {} {} re\n",
                    rect.rect.x1,
                    rect.rect.y1,
                    rect.rect.width(),
                    rect.rect.height()
                )?;
                let op = match (rect.stroke.is_some(), rect.fill.is_some()) {
                    (true, true) => "B",
                    (false, true) => "f",
                    _ => "S",
                };
                write!(&mut content, "{op}\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write!(content, "/F{} {} Tf\n", current_font.id.index(), current_font.size)?;
    write_fill(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(content, "/F{} {} Tf\n", current_font.id.index(), current_font.size)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        for byte in fonts[current_font.id].encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_circle_path(content: &mut Vec<u8>, centre: (Pt, Pt), radius: Pt) -> Result<(), std::io::Error> {
    let (cx, cy) = (centre.0 .0, centre.1 .0);
    let r = radius.0;
    let k = r * KAPPA;

    write!(content, "{} {} m\n", cx + r, cy)?;
    write!(content, "{} {} {} {} {} {} c\n", cx + r, cy + k, cx + k, cy + r, cx, cy + r)?;
    write!(content, "{} {} {} {} {} {} c\n", cx - k, cy + r, cx - r, cy + k, cx - r, cy)?;
    write!(content, "{} {} {} {} {} {} c\n", cx - r, cy - k, cx - k, cy - r, cx, cy - r)?;
    write!(content, "{} {} {} {} {} {} c\n", cx + k, cy - r, cx + r, cy - k, cx + r, cy)?;
    write!(content, "h\n")
}

#[allow(clippy::write_with_newline)]
fn write_stroke(content: &mut Vec<u8>, stroke: Stroke) -> Result<(), std::io::Error> {
    write!(content, "{} w\n", stroke.width)?;
    match stroke.colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_fill(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}
