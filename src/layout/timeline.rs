use super::text::{line_height, place_text};
use crate::canvas::{Canvas, Stroke, TextStyle};
use crate::colour::colours;
use crate::context::RenderContext;
use crate::dates::RANGE_SEPARATOR;
use crate::font::FontClass;
use crate::resume::TimelineEntry;
use crate::units::Pt;

const MARKER_RADIUS: Pt = Pt(3.0);
const MARKER_DROP: Pt = Pt(2.0);

/// Draw one timeline entry with its top at `y`: the guide and marker, the
/// date to the left of the guide, and heading, secondary heading and
/// description to the right of it. The guide is extended when the text runs
/// past it. Returns where the next entry starts.
pub fn render_entry<C: Canvas + ?Sized>(
    canvas: &mut C,
    ctx: &RenderContext,
    y: Pt,
    entry: &TimelineEntry,
) -> Pt {
    let geometry = ctx.geometry;
    let size = ctx.typography.text_size;
    let line_x = geometry.timeline_line_x();
    let text_x = geometry.timeline_text_x();
    let width = Some(geometry.timeline_text_width());
    let guide = Stroke::new(colours::GUIDE);
    let regular = TextStyle::new(FontClass::Regular, size);

    canvas.line((line_x, y), (line_x, y + geometry.guide_length), guide);
    canvas.circle((line_x, y + MARKER_DROP), MARKER_RADIUS, guide, Some(colours::GUIDE));

    if let Some(label) = entry.date_label() {
        let parts: Vec<&str> = label.split(RANGE_SEPARATOR).collect();
        match parts.as_slice() {
            [start, end] => {
                canvas.text((geometry.main_left(), y), &format!("{start} -"), regular);
                canvas.text((geometry.main_left(), y + line_height(size)), end, regular);
            }
            _ => canvas.text((geometry.main_left(), y), label, regular),
        }
    }

    let secondary = entry.secondary_heading();
    let heading_font = if secondary.is_some() {
        FontClass::Bold
    } else {
        FontClass::Regular
    };
    let mut current = place_text(
        canvas,
        ctx.metrics,
        (text_x, y),
        entry.heading(),
        TextStyle::new(heading_font, size),
        width,
    );
    if let Some(secondary) = secondary {
        current = place_text(
            canvas,
            ctx.metrics,
            (text_x, current),
            secondary,
            regular.coloured(colours::SECONDARY_HEADING),
            width,
        );
    }

    current += line_height(size) / 2.0;
    if let Some(description) = entry.description(ctx.strings) {
        for paragraph in description.lines() {
            current = place_text(canvas, ctx.metrics, (text_x, current), paragraph, regular, width);
        }
    }

    if current - y > geometry.guide_length {
        canvas.line((line_x, y), (line_x, current), guide);
    }

    current + geometry.section_spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;
    use crate::context::RenderSettings;
    use crate::locale::Locale;

    fn entry(company: Option<&str>, description: Option<&str>) -> TimelineEntry {
        TimelineEntry::Work {
            dates: Some("Jan 2020 - present".to_string()),
            position: "Engineer".to_string(),
            company: company.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn short_entries_keep_the_default_guide() {
        let settings = RenderSettings::default();
        let ctx = RenderContext::new(&settings, Locale::En);
        let mut list = DrawList::new();
        let next = render_entry(&mut list, &ctx, Pt(100.0), &entry(None, None));

        // heading line then half a line of spacing
        assert_eq!(next, Pt(100.0 + 15.0 + 7.5 + 20.0));
        let guides: Vec<_> = list.lines().collect();
        assert_eq!(guides.len(), 1);
        assert_eq!(*guides[0].1, (Pt(243.5), Pt(150.0)));

        let texts: Vec<(&(Pt, Pt), &str)> = list.texts().map(|(o, t, _)| (o, t)).collect();
        assert_eq!(texts[0], (&(Pt(188.5), Pt(100.0)), "Jan 2020 -"));
        assert_eq!(texts[1], (&(Pt(188.5), Pt(115.0)), "present"));
    }

    #[test]
    fn headings_are_bold_only_with_a_secondary_heading() {
        let settings = RenderSettings::default();
        let ctx = RenderContext::new(&settings, Locale::En);

        let mut list = DrawList::new();
        render_entry(&mut list, &ctx, Pt(0.0), &entry(Some("Acme"), None));
        let heading = list.texts().find(|(_, text, _)| *text == "Engineer").unwrap();
        assert_eq!(heading.2.font, FontClass::Bold);
        let company = list.texts().find(|(_, text, _)| *text == "Acme").unwrap();
        assert_eq!(company.2.colour, colours::SECONDARY_HEADING);
        assert_eq!(*company.0, (Pt(253.5), Pt(15.0)));

        let mut list = DrawList::new();
        render_entry(&mut list, &ctx, Pt(0.0), &entry(None, None));
        let heading = list.texts().find(|(_, text, _)| *text == "Engineer").unwrap();
        assert_eq!(heading.2.font, FontClass::Regular);
    }

    #[test]
    fn tall_entries_extend_the_guide_to_their_extent() {
        let settings = RenderSettings::default();
        let ctx = RenderContext::new(&settings, Locale::En);
        let mut list = DrawList::new();
        let description = "First paragraph\nSecond paragraph\nThird paragraph";
        let next = render_entry(&mut list, &ctx, Pt(200.0), &entry(Some("Acme"), Some(description)));

        // heading, company, half line, three paragraphs
        let bottom = Pt(200.0 + 15.0 + 15.0 + 7.5 + 45.0);
        assert_eq!(next, bottom + Pt(20.0));

        let guides: Vec<_> = list.lines().collect();
        assert_eq!(guides.len(), 2);
        assert_eq!(*guides[1].0, (Pt(243.5), Pt(200.0)));
        assert_eq!(*guides[1].1, (Pt(243.5), bottom));
    }

    #[test]
    fn certifications_are_described_by_their_issuer() {
        let settings = RenderSettings::default();
        let ctx = RenderContext::new(&settings, Locale::Fr);
        let cert = TimelineEntry::Certification {
            date: Some("Mai 2022".to_string()),
            name: "Kubernetes Administrator".to_string(),
            issuer: "CNCF".to_string(),
        };
        let mut list = DrawList::new();
        render_entry(&mut list, &ctx, Pt(0.0), &cert);

        let texts: Vec<&str> = list.texts().map(|(_, t, _)| t).collect();
        assert_eq!(texts, vec!["Mai 2022", "Kubernetes Administrator", "Émis par : CNCF"]);
    }
}
