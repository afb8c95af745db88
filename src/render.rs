//! Assembles a résumé into a single-page document: the sidebar with the
//! person's details on the left, the summary and timelines on the right.

use crate::canvas::{Align, Canvas, Stroke, TextStyle};
use crate::colour::colours;
use crate::context::{RenderContext, RenderSettings};
use crate::document::Document;
use crate::font::{Font, FontClass, FontTable};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{
    layout_section, line_height, place_icon_text, place_text, render_entry, wrap, Column,
    IconPrefixedText, LayoutCursor, SectionStyle,
};
use crate::page::Page;
use crate::rect::Rect;
use crate::resume::{ResumeDocument, TimelineEntry};
use crate::units::Pt;
use crate::Error;
use id_arena::Id;
use std::path::Path;

/// Gap after every wrapped sidebar entry
const ENTRY_GAP: Pt = Pt(5.0);
/// Step between single-line sidebar entries
const LINE_STEP: Pt = Pt(15.0);
/// Padding below the summary text inside its box, and after the box
const SUMMARY_PADDING: (Pt, Pt) = (Pt(10.0), Pt(20.0));

/// A profile photo registered with the document, with the size it is drawn at
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Photo {
    pub id: Id<Image>,
    pub width: Pt,
    pub height: Pt,
}

/// Render a résumé into a new one-page document.
///
/// Fails before anything is drawn when the résumé has no name, or when one
/// of the configured fonts can't be loaded. A photo that can't be read is
/// logged and left out.
pub fn render(resume: &ResumeDocument, settings: &RenderSettings) -> Result<Document, Error> {
    let name = resume.personal.display_name();
    if name.is_empty() {
        return Err(Error::MissingDisplayName);
    }
    log::info!("rendering résumé of {name} in `{}`", resume.locale.code());

    let ctx = RenderContext::new(settings, resume.locale);
    let mut document = Document::default();
    let font_set = settings.fonts_for(resume.locale);
    let fonts = FontTable {
        regular: document.add_font(Font::from_spec(&font_set.regular)?),
        bold: document.add_font(Font::from_spec(&font_set.bold)?),
        italic: document.add_font(Font::from_spec(&font_set.italic)?),
        icon: document.add_font(Font::from_spec(&font_set.icon)?),
    };
    let labels = locale_labels(&ctx);
    for (class, id) in [(FontClass::Regular, fonts.regular), (FontClass::Bold, fonts.bold)] {
        if !document.fonts[id].can_encode(&labels) {
            log::warn!(
                "the {class:?} font cannot show every `{}` label; configure fonts_by_locale",
                resume.locale.code()
            );
        }
    }

    let photo = resume
        .photo
        .as_deref()
        .and_then(|path| load_photo(&mut document, path, ctx.geometry.photo_box()));

    let geometry = ctx.geometry;
    let mut page = Page::new((geometry.width, geometry.height), fonts).with_metrics(settings.metrics);
    let cursor = compose(resume, &ctx, &mut page, photo.as_ref());
    if cursor.sidebar > geometry.height || cursor.main > geometry.height {
        log::warn!(
            "content runs past the bottom of the page (sidebar {}, main {})",
            cursor.sidebar,
            cursor.main
        );
    }
    document.add_page(page);

    let mut info = Info::new();
    info.title(&name).author(&name).subject(ctx.strings.summary);
    let skills = resume.skill_names();
    if !skills.is_empty() {
        info.keywords(skills.join(", "));
    }
    document.set_info(info);

    log::info!("rendered résumé of {name}");
    Ok(document)
}

/// Every title, month and "present" word the renderer draws for the locale
fn locale_labels(ctx: &RenderContext) -> String {
    let strings = ctx.strings;
    let mut labels: Vec<&str> = vec![
        strings.contact,
        strings.skills,
        strings.software,
        strings.languages,
        strings.hobbies,
        strings.references,
        strings.summary,
        strings.work_experience,
        strings.education,
        strings.certifications,
        strings.present,
        strings.issued_by,
    ];
    labels.extend((1..=12).map(|month| ctx.locale.month_abbreviation(month)));
    labels.join(" ")
}

fn load_photo(document: &mut Document, path: &Path, photo_box: Pt) -> Option<Photo> {
    if !path.exists() {
        log::warn!("profile photo not found at {}", path.display());
        return None;
    }

    match Image::new_from_disk(path) {
        Ok(image) => {
            let (width, height) = image.fitted_size(photo_box.0);
            let image = image.fit_within(photo_box.0 as u32);
            log::debug!("adding profile photo from {} at {width}x{height}", path.display());
            Some(Photo {
                id: document.add_image(image),
                width: Pt(width),
                height: Pt(height),
            })
        }
        Err(e) => {
            log::warn!("could not load profile photo {}: {e}", path.display());
            None
        }
    }
}

/// Lay the résumé out onto `canvas`. Returns how far down each column got.
pub fn compose<C: Canvas + ?Sized>(
    resume: &ResumeDocument,
    ctx: &RenderContext,
    canvas: &mut C,
    photo: Option<&Photo>,
) -> LayoutCursor {
    let geometry = ctx.geometry;

    canvas.rect(
        Rect::new(Pt(0.0), Pt(0.0), geometry.sidebar_width, geometry.height),
        Some(Stroke::new(colours::SIDEBAR)),
        Some(colours::SIDEBAR),
    );

    if let Some(photo) = photo {
        let x = geometry.sidebar_width / 2.0 - photo.width / 2.0;
        canvas.image(photo.id, Rect::new(x, geometry.photo_top, photo.width, photo.height));
    }

    let mut cursor = LayoutCursor::new(geometry.sidebar_start(photo.is_some()), geometry.margins.top);
    let sidebar = compose_sidebar(resume, ctx, canvas, cursor.get(Column::Sidebar));
    cursor.advance(Column::Sidebar, sidebar);
    let main = compose_main(resume, ctx, canvas, cursor.get(Column::Main));
    cursor.advance(Column::Main, main);
    cursor
}

fn compose_sidebar<C: Canvas + ?Sized>(
    resume: &ResumeDocument,
    ctx: &RenderContext,
    canvas: &mut C,
    y: Pt,
) -> Pt {
    let (geometry, typography, metrics, strings) = (ctx.geometry, ctx.typography, ctx.metrics, ctx.strings);
    let x = geometry.margins.left;
    let width = Some(geometry.sidebar_text_width());
    let body = TextStyle::new(FontClass::Regular, typography.text_size);
    let style = SectionStyle::sidebar(geometry, typography);

    let mut y = place_text(
        canvas,
        metrics,
        (x, y),
        &resume.personal.display_name(),
        TextStyle::new(FontClass::Bold, typography.name_size),
        width,
    );

    let contacts: Vec<IconPrefixedText> = resume
        .contact_items()
        .into_iter()
        .enumerate()
        .map(|(i, contact)| IconPrefixedText {
            icon: contact.kind.icon(),
            icon_colour: colours::ICONS[i % colours::ICONS.len()],
            spacing: typography.icon_spacing,
            text: contact.text,
        })
        .collect();
    log::debug!("{} contact lines", contacts.len());
    y = layout_section(canvas, y, &style, strings.contact, &contacts, |canvas, y, item| {
        place_icon_text(canvas, metrics, (x, y), item, body, width) + ENTRY_GAP
    });

    let skills = resume.skill_names();
    log::debug!("{} skills", skills.len());
    y = layout_section(canvas, y, &style, strings.skills, &skills, |canvas, y, skill| {
        canvas.text((x, y), skill, body);
        y + LINE_STEP
    });

    let software = resume.software_entries();
    log::debug!("{} software entries", software.len());
    y = layout_section(canvas, y, &style, strings.software, &software, |canvas, y, entry| {
        let text = format!("{}: ({})", entry.name.trim(), entry.level.trim());
        place_text(canvas, metrics, (x, y), &text, body, width) + ENTRY_GAP
    });

    let languages = resume.language_entries();
    log::debug!("{} languages", languages.len());
    y = layout_section(canvas, y, &style, strings.languages, &languages, |canvas, y, entry| {
        canvas.text((x, y), &format!("{}: {}", entry.name.trim(), entry.level.trim()), body);
        y + LINE_STEP
    });

    let hobbies = resume.hobby_names();
    log::debug!("{} hobbies", hobbies.len());
    y = layout_section(canvas, y, &style, strings.hobbies, &hobbies, |canvas, y, hobby| {
        canvas.text((x, y), &format!("• {hobby}"), body);
        y + LINE_STEP
    });

    let references = resume.reference_entries();
    log::debug!("{} references", references.len());
    layout_section(canvas, y, &style, strings.references, &references, |canvas, y, entry| {
        let italic = TextStyle::new(FontClass::Italic, typography.text_size);
        canvas.text((x, y), entry.name.trim(), italic);
        let details: Vec<&str> = [entry.company.trim(), entry.contact.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        canvas.text((x, y + LINE_STEP), &details.join(" | "), body);
        y + LINE_STEP * 2.0
    })
}

fn compose_main<C: Canvas + ?Sized>(
    resume: &ResumeDocument,
    ctx: &RenderContext,
    canvas: &mut C,
    y: Pt,
) -> Pt {
    let (geometry, typography, strings) = (ctx.geometry, ctx.typography, ctx.strings);
    let main = SectionStyle::main(geometry, typography);

    let summary: Vec<&str> = Some(resume.personal.summary.trim())
        .filter(|summary| !summary.is_empty())
        .into_iter()
        .collect();
    let mut y = layout_section(
        canvas,
        y,
        &SectionStyle::summary(geometry, typography),
        strings.summary,
        &summary,
        |canvas, y, text| summary_box(canvas, ctx, y, text),
    );

    let work: Vec<TimelineEntry> = resume
        .work
        .iter()
        .map(|entry| TimelineEntry::from_work(entry, strings, ctx.locale))
        .collect();
    log::debug!("{} work entries", work.len());
    y = layout_section(canvas, y, &main, strings.work_experience, &work, |canvas, y, entry| {
        render_entry(canvas, ctx, y, entry)
    });

    let education: Vec<TimelineEntry> = resume
        .education
        .iter()
        .map(|entry| TimelineEntry::from_education(entry, ctx.locale))
        .collect();
    log::debug!("{} education entries", education.len());
    y = layout_section(canvas, y, &main, strings.education, &education, |canvas, y, entry| {
        render_entry(canvas, ctx, y, entry)
    });

    let certifications: Vec<TimelineEntry> = resume
        .certifications
        .iter()
        .map(|entry| TimelineEntry::from_certification(entry, ctx.locale))
        .collect();
    log::debug!("{} certifications", certifications.len());
    layout_section(canvas, y, &main, strings.certifications, &certifications, |canvas, y, entry| {
        render_entry(canvas, ctx, y, entry)
    })
}

/// The summary goes into a text box as tall as its wrapped lines
fn summary_box<C: Canvas + ?Sized>(canvas: &mut C, ctx: &RenderContext, y: Pt, text: &str) -> Pt {
    let geometry = ctx.geometry;
    let size = ctx.typography.text_size;
    let left = geometry.main_left();
    let right = geometry.right_edge();

    let lines: usize = text
        .lines()
        .map(|paragraph| wrap(ctx.metrics, paragraph, FontClass::Regular, size, Some(right - left)).len())
        .sum();
    let height = line_height(size) * lines as f32;

    let rect = Rect {
        x1: left,
        y1: y,
        x2: right,
        y2: y + height + SUMMARY_PADDING.0,
    };
    canvas.text_box(rect, text, TextStyle::new(FontClass::Regular, size), Align::Left);
    y + height + SUMMARY_PADDING.1
}
