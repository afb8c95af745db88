use crate::canvas::{Align, Canvas, Stroke, TextStyle};
use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::{Font, FontTable};
use crate::image::Image;
use crate::layout::{line_height, wrap, TextMetrics};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::Error;
use id_arena::{Arena, Id};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

/// A run of text, positioned at its baseline in PDF coordinates
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub stroke: Stroke,
}

#[derive(Clone, PartialEq, Debug)]
pub struct CircleLayout {
    pub centre: (Pt, Pt),
    pub radius: Pt,
    pub stroke: Stroke,
    pub fill: Option<Colour>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub stroke: Option<Stroke>,
    pub fill: Option<Colour>,
}

/// Everything that can be drawn on a page. All coordinates are PDF
/// coordinates (origin at the bottom-left).
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Line(LineLayout),
    Circle(CircleLayout),
    Rectangle(RectLayout),
}

/// A single page of a [Document](crate::Document). A page is also a
/// [Canvas]: layout code draws onto it in top-left coordinates, and the page
/// records the equivalent PDF contents.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Which document fonts each font class is set in
    pub fonts: FontTable,
    /// Used to wrap the contents of text boxes
    pub metrics: TextMetrics,
    /// The laid out contents
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, fonts: FontTable) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: size.0,
                y2: size.1,
            },
            fonts,
            metrics: TextMetrics::default(),
            contents: Vec::default(),
        }
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Page {
        self.metrics = metrics;
        self
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    fn flip(&self, point: (Pt, Pt)) -> (Pt, Pt) {
        (point.0, self.media_box.y2 - point.1)
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        page_tree: Ref,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), Error> {
        let id = refs.gen(RefType::Page(page_index));
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(i.index())) {
                resource_fonts.pair(Name(format!("F{}", i.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(i.index())) {
                resource_xobjects.pair(Name(format!("I{}", i.index()).as_bytes()), image_ref);
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

impl Canvas for Page {
    fn text(&mut self, origin: (Pt, Pt), text: &str, style: TextStyle) {
        if text.is_empty() {
            return;
        }
        let coords = self.flip(origin);
        self.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: self.fonts.get(style.font),
                size: style.size,
            },
            colour: style.colour,
            coords,
        });
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt), stroke: Stroke) {
        let line = LineLayout {
            from: self.flip(from),
            to: self.flip(to),
            stroke,
        };
        self.contents.push(PageContents::Line(line));
    }

    fn circle(&mut self, centre: (Pt, Pt), radius: Pt, stroke: Stroke, fill: Option<Colour>) {
        let circle = CircleLayout {
            centre: self.flip(centre),
            radius,
            stroke,
            fill,
        };
        self.contents.push(PageContents::Circle(circle));
    }

    fn rect(&mut self, rect: Rect, stroke: Option<Stroke>, fill: Option<Colour>) {
        let rect = RectLayout {
            rect: rect.flipped(self.height()),
            stroke,
            fill,
        };
        self.contents.push(PageContents::Rectangle(rect));
    }

    fn text_box(&mut self, rect: Rect, text: &str, style: TextStyle, align: Align) {
        let metrics = self.metrics;
        let step = line_height(style.size);
        let mut y = rect.y1 + style.size;

        let mut spans = Vec::new();
        for paragraph in text.lines() {
            for line in wrap(&metrics, paragraph, style.font, style.size, Some(rect.width())) {
                if y > rect.y2 {
                    break;
                }
                let slack = rect.width() - metrics.measure_width(&line, style.font, style.size);
                let x = match align {
                    Align::Left => rect.x1,
                    Align::Centre => rect.x1 + (slack / 2.0).max(Pt(0.0)),
                    Align::Right => rect.x1 + slack.max(Pt(0.0)),
                };
                spans.push(SpanLayout {
                    text: line,
                    font: SpanFont {
                        id: self.fonts.get(style.font),
                        size: style.size,
                    },
                    colour: style.colour,
                    coords: self.flip((x, y)),
                });
                y += step;
            }
        }

        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    fn image(&mut self, image: Id<Image>, rect: Rect) {
        let position = rect.flipped(self.height());
        self.add_image(ImageLayout {
            image_id: image,
            position,
        });
    }
}
