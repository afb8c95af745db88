//! The drawing surface the layout engine talks to.
//!
//! Layout code only decides *what* goes *where*; a [Canvas] performs the
//! drawing. Canvas coordinates have their origin at the top-left corner of
//! the page with y growing downwards, and text is positioned by its baseline.
//!
//! Two canvases ship with the crate: [Page](crate::Page), which records PDF
//! page contents, and [DrawList], which keeps the commands as they were issued
//! so a layout can be inspected.

use crate::colour::{colours, Colour};
use crate::font::FontClass;
use crate::image::Image;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::Id;

/// How a run of text is set
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TextStyle {
    pub font: FontClass,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    /// Black text in the given font class and size
    pub fn new(font: FontClass, size: Pt) -> TextStyle {
        TextStyle {
            font,
            size,
            colour: colours::BLACK,
        }
    }

    pub fn coloured(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }
}

/// The pen used for lines and outlines
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

impl Stroke {
    /// A 1pt wide stroke
    pub fn new(colour: Colour) -> Stroke {
        Stroke {
            colour,
            width: Pt(1.0),
        }
    }
}

/// Horizontal alignment of lines inside a text box
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Align {
    #[default]
    Left,
    Centre,
    Right,
}

pub trait Canvas {
    /// Draw a single line of text with its baseline starting at `origin`
    fn text(&mut self, origin: (Pt, Pt), text: &str, style: TextStyle);

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt), stroke: Stroke);

    fn circle(&mut self, centre: (Pt, Pt), radius: Pt, stroke: Stroke, fill: Option<Colour>);

    fn rect(&mut self, rect: Rect, stroke: Option<Stroke>, fill: Option<Colour>);

    /// Draw text wrapped to the width of `rect`. Lines that would fall below
    /// the bottom of the box are not drawn.
    fn text_box(&mut self, rect: Rect, text: &str, style: TextStyle, align: Align);

    /// Draw a document image scaled into `rect`
    fn image(&mut self, image: Id<Image>, rect: Rect);
}

/// One call made on a [DrawList]
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Text {
        origin: (Pt, Pt),
        text: String,
        style: TextStyle,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        stroke: Stroke,
    },
    Circle {
        centre: (Pt, Pt),
        radius: Pt,
        stroke: Stroke,
        fill: Option<Colour>,
    },
    Rect {
        rect: Rect,
        stroke: Option<Stroke>,
        fill: Option<Colour>,
    },
    TextBox {
        rect: Rect,
        text: String,
        style: TextStyle,
        align: Align,
    },
    Image {
        image: Id<Image>,
        rect: Rect,
    },
}

/// A canvas that records every command in the order it was issued
#[derive(Default, Debug)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> DrawList {
        DrawList::default()
    }

    /// All text runs, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = (&(Pt, Pt), &str, &TextStyle)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                origin,
                text,
                style,
            } => Some((origin, text.as_str(), style)),
            _ => None,
        })
    }

    /// All straight lines, in drawing order
    pub fn lines(&self) -> impl Iterator<Item = (&(Pt, Pt), &(Pt, Pt))> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn text(&mut self, origin: (Pt, Pt), text: &str, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            style,
        });
    }

    fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt), stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn circle(&mut self, centre: (Pt, Pt), radius: Pt, stroke: Stroke, fill: Option<Colour>) {
        self.commands.push(DrawCommand::Circle {
            centre,
            radius,
            stroke,
            fill,
        });
    }

    fn rect(&mut self, rect: Rect, stroke: Option<Stroke>, fill: Option<Colour>) {
        self.commands.push(DrawCommand::Rect { rect, stroke, fill });
    }

    fn text_box(&mut self, rect: Rect, text: &str, style: TextStyle, align: Align) {
        self.commands.push(DrawCommand::TextBox {
            rect,
            text: text.to_string(),
            style,
            align,
        });
    }

    fn image(&mut self, image: Id<Image>, rect: Rect) {
        self.commands.push(DrawCommand::Image { image, rect });
    }
}
