use crate::canvas::{Canvas, Stroke, TextStyle};
use crate::colour::colours;
use crate::context::{PageGeometry, Typography};
use crate::font::FontClass;
use crate::units::Pt;

/// The rule drawn under a section title
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Underline {
    None,
    /// A fixed length rule starting under the title, `drop` below its baseline
    Beneath { length: Pt, drop: Pt },
    /// A rule from the title to `right`, `drop` below its baseline
    ToRightEdge { right: Pt, drop: Pt },
}

/// Where a section puts its title and how far it moves the cursor
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SectionStyle {
    pub title_x: Pt,
    /// Distance from the section's y to the title baseline
    pub title_drop: Pt,
    pub title_size: Pt,
    /// Distance from the section's y to its first item
    pub body_offset: Pt,
    /// Added after the last item
    pub trailing: Pt,
    pub underline: Underline,
}

impl SectionStyle {
    pub fn sidebar(geometry: &PageGeometry, typography: &Typography) -> SectionStyle {
        SectionStyle {
            title_x: geometry.margins.left,
            title_drop: Pt(10.0),
            title_size: typography.title_size,
            body_offset: Pt(30.0),
            trailing: Pt(0.0),
            underline: Underline::Beneath {
                length: Pt(100.0),
                drop: Pt(8.0),
            },
        }
    }

    pub fn main(geometry: &PageGeometry, typography: &Typography) -> SectionStyle {
        SectionStyle {
            title_x: geometry.main_left() + Pt(60.0),
            title_drop: Pt(0.0),
            title_size: typography.title_size,
            body_offset: Pt(20.0),
            trailing: geometry.section_spacing,
            underline: Underline::ToRightEdge {
                right: geometry.right_edge(),
                drop: Pt(3.0),
            },
        }
    }

    /// The summary title sits at the column edge and has no rule
    pub fn summary(geometry: &PageGeometry, typography: &Typography) -> SectionStyle {
        SectionStyle {
            title_x: geometry.main_left(),
            title_drop: Pt(0.0),
            title_size: typography.title_size,
            body_offset: Pt(10.0),
            trailing: Pt(0.0),
            underline: Underline::None,
        }
    }
}

/// Draw a titled section of `items` starting at `y`, rendering each item
/// with `render_item` (which gets the item's y and returns the next one).
/// Returns the y after the section. Sections without items draw nothing and
/// leave `y` as it was.
pub fn layout_section<C, T, F>(
    canvas: &mut C,
    y: Pt,
    style: &SectionStyle,
    title: &str,
    items: &[T],
    mut render_item: F,
) -> Pt
where
    C: Canvas + ?Sized,
    F: FnMut(&mut C, Pt, &T) -> Pt,
{
    if items.is_empty() {
        return y;
    }

    let title_y = y + style.title_drop;
    canvas.text(
        (style.title_x, title_y),
        title,
        TextStyle::new(FontClass::Bold, style.title_size),
    );
    match style.underline {
        Underline::None => {}
        Underline::Beneath { length, drop } => canvas.line(
            (style.title_x, title_y + drop),
            (style.title_x + length, title_y + drop),
            Stroke::new(colours::BLACK),
        ),
        Underline::ToRightEdge { right, drop } => canvas.line(
            (style.title_x, title_y + drop),
            (right, title_y + drop),
            Stroke::new(colours::BLACK),
        ),
    }

    let end = items
        .iter()
        .fold(y + style.body_offset, |y, item| render_item(canvas, y, item));
    end + style.trailing
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Column {
    Sidebar,
    Main,
}

/// How far down each column has been filled
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct LayoutCursor {
    pub sidebar: Pt,
    pub main: Pt,
}

impl LayoutCursor {
    pub fn new(sidebar: Pt, main: Pt) -> LayoutCursor {
        LayoutCursor { sidebar, main }
    }

    pub fn get(&self, column: Column) -> Pt {
        match column {
            Column::Sidebar => self.sidebar,
            Column::Main => self.main,
        }
    }

    /// Move a column down to `y`. Columns never move back up.
    pub fn advance(&mut self, column: Column, y: Pt) {
        let slot = match column {
            Column::Sidebar => &mut self.sidebar,
            Column::Main => &mut self.main,
        };
        if y > *slot {
            *slot = y;
        } else if y < *slot {
            log::debug!("ignoring attempt to move the {column:?} column up to {y}");
        }
    }
}
