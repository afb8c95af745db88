use crate::units::*;

/// A rectangle, specified by two opposite corners.
///
/// Layout code works with top-left page coordinates, where `(x1, y1)` is the
/// top-left corner and `(x2, y2)` the bottom-right one. The PDF backend flips
/// these into bottom-left coordinates when it records page contents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    /// Create a rectangle from its top-left corner and its size
    pub fn new(x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
        Rect {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Mirror the rectangle vertically within a page of the given height,
    /// converting between top-left and bottom-left origins.
    pub fn flipped(&self, page_height: Pt) -> Rect {
        Rect {
            x1: self.x1,
            y1: page_height - self.y2,
            x2: self.x2,
            y2: page_height - self.y1,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_mirrors_around_the_page_height() {
        let r = Rect::new(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        assert_eq!(r.width(), Pt(30.0));
        assert_eq!(r.height(), Pt(40.0));

        let f = r.flipped(Pt(100.0));
        assert_eq!(f.y1, Pt(40.0));
        assert_eq!(f.y2, Pt(80.0));
        assert_eq!(f.flipped(Pt(100.0)), r);
    }
}
