//! The text-flow and layout engine.
//!
//! Text is measured with [TextMetrics], a width heuristic that needs no
//! glyph data, broken into lines with [wrap] and drawn onto a
//! [Canvas](crate::Canvas) line by line. On top of that sit titled sections
//! ([layout_section]) and the timeline entries of the main column
//! ([render_entry]).
//!
//! Every layout function takes the y coordinate it starts at and returns the
//! y coordinate where the following content may start, so a layout is a
//! chain of calls threading a single cursor through.
//!
//! # Example
//!
//! ```
//! use cv_render::{DrawList, FontClass, Pt, TextStyle};
//! use cv_render::layout::{place_text, TextMetrics};
//!
//! let mut canvas = DrawList::new();
//! let style = TextStyle::new(FontClass::Regular, Pt(10.0));
//! let end = place_text(
//!     &mut canvas,
//!     &TextMetrics::default(),
//!     (Pt(20.0), Pt(50.0)),
//!     "abcd abcd abcd",
//!     style,
//!     Some(Pt(50.0)),
//! );
//!
//! assert_eq!(canvas.texts().count(), 2);
//! assert_eq!(end, Pt(80.0));
//! ```

mod margins;
mod metrics;
mod section;
mod text;
mod timeline;
mod wrap;

pub use margins::*;
pub use metrics::*;
pub use section::*;
pub use text::*;
pub use timeline::*;
pub use wrap::*;
