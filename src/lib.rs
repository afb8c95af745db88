//! Lays out a structured résumé onto a single two-column PDF page.
//!
//! A [ResumeDocument] is turned into a [Document] by [render]: a tinted
//! sidebar holds the name, contact details, skills, software, languages,
//! hobbies and references; the main column holds the professional summary
//! and timelines of work experience, education and certifications. Text is
//! measured with a character-class heuristic ([layout::TextMetrics]), so no
//! font files are needed unless you want to embed your own.
//!
//! ```
//! use cv_render::{render, RenderSettings, ResumeDocument};
//!
//! let resume: ResumeDocument = serde_json::from_str(r#"{
//!     "personal": { "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" },
//!     "skills": [ { "name": "Analytical engines" } ],
//!     "locale": "en"
//! }"#).unwrap();
//!
//! let document = render(&resume, &RenderSettings::default()).expect("can render");
//! let mut pdf: Vec<u8> = Vec::new();
//! document.write(&mut pdf).expect("can write");
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

pub(crate) mod content;

mod context;
pub use context::*;

/// Parsing and formatting of résumé dates
pub mod dates;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Measuring, wrapping and placing text, sections and timeline entries
pub mod layout;

mod locale;
pub use locale::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod resume;
pub use resume::*;

mod storage;
pub use storage::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
