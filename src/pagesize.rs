//! Page sizes the renderer knows by name.
//!
//! All sizes are provided in portrait orientation (width, height). The ISO
//! sizes are rounded to whole points, matching what most PDF producers emit.

use crate::units::*;
use crate::Error;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const A4: PageSize = (Pt(595.0), Pt(842.0));
pub const A5: PageSize = (Pt(420.0), Pt(595.0));
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

/// Look up a page size by its common name, ignoring case
pub fn by_name(name: &str) -> Result<PageSize, Error> {
    match name.trim().to_ascii_lowercase().as_str() {
        "a4" => Ok(A4),
        "a5" => Ok(A5),
        "letter" => Ok(LETTER),
        "legal" => Ok(LEGAL),
        _ => Err(Error::UnknownPageSize(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(by_name("A4").unwrap(), A4);
        assert_eq!(by_name(" letter ").unwrap(), LETTER);
        assert!(matches!(by_name("b5"), Err(Error::UnknownPageSize(n)) if n == "b5"));
    }
}
