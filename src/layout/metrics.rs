use crate::font::FontClass;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Characters that are set noticeably narrower than average
const NARROW: &str = "ijlt,.'\"|!;:()[]{}";
/// Characters that are set noticeably wider than average
const WIDE: &str = "mwWM@%&";

/// Width estimates for text without access to real glyph metrics.
///
/// Every character is assumed to be `size * weight` wide, where the weight
/// depends on the [FontClass]. The precise measure additionally scales each
/// character by its class: uppercase letters, the narrow set and the wide set.
/// Line breaking combines the two: the cheap estimate decides everything that
/// is clearly inside or outside the limit, the precise one only the cases
/// near the boundary.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMetrics {
    pub regular: f32,
    pub bold: f32,
    pub italic: f32,
    pub icon: f32,
    pub uppercase: f32,
    pub narrow: f32,
    pub wide: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        TextMetrics {
            regular: 0.5,
            bold: 0.65,
            italic: 0.55,
            icon: 0.5,
            uppercase: 1.2,
            narrow: 0.7,
            wide: 1.3,
        }
    }
}

impl TextMetrics {
    /// The average character width factor of a font class
    pub fn weight(&self, font: FontClass) -> f32 {
        match font {
            FontClass::Regular => self.regular,
            FontClass::Bold => self.bold,
            FontClass::Italic => self.italic,
            FontClass::Icon => self.icon,
        }
    }

    /// Cheap length-based estimate
    pub fn estimate_width(&self, text: &str, font: FontClass, size: Pt) -> Pt {
        size * (text.chars().count() as f32 * self.weight(font))
    }

    /// Character-class aware estimate
    pub fn measure_width(&self, text: &str, font: FontClass, size: Pt) -> Pt {
        let base = size * self.weight(font);
        text.chars().map(|ch| base * self.char_factor(ch)).sum()
    }

    fn char_factor(&self, ch: char) -> f32 {
        if ch.is_uppercase() {
            self.uppercase
        } else if NARROW.contains(ch) {
            self.narrow
        } else if WIDE.contains(ch) {
            self.wide
        } else {
            1.0
        }
    }

    /// Whether a whole string fits on one line of `max` width
    pub fn fits_line(&self, text: &str, font: FontClass, size: Pt, max: Pt) -> bool {
        let quick = self.estimate_width(text, font, size);
        if quick <= max * 0.8 {
            true
        } else if quick <= max {
            self.measure_width(text, font, size) <= max
        } else {
            false
        }
    }

    /// Whether a candidate line built up while wrapping may be kept. Slightly
    /// more lenient than [TextMetrics::fits_line]: anything up to 10% over the
    /// cheap estimate gets a second opinion from the precise measure.
    pub fn accepts(&self, text: &str, font: FontClass, size: Pt, max: Pt) -> bool {
        let quick = self.estimate_width(text, font, size);
        if quick <= max {
            true
        } else if quick <= max * 1.1 {
            self.measure_width(text, font, size) <= max
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Pt, b: f32) -> bool {
        (a.0 - b).abs() < 1e-3
    }

    #[test]
    fn estimate_uses_the_font_weight() {
        let m = TextMetrics::default();
        assert!(approx(m.estimate_width("abcd", FontClass::Regular, Pt(10.0)), 20.0));
        assert!(approx(m.estimate_width("abcd", FontClass::Bold, Pt(10.0)), 26.0));
        assert!(approx(m.estimate_width("abcd", FontClass::Italic, Pt(10.0)), 22.0));
        assert!(approx(m.estimate_width("", FontClass::Bold, Pt(10.0)), 0.0));
    }

    #[test]
    fn precise_measure_weighs_character_classes() {
        let m = TextMetrics::default();
        // uppercase wins over the wide set
        assert!(approx(m.measure_width("W", FontClass::Regular, Pt(10.0)), 6.0));
        assert!(approx(m.measure_width("i", FontClass::Regular, Pt(10.0)), 3.5));
        assert!(approx(m.measure_width("m", FontClass::Regular, Pt(10.0)), 6.5));
        assert!(approx(m.measure_width("a", FontClass::Regular, Pt(10.0)), 5.0));
        assert!(approx(m.measure_width("il", FontClass::Regular, Pt(10.0)), 7.0));
    }

    #[test]
    fn whole_lines_get_a_precise_check_near_the_limit() {
        let m = TextMetrics::default();
        // 9 chars at 5pt = 45pt quick, well under 80% of 100
        assert!(m.fits_line("aaaaaaaaa", FontClass::Regular, Pt(10.0), Pt(100.0)));
        // 18 chars = 90pt quick; all lowercase plain so precise = 90
        assert!(m.fits_line("aaaaaaaaaaaaaaaaaa", FontClass::Regular, Pt(10.0), Pt(100.0)));
        // 18 chars but wide, precise = 117
        assert!(!m.fits_line("mmmmmmmmmmmmmmmmmm", FontClass::Regular, Pt(10.0), Pt(100.0)));
        // 21 chars = 105pt quick, rejected without a second opinion
        assert!(!m.fits_line("iiiiiiiiiiiiiiiiiiiii", FontClass::Regular, Pt(10.0), Pt(100.0)));
    }

    #[test]
    fn candidates_may_overshoot_when_they_are_narrow() {
        let m = TextMetrics::default();
        // 21 narrow chars: quick 105 (within 110%), precise 73.5
        assert!(m.accepts("iiiiiiiiiiiiiiiiiiiii", FontClass::Regular, Pt(10.0), Pt(100.0)));
        assert!(!m.accepts("aaaaaaaaaaaaaaaaaaaaa", FontClass::Regular, Pt(10.0), Pt(100.0)));
        // 23 chars = 115 quick, past the lenient band
        assert!(!m.accepts("iiiiiiiiiiiiiiiiiiiiiii", FontClass::Regular, Pt(10.0), Pt(100.0)));
    }

    #[test]
    fn factors_can_be_overridden_from_json() {
        let m: TextMetrics = serde_json::from_str(r#"{ "bold": 0.7 }"#).unwrap();
        assert_eq!(m.bold, 0.7);
        assert_eq!(m.regular, 0.5);
    }
}
