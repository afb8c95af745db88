use super::metrics::TextMetrics;
use crate::font::FontClass;
use crate::units::Pt;

/// Break `text` into lines no wider than `max_width`, as judged by `metrics`.
///
/// Without a width the text is returned as a single line, untouched. Text
/// containing an `@` is treated as an address and broken in front of the `@`
/// first. Everything else is filled greedily word by word; words that are
/// too long on their own are split between characters. No line is ever
/// empty and no text is dropped.
pub fn wrap(
    metrics: &TextMetrics,
    text: &str,
    font: FontClass,
    size: Pt,
    max_width: Option<Pt>,
) -> Vec<String> {
    let Some(max) = max_width else {
        return vec![text.to_string()];
    };
    if text.trim().is_empty() {
        return Vec::new();
    }
    if metrics.fits_line(text, font, size, max) {
        return vec![text.to_string()];
    }

    if let Some((user, domain)) = text.split_once('@') {
        return wrap_address(metrics, user, domain, font, size, max);
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            start_line(metrics, word, font, size, max, &mut lines, &mut current);
            continue;
        }

        let candidate = format!("{current} {word}");
        if metrics.accepts(&candidate, font, size, max) {
            current = candidate;
            continue;
        }

        lines.push(std::mem::take(&mut current));
        start_line(metrics, word, font, size, max, &mut lines, &mut current);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn wrap_address(
    metrics: &TextMetrics,
    user: &str,
    domain: &str,
    font: FontClass,
    size: Pt,
    max: Pt,
) -> Vec<String> {
    let domain = format!("@{domain}");
    let mut lines: Vec<String> = Vec::new();

    for part in [user, domain.as_str()] {
        if part.is_empty() {
            continue;
        }
        if metrics.measure_width(part, font, size) <= max {
            lines.push(part.to_string());
            continue;
        }

        let mut current = String::new();
        for ch in part.chars() {
            let mut candidate = current.clone();
            candidate.push(ch);
            if current.is_empty() || metrics.accepts(&candidate, font, size, max) {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, ch.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Begin a new line with `word`, splitting it only when the same gate that
/// accepts a growing line rejects it on its own.
fn start_line(
    metrics: &TextMetrics,
    word: &str,
    font: FontClass,
    size: Pt,
    max: Pt,
    lines: &mut Vec<String>,
    current: &mut String,
) {
    if metrics.accepts(word, font, size, max) {
        current.push_str(word);
    } else {
        split_word(metrics, word, font, size, max, lines, current);
    }
}

/// Split an oversized word between characters using the cheap estimate only.
/// Completed pieces go to `lines`; the last piece is left in `current` so the
/// following words can join it.
fn split_word(
    metrics: &TextMetrics,
    word: &str,
    font: FontClass,
    size: Pt,
    max: Pt,
    lines: &mut Vec<String>,
    current: &mut String,
) {
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if current.is_empty() || metrics.estimate_width(&candidate, font, size) <= max {
            *current = candidate;
        } else {
            lines.push(std::mem::replace(current, ch.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular(text: &str, max: f32) -> Vec<String> {
        wrap(&TextMetrics::default(), text, FontClass::Regular, Pt(10.0), Some(Pt(max)))
    }

    #[test]
    fn no_width_means_no_wrapping() {
        let m = TextMetrics::default();
        let text = "a rather long line that would never fit anywhere narrow";
        assert_eq!(wrap(&m, text, FontClass::Bold, Pt(12.0), None), vec![text.to_string()]);
        assert_eq!(wrap(&m, "", FontClass::Bold, Pt(12.0), None), vec![String::new()]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(regular("", 100.0).is_empty());
        assert!(regular("   \t ", 100.0).is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(regular("Rust, Python", 100.0), vec!["Rust, Python"]);
    }

    #[test]
    fn words_are_filled_greedily() {
        // each "abcd" is 20pt, joined with a space 45pt, three of them 70pt
        let lines = regular("abcd abcd abcd abcd abcd", 50.0);
        assert_eq!(lines, vec!["abcd abcd", "abcd abcd", "abcd"]);
    }

    #[test]
    fn addresses_break_before_the_at_sign() {
        let lines = regular("jane.doe@example.com", 70.0);
        assert_eq!(lines, vec!["jane.doe", "@example.com"]);
        assert!(lines.iter().all(|line| !(line.contains("jane") && line.contains('@'))));
    }

    #[test]
    fn long_address_parts_are_split_between_characters() {
        let m = TextMetrics::default();
        let lines = regular("averyveryverylongusername@x.io", 40.0);
        assert_eq!(lines.last().map(String::as_str), Some("@x.io"));
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, "averyveryverylongusername@x.io");
        for line in &lines {
            assert!(m.accepts(line, FontClass::Regular, Pt(10.0), Pt(40.0)) || line.chars().count() == 1);
        }
    }

    #[test]
    fn oversized_words_are_split_not_dropped() {
        let lines = regular("Supercalifragilistic", 30.0);
        // six characters at 5pt each per line
        assert_eq!(lines, vec!["Superc", "alifra", "gilist", "ic"]);
    }

    #[test]
    fn narrow_words_just_over_the_estimate_are_kept_whole() {
        // 21 narrow characters: estimated at 105pt, measured at 73.5pt
        let word = "i".repeat(21);
        assert_eq!(regular(&word, 100.0), vec![word.clone()]);

        let lines = regular(&format!("abcd {word}"), 100.0);
        assert_eq!(lines, vec!["abcd".to_string(), word]);
    }

    #[test]
    fn a_single_wide_character_gets_its_own_line() {
        let lines = regular("ab", 3.0);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn lines_respect_the_width_and_keep_every_word() {
        let m = TextMetrics::default();
        let text = lipsum::lipsum(200);
        for max in [40.0, 90.0, 150.0, 320.0] {
            let lines = wrap(&m, &text, FontClass::Regular, Pt(10.0), Some(Pt(max)));
            for line in &lines {
                assert!(!line.is_empty());
                let fits = m.estimate_width(line, FontClass::Regular, Pt(10.0)) <= Pt(max)
                    || m.measure_width(line, FontClass::Regular, Pt(10.0)) <= Pt(max)
                    || line.chars().count() == 1;
                assert!(fits, "{line:?} is too wide for {max}");
            }
            let words: Vec<&str> = text.split_whitespace().collect();
            let rejoined = lines.join(" ");
            let wrapped_words: Vec<&str> = rejoined.split_whitespace().collect();
            if max >= 90.0 {
                assert_eq!(wrapped_words, words);
            } else {
                // narrow columns split long words, so compare characters
                assert_eq!(wrapped_words.concat(), words.concat());
            }
        }
    }
}
