//! Small helpers shared by the entrance animations.

/// Inline style delaying an element's transition by its position in a list.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u64 * step_ms as u64)
}

/// Picks the "shown" or "hidden" classes for a reveal target.
pub fn reveal_class(visible: bool, shown: &'static str, hidden: &'static str) -> &'static str {
    if visible {
        shown
    } else {
        hidden
    }
}

/// Reveal flag at `index`, false while a freshly resized collection catches up.
pub fn flag(flags: &[bool], index: usize) -> bool {
    flags.get(index).copied().unwrap_or(false)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealChar {
    pub glyph: char,
    pub delay_ms: u32,
}

/// Splits headline text into per-character animation steps, continuing the
/// count from `offset` so several spans can read as one sequence. Spaces
/// become non-breaking so inline-block spans keep their width.
pub fn text_reveal(text: &str, offset: usize, step_ms: u32) -> Vec<RevealChar> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| RevealChar {
            glyph: if ch == ' ' { '\u{00A0}' } else { ch },
            delay_ms: ((offset + index) as u32) * step_ms,
        })
        .collect()
}

/// Uppercase initials of each word, e.g. "Dr. Sarah Wilson" -> "DSW".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay(0, 100), "transition-delay: 0ms;");
        assert_eq!(stagger_delay(3, 50), "transition-delay: 150ms;");
    }

    #[test]
    fn text_reveal_continues_from_offset() {
        let first = text_reveal("A B", 0, 50);
        assert_eq!(first.len(), 3);
        assert_eq!(first[1], RevealChar { glyph: '\u{00A0}', delay_ms: 50 });

        let second = text_reveal("CD", first.len(), 50);
        assert_eq!(second[0].delay_ms, 150);
        assert_eq!(second[1].glyph, 'D');
    }

    #[test]
    fn flag_defaults_to_hidden_out_of_range() {
        assert!(flag(&[true], 0));
        assert!(!flag(&[true], 4));
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Dr. Sarah Wilson"), "DSW");
        assert_eq!(initials(""), "");
    }
}
