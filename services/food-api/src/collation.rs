//! Name collation for mixed Thai and Latin text
//!
//! Names are ordered by base letters: two names that differ only in case,
//! Latin diacritics or Thai tone marks compare equal.
//!
//! The default [`BaseLetterCollator`] builds a sort key per name:
//! 1. NFD decomposition
//! 2. Removal of combining diacritics and Thai tone marks (U+0E47..=U+0E4E);
//!    Thai above/below vowel signs are letters and are kept
//! 3. Lower-casing
//! 4. Thai logical-order fix-up: a leading vowel (U+0E40..=U+0E44) is moved
//!    after the consonant it is written before, so `เก` sorts under `ก`
//!
//! Keys are then compared by code point.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// String ordering policy used when sorting by name
pub trait Collator: Send + Sync {
    /// Key whose code point order is the collation order
    fn sort_key(&self, text: &str) -> String;

    /// Compare two strings under this collation.
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }
}

/// Case-, diacritic- and tone-insensitive base letter ordering
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLetterCollator;

const THAI_BLOCK: std::ops::RangeInclusive<char> = '\u{0E00}'..='\u{0E7F}';
const THAI_TONE_MARKS: std::ops::RangeInclusive<char> = '\u{0E47}'..='\u{0E4E}';
const THAI_LEADING_VOWELS: std::ops::RangeInclusive<char> = '\u{0E40}'..='\u{0E44}';
const THAI_CONSONANTS: std::ops::RangeInclusive<char> = '\u{0E01}'..='\u{0E2E}';

impl BaseLetterCollator {
    fn is_ignorable(c: char) -> bool {
        THAI_TONE_MARKS.contains(&c) || (is_combining_mark(c) && !THAI_BLOCK.contains(&c))
    }
}

impl Collator for BaseLetterCollator {
    fn sort_key(&self, text: &str) -> String {
        let base: Vec<char> = text
            .nfd()
            .filter(|c| !Self::is_ignorable(*c))
            .flat_map(char::to_lowercase)
            .collect();

        let mut key = String::with_capacity(base.len() * 3);
        let mut i = 0;
        while i < base.len() {
            let c = base[i];
            match base.get(i + 1) {
                Some(&next) if THAI_LEADING_VOWELS.contains(&c) && THAI_CONSONANTS.contains(&next) => {
                    key.push(next);
                    key.push(c);
                    i += 2;
                }
                _ => {
                    key.push(c);
                    i += 1;
                }
            }
        }
        key
    }
}
