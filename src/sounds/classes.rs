//! Sound-class model (general well-formedness).
//!
//! A segment reduces to a sound class by mapping every base character to
//! its class letter, skipping modifiers (length marks, secondary
//! articulations, combining diacritics, tone letters). A segment that
//! contains a character outside the model is not well formed.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {
    /// Base character -> class letter.
    static ref CLASSES: HashMap<char, char> = {
        let groups: [(char, &str); 8] = [
            // vowels
            ('V', "aeiouyæøœɛɔəɐɑɒɪʊʏʉɨɯɤɜʌãẽĩõũəãáéíóúàèìòùâêîôû"),
            // plosives
            ('P', "pbtdʈɖcɟkɡgqɢʔ"),
            // nasals
            ('N', "mɱnɳɲŋɴ"),
            // fricatives
            ('F', "ɸβfvθðszʃʒʂʐɕʑçʝxɣχʁħʕhɦ"),
            // affricate components are plosive+fricative ligatures
            ('C', "ʦʧʣʤ"),
            // liquids, trills, taps
            ('L', "lɭʎʟrɾɽʀ"),
            // glides
            ('G', "jɥwʋɰ"),
            // clicks and implosives
            ('K', "ʘǀǃǂǁɓɗʄɠʛ"),
        ];
        let mut m = HashMap::new();
        for (class, members) in groups {
            for c in members.chars() {
                m.insert(c, class);
            }
        }
        m
    };

    /// Characters that modify a base sound without carrying a class of
    /// their own.
    static ref MODIFIERS: HashSet<char> = "ːˑʰʱʷʲˠˤ˞ⁿˡ̃̚ʼ˺᷄᷅᷈".chars().collect();

    /// Tone letters and superscript tone numerals.
    static ref TONES: HashSet<char> = "˥˦˧˨˩¹²³⁴⁵⁰".chars().collect();
}

fn is_combining(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c) || ('\u{1DC0}'..='\u{1DFF}').contains(&c)
}

/// Reduce a segment to its sound-class string, [None] if any base
/// character is unknown to the model.
pub fn sound_class(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }
    // a pure tone segment is well formed on its own
    if segment.chars().all(|c| TONES.contains(&c)) {
        return Some("T".to_string());
    }
    let mut out = String::new();
    for c in segment.chars() {
        if MODIFIERS.contains(&c) || TONES.contains(&c) || is_combining(c) {
            continue;
        }
        match CLASSES.get(&c) {
            Some(class) => out.push(*class),
            None => return None,
        }
    }
    // only modifiers, nothing to classify
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_segments_reduce() {
        assert_eq!(sound_class("p"), Some("P".to_string()));
        assert_eq!(sound_class("a"), Some("V".to_string()));
        assert_eq!(sound_class("ts"), Some("PF".to_string()));
    }

    #[test]
    fn palatal_sibilants_have_a_class() {
        assert_eq!(sound_class("ɕ"), Some("F".to_string()));
        assert_eq!(sound_class("tɕ"), Some("PF".to_string()));
        assert_eq!(sound_class("dʑ"), Some("PF".to_string()));
        assert_eq!(sound_class("tɕʰ"), Some("PF".to_string()));
    }

    #[test]
    fn modifiers_are_skipped() {
        assert_eq!(sound_class("kʰ"), Some("P".to_string()));
        assert_eq!(sound_class("aː"), Some("V".to_string()));
        assert_eq!(sound_class("a\u{0303}"), Some("V".to_string()));
    }

    #[test]
    fn tones_are_classified() {
        assert_eq!(sound_class("˥˩"), Some("T".to_string()));
        assert_eq!(sound_class("²¹"), Some("T".to_string()));
    }

    #[test]
    fn unknown_characters_fail() {
        assert_eq!(sound_class("$"), None);
        assert_eq!(sound_class("a$"), None);
        assert_eq!(sound_class(""), None);
        // bare length mark has no base sound
        assert_eq!(sound_class("ː"), None);
    }
}
