//! Curated segment inventory (rule set B).
//!
//! The inventory distinguishes canonical segments, known non-canonical
//! spellings (with their suggested canonical replacements, possibly more
//! than one when the intended sound is ambiguous), and everything else.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

lazy_static! {
    /// Segments accepted as-is.
    static ref CANONICAL: HashSet<&'static str> = {
        let mut m = HashSet::new();
        for s in [
            // plosives
            "p", "b", "t", "d", "ʈ", "ɖ", "c", "ɟ", "k", "ɡ", "q", "ʔ",
            "pʰ", "tʰ", "kʰ", "ʈʰ", "cʰ", "qʰ",
            // nasals
            "m", "ɱ", "n", "ɳ", "ɲ", "ŋ",
            // fricatives
            "ɸ", "β", "f", "v", "θ", "ð", "s", "z", "ʃ", "ʒ", "ʂ", "ʐ",
            "ç", "ʝ", "x", "ɣ", "χ", "ʁ", "ħ", "ʕ", "h", "ɦ",
            // affricates
            "ts", "dz", "tʃ", "dʒ", "tɕ", "dʑ", "tsʰ", "tʃʰ", "tɕʰ",
            // liquids and glides
            "l", "ɭ", "ʎ", "r", "ɾ", "ɽ", "ʀ", "j", "ɥ", "w", "ʋ",
            // implosives
            "ɓ", "ɗ", "ʄ", "ɠ",
            // vowels, short and long
            "a", "e", "i", "o", "u", "y", "ø", "œ", "æ", "ɛ", "ɔ", "ə",
            "ɐ", "ɑ", "ɒ", "ɪ", "ʊ", "ʏ", "ɨ", "ʉ", "ɯ", "ɤ", "ɜ", "ʌ",
            "aː", "eː", "iː", "oː", "uː", "ɛː", "ɔː", "əː", "ɑː",
            // nasal vowels
            "ã", "ẽ", "ĩ", "õ", "ũ",
            // tones
            "˥", "˦", "˧", "˨", "˩", "˥˩", "˩˥",
            "¹", "²", "³", "⁴", "⁵",
        ] {
            m.insert(s);
        }
        m
    };

    /// Known non-canonical spellings and their suggested replacements.
    /// More than one suggestion means the intended sound is ambiguous.
    static ref REPLACEMENTS: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("g", vec!["ɡ"]);
        m.insert("ʦ", vec!["ts"]);
        m.insert("ʣ", vec!["dz"]);
        m.insert("ʧ", vec!["tʃ"]);
        m.insert("ʤ", vec!["dʒ"]);
        m.insert("'", vec!["ʔ"]);
        m.insert("ʼ", vec!["ʔ"]);
        m.insert("š", vec!["ʃ"]);
        m.insert("ž", vec!["ʒ"]);
        m.insert("č", vec!["tʃ"]);
        m.insert("ǰ", vec!["dʒ"]);
        m.insert("ñ", vec!["ɲ"]);
        m.insert("R", vec!["r", "ʀ", "ʁ"]);
        m.insert("E", vec!["e", "ɛ"]);
        m.insert("O", vec!["o", "ɔ"]);
        m.insert("ä", vec!["a", "æ"]);
        m.insert("ü", vec!["y"]);
        m.insert("ö", vec!["ø"]);
        m.insert("a:", vec!["aː"]);
        m.insert("e:", vec!["eː"]);
        m.insert("i:", vec!["iː"]);
        m.insert("o:", vec!["oː"]);
        m.insert("u:", vec!["uː"]);
        m
    };
}

/// Inventory lookup outcome.
pub enum Lookup {
    Canonical,
    /// Present but non-canonical; carries sorted replacement suggestions.
    NonCanonical(Vec<String>),
    Absent,
}

pub fn lookup(segment: &str) -> Lookup {
    if CANONICAL.contains(segment) {
        return Lookup::Canonical;
    }
    match REPLACEMENTS.get(segment) {
        Some(repls) => {
            let mut repls: Vec<String> = repls.iter().map(|s| s.to_string()).collect();
            repls.sort();
            Lookup::NonCanonical(repls)
        }
        None => Lookup::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_segments() {
        assert!(matches!(lookup("kʰ"), Lookup::Canonical));
        assert!(matches!(lookup("aː"), Lookup::Canonical));
    }

    #[test]
    fn non_canonical_suggestions_are_sorted() {
        match lookup("R") {
            Lookup::NonCanonical(repls) => {
                let mut sorted = repls.clone();
                sorted.sort();
                assert_eq!(repls, sorted);
                assert!(repls.len() > 1);
            }
            _ => panic!("R should be non-canonical"),
        }
    }

    #[test]
    fn unknown_segments_are_absent() {
        assert!(matches!(lookup("$$"), Lookup::Absent));
        assert!(matches!(lookup(""), Lookup::Absent));
    }
}
