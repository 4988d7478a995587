/*! Transcription reporting

The reporting core of the pipeline:
- [language::LanguageReport] accumulates per-variety segment statistics,
- [corpus::CorpusReport] merges them into corpus-wide figures,
- [persist::TranscriptionReport] owns the load/rebuild/store lifecycle of
  the persisted report file,
- [render] turns a finished report into a markdown document.

Internally everything is true sets and maps; sorting happens only at the
serialization boundary so that stored reports are byte-reproducible.
! */
pub mod corpus;
pub mod language;
pub mod persist;
pub mod render;

pub use corpus::CorpusReport;
pub use language::LanguageReport;
pub use persist::TranscriptionReport;

/// Sorted-sequence (de)serialization of the set-valued report fields.
pub(crate) mod ser {
    use std::collections::{BTreeMap, HashMap, HashSet};

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn sorted_counts<S>(map: &HashMap<String, u64>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ordered: BTreeMap<&String, &u64> = map.iter().collect();
        ordered.serialize(s)
    }

    pub fn sorted_set<S>(set: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut items: Vec<&String> = set.iter().collect();
        items.sort();
        items.serialize(s)
    }

    pub fn sorted_replacements<S>(
        map: &HashMap<String, HashSet<String>>,
        s: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ordered: BTreeMap<&String, Vec<&String>> = map
            .iter()
            .map(|(k, v)| {
                let mut items: Vec<&String> = v.iter().collect();
                items.sort();
                (k, items)
            })
            .collect();
        ordered.serialize(s)
    }

    pub fn set_from_seq<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Vec::<String>::deserialize(d)?.into_iter().collect())
    }

    pub fn replacements_from_map<'de, D>(
        d: D,
    ) -> Result<HashMap<String, HashSet<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(BTreeMap::<String, Vec<String>>::deserialize(d)?
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().collect()))
            .collect())
    }
}
