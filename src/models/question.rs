use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Identifier of a question, unique across the whole dataset.
///
/// Sources use either JSON integers or strings. The two never compare equal,
/// so `1` and `"1"` are different questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(n: i64) -> Self {
        QuestionId::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_string())
    }
}

/// Answer options of a question, keyed by label, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options(Vec<(String, String)>);

impl Options {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(label, text)| (label.as_str(), text.as_str()))
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, text)| text.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts an option. A label seen before keeps its position and takes
    /// the new text.
    pub fn insert(&mut self, label: String, text: String) {
        match self.0.iter_mut().find(|(key, _)| *key == label) {
            Some(entry) => entry.1 = text,
            None => self.0.push((label, text)),
        }
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for Options {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut options = Options::default();
        for (label, text) in iter {
            options.insert(label.into(), text.into());
        }
        options
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = Options;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from option label to option text")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Options, M::Error> {
                let mut options = Options(Vec::with_capacity(map.size_hint().unwrap_or(5)));
                while let Some((label, text)) = map.next_entry::<String, String>()? {
                    options.insert(label, text);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub question: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub options: Options,
    pub correct_answer: String,
    pub explanation: String,
}

impl QuestionRecord {
    /// Image to show with the question. Empty URLs count as no image.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}
