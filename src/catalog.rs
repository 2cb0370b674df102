//! Problem catalog returned by `/api/problems/all/`, and the frontend ID to
//! slug lookup built from it.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(rename = "stat_status_pairs")]
    pub entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub stat: CatalogStat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogStat {
    pub frontend_question_id: FrontendId,
    #[serde(rename = "question__title_slug")]
    pub title_slug: String,
}

/// The catalog has shipped frontend IDs both as numbers and as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FrontendId {
    Number(u64),
    Text(String),
}

impl FrontendId {
    pub fn value(&self) -> Option<u32> {
        match self {
            FrontendId::Number(n) => u32::try_from(*n).ok(),
            FrontendId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl CatalogEntry {
    pub fn new(id: u32, title_slug: impl Into<String>) -> Self {
        Self {
            stat: CatalogStat {
                frontend_question_id: FrontendId::Number(id as u64),
                title_slug: title_slug.into(),
            },
        }
    }

    pub fn frontend_id(&self) -> Option<u32> {
        self.stat.frontend_question_id.value()
    }

    pub fn title_slug(&self) -> &str {
        &self.stat.title_slug
    }
}

impl Catalog {
    /// Linear search for the first entry carrying `id`.
    pub fn resolve(&self, id: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.frontend_id() == Some(id))
            .map(CatalogEntry::title_slug)
    }

    pub fn index(&self) -> SlugIndex {
        let mut slugs = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let Some(id) = entry.frontend_id() {
                slugs
                    .entry(id)
                    .or_insert_with(|| entry.title_slug().to_string());
            }
        }
        SlugIndex { slugs }
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// ID to slug mapping, resolved once per run. Agrees with
/// [`Catalog::resolve`]: the first entry for an ID wins.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    slugs: HashMap<u32, String>,
}

impl SlugIndex {
    pub fn get(&self, id: u32) -> Option<&str> {
        self.slugs.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
