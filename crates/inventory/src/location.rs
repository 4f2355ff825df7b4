use serde::{Deserialize, Serialize};
use tracing::debug;

use stockroom_core::{DomainError, DomainResult, Entity, EntityId};

use crate::article::{eq_ignore_case, Article};

/// Storage location identifier.
///
/// Stocks reference locations by this handle, so two locations with the same
/// name and contents are still distinct members.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageLocationId(pub EntityId);

impl StorageLocationId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StorageLocationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: a named bin holding articles under a count and width budget.
///
/// Invariants, checked before every mutation:
/// - `articles().len() <= MAX_ARTICLES`
/// - `total_width() <= MAX_WIDTH`
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StorageLocationRecord")]
pub struct StorageLocation {
    id: StorageLocationId,
    name: String,
    articles: Vec<Article>,
}

impl Entity for StorageLocation {
    type Id = StorageLocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl StorageLocation {
    pub const MAX_WIDTH: f64 = 999.0;
    pub const MAX_ARTICLES: usize = 10;

    /// Create an empty location with a freshly minted identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StorageLocationId::new(EntityId::new()),
            name: name.into(),
            articles: Vec::new(),
        }
    }

    /// Create a location that takes ownership of `articles`.
    ///
    /// Fails with `InvalidArgument` if the articles already exceed the
    /// location's count or width budget.
    pub fn with_articles(name: impl Into<String>, articles: Vec<Article>) -> DomainResult<Self> {
        Self::from_parts(StorageLocationId::new(EntityId::new()), name.into(), articles)
    }

    fn from_parts(id: StorageLocationId, name: String, articles: Vec<Article>) -> DomainResult<Self> {
        if articles.len() > Self::MAX_ARTICLES {
            return Err(DomainError::invalid_argument(format!(
                "{} articles exceed the limit of {}",
                articles.len(),
                Self::MAX_ARTICLES
            )));
        }
        let width = total_width(&articles);
        if width > Self::MAX_WIDTH {
            return Err(DomainError::invalid_argument(format!(
                "total width {width} exceeds {}",
                Self::MAX_WIDTH
            )));
        }

        Ok(Self { id, name, articles })
    }

    pub fn id_typed(&self) -> StorageLocationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Current contents in insertion order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// All articles whose number matches `art_nr` case-insensitively, in insertion order.
    pub fn articles_by_nr(&self, art_nr: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.has_art_nr(art_nr)).collect()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn total_width(&self) -> f64 {
        total_width(&self.articles)
    }

    pub fn remaining_width(&self) -> f64 {
        Self::MAX_WIDTH - self.total_width()
    }

    pub fn remaining_slots(&self) -> usize {
        Self::MAX_ARTICLES.saturating_sub(self.articles.len())
    }

    /// True if `count` more articles of combined `width` would fit.
    pub fn can_accept(&self, count: usize, width: f64) -> bool {
        self.ensure_capacity(count, width).is_ok()
    }

    fn ensure_capacity(&self, count: usize, width: f64) -> DomainResult<()> {
        let new_count = self.articles.len() + count;
        if new_count > Self::MAX_ARTICLES {
            return Err(DomainError::invalid_argument(format!(
                "location '{}' would hold {new_count} articles (limit {})",
                self.name,
                Self::MAX_ARTICLES
            )));
        }
        let new_width = self.total_width() + width;
        if new_width > Self::MAX_WIDTH {
            return Err(DomainError::invalid_argument(format!(
                "location '{}' would reach width {new_width} (limit {})",
                self.name,
                Self::MAX_WIDTH
            )));
        }
        Ok(())
    }

    /// Append one article. Nothing changes if the budget would be exceeded.
    pub fn insert(&mut self, article: Article) -> DomainResult<()> {
        self.ensure_capacity(1, article.width())?;

        debug!(location = %self.id, art_nr = article.art_nr(), width = article.width(), "article inserted");
        self.articles.push(article);
        Ok(())
    }

    /// Append all `articles`, or none of them.
    pub fn insert_many(&mut self, articles: Vec<Article>) -> DomainResult<()> {
        self.ensure_capacity(articles.len(), total_width(&articles))?;

        debug!(location = %self.id, count = articles.len(), "articles inserted");
        self.articles.extend(articles);
        Ok(())
    }

    /// Remove and return every article, leaving the location empty.
    pub fn pick_all(&mut self) -> Vec<Article> {
        let picked = std::mem::take(&mut self.articles);
        debug!(location = %self.id, count = picked.len(), "all articles picked");
        picked
    }

    /// Remove and return every article matching `art_nr`.
    pub fn pick_all_by_nr(&mut self, art_nr: &str) -> Vec<Article> {
        self.take_matching(art_nr, usize::MAX)
    }

    /// Remove and return up to `count` articles matching `art_nr`, oldest first.
    pub fn pick(&mut self, art_nr: &str, count: usize) -> Vec<Article> {
        self.take_matching(art_nr, count)
    }

    fn take_matching(&mut self, art_nr: &str, limit: usize) -> Vec<Article> {
        let mut picked = Vec::new();
        let mut kept = Vec::with_capacity(self.articles.len());

        for article in self.articles.drain(..) {
            if picked.len() < limit && article.has_art_nr(art_nr) {
                picked.push(article);
            } else {
                kept.push(article);
            }
        }
        self.articles = kept;

        debug!(location = %self.id, art_nr, count = picked.len(), "articles picked");
        picked
    }
}

pub(crate) fn total_width<'a>(articles: impl IntoIterator<Item = &'a Article>) -> f64 {
    articles.into_iter().map(Article::width).sum()
}

/// Wire form of a [`StorageLocation`].
///
/// A missing name is rejected; a missing id mints a fresh identity.
#[derive(Debug, Deserialize)]
pub struct StorageLocationRecord {
    pub id: Option<StorageLocationId>,
    pub name: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl TryFrom<StorageLocationRecord> for StorageLocation {
    type Error = DomainError;

    fn try_from(record: StorageLocationRecord) -> Result<Self, Self::Error> {
        let name = record
            .name
            .ok_or_else(|| DomainError::invalid_argument("storage location name is required"))?;
        let id = record
            .id
            .unwrap_or_else(|| StorageLocationId::new(EntityId::new()));
        Self::from_parts(id, name, record.articles)
    }
}
