use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use stockbook_core::{ArticleId, DomainError, DomainResult};

use crate::article::Article;

/// Fields to change on an existing article. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

impl ArticleUpdate {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// What happened to a single field during [`Inventory::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The field was not part of the update.
    #[default]
    Unchanged,
    Applied,
    Rejected(DomainError),
}

impl FieldOutcome {
    fn from_result(result: DomainResult<()>) -> Self {
        match result {
            Ok(()) => FieldOutcome::Applied,
            Err(e) => FieldOutcome::Rejected(e),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, FieldOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&DomainError> {
        match self {
            FieldOutcome::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

/// Per-field report of an update. Fields succeed or fail independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub name: FieldOutcome,
    pub price: FieldOutcome,
    pub stock: FieldOutcome,
}

impl UpdateOutcome {
    /// All rejections, in field order (name, price, stock).
    pub fn rejections(&self) -> impl Iterator<Item = &DomainError> {
        [&self.name, &self.price, &self.stock]
            .into_iter()
            .filter_map(FieldOutcome::rejection)
    }

    pub fn has_rejections(&self) -> bool {
        self.rejections().next().is_some()
    }
}

/// Result of a case-insensitive name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup<'a> {
    /// The inventory holds no articles at all.
    EmptyInventory,
    /// Matching entries in ascending identifier order (possibly none).
    Matches(Vec<(ArticleId, &'a Article)>),
}

impl<'a> NameLookup<'a> {
    /// Matching entries; empty for both an empty inventory and no match.
    pub fn matches(&self) -> &[(ArticleId, &'a Article)] {
        match self {
            NameLookup::EmptyInventory => &[],
            NameLookup::Matches(found) => found,
        }
    }
}

/// In-memory article store keyed by auto-incrementing identifiers.
///
/// - Identifiers start at 1 and are never reused, even after deletion.
/// - Names are unique among live entries at add time (case-sensitive).
///   Renaming through [`Inventory::update`] is not checked.
/// - Iteration is in ascending identifier order, i.e. insertion order.
#[derive(Debug, Clone)]
pub struct Inventory {
    articles: BTreeMap<ArticleId, Article>,
    next_id: ArticleId,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            articles: BTreeMap::new(),
            next_id: ArticleId::FIRST,
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Register a new article and return its identifier.
    ///
    /// Fails with `DuplicateName` if a live article has exactly the same name,
    /// or with `Validation` if price or stock is out of range. Neither failure
    /// consumes an identifier.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        stock: i64,
    ) -> DomainResult<ArticleId> {
        let name = name.into();
        if self.articles.values().any(|a| a.name() == name) {
            warn!(name = %name, "rejected duplicate article name");
            return Err(DomainError::duplicate_name(name));
        }

        let article = Article::new(name, category, price, stock).inspect_err(|e| {
            warn!(error = %e, "rejected invalid article");
        })?;

        let id = self.next_id;
        info!(article_id = %id, name = article.name(), "article added");
        self.articles.insert(id, article);
        self.next_id = id.next();
        Ok(id)
    }

    /// Apply each provided field independently.
    ///
    /// A rejected price or stock is reported in the outcome and does not stop
    /// the remaining fields from being applied.
    pub fn update(&mut self, id: ArticleId, changes: ArticleUpdate) -> DomainResult<UpdateOutcome> {
        let Some(article) = self.articles.get_mut(&id) else {
            warn!(article_id = %id, "update of unknown article");
            return Err(DomainError::not_found(id));
        };

        let mut outcome = UpdateOutcome::default();

        if let Some(name) = changes.name {
            debug!(article_id = %id, name = %name, "renaming article");
            article.set_name(name);
            outcome.name = FieldOutcome::Applied;
        }

        if let Some(price) = changes.price {
            outcome.price = FieldOutcome::from_result(article.set_price(price));
            debug!(article_id = %id, %price, applied = outcome.price.is_applied(), "price update");
        }

        if let Some(stock) = changes.stock {
            outcome.stock = FieldOutcome::from_result(article.set_stock(stock));
            debug!(article_id = %id, stock, applied = outcome.stock.is_applied(), "stock update");
        }

        Ok(outcome)
    }

    /// Remove and return the article. The identifier is retired.
    pub fn delete(&mut self, id: ArticleId) -> DomainResult<Article> {
        match self.articles.remove(&id) {
            Some(article) => {
                info!(article_id = %id, name = article.name(), "article removed");
                Ok(article)
            }
            None => {
                warn!(article_id = %id, "delete of unknown article");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// All entries in ascending identifier order.
    pub fn list(&self) -> Vec<(ArticleId, &Article)> {
        self.articles.iter().map(|(id, a)| (*id, a)).collect()
    }

    pub fn find_by_id(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> NameLookup<'_> {
        if self.articles.is_empty() {
            return NameLookup::EmptyInventory;
        }

        let needle = name.to_lowercase();
        let found: Vec<_> = self
            .articles
            .iter()
            .filter(|(_, a)| a.name().to_lowercase() == needle)
            .map(|(id, a)| (*id, a))
            .collect();

        debug!(query = name, hits = found.len(), "name lookup");
        NameLookup::Matches(found)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
