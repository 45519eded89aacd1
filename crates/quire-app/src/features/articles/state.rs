use quire_core::models::{Article, ArticleId};

/// Local copy of the server's article collection.
///
/// Ids are unique within the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlesState {
    items: Vec<Article>,
}

impl ArticlesState {
    pub fn with_articles(items: Vec<Article>) -> Self {
        let mut state = Self::default();
        state.replace_all(items);
        state
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.items.iter().find(|article| article.id == id)
    }

    /// Replaces the whole collection. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, items: Vec<Article>) {
        self.items.clear();
        for article in items {
            if self.get(article.id).is_none() {
                self.items.push(article);
            }
        }
    }

    /// Adds an article at the end, displacing any element with the same id.
    pub fn append(&mut self, article: Article) {
        self.items.retain(|existing| existing.id != article.id);
        self.items.push(article);
    }

    /// Swaps in the new representation of an existing article.
    ///
    /// Returns false if no element has that id.
    pub fn replace(&mut self, article: Article) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == article.id) {
            Some(slot) => {
                *slot = article;
                true
            }
            None => false,
        }
    }

    /// Returns false if no element has that id.
    pub fn remove(&mut self, id: ArticleId) -> bool {
        let before = self.items.len();
        self.items.retain(|article| article.id != id);
        self.items.len() != before
    }
}
