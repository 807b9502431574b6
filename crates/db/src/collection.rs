use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::DocumentId;

/// A named collection of documents keyed by [`DocumentId`].
///
/// All operations clone documents across the lock boundary; the lock is never
/// held across an await point in caller code.
pub struct Collection<T> {
    name: &'static str,
    docs: RwLock<BTreeMap<DocumentId, T>>,
}

impl<T> Collection<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Inserts a new document, letting the caller build it around the
    /// assigned id.
    pub async fn insert<F>(&self, make: F) -> T
    where
        F: FnOnce(DocumentId) -> T,
    {
        let mut docs = self.docs.write().await;
        let id = DocumentId::generate();
        let doc = make(id.clone());
        docs.insert(id, doc.clone());
        doc
    }

    /// Inserts a new document unless an existing one matches
    /// `conflicts_with`; the conflicting document is returned in `Err` so the
    /// caller can resolve to it. The check and the insert happen under one
    /// write lock.
    pub async fn insert_unique<P, F>(&self, conflicts_with: P, make: F) -> Result<T, T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(DocumentId) -> T,
    {
        let mut docs = self.docs.write().await;
        if let Some(existing) = docs.values().find(|doc| conflicts_with(doc)) {
            return Err(existing.clone());
        }
        let id = DocumentId::generate();
        let doc = make(id.clone());
        docs.insert(id, doc.clone());
        Ok(doc)
    }

    pub async fn get(&self, id: &DocumentId) -> Option<T> {
        self.docs.read().await.get(id).cloned()
    }

    /// Replaces the document stored under `id`, returning the new document,
    /// or `None` (without inserting) when `id` is absent.
    pub async fn replace(&self, id: &DocumentId, doc: T) -> Option<T> {
        let mut docs = self.docs.write().await;
        if !docs.contains_key(id) {
            return None;
        }
        docs.insert(id.clone(), doc.clone());
        Some(doc)
    }

    /// Removes the document under `id`. Returns whether a document existed;
    /// removing an absent id is not an error.
    pub async fn remove(&self, id: &DocumentId) -> bool {
        self.docs.write().await.remove(id).is_some()
    }

    pub async fn find<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| pred(doc))
            .cloned()
            .collect()
    }

    pub async fn find_one<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.docs.read().await.values().find(|doc| pred(doc)).cloned()
    }

    pub async fn all(&self) -> Vec<T> {
        self.docs.read().await.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        id: DocumentId,
        label: String,
    }

    fn doc(label: &str) -> impl FnOnce(DocumentId) -> Doc + '_ {
        move |id| Doc {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_stores_document() {
        let coll = Collection::new("doc");
        let stored = coll.insert(doc("alpha")).await;

        assert_eq!(coll.get(&stored.id).await, Some(stored));
        assert_eq!(coll.len().await, 1);
    }

    #[tokio::test]
    async fn insert_unique_rejects_conflicting_document() {
        let coll = Collection::new("doc");
        let first = coll.insert(doc("alpha")).await;

        let outcome = coll
            .insert_unique(|d| d.label == "alpha", doc("alpha"))
            .await;

        assert_eq!(outcome, Err(first));
        assert_eq!(coll.len().await, 1);
    }

    #[tokio::test]
    async fn insert_unique_accepts_distinct_document() {
        let coll = Collection::new("doc");
        coll.insert(doc("alpha")).await;

        let stored = coll
            .insert_unique(|d| d.label == "beta", doc("beta"))
            .await
            .expect("no conflict");

        assert_eq!(stored.label, "beta");
        assert_eq!(coll.len().await, 2);
    }

    #[tokio::test]
    async fn replace_keeps_id_and_refuses_absent_ids() {
        let coll = Collection::new("doc");
        let stored = coll.insert(doc("alpha")).await;

        let updated = coll
            .replace(
                &stored.id,
                Doc {
                    id: stored.id.clone(),
                    label: "beta".to_string(),
                },
            )
            .await
            .expect("document exists");
        assert_eq!(updated.label, "beta");
        assert_eq!(coll.get(&stored.id).await.unwrap().label, "beta");

        let absent = DocumentId::generate();
        assert!(coll
            .replace(
                &absent,
                Doc {
                    id: absent.clone(),
                    label: "gamma".to_string(),
                },
            )
            .await
            .is_none());
        assert_eq!(coll.len().await, 1);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let coll = Collection::new("doc");
        let stored = coll.insert(doc("alpha")).await;

        assert!(coll.remove(&stored.id).await);
        assert!(!coll.remove(&stored.id).await);
        assert!(coll.is_empty().await);
    }

    #[tokio::test]
    async fn find_filters_documents() {
        let coll = Collection::new("doc");
        coll.insert(doc("alpha")).await;
        coll.insert(doc("beta")).await;
        coll.insert(doc("alpine")).await;

        let matches = coll.find(|d| d.label.starts_with("al")).await;
        assert_eq!(matches.len(), 2);

        assert!(coll.find_one(|d| d.label == "beta").await.is_some());
        assert!(coll.find_one(|d| d.label == "gamma").await.is_none());
    }
}
