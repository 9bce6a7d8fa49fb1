//! In-memory gallery index, used for tests and development.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use gallery_core::result::AppResult;
use gallery_entity::GalleryItem;

use super::GalleryIndex;

/// Process-local gallery index backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryGalleryIndex {
    items: DashMap<String, Vec<GalleryItem>>,
}

impl MemoryGalleryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GalleryIndex for MemoryGalleryIndex {
    async fn add(&self, owner: &str, item: &GalleryItem) -> AppResult<()> {
        self.items
            .entry(owner.to_string())
            .or_default()
            .push(item.clone());
        Ok(())
    }

    async fn list(&self, owner: &str, from: usize, size: usize) -> AppResult<Vec<GalleryItem>> {
        let Some(entry) = self.items.get(owner) else {
            return Ok(Vec::new());
        };

        let mut items = entry.value().clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items.into_iter().skip(from).take(size).collect())
    }

    async fn remove(&self, owner: &str, id: Uuid) -> AppResult<bool> {
        let Some(mut entry) = self.items.get_mut(owner) else {
            return Ok(false);
        };

        let before = entry.value().len();
        entry.value_mut().retain(|item| item.id != id);
        Ok(entry.value().len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_list_remove_roundtrip() {
        let index = MemoryGalleryIndex::new();
        let item = GalleryItem::new("art".into(), vec!["cat".into()]);
        index.add("a@b.com", &item).await.unwrap();

        let listed = index.list("a@b.com", 0, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, item.id);

        assert!(index.remove("a@b.com", item.id).await.unwrap());
        assert!(index.list("a@b.com", 0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let index = MemoryGalleryIndex::new();
        let item = GalleryItem::new("art".into(), vec![]);
        index.add("a@b.com", &item).await.unwrap();

        assert!(index.list("x@y.com", 0, 10).await.unwrap().is_empty());
        assert!(!index.remove("x@y.com", item.id).await.unwrap());
        assert_eq!(index.list("a@b.com", 0, 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_paginates() {
        let index = MemoryGalleryIndex::new();
        for _ in 0..5 {
            index
                .add("a@b.com", &GalleryItem::new("art".into(), vec![]))
                .await
                .unwrap();
        }

        assert_eq!(index.list("a@b.com", 0, 2).await.unwrap().len(), 2);
        assert_eq!(index.list("a@b.com", 4, 2).await.unwrap().len(), 1);
    }
}
