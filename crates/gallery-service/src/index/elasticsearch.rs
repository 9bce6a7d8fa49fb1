//! Elasticsearch-backed gallery index.
//!
//! Documents live in a single index; each document carries the owner
//! principal alongside the item fields, and every query filters on it.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use gallery_core::config::gallery::IndexConfig;
use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_entity::GalleryItem;

use super::GalleryIndex;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Gallery index persisted in an Elasticsearch index.
#[derive(Debug)]
pub struct ElasticsearchGalleryIndex {
    client: reqwest::Client,
    base_url: String,
    index: String,
}

#[derive(Debug, Deserialize)]
struct StoredDoc {
    owner: String,
    #[serde(flatten)]
    item: GalleryItem,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source")]
    source: StoredDoc,
}

impl ElasticsearchGalleryIndex {
    /// Create a client for the configured cluster. Does not contact the
    /// cluster; connectivity problems surface on first use.
    pub fn new(config: &IndexConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build Elasticsearch client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            index: config.name.clone(),
        })
    }

    fn doc_url(&self, id: Uuid) -> String {
        format!("{}/{}/_doc/{}", self.base_url, self.index, id)
    }

    async fn fetch_doc(&self, id: Uuid) -> AppResult<Option<StoredDoc>> {
        let response = self
            .client
            .get(self.doc_url(id))
            .send()
            .await
            .map_err(es_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: serde_json::Value = response
            .error_for_status()
            .map_err(es_error)?
            .json()
            .await
            .map_err(es_error)?;

        let source = body
            .get("_source")
            .cloned()
            .ok_or_else(|| AppError::external_service("Elasticsearch document without _source"))?;
        let doc: StoredDoc = serde_json::from_value(source)?;
        Ok(Some(doc))
    }
}

#[async_trait]
impl GalleryIndex for ElasticsearchGalleryIndex {
    async fn add(&self, owner: &str, item: &GalleryItem) -> AppResult<()> {
        let mut doc = serde_json::to_value(item)?;
        doc["owner"] = json!(owner);

        debug!(index = %self.index, id = %item.id, "Indexing gallery item");
        self.client
            .put(self.doc_url(item.id))
            .json(&doc)
            .send()
            .await
            .map_err(es_error)?
            .error_for_status()
            .map_err(es_error)?;
        Ok(())
    }

    async fn list(&self, owner: &str, from: usize, size: usize) -> AppResult<Vec<GalleryItem>> {
        let query = json!({
            "from": from,
            "size": size,
            "query": { "term": { "owner.keyword": owner } },
            "sort": [{ "created_at": { "order": "desc" } }]
        });

        let response = self
            .client
            .post(format!("{}/{}/_search", self.base_url, self.index))
            .json(&query)
            .send()
            .await
            .map_err(es_error)?;

        // A search against a not-yet-created index means no items exist.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let body: SearchResponse = response
            .error_for_status()
            .map_err(es_error)?
            .json()
            .await
            .map_err(es_error)?;

        Ok(body.hits.hits.into_iter().map(|h| h.source.item).collect())
    }

    async fn remove(&self, owner: &str, id: Uuid) -> AppResult<bool> {
        // Ownership check before delete: the document id alone must not be
        // enough to remove someone else's item.
        match self.fetch_doc(id).await? {
            Some(doc) if doc.owner == owner => {}
            _ => return Ok(false),
        }

        let response = self
            .client
            .delete(self.doc_url(id))
            .send()
            .await
            .map_err(es_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.error_for_status().map_err(es_error)?;
        Ok(true)
    }
}

fn es_error(err: reqwest::Error) -> AppError {
    AppError::external_service(format!("Elasticsearch request failed: {err}"))
}
