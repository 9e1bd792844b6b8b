use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use crate::config::{CacheSettings, CatalogSettings, CatalogSourceKind};
use crate::models::University;
use crate::services::cache::{CacheKey, SnapshotCache, DEFAULT_TTL_SECS};
use crate::services::documents::DocumentClient;

/// Errors that can occur when reading the university catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    Api(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing catalog setting: {0}")]
    MissingSetting(&'static str),
}

enum CatalogSource {
    Static(Arc<Vec<University>>),
    Remote {
        client: DocumentClient,
        cache: Option<SnapshotCache>,
    },
}

/// Read-only university catalog
///
/// Hands out shared snapshots; scorers never see the source.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<CatalogSource>,
}

impl Catalog {
    /// Catalog backed by a fixed list of universities
    pub fn from_universities(universities: Vec<University>) -> Self {
        Self {
            source: Arc::new(CatalogSource::Static(Arc::new(universities))),
        }
    }

    /// Load a JSON array of university documents from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let universities: Vec<University> = serde_json::from_str(&raw)?;

        tracing::info!("Loaded {} universities from {}", universities.len(), path.display());

        Ok(Self::from_universities(universities))
    }

    /// Catalog backed by a remote document API, optionally cached
    pub fn remote(client: DocumentClient, cache: Option<SnapshotCache>) -> Self {
        Self {
            source: Arc::new(CatalogSource::Remote { client, cache }),
        }
    }

    /// Build the catalog described by the settings
    pub fn from_settings(
        catalog: &CatalogSettings,
        cache: &CacheSettings,
    ) -> Result<Self, CatalogError> {
        match catalog.source {
            CatalogSourceKind::File => Self::from_file(&catalog.path),
            CatalogSourceKind::Remote => {
                let client = DocumentClient::new(
                    required(&catalog.endpoint, "catalog.endpoint")?,
                    required(&catalog.api_key, "catalog.api_key")?,
                    required(&catalog.project_id, "catalog.project_id")?,
                    required(&catalog.database_id, "catalog.database_id")?,
                    catalog.collection.clone(),
                    Duration::from_secs(catalog.timeout_secs.unwrap_or(30)),
                )?;

                let cache = cache
                    .enabled
                    .then(|| SnapshotCache::new(cache.ttl_secs.unwrap_or(DEFAULT_TTL_SECS)));

                Ok(Self::remote(client, cache))
            }
        }
    }

    /// Current catalog snapshot
    pub async fn universities(&self) -> Result<Arc<Vec<University>>, CatalogError> {
        match self.source.as_ref() {
            CatalogSource::Static(universities) => Ok(Arc::clone(universities)),
            CatalogSource::Remote { client, cache } => {
                let key = CacheKey::catalog(client.collection());

                if let Some(cache) = cache {
                    if let Some(snapshot) = cache.get(&key).await {
                        return Ok(snapshot);
                    }
                }

                let snapshot = Arc::new(client.list_universities().await?);

                if let Some(cache) = cache {
                    cache.set(&key, Arc::clone(&snapshot)).await;
                }

                Ok(snapshot)
            }
        }
    }

    /// Drop any cached snapshot so the next read goes to the source
    pub async fn refresh(&self) {
        if let CatalogSource::Remote { client, cache: Some(cache) } = self.source.as_ref() {
            cache.invalidate(&CacheKey::catalog(client.collection())).await;
        }
    }
}

fn required(value: &Option<String>, setting: &'static str) -> Result<String, CatalogError> {
    value.clone().ok_or(CatalogError::MissingSetting(setting))
}
