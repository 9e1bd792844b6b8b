use crate::models::University;
use crate::services::catalog::CatalogError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Page size requested from the document API
const PAGE_LIMIT: usize = 500;

/// Client for a document-database REST API holding university records
///
/// Speaks the Appwrite documents API:
/// `GET {endpoint}/databases/{database}/collections/{collection}/documents`.
pub struct DocumentClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection: String,
    client: Client,
}

impl DocumentClient {
    /// Create a new document API client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection: String,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection,
            client,
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection
        )
    }

    /// Fetch every university document in the collection
    ///
    /// Documents that do not parse as universities are logged and skipped.
    pub async fn list_universities(&self) -> Result<Vec<University>, CatalogError> {
        let url = self.documents_url();
        let limit_query = format!("limit({})", PAGE_LIMIT);

        tracing::debug!("Fetching universities from: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("queries[]", limit_query.as_str())])
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch universities: {} - {}", status, body);
            return Err(CatalogError::Api(format!(
                "Failed to fetch universities: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let total = json
            .get("total")
            .and_then(|t| t.as_u64())
            .unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| CatalogError::InvalidResponse("Missing documents array".into()))?;

        let universities: Vec<University> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                match serde_json::from_value(data.clone()) {
                    Ok(university) => Some(university),
                    Err(e) => {
                        let id = doc.get("$id").and_then(|id| id.as_str()).unwrap_or("unknown");
                        tracing::warn!("Skipping malformed university document {}: {}", id, e);
                        None
                    }
                }
            })
            .collect();

        if (universities.len() as u64) < total {
            tracing::warn!(
                "Catalog holds {} universities but only {} were loaded",
                total,
                universities.len()
            );
        }

        tracing::debug!("Fetched {} universities (total: {})", universities.len(), total);

        Ok(universities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client(base_url: &str) -> DocumentClient {
        DocumentClient::new(
            base_url.to_string(),
            "test_key".to_string(),
            "test_project".to_string(),
            "test_db".to_string(),
            "universities".to_string(),
            Duration::from_secs(5),
        )
        .expect("client builds")
    }

    #[test]
    fn test_document_client_creation() {
        let client = create_client("https://documents.test/v1/");

        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.collection(), "universities");
        assert_eq!(
            client.documents_url(),
            "https://documents.test/v1/databases/test_db/collections/universities/documents"
        );
    }
}
