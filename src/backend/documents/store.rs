/**
 * Document Store
 *
 * This module implements the document collection: creation with unique ids,
 * versioned updates, and snapshot listing.
 *
 * # Concurrency
 *
 * The collection lives behind a `tokio::sync::RwLock`. Updates perform the
 * read-modify-write of a document's version under the write lock, so two
 * concurrent updates to the same document serialize and can never observe
 * the same pre-update version (no lost updates). Listing clones committed
 * records under the read lock, so a returned record never mixes pre- and
 * post-update fields.
 */
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A collaborative document
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique document id (UUID v4, assigned at creation)
    pub id: String,
    /// Current content
    pub content: String,
    /// Username that created the document; never changes
    pub author: String,
    /// Accepted-update counter, starting at 1
    pub version: u64,
    /// Username of the most recent modifier
    pub last_editor: String,
    /// When the document was created
    pub created_at: DateTime<Utc>,
    /// When the document was last updated
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Render the one-line summary used in document listings
    pub fn summary(&self) -> String {
        format!(
            "{} | Author: {} | Version: {}",
            self.content, self.author, self.version
        )
    }
}

/// Owns the document collection
pub struct DocumentStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl DocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new document and return its id
    ///
    /// The record is stored with version 1 and the author as initial editor.
    pub async fn create(&self, author: &str, content: &str) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let document = Document {
            id: id.clone(),
            content: content.to_string(),
            author: author.to_string(),
            version: 1,
            last_editor: author.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut documents = self.documents.write().await;
        documents.insert(id.clone(), document);
        tracing::info!("Document created: {} by {}", id, author);
        id
    }

    /// Apply an update to a document
    ///
    /// Returns `false` if `id` is unknown. On success the content is
    /// replaced, the version is incremented by exactly 1 from its value
    /// immediately before this update, and `editor` is recorded as the most
    /// recent modifier. The author is left unchanged.
    pub async fn update(&self, id: &str, content: &str, editor: &str) -> bool {
        let mut documents = self.documents.write().await;
        match documents.get_mut(id) {
            Some(document) => {
                document.content = content.to_string();
                document.version += 1;
                document.last_editor = editor.to_string();
                document.updated_at = Utc::now();
                tracing::info!("Document updated: {} (version {})", id, document.version);
                true
            }
            None => {
                tracing::warn!("Update rejected for unknown document: {}", id);
                false
            }
        }
    }

    /// Snapshot all documents, ordered by creation time
    ///
    /// Each returned record is a clone of one committed state. The listing
    /// is ordered by creation time (ties broken by id) so repeated calls
    /// are stable.
    pub async fn list_all(&self) -> Vec<Document> {
        let documents = self.documents.read().await;
        let mut all: Vec<Document> = documents.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Fetch a single document by id
    pub async fn get(&self, id: &str) -> Option<Document> {
        let documents = self.documents.read().await;
        documents.get(id).cloned()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
