use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::gateway::Gateway;

/// In-memory gateway: collections are JSON values keyed by endpoint.
/// Reads deserialize the seeded value; creates assign monotonic ids and
/// append to the target collection. Clones share the same state, so a
/// handle kept by a test can seed data after the store took its copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Value>,
    next_id: i64,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an endpoint with the JSON value a `load` should return.
    /// Ids already present in the value are reserved, so later creates
    /// never collide with seeded resources.
    pub fn seed(&self, endpoint: &str, value: Value) {
        let mut inner = self.inner.lock().expect("gateway state poisoned");
        inner.next_id = inner.next_id.max(max_seeded_id(&value));
        inner
            .collections
            .insert(endpoint.trim_matches('/').to_string(), value);
    }

    /// Raw view of a collection, mainly for assertions in tests.
    pub fn collection(&self, endpoint: &str) -> Option<Value> {
        let inner = self.inner.lock().expect("gateway state poisoned");
        inner.collections.get(endpoint.trim_matches('/')).cloned()
    }
}

fn max_seeded_id(value: &Value) -> i64 {
    match value {
        Value::Array(items) => items.iter().map(max_seeded_id).max().unwrap_or(0),
        Value::Object(fields) => fields.get("id").and_then(Value::as_i64).unwrap_or(0),
        _ => 0,
    }
}

impl Gateway for MemoryGateway {
    async fn load<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let key = endpoint.trim_matches('/');
        let value = {
            let inner = self.inner.lock().expect("gateway state poisoned");
            inner.collections.get(key).cloned()
        };

        match value {
            Some(value) => {
                tracing::debug!("memory gateway GET {}", key);
                Ok(serde_json::from_value(value)?)
            }
            None => {
                tracing::debug!("memory gateway GET {}: not seeded", key);
                Err(AppError::Api { status: 404 })
            }
        }
    }

    async fn create<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let key = endpoint.trim_matches('/').to_string();
        let mut record = serde_json::to_value(body)?;

        let created = {
            let mut inner = self.inner.lock().expect("gateway state poisoned");
            inner.next_id += 1;
            let id = inner.next_id;

            if let Value::Object(fields) = &mut record {
                fields.insert("id".to_string(), Value::from(id));
                // Stamp fields the real backend fills in on insert.
                fields
                    .entry("created_at")
                    .or_insert_with(|| Value::from(chrono::Utc::now().to_rfc3339()));
            }

            let collection = inner
                .collections
                .entry(key.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = collection {
                items.push(record.clone());
            }

            record
        };

        tracing::debug!("memory gateway POST {}", key);
        Ok(serde_json::from_value(created)?)
    }
}
