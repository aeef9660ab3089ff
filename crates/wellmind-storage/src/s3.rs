use aws_sdk_s3::Client;

use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::store_keys;

use crate::error::StorageError;
use crate::objects;
use crate::store::{ResultStore, instruments_in_scope, sort_newest_first};

/// S3-backed store using the same `results/<instrument>/<id>.json` layout as
/// the local filesystem store.
#[derive(Debug, Clone)]
pub struct S3ResultStore {
    client: Client,
    bucket: String,
}

impl S3ResultStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn result_keys(&self, instrument: InstrumentId) -> Result<Vec<String>, StorageError> {
        let prefix = store_keys::instrument_prefix(instrument);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix).await?;
        Ok(keys
            .into_iter()
            .filter(|k| store_keys::is_result_key(k))
            .collect())
    }

    async fn load(&self, key: &str) -> Result<AssessmentResult, StorageError> {
        let body = objects::get_object(&self.client, &self.bucket, key).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(bucket = %self.bucket, key, error = %e, "unreadable result document");
            StorageError::Serialization(e)
        })
    }
}

impl ResultStore for S3ResultStore {
    async fn append(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        let key = store_keys::result(result.instrument_id, result.id);
        let body = serde_json::to_vec_pretty(result)?;
        objects::put_object_if_absent(
            &self.client,
            &self.bucket,
            &key,
            body,
            Some("application/json"),
        )
        .await?;

        tracing::debug!(bucket = %self.bucket, key = %key, "result uploaded to S3");
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results = Vec::new();
        for instrument in InstrumentId::ALL {
            results.extend(self.get_by_instrument(instrument).await?);
        }
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn get_by_instrument(
        &self,
        instrument: InstrumentId,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results = Vec::new();
        for key in self.result_keys(instrument).await? {
            results.push(self.load(&key).await?);
        }
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn clear_history(&self, instrument: Option<InstrumentId>) -> Result<usize, StorageError> {
        let mut removed = 0;
        for instrument in instruments_in_scope(instrument) {
            for key in self.result_keys(instrument).await? {
                objects::delete_object(&self.client, &self.bucket, &key).await?;
                removed += 1;
            }
        }

        tracing::info!(bucket = %self.bucket, removed, "cleared S3 result history");
        Ok(removed)
    }
}
