use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_storage::ResultStore;
use wellmind_storage::error::StorageError;
use wellmind_storage::fs::FileResultStore;
use wellmind_storage::s3::S3ResultStore;

use crate::config::{StorageConfig, WellmindConfig};

/// The store selected by the config file.
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    Local(FileResultStore),
    S3(S3ResultStore),
}

/// Build an `SdkConfig` from a region and optional named profile.
pub async fn build_aws_config(region: &str, profile_name: Option<&str>) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    if let Some(profile_name) = profile_name {
        builder = builder.profile_name(profile_name);
    }

    builder.load().await
}

/// Open the store described by the config.
pub async fn open_store(config: &WellmindConfig) -> ConfiguredStore {
    match &config.storage {
        StorageConfig::Local { data_dir } => {
            tracing::debug!(data_dir = %data_dir.display(), "using local result store");
            ConfiguredStore::Local(FileResultStore::new(data_dir))
        }
        StorageConfig::S3 {
            bucket,
            region,
            profile_name,
        } => {
            tracing::debug!(bucket = %bucket, region = %region, "using S3 result store");
            let aws_config = build_aws_config(region, profile_name.as_deref()).await;
            let client = aws_sdk_s3::Client::new(&aws_config);
            ConfiguredStore::S3(S3ResultStore::new(client, bucket.clone()))
        }
    }
}

impl ResultStore for ConfiguredStore {
    async fn append(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        match self {
            ConfiguredStore::Local(store) => store.append(result).await,
            ConfiguredStore::S3(store) => store.append(result).await,
        }
    }

    async fn get_all(&self) -> Result<Vec<AssessmentResult>, StorageError> {
        match self {
            ConfiguredStore::Local(store) => store.get_all().await,
            ConfiguredStore::S3(store) => store.get_all().await,
        }
    }

    async fn get_by_instrument(
        &self,
        instrument: InstrumentId,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        match self {
            ConfiguredStore::Local(store) => store.get_by_instrument(instrument).await,
            ConfiguredStore::S3(store) => store.get_by_instrument(instrument).await,
        }
    }

    async fn clear_history(&self, instrument: Option<InstrumentId>) -> Result<usize, StorageError> {
        match self {
            ConfiguredStore::Local(store) => store.clear_history(instrument).await,
            ConfiguredStore::S3(store) => store.clear_history(instrument).await,
        }
    }
}
