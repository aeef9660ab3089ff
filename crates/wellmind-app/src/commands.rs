use std::path::Path;

use eyre::WrapErr;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncReadExt;

use wellmind_core::models::assessment::{AssessmentResult, AssessmentSubmission};
use wellmind_core::models::instrument::InstrumentId;
use wellmind_instruments::assess::Assessment;
use wellmind_instruments::interpret::Interpretation;
use wellmind_instruments::{all_definitions, get_definition};
use wellmind_storage::ResultStore;

use crate::cli::{Cli, Command};
use crate::config::{self, StorageConfig, WellmindConfig};
use crate::service::{AssessmentService, ServiceError};
use crate::store;

/// Shown alongside any crisis-flagged result. Contact details are the
/// presentation layer's concern.
pub const CRISIS_NOTICE: &str = "Your answers suggest you may be having thoughts of harming yourself. \
     Please reach out to a crisis line or emergency services now, or talk to someone you trust.";

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: InstrumentId,
    name: &'static str,
    title: &'static str,
    item_count: u8,
    max_score: u32,
}

#[derive(Serialize)]
pub struct SubmitOutput {
    pub result: AssessmentResult,
    pub interpretation: Option<Interpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crisis_notice: Option<&'static str>,
}

impl From<Assessment> for SubmitOutput {
    fn from(assessment: Assessment) -> Self {
        let crisis_notice = assessment.result.crisis_flagged.then_some(CRISIS_NOTICE);
        let (interpretation, interpretation_error) = match assessment.interpretation {
            Ok(interpretation) => (Some(interpretation), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            result: assessment.result,
            interpretation,
            interpretation_error,
            crisis_notice,
        }
    }
}

pub fn list_instruments() -> Vec<InstrumentSummary> {
    all_definitions()
        .iter()
        .map(|d| InstrumentSummary {
            id: d.id,
            name: d.name,
            title: d.title,
            item_count: d.item_count(),
            max_score: d.max_score(),
        })
        .collect()
}

/// Run a parsed command line, opening the configured store when needed.
pub async fn dispatch(cli: Cli) -> eyre::Result<Value> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Init {
            data_dir,
            bucket,
            region,
            profile,
            force,
        } => init(&config_path, data_dir, bucket, region, profile, force),
        Command::Instruments => Ok(serde_json::to_value(list_instruments())?),
        Command::Show { instrument } => Ok(serde_json::to_value(get_definition(instrument))?),
        command => {
            let config = config::load_or_default(&config_path)?;
            let service = AssessmentService::new(store::open_store(&config).await);
            run(command, &service).await
        }
    }
}

fn init(
    config_path: &Path,
    data_dir: Option<std::path::PathBuf>,
    bucket: Option<String>,
    region: Option<String>,
    profile: Option<String>,
    force: bool,
) -> eyre::Result<Value> {
    if config_path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }

    let storage = match (bucket, region) {
        (Some(bucket), Some(region)) => StorageConfig::S3 {
            bucket,
            region,
            profile_name: profile,
        },
        _ => StorageConfig::Local {
            data_dir: match data_dir {
                Some(dir) => dir,
                None => config::default_data_dir()?,
            },
        },
    };

    let config = WellmindConfig {
        config_version: config::CURRENT_VERSION,
        storage,
        created_at: jiff::Timestamp::now(),
    };
    config::save_config(config_path, &config)?;
    Ok(serde_json::to_value(config::load_config(config_path)?)?)
}

/// Run a command that needs the result store.
pub async fn run<S: ResultStore>(command: Command, service: &AssessmentService<S>) -> eyre::Result<Value> {
    match command {
        Command::Submit { input } => {
            let submission = read_submission(&input).await?;
            match service.submit(&submission).await {
                Ok(assessment) => Ok(serde_json::to_value(SubmitOutput::from(assessment))?),
                Err(ServiceError::Persistence { assessment, source }) => {
                    let output = SubmitOutput::from(*assessment);
                    Err(eyre::eyre!(
                        "could not save assessment: {source}\nunsaved result:\n{}",
                        serde_json::to_string_pretty(&output)?
                    ))
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::History {
            instrument,
            since,
            until,
        } => {
            let results = if since.is_some() || until.is_some() {
                let from = since.unwrap_or(jiff::Timestamp::MIN);
                let until = until.unwrap_or(jiff::Timestamp::MAX);
                service.history_between(instrument, from, until).await?
            } else {
                service.history(instrument).await?
            };
            Ok(serde_json::to_value(results)?)
        }
        Command::Latest { instrument } => Ok(serde_json::to_value(service.latest(instrument).await?)?),
        Command::Trend { instrument } => Ok(serde_json::to_value(service.trend(instrument).await?)?),
        Command::Reinterpret { instrument } => {
            let reinterpretations = service.reinterpret_history(instrument).await?;
            Ok(serde_json::to_value(reinterpretations)?)
        }
        Command::ClearHistory { instrument, yes } => {
            if !yes {
                return Err(eyre::eyre!("refusing to delete history without --yes"));
            }
            let removed = service.clear_history(instrument).await?;
            Ok(serde_json::json!({ "removed": removed }))
        }
        Command::Init { .. } | Command::Instruments | Command::Show { .. } => Err(eyre::eyre!(
            "command does not use the result store"
        )),
    }
}

async fn read_submission(input: &str) -> eyre::Result<AssessmentSubmission> {
    let json = if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(input)
            .await
            .wrap_err_with(|| format!("failed to read submission from {input}"))?
    };

    serde_json::from_str(&json).wrap_err("submission is not a valid assessment submission")
}
