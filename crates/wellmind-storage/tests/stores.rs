use jiff::Timestamp;
use uuid::Uuid;
use wellmind_core::models::assessment::{AssessmentResult, AssessmentSubmission};
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;
use wellmind_storage::error::StorageError;
use wellmind_storage::fs::FileResultStore;
use wellmind_storage::memory::MemoryResultStore;
use wellmind_storage::ResultStore;

fn result(instrument: InstrumentId, total_score: u32, seconds: i64) -> AssessmentResult {
    let answers: Vec<u8> = match instrument {
        InstrumentId::Phq9 => vec![1, 0, 2, 0, 1, 0, 0, 0, 1],
        InstrumentId::Gad7 => vec![0, 1, 1, 0, 0, 2, 0],
        InstrumentId::Pss10 => vec![2; 10],
    };
    AssessmentResult {
        id: Uuid::new_v4(),
        instrument_id: instrument,
        total_score,
        severity: SeverityLevel::Mild,
        crisis_flagged: instrument == InstrumentId::Phq9,
        completed_at: Timestamp::from_second(1_760_000_000 + seconds).unwrap(),
        raw_responses: AssessmentSubmission::from_ordered(instrument, &answers).responses,
    }
}

async fn round_trip_keeps_every_field(store: &impl ResultStore) {
    let stored = result(InstrumentId::Phq9, 5, 0);
    store.append(&stored).await.unwrap();

    let latest = store.get_latest(InstrumentId::Phq9).await.unwrap();
    assert_eq!(latest.as_ref(), Some(&stored));
    assert_eq!(store.get_all().await.unwrap(), vec![stored.clone()]);
    assert_eq!(
        store.get_by_instrument(InstrumentId::Phq9).await.unwrap(),
        vec![stored.clone()]
    );
    assert_eq!(latest.unwrap().raw_responses, stored.raw_responses);
}

async fn queries_are_most_recent_first(store: &impl ResultStore) {
    let oldest = result(InstrumentId::Gad7, 3, 0);
    let middle = result(InstrumentId::Phq9, 7, 100);
    let newest = result(InstrumentId::Gad7, 9, 200);

    // Appended out of order on purpose.
    store.append(&middle).await.unwrap();
    store.append(&newest).await.unwrap();
    store.append(&oldest).await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all, vec![newest.clone(), middle.clone(), oldest.clone()]);

    let gad7 = store.get_by_instrument(InstrumentId::Gad7).await.unwrap();
    assert_eq!(gad7, vec![newest.clone(), oldest.clone()]);

    let latest = store.get_latest(InstrumentId::Gad7).await.unwrap();
    assert_eq!(latest, Some(newest));
    assert_eq!(store.get_latest(InstrumentId::Pss10).await.unwrap(), None);
}

async fn time_range_is_half_open(store: &impl ResultStore) {
    let first = result(InstrumentId::Pss10, 20, 0);
    let second = result(InstrumentId::Pss10, 18, 100);
    let third = result(InstrumentId::Gad7, 4, 150);
    for r in [&first, &second, &third] {
        store.append(r).await.unwrap();
    }

    let from = first.completed_at;
    let until = Timestamp::from_second(1_760_000_000 + 150).unwrap();

    let pss10 = store
        .get_between(Some(InstrumentId::Pss10), from, until)
        .await
        .unwrap();
    assert_eq!(pss10, vec![second.clone(), first.clone()]);

    let all = store.get_between(None, from, until).await.unwrap();
    assert_eq!(all.len(), 2);
}

async fn duplicate_ids_are_rejected(store: &impl ResultStore) {
    let stored = result(InstrumentId::Gad7, 4, 0);
    store.append(&stored).await.unwrap();

    let mut altered = stored.clone();
    altered.total_score = 15;
    let err = store.append(&altered).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate { .. }));

    let kept = store.get_latest(InstrumentId::Gad7).await.unwrap().unwrap();
    assert_eq!(kept.total_score, 4);
}

async fn clear_history_by_instrument_and_all(store: &impl ResultStore) {
    store.append(&result(InstrumentId::Phq9, 1, 0)).await.unwrap();
    store.append(&result(InstrumentId::Phq9, 2, 10)).await.unwrap();
    store.append(&result(InstrumentId::Gad7, 3, 20)).await.unwrap();

    assert_eq!(store.clear_history(Some(InstrumentId::Phq9)).await.unwrap(), 2);
    assert!(store.get_by_instrument(InstrumentId::Phq9).await.unwrap().is_empty());
    assert_eq!(store.get_all().await.unwrap().len(), 1);

    assert_eq!(store.clear_history(None).await.unwrap(), 1);
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_round_trip() {
    round_trip_keeps_every_field(&MemoryResultStore::new()).await;
}

#[tokio::test]
async fn memory_ordering() {
    queries_are_most_recent_first(&MemoryResultStore::new()).await;
}

#[tokio::test]
async fn memory_time_range() {
    time_range_is_half_open(&MemoryResultStore::new()).await;
}

#[tokio::test]
async fn memory_duplicates() {
    duplicate_ids_are_rejected(&MemoryResultStore::new()).await;
}

#[tokio::test]
async fn memory_clear_history() {
    clear_history_by_instrument_and_all(&MemoryResultStore::new()).await;
}

#[tokio::test]
async fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    round_trip_keeps_every_field(&FileResultStore::new(dir.path())).await;
}

#[tokio::test]
async fn file_ordering() {
    let dir = tempfile::tempdir().unwrap();
    queries_are_most_recent_first(&FileResultStore::new(dir.path())).await;
}

#[tokio::test]
async fn file_time_range() {
    let dir = tempfile::tempdir().unwrap();
    time_range_is_half_open(&FileResultStore::new(dir.path())).await;
}

#[tokio::test]
async fn file_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    duplicate_ids_are_rejected(&FileResultStore::new(dir.path())).await;
}

#[tokio::test]
async fn file_clear_history() {
    let dir = tempfile::tempdir().unwrap();
    clear_history_by_instrument_and_all(&FileResultStore::new(dir.path())).await;
}

#[tokio::test]
async fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let stored = result(InstrumentId::Pss10, 22, 0);
    FileResultStore::new(dir.path()).append(&stored).await.unwrap();

    let reopened = FileResultStore::new(dir.path());
    assert_eq!(reopened.get_all().await.unwrap(), vec![stored]);
}

#[tokio::test]
async fn file_store_writes_one_document_per_result() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileResultStore::new(dir.path());
    let stored = result(InstrumentId::Gad7, 4, 0);
    store.append(&stored).await.unwrap();

    let path = dir
        .path()
        .join("results")
        .join("gad7")
        .join(format!("{}.json", stored.id));
    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["instrument_id"], "gad7");
    assert_eq!(json["raw_responses"]["6"], 2);
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn file_store_ignores_leftover_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileResultStore::new(dir.path());
    store.append(&result(InstrumentId::Phq9, 3, 0)).await.unwrap();

    let stray = dir.path().join("results").join("phq9").join("partial.json.tmp");
    std::fs::write(&stray, b"{").unwrap();

    assert_eq!(store.get_by_instrument(InstrumentId::Phq9).await.unwrap().len(), 1);
}

#[tokio::test]
async fn file_store_reports_corrupt_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileResultStore::new(dir.path());
    let phq9_dir = dir.path().join("results").join("phq9");
    std::fs::create_dir_all(&phq9_dir).unwrap();
    std::fs::write(phq9_dir.join("broken.json"), b"not json").unwrap();

    let err = store.get_all().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn file_store_concurrent_appends_of_one_id_store_it_once() {
    for _ in 0..100 {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::new(dir.path());
        let stored = result(InstrumentId::Gad7, 6, 0);

        let first = tokio::spawn({
            let (store, stored) = (store.clone(), stored.clone());
            async move { store.append(&stored).await }
        });
        let second = tokio::spawn({
            let (store, stored) = (store.clone(), stored.clone());
            async move { store.append(&stored).await }
        });
        let outcomes = [first.await.unwrap(), second.await.unwrap()];

        assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
        assert!(
            outcomes
                .iter()
                .any(|o| matches!(o, Err(StorageError::Duplicate { .. })))
        );

        let entries: Vec<_> = std::fs::read_dir(dir.path().join("results").join("gad7"))
            .unwrap()
            .collect();
        assert_eq!(entries.len(), 1, "temp files must not be left behind");
    }
}
