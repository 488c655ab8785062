//! Store adapter tests exercising the in-memory implementation through
//! the port contract.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskDraft, TaskId, TaskPatch, TaskStatus, Title},
    ports::{TaskStore, TaskStoreError},
    tests::support::SteppingClock,
};
use eyre::ensure;
use rstest::{fixture, rstest};

type TestStore = InMemoryTaskStore<SteppingClock>;

#[fixture]
fn store() -> TestStore {
    InMemoryTaskStore::with_clock(Arc::new(SteppingClock::new()))
}

fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(Title::new(title).expect("valid title"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_allocates_distinct_identifiers(store: TestStore) {
    let first = store.insert(draft("Primeira")).await.expect("insert should succeed");
    let second = store.insert(draft("Segunda")).await.expect("insert should succeed");

    assert_ne!(first.id(), second.id());
    assert!(!first.id().as_str().is_empty());
    assert!(!second.id().as_str().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_removal(store: TestStore) {
    let first = store.insert(draft("Primeira")).await.expect("insert should succeed");
    let removed = store.remove(first.id()).await.expect("remove should succeed");
    assert!(removed);

    let second = store.insert(draft("Segunda")).await.expect("insert should succeed");
    assert_ne!(second.id(), first.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(store: TestStore) {
    let fetched = store
        .find_by_id(&TaskId::new("404"))
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_reports_absence_as_false(store: TestStore) {
    let removed = store
        .remove(&TaskId::new("404"))
        .await
        .expect("remove should succeed");
    assert!(!removed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_tasks_are_no_longer_retrievable(store: TestStore) {
    let task = store.insert(draft("Descartável")).await.expect("insert should succeed");

    let removed = store.remove(task.id()).await.expect("remove should succeed");
    assert!(removed);

    let fetched = store.find_by_id(task.id()).await.expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_independent_snapshot(store: TestStore) {
    store.insert(draft("Única")).await.expect("insert should succeed");

    let mut snapshot = store.list().await.expect("list should succeed");
    assert_eq!(snapshot.len(), 1);
    snapshot.clear();

    let relisted = store.list().await.expect("list should succeed");
    assert_eq!(relisted.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_rejects_missing_identifier(store: TestStore) {
    let missing = TaskId::new("404");
    let result = store.apply(&missing, TaskPatch::new()).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::NotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_replaces_record_and_advances_timestamp(store: TestStore) -> eyre::Result<()> {
    let created = store.insert(draft("Rascunho")).await?;

    let patch = TaskPatch::new().with_status(TaskStatus::InProgress);
    let updated = store.apply(created.id(), patch).await?;

    ensure!(
        updated.updated_at() > created.updated_at(),
        "updated_at must advance on apply"
    );
    ensure!(
        updated.created_at() == created.created_at(),
        "created_at must stay immutable"
    );

    let fetched = store.find_by_id(created.id()).await?;
    ensure!(fetched == Some(updated), "stored record must match returned copy");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn apply_with_empty_description_clears_stored_value(store: TestStore) {
    let created = store
        .insert(draft("Com descrição").with_description("Temporária"))
        .await
        .expect("insert should succeed");

    let patch = TaskPatch::new().with_description("");
    let updated = store.apply(created.id(), patch).await.expect("apply should succeed");

    assert_eq!(updated.description(), "");
}
