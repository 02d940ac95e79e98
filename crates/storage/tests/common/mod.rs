//! Scenarios shared by every backend's test suite.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use storage::{Lift, LiftStore, StorageError};

/// Lift with every field populated
pub fn test_lift(name: &str) -> Lift {
    Lift::new(name, Decimal::from(60))
}

pub fn assert_created(lift: &Lift) {
    assert_ne!(lift.id, 0, "insertion failed: lift id is still 0");
}

pub fn assert_not_found<T: std::fmt::Debug>(result: storage::Result<T>) {
    match result {
        Err(StorageError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

pub async fn create_assigns_id(store: &dyn LiftStore) {
    let mut lift = test_lift("create test lift name");
    store.create(&mut lift).await.unwrap();
    assert_created(&lift);
    assert!(lift.id > 0);
}

pub async fn create_with_zero_max(store: &dyn LiftStore) {
    let mut lift = test_lift("create test lift name");
    lift.max = Decimal::ZERO;

    store.create(&mut lift).await.unwrap();
    assert_created(&lift);

    let stored = store.get_lift(lift.id).await.unwrap();
    assert_eq!(stored.max, Decimal::ZERO);
}

pub async fn create_without_created_at_fails(store: &dyn LiftStore) {
    let before = store.list().await.unwrap().len();

    let mut lift = test_lift("create test lift name");
    lift.created_at = None;

    let err = store.create(&mut lift).await.unwrap_err();
    assert!(
        matches!(&err, StorageError::MissingField(fields) if fields == &["created_at"]),
        "unexpected error: {err:?}"
    );
    assert_eq!(lift.id, 0);
    assert_eq!(store.list().await.unwrap().len(), before);
}

pub async fn retrieve_created(store: &dyn LiftStore) {
    let mut lift = test_lift("retrieve test lift name");
    lift.max = Decimal::new(1425, 1);
    store.create(&mut lift).await.unwrap();
    assert_created(&lift);

    let retrieved = store.get_lift(lift.id).await.unwrap();
    assert_eq!(retrieved.id, lift.id);
    assert_eq!(retrieved.name, "retrieve test lift name");
    assert_eq!(retrieved.max, Decimal::new(1425, 1));
    assert_eq!(
        retrieved.created_at.map(|t| t.timestamp()),
        lift.created_at.map(|t| t.timestamp())
    );
}

pub async fn retrieve_missing(store: &dyn LiftStore) {
    assert_not_found(store.get_lift(-1).await);
    assert_not_found(store.get_lift(i64::MAX).await);
}

pub async fn update_round_trip(store: &dyn LiftStore) {
    let mut lift = test_lift("not updated");
    store.create(&mut lift).await.unwrap();
    assert_created(&lift);

    lift.name = "updated".to_string();
    lift.max = Decimal::from(75);
    store.update(&lift).await.unwrap();

    let retrieved = store.get_lift(lift.id).await.unwrap();
    assert_eq!(retrieved.id, lift.id);
    assert_eq!(retrieved.name, "updated");
    assert_eq!(retrieved.max, Decimal::from(75));
}

pub async fn update_keeps_created_at_when_unset(store: &dyn LiftStore) {
    let mut lift = test_lift("timestamp kept");
    store.create(&mut lift).await.unwrap();
    let created_at = store.get_lift(lift.id).await.unwrap().created_at;

    let changed = Lift {
        created_at: None,
        name: "timestamp still kept".to_string(),
        ..lift.clone()
    };
    store.update(&changed).await.unwrap();

    let retrieved = store.get_lift(lift.id).await.unwrap();
    assert_eq!(retrieved.name, "timestamp still kept");
    assert_eq!(retrieved.created_at, created_at);
}

pub async fn update_missing_does_not_insert(store: &dyn LiftStore) {
    let before = store.list().await.unwrap().len();

    let mut ghost = test_lift("never stored");
    ghost.id = -1;
    assert_not_found(store.update(&ghost).await);

    let unpersisted = test_lift("never stored either");
    assert_not_found(store.update(&unpersisted).await);

    assert_eq!(store.list().await.unwrap().len(), before);
}

pub async fn delete_removes(store: &dyn LiftStore) {
    let mut lift = test_lift("lift soon to be deleted");
    store.create(&mut lift).await.unwrap();
    assert_created(&lift);

    store.delete(&lift).await.unwrap();
    assert_not_found(store.get_lift(lift.id).await);

    // Deleted is terminal
    assert_not_found(store.delete(&lift).await);
    assert_not_found(store.update(&lift).await);
}

pub async fn concurrent_creates_get_distinct_ids(store: Arc<dyn LiftStore>) {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let mut lift = test_lift(&format!("concurrent {i}"));
                store.create(&mut lift).await.map(|_| lift.id)
            })
        })
        .collect();

    let ids: HashSet<i64> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(ids.len(), 8);
    assert!(!ids.contains(&0));
}
