use apis::domain::types::{
    Apiary, ApiaryFields, Colony, ColonyFields, Hive, HiveFields, Session, SessionFields,
};
use apis::error::ApiServiceError;
use apis::usecase::entity::{
    CreateEntityUseCase, DeleteEntityUseCase, GetEntityUseCase, ListEntitiesByParentUseCase,
    ListEntitiesUseCase, UpdateEntityUseCase,
};

use crate::helpers::{MemoryRepo, MockUserRepo, test_user};

fn apiary(id: i32) -> Apiary {
    Apiary {
        id,
        name: "Flowery Field".to_owned(),
        location: "Kent".to_owned(),
        user_id: 1,
    }
}

fn hive_fields(name: &str, apiary_id: i32) -> HiveFields {
    HiveFields {
        name: name.to_owned(),
        apiary_id,
    }
}

#[tokio::test]
async fn should_reject_hive_under_unknown_apiary() {
    let hives = MemoryRepo::<Hive>::empty();
    let uc = CreateEntityUseCase {
        repo: hives.clone(),
        parents: MemoryRepo::new(vec![apiary(1)]),
    };

    let result = uc.execute(hive_fields("Hive 1", 999)).await;

    assert!(
        matches!(result, Err(ApiServiceError::InvalidId("apiary"))),
        "expected Invalid apiary_id, got {result:?}"
    );
    assert_eq!(result.unwrap_err().to_string(), "Invalid apiary_id");
    assert_eq!(hives.writes(), 0);
}

#[tokio::test]
async fn should_create_hive_under_existing_apiary() {
    let uc = CreateEntityUseCase {
        repo: MemoryRepo::<Hive>::empty(),
        parents: MemoryRepo::new(vec![apiary(1)]),
    };

    let hive = uc
        .execute(hive_fields("  Hive 1 ", 1))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(hive.apiary_id, 1);
    assert_eq!(hive.name, "Hive 1", "name should be persisted trimmed");
}

#[tokio::test]
async fn should_reject_negative_hive_id_without_repository_calls() {
    let colonies = MemoryRepo::<Colony>::empty();
    let hives = MemoryRepo::<Hive>::empty();
    let uc = CreateEntityUseCase {
        repo: colonies.clone(),
        parents: hives.clone(),
    };

    let result = uc.execute(ColonyFields { hive_id: -1 }).await;

    assert_eq!(result.unwrap_err().to_string(), "Invalid hive_id");
    assert_eq!(hives.lookups(), 0);
    assert_eq!(colonies.lookups() + colonies.writes(), 0);
}

#[tokio::test]
async fn should_check_required_fields_before_parent_lookup() {
    let apiaries = MemoryRepo::new(vec![apiary(1)]);
    let uc = CreateEntityUseCase {
        repo: MemoryRepo::<Hive>::empty(),
        parents: apiaries.clone(),
    };

    let result = uc.execute(hive_fields("   ", 1)).await;

    assert_eq!(result.unwrap_err().to_string(), "Hive name is required");
    assert_eq!(apiaries.lookups(), 0);
}

#[tokio::test]
async fn should_reject_apiary_for_unknown_user() {
    let uc = CreateEntityUseCase {
        repo: MemoryRepo::<Apiary>::empty(),
        parents: MockUserRepo::new(vec![test_user(1, "jake")]),
    };

    let result = uc
        .execute(ApiaryFields {
            name: "Flowery Field".to_owned(),
            location: "Kent".to_owned(),
            user_id: 2,
        })
        .await;

    assert_eq!(result.unwrap_err().to_string(), "Invalid user_id");
}

#[tokio::test]
async fn should_find_hive_or_return_none() {
    let hives = MemoryRepo::new(vec![Hive {
        id: 4,
        name: "Hive 4".to_owned(),
        apiary_id: 1,
    }]);
    let uc = GetEntityUseCase { repo: hives };

    assert_eq!(uc.execute(4).await.unwrap().map(|h| h.id), Some(4));
    assert!(uc.execute(5).await.unwrap().is_none());
    assert!(matches!(
        uc.execute(0).await,
        Err(ApiServiceError::InvalidId("hive"))
    ));
}

#[tokio::test]
async fn should_list_hives_by_apiary_and_overall() {
    let hives = MemoryRepo::new(vec![
        Hive {
            id: 1,
            name: "Hive 1".to_owned(),
            apiary_id: 1,
        },
        Hive {
            id: 2,
            name: "Hive 2".to_owned(),
            apiary_id: 2,
        },
    ]);

    let by_parent = ListEntitiesByParentUseCase {
        repo: hives.clone(),
    };
    let under_first = by_parent.execute(1).await.unwrap().unwrap();
    assert_eq!(under_first.len(), 1);
    assert!(by_parent.execute(3).await.unwrap().is_none());
    assert!(matches!(
        by_parent.execute(-2).await,
        Err(ApiServiceError::InvalidId("apiary"))
    ));

    let all = ListEntitiesUseCase { repo: hives }.execute().await.unwrap();
    assert_eq!(all.map(|h| h.len()), Some(2));
}

#[tokio::test]
async fn should_check_self_then_parent_on_update() {
    let hives = MemoryRepo::new(vec![Hive {
        id: 1,
        name: "Hive 1".to_owned(),
        apiary_id: 1,
    }]);
    let apiaries = MemoryRepo::new(vec![apiary(1), apiary(2)]);
    let uc = UpdateEntityUseCase {
        repo: hives.clone(),
        parents: apiaries.clone(),
    };

    let unknown_self = uc.execute(9, hive_fields("Hive 9", 99)).await;
    assert_eq!(unknown_self.unwrap_err().to_string(), "Invalid hive_id");
    assert_eq!(apiaries.lookups(), 0);

    let unknown_parent = uc.execute(1, hive_fields("Hive 1", 99)).await;
    assert_eq!(unknown_parent.unwrap_err().to_string(), "Invalid apiary_id");

    let moved = uc
        .execute(1, hive_fields("Moved hive", 2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.apiary_id, 2);
    assert_eq!(moved.name, "Moved hive");
    assert_eq!(hives.rows(), vec![moved]);
}

#[tokio::test]
async fn should_return_false_when_deleting_unknown_id() {
    let hives = MemoryRepo::new(vec![Hive {
        id: 1,
        name: "Hive 1".to_owned(),
        apiary_id: 1,
    }]);
    let uc = DeleteEntityUseCase { repo: hives };

    assert!(!uc.execute(999).await.unwrap());
    assert!(uc.execute(1).await.unwrap());
    assert!(!uc.execute(1).await.unwrap());
}

#[tokio::test]
async fn should_open_session_for_existing_user() {
    let sessions = MemoryRepo::<Session>::empty();
    let uc = CreateEntityUseCase {
        repo: sessions.clone(),
        parents: MockUserRepo::new(vec![test_user(1, "jake")]),
    };
    let before = chrono::Utc::now();

    let session = uc
        .execute(SessionFields::starting_now(1))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(session.user_id, 1);
    assert!(session.session_start >= before);
    assert_eq!(sessions.writes(), 1);

    let missing = uc.execute(SessionFields::starting_now(7)).await;
    assert_eq!(missing.unwrap_err().to_string(), "Invalid user_id");
}
