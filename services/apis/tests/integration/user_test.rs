use apis::domain::password::verify_password;
use apis::error::ApiServiceError;
use apis::usecase::user::{
    AuthenticateUserUseCase, CreateUserUseCase, Credentials, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, UpdateUserUseCase,
};

use crate::helpers::{MockUserRepo, test_user};

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_reject_case_variant_of_existing_username() {
    let uc = CreateUserUseCase {
        repo: MockUserRepo::default(),
    };
    uc.execute(credentials("jake", "passwordlongerthanten"))
        .await
        .unwrap();

    let result = uc
        .execute(credentials("JAKE ", "passwordlongerthanten"))
        .await;

    assert!(
        matches!(result, Err(ApiServiceError::UsernameTaken)),
        "expected UsernameTaken, got {result:?}"
    );
    assert_eq!(uc.repo.users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_touch_repository_when_password_invalid() {
    let repo = MockUserRepo::default();
    let uc = CreateUserUseCase { repo: repo.clone() };

    let result = uc.execute(credentials("jake", "short")).await;

    assert!(matches!(result, Err(ApiServiceError::PasswordInvalid)));
    assert_eq!(repo.lookups(), 0);
}

#[tokio::test]
async fn should_reject_username_with_symbols_or_bad_length() {
    let uc = CreateUserUseCase {
        repo: MockUserRepo::default(),
    };
    for username in ["ab", "inva!id", "has space", &"a".repeat(21)] {
        let result = uc
            .execute(credentials(username, "passwordlongerthanten"))
            .await;
        assert!(
            matches!(result, Err(ApiServiceError::UsernameInvalid)),
            "expected UsernameInvalid for {username:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_allow_user_to_keep_own_username() {
    let repo = MockUserRepo::new(vec![test_user(1, "jake")]);
    let uc = UpdateUserUseCase { repo };

    let updated = uc
        .execute(1, credentials("jake", "anotherlongpassword"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.username, "jake");
    assert!(verify_password("anotherlongpassword", &updated.password_hash));
}

#[tokio::test]
async fn should_reject_rename_to_another_users_name() {
    let repo = MockUserRepo::new(vec![test_user(1, "jake"), test_user(2, "amy")]);
    let uc = UpdateUserUseCase { repo };

    let result = uc
        .execute(2, credentials(" Jake", "passwordlongerthanten"))
        .await;

    assert!(matches!(result, Err(ApiServiceError::UsernameTaken)));
}

#[tokio::test]
async fn should_return_user_not_found_on_update_of_unknown_id() {
    let uc = UpdateUserUseCase {
        repo: MockUserRepo::default(),
    };

    let result = uc
        .execute(42, credentials("jake", "passwordlongerthanten"))
        .await;

    assert!(matches!(result, Err(ApiServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_short_password_on_update_before_any_lookup() {
    let jake = test_user(1, "jake");
    let repo = MockUserRepo::new(vec![jake.clone()]);
    let uc = UpdateUserUseCase { repo: repo.clone() };

    let result = uc.execute(1, credentials("jake", "short")).await;

    assert!(
        matches!(result, Err(ApiServiceError::PasswordInvalid)),
        "expected PasswordInvalid, got {result:?}"
    );
    assert_eq!(repo.lookups(), 0);
    assert_eq!(repo.users.lock().unwrap()[0], jake);
}

#[tokio::test]
async fn should_reject_invalid_username_on_update_before_any_lookup() {
    let jake = test_user(1, "jake");
    let repo = MockUserRepo::new(vec![jake.clone()]);
    let uc = UpdateUserUseCase { repo: repo.clone() };

    let result = uc
        .execute(1, credentials("inva!id", "passwordlongerthanten"))
        .await;

    assert!(
        matches!(result, Err(ApiServiceError::UsernameInvalid)),
        "expected UsernameInvalid, got {result:?}"
    );
    assert_eq!(repo.lookups(), 0);
    assert_eq!(repo.users.lock().unwrap()[0], jake);
}

#[tokio::test]
async fn should_return_false_when_deleting_unknown_user() {
    let repo = MockUserRepo::new(vec![test_user(1, "jake")]);
    let uc = DeleteUserUseCase { repo };

    assert!(!uc.execute(99).await.unwrap());
    assert!(uc.execute(1).await.unwrap());
    assert!(!uc.execute(1).await.unwrap());
}

#[tokio::test]
async fn should_find_and_list_users() {
    let repo = MockUserRepo::new(vec![test_user(1, "jake"), test_user(2, "amy")]);

    let found = GetUserUseCase { repo: repo.clone() }
        .execute(2)
        .await
        .unwrap();
    assert_eq!(found.map(|u| u.username).as_deref(), Some("amy"));

    let all = ListUsersUseCase { repo }.execute().await.unwrap().unwrap();
    assert_eq!(all.len(), 2);

    let none = ListUsersUseCase {
        repo: MockUserRepo::default(),
    }
    .execute()
    .await
    .unwrap();
    assert!(none.is_none());
}

#[tokio::test]
async fn should_not_distinguish_unknown_user_from_wrong_password() {
    let repo = MockUserRepo::new(vec![test_user(1, "jake")]);
    let uc = AuthenticateUserUseCase { repo };

    let wrong_password = uc
        .execute(credentials("jake", "notthepassword"))
        .await
        .unwrap();
    let unknown = uc
        .execute(credentials("nobody", "passwordlongerthanten"))
        .await
        .unwrap();
    let ok = uc
        .execute(credentials("Jake", "passwordlongerthanten"))
        .await
        .unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown.is_none());
    assert_eq!(ok.map(|u| u.id), Some(1));
}
