mod utils;

use filmoteka::{AppError, AppServices};
use utils::factories::UserFactory;

async fn three_users(services: &AppServices) -> (i64, i64, i64) {
    let mut ids = Vec::new();
    for login in ["anna", "boris", "clara"] {
        let user = services
            .users
            .create_user(UserFactory::new().with_login(login).build())
            .await
            .unwrap();
        ids.push(user.id);
    }
    (ids[0], ids[1], ids[2])
}

#[tokio::test]
async fn adding_a_friend_is_visible_from_both_sides() {
    let services = AppServices::in_memory();
    let (a, b, _) = three_users(&services).await;

    services.users.add_friend(a, b).await.unwrap();

    let friends_of_a = services.users.list_friends(a).await.unwrap();
    let friends_of_b = services.users.list_friends(b).await.unwrap();

    assert!(friends_of_a.iter().any(|u| u.id == b));
    assert!(friends_of_b.iter().any(|u| u.id == a));
}

#[tokio::test]
async fn deleting_a_friend_removes_both_directions() {
    let services = AppServices::in_memory();
    let (a, b, _) = three_users(&services).await;

    services.users.add_friend(a, b).await.unwrap();
    // The edge is undirected: removal from either side cancels it entirely.
    services.users.delete_friend(b, a).await.unwrap();

    assert!(services.users.list_friends(a).await.unwrap().is_empty());
    assert!(services.users.list_friends(b).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_friend_is_idempotent() {
    let services = AppServices::in_memory();
    let (a, b, _) = three_users(&services).await;

    services.users.add_friend(a, b).await.unwrap();
    services.users.add_friend(a, b).await.unwrap();

    assert_eq!(services.users.list_friends(a).await.unwrap().len(), 1);
    assert_eq!(services.users.list_friends(b).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_an_absent_edge_is_a_no_op() {
    let services = AppServices::in_memory();
    let (a, b, _) = three_users(&services).await;

    services.users.delete_friend(a, b).await.unwrap();
    assert!(services.users.list_friends(a).await.unwrap().is_empty());
}

#[tokio::test]
async fn common_friends_is_the_intersection_of_both_sets() {
    let services = AppServices::in_memory();
    let (a, b, c) = three_users(&services).await;
    let d = services
        .users
        .create_user(UserFactory::new().with_login("dmitri").build())
        .await
        .unwrap()
        .id;

    // c is friends with both a and b; d only with a.
    services.users.add_friend(a, c).await.unwrap();
    services.users.add_friend(b, c).await.unwrap();
    services.users.add_friend(a, d).await.unwrap();

    let common = services.users.list_common_friends(a, b).await.unwrap();
    let common_ids: Vec<i64> = common.iter().map(|u| u.id).collect();

    assert_eq!(common_ids, vec![c]);
}

#[tokio::test]
async fn common_friends_of_strangers_is_empty() {
    let services = AppServices::in_memory();
    let (a, b, _) = three_users(&services).await;

    let common = services.users.list_common_friends(a, b).await.unwrap();
    assert!(common.is_empty());
}

#[tokio::test]
async fn friend_operations_require_existing_users() {
    let services = AppServices::in_memory();
    let (a, _, _) = three_users(&services).await;

    let err = services.users.add_friend(a, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services.users.add_friend(999, a).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services.users.delete_friend(a, -5).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services.users.list_friends(0).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = services
        .users
        .list_common_friends(a, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
