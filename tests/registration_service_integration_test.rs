use chrono::Utc;
use member_registry::adapters::memory::MemberRepository as InMemoryMemberRepository;
use member_registry::application::member::{
    MemberApplicationError, ServiceDependencies, find_member, find_member_by_name, find_members,
    join,
};
use member_registry::domain::commands::RegisterMember;
use member_registry::domain::value_objects::{MemberId, MemberName};
use std::sync::Arc;

// ============================================================================
// テストセットアップ
// ============================================================================

/// テスト用のサービス依存関係をセットアップ
///
/// 各テストが独立したインメモリストアを受け取るため、
/// テスト間でデータが共有されない（ロールバック相当の分離）。
fn setup_deps() -> ServiceDependencies {
    ServiceDependencies {
        member_repository: Arc::new(InMemoryMemberRepository::new()),
    }
}

fn register_cmd(raw_name: &str) -> RegisterMember {
    RegisterMember {
        name: MemberName::new(raw_name).unwrap(),
        requested_at: Utc::now(),
    }
}

// ============================================================================
// 会員登録
// ============================================================================

#[tokio::test]
async fn test_join_registers_member() {
    // given
    let deps = setup_deps();

    // when
    let member_id = join(&deps, register_cmd("spring")).await.unwrap();

    // then
    let found = find_member(&deps, member_id)
        .await
        .unwrap()
        .expect("registered member must be found by its id");
    assert_eq!(found.name.as_str(), "spring");
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    // given
    let deps = setup_deps();
    join(&deps, register_cmd("spring")).await.unwrap();

    // when
    let result = join(&deps, register_cmd("spring")).await;

    // then
    let err = result.unwrap_err();
    assert!(matches!(err, MemberApplicationError::DuplicateMember));
    assert_eq!(err.to_string(), "a member with this name already exists");

    // ストアは変更されていない
    let members = find_members(&deps).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name.as_str(), "spring");
}

#[tokio::test]
async fn test_join_is_not_idempotent() {
    // 同名での2回目の呼び出しはno-opではなくエラーになる
    let deps = setup_deps();

    let first = join(&deps, register_cmd("spring")).await;
    assert!(first.is_ok());

    let second = join(&deps, register_cmd("spring")).await;
    assert!(matches!(
        second,
        Err(MemberApplicationError::DuplicateMember)
    ));
}

#[tokio::test]
async fn test_registered_member_listed_exactly_once() {
    let deps = setup_deps();
    join(&deps, register_cmd("spring")).await.unwrap();

    let members = find_members(&deps).await.unwrap();
    let springs = members
        .iter()
        .filter(|m| m.name.as_str() == "spring")
        .count();
    assert_eq!(springs, 1);
}

#[tokio::test]
async fn test_concurrent_joins_have_single_winner() {
    // 同名の同時登録はちょうど1件だけ成功する。
    // 一意性判定がストア境界のアトミックなinsert-if-absentで行われることの確認。
    let deps = setup_deps();

    let attempts = (0..8).map(|_| join(&deps, register_cmd("spring")));
    let results = futures::future::join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(MemberApplicationError::DuplicateMember)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(find_members(&deps).await.unwrap().len(), 1);
}

// ============================================================================
// 会員照会
// ============================================================================

#[tokio::test]
async fn test_find_members_returns_all_in_store_order() {
    let deps = setup_deps();
    for raw in ["spring", "boot", "data"] {
        join(&deps, register_cmd(raw)).await.unwrap();
    }

    let members = find_members(&deps).await.unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["spring", "boot", "data"]);
}

#[tokio::test]
async fn test_find_member_with_unknown_id_is_none() {
    let deps = setup_deps();

    let found = find_member(&deps, MemberId::new()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_member_by_name() {
    let deps = setup_deps();
    join(&deps, register_cmd("spring")).await.unwrap();

    let hit = find_member_by_name(&deps, &MemberName::new("spring").unwrap())
        .await
        .unwrap();
    assert!(hit.is_some());

    let miss = find_member_by_name(&deps, &MemberName::new("boot").unwrap())
        .await
        .unwrap();
    assert!(miss.is_none());
}
