use crate::domain::commands::RegisterMember;
use crate::domain::member::Member;
use crate::domain::value_objects::{MemberId, MemberName};
use crate::ports::member_repository::{InsertOutcome, MemberRepository};
use std::sync::Arc;

use super::errors::{MemberApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
/// コンストラクタ注入の一般化：コンテナなしで依存を明示的に組み立てる。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
}

/// 会員を登録する
///
/// ビジネスルール：
/// - 同名の会員が存在しないこと
///
/// 一意性の判定はリポジトリのアトミックなinsert-if-absentに委ねる。
/// サービス層で事前チェック（findByName）を行わないため、
/// 同名の同時登録でも成功はちょうど1件となる。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 登録コマンド
///
/// # 戻り値
/// 成功時は採番された会員ID
///
/// # エラー
/// - DuplicateMember: 同名の会員が既に存在する（ストアは変更されない）
/// - RepositoryError: 永続化の失敗
pub async fn join(deps: &ServiceDependencies, cmd: RegisterMember) -> Result<MemberId> {
    let outcome = deps
        .member_repository
        .insert(cmd.name, cmd.requested_at)
        .await
        .map_err(MemberApplicationError::RepositoryError)?;

    match outcome {
        InsertOutcome::Inserted(member) => {
            tracing::info!(member_id = %member.member_id.value(), "member registered");
            Ok(member.member_id)
        }
        InsertOutcome::NameTaken => Err(MemberApplicationError::DuplicateMember),
    }
}

/// 全会員を取得する
///
/// フィルタなし、ストアの並び（挿入順が観測される）で返す。
pub async fn find_members(deps: &ServiceDependencies) -> Result<Vec<Member>> {
    deps.member_repository
        .find_all()
        .await
        .map_err(MemberApplicationError::RepositoryError)
}

/// IDで会員を1件取得する
///
/// 未採番のIDは`None`を返す（エラーではない）。
pub async fn find_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<Option<Member>> {
    deps.member_repository
        .find_by_id(member_id)
        .await
        .map_err(MemberApplicationError::RepositoryError)
}

/// 名前の完全一致で会員を1件取得する
///
/// 一覧APIの名前フィルタに使用される。
pub async fn find_member_by_name(
    deps: &ServiceDependencies,
    name: &MemberName,
) -> Result<Option<Member>> {
    deps.member_repository
        .find_by_name(name)
        .await
        .map_err(MemberApplicationError::RepositoryError)
}
