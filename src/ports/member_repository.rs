use crate::domain::member::Member;
use crate::domain::value_objects::{MemberId, MemberName};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 挿入結果
///
/// 名前の衝突はインフラ障害ではなく通常の結果として表現する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 挿入成功。採番済みIDを含む保存されたレコードを返す。
    Inserted(Member),
    /// 同名の会員が既に存在する。
    NameTaken,
}

/// 会員リポジトリポート
///
/// 会員レコードの永続化を抽象化する。
/// 名前の一意性はこの境界で保証される：`insert`は重複チェックと挿入を
/// 単一のアトミックな操作として実行しなければならない。
/// チェックと挿入を別々の呼び出しに分けた実装は、同名の同時登録を
/// 両方通してしまうため契約違反となる。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を挿入する（insert-if-absent）
    ///
    /// 同名のレコードが存在しない場合に限り、新しいIDを採番して挿入し、
    /// 保存されたレコードを返す。同名が存在する場合は`NameTaken`を返し、
    /// ストアは変更されない（部分書き込みなし）。
    async fn insert(
        &self,
        name: MemberName,
        registered_at: DateTime<Utc>,
    ) -> Result<InsertOutcome>;

    /// IDで会員を取得する
    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// 名前の完全一致で会員を取得する
    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>>;

    /// すべての会員を取得する
    ///
    /// 挿入順で返す（観測される動作であり、契約上の保証ではない）。
    async fn find_all(&self) -> Result<Vec<Member>>;
}
