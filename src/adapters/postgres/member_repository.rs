use crate::domain::member::Member;
use crate::domain::value_objects::{MemberId, MemberName};
use crate::ports::member_repository::{
    InsertOutcome, MemberRepository as MemberRepositoryTrait, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをMemberに変換する
///
/// name列はバリデーション済みの値のみが書き込まれる前提だが、
/// 手作業での変更に備えて読み出し時にも`MemberName`の検証を通す。
fn map_row_to_member(row: &PgRow) -> Result<Member> {
    let name_str: &str = row.get("name");
    let name = MemberName::new(name_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Member {
        member_id: MemberId::from_uuid(row.get("member_id")),
        name,
        registered_at: row.get("registered_at"),
    })
}

/// MemberRepositoryのPostgreSQL実装
///
/// 名前の一意性は`members.name`のUNIQUE制約で保証される。
/// `INSERT ... ON CONFLICT (name) DO NOTHING`により、重複チェックと
/// 挿入が単一のアトミックな文になる。affected rowsが0の場合が
/// 名前衝突を意味する。
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// PostgreSQLコネクションプールから新しいMemberRepositoryを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn insert(
        &self,
        name: MemberName,
        registered_at: DateTime<Utc>,
    ) -> Result<InsertOutcome> {
        let member = Member::register(name, registered_at);

        let result = sqlx::query(
            r#"
            INSERT INTO members (member_id, name, registered_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(member.member_id.value())
        .bind(member.name.as_str())
        .bind(member.registered_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(InsertOutcome::NameTaken);
        }

        Ok(InsertOutcome::Inserted(member))
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT member_id, name, registered_at
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(member_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT member_id, name, registered_at
            FROM members
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_member).transpose()
    }

    /// すべての会員を挿入順で取得する
    ///
    /// seq列（bigserial）で並べることで、registered_atが同時刻でも
    /// 安定した挿入順になる。
    async fn find_all(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT member_id, name, registered_at
            FROM members
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_member).collect()
    }
}
