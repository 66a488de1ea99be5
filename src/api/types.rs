use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::RegisterMember;
use crate::domain::member::Member;
use crate::domain::value_objects::{MemberName, MemberNameError};

/// 会員登録リクエスト（POST /members）
#[derive(Debug, Deserialize)]
pub struct RegisterMemberRequest {
    pub name: String,
}

impl RegisterMemberRequest {
    /// リクエストを登録コマンドに変換する
    ///
    /// 名前のバリデーションはここで行われ、不正な名前は
    /// アプリケーション層に到達しない。
    pub fn to_command(self) -> Result<RegisterMember, MemberNameError> {
        let name = MemberName::new(self.name)?;
        Ok(RegisterMember {
            name,
            requested_at: Utc::now(),
        })
    }
}

/// 会員登録レスポンス（POST /members）
#[derive(Debug, Serialize)]
pub struct MemberRegisteredResponse {
    pub member_id: Uuid,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// 会員一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListMembersQuery {
    /// 名前の完全一致でフィルタリング
    pub name: Option<String>,
}

/// 会員レスポンス（GET /members/:id と GET /members）
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: Uuid,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id.value(),
            name: member.name.into_string(),
            registered_at: member.registered_at,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
