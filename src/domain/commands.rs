use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemberName;

/// コマンド：会員を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMember {
    pub name: MemberName,
    pub requested_at: DateTime<Utc>,
}
