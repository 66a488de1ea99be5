use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MemberId, MemberName};

/// 会員エンティティ
///
/// 登録後は更新・削除されない。リポジトリが正本のコレクションを所有し、
/// 読み取り側はクローンを受け取る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: MemberName,
    pub registered_at: DateTime<Utc>,
}

impl Member {
    /// 新しい会員レコードを作成する
    ///
    /// IDはここで採番される。リポジトリの挿入処理の内部でのみ
    /// 呼び出されることを想定している（保存時採番）。
    pub fn register(name: MemberName, registered_at: DateTime<Utc>) -> Self {
        Self {
            member_id: MemberId::new(),
            name,
            registered_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_fresh_id() {
        let now = Utc::now();
        let a = Member::register(MemberName::new("spring").unwrap(), now);
        let b = Member::register(MemberName::new("boot").unwrap(), now);
        assert_ne!(a.member_id, b.member_id);
    }

    #[test]
    fn test_register_keeps_name_and_timestamp() {
        let now = Utc::now();
        let member = Member::register(MemberName::new("spring").unwrap(), now);
        assert_eq!(member.name.as_str(), "spring");
        assert_eq!(member.registered_at, now);
    }
}
