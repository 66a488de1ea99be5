use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 会員ID - 会員管理コンテキストの集約ID
///
/// リポジトリが保存時に採番する。IDの形式は実装定義であり、
/// 連番であることは契約に含まれない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

/// 会員名の最大文字数
pub const MAX_NAME_CHARS: usize = 100;

/// 会員名エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberNameError {
    /// 空文字（空白のみを含む）
    Empty,
    /// 上限（100文字）を超えた
    TooLong,
}

impl std::fmt::Display for MemberNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberNameError::Empty => write!(f, "member name must not be empty"),
            MemberNameError::TooLong => {
                write!(f, "member name must be at most {MAX_NAME_CHARS} characters")
            }
        }
    }
}

impl std::error::Error for MemberNameError {}

/// 会員名
///
/// 不変条件：前後の空白を除いて空でなく、100文字以内であること。
/// 型システムでこの制約を強制し、不正な値を作成できないようにする。
/// 重複判定はこの値の完全一致で行われる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberName(String);

impl MemberName {
    /// 生の入力文字列からバリデーション済みの会員名を作成する
    ///
    /// # エラー
    /// - 空白のみの場合は`MemberNameError::Empty`
    /// - 100文字を超える場合は`MemberNameError::TooLong`
    pub fn new(raw: impl AsRef<str>) -> Result<Self, MemberNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MemberNameError::Empty);
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(MemberNameError::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = MemberNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for MemberName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
