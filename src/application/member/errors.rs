use thiserror::Error;

/// 会員管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum MemberApplicationError {
    /// 同名の会員が既に存在する
    #[error("a member with this name already exists")]
    DuplicateMember,

    /// 会員が見つからない
    #[error("Member not found")]
    MemberNotFound,

    /// リポジトリのエラー
    #[error("Member repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, MemberApplicationError>;
