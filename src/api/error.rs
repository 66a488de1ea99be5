use crate::application::member::MemberApplicationError;
use crate::domain::value_objects::MemberNameError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーと境界でのバリデーションエラーをラップし、
/// HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// 会員名のバリデーションエラー
    InvalidName(MemberNameError),
    /// アプリケーション層のエラー
    Application(MemberApplicationError),
}

impl From<MemberNameError> for ApiError {
    fn from(err: MemberNameError) -> Self {
        ApiError::InvalidName(err)
    }
}

impl From<MemberApplicationError> for ApiError {
    fn from(err: MemberApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 422 Unprocessable Entity - 名前のバリデーション違反
            ApiError::InvalidName(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_MEMBER_NAME",
                e.to_string(),
            ),

            // 409 Conflict - 名前の一意性違反
            ApiError::Application(MemberApplicationError::DuplicateMember) => (
                StatusCode::CONFLICT,
                "DUPLICATE_MEMBER",
                MemberApplicationError::DuplicateMember.to_string(),
            ),

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Application(MemberApplicationError::MemberNotFound) => (
                StatusCode::NOT_FOUND,
                "MEMBER_NOT_FOUND",
                "Member not found".to_string(),
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(MemberApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Member repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Failed to access member store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
