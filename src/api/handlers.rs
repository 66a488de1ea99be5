use crate::application::member::{
    MemberApplicationError, ServiceDependencies, find_member as execute_find_member,
    find_member_by_name as execute_find_member_by_name, find_members as execute_find_members,
    join as execute_join,
};
use crate::domain::value_objects::{MemberId, MemberName};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{ListMembersQuery, MemberRegisteredResponse, MemberResponse, RegisterMemberRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /members - 新しい会員を登録
///
/// 強制されるビジネスルール:
/// - 名前が空でなく、100文字以内であること
/// - 同名の会員が存在しないこと（違反時は409）
pub async fn register_member(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<MemberRegisteredResponse>), ApiError> {
    let cmd = req.to_command()?;

    let member_id = execute_join(&state.service_deps, cmd).await?;

    // 登録された会員を取得して完全な情報を返す
    let member = execute_find_member(&state.service_deps, member_id)
        .await?
        .ok_or(ApiError::Application(MemberApplicationError::MemberNotFound))?;

    let response = MemberRegisteredResponse {
        member_id: member.member_id.value(),
        name: member.name.into_string(),
        registered_at: member.registered_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /members/:id - 会員詳細をIDで取得
///
/// 見つかった場合は会員情報を返し、見つからない場合は404を返す。
pub async fn get_member_by_id(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<MemberResponse>, QueryError> {
    let member_id = MemberId::from_uuid(member_id);

    match execute_find_member(&state.service_deps, member_id).await {
        Ok(Some(member)) => Ok(Json(MemberResponse::from(member))),
        Ok(None) => Err(QueryError::NotFound(format!(
            "Member {} not found",
            member_id.value()
        ))),
        Err(e) => Err(QueryError::InternalError(e.to_string())),
    }
}

/// GET /members - オプションフィルタ付き会員一覧取得
///
/// クエリパラメータ:
/// - name: 名前の完全一致でフィルタリング（オプション）
///
/// フィルタが指定されない場合は、全会員をストアの並びで返す。
pub async fn list_members(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListMembersQuery>,
) -> Result<Json<Vec<MemberResponse>>, QueryError> {
    let members = match &query.name {
        Some(raw) => {
            let name =
                MemberName::new(raw).map_err(|e| QueryError::BadRequest(e.to_string()))?;

            execute_find_member_by_name(&state.service_deps, &name)
                .await
                .map_err(|e| QueryError::InternalError(e.to_string()))?
                .into_iter()
                .collect()
        }
        None => execute_find_members(&state.service_deps)
            .await
            .map_err(|e| QueryError::InternalError(e.to_string()))?,
    };

    let responses: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();

    Ok(Json(responses))
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(super::types::ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
