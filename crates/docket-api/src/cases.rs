//! Handlers for `/cases` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/cases` | Session required; filtered by role |
//! | `POST` | `/cases` | Body: [`NewCase`]; returns 201 + stored case |
//! | `GET`  | `/cases/:id` | Public status lookup, no personal data; 404 if unknown |
//! | `GET`  | `/cases/:id/details` | Judge or police. Full [`CaseRecord`] |
//! | `POST` | `/cases/:id/hearing` | Judge only. Body: `{"date","time"}` |
//! | `POST` | `/cases/:id/status` | Judge or police. Body: `{"status","details"}` |
//! | `POST` | `/cases/:id/assignments` | Judge only. Body: `{"role","name"}` |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use docket_core::{
  case::{
    Assignment, CaseRecord, CaseSnapshot, HearingRequest, NewCase, StatusUpdate,
  },
  identity::IdentityResolver,
  session::Role,
  store::CaseStore,
};
use serde::Deserialize;

use crate::{
  ApiState,
  error::{ApiError, ApiJson},
  session::CurrentSession,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /cases`
pub async fn list<S, I>(
  State(state): State<ApiState<S, I>>,
  CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<CaseRecord>>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  Ok(Json(state.docket.cases_for(&session).await?))
}

// ─── Register ─────────────────────────────────────────────────────────────────

/// `POST /cases` — open to anyone; returns 201 + the stored [`CaseRecord`].
pub async fn register<S, I>(
  State(state): State<ApiState<S, I>>,
  ApiJson(body): ApiJson<NewCase>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let record = state.docket.register_case(body).await?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Lookup ───────────────────────────────────────────────────────────────────

/// `GET /cases/:id`
pub async fn lookup<S, I>(
  State(state): State<ApiState<S, I>>,
  Path(id): Path<String>,
) -> Result<Json<CaseSnapshot>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  state
    .docket
    .lookup_case(&id)
    .await?
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("case {id} not found")))
}

/// `GET /cases/:id/details`
pub async fn details<S, I>(
  State(state): State<ApiState<S, I>>,
  current: CurrentSession,
  Path(id): Path<String>,
) -> Result<Json<CaseRecord>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  current.require(&[Role::Judge, Role::Police])?;
  Ok(Json(state.docket.case_details(&id).await?))
}

// ─── Hearing ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct HearingBody {
  #[serde(default)]
  pub date: String,
  #[serde(default)]
  pub time: String,
}

/// `POST /cases/:id/hearing`
pub async fn schedule_hearing<S, I>(
  State(state): State<ApiState<S, I>>,
  current: CurrentSession,
  Path(id): Path<String>,
  ApiJson(body): ApiJson<HearingBody>,
) -> Result<Json<CaseRecord>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let session = current.require(&[Role::Judge])?;
  let req = HearingRequest { case_id: id, date: body.date, time: body.time };
  Ok(Json(state.docket.schedule_hearing(&req, &session.name).await?))
}

// ─── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  #[serde(default)]
  pub status:  String,
  #[serde(default)]
  pub details: String,
}

/// `POST /cases/:id/status`
pub async fn update_status<S, I>(
  State(state): State<ApiState<S, I>>,
  current: CurrentSession,
  Path(id): Path<String>,
  ApiJson(body): ApiJson<StatusBody>,
) -> Result<Json<CaseRecord>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let session = current.require(&[Role::Judge, Role::Police])?;
  let req = StatusUpdate {
    case_id: id,
    status:  body.status,
    details: body.details,
  };
  Ok(Json(state.docket.update_status(&req, &session.name).await?))
}

// ─── Assignment ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AssignmentBody {
  pub role: Role,
  #[serde(default)]
  pub name: String,
}

/// `POST /cases/:id/assignments`
pub async fn assign<S, I>(
  State(state): State<ApiState<S, I>>,
  current: CurrentSession,
  Path(id): Path<String>,
  ApiJson(body): ApiJson<AssignmentBody>,
) -> Result<Json<CaseRecord>, ApiError>
where
  S: CaseStore + 'static,
  I: IdentityResolver + 'static,
{
  let session = current.require(&[Role::Judge])?;
  let req = Assignment { case_id: id, role: body.role, name: body.name };
  Ok(Json(state.docket.assign_personnel(&req, &session.name).await?))
}
