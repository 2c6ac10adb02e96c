//! Voter HTTP Routes
//!
//! CRUD, lookup, and statistics endpoints over the voter registry.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::registry::{
    InMemoryVoterRepository, NewVoter, RegistrationStats, Voter, VoterPatch, VoterQuery,
    VoterRepository,
};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

// ==================
// Shared State
// ==================

/// Voter state shared across handlers
pub struct VoterState {
    pub repository: Arc<dyn VoterRepository>,
}

impl VoterState {
    pub fn new(repository: Arc<dyn VoterRepository>) -> Self {
        Self { repository }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryVoterRepository::new()))
    }
}

impl Default for VoterState {
    fn default() -> Self {
        Self::in_memory()
    }
}

// ==================
// Request Types
// ==================

/// Create request body
///
/// Every field is an optional string so that absence can be reported as a
/// validation failure rather than a deserialization error. Empty enum
/// values fall back to `not-specified`, as in the list query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVoterRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub voting_preference: Option<String>,
    #[serde(default)]
    pub political_affiliation: Option<String>,
}

impl CreateVoterRequest {
    /// Check presence of required fields and build the store input.
    pub fn validate(self) -> ApiResult<NewVoter> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            present(self.first_name),
            present(self.last_name),
            present(self.email),
        ) else {
            return Err(ApiError::Validation(
                "First name, last name, and email are required".to_string(),
            ));
        };

        let voting_preference = parse_param(self.voting_preference, ApiError::Validation)?;
        let political_affiliation =
            parse_param(self.political_affiliation, ApiError::Validation)?;

        let city = present(self.city);
        let state = present(self.state);
        let zip_code = present(self.zip_code);
        let date_of_birth = present(self.date_of_birth);

        let missing: Vec<&str> = [
            ("city", city.is_none()),
            ("state", state.is_none()),
            ("zipCode", zip_code.is_none()),
            ("dateOfBirth", date_of_birth.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(ApiError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(NewVoter {
            first_name,
            last_name,
            email,
            city: city.unwrap_or_default(),
            state: state.unwrap_or_default(),
            zip_code: zip_code.unwrap_or_default(),
            date_of_birth: date_of_birth.unwrap_or_default(),
            voting_preference,
            political_affiliation,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Raw query string for `GET /users`
///
/// Kept as strings so that empty values can be treated as absent before
/// the typed fields are parsed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVotersParams {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub is_registered: Option<String>,
    pub voting_preference: Option<String>,
    pub political_affiliation: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl TryFrom<ListVotersParams> for VoterQuery {
    type Error = ApiError;

    fn try_from(params: ListVotersParams) -> Result<Self, Self::Error> {
        let is_registered = match params.is_registered.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };

        Ok(VoterQuery {
            city: present(params.city),
            state: present(params.state),
            zip_code: present(params.zip_code),
            is_registered,
            voting_preference: parse_param(params.voting_preference, ApiError::InvalidQuery)?,
            political_affiliation: parse_param(
                params.political_affiliation,
                ApiError::InvalidQuery,
            )?,
            offset: parse_count("offset", params.offset)?,
            limit: parse_count("limit", params.limit)?,
        })
    }
}

fn parse_param<T>(value: Option<String>, invalid: fn(String) -> ApiError) -> ApiResult<Option<T>>
where
    T: std::str::FromStr<Err = String>,
{
    present(value)
        .map(|s| s.parse::<T>().map_err(invalid))
        .transpose()
}

fn parse_count(name: &str, value: Option<String>) -> ApiResult<Option<usize>> {
    present(value)
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                ApiError::InvalidQuery(format!("{} must be a non-negative integer, got '{}'", name, s))
            })
        })
        .transpose()
}

// ==================
// Voter Routes
// ==================

/// Create voter routes
pub fn voter_routes(state: Arc<VoterState>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/city/:city", get(users_by_city_handler))
        .route("/users/state/:state", get(users_by_state_handler))
        .route("/users/zip/:zip_code", get(users_by_zip_handler))
        .route("/users/stats/registration", get(registration_stats_handler))
        .with_state(state)
}

/// Ids match only in their canonical hyphenated lowercase form.
/// Anything else, including other spellings of a stored id, matches nothing.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw)
}

// ==================
// Record Handlers
// ==================

async fn create_user_handler(
    State(state): State<Arc<VoterState>>,
    payload: Result<Json<CreateVoterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Voter>>)> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let new_voter = request.validate()?;

    let voter = state
        .repository
        .create(new_voter)
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    tracing::info!(id = %voter.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(voter, "User created successfully")),
    ))
}

async fn list_users_handler(
    State(state): State<Arc<VoterState>>,
    params: Result<Query<ListVotersParams>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<Voter>>>> {
    let Query(params) = params.map_err(|e| ApiError::InvalidQuery(e.body_text()))?;
    let query = VoterQuery::try_from(params)?;

    let voters = state
        .repository
        .list(&query)
        .map_err(|e| ApiError::internal("Failed to retrieve users", e))?;

    Ok(Json(ApiResponse::list(voters, "Users retrieved successfully")))
}

async fn get_user_handler(
    State(state): State<Arc<VoterState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Voter>>> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::user_not_found());
    };

    let voter = state
        .repository
        .find_by_id(id)
        .map_err(|e| ApiError::internal("Failed to retrieve user", e))?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(ApiResponse::ok(voter, "User retrieved successfully")))
}

async fn update_user_handler(
    State(state): State<Arc<VoterState>>,
    Path(id): Path<String>,
    payload: Result<Json<VoterPatch>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Voter>>> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::user_not_found());
    };
    let Json(patch) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let voter = state
        .repository
        .update(id, patch)
        .map_err(|e| ApiError::internal("Failed to update user", e))?
        .ok_or_else(ApiError::user_not_found)?;

    tracing::info!(%id, "user updated");

    Ok(Json(ApiResponse::ok(voter, "User updated successfully")))
}

async fn delete_user_handler(
    State(state): State<Arc<VoterState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let Some(id) = parse_id(&id) else {
        return Err(ApiError::user_not_found());
    };

    let deleted = state
        .repository
        .delete(id)
        .map_err(|e| ApiError::internal("Failed to delete user", e))?;

    if !deleted {
        return Err(ApiError::user_not_found());
    }

    tracing::info!(%id, "user deleted");

    Ok(Json(ApiResponse::message("User deleted successfully")))
}

// ==================
// Lookup Handlers
// ==================

async fn users_by_city_handler(
    State(state): State<Arc<VoterState>>,
    Path(city): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Voter>>>> {
    let voters = state
        .repository
        .list_by_city(&city)
        .map_err(|e| ApiError::internal("Failed to retrieve users by city", e))?;

    let message = format!("Found {} users in {}", voters.len(), city);
    Ok(Json(ApiResponse::list(voters, message)))
}

async fn users_by_state_handler(
    State(state): State<Arc<VoterState>>,
    Path(us_state): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Voter>>>> {
    let voters = state
        .repository
        .list_by_state(&us_state)
        .map_err(|e| ApiError::internal("Failed to retrieve users by state", e))?;

    let message = format!("Found {} users in {}", voters.len(), us_state);
    Ok(Json(ApiResponse::list(voters, message)))
}

async fn users_by_zip_handler(
    State(state): State<Arc<VoterState>>,
    Path(zip_code): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Voter>>>> {
    let voters = state
        .repository
        .list_by_zip_code(&zip_code)
        .map_err(|e| ApiError::internal("Failed to retrieve users by zip code", e))?;

    let message = format!("Found {} users in zip code {}", voters.len(), zip_code);
    Ok(Json(ApiResponse::list(voters, message)))
}

async fn registration_stats_handler(
    State(state): State<Arc<VoterState>>,
) -> ApiResult<Json<ApiResponse<RegistrationStats>>> {
    let stats = state
        .repository
        .stats()
        .map_err(|e| ApiError::internal("Failed to retrieve registration statistics", e))?;

    Ok(Json(ApiResponse::ok(
        stats,
        "Registration statistics retrieved successfully",
    )))
}
