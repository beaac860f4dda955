//! HTTP handlers for opportunities and applications

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::{ApiPath, AuthUser, Payload};
use crate::backend::storage::Store;
use crate::shared::api::CreateOpportunityRequest;
use crate::shared::models::Opportunity;

fn opportunity_not_found() -> ApiError {
    ApiError::not_found("Opportunity not found")
}

/// GET /api/opportunities
pub async fn list_opportunities(State(store): State<Arc<dyn Store>>) -> ApiResult<Json<Vec<Opportunity>>> {
    Ok(Json(store.list_opportunities().await?))
}

/// POST /api/opportunities
pub async fn create_opportunity(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    Payload(request): Payload<CreateOpportunityRequest>,
) -> ApiResult<(StatusCode, Json<Opportunity>)> {
    request.validate()?;

    let opportunity = Opportunity {
        id: Uuid::new_v4(),
        author: user.id,
        title: request.title.trim().to_string(),
        company: request.company.trim().to_string(),
        description: request.description.trim().to_string(),
        location: request.location,
        kind: request.kind.unwrap_or_default(),
        applicants: Vec::new(),
        created_at: Utc::now(),
    };
    let opportunity = store.create_opportunity(opportunity).await?;

    tracing::info!("Opportunity {} created by {}", opportunity.id, opportunity.author);
    Ok((StatusCode::CREATED, Json(opportunity)))
}

/// GET /api/opportunities/{id}
pub async fn get_opportunity(
    State(store): State<Arc<dyn Store>>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Opportunity>> {
    let opportunity = store.find_opportunity(id).await?.ok_or_else(opportunity_not_found)?;
    Ok(Json(opportunity))
}

/// POST /api/opportunities/{id}/apply
pub async fn apply_to_opportunity(
    State(store): State<Arc<dyn Store>>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Opportunity>> {
    let opportunity = store.find_opportunity(id).await?.ok_or_else(opportunity_not_found)?;

    if opportunity.author == user.id {
        return Err(ApiError::validation("You cannot apply to your own opportunity"));
    }
    if opportunity.has_applied(user.id) {
        return Err(ApiError::validation("Already applied to this opportunity"));
    }

    let opportunity = store
        .add_applicant(id, user.id)
        .await?
        .ok_or_else(opportunity_not_found)?;

    tracing::info!("User {} applied to opportunity {}", user.id, id);
    Ok(Json(opportunity))
}
