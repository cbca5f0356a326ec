use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::ProfileDraft;
use crate::error::ApiError;
use crate::models::{Interest, ProfileUpdate, SessionResponse};
use crate::routes::AppState;
use crate::services::DraftHandle;

/// Configure all signup-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/signup/sessions", web::post().to(create_session))
        .route("/signup/sessions/{id}", web::get().to(get_session))
        .route("/signup/sessions/{id}", web::patch().to(update_session))
        .route("/signup/sessions/{id}", web::delete().to(delete_session))
        .route(
            "/signup/sessions/{id}/interests/{interest}/toggle",
            web::post().to(toggle_interest),
        );
}

async fn lookup(state: &AppState, id: Uuid) -> Result<DraftHandle, ApiError> {
    state
        .sessions
        .get(&id)
        .await
        .ok_or(ApiError::SessionNotFound(id))
}

fn session_response(session_id: Uuid, profile: &ProfileDraft) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        session_id,
        profile: profile.clone(),
    })
}

/// Start a signup
///
/// POST /api/v1/signup/sessions
async fn create_session(state: web::Data<AppState>) -> HttpResponse {
    let (id, handle) = state.sessions.create().await;
    let draft = handle.lock().await;

    tracing::info!("Signup session {} started", id);

    HttpResponse::Created().json(SessionResponse {
        session_id: id,
        profile: draft.clone(),
    })
}

/// GET /api/v1/signup/sessions/{id}
async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = lookup(&state, id).await?;
    let draft = handle.lock().await;

    Ok(session_response(id, &draft))
}

/// Apply field updates to a draft
///
/// PATCH /api/v1/signup/sessions/{id}
///
/// Request body (every field optional):
/// ```json
/// {
///   "name": "string",
///   "age": 21,
///   "gender": "string",
///   "degree": "string",
///   "email": "string",
///   "role": "Student|Tutor",
///   "studentType": "TutorSeeker|StudyBuddy|CampusPartner"
/// }
/// ```
async fn update_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<ProfileUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let handle = lookup(&state, id).await?;
    let mut draft = handle.lock().await;

    apply_update(&mut draft, req.into_inner());
    tracing::debug!("Updated signup session {}", id);

    Ok(session_response(id, &draft))
}

fn apply_update(draft: &mut ProfileDraft, update: ProfileUpdate) {
    if let Some(name) = update.name {
        draft.set_name(name);
    }
    if let Some(age) = update.age {
        draft.set_age(age);
    }
    if let Some(gender) = update.gender {
        draft.set_gender(gender);
    }
    if let Some(degree) = update.degree {
        draft.set_degree(degree);
    }
    if let Some(email) = update.email {
        draft.set_email(email);
    }
    if let Some(role) = update.role {
        draft.set_role(role);
    }
    if let Some(student_type) = update.student_type {
        draft.set_student_type(student_type);
    }
}

/// POST /api/v1/signup/sessions/{id}/interests/{interest}/toggle
async fn toggle_interest(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> Result<HttpResponse, ApiError> {
    let (id, interest) = path.into_inner();
    let interest: Interest = interest.parse().map_err(ApiError::UnknownInterest)?;

    let handle = lookup(&state, id).await?;
    let mut draft = handle.lock().await;
    let selected = draft.toggle_interest(interest);

    tracing::debug!("Session {}: {} {}", id, interest, if selected { "selected" } else { "cleared" });

    Ok(session_response(id, &draft))
}

/// DELETE /api/v1/signup/sessions/{id}
async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    if !state.sessions.remove(&id).await {
        return Err(ApiError::SessionNotFound(id));
    }

    tracing::info!("Signup session {} discarded", id);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, StudentType};

    #[test]
    fn test_apply_update_leaves_missing_fields() {
        let mut draft = ProfileDraft::new();
        draft.set_email("a@b.c");
        draft.set_age(Some(20));

        let update: ProfileUpdate =
            serde_json::from_str(r#"{"name": "Emily", "role": "Student"}"#).unwrap();
        apply_update(&mut draft, update);

        assert_eq!(draft.name(), "Emily");
        assert_eq!(draft.email(), "a@b.c");
        assert_eq!(draft.age(), Some(20));
        assert_eq!(draft.role(), Some(Role::Student));
    }

    #[test]
    fn test_apply_update_clears_with_null() {
        let mut draft = ProfileDraft::new();
        draft.set_age(Some(20));
        draft.set_student_type(Some(StudentType::TutorSeeker));

        let update: ProfileUpdate =
            serde_json::from_str(r#"{"age": null, "studentType": null}"#).unwrap();
        apply_update(&mut draft, update);

        assert_eq!(draft.age(), None);
        assert_eq!(draft.student_type(), None);
    }
}
