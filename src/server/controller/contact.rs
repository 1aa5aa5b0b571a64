use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactMessageDto, ContactReceiptDto, CreateContactMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::contact::CreateContactMessageParams,
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit a message through the contact form.
///
/// Rate limited per client IP.
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = CONTACT_TAG,
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message received", body = ContactReceiptDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 429, description = "Too many submissions"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = ContactService::new(&state.db)
        .submit(CreateContactMessageParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactReceiptDto {
            id: message.id,
            message: "Thank you for your message. We will get back to you soon.".to_string(),
        }),
    ))
}

/// Get all contact messages, newest first.
///
/// # Access Control
/// - `Admin` - Only admins can read contact messages
#[utoipa::path(
    get,
    path = "/api/v1/contact",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "Contact messages", body = Vec<ContactMessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let messages = ContactService::new(&state.db).get_all().await?;
    let messages: Vec<ContactMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(messages)))
}

/// Mark a contact message as read.
///
/// # Access Control
/// - `Admin` - Only admins can update contact messages
#[utoipa::path(
    put,
    path = "/api/v1/contact/{message_id}/read",
    tag = CONTACT_TAG,
    params(
        ("message_id" = i32, Path, description = "Contact message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = ContactMessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let message = ContactService::new(&state.db).mark_read(message_id).await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}
