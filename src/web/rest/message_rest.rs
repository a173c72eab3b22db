
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::model::message::{Message, MessageBmc, MessageForCreate, MessageForUpdate};
use crate::model::ModelManager;
use crate::web::Result;

pub async fn list_messages(State(mm): State<ModelManager>) -> Result<Json<Vec<Message>>> {
    debug!("{:<12} - list_messages", "HANDLER");

    let messages = MessageBmc::list(&mm).await?;

    Ok(Json(messages))
}

#[axum::debug_handler]
pub async fn create_message(
    State(mm): State<ModelManager>,
    Json(msg_c): Json<MessageForCreate>,
) -> Result<(StatusCode, Json<Message>)> {
    debug!("{:<12} - create_message", "HANDLER");

    let msg = MessageBmc::create(&mm, msg_c).await?;

    Ok((StatusCode::CREATED, Json(msg)))
}

pub async fn replace_message(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
    Json(msg_c): Json<MessageForCreate>,
) -> Result<Json<Message>> {
    debug!("{:<12} - replace_message", "HANDLER");

    let msg = MessageBmc::replace(&mm, &id, msg_c).await?;

    Ok(Json(msg))
}

pub async fn update_message(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
    Json(msg_u): Json<MessageForUpdate>,
) -> Result<Json<Message>> {
    debug!("{:<12} - update_message", "HANDLER");

    let msg = MessageBmc::update(&mm, &id, msg_u).await?;

    Ok(Json(msg))
}

pub async fn delete_message(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    debug!("{:<12} - delete_message", "HANDLER");

    MessageBmc::delete(&mm, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}
