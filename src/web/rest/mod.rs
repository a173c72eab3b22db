use axum::routing::{get, put};
use axum::Router;

use crate::model::ModelManager;

mod message_rest;

use message_rest::{
    create_message, delete_message, list_messages, replace_message, update_message,
};

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/{id}",
            put(replace_message)
                .patch(update_message)
                .delete(delete_message),
        )
        .with_state(mm)
}
