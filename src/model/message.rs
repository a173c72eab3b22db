
use crate::model::{Error, ModelManager, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One guestbook entry. `id` and `created_at` are assigned on create and
/// never change; `updated_at` stays absent until the first replace or patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub name: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

/// Body of POST and PUT. Both fields are required; they are optional here so
/// that an absent field reports the same validation error as a blank one.
#[derive(Deserialize)]
pub struct MessageForCreate {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Body of PATCH. An absent field leaves the stored value untouched.
#[derive(Deserialize)]
pub struct MessageForUpdate {
    pub name: Option<String>,
    pub message: Option<String>,
}

pub struct MessageBmc;

impl MessageBmc {
    pub async fn list(mm: &ModelManager) -> Result<Vec<Message>> {
        Ok(mm.store().load().await)
    }

    pub async fn create(mm: &ModelManager, msg_c: MessageForCreate) -> Result<Message> {
        let name = required_field(msg_c.name, "name")?;
        let message = required_field(msg_c.message, "message")?;

        let mut messages: Vec<Message> = mm.store().load().await;

        let msg = Message {
            id: Uuid::new_v4().to_string(),
            name,
            message,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        };
        messages.push(msg.clone());

        mm.store().save(&messages).await?;

        Ok(msg)
    }

    pub async fn replace(mm: &ModelManager, id: &str, msg_c: MessageForCreate) -> Result<Message> {
        let name = required_field(msg_c.name, "name")?;
        let message = required_field(msg_c.message, "message")?;

        let mut messages: Vec<Message> = mm.store().load().await;
        let idx = index_of(&messages, id)?;

        let msg = &mut messages[idx];
        msg.name = name;
        msg.message = message;
        msg.updated_at = Some(OffsetDateTime::now_utc());
        let msg = msg.clone();

        mm.store().save(&messages).await?;

        Ok(msg)
    }

    pub async fn update(mm: &ModelManager, id: &str, msg_u: MessageForUpdate) -> Result<Message> {
        let mut messages: Vec<Message> = mm.store().load().await;
        let idx = index_of(&messages, id)?;

        let msg = &mut messages[idx];
        // A present field is applied trimmed, blank or not; an absent field
        // is left untouched. The modification time bumps either way.
        if let Some(name) = msg_u.name {
            msg.name = name.trim().to_string();
        }
        if let Some(message) = msg_u.message {
            msg.message = message.trim().to_string();
        }
        msg.updated_at = Some(OffsetDateTime::now_utc());
        let msg = msg.clone();

        mm.store().save(&messages).await?;

        Ok(msg)
    }

    pub async fn delete(mm: &ModelManager, id: &str) -> Result<()> {
        let mut messages: Vec<Message> = mm.store().load().await;
        let idx = index_of(&messages, id)?;

        messages.remove(idx);

        mm.store().save(&messages).await?;

        Ok(())
    }
}

fn required_field(value: Option<String>, field: &'static str) -> Result<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::FieldMissingOrEmpty {
            entity: "message",
            field,
        }),
    }
}

fn index_of(messages: &[Message], id: &str) -> Result<usize> {
    messages
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| Error::EntityNotFound {
            entity: "message",
            id: id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::_dev_utils;

    fn msg_c(name: &str, message: &str) -> MessageForCreate {
        MessageForCreate {
            name: Some(name.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[serial]
    #[tokio::test]
    async fn test_create_ok() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let fx_name = "  Alice  ";
        let fx_message = " hi ";

        let msg = MessageBmc::create(&mm, msg_c(fx_name, fx_message)).await?;

        assert_eq!(msg.name, "Alice");
        assert_eq!(msg.message, "hi");
        assert!(msg.updated_at.is_none());

        let messages = MessageBmc::list(&mm).await?;
        let stored = messages.iter().find(|m| m.id == msg.id).unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.message, "hi");

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_create_err_blank_name() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let fx_count = MessageBmc::list(&mm).await?.len();

        let res = MessageBmc::create(&mm, msg_c("   ", "hello")).await;

        assert!(matches!(
            res,
            Err(Error::FieldMissingOrEmpty {
                entity: "message",
                field: "name"
            })
        ));
        assert_eq!(MessageBmc::list(&mm).await?.len(), fx_count);

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_create_err_missing_message() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let fx_count = MessageBmc::list(&mm).await?.len();

        let res = MessageBmc::create(
            &mm,
            MessageForCreate {
                name: Some("Alice".to_string()),
                message: None,
            },
        )
        .await;

        assert!(matches!(
            res,
            Err(Error::FieldMissingOrEmpty {
                entity: "message",
                field: "message"
            })
        ));
        assert_eq!(MessageBmc::list(&mm).await?.len(), fx_count);

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_list_creation_order_ok() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        assert!(MessageBmc::list(&mm).await?.is_empty());

        let msg_a = MessageBmc::create(&mm, msg_c("A", "m1")).await?;
        assert_eq!(MessageBmc::list(&mm).await?.len(), 1);

        let msg_b = MessageBmc::create(&mm, msg_c("B", "m2")).await?;
        let messages = MessageBmc::list(&mm).await?;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, msg_a.id);
        assert_eq!(messages[1].id, msg_b.id);

        MessageBmc::delete(&mm, &msg_a.id).await?;
        let messages = MessageBmc::list(&mm).await?;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, msg_b.id);

        MessageBmc::delete(&mm, &msg_b.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_replace_ok() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        let replaced = MessageBmc::replace(&mm, &msg.id, msg_c(" Carol ", " hey ")).await?;

        assert_eq!(replaced.id, msg.id);
        assert_eq!(replaced.created_at, msg.created_at);
        assert_eq!(replaced.name, "Carol");
        assert_eq!(replaced.message, "hey");
        assert!(replaced.updated_at.is_some());

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_replace_err_blank_message() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        let res = MessageBmc::replace(&mm, &msg.id, msg_c("Bob", "  ")).await;

        assert!(matches!(
            res,
            Err(Error::FieldMissingOrEmpty {
                entity: "message",
                field: "message"
            })
        ));

        let messages = MessageBmc::list(&mm).await?;
        let stored = messages.iter().find(|m| m.id == msg.id).unwrap();
        assert_eq!(stored.message, "hello");

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_replace_err_not_found() -> Result<()> {
        let mm = _dev_utils::init_test().await;

        let res = MessageBmc::replace(&mm, "no-such-id", msg_c("X", "Y")).await;

        assert!(matches!(
            res,
            Err(Error::EntityNotFound {
                entity: "message",
                ..
            })
        ));

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_update_partial_ok() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        let updated = MessageBmc::update(
            &mm,
            &msg.id,
            MessageForUpdate {
                name: None,
                message: Some(" hi ".to_string()),
            },
        )
        .await?;

        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.message, "hi");
        assert_eq!(updated.created_at, msg.created_at);
        assert!(updated.updated_at.is_some());

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    // PATCH applies any present field trimmed without the non-empty check
    // that create and replace enforce, so a blank value ends up stored as
    // an empty string.
    #[serial]
    #[tokio::test]
    async fn test_update_blank_name_stored_empty() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        let updated = MessageBmc::update(
            &mm,
            &msg.id,
            MessageForUpdate {
                name: Some("   ".to_string()),
                message: None,
            },
        )
        .await?;

        assert_eq!(updated.name, "");
        assert_eq!(updated.message, "hello");
        assert!(updated.updated_at.is_some());

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_update_no_fields_bumps_updated_at() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        let updated = MessageBmc::update(
            &mm,
            &msg.id,
            MessageForUpdate {
                name: None,
                message: None,
            },
        )
        .await?;

        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.message, "hello");
        assert!(updated.updated_at.is_some());

        MessageBmc::delete(&mm, &msg.id).await?;

        Ok(())
    }

    #[serial]
    #[tokio::test]
    async fn test_delete_then_mutate_err_not_found() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let msg = MessageBmc::create(&mm, msg_c("Bob", "hello")).await?;

        MessageBmc::delete(&mm, &msg.id).await?;
        assert!(!MessageBmc::list(&mm).await?.iter().any(|m| m.id == msg.id));

        let res = MessageBmc::delete(&mm, &msg.id).await;
        assert!(matches!(res, Err(Error::EntityNotFound { .. })));

        let res = MessageBmc::replace(&mm, &msg.id, msg_c("Bob", "again")).await;
        assert!(matches!(res, Err(Error::EntityNotFound { .. })));

        let res = MessageBmc::update(
            &mm,
            &msg.id,
            MessageForUpdate {
                name: None,
                message: Some("again".to_string()),
            },
        )
        .await;
        assert!(matches!(res, Err(Error::EntityNotFound { .. })));

        Ok(())
    }
}
