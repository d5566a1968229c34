use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::contact::models::{ContactFormData, EmailDraft};
use crate::storage::{Storage, StorageError, EMAIL_DRAFT_KEY, FORM_DRAFT_KEY};

/// What a fresh page load recovers for a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restored {
    pub form: ContactFormData,
    pub last_preview: Option<String>,
}

pub async fn save_form(
    storage: &dyn Storage,
    visitor: Uuid,
    data: &ContactFormData,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(data)?;
    storage.set_item(visitor, FORM_DRAFT_KEY, json).await
}

/// Persists the form data and the draft built from it, in that order.
pub async fn save_draft(
    storage: &dyn Storage,
    visitor: Uuid,
    data: &ContactFormData,
    draft: &EmailDraft,
) -> Result<(), StorageError> {
    save_form(storage, visitor, data).await?;
    let json = serde_json::to_string(draft)?;
    storage.set_item(visitor, EMAIL_DRAFT_KEY, json).await
}

/// Best-effort restore. Anything unreadable is logged as a warning and
/// treated as absent; restoration never fails the page.
pub async fn restore(storage: &dyn Storage, visitor: Uuid) -> Restored {
    let form = match read(storage, visitor, FORM_DRAFT_KEY).await {
        Some(raw) => parse_form(&raw).unwrap_or_else(|e| {
            warn!("Could not restore contact draft: {e}");
            ContactFormData::default()
        }),
        None => ContactFormData::default(),
    };

    let last_preview = match read(storage, visitor, EMAIL_DRAFT_KEY).await {
        Some(raw) => parse_preview(&raw).unwrap_or_else(|e| {
            warn!("Could not restore contact draft: {e}");
            None
        }),
        None => None,
    };

    Restored { form, last_preview }
}

async fn read(storage: &dyn Storage, visitor: Uuid, key: &str) -> Option<String> {
    storage.get_item(visitor, key).await.unwrap_or_else(|e| {
        warn!("Could not read {key} for visitor {visitor}: {e}");
        None
    })
}

/// Takes each field only if it is stored as a string; others stay empty.
fn parse_form(raw: &str) -> Result<ContactFormData, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Ok(ContactFormData {
        name: field("name"),
        email: field("email"),
        topic: field("topic"),
        message: field("message"),
    })
}

fn parse_preview(raw: &str) -> Result<Option<String>, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(value
        .get("preview")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::draft::draft_for;
    use crate::storage::MemoryStorage;

    fn sample() -> ContactFormData {
        ContactFormData {
            name: "Al".into(),
            email: "a@b.com".into(),
            topic: "job".into(),
            message: "Looking for an internship!".into(),
        }
    }

    #[tokio::test]
    async fn test_form_round_trips_all_four_fields() {
        let storage = MemoryStorage::new();
        let visitor = Uuid::new_v4();
        save_form(&storage, visitor, &sample()).await.unwrap();

        let restored = restore(&storage, visitor).await;
        assert_eq!(restored.form, sample());
        assert_eq!(restored.last_preview, None);
    }

    #[tokio::test]
    async fn test_draft_preview_is_restored() {
        let storage = MemoryStorage::new();
        let visitor = Uuid::new_v4();
        let draft = draft_for(&sample()).unwrap();
        save_draft(&storage, visitor, &sample(), &draft).await.unwrap();

        let restored = restore(&storage, visitor).await;
        assert_eq!(restored.last_preview.as_deref(), Some(draft.preview.as_str()));
    }

    #[tokio::test]
    async fn test_malformed_json_is_swallowed() {
        let storage = MemoryStorage::new();
        let visitor = Uuid::new_v4();
        storage
            .set_item(visitor, FORM_DRAFT_KEY, "{oops".to_string())
            .await
            .unwrap();
        storage
            .set_item(visitor, EMAIL_DRAFT_KEY, "[".to_string())
            .await
            .unwrap();

        assert_eq!(restore(&storage, visitor).await, Restored::default());
    }

    #[test]
    fn test_non_string_fields_are_ignored() {
        let form = parse_form(r#"{"name":"Al","email":42,"topic":null}"#).unwrap();
        assert_eq!(form.name, "Al");
        assert!(form.email.is_empty());
        assert!(form.topic.is_empty());
    }

    #[test]
    fn test_empty_preview_is_not_restored() {
        assert_eq!(parse_preview(r#"{"preview":""}"#).unwrap(), None);
        assert_eq!(parse_preview("null").unwrap(), None);
    }
}
