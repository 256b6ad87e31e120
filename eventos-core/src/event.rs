//! Event records and the request shapes that create or modify them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::instant;

/// One listed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Card image reference
    #[serde(rename = "imgURL", default)]
    pub img_url: String,
    /// Target instant, kept verbatim as `YYYY-MM-DDTHH:mm:ss[.sss]Z`
    #[serde(rename = "dateTime")]
    pub date_time: String,
}

/// Fields supplied when creating an event.
///
/// Everything is optional on the wire so that a missing field is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imgURL", skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl NewEvent {
    /// Check required fields and the dateTime grammar, in that order.
    ///
    /// On success returns the record that would be stored under `id`.
    pub fn into_record(self, id: u64) -> Result<EventRecord, ValidationError> {
        let title = required(self.title).ok_or(ValidationError::MissingTitle)?;
        let category = required(self.category).ok_or(ValidationError::MissingCategory)?;
        let date_time = required(self.date_time).ok_or(ValidationError::MissingDateTime)?;
        validate_date_time(&date_time)?;

        Ok(EventRecord {
            id,
            title,
            category,
            description: self.description.unwrap_or_default(),
            img_url: self.img_url.unwrap_or_default(),
            date_time,
        })
    }

    /// Validate without consuming, used before any persistence work starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.clone().into_record(0).map(|_| ())
    }
}

/// Partial update: only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imgURL", skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.img_url.is_none()
            && self.date_time.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(date_time) = &self.date_time {
            validate_date_time(date_time)?;
        }
        if self.title.as_deref() == Some("") {
            return Err(ValidationError::MissingTitle);
        }
        if self.category.as_deref() == Some("") {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Merge supplied fields into `record`. Call `validate` first.
    pub fn apply(self, record: &mut EventRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(img_url) = self.img_url {
            record.img_url = img_url;
        }
        if let Some(date_time) = self.date_time {
            record.date_time = date_time;
        }
    }
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

fn validate_date_time(text: &str) -> Result<(), ValidationError> {
    instant::parse_utc(text)
        .map(|_| ())
        .map_err(ValidationError::InvalidDateTime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TargetError;

    fn new_event() -> NewEvent {
        NewEvent {
            title: Some("Concierto".to_string()),
            category: Some("music".to_string()),
            description: None,
            img_url: None,
            date_time: Some("2025-10-16T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_into_record_defaults_optional_fields() {
        let record = new_event().into_record(7).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.description, "");
        assert_eq!(record.img_url, "");
        assert_eq!(record.date_time, "2025-10-16T10:00:00Z");
    }

    #[test]
    fn test_required_fields_checked_in_order() {
        let mut event = new_event();
        event.title = None;
        event.date_time = None;
        assert_eq!(event.validate(), Err(ValidationError::MissingTitle));

        let mut event = new_event();
        event.category = Some(String::new());
        assert_eq!(event.validate(), Err(ValidationError::MissingCategory));

        let mut event = new_event();
        event.date_time = None;
        assert_eq!(event.validate(), Err(ValidationError::MissingDateTime));
    }

    #[test]
    fn test_malformed_date_time_rejected() {
        let mut event = new_event();
        event.date_time = Some("16/10/2025 10:00".to_string());
        assert!(matches!(
            event.validate(),
            Err(ValidationError::InvalidDateTime(TargetError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_patch_merges_only_supplied_fields() {
        let mut record = new_event().into_record(1).unwrap();
        let patch = EventPatch {
            description: Some("Aforo limitado".to_string()),
            ..Default::default()
        };
        patch.validate().unwrap();
        patch.apply(&mut record);

        assert_eq!(record.title, "Concierto");
        assert_eq!(record.description, "Aforo limitado");
    }

    #[test]
    fn test_patch_rejects_bad_date_time() {
        let patch = EventPatch {
            date_time: Some("2025-13-40T99:00:00Z".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ValidationError::InvalidDateTime(TargetError::UnparsableInstant(_)))
        ));
    }

    #[test]
    fn test_wire_field_names() {
        let record = new_event().into_record(3).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["imgURL"], "");
        assert_eq!(json["dateTime"], "2025-10-16T10:00:00Z");
        assert!(json.get("img_url").is_none());
    }
}
