use super::{nullable, nullable_text, opt_text, require_text, text, Record, RecordId};
use crate::error::{DeckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A talk, workshop or break on the event agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActivityDraft {
    #[serde(deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "text")]
    pub location: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub speaker: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActivityPatch {
    #[serde(default, deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub speaker: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub capacity: Option<Option<u32>>,
}

impl Record for Activity {
    type Draft = ActivityDraft;
    type Patch = ActivityPatch;

    const KEY: &'static str = "activities";
    const NOUN: &'static str = "activity";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: ActivityDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            location: draft.location,
            speaker: draft.speaker,
            capacity: draft.capacity,
        }
    }

    fn apply_patch(&mut self, patch: ActivityPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(starts_at) = patch.starts_at {
            self.starts_at = starts_at;
        }
        if let Some(ends_at) = patch.ends_at {
            self.ends_at = ends_at;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(speaker) = patch.speaker {
            self.speaker = speaker;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::NOUN, "title", &self.title)?;
        if self.ends_at < self.starts_at {
            return Err(DeckError::invalid(
                Self::NOUN,
                format!(
                    "endsAt {} is before startsAt {}",
                    self.ends_at.to_rfc3339(),
                    self.starts_at.to_rfc3339()
                ),
            ));
        }
        Ok(())
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn seed() -> Vec<Self> {
        vec![
            Activity {
                id: RecordId::from("1"),
                title: "Opening Keynote".to_string(),
                description: "Welcome and state of the community".to_string(),
                starts_at: at(1_773_478_800),
                ends_at: at(1_773_484_200),
                location: "Main Hall".to_string(),
                speaker: Some("Dana Reyes".to_string()),
                capacity: Some(500),
            },
            Activity {
                id: RecordId::from("2"),
                title: "Hands-on Workshop".to_string(),
                description: "Bring a laptop".to_string(),
                starts_at: at(1_773_486_000),
                ends_at: at(1_773_489_600),
                location: "Room B".to_string(),
                speaker: Some("Sam Okafor".to_string()),
                capacity: Some(40),
            },
            Activity {
                id: RecordId::from("3"),
                title: "Networking Lunch".to_string(),
                description: String::new(),
                starts_at: at(1_773_489_600),
                ends_at: at(1_773_496_800),
                location: "Expo Floor".to_string(),
                speaker: None,
                capacity: None,
            },
        ]
    }
}

fn at(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}
