use super::{opt_text, require_amount, require_text, text, Record, RecordId};
use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};

/// A ticket type on sale for the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub sold: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketDraft {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub sold: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketPatch {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub sold: Option<u32>,
    pub active: Option<bool>,
}

impl Record for Ticket {
    type Draft = TicketDraft;
    type Patch = TicketPatch;

    const KEY: &'static str = "tickets";
    const NOUN: &'static str = "ticket";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: TicketDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            quantity: draft.quantity,
            sold: draft.sold,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: TicketPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(sold) = patch.sold {
            self.sold = sold;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::NOUN, "name", &self.name)?;
        require_amount(Self::NOUN, "price", self.price)?;
        if self.sold > self.quantity {
            return Err(DeckError::invalid(
                Self::NOUN,
                format!("sold {} exceeds quantity {}", self.sold, self.quantity),
            ));
        }
        Ok(())
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        vec![
            Ticket {
                id: RecordId::from("1"),
                name: "General Admission".to_string(),
                description: "Access to all talks and the expo floor".to_string(),
                price: 49.0,
                quantity: 500,
                sold: 320,
                active: true,
            },
            Ticket {
                id: RecordId::from("2"),
                name: "VIP".to_string(),
                description: "Front rows, lounge access and speaker dinner".to_string(),
                price: 149.0,
                quantity: 100,
                sold: 64,
                active: true,
            },
            Ticket {
                id: RecordId::from("3"),
                name: "Student".to_string(),
                description: "Valid student ID required at check-in".to_string(),
                price: 19.0,
                quantity: 200,
                sold: 143,
                active: true,
            },
        ]
    }
}
