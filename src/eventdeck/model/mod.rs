//! # Records
//!
//! A [`Record`] is one uniquely identified entry in a collection: a ticket
//! type, a coupon, a sponsor or a scheduled activity. The store itself is
//! generic and only relies on the trait; the concrete types live in the
//! submodules.
//!
//! Each record type declares two companion types:
//!
//! - a **draft** (`Record::Draft`), the record without its id, used by `add`
//! - a **patch** (`Record::Patch`), every field optional, used by `update`
//!
//! Both deserialize with `deny_unknown_fields`, so a patch naming a field the
//! record does not have (including `id`) is rejected before it reaches the
//! store. Persisted field names are camelCase.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod activity;
pub mod coupon;
pub mod sponsor;
pub mod ticket;

pub use activity::{Activity, ActivityDraft, ActivityPatch};
pub use coupon::{Coupon, CouponDraft, CouponPatch};
pub use sponsor::{Sponsor, SponsorDraft, SponsorPatch, SponsorTier};
pub use ticket::{Ticket, TicketDraft, TicketPatch};

/// Identifier of a record within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A storable entry of a collection.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Input to `add`: the record minus its id.
    type Draft: DeserializeOwned;
    /// Input to `update`: a partial set of fields to overwrite.
    type Patch: DeserializeOwned + Default;

    /// Storage key of the collection holding this record type.
    const KEY: &'static str;
    /// Singular name used in messages and errors.
    const NOUN: &'static str;

    fn id(&self) -> &RecordId;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Shallow merge: every field present in the patch replaces the current value.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Checks field-level constraints.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Short human label (name, code, title).
    fn label(&self) -> &str;

    /// Demo contents used when nothing has been persisted yet.
    fn seed() -> Vec<Self>;
}

/// The collections the dashboard keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    #[value(alias = "ticket")]
    Tickets,
    #[value(alias = "coupon")]
    Coupons,
    #[value(alias = "sponsor")]
    Sponsors,
    #[value(alias = "activity")]
    Activities,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Tickets,
        CollectionKind::Coupons,
        CollectionKind::Sponsors,
        CollectionKind::Activities,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CollectionKind::Tickets => Ticket::KEY,
            CollectionKind::Coupons => Coupon::KEY,
            CollectionKind::Sponsors => Sponsor::KEY,
            CollectionKind::Activities => Activity::KEY,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            CollectionKind::Tickets => Ticket::NOUN,
            CollectionKind::Coupons => Coupon::NOUN,
            CollectionKind::Sponsors => Sponsor::NOUN,
            CollectionKind::Activities => Activity::NOUN,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Deserializes a patch field where `null` means "clear" and absence means "keep".
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>` field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Free text typed on the command line: `name=2026` arrives as a JSON number,
/// so numbers and booleans are accepted and kept as their literal text.
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Str(String),
            Num(serde_json::Number),
            Bool(bool),
        }

        Scalar::deserialize(deserializer)
            .map(|scalar| match scalar {
                Scalar::Str(s) => Text(s),
                Scalar::Num(n) => Text(n.to_string()),
                Scalar::Bool(b) => Text(b.to_string()),
            })
            .map_err(|_| serde::de::Error::custom("invalid type: expected text"))
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Text::deserialize(deserializer).map(|t| t.0)
}

/// Use with `#[serde(default, deserialize_with = "opt_text")]`.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Text>::deserialize(deserializer).map(|t| t.map(|t| t.0))
}

/// [`nullable`] for free-text fields.
pub(crate) fn nullable_text<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_text(deserializer).map(Some)
}

pub(crate) fn require_text(noun: &'static str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(crate::error::DeckError::invalid(
            noun,
            format!("{} must not be empty", field),
        ));
    }
    Ok(())
}

pub(crate) fn require_amount(noun: &'static str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(crate::error::DeckError::invalid(
            noun,
            format!("{} must be a non-negative number, got {}", field, value),
        ));
    }
    Ok(())
}
