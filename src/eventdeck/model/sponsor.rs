use super::{nullable, opt_text, require_amount, require_text, text, Record, RecordId};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: RecordId,
    pub name: String,
    pub tier: SponsorTier,
    #[serde(default)]
    pub contribution: f64,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SponsorDraft {
    #[serde(deserialize_with = "text")]
    pub name: String,
    pub tier: SponsorTier,
    #[serde(default)]
    pub contribution: f64,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SponsorPatch {
    #[serde(default, deserialize_with = "opt_text")]
    pub name: Option<String>,
    pub tier: Option<SponsorTier>,
    pub contribution: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub contact_email: Option<Option<String>>,
}

impl Record for Sponsor {
    type Draft = SponsorDraft;
    type Patch = SponsorPatch;

    const KEY: &'static str = "sponsors";
    const NOUN: &'static str = "sponsor";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: SponsorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            tier: draft.tier,
            contribution: draft.contribution,
            website: draft.website,
            contact_email: draft.contact_email,
        }
    }

    fn apply_patch(&mut self, patch: SponsorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(tier) = patch.tier {
            self.tier = tier;
        }
        if let Some(contribution) = patch.contribution {
            self.contribution = contribution;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
        if let Some(email) = patch.contact_email {
            self.contact_email = email;
        }
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::NOUN, "name", &self.name)?;
        require_amount(Self::NOUN, "contribution", self.contribution)
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        vec![
            Sponsor {
                id: RecordId::from("1"),
                name: "Northwind Cloud".to_string(),
                tier: SponsorTier::Platinum,
                contribution: 25_000.0,
                website: Some("https://northwind.example".to_string()),
                contact_email: Some("events@northwind.example".to_string()),
            },
            Sponsor {
                id: RecordId::from("2"),
                name: "Blue Harbor Labs".to_string(),
                tier: SponsorTier::Gold,
                contribution: 10_000.0,
                website: Some("https://blueharbor.example".to_string()),
                contact_email: None,
            },
            Sponsor {
                id: RecordId::from("3"),
                name: "Cedar Print Co.".to_string(),
                tier: SponsorTier::Bronze,
                contribution: 2_500.0,
                website: None,
                contact_email: None,
            },
        ]
    }
}
