use super::{nullable, opt_text, require_text, text, Record, RecordId};
use crate::error::{DeckError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A discount code redeemable at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: RecordId,
    pub code: String,
    #[serde(default)]
    pub discount_percent: u8,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CouponDraft {
    #[serde(deserialize_with = "text")]
    pub code: String,
    #[serde(default)]
    pub discount_percent: u8,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl CouponDraft {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            discount_percent: 0,
            max_uses: None,
            used_count: 0,
            expires_at: None,
            active: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CouponPatch {
    #[serde(default, deserialize_with = "opt_text")]
    pub code: Option<String>,
    pub discount_percent: Option<u8>,
    #[serde(default, deserialize_with = "nullable")]
    pub max_uses: Option<Option<u32>>,
    pub used_count: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub expires_at: Option<Option<DateTime<Utc>>>,
    pub active: Option<bool>,
}

impl Record for Coupon {
    type Draft = CouponDraft;
    type Patch = CouponPatch;

    const KEY: &'static str = "coupons";
    const NOUN: &'static str = "coupon";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: CouponDraft) -> Self {
        Self {
            id,
            code: draft.code,
            discount_percent: draft.discount_percent,
            max_uses: draft.max_uses,
            used_count: draft.used_count,
            expires_at: draft.expires_at,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: CouponPatch) {
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(discount) = patch.discount_percent {
            self.discount_percent = discount;
        }
        if let Some(max_uses) = patch.max_uses {
            self.max_uses = max_uses;
        }
        if let Some(used) = patch.used_count {
            self.used_count = used;
        }
        if let Some(expires_at) = patch.expires_at {
            self.expires_at = expires_at;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    fn validate(&self) -> Result<()> {
        require_text(Self::NOUN, "code", &self.code)?;
        if self.discount_percent > 100 {
            return Err(DeckError::invalid(
                Self::NOUN,
                format!("discountPercent must be at most 100, got {}", self.discount_percent),
            ));
        }
        if let Some(max) = self.max_uses {
            if self.used_count > max {
                return Err(DeckError::invalid(
                    Self::NOUN,
                    format!("usedCount {} exceeds maxUses {}", self.used_count, max),
                ));
            }
        }
        Ok(())
    }

    fn label(&self) -> &str {
        &self.code
    }

    fn seed() -> Vec<Self> {
        vec![
            Coupon {
                id: RecordId::from("1"),
                code: "EARLY20".to_string(),
                discount_percent: 20,
                max_uses: Some(100),
                used_count: 23,
                expires_at: None,
                active: true,
            },
            Coupon {
                id: RecordId::from("2"),
                code: "VIP50".to_string(),
                discount_percent: 50,
                max_uses: Some(20),
                used_count: 5,
                expires_at: None,
                active: true,
            },
            Coupon {
                id: RecordId::from("3"),
                code: "STUDENT15".to_string(),
                discount_percent: 15,
                max_uses: None,
                used_count: 41,
                expires_at: None,
                active: true,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_fills_defaults() {
        let draft: CouponDraft =
            serde_json::from_value(json!({"code": "NEW10", "usedCount": 0})).unwrap();
        let coupon = Coupon::from_draft(RecordId::from("9"), draft);
        assert_eq!(coupon.code, "NEW10");
        assert_eq!(coupon.discount_percent, 0);
        assert!(coupon.active);
        assert_eq!(coupon.max_uses, None);
    }

    #[test]
    fn draft_rejects_id_field() {
        let res: std::result::Result<CouponDraft, _> =
            serde_json::from_value(json!({"id": "1", "code": "X"}));
        assert!(res.is_err());
    }

    #[test]
    fn patch_rejects_unknown_field() {
        let res: std::result::Result<CouponPatch, _> =
            serde_json::from_value(json!({"usedCounts": 3}));
        assert!(res.is_err());
    }

    #[test]
    fn patch_null_clears_nullable_field() {
        let mut coupon = Coupon::seed().remove(0);
        let patch: CouponPatch = serde_json::from_value(json!({"maxUses": null})).unwrap();
        coupon.apply_patch(patch);
        assert_eq!(coupon.max_uses, None);
    }

    #[test]
    fn absent_nullable_field_is_kept() {
        let mut coupon = Coupon::seed().remove(0);
        let patch: CouponPatch = serde_json::from_value(json!({"usedCount": 24})).unwrap();
        coupon.apply_patch(patch);
        assert_eq!(coupon.max_uses, Some(100));
        assert_eq!(coupon.used_count, 24);
        assert_eq!(coupon.code, "EARLY20");
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(&Coupon::seed()[0]).unwrap();
        assert_eq!(value["usedCount"], 23);
        assert_eq!(value["discountPercent"], 20);
        assert_eq!(value["id"], "1");
    }

    #[test]
    fn validate_rejects_overused_coupon() {
        let mut coupon = Coupon::seed().remove(1);
        coupon.used_count = 21;
        assert!(matches!(
            coupon.validate(),
            Err(DeckError::Invalid { noun: "coupon", .. })
        ));
    }

    #[test]
    fn validate_rejects_discount_over_hundred() {
        let mut coupon = Coupon::seed().remove(0);
        coupon.discount_percent = 101;
        assert!(coupon.validate().is_err());
    }}
