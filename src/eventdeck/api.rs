//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for eventdeck operations, whatever the UI.
//!
//! The API facade:
//! - **Dispatches** on [`CollectionKind`] to the command for the concrete record type
//! - **Normalizes inputs** (id strings → [`RecordId`], field arguments → typed drafts and patches)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules; those live in
//! `commands/*.rs` and `store/collection.rs`.
//!
//! ## Field Arguments
//!
//! `add` and `update` accept either a single JSON object:
//!
//! ```text
//! {"code": "NEW10", "discountPercent": 10}
//! ```
//!
//! or `key=value` pairs, where each value is read as JSON when it parses and
//! as a plain string otherwise. Text fields take `code=2026` as the text "2026":
//!
//! ```text
//! code=NEW10 discountPercent=10 maxUses=null
//! ```

use crate::commands::{self, open_collection};
use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::model::{Activity, CollectionKind, Coupon, Record, RecordId, Sponsor, Ticket};
use crate::store::StorageBackend;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Runs `$body` with `$T` bound to the record type of `$kind`.
macro_rules! with_record_type {
    ($kind:expr, $T:ident => $body:expr) => {
        match $kind {
            CollectionKind::Tickets => {
                type $T = Ticket;
                $body
            }
            CollectionKind::Coupons => {
                type $T = Coupon;
                $body
            }
            CollectionKind::Sponsors => {
                type $T = Sponsor;
                $body
            }
            CollectionKind::Activities => {
                type $T = Activity;
                $body
            }
        }
    };
}

/// The main API facade for eventdeck operations.
///
/// Generic over `StorageBackend`: `FsBackend` in the binary, `MemBackend` in tests.
pub struct EventDeckApi<B: StorageBackend> {
    backend: B,
    paths: DeckPaths,
    config: DeckConfig,
}

impl<B: StorageBackend> EventDeckApi<B> {
    pub fn new(backend: B, paths: DeckPaths, config: DeckConfig) -> Self {
        Self {
            backend,
            paths,
            config,
        }
    }

    pub fn list(&self, kind: CollectionKind) -> Result<CmdResult> {
        with_record_type!(kind, T => {
            let coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::list::run(&coll)?.with_kind(kind))
        })
    }

    pub fn get<I: AsRef<str>>(&self, kind: CollectionKind, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        with_record_type!(kind, T => {
            let coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::get::run(&coll, &ids)?.with_kind(kind))
        })
    }

    pub fn add<I: AsRef<str>>(&mut self, kind: CollectionKind, fields: &[I]) -> Result<CmdResult> {
        let fields = parse_fields(fields)?;
        with_record_type!(kind, T => {
            let draft = decode::<T, <T as Record>::Draft>(fields)?;
            let mut coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::add::run(&mut coll, draft)?.with_kind(kind))
        })
    }

    pub fn update<I: AsRef<str>>(
        &mut self,
        kind: CollectionKind,
        id: &str,
        fields: &[I],
    ) -> Result<CmdResult> {
        let id = parse_id(id)?;
        let fields = parse_fields(fields)?;
        with_record_type!(kind, T => {
            let patch = decode::<T, <T as Record>::Patch>(fields)?;
            let mut coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::update::run(&mut coll, &id, patch)?.with_kind(kind))
        })
    }

    pub fn delete<I: AsRef<str>>(&mut self, kind: CollectionKind, ids: &[I]) -> Result<CmdResult> {
        let ids = parse_ids(ids)?;
        with_record_type!(kind, T => {
            let mut coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::delete::run(&mut coll, &ids)?.with_kind(kind))
        })
    }

    pub fn reset(&mut self, kind: CollectionKind) -> Result<CmdResult> {
        with_record_type!(kind, T => {
            let mut coll = open_collection::<T, _>(&self.backend, &self.config)?;
            Ok(commands::reset::run(&mut coll)?.with_kind(kind))
        })
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&self.backend, &self.paths, &self.config)
    }

    pub fn collection_paths(&self, kinds: &[CollectionKind]) -> Result<CmdResult> {
        commands::paths::run(&self.backend, kinds)
    }

    /// Reads or changes `config.json`. Takes effect on the next run.
    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let dir = &self.paths.data_dir;
        let mut config = DeckConfig::load(dir)?;
        let mut result = CmdResult::default();
        match action {
            ConfigAction::ShowAll => {}
            ConfigAction::ShowKey(key) => {
                let value = config
                    .get(&key)
                    .ok_or_else(|| DeckError::Config(format!("Unknown config key: {}", key)))?;
                result.add_message(CmdMessage::info(value));
                return Ok(result);
            }
            ConfigAction::Set(key, value) => {
                config.set(&key, &value)?;
                config.save(dir)?;
                let shown = config.get(&key).unwrap_or(value);
                result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            }
        }
        Ok(result.with_config(config))
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        &self.backend
    }
}

fn parse_id(input: &str) -> Result<RecordId> {
    let id = RecordId::new(input.trim());
    if id.is_empty() {
        return Err(DeckError::Api("Record id cannot be empty".to_string()));
    }
    Ok(id)
}

fn parse_ids<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordId>> {
    if inputs.is_empty() {
        return Err(DeckError::Api("At least one record id is required".to_string()));
    }
    inputs.iter().map(|s| parse_id(s.as_ref())).collect()
}

/// Turn CLI-style field arguments into a JSON object.
fn parse_fields<I: AsRef<str>>(inputs: &[I]) -> Result<Value> {
    // 1. A single argument that looks like an object is taken as JSON verbatim
    if let [only] = inputs {
        let only = only.as_ref().trim();
        if only.starts_with('{') {
            let value: Value = serde_json::from_str(only)
                .map_err(|e| DeckError::Api(format!("Invalid JSON fields: {}", e)))?;
            if !value.is_object() {
                return Err(DeckError::Api("Fields must be a JSON object".to_string()));
            }
            return Ok(value);
        }
    }

    // 2. Otherwise every argument is a key=value pair
    let mut map = Map::new();
    for input in inputs {
        let input = input.as_ref();
        let (key, raw) = input
            .split_once('=')
            .ok_or_else(|| DeckError::Api(format!("Expected key=value, got {:?}", input)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DeckError::Api(format!("Missing field name in {:?}", input)));
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        map.insert(key.to_string(), value);
    }
    Ok(Value::Object(map))
}

fn decode<T: Record, D: DeserializeOwned>(fields: Value) -> Result<D> {
    serde_json::from_value(fields)
        .map_err(|e| DeckError::Api(format!("Invalid {} fields: {}", T::NOUN, e)))
}

pub use crate::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DeckPaths, MessageLevel, RecordView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use serde_json::json;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> EventDeckApi<MemBackend> {
        EventDeckApi::new(
            MemBackend::new(),
            DeckPaths::new(dir.path()),
            DeckConfig::default(),
        )
    }

    #[test]
    fn parse_fields_key_value_pairs() {
        let value = parse_fields(&["code=NEW10", "usedCount=0", "maxUses=null"]).unwrap();
        assert_eq!(
            value,
            json!({"code": "NEW10", "usedCount": 0, "maxUses": null})
        );
    }

    #[test]
    fn parse_fields_keeps_quoted_numbers_as_strings() {
        let value = parse_fields(&["code=\"2026\""]).unwrap();
        assert_eq!(value, json!({"code": "2026"}));
    }

    #[test]
    fn parse_fields_single_json_object() {
        let value = parse_fields(&[r#"{"code": "NEW10"}"#]).unwrap();
        assert_eq!(value, json!({"code": "NEW10"}));
    }

    #[test]
    fn parse_fields_rejects_bare_words() {
        assert!(matches!(parse_fields(&["NEW10"]), Err(DeckError::Api(_))));
    }

    #[test]
    fn parse_ids_rejects_empty() {
        assert!(parse_ids::<&str>(&[]).is_err());
        assert!(parse_ids(&[" "]).is_err());
    }

    #[test]
    fn add_dispatches_to_the_right_collection() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        let res = api
            .add(CollectionKind::Coupons, &["code=NEW10", "usedCount=0"])
            .unwrap();
        assert_eq!(res.kind, Some(CollectionKind::Coupons));
        assert_eq!(res.records[0].value["code"], "NEW10");

        let listed = api.list(CollectionKind::Coupons).unwrap();
        assert_eq!(listed.records.len(), 4);
        assert_eq!(listed.records[3].label, "NEW10");
        assert_eq!(api.list(CollectionKind::Tickets).unwrap().records.len(), 3);
    }

    #[test]
    fn update_applies_patch_fields() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        api.update(CollectionKind::Coupons, "1", &["usedCount=24"])
            .unwrap();
        let res = api.get(CollectionKind::Coupons, &["1"]).unwrap();
        assert_eq!(res.records[0].value["usedCount"], 24);
        assert_eq!(res.records[0].value["code"], "EARLY20");
    }

    #[test]
    fn numeric_looking_text_is_accepted() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        let res = api
            .add(CollectionKind::Tickets, &["name=2026", "price=10", "quantity=5"])
            .unwrap();
        assert_eq!(res.records[0].value["name"], "2026");
        assert_eq!(res.records[0].value["quantity"], 5);

        api.update(CollectionKind::Coupons, "1", &["code=2027"]).unwrap();
        let res = api.get(CollectionKind::Coupons, &["1"]).unwrap();
        assert_eq!(res.records[0].value["code"], "2027");
    }

    #[test]
    fn update_rejects_unknown_field() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        let err = api
            .update(CollectionKind::Sponsors, "1", &["budget=5"])
            .unwrap_err();
        assert!(err.to_string().contains("sponsor"));
    }

    #[test]
    fn update_cannot_change_id() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        assert!(api
            .update(CollectionKind::Tickets, "1", &["id=2"])
            .is_err());
    }

    #[test]
    fn delete_then_get_warns() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);

        api.delete(CollectionKind::Activities, &["2"]).unwrap();
        let res = api.get(CollectionKind::Activities, &["2"]).unwrap();
        assert!(res.records.is_empty());
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn reset_restores_seed() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.delete(CollectionKind::Tickets, &["1", "2", "3"]).unwrap();
        assert!(api.list(CollectionKind::Tickets).unwrap().records.is_empty());

        api.reset(CollectionKind::Tickets).unwrap();
        assert_eq!(api.list(CollectionKind::Tickets).unwrap().records.len(), 3);
    }

    #[test]
    fn config_set_then_show_key() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);

        let res = api
            .config(ConfigAction::Set("seed-demo-data".into(), "no".into()))
            .unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(res.messages[0].content, "seed-demo-data set to false");

        let res = api
            .config(ConfigAction::ShowKey("seed-demo-data".into()))
            .unwrap();
        assert_eq!(res.messages[0].content, "false");
    }

    #[test]
    fn config_bad_set_is_an_error() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);

        let err = api
            .config(ConfigAction::Set("colour".into(), "red".into()))
            .unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
        assert!(api
            .config(ConfigAction::Set("pretty-json".into(), "maybe".into()))
            .is_err());
        assert!(api.config(ConfigAction::ShowKey("colour".into())).is_err());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn config_show_all_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let res = api(&dir).config(ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config, Some(DeckConfig::default()));
        assert!(res.messages.is_empty());
    }

    #[test]
    fn compact_config_writes_single_line() {
        let dir = TempDir::new().unwrap();
        let config = DeckConfig {
            pretty_json: false,
            ..Default::default()
        };
        let api = EventDeckApi::new(MemBackend::new(), DeckPaths::new(dir.path()), config);
        api.list(CollectionKind::Sponsors).unwrap();
        assert!(!api.backend().raw("sponsors").unwrap().contains('\n'));
    }
}
