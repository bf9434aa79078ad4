use crate::commands::{open_collection, CmdMessage, CmdResult, DeckPaths};
use crate::config::DeckConfig;
use crate::error::Result;
use crate::model::{Activity, Coupon, Record, Sponsor, Ticket};
use crate::store::StorageBackend;
use std::fs;

/// Create the data directory and seed every collection that is not stored yet.
pub fn run<B: StorageBackend>(
    backend: &B,
    paths: &DeckPaths,
    config: &DeckConfig,
) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized eventdeck store at {}",
        paths.data_dir.display()
    )));

    report::<Ticket, B>(backend, config, &mut result)?;
    report::<Coupon, B>(backend, config, &mut result)?;
    report::<Sponsor, B>(backend, config, &mut result)?;
    report::<Activity, B>(backend, config, &mut result)?;
    Ok(result)
}

fn report<T: Record, B: StorageBackend>(
    backend: &B,
    config: &DeckConfig,
    result: &mut CmdResult,
) -> Result<()> {
    let coll = open_collection::<T, _>(backend, config)?;
    result.add_message(CmdMessage::info(format!(
        "{}: {} record(s)",
        T::KEY,
        coll.len()
    )));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use tempfile::TempDir;

    #[test]
    fn seeds_all_collections() {
        let dir = TempDir::new().unwrap();
        let paths = DeckPaths::new(dir.path().join("data"));
        let backend = MemBackend::new();

        let res = run(&backend, &paths, &DeckConfig::default()).unwrap();

        assert!(paths.data_dir.exists());
        assert_eq!(res.messages.len(), 5);
        for key in ["tickets", "coupons", "sponsors", "activities"] {
            assert!(backend.raw(key).is_some(), "{} not seeded", key);
        }
    }

    #[test]
    fn keeps_existing_data() {
        let dir = TempDir::new().unwrap();
        let paths = DeckPaths::new(dir.path());
        let backend = MemBackend::new();
        backend.insert_raw("tickets", "[]");

        let res = run(&backend, &paths, &DeckConfig::default()).unwrap();
        assert_eq!(backend.raw("tickets").as_deref(), Some("[]"));
        assert!(res
            .messages
            .iter()
            .any(|m| m.content == "tickets: 0 record(s)"));
    }
}
