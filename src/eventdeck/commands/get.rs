use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    coll: &Collection<T, B>,
    ids: &[RecordId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        match coll.get(id) {
            Some(record) => result.push_record(record)?,
            None => result.add_message(CmdMessage::warning(format!(
                "No {} with id {}",
                T::NOUN,
                id
            ))),
        }
    }
    Ok(result)
}
