use crate::commands::{capitalize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    coll: &mut Collection<T, B>,
    id: &RecordId,
    patch: T::Patch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match coll.update(id, patch)? {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "{} updated ({}): {}",
                capitalize(T::NOUN),
                id,
                record.label()
            )));
            result.push_record(&record)?;
        }
        None => result.add_message(CmdMessage::warning(format!(
            "No {} with id {}, nothing updated",
            T::NOUN,
            id
        ))),
    }
    Ok(result)
}
