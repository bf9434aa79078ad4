use crate::commands::{capitalize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    coll: &mut Collection<T, B>,
    draft: T::Draft,
) -> Result<CmdResult> {
    let record = coll.add(draft)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} added ({}): {}",
        capitalize(T::NOUN),
        record.id(),
        record.label()
    )));
    result.push_record(&record)?;
    Ok(result)
}
