use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(coll: &Collection<T, B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for record in coll.iter() {
        result.push_record(record)?;
    }
    Ok(result)
}
