use crate::commands::{capitalize, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Record, RecordId};
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(
    coll: &mut Collection<T, B>,
    ids: &[RecordId],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        match coll.delete(id)? {
            Some(record) => {
                result.add_message(CmdMessage::success(format!(
                    "{} deleted ({}): {}",
                    capitalize(T::NOUN),
                    id,
                    record.label()
                )));
                result.push_record(&record)?;
            }
            None => result.add_message(CmdMessage::warning(format!(
                "No {} with id {}",
                T::NOUN,
                id
            ))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;
    use crate::store::memory::MemBackend;

    #[test]
    fn deletes_several_and_skips_missing() {
        let backend = MemBackend::new();
        let mut coll = Collection::<Activity, _>::open_default(&backend).unwrap();

        let ids = [RecordId::from("1"), RecordId::from("x"), RecordId::from("3")];
        let res = run(&mut coll, &ids).unwrap();

        assert_eq!(res.records.len(), 2);
        assert_eq!(res.messages.len(), 3);
        assert_eq!(coll.len(), 1);
        assert_eq!(coll.items()[0].id, RecordId::from("2"));
    }
}
