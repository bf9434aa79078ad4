use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::{Collection, StorageBackend};

pub fn run<T: Record, B: StorageBackend>(coll: &mut Collection<T, B>) -> Result<CmdResult> {
    coll.reset()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reset {} to {} seed record(s)",
        coll.key(),
        coll.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coupon, CouponDraft};
    use crate::store::memory::MemBackend;

    #[test]
    fn reset_drops_added_records() {
        let backend = MemBackend::new();
        let mut coll = Collection::<Coupon, _>::open_default(&backend).unwrap();
        coll.add(CouponDraft::new("TEMP")).unwrap();

        let res = run(&mut coll).unwrap();
        assert_eq!(coll.items(), Coupon::seed().as_slice());
        assert!(res.messages[0].content.contains("3 seed record"));
    }
}
