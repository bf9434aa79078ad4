use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CollectionKind;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(backend: &B, kinds: &[CollectionKind]) -> Result<CmdResult> {
    let kinds = if kinds.is_empty() {
        CollectionKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };

    let mut paths = Vec::with_capacity(kinds.len());
    for kind in &kinds {
        paths.push(backend.location(kind.key())?);
    }
    Ok(CmdResult::default().with_paths(paths))
}
