use alloc::sync::Arc;

/// Maps an index to the identity of the item currently at that index.
///
/// Renderers receive the key alongside the index so a host can reconcile rendered units across
/// frames (e.g. when items are inserted above the window). Defaults to the index itself.
pub type ItemKeyFn<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

pub fn index_key() -> ItemKeyFn<usize> {
    Arc::new(|i| i)
}
