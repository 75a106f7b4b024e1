use uuid::Uuid;

///
/// Target of a clear operation. A single shared session clears with
/// [ClearScope::All]: the whole log goes, broadcasts included.
/// [ClearScope::Mine] is the per-recipient variant a multi-user
/// deployment wires instead.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    All,
    Mine(Uuid),
}
