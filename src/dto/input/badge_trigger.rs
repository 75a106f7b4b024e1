use crate::domain::MediaKind;

///
/// Member action the badge engine re-evaluates award rules for. The
/// triggering record is already persisted when evaluation runs, so
/// rules read post-insertion counters.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTrigger {
    PostCreated { media: MediaKind },
    IdeaCreated,
    LikeReceived,
}
