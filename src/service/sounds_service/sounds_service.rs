use crate::domain::SoundCue;
use async_trait::async_trait;

///
/// Best-effort audio cue dispatcher. Playback never blocks the caller
/// and never surfaces an error.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SoundsService: Send + Sync {
    async fn play(&self, cue: SoundCue);
}
