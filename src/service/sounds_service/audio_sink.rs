use crate::domain::SoundCue;
use async_trait::async_trait;

///
/// Output device collaborator. The host wires in whatever can emit
/// audio in its environment; failures stay inside the dispatcher.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioSink: Send + Sync {
    async fn play(&self, cue: SoundCue) -> anyhow::Result<()>;
}

/// Sink for deployments without audio output.
pub struct NullAudioSink;

#[async_trait]
impl AudioSink for NullAudioSink {
    async fn play(&self, cue: SoundCue) -> anyhow::Result<()> {
        tracing::trace!(%cue, "discarding cue, no audio output");

        Ok(())
    }
}
