use super::{AudioSink, SoundsService};
use crate::{domain::SoundCue, session::Session};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SoundsServiceImpl {
    session: Arc<Session>,
    sink: Arc<dyn AudioSink>,
}

impl SoundsServiceImpl {
    pub fn new(session: Arc<Session>, sink: Arc<dyn AudioSink>) -> Self {
        Self { session, sink }
    }
}

#[async_trait]
impl SoundsService for SoundsServiceImpl {
    async fn play(&self, cue: SoundCue) {
        if !self.session.sound_enabled() {
            tracing::trace!(%cue, "sound muted");
            return;
        }

        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(err) = sink.play(cue).await {
                tracing::debug!(%err, %cue, "sound playback failed");
            }
        });
    }
}
