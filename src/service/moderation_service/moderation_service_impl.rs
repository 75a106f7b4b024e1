use super::{ContentClassifier, ModerationService};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub struct ModerationServiceConfig {
    pub classifier_timeout: Duration,
}

pub struct ModerationServiceImpl {
    config: ModerationServiceConfig,
    classifier: Arc<dyn ContentClassifier>,
}

impl ModerationServiceImpl {
    pub fn new(config: ModerationServiceConfig, classifier: Arc<dyn ContentClassifier>) -> Self {
        Self { config, classifier }
    }
}

#[async_trait]
impl ModerationService for ModerationServiceImpl {
    async fn screen(&self, content: &str) -> bool {
        if content.trim().is_empty() {
            return true;
        }

        tracing::trace!("screening content");

        let classification = tokio::time::timeout(
            self.config.classifier_timeout,
            self.classifier.classify(content),
        )
        .await;

        match classification {
            Ok(Ok(acceptable)) => {
                tracing::trace!(acceptable, "content screened");
                acceptable
            }
            Ok(Err(err)) => {
                tracing::warn!(%err, "classifier failed, accepting content");
                true
            }
            Err(_) => {
                tracing::warn!("classifier timed out, accepting content");
                true
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::moderation_service::MockContentClassifier;

    fn config() -> ModerationServiceConfig {
        ModerationServiceConfig {
            classifier_timeout: Duration::from_secs(5),
        }
    }

    #[tokio::test]
    async fn blank_content_accepted_without_classification() {
        let mut classifier = MockContentClassifier::new();
        classifier.expect_classify().never();
        let service = ModerationServiceImpl::new(config(), Arc::new(classifier));

        assert!(service.screen("  \n ").await);
    }

    #[tokio::test]
    async fn classifier_verdict_is_forwarded() {
        let mut classifier = MockContentClassifier::new();
        classifier
            .expect_classify()
            .once()
            .returning(|_| Ok(false));
        let service = ModerationServiceImpl::new(config(), Arc::new(classifier));

        assert!(!service.screen("questionable content").await);
    }

    #[tokio::test]
    async fn classifier_error_accepts_content() {
        let mut classifier = MockContentClassifier::new();
        classifier
            .expect_classify()
            .once()
            .returning(|_| Err(anyhow::anyhow!("backend unreachable")));
        let service = ModerationServiceImpl::new(config(), Arc::new(classifier));

        assert!(service.screen("a perfectly fine story").await);
    }

    #[tokio::test(start_paused = true)]
    async fn classifier_timeout_accepts_content() {
        struct StalledClassifier;

        #[async_trait]
        impl ContentClassifier for StalledClassifier {
            async fn classify(&self, _content: &str) -> anyhow::Result<bool> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(false)
            }
        }

        let service = ModerationServiceImpl::new(config(), Arc::new(StalledClassifier));

        assert!(service.screen("a perfectly fine story").await);
    }
}
