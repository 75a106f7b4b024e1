use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModerationService: Send + Sync {
    ///
    /// Screen member content before it enters the feed. Fails open:
    /// classifier errors and timeouts accept the content so the club
    /// never stalls on a flaky backend.
    ///
    /// ### Returns
    /// true when the content may be published
    ///
    async fn screen(&self, content: &str) -> bool;
}
