use async_trait::async_trait;

///
/// Pluggable backend answering whether a piece of member content is
/// acceptable. Implementations may call out to a remote model; callers
/// must not rely on them returning quickly.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentClassifier: Send + Sync {
    ///
    /// ### Returns
    /// true when the content is acceptable
    ///
    async fn classify(&self, content: &str) -> anyhow::Result<bool>;
}
