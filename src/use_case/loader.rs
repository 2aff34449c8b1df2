/// Loads a text resource with a single GET request.
///
/// Only a `200` response yields its body. Any other status fails with
/// [`Error::Status`](crate::error::Error::Status), and an exchange that never
/// completes fails with [`Error::Transport`](crate::error::Error::Transport).
///
/// ```no_run
/// # async fn run() -> Result<(), text_loader::error::Error> {
/// let loader = text_loader::Loader::new();
/// let text = loader.load("https://example.com/foobar.txt").await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Loader {
    pub http_repository: std::sync::Arc<dyn crate::repository::http::HttpRepository + Send + Sync>,
    pub config: crate::config::LoaderConfig,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::with_config(crate::config::LoaderConfig::default())
    }

    pub fn with_config(config: crate::config::LoaderConfig) -> Self {
        Self::with_repository(
            std::sync::Arc::new(crate::repository::http::HttpRepositoryImpl::default()),
            config,
        )
    }

    pub fn with_repository(
        http_repository: std::sync::Arc<dyn crate::repository::http::HttpRepository + Send + Sync>,
        config: crate::config::LoaderConfig,
    ) -> Self {
        Self {
            http_repository,
            config,
        }
    }

    pub async fn load(&self, url: &str) -> Result<String, crate::error::Error> {
        let url = self.config.resolve(url)?;
        self.exchange(url).await
    }

    /// Entry point for callers that hand over untyped values, e.g. JSON-RPC
    /// parameters. A non-string is rejected here, before any future exists.
    pub fn load_value(
        &self,
        url: &serde_json::Value,
    ) -> Result<
        impl Future<Output = Result<String, crate::error::Error>> + Send + use<>,
        crate::error::Error,
    > {
        let url = url.as_str().ok_or(crate::error::Error::InvalidUrlType)?;
        let url = self.config.resolve(url)?;

        Ok(self.exchange(url))
    }

    // The exchange runs on its own task and reports back over a oneshot, so
    // dropping the returned future does not abort a request in flight.
    fn exchange(
        &self,
        url: url::Url,
    ) -> impl Future<Output = Result<String, crate::error::Error>> + Send + use<> {
        let http_repository = self.http_repository.clone();

        async move {
            let (tx, rx) = tokio::sync::oneshot::channel();

            tokio::spawn(async move {
                let outcome = http_repository.get(&url).await;
                let _ = tx.send(outcome);
            });

            let response = rx.await.map_err(|e| {
                tracing::error!("{}", e);
                crate::error::Error::Transport
            })??;

            if response.is_success_200() {
                Ok(response.body)
            } else {
                Err(crate::error::Error::Status {
                    status: response.status,
                    status_text: response.status_text,
                })
            }
        }
    }
}
