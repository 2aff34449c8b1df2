/// One GET exchange. Any response that arrives is `Ok`, whatever its status;
/// `Err` means the exchange never completed.
#[async_trait::async_trait]
pub trait HttpRepository: std::fmt::Debug + Send + Sync {
    async fn get(
        &self,
        url: &url::Url,
    ) -> Result<crate::record::http::HttpResponseRecord, crate::error::Error>;
}

#[derive(Debug, Default)]
pub struct HttpRepositoryImpl {}

#[async_trait::async_trait]
impl HttpRepository for HttpRepositoryImpl {
    async fn get(
        &self,
        url: &url::Url,
    ) -> Result<crate::record::http::HttpResponseRecord, crate::error::Error> {
        let client = crate::cache::get_or_init_reqwest_client().await?;

        tracing::debug!(url = %url, "Sending GET request.");

        let response = client.get(url.clone()).send().await.map_err(|e| {
            tracing::error!(url = %url, "{}", e);
            crate::error::Error::Transport
        })?;

        let status = response.status();

        // hyper only records the phrase when it differs from the canonical one.
        let status_text = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
            .or_else(|| status.canonical_reason())
            .unwrap_or_default()
            .to_owned();

        let body = response.text().await.map_err(|e| {
            tracing::error!(url = %url, "{}", e);
            crate::error::Error::Transport
        })?;

        tracing::debug!(url = %url, status = status.as_u16(), "Received response.");

        Ok(crate::record::http::HttpResponseRecord {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}
