static REQWEST_CLIENT: tokio::sync::OnceCell<reqwest::Client> =
    tokio::sync::OnceCell::const_new();

pub async fn get_or_init_reqwest_client() -> Result<&'static reqwest::Client, crate::error::Error>
{
    REQWEST_CLIENT
        .get_or_try_init(|| async {
            let client = reqwest::Client::builder()
                .user_agent(concat!("text-loader/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| {
                    tracing::error!("{}", e);
                    crate::error::Error::InitializeClient(e.to_string())
                })?;

            Ok(client)
        })
        .await
}
