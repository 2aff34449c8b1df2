#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Relative locations such as `./notes.txt` are resolved against this.
    pub base_url: Option<url::Url>,
}

impl LoaderConfig {
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn resolve(&self, url: &str) -> Result<url::Url, crate::error::Error> {
        let parsed = match &self.base_url {
            Some(base) => base.join(url),
            None => url::Url::parse(url),
        };

        parsed.map_err(|e| crate::error::Error::MalformedUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }
}
