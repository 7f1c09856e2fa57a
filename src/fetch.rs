use reqwest::blocking::Client;
use url::Url;

use crate::{Config, Error, Result};

pub trait Fetch {
    /// Download the page at `url`, returning the raw body.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::network(config.source_url.as_str(), e))?;

        Ok(HttpFetcher { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let body = self
            .client
            .get(url.clone())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(|e| Error::network(url.as_str(), e))?;

        Ok(body.to_vec())
    }
}
