use async_trait::async_trait;
use gloo_net::http::Request;
use stream_core::{FetchError, StreamSnapshot, StreamSource};

/// Path of one stream's contents, relative to the API base.
pub fn stream_path(encoded_stream_name: &str) -> String {
    format!("/api/stream/{encoded_stream_name}")
}

/// Reads stream contents from `GET {api_base}/api/stream/{name}`.
#[derive(Debug, Clone)]
pub struct HttpStreamSource {
    api_base: String,
}

impl HttpStreamSource {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    pub fn stream_url(&self, stream_name: &str) -> String {
        let encoded = String::from(js_sys::encode_uri_component(stream_name));
        format!("{}{}", self.api_base, stream_path(&encoded))
    }
}

#[async_trait(?Send)]
impl StreamSource for HttpStreamSource {
    async fn fetch_stream(&self, stream_name: &str) -> Result<StreamSnapshot, FetchError> {
        let url = self.stream_url(stream_name);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        // Decode elements one by one so a single odd message stays contained.
        let values: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(StreamSnapshot::from_values(values))
    }
}
