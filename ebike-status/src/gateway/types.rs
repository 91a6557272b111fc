//! API Gateway proxy integration event shapes.
//!
//! Only the fields this service reads or writes are modelled. Gateway
//! sends `null` rather than `{}` for empty maps, so those fields accept
//! either.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::handler::StatusRequest;
use crate::render::Page;

/// Incoming proxy event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub headers: HashMap<String, String>,

    #[serde(default, deserialize_with = "nullable")]
    pub multi_value_headers: HashMap<String, Vec<String>>,

    #[serde(default, deserialize_with = "nullable")]
    pub query_string_parameters: HashMap<String, String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub is_base64_encoded: bool,
}

/// Outgoing proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    /// Case-insensitive header lookup.
    ///
    /// Single-value headers win; otherwise the first multi-value entry.
    pub fn header(&self, name: &str) -> Option<&str> {
        let single = self
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str());

        single.or_else(|| {
            self.multi_value_headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .and_then(|(_, v)| v.first())
                .map(String::as_str)
        })
    }

    /// Whether this is a `HEAD` request (respond without a body).
    pub fn is_head(&self) -> bool {
        self.http_method
            .as_deref()
            .is_some_and(|m| m.eq_ignore_ascii_case("HEAD"))
    }

    /// Normalise into the handler's request shape.
    pub fn to_status_request(&self) -> StatusRequest {
        StatusRequest {
            accept: self.header("accept").map(String::from),
            user_agent: self.header("user-agent").map(String::from),
        }
    }
}

impl From<Page> for ProxyResponse {
    fn from(page: Page) -> Self {
        let headers = HashMap::from([
            ("Content-Type".to_string(), page.content_type.to_string()),
            ("Vary".to_string(), "Accept, User-Agent".to_string()),
        ]);

        Self {
            status_code: page.status,
            headers,
            body: page.body,
            is_base64_encoded: false,
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
