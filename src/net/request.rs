use crate::net::Headers;

const DEFAULT_METHOD: &str = "GET";

/// Description of one outbound HTTP request.
///
/// An empty `method` means `GET`. The body is only sent when it is not
/// empty, and no `Content-Type` is ever inferred from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSpec {
    /// Absolute http(s) URL, including any query string
    pub url: String,
    /// HTTP verb, sent exactly as given
    pub method: String,
    /// Headers to send; a name with several values is sent several times
    pub headers: Headers,
    /// Raw request payload
    pub body: Vec<u8>,
}

impl RequestSpec {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = method.into();
        self
    }

    pub fn header<V: Into<String>>(mut self, name: &str, value: V) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body<B: Into<Vec<u8>>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Method that will actually go on the wire.
    pub fn effective_method(&self) -> &str {
        if self.method.trim().is_empty() {
            DEFAULT_METHOD
        } else {
            &self.method
        }
    }
}
