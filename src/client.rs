//! Main Finnhub API client
use crate::request::Request;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "FINNHUB_API_KEY";

/// Header carrying the API key on every request
pub const TOKEN_HEADER: &str = "x-finnhub-token";

/// The main Finnhub API client.
///
/// Generic over the HTTP client so tests and callers can plug in their own
/// [`Request`] implementation. Use the [`crate::Finnhub`] alias for the
/// default client.
#[derive(Debug, Clone)]
pub struct Finnhub<Client: Request> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

// Implementation for any Client that implements Request
impl<Client: Request> Finnhub<Client> {
    /// Create a new Finnhub client using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// It loads the API key from the `FINNHUB_API_KEY` environment variable using dotenvy.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> crate::Result<Self> {
        Self::from_env()
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new Finnhub client with the default HTTP client.
    ///
    /// You must manually set the API key using [`with_key`](Self::with_key).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client whose API key comes from `FINNHUB_API_KEY`.
    ///
    /// With the `dotenvy` feature a `.env` file is loaded first; variables
    /// already set in the environment win.
    pub fn from_env() -> crate::Result<Self> {
        #[cfg(feature = "dotenvy")]
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(crate::Error::MissingApiKey)?;

        Ok(Self {
            client: Client::new(),
            api_key: Some(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use finnhub::Finnhub;
    ///
    /// let client = Finnhub::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another API root, e.g. a mock server.
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the API root this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl<Client: Request> Default for Finnhub<Client> {
    /// Create a default Finnhub client with no API key set.
    ///
    /// You must call [`with_key`](Self::with_key) to set the API key before making requests.
    fn default() -> Self {
        Self {
            client: Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
