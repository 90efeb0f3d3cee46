// ABOUTME: Configuration for fetching spell pages: FetchOptions and its fluent builder.
// ABOUTME: Defaults match a plain GET: no timeout, a spellbook User-Agent, no extra headers.

use std::collections::HashMap;
use std::time::Duration;

/// Options for the single page fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// `None` waits on the transport indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub headers: HashMap<String, String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("spellbook/{}", env!("CARGO_PKG_VERSION")),
            headers: HashMap::new(),
        }
    }
}

impl FetchOptions {
    pub fn builder() -> FetchOptionsBuilder {
        FetchOptionsBuilder::new()
    }
}

/// Builder for [`FetchOptions`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptionsBuilder {
    opts: FetchOptions,
}

impl FetchOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> FetchOptions {
        self.opts
    }
}
