//! Fetch lifecycle and display state for the post viewer.
//!
//! # Design
//! `PostViewer` is a state machine over {Uninitialized, Loading, Loaded,
//! Failed}. Mounting starts exactly one fetch, gated on a configured base
//! address; when the address is absent the viewer fails immediately and no
//! request is ever built. The host executes the returned `HttpRequest` and
//! feeds the outcome back through `complete`.
//!
//! Every fetch attempt carries a `FetchTicket`. A completion whose ticket is
//! not the current attempt (the address was reconfigured, or the viewer was
//! torn down in the meantime) is discarded instead of clobbering the newer
//! state. A fixed configuration therefore fetches exactly once per mount;
//! only a base-address change re-triggers the fetch.

use crate::client::PostClient;
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Post;

/// Display state of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Uninitialized,
    Loading,
    Loaded(Vec<Post>),
    Failed(FetchError),
}

/// Identifies one fetch attempt. Completions presenting a ticket from an
/// earlier attempt are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Failure reported by the host's transport, before any response existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request was sent but nothing came back (unreachable host,
    /// connection refused, timed out).
    NoResponse,

    /// The request could not be constructed or sent at all.
    Setup(String),
}

/// One viewer instance: holds the configured address, the current display
/// state, and the attempt counter used to fence stale completions.
#[derive(Debug)]
pub struct PostViewer {
    configured_url: Option<String>,
    client: Option<PostClient>,
    state: ViewState,
    attempt: u64,
    mounted: bool,
}

impl PostViewer {
    pub fn new() -> Self {
        Self {
            configured_url: None,
            client: None,
            state: ViewState::Uninitialized,
            attempt: 0,
            mounted: false,
        }
    }

    /// Mount the viewer with the operator-supplied base address.
    ///
    /// With an address present, transitions to `Loading` and returns the
    /// request for the host to execute. With no address, transitions
    /// directly to `Failed(ConfigMissing)` and returns `None`; the network
    /// is never touched.
    pub fn mount(&mut self, base_url: Option<&str>) -> Option<(FetchTicket, HttpRequest)> {
        self.mounted = true;
        self.begin_fetch(base_url)
    }

    /// Apply a configuration change.
    ///
    /// An unchanged address (modulo trailing-slash normalization) is a
    /// no-op; a changed one starts a fresh fetch attempt, invalidating any
    /// ticket still in flight.
    pub fn reconfigure(&mut self, base_url: Option<&str>) -> Option<(FetchTicket, HttpRequest)> {
        if !self.mounted {
            return None;
        }
        let next = base_url.map(|u| u.trim_end_matches('/'));
        let current = self.client.as_ref().map(PostClient::base_url);
        if next == current {
            return None;
        }
        self.begin_fetch(base_url)
    }

    /// Tear the viewer down. Completions arriving afterwards are discarded.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Feed the outcome of an executed request back into the state machine.
    ///
    /// Returns `true` if the outcome was applied. A stale ticket, a
    /// torn-down viewer, or a viewer that is not waiting on a fetch all
    /// discard the outcome and return `false`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<HttpResponse, TransportError>,
    ) -> bool {
        if !self.mounted || ticket.0 != self.attempt || self.state != ViewState::Loading {
            return false;
        }
        let Some(client) = &self.client else {
            return false;
        };
        self.state = match outcome {
            Ok(response) => match client.parse_list_posts(response) {
                Ok(posts) => ViewState::Loaded(posts),
                Err(e) => ViewState::Failed(e),
            },
            Err(TransportError::NoResponse) => ViewState::Failed(FetchError::NoResponse),
            Err(TransportError::Setup(msg)) => ViewState::Failed(FetchError::RequestSetup(msg)),
        };
        true
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The address as the operator supplied it, for display.
    pub fn configured_url(&self) -> Option<&str> {
        self.configured_url.as_deref()
    }

    /// The list currently on display: the loaded posts, or empty in every
    /// other state (failures always clear the list).
    pub fn displayed_posts(&self) -> &[Post] {
        match &self.state {
            ViewState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    fn begin_fetch(&mut self, base_url: Option<&str>) -> Option<(FetchTicket, HttpRequest)> {
        self.configured_url = base_url.map(str::to_string);
        self.attempt += 1;
        match base_url {
            None => {
                self.client = None;
                self.state = ViewState::Failed(FetchError::ConfigMissing);
                None
            }
            Some(url) => {
                let client = PostClient::new(url);
                let request = client.build_list_posts();
                self.client = Some(client);
                self.state = ViewState::Loading;
                Some((FetchTicket(self.attempt), request))
            }
        }
    }
}

impl Default for PostViewer {
    fn default() -> Self {
        Self::new()
    }
}
