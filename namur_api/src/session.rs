//! HTTP session shared between requests, and who is responsible for closing it.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::{user_agent::get_user_agent, Error};

/// Reusable HTTP session backed by a pooled `reqwest::Client`.
///
/// Clones share the same connection pool and the same open/closed state.
/// Once closed, a session refuses to issue further requests.
#[derive(Clone, Debug)]
pub struct Session {
    http: reqwest::Client,
    closed: Arc<AtomicBool>,
}

impl Session {
    /// Creates a session with a fresh connection pool.
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::connection(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self::from_client(http))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self {
            http,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Marks the session closed. Returns false if it already was.
    ///
    /// Pooled connections stay open until every clone is dropped.
    pub fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }

    pub(crate) fn http(&self) -> Result<&reqwest::Client, Error> {
        if self.is_closed() {
            tracing::error!("Request issued on a closed session");
            return Err(Error::connection("Session is closed"));
        }
        Ok(&self.http)
    }
}

/// A session tagged with its owner.
#[derive(Debug)]
pub enum SessionHandle {
    /// Created by the client, which must close it.
    Owned(Session),
    /// Supplied by the caller, who keeps responsibility for it.
    Borrowed(Session),
}

impl SessionHandle {
    pub fn session(&self) -> &Session {
        match self {
            SessionHandle::Owned(session) | SessionHandle::Borrowed(session) => session,
        }
    }

    /// Closes the session if this handle owns it.
    pub fn release(&self) {
        match self {
            SessionHandle::Owned(session) => {
                if session.close() {
                    tracing::debug!("Closed owned HTTP session");
                }
            }
            SessionHandle::Borrowed(_) => {
                tracing::debug!("Leaving caller-owned HTTP session open");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_release_closes() {
        let session = Session::new().unwrap();
        let handle = SessionHandle::Owned(session.clone());
        handle.release();
        assert!(session.is_closed());
        assert!(session.http().is_err());
    }

    #[test]
    fn borrowed_release_keeps_open() {
        let session = Session::new().unwrap();
        let handle = SessionHandle::Borrowed(session.clone());
        handle.release();
        assert!(!session.is_closed());
        assert!(session.http().is_ok());
    }

    #[test]
    fn close_reports_first_call_only() {
        let session = Session::from_client(reqwest::Client::new());
        assert!(session.close());
        assert!(!session.close());
        assert!(session.is_closed());
    }
}
