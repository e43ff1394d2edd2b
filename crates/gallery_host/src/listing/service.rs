//! Directory fetcher service contract and in-memory adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use futures::channel::oneshot;

use super::types::{DirectoryEntry, ListingError};
use crate::{config::DEFAULT_LISTING_QUERY, path::listing_url};

/// Object-safe boxed future used by [`DirectoryFetcher`].
pub type DirectoryFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Result of one directory-listing request.
pub type ListingResult = Result<Vec<DirectoryEntry>, ListingError>;

/// Host service that loads the listing for a directory path.
pub trait DirectoryFetcher {
    /// Requests the listing for `path`.
    ///
    /// Entries come back in server order; filtering and ordering are the caller's concern.
    fn fetch_listing<'a>(&'a self, path: &'a str) -> DirectoryFetchFuture<'a, ListingResult>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetcher for unsupported targets; every request fails.
pub struct NoopDirectoryFetcher;

impl DirectoryFetcher for NoopDirectoryFetcher {
    fn fetch_listing<'a>(&'a self, path: &'a str) -> DirectoryFetchFuture<'a, ListingResult> {
        Box::pin(async move {
            Err(ListingError::Fetch {
                url: listing_url(path, DEFAULT_LISTING_QUERY),
                message: "directory listings are unavailable on this host".to_string(),
            })
        })
    }
}

/// A pending request held open by a gated [`MemoryDirectoryFetcher`].
#[derive(Debug)]
pub struct ListingGate {
    path: String,
    sender: oneshot::Sender<ListingResult>,
}

impl ListingGate {
    /// Directory path the request was issued for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Completes the request with `result`.
    pub fn resolve(self, result: ListingResult) {
        let _ = self.sender.send(result);
    }
}

#[derive(Debug, Default)]
struct MemoryFetcherInner {
    listings: HashMap<String, ListingResult>,
    gated: bool,
    gates: Vec<ListingGate>,
    requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory fetcher for tests and headless composition.
///
/// By default each request resolves immediately from the canned listings, with unknown paths
/// answering HTTP 404. In gated mode requests stay pending until the caller resolves the matching
/// [`ListingGate`], which lets tests control completion order.
pub struct MemoryDirectoryFetcher {
    inner: Rc<RefCell<MemoryFetcherInner>>,
}

impl MemoryDirectoryFetcher {
    /// Creates a fetcher whose requests stay pending until resolved through [`Self::take_gates`].
    pub fn gated() -> Self {
        let fetcher = Self::default();
        fetcher.inner.borrow_mut().gated = true;
        fetcher
    }

    /// Registers the entries returned for `path`.
    pub fn insert(&self, path: impl Into<String>, entries: Vec<DirectoryEntry>) {
        self.inner.borrow_mut().listings.insert(path.into(), Ok(entries));
    }

    /// Registers a failure returned for `path`.
    pub fn insert_error(&self, path: impl Into<String>, error: ListingError) {
        self.inner.borrow_mut().listings.insert(path.into(), Err(error));
    }

    /// Request URLs issued so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }

    /// Removes and returns the pending gated requests, oldest first.
    pub fn take_gates(&self) -> Vec<ListingGate> {
        std::mem::take(&mut self.inner.borrow_mut().gates)
    }
}

impl DirectoryFetcher for MemoryDirectoryFetcher {
    fn fetch_listing<'a>(&'a self, path: &'a str) -> DirectoryFetchFuture<'a, ListingResult> {
        let url = listing_url(path, DEFAULT_LISTING_QUERY);
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(url.clone());

        if inner.gated {
            let (sender, receiver) = oneshot::channel();
            inner.gates.push(ListingGate {
                path: path.to_string(),
                sender,
            });
            return Box::pin(async move {
                receiver.await.unwrap_or_else(|_| {
                    Err(ListingError::Fetch {
                        url,
                        message: "request abandoned".to_string(),
                    })
                })
            });
        }

        let result = inner
            .listings
            .get(path)
            .cloned()
            .unwrap_or(Err(ListingError::Response { url, status: 404 }));
        Box::pin(async move { result })
    }
}
