// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot loading of the index artifact.
//!
//! The transport is abstract: a browser host fetches the bytes itself and calls
//! [`IndexHandle::publish`] through the session, while native hosts implement
//! [`IndexSource`] and call [`load`]. There is no retry and no timeout here;
//! both belong to the transport.

use super::{IndexHandle, SearchIndex};
use crate::config::index_url;
use crate::search::Matcher;
use crate::verify::LoadError;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Something that can turn an artifact URL into bytes.
pub trait IndexSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError>;
}

impl<F> IndexSource for F
where
    F: Fn(&str) -> Result<Vec<u8>, LoadError>,
{
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        self(url)
    }
}

/// Serves artifact URLs from a built site directory.
///
/// `/book/search_index.json` resolves to `{root}/book/search_index.json`.
/// URLs that try to climb out of the root with `..` are refused.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, url: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(url.trim_start_matches('/'));
        let mut path = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => path.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(LoadError::Fetch {
                        url: url.to_string(),
                        reason: "path escapes the site root".to_string(),
                    })
                }
            }
        }
        Ok(path)
    }
}

impl IndexSource for DirSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.resolve(url)?;
        debug!(url, path = %path.display(), "reading search index");
        std::fs::read(&path).map_err(|err| LoadError::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

/// Fetch, decode, and publish the index for `base_path` into `handle`.
///
/// The handle ends up `Ready` on success and `Failed` on any error; the error
/// is also returned so the caller can decide whether to log or swallow it.
pub fn load(
    handle: &IndexHandle,
    source: &dyn IndexSource,
    base_path: Option<&str>,
) -> Result<Arc<SearchIndex>, LoadError> {
    load_url(handle, source, &index_url(base_path))
}

/// Like [`load`], with the artifact URL already resolved.
pub fn load_url(
    handle: &IndexHandle,
    source: &dyn IndexSource,
    url: &str,
) -> Result<Arc<SearchIndex>, LoadError> {
    handle.begin_load()?;
    let outcome = source
        .fetch(url)
        .and_then(|bytes| SearchIndex::from_json(&bytes))
        .map(Arc::new);
    match outcome {
        Ok(index) => {
            let matcher: Arc<dyn Matcher> = index.clone();
            handle.publish(matcher)?;
            Ok(index)
        }
        Err(err) => {
            handle.fail(&err)?;
            Err(err)
        }
    }
}
