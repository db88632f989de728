// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly binding for the navigation filter.
//!
//! The page owns the DOM and the network. It reads the outline out of the
//! rendered sidebar, fetches `indexUrl()` itself, and applies each returned
//! patch to its list items. In JS terms:
//!
//! ```text
//! const nav = new NavFilter(outline, { basePath });
//! nav.beginLoad();
//! fetch(nav.indexUrl())
//!   .then(r => r.arrayBuffer())
//!   .then(b => nav.finishLoad(new Uint8Array(b)))
//!   .catch(e => nav.failLoad(String(e)));
//! input.addEventListener("keyup", e => apply(nav.onKeyUp(e.keyCode, input.value)));
//! for (const id of nav.setActive(location.pathname)) items[id].classList.add(nav.activeClass);
//! ```

use crate::config::SiteConfig;
use crate::controller::KeyEvent;
use crate::session::Session;
use crate::tree::{NavTree, OutlineEntry};
use crate::types::NavNodeId;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// One page's search-driven navigation filter.
#[wasm_bindgen]
pub struct NavFilter {
    session: Session,
}

#[wasm_bindgen]
impl NavFilter {
    /// Build from the sidebar outline and an optional site config object.
    ///
    /// `config` may be `undefined`; every field has a default.
    #[wasm_bindgen(constructor)]
    pub fn new(outline: JsValue, config: JsValue) -> Result<NavFilter, JsValue> {
        let outline: Vec<OutlineEntry> = from_value(outline).map_err(js_error)?;
        let config: SiteConfig = if config.is_undefined() || config.is_null() {
            SiteConfig::default()
        } else {
            from_value(config).map_err(js_error)?
        };
        let tree = NavTree::from_outline(&outline).map_err(js_error)?;
        Ok(NavFilter {
            session: Session::new(tree, config),
        })
    }

    #[wasm_bindgen(js_name = indexUrl)]
    pub fn index_url(&self) -> String {
        self.session.index_url()
    }

    #[wasm_bindgen(js_name = beginLoad)]
    pub fn begin_load(&self) -> bool {
        self.session.begin_load()
    }

    /// Hand over the fetched artifact bytes. Returns whether search is ready.
    #[wasm_bindgen(js_name = finishLoad)]
    pub fn finish_load(&self, bytes: &[u8]) -> bool {
        self.session.finish_load(bytes)
    }

    #[wasm_bindgen(js_name = failLoad)]
    pub fn fail_load(&self, reason: &str) {
        self.session.fail_load(reason)
    }

    /// Class to toggle on the tree root while a search is active.
    #[wasm_bindgen(getter, js_name = searchedClass)]
    pub fn searched_class(&self) -> String {
        self.session.config().searched_class.clone()
    }

    /// Class to add to the groups returned by `setActive`.
    #[wasm_bindgen(getter, js_name = activeClass)]
    pub fn active_class(&self) -> String {
        self.session.config().active_class.clone()
    }

    #[wasm_bindgen(getter, js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.session.handle().is_ready()
    }

    /// Handle a key-up on the search input. Returns the patch to apply.
    #[wasm_bindgen(js_name = onKeyUp)]
    pub fn on_key_up(&mut self, key_code: u32, value: &str) -> Result<JsValue, JsValue> {
        let patch = self.session.handle_key(&KeyEvent::new(key_code, value));
        to_value(&patch).map_err(js_error)
    }

    /// Mark the current article. Returns the node ids of its enclosing groups,
    /// outermost first, for the active class.
    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, path: &str) -> Vec<u32> {
        let tree = self.session.tree_mut();
        tree.set_active(path);
        tree.active_groups().into_iter().map(|NavNodeId(id)| id).collect()
    }
}
