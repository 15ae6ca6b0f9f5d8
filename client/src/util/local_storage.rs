//! `localStorage` as the board's blob store.
//!
//! Wraps the window's `Storage` handle behind [`BlobStore`] so the engine can
//! load and save notes without knowing about the browser. Outside a `csr`
//! build every call reports the store as unavailable, which the engine turns
//! into an empty board and a logged save failure.
//!
//! ERROR HANDLING
//! ==============
//! `localStorage` can be missing (privacy mode, sandboxed iframes) or throw
//! on write (quota). Each case maps onto a [`StorageError`] variant carrying
//! the JS error text.

use stickyboard::error::StorageError;
use stickyboard::persist::BlobStore;

/// Blob store backed by `window.localStorage`.
pub struct LocalStorageBlobStore {
    #[cfg(feature = "csr")]
    storage: Option<web_sys::Storage>,
}

impl LocalStorageBlobStore {
    /// Grab the window's storage handle, if the browser exposes one.
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::warn!("localStorage unavailable; notes will not persist");
            }
            Self { storage }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self {}
        }
    }

    #[cfg(feature = "csr")]
    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage is not accessible".to_owned()))
    }
}

#[cfg(feature = "csr")]
fn js_reason(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl BlobStore for LocalStorageBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            self.storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable("localStorage requires a browser build".to_owned()))
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            self.storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable("localStorage requires a browser build".to_owned()))
        }
    }
}
