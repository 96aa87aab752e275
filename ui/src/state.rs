//! Session state: auth token, signed-in profile and cart count
//!
//! The session is created once by the app shell and handed to the
//! components that render from it.

use crate::types::UserProfile;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const STORAGE_KEY_TOKEN: &str = "token";
const STORAGE_KEY_USER: &str = "user";
const STORAGE_KEY_TOTAL_ITEMS: &str = "totalItems";

/// Reactive session state
#[derive(Debug, Clone, Copy)]
pub struct Session {
    /// Authentication token
    pub token: RwSignal<Option<String>>,
    /// Signed-in user's profile
    pub user: RwSignal<Option<UserProfile>>,
    /// Number of items in the cart
    pub total_items: RwSignal<u32>,
}

/// Plain copy of the session at one point in time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub total_items: u32,
}

impl Session {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            token: RwSignal::new(snapshot.token),
            user: RwSignal::new(snapshot.user),
            total_items: RwSignal::new(snapshot.total_items),
        }
    }

    /// Restore the session persisted by the auth and cart flows
    pub fn load() -> Self {
        Self::new(SessionSnapshot {
            token: LocalStorage::get(STORAGE_KEY_TOKEN).ok(),
            user: LocalStorage::get(STORAGE_KEY_USER).ok(),
            total_items: LocalStorage::get(STORAGE_KEY_TOTAL_ITEMS).unwrap_or(0),
        })
    }

    /// Current values; tracked when called inside a reactive scope
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token.get(),
            user: self.user.get(),
            total_items: self.total_items.get(),
        }
    }

    /// Sign out: drop the token and profile and forget the cart count
    pub fn clear(&self) {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
        LocalStorage::delete(STORAGE_KEY_USER);
        LocalStorage::delete(STORAGE_KEY_TOTAL_ITEMS);

        self.token.set(None);
        self.user.set(None);
        self.total_items.set(0);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }
}
