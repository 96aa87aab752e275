//! What the navigation bar shows, decided from plain data
//!
//! The navbar component only wires these decisions to signals and markup.

use crate::data::{CATALOG_ROUTE, CATALOG_TITLE};
use crate::routing::{catalog_path, match_path};
use crate::types::{AccountType, Category, NavbarLink, UserProfile};

/// Controls shown in the account area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthControls {
    LoginSignup,
    ProfileDropdown,
}

pub fn auth_controls(token: Option<&str>) -> AuthControls {
    match token {
        None => AuthControls::LoginSignup,
        Some(_) => AuthControls::ProfileDropdown,
    }
}

/// Cart link visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAffordance {
    Hidden,
    Shown { total_items: u32 },
}

impl CartAffordance {
    /// Badge text for the desktop cart icon; no badge for an empty cart
    pub fn badge(&self) -> Option<String> {
        match *self {
            CartAffordance::Shown { total_items } if total_items > 0 => {
                Some(total_items.to_string())
            }
            _ => None,
        }
    }
}

/// The cart is for signed-in users who are not instructors.
pub fn cart_affordance(user: Option<&UserProfile>, total_items: u32) -> CartAffordance {
    match user {
        Some(user) if user.account_type != AccountType::Instructor => {
            CartAffordance::Shown { total_items }
        }
        _ => CartAffordance::Hidden,
    }
}

/// One entry of the category submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubLink {
    pub label: String,
    pub href: String,
}

/// Contents of the category submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submenu {
    /// Nothing to list, whether the fetch returned no rows or failed
    NoResults,
    Links(Vec<SubLink>),
}

pub fn submenu(categories: &[Category]) -> Submenu {
    if categories.is_empty() {
        return Submenu::NoResults;
    }

    Submenu::Links(
        categories
            .iter()
            .map(|category| SubLink {
                label: category.name.clone(),
                href: catalog_path(&category.name),
            })
            .collect(),
    )
}

pub fn is_catalog_link(link: &NavbarLink) -> bool {
    link.title == CATALOG_TITLE
}

/// Whether `link` should be highlighted for `pathname`.
///
/// The catalog entry follows the category detail route rather than its own
/// path.
pub fn is_active(link: &NavbarLink, pathname: &str) -> bool {
    let pattern = if is_catalog_link(link) {
        CATALOG_ROUTE
    } else {
        link.path
    };
    match_path(pattern, pathname).is_some()
}

/// Open/closed state of the mobile menu panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
