//! Static navigation data

use crate::types::NavbarLink;

/// Title of the entry that opens the category submenu instead of navigating
pub const CATALOG_TITLE: &str = "Catalog";

/// Route pattern the catalog entry is highlighted for
pub const CATALOG_ROUTE: &str = "/catalog/:catalogName";

/// Primary navigation, in display order
pub const NAVBAR_LINKS: &[NavbarLink] = &[
    NavbarLink {
        title: "Home",
        path: "/",
    },
    NavbarLink {
        title: CATALOG_TITLE,
        path: "/catalog",
    },
    NavbarLink {
        title: "About Us",
        path: "/about",
    },
    NavbarLink {
        title: "Contact Us",
        path: "/contact",
    },
];
