//! UI components

pub mod icons;
pub mod navbar;
pub mod profile_dropdown;

pub use navbar::Navbar;
pub use profile_dropdown::ProfileDropdown;
