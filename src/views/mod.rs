//! Connected views. Each view reads store state, produces a view model the
//! front end renders, and forwards user interaction to action creators.
//! Rendering here is text; there is no DOM.

pub mod admin_menu;
pub mod alert_banner;
pub mod landing_page;
pub mod profile_container;

pub use admin_menu::AdminMenu;
pub use alert_banner::AlertBanner;
pub use landing_page::LandingPage;
pub use profile_container::ProfileContainer;
