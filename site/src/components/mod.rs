//! Page sections and the widgets they share.

pub mod access_map;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod highlights;
pub mod leaflet_map;
pub mod legal_modals;
pub mod news;
pub mod news_modal;
pub mod reveal;
pub mod reviews;
pub mod services;
pub mod theme_toggle;
