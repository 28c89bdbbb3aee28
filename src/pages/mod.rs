//! Pages
//!
//! One component per top-level screen.

mod generate;
mod landing;
mod listing;

pub use generate::GeneratePage;
pub use landing::LandingPage;
pub use listing::{FavoritesPage, HistoryPage};
