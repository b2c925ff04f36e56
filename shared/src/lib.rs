pub mod catalog;
pub mod colors;
pub mod department;
pub mod filter;
pub mod navigation;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use department::{Department, Level, LevelId};
pub use filter::{FilterKey, Query};
pub use navigation::{Dismissed, NavEffect, Navigation, Page};
