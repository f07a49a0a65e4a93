//! Plain data for the three record kinds and the joined read models.

pub mod catalog;
pub mod detail;
pub mod line_item;
pub mod order;

pub use catalog::*;
pub use detail::*;
pub use line_item::*;
pub use order::*;
