//! Terminal presentation of the profile.

pub mod banner;
pub mod presenter;

pub use presenter::{Presenter, typewrite};
