//! Output formatting

pub mod listing;
