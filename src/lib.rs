#![doc = include_str!("../README.md")]

pub mod aff12;
pub mod deviation;
pub mod error;
pub mod io;
pub mod table;

// --- High-level re-exports -------------------------------------------------

pub use crate::aff12::Aff12;
pub use crate::deviation::{
    deviation_from_identity, deviation_from_identity_file, deviation_from_identity_rows,
};
pub use crate::error::{Aff12Error, TableError};
pub use crate::table::Table;
