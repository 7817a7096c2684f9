//! Normalized notebook model.
//!
//! This module contains:
//! - The [`Notebook`] produced by parsing an export
//! - The [`Marker`] sum type and its [`Highlight`] and [`Note`] variants

mod marker;
mod notebook;

pub use marker::{Highlight, Marker, Note};
pub use notebook::Notebook;
