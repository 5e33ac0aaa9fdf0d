//! Toolkit for computing minimum spanning trees of weighted undirected graphs

#![deny(
    clippy::disallowed_methods,
    clippy::suspicious,
    clippy::style,
    clippy::clone_on_ref_ptr,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)] // TODO

pub mod dot;
pub mod graph;
pub mod heap;
pub mod mst;
pub mod union_find;
