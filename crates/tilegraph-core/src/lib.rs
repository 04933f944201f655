//! **tilegraph-core** — the static half of a grid traversal graph.
//!
//! This crate provides the types that never change while searches run:
//! the [`Point`] coordinate primitive, the [`GridGraph`] node collection
//! with its passability data, and the [`GridError`] taxonomy for
//! construction and access failures.
//!
//! Per-search bookkeeping (costs, open/closed flags, parent links) lives
//! in the `tilegraph-paths` crate, so a `GridGraph` is freely shareable
//! between concurrent queries once built.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{GridGraph, GridError, Node};
