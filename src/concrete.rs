//! Ready-made tree implementations.
//!
//! These are concrete instantiations of [`TreeView`](crate::TreeView),
//! useful for tests, benchmarks and for trying out patterns without wiring
//! up a real compiler front end.

pub mod expr;
