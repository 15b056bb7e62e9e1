//! Core data structures modeling crystallographic symmetry.
//!
//! This module defines the foundational types: the exact affine symmetry
//! operation, the operation group with its centering cosets, and the
//! catalogue record for a space-group setting. These types form the
//! backbone of `xtal-sym` and are produced by the triplet and Hall
//! parsers and consumed by the catalogue lookups.

pub mod group;
pub mod op;
pub mod spacegroup;
