//! # xtal-sym
//!
//! **xtal-sym** is a pure-Rust crystallographic symmetry engine: exact
//! rational symmetry operations, triplet and Hall-symbol parsing, group
//! closure, and a complete catalogue of the 230 space groups with their
//! common alternative settings. All arithmetic is integer arithmetic over
//! a fixed denominator, so parsing, combination and inversion are exact
//! and round-trip losslessly.
//!
//! ## Features
//!
//! - **Exact operation algebra** – [`Op`] stores a signed integer rotation
//!   matrix (`nalgebra`) and a translation in 24ths of the cell, making
//!   composition, inversion and basis changes exact.
//! - **Triplet notation** – Permissive parsing of expressions such as
//!   `"-y+1/4,x+3/4,z+1/4"` and canonical serialization back to them.
//! - **Hall symbols** – Interpretation of concise Hall notation, including
//!   screw axes, diagonal directions, centerings, origin shifts and full
//!   change-of-basis triplets.
//! - **Group closure** – Expansion of a generator set into the complete
//!   finite group, partitioned into coset representatives and centering
//!   vectors, with grid sampling factors derived from the translations.
//! - **Space-group catalogue** – A static table of the 230 groups and
//!   their common alternative settings, searchable by sequential number,
//!   CCP4 code, Hermann-Mauguin name in any common spelling, or full
//!   operation set.

mod db;
mod model;

pub mod error;
pub mod io;

pub use db::{
    find_spacegroup_by_ccp4, find_spacegroup_by_name, find_spacegroup_by_number,
    find_spacegroup_by_ops, spacegroup_table,
};
pub use error::Error;
pub use io::{generators_from_hall, parse_triplet, symops_from_hall};
pub use model::group::GroupOps;
pub use model::op::{Op, Rot, Tran};
pub use model::spacegroup::SpaceGroup;
