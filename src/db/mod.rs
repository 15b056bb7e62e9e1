//! The static space-group catalogue and its lookup functions.

mod store;
mod table;

pub use store::{
    find_spacegroup_by_ccp4, find_spacegroup_by_name, find_spacegroup_by_number,
    find_spacegroup_by_ops, spacegroup_table,
};
