pub mod hall;
pub mod triplet;

pub use hall::{generators_from_hall, symops_from_hall};
pub use triplet::{make_triplet, make_triplet_part, parse_triplet, parse_triplet_part};
