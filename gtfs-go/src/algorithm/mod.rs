mod disjoint_set;
pub mod name_similarity;

pub use disjoint_set::DisjointSet;
