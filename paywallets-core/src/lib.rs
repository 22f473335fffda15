pub mod fixture;
pub mod primitives;
