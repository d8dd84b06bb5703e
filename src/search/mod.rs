pub mod search;
pub mod zip;
