//! Small helpers shared across the crate

pub mod name_list;
pub mod string;

pub use name_list::NameList;
