mod compare;

pub use compare::{compare, compare_with};
