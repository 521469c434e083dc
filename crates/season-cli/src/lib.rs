pub mod months;
pub mod of;
pub mod predicate;
