pub mod count;
pub mod support;
