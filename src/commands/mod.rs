pub mod extract;
pub mod segment;
pub mod status;
pub mod study;
pub mod vocab;
