pub mod articles;
pub mod journals;
