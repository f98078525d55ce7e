pub mod convert;
pub mod ids;
