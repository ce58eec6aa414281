pub mod builder;
pub mod palette;
pub mod spec;
