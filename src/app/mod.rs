pub mod form;
pub mod generate;

pub use generate::GenerateOptions;
