pub mod select;

pub use select::OptionSelect;
