pub mod classification;

pub use classification::{ClassificationSelection, ProductClassification};
