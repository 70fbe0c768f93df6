//! Catalog entities: the three-level classification tree, brands, products
//! and their sellable variants.

pub mod brand;
pub mod category;
pub mod product;
pub mod second_sub_category;
pub mod sub_category;
pub mod variant;

pub use brand::{Brand, BrandDto};
pub use category::{Category, CategoryDto};
pub use product::{Product, ProductDto};
pub use second_sub_category::{SecondSubCategory, SecondSubCategoryDto, SubCategoryFilter};
pub use sub_category::{CategoryFilter, SubCategory, SubCategoryDto};
pub use variant::{Variant, VariantDto};
