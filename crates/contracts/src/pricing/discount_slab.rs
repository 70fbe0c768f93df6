use serde::{Deserialize, Serialize};

use crate::EntityId;

/// Quantity discount slab for a variant: ordering at least `min_qty` units
/// earns `discount_percent` off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSlab {
    pub id: EntityId,
    pub variant_id: EntityId,
    pub min_qty: u32,
    pub discount_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountSlabDto {
    pub variant_id: EntityId,
    pub min_qty: u32,
    pub discount_percent: f64,
}

impl DiscountSlab {
    /// The slab that applies to an order of `qty` units: the one with the
    /// highest threshold not exceeding the quantity.
    pub fn pick(slabs: &[DiscountSlab], qty: u32) -> Option<&DiscountSlab> {
        slabs
            .iter()
            .filter(|slab| slab.min_qty <= qty)
            .max_by_key(|slab| slab.min_qty)
    }
}

impl DiscountSlabDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.variant_id <= 0 {
            return Err("A variant must be selected".to_string());
        }
        if self.min_qty < 1 {
            return Err("Minimum quantity must be at least 1".to_string());
        }
        if !(0.0..=100.0).contains(&self.discount_percent) {
            return Err("Discount must be between 0 and 100 percent".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab(id: EntityId, min_qty: u32, discount_percent: f64) -> DiscountSlab {
        DiscountSlab {
            id,
            variant_id: 1,
            min_qty,
            discount_percent,
        }
    }

    #[test]
    fn picks_highest_threshold_at_or_below_quantity() {
        let slabs = vec![slab(1, 10, 2.0), slab(2, 50, 5.0), slab(3, 100, 8.0)];

        assert_eq!(DiscountSlab::pick(&slabs, 9), None);
        assert_eq!(DiscountSlab::pick(&slabs, 10).map(|s| s.id), Some(1));
        assert_eq!(DiscountSlab::pick(&slabs, 99).map(|s| s.id), Some(2));
        assert_eq!(DiscountSlab::pick(&slabs, 500).map(|s| s.id), Some(3));
    }

    #[test]
    fn empty_slab_list_yields_no_discount() {
        assert_eq!(DiscountSlab::pick(&[], 100), None);
    }
}
