use serde::Serialize;

/// Number of rows per master entity kind.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct EntityCounts {
    pub taxes: usize,
    pub product_types: usize,
    pub categories: usize,
    pub manufacturers: usize,
    pub schedule_types: usize,
    pub generics: usize,
    pub products: usize,
    pub product_generics: usize,
}

impl EntityCounts {
    /// Sum of rows across every kind.
    pub fn total(&self) -> usize {
        self.taxes
            + self.product_types
            + self.categories
            + self.manufacturers
            + self.schedule_types
            + self.generics
            + self.products
            + self.product_generics
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for EntityCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "taxes={} product_types={} categories={} manufacturers={} schedule_types={} generics={} products={} product_generics={}",
            self.taxes,
            self.product_types,
            self.categories,
            self.manufacturers,
            self.schedule_types,
            self.generics,
            self.products,
            self.product_generics,
        )
    }
}
