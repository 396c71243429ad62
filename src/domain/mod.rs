pub mod category;
pub mod counts;
pub mod generic;
pub mod manufacturer;
pub mod product;
pub mod product_generic;
pub mod product_type;
pub mod schedule_type;
pub mod tax;

/// The eight kinds of master records, listed in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Tax,
    ProductType,
    Category,
    Manufacturer,
    ScheduleType,
    Generic,
    Product,
    ProductGeneric,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Tax => "tax",
            EntityKind::ProductType => "product type",
            EntityKind::Category => "category",
            EntityKind::Manufacturer => "manufacturer",
            EntityKind::ScheduleType => "schedule type",
            EntityKind::Generic => "generic",
            EntityKind::Product => "product",
            EntityKind::ProductGeneric => "product generic",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
