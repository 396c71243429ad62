use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

use crate::dataset::{DatasetError, SeedDataset};
use crate::domain::{
    EntityKind,
    category::NewCategory,
    counts::EntityCounts,
    generic::NewGeneric,
    manufacturer::NewManufacturer,
    product::{NewProduct, ProductLinks},
    product_generic::NewProductGeneric,
    product_type::NewProductType,
    schedule_type::NewScheduleType,
    tax::NewTax,
};
use crate::repository::errors::RepositoryError;
use crate::repository::{
    CategoryWriter, DieselStore, GenericWriter, ManufacturerWriter, MasterDataReader,
    ProductGenericWriter, ProductTypeWriter, ProductWriter, ScheduleTypeWriter, TaxWriter,
};

/// Audit name stamped on seeded rows unless configured otherwise.
pub const DEFAULT_CREATED_BY: &str = "system";

/// Result type returned by the seeder.
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{kind} `{key}` references {target} `{reference}` that no earlier phase stored")]
    UnresolvedReference {
        kind: EntityKind,
        key: String,
        target: EntityKind,
        reference: String,
    },
    #[error("master tables already contain data ({0})")]
    AlreadySeeded(EntityCounts),
}

/// A policy name other than `duplicate`, `skip` or `fail`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown existing data policy `{0}`, expected duplicate, skip or fail")]
pub struct UnknownPolicy(pub String);

/// What to do when the master tables are not empty before seeding starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingDataPolicy {
    /// Insert the dataset again next to the existing rows.
    #[default]
    Duplicate,
    /// Leave the store untouched and report nothing inserted.
    Skip,
    /// Abort with [`SeedError::AlreadySeeded`].
    Fail,
}

impl FromStr for ExistingDataPolicy {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "duplicate" => Ok(ExistingDataPolicy::Duplicate),
            "skip" => Ok(ExistingDataPolicy::Skip),
            "fail" => Ok(ExistingDataPolicy::Fail),
            _ => Err(UnknownPolicy(value.to_string())),
        }
    }
}

/// Knobs of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    /// Wrap every phase in one transaction.
    pub atomic: bool,
    pub on_existing: ExistingDataPolicy,
    /// Audit name written to `created_by`.
    pub created_by: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            atomic: false,
            on_existing: ExistingDataPolicy::default(),
            created_by: DEFAULT_CREATED_BY.to_string(),
        }
    }
}

/// Insertion tiers. A tier only starts once every row of the previous one has
/// been stored and returned its generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPhase {
    Leaves,
    Generics,
    Products,
    Mappings,
}

impl std::fmt::Display for SeedPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SeedPhase::Leaves => "leaves",
            SeedPhase::Generics => "generics",
            SeedPhase::Products => "products",
            SeedPhase::Mappings => "mappings",
        };
        f.write_str(name)
    }
}

/// Generated identifiers keyed by dataset key.
type KeyIds = HashMap<String, i32>;

#[derive(Debug, Default)]
struct LeafIds {
    taxes: KeyIds,
    product_types: KeyIds,
    categories: KeyIds,
    manufacturers: KeyIds,
    schedule_types: KeyIds,
}

fn resolve(
    ids: &KeyIds,
    kind: EntityKind,
    key: &str,
    target: EntityKind,
    reference: &str,
) -> SeedResult<i32> {
    ids.get(reference)
        .copied()
        .ok_or_else(|| SeedError::UnresolvedReference {
            kind,
            key: key.to_string(),
            target,
            reference: reference.to_string(),
        })
}

fn run_phase<T>(phase: SeedPhase, f: impl FnOnce() -> SeedResult<T>) -> SeedResult<T> {
    log::info!("Seeding {phase}...");
    f().inspect_err(|err| log::error!("Seeding aborted in {phase} phase: {err}"))
}

/// Verify `dataset` and insert it tier by tier, wiring generated ids of parents
/// into their children. Returns the number of rows inserted per kind.
pub fn seed_master_data<S>(
    store: &mut S,
    dataset: &SeedDataset,
    options: &SeedOptions,
) -> SeedResult<EntityCounts>
where
    S: TaxWriter
        + ProductTypeWriter
        + CategoryWriter
        + ManufacturerWriter
        + ScheduleTypeWriter
        + GenericWriter
        + ProductWriter
        + ProductGenericWriter
        + MasterDataReader
        + ?Sized,
{
    dataset.verify()?;

    let existing = store.count_master_rows()?;
    if !existing.is_empty() {
        match options.on_existing {
            ExistingDataPolicy::Duplicate => log::warn!(
                "Master tables already hold {} rows, seeding again duplicates them",
                existing.total()
            ),
            ExistingDataPolicy::Skip => {
                log::info!("Master tables already seeded ({existing}), skipping");
                return Ok(EntityCounts::default());
            }
            ExistingDataPolicy::Fail => return Err(SeedError::AlreadySeeded(existing)),
        }
    }

    insert_dataset(store, dataset, &options.created_by)
}

/// Run [`seed_master_data`] on a Diesel store, inside a single transaction when
/// `options.atomic` is set.
pub fn seed_store(
    store: &mut DieselStore,
    dataset: &SeedDataset,
    options: &SeedOptions,
) -> SeedResult<EntityCounts> {
    if options.atomic {
        store.transaction(|store| seed_master_data(store, dataset, options))
    } else {
        seed_master_data(store, dataset, options)
    }
}

fn insert_dataset<S>(
    store: &mut S,
    dataset: &SeedDataset,
    created_by: &str,
) -> SeedResult<EntityCounts>
where
    S: TaxWriter
        + ProductTypeWriter
        + CategoryWriter
        + ManufacturerWriter
        + ScheduleTypeWriter
        + GenericWriter
        + ProductWriter
        + ProductGenericWriter
        + ?Sized,
{
    let leaves = run_phase(SeedPhase::Leaves, || {
        insert_leaves(store, dataset, created_by)
    })?;
    let generic_ids = run_phase(SeedPhase::Generics, || {
        insert_generics(store, dataset, &leaves, created_by)
    })?;
    let product_ids = run_phase(SeedPhase::Products, || {
        insert_products(store, dataset, &leaves, created_by)
    })?;
    let mappings = run_phase(SeedPhase::Mappings, || {
        insert_mappings(store, dataset, &product_ids, &generic_ids, created_by)
    })?;

    Ok(EntityCounts {
        taxes: leaves.taxes.len(),
        product_types: leaves.product_types.len(),
        categories: leaves.categories.len(),
        manufacturers: leaves.manufacturers.len(),
        schedule_types: leaves.schedule_types.len(),
        generics: generic_ids.len(),
        products: product_ids.len(),
        product_generics: mappings,
    })
}

fn insert_leaves<S>(store: &mut S, dataset: &SeedDataset, created_by: &str) -> SeedResult<LeafIds>
where
    S: TaxWriter
        + ProductTypeWriter
        + CategoryWriter
        + ManufacturerWriter
        + ScheduleTypeWriter
        + ?Sized,
{
    let mut ids = LeafIds::default();

    for row in &dataset.taxes {
        let new_tax = NewTax::new(&row.description, row.igst, row.cgst, row.sgst, created_by);
        let tax = store.create_tax(&new_tax)?;
        ids.taxes.insert(row.key.clone(), tax.id);
    }

    for row in &dataset.product_types {
        let new_type = NewProductType::new(&row.name, &row.short_name, created_by);
        let product_type = store.create_product_type(&new_type)?;
        ids.product_types.insert(row.key.clone(), product_type.id);
    }

    for row in &dataset.categories {
        let category = store.create_category(&NewCategory::new(&row.name, created_by))?;
        ids.categories.insert(row.key.clone(), category.id);
    }

    for row in &dataset.manufacturers {
        let new_manufacturer = NewManufacturer::new(&row.name, &row.short_name, created_by)
            .with_address(
                row.address.clone(),
                row.city.clone(),
                row.state.clone(),
                row.pin.clone(),
            )
            .with_contact(
                row.contact_name.clone(),
                row.contact_phone.clone(),
                row.email.clone(),
            );
        let manufacturer = store.create_manufacturer(&new_manufacturer)?;
        ids.manufacturers.insert(row.key.clone(), manufacturer.id);
    }

    for row in &dataset.schedule_types {
        let schedule_type =
            store.create_schedule_type(&NewScheduleType::new(&row.name, created_by))?;
        ids.schedule_types.insert(row.key.clone(), schedule_type.id);
    }

    log::debug!(
        "Stored {} taxes, {} product types, {} categories, {} manufacturers, {} schedule types",
        ids.taxes.len(),
        ids.product_types.len(),
        ids.categories.len(),
        ids.manufacturers.len(),
        ids.schedule_types.len(),
    );

    Ok(ids)
}

fn insert_generics<S>(
    store: &mut S,
    dataset: &SeedDataset,
    leaves: &LeafIds,
    created_by: &str,
) -> SeedResult<KeyIds>
where
    S: GenericWriter + ?Sized,
{
    let mut ids = KeyIds::new();

    for row in &dataset.generics {
        let category_id = resolve(
            &leaves.categories,
            EntityKind::Generic,
            &row.key,
            EntityKind::Category,
            &row.category,
        )?;
        let generic = store.create_generic(&NewGeneric::new(&row.name, category_id, created_by))?;
        ids.insert(row.key.clone(), generic.id);
    }

    Ok(ids)
}

fn insert_products<S>(
    store: &mut S,
    dataset: &SeedDataset,
    leaves: &LeafIds,
    created_by: &str,
) -> SeedResult<KeyIds>
where
    S: ProductWriter + ?Sized,
{
    let mut ids = KeyIds::new();

    for row in &dataset.products {
        let lookup = |ids: &KeyIds, target: EntityKind, reference: &str| {
            resolve(ids, EntityKind::Product, &row.key, target, reference)
        };

        let links = ProductLinks {
            product_type_id: lookup(
                &leaves.product_types,
                EntityKind::ProductType,
                &row.product_type,
            )?,
            manufacturer_id: lookup(
                &leaves.manufacturers,
                EntityKind::Manufacturer,
                &row.manufacturer,
            )?,
            purchase_tax_id: lookup(&leaves.taxes, EntityKind::Tax, &row.purchase_tax)?,
            sale_tax_id: lookup(&leaves.taxes, EntityKind::Tax, &row.sale_tax)?,
            schedule_type_id: lookup(
                &leaves.schedule_types,
                EntityKind::ScheduleType,
                &row.schedule_type,
            )?,
        };
        let new_product = NewProduct::new(
            &row.name,
            row.hsn_code.clone(),
            &row.packing,
            &row.purchase_unit,
            &row.sale_unit,
            row.mrp,
            links,
            created_by,
        )
        .with_active(row.is_active);

        let product = store.create_product(&new_product)?;
        ids.insert(row.key.clone(), product.id);
    }

    Ok(ids)
}

fn insert_mappings<S>(
    store: &mut S,
    dataset: &SeedDataset,
    product_ids: &KeyIds,
    generic_ids: &KeyIds,
    created_by: &str,
) -> SeedResult<usize>
where
    S: ProductGenericWriter + ?Sized,
{
    let mut created = 0usize;

    for row in &dataset.product_generics {
        let label = format!("{}/{}", row.product, row.generic);
        let product_id = resolve(
            product_ids,
            EntityKind::ProductGeneric,
            &label,
            EntityKind::Product,
            &row.product,
        )?;
        let generic_id = resolve(
            generic_ids,
            EntityKind::ProductGeneric,
            &label,
            EntityKind::Generic,
            &row.generic,
        )?;

        store.create_product_generic(&NewProductGeneric::new(
            product_id,
            generic_id,
            &row.strength,
            created_by,
        ))?;
        created += 1;
    }

    Ok(created)
}
