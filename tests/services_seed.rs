use std::collections::HashSet;

use diesel::RunQueryDsl;

use pharma_seed::dataset::SeedDataset;
use pharma_seed::domain::counts::EntityCounts;
use pharma_seed::repository::{
    CategoryReader, GenericReader, ManufacturerReader, MasterDataReader, ProductGenericReader,
    ProductReader, ProductTypeReader, ScheduleTypeReader, TaxReader,
};
use pharma_seed::services::SeedError;
use pharma_seed::services::seed::{ExistingDataPolicy, SeedOptions, seed_store};

mod common;

fn builtin_counts() -> EntityCounts {
    EntityCounts {
        taxes: 3,
        product_types: 5,
        categories: 5,
        manufacturers: 4,
        schedule_types: 4,
        generics: 5,
        products: 4,
        product_generics: 4,
    }
}

fn reject_manufacturers(test_db: &common::TestDb) {
    let mut conn = test_db.pool().get().expect("connection");
    diesel::sql_query(
        "CREATE TRIGGER reject_manufacturers BEFORE INSERT ON manufacturers \
         BEGIN SELECT RAISE(ABORT, 'UNIQUE constraint failed: manufacturers.short_name'); END;",
    )
    .execute(&mut conn)
    .expect("create trigger");
}

#[test]
fn seed_builtin_dataset_populates_every_table() {
    let test_db = common::TestDb::new("service_seed_builtin_dataset.db");
    let mut store = test_db.store();

    let report = seed_store(&mut store, &SeedDataset::builtin(), &SeedOptions::default())
        .expect("seeding should succeed");

    assert_eq!(report, builtin_counts());
    assert_eq!(store.count_master_rows().unwrap(), builtin_counts());
}

#[test]
fn seeded_rows_are_referentially_sound() {
    let test_db = common::TestDb::new("service_seeded_rows_are_referentially_sound.db");
    let mut store = test_db.store();

    seed_store(&mut store, &SeedDataset::builtin(), &SeedOptions::default())
        .expect("seeding should succeed");

    let tax_ids: HashSet<i32> = store.list_taxes().unwrap().iter().map(|t| t.id).collect();
    let type_ids: HashSet<i32> = store
        .list_product_types()
        .unwrap()
        .iter()
        .map(|t| t.id)
        .collect();
    let category_ids: HashSet<i32> = store
        .list_categories()
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    let manufacturer_ids: HashSet<i32> = store
        .list_manufacturers()
        .unwrap()
        .iter()
        .map(|m| m.id)
        .collect();
    let schedule_ids: HashSet<i32> = store
        .list_schedule_types()
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(tax_ids.len(), 3);
    assert_eq!(category_ids.len(), 5);

    let generics = store.list_generics().unwrap();
    for generic in &generics {
        assert!(category_ids.contains(&generic.category_id));
    }
    let generic_ids: HashSet<i32> = generics.iter().map(|g| g.id).collect();

    let products = store.list_products().unwrap();
    for product in &products {
        assert!(type_ids.contains(&product.product_type_id));
        assert!(manufacturer_ids.contains(&product.manufacturer_id));
        assert!(tax_ids.contains(&product.purchase_tax_id));
        assert!(tax_ids.contains(&product.sale_tax_id));
        assert!(schedule_ids.contains(&product.schedule_type_id));
        assert_eq!(product.created_by, "system");
    }
    let product_ids: HashSet<i32> = products.iter().map(|p| p.id).collect();

    for mapping in store.list_product_generics().unwrap() {
        assert!(product_ids.contains(&mapping.product_id));
        assert!(generic_ids.contains(&mapping.generic_id));
    }

    let dolo = products
        .iter()
        .find(|p| p.name == "Dolo 650")
        .expect("Dolo 650 should be seeded");
    assert_eq!(dolo.mrp, 35.5);
    assert_eq!(dolo.purchase_tax_id, dolo.sale_tax_id);
    let tax = store
        .list_taxes()
        .unwrap()
        .into_iter()
        .find(|t| t.id == dolo.sale_tax_id)
        .expect("sale tax should exist");
    assert_eq!(tax.igst, 5.0);
}

#[test]
fn seeding_twice_duplicates_rows() {
    let test_db = common::TestDb::new("service_seeding_twice_duplicates_rows.db");
    let mut store = test_db.store();
    let dataset = SeedDataset::builtin();

    seed_store(&mut store, &dataset, &SeedOptions::default()).expect("first run");
    let second = seed_store(&mut store, &dataset, &SeedOptions::default()).expect("second run");

    assert_eq!(second, builtin_counts());
    let counts = store.count_master_rows().unwrap();
    assert_eq!(counts.total(), builtin_counts().total() * 2);
    assert_eq!(counts.products, 8);
    assert_eq!(counts.product_generics, 8);
}

#[test]
fn skip_policy_makes_rerun_a_no_op() {
    let test_db = common::TestDb::new("service_skip_policy_makes_rerun_a_no_op.db");
    let mut store = test_db.store();
    let dataset = SeedDataset::builtin();
    let options = SeedOptions {
        on_existing: ExistingDataPolicy::Skip,
        ..SeedOptions::default()
    };

    seed_store(&mut store, &dataset, &options).expect("first run");
    let second = seed_store(&mut store, &dataset, &options).expect("second run");

    assert!(second.is_empty());
    assert_eq!(store.count_master_rows().unwrap(), builtin_counts());
}

#[test]
fn fail_policy_rejects_rerun() {
    let test_db = common::TestDb::new("service_fail_policy_rejects_rerun.db");
    let mut store = test_db.store();
    let dataset = SeedDataset::builtin();
    let options = SeedOptions {
        on_existing: ExistingDataPolicy::Fail,
        ..SeedOptions::default()
    };

    seed_store(&mut store, &dataset, &options).expect("first run");
    let result = seed_store(&mut store, &dataset, &options);

    assert!(matches!(result, Err(SeedError::AlreadySeeded(_))));
    assert_eq!(store.count_master_rows().unwrap(), builtin_counts());
}

#[test]
fn manufacturer_failure_leaves_no_products() {
    let test_db = common::TestDb::new("service_manufacturer_failure_leaves_no_products.db");
    reject_manufacturers(&test_db);
    let mut store = test_db.store();

    let result = seed_store(&mut store, &SeedDataset::builtin(), &SeedOptions::default());
    assert!(matches!(result, Err(SeedError::Repository(_))));

    let counts = store.count_master_rows().unwrap();
    assert_eq!(counts.manufacturers, 0);
    assert_eq!(counts.generics, 0);
    assert_eq!(counts.products, 0);
    assert_eq!(counts.product_generics, 0);
    // Each insert commits on its own, so the earlier leaf tables stay populated.
    assert_eq!(counts.taxes, 3);
    assert_eq!(counts.categories, 5);
}

#[test]
fn atomic_run_rolls_back_everything_on_failure() {
    let test_db = common::TestDb::new("service_atomic_run_rolls_back_everything.db");
    reject_manufacturers(&test_db);
    let mut store = test_db.store();

    let options = SeedOptions {
        atomic: true,
        ..SeedOptions::default()
    };
    let result = seed_store(&mut store, &SeedDataset::builtin(), &options);
    assert!(result.is_err());

    assert!(store.count_master_rows().unwrap().is_empty());
}

#[test]
fn atomic_run_commits_on_success() {
    let test_db = common::TestDb::new("service_atomic_run_commits_on_success.db");
    let mut store = test_db.store();

    let options = SeedOptions {
        atomic: true,
        ..SeedOptions::default()
    };
    seed_store(&mut store, &SeedDataset::builtin(), &options).expect("seeding should succeed");

    assert_eq!(store.count_master_rows().unwrap(), builtin_counts());
}

#[test]
fn invalid_dataset_leaves_store_empty() {
    let test_db = common::TestDb::new("service_invalid_dataset_leaves_store_empty.db");
    let mut store = test_db.store();

    let mut dataset = SeedDataset::builtin();
    dataset.generics[4].category = "antihistamines".to_string();

    let result = seed_store(&mut store, &dataset, &SeedOptions::default());
    assert!(matches!(result, Err(SeedError::Dataset(_))));
    assert!(store.count_master_rows().unwrap().is_empty());
}

#[test]
fn shipped_json_dataset_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/master.json");
    let dataset = SeedDataset::load(&path).expect("load shipped dataset");
    assert_eq!(dataset, SeedDataset::builtin());
}

#[test]
fn non_finite_mrp_leaves_store_empty() {
    let test_db = common::TestDb::new("service_non_finite_mrp_leaves_store_empty.db");
    let mut store = test_db.store();

    let mut dataset = SeedDataset::builtin();
    dataset.products[3].mrp = f64::NAN;

    let result = seed_store(&mut store, &dataset, &SeedOptions::default());
    assert!(matches!(result, Err(SeedError::Dataset(_))));
    assert!(store.count_master_rows().unwrap().is_empty());
}

#[test]
fn blank_name_leaves_store_empty() {
    let test_db = common::TestDb::new("service_blank_name_leaves_store_empty.db");
    let mut store = test_db.store();

    let mut dataset = SeedDataset::builtin();
    dataset.categories[2].name = "   ".to_string();

    let result = seed_store(&mut store, &dataset, &SeedOptions::default());
    assert!(matches!(result, Err(SeedError::Dataset(_))));
    assert!(store.count_master_rows().unwrap().is_empty());
}

#[test]
fn padded_text_is_stored_trimmed() {
    let test_db = common::TestDb::new("service_padded_text_is_stored_trimmed.db");
    let mut store = test_db.store();

    let mut dataset = SeedDataset::builtin();
    dataset.taxes[0].description = "  Medicine GST 5%  ".to_string();
    dataset.categories[2].name = " Antivirals ".to_string();
    dataset.products[0].packing = "Strip of 10 Tablets ".to_string();

    seed_store(&mut store, &dataset, &SeedOptions::default()).expect("seeding should succeed");

    let taxes = store.list_taxes().unwrap();
    assert_eq!(taxes[0].description, "Medicine GST 5%");
    let categories = store.list_categories().unwrap();
    assert_eq!(categories[2].name, "Antivirals");
    let products = store.list_products().unwrap();
    assert_eq!(products[0].packing, "Strip of 10 Tablets");
}
