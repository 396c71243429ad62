use mockall::mock;

use super::{
    CategoryWriter, GenericWriter, ManufacturerWriter, MasterDataReader, ProductGenericWriter,
    ProductTypeWriter, ProductWriter, ScheduleTypeWriter, TaxWriter,
};
use crate::domain::{
    category::{Category, NewCategory},
    counts::EntityCounts,
    generic::{Generic, NewGeneric},
    manufacturer::{Manufacturer, NewManufacturer},
    product::{NewProduct, Product},
    product_generic::{NewProductGeneric, ProductGeneric},
    product_type::{NewProductType, ProductType},
    schedule_type::{NewScheduleType, ScheduleType},
    tax::{NewTax, Tax},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub TaxWriter {}

    impl TaxWriter for TaxWriter {
        fn create_tax(&mut self, new_tax: &NewTax) -> RepositoryResult<Tax>;
    }
}

mock! {
    pub ProductTypeWriter {}

    impl ProductTypeWriter for ProductTypeWriter {
        fn create_product_type(&mut self, new_type: &NewProductType) -> RepositoryResult<ProductType>;
    }
}

mock! {
    pub CategoryWriter {}

    impl CategoryWriter for CategoryWriter {
        fn create_category(&mut self, new_category: &NewCategory) -> RepositoryResult<Category>;
    }
}

mock! {
    pub ManufacturerWriter {}

    impl ManufacturerWriter for ManufacturerWriter {
        fn create_manufacturer(&mut self, new_manufacturer: &NewManufacturer) -> RepositoryResult<Manufacturer>;
    }
}

mock! {
    pub ScheduleTypeWriter {}

    impl ScheduleTypeWriter for ScheduleTypeWriter {
        fn create_schedule_type(&mut self, new_schedule_type: &NewScheduleType) -> RepositoryResult<ScheduleType>;
    }
}

mock! {
    pub GenericWriter {}

    impl GenericWriter for GenericWriter {
        fn create_generic(&mut self, new_generic: &NewGeneric) -> RepositoryResult<Generic>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&mut self, new_product: &NewProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub ProductGenericWriter {}

    impl ProductGenericWriter for ProductGenericWriter {
        fn create_product_generic(&mut self, new_mapping: &NewProductGeneric) -> RepositoryResult<ProductGeneric>;
    }
}

mock! {
    pub MasterDataReader {}

    impl MasterDataReader for MasterDataReader {
        fn count_master_rows(&mut self) -> RepositoryResult<EntityCounts>;
    }
}
