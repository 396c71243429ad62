use super::{
    CategoryRow, GenericRow, ManufacturerRow, ProductGenericRow, ProductRow, ProductTypeRow,
    ScheduleTypeRow, SeedDataset, TaxRow,
};

fn tax(key: &str, description: &str, igst: f64) -> TaxRow {
    TaxRow {
        key: key.to_string(),
        description: description.to_string(),
        igst,
        cgst: igst / 2.0,
        sgst: igst / 2.0,
    }
}

fn product_type(key: &str, name: &str, short_name: &str) -> ProductTypeRow {
    ProductTypeRow {
        key: key.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
    }
}

fn category(key: &str, name: &str) -> CategoryRow {
    CategoryRow {
        key: key.to_string(),
        name: name.to_string(),
    }
}

struct Contact<'a> {
    address: &'a str,
    city: &'a str,
    state: &'a str,
    pin: &'a str,
    person: &'a str,
    phone: &'a str,
    email: &'a str,
}

fn manufacturer(key: &str, name: &str, short_name: &str, contact: Contact<'_>) -> ManufacturerRow {
    ManufacturerRow {
        key: key.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        address: Some(contact.address.to_string()),
        city: Some(contact.city.to_string()),
        state: Some(contact.state.to_string()),
        pin: Some(contact.pin.to_string()),
        contact_name: Some(contact.person.to_string()),
        contact_phone: Some(contact.phone.to_string()),
        email: Some(contact.email.to_string()),
    }
}

fn schedule_type(key: &str, name: &str) -> ScheduleTypeRow {
    ScheduleTypeRow {
        key: key.to_string(),
        name: name.to_string(),
    }
}

fn generic(key: &str, name: &str, category: &str) -> GenericRow {
    GenericRow {
        key: key.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    }
}

/// Purchase and sale share the same slab for every built-in product.
struct Listing<'a> {
    key: &'a str,
    name: &'a str,
    hsn_code: &'a str,
    packing: &'a str,
    purchase_unit: &'a str,
    product_type: &'a str,
    manufacturer: &'a str,
    mrp: f64,
    tax: &'a str,
    schedule_type: &'a str,
}

fn product(listing: Listing<'_>) -> ProductRow {
    ProductRow {
        key: listing.key.to_string(),
        name: listing.name.to_string(),
        hsn_code: Some(listing.hsn_code.to_string()),
        packing: listing.packing.to_string(),
        purchase_unit: listing.purchase_unit.to_string(),
        sale_unit: "1".to_string(),
        product_type: listing.product_type.to_string(),
        manufacturer: listing.manufacturer.to_string(),
        mrp: listing.mrp,
        purchase_tax: listing.tax.to_string(),
        sale_tax: listing.tax.to_string(),
        schedule_type: listing.schedule_type.to_string(),
        is_active: true,
    }
}

fn mapping(product: &str, generic: &str, strength: &str) -> ProductGenericRow {
    ProductGenericRow {
        product: product.to_string(),
        generic: generic.to_string(),
        strength: strength.to_string(),
    }
}

impl SeedDataset {
    /// Reference data shipped with the application.
    pub fn builtin() -> Self {
        Self {
            taxes: vec![
                tax("gst5", "Medicine GST 5%", 5.0),
                tax("gst12", "Medicine GST 12%", 12.0),
                tax("gst18", "Equipment GST 18%", 18.0),
            ],
            product_types: vec![
                product_type("tablet", "Tablet", "Tab"),
                product_type("capsule", "Capsule", "Cap"),
                product_type("syrup", "Syrup", "Syp"),
                product_type("injection", "Injection", "Inj"),
                product_type("cream", "Cream", "Crm"),
            ],
            categories: vec![
                category("antibiotics", "Antibiotics"),
                category("analgesics", "Analgesics"),
                category("antivirals", "Antivirals"),
                category("vitamins", "Vitamins"),
                category("diuretics", "Diuretics"),
            ],
            manufacturers: vec![
                manufacturer(
                    "cipla",
                    "Cipla Ltd",
                    "CIP",
                    Contact {
                        address: "289, Bellasis Road",
                        city: "Mumbai",
                        state: "Maharashtra",
                        pin: "400008",
                        person: "John Doe",
                        phone: "+91-22-23456789",
                        email: "contact@cipla.com",
                    },
                ),
                manufacturer(
                    "ranbaxy",
                    "Ranbaxy Laboratories",
                    "RBX",
                    Contact {
                        address: "Plot 90, Sector 32",
                        city: "Gurgaon",
                        state: "Haryana",
                        pin: "122001",
                        person: "Jane Smith",
                        phone: "+91-124-4135000",
                        email: "info@ranbaxy.com",
                    },
                ),
                manufacturer(
                    "dr-reddys",
                    "Dr. Reddy's Laboratories",
                    "DRR",
                    Contact {
                        address: "7-1-27, Ameerpet",
                        city: "Hyderabad",
                        state: "Telangana",
                        pin: "500016",
                        person: "Rajesh Kumar",
                        phone: "+91-40-49002900",
                        email: "info@drreddys.com",
                    },
                ),
                manufacturer(
                    "alembic",
                    "Alembic Pharmaceuticals",
                    "ALE",
                    Contact {
                        address: "Alembic Road",
                        city: "Vadodara",
                        state: "Gujarat",
                        pin: "390003",
                        person: "Amit Patel",
                        phone: "+91-265-2280550",
                        email: "contact@alembic.com",
                    },
                ),
            ],
            schedule_types: vec![
                schedule_type("schedule-h", "Schedule H"),
                schedule_type("schedule-h1", "Schedule H1"),
                schedule_type("schedule-x", "Schedule X"),
                schedule_type("otc", "OTC"),
            ],
            generics: vec![
                generic("paracetamol", "Paracetamol", "analgesics"),
                generic("amoxicillin", "Amoxicillin", "antibiotics"),
                generic("azithromycin", "Azithromycin", "antibiotics"),
                generic("vitamin-c", "Vitamin C", "vitamins"),
                generic("cetirizine", "Cetirizine", "analgesics"),
            ],
            products: vec![
                product(Listing {
                    key: "dolo-650",
                    name: "Dolo 650",
                    hsn_code: "30049099",
                    packing: "Strip of 10 Tablets",
                    purchase_unit: "10",
                    product_type: "tablet",
                    manufacturer: "cipla",
                    mrp: 35.50,
                    tax: "gst5",
                    schedule_type: "otc",
                }),
                product(Listing {
                    key: "amoxil-500",
                    name: "Amoxil 500",
                    hsn_code: "30041010",
                    packing: "Strip of 10 Capsules",
                    purchase_unit: "10",
                    product_type: "capsule",
                    manufacturer: "ranbaxy",
                    mrp: 125.00,
                    tax: "gst12",
                    schedule_type: "schedule-h",
                }),
                product(Listing {
                    key: "azithral-500",
                    name: "Azithral 500",
                    hsn_code: "30041020",
                    packing: "Strip of 3 Tablets",
                    purchase_unit: "3",
                    product_type: "tablet",
                    manufacturer: "dr-reddys",
                    mrp: 89.50,
                    tax: "gst12",
                    schedule_type: "schedule-h",
                }),
                product(Listing {
                    key: "benadryl-syrup",
                    name: "Benadryl Syrup",
                    hsn_code: "30042090",
                    packing: "Bottle of 100ml",
                    purchase_unit: "100",
                    product_type: "syrup",
                    manufacturer: "alembic",
                    mrp: 95.00,
                    tax: "gst5",
                    schedule_type: "otc",
                }),
            ],
            product_generics: vec![
                mapping("dolo-650", "paracetamol", "650mg"),
                mapping("amoxil-500", "amoxicillin", "500mg"),
                mapping("azithral-500", "azithromycin", "500mg"),
                mapping("benadryl-syrup", "cetirizine", "10mg/5ml"),
            ],
        }
    }
}
