//! Built-in demo dataset, loaded via `InMemoryProductStore::with_seed`.

use chrono::{NaiveDate, Utc};
use uuid::{Uuid, uuid};

use catalog_core::{EmployeeId, ProductId, Revision};
use catalog_products::{Product, Turnover};

fn entry(
    id: Uuid,
    name: &str,
    date: (i32, u32, u32),
    homepage: &str,
    amount: f64,
    owner: Option<Uuid>,
) -> Product {
    let now = Utc::now();
    Product {
        id: ProductId::from_uuid(id),
        revision: Revision::initial(),
        name: name.to_string(),
        release_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        homepage: Some(homepage.to_string()),
        turnover: Some(Turnover {
            amount,
            currency: "EUR".to_string(),
        }),
        owner_id: owner.map(EmployeeId::from_uuid),
        created_at: now,
        updated_at: now,
        owner_name: None,
        owner_email: None,
    }
}

/// Demo products with fixed ids, so HTTP examples and tests can address them.
pub fn products() -> Vec<Product> {
    let emp_one = uuid!("00000000-0000-0000-0000-000000000001");
    let emp_two = uuid!("00000000-0000-0000-0000-000000000002");

    vec![
        entry(
            uuid!("00000000-0000-0000-0000-000000000000"),
            "Admin",
            (2022, 1, 31),
            "https://www.acme.com",
            0.0,
            None,
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000001"),
            "Alpha",
            (2022, 1, 1),
            "https://www.acme.de",
            10.0,
            Some(emp_one),
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000002"),
            "Alpha",
            (2022, 1, 2),
            "https://www.acme.edu",
            20.0,
            Some(emp_one),
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000030"),
            "Alpha",
            (2022, 1, 3),
            "https://www.acme.ch",
            30.0,
            Some(emp_two),
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000040"),
            "Delta",
            (2022, 1, 4),
            "https://www.acme.uk",
            40.0,
            None,
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000050"),
            "Epsilon",
            (2022, 1, 5),
            "https://www.acme.jp",
            50.0,
            None,
        ),
        entry(
            uuid!("00000000-0000-0000-0000-000000000060"),
            "Phi",
            (2022, 1, 6),
            "https://www.acme.cn",
            60.0,
            None,
        ),
    ]
}
