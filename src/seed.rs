//! Reference data shared by the `seed` binary and mock mode.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    entity::{
        AccessoryTypes, Locations, Partners, ToyConditions, Users, accessory_types, locations,
        partners, toy_conditions, users,
    },
    models::Role,
    services::auth_service::hash_password,
};

/// Password of the admin account created in mock mode.
pub const MOCK_ADMIN_PASSWORD: &str = "admin1234";

const TOY_CONDITIONS: [&str; 3] = ["New", "Gently Used", "Play-worn"];
const ACCESSORY_TYPES: [&str; 3] = ["Stroller", "Car Seat", "High Chair"];
const LOCATIONS: [(&str, &str, &str); 2] = [
    (
        "Northwood Community Center",
        "4500 Northwood Ave",
        "Mon-Fri: 9am - 5pm",
    ),
    (
        "Southside Public Library",
        "876 Library Ln",
        "Mon-Sat: 10am - 6pm",
    ),
];
const PARTNERS: [(&str, &str, &str); 2] = [
    (
        "Children's Joy Foundation",
        "Brings refurbished toys to children in shelters and hospitals.",
        "charity logo",
    ),
    (
        "Northwood School District",
        "Stocks classrooms and after-school programs across the district.",
        "school logo",
    ),
];

/// Insert lookup rows into any lookup table that is still empty.
pub async fn seed_reference_data(conn: &DatabaseConnection) -> anyhow::Result<()> {
    if ToyConditions::find().count(conn).await? == 0 {
        for name in TOY_CONDITIONS {
            toy_conditions::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            }
            .insert(conn)
            .await?;
        }
        tracing::debug!("seeded toy conditions");
    }

    if AccessoryTypes::find().count(conn).await? == 0 {
        for name in ACCESSORY_TYPES {
            accessory_types::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
            }
            .insert(conn)
            .await?;
        }
        tracing::debug!("seeded accessory types");
    }

    if Locations::find().count(conn).await? == 0 {
        for (name, address, hours) in LOCATIONS {
            locations::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                address: Set(address.to_string()),
                hours: Set(Some(hours.to_string())),
            }
            .insert(conn)
            .await?;
        }
        tracing::debug!("seeded locations");
    }

    if Partners::find().count(conn).await? == 0 {
        for (name, description, hint) in PARTNERS {
            partners::ActiveModel {
                id: NotSet,
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                logo_url: Set(None),
                logo_hint: Set(Some(hint.to_string())),
            }
            .insert(conn)
            .await?;
        }
        tracing::debug!("seeded partners");
    }

    Ok(())
}

/// Ensure the admin account exists. An existing account keeps its password
/// and is promoted to admin if needed.
pub async fn seed_admin(
    conn: &DatabaseConnection,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let existing = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await?;

    if let Some(user) = existing {
        if user.role != Role::Admin.as_str() {
            let id = user.id;
            let mut active: users::ActiveModel = user.into();
            active.role = Set(Role::Admin.as_str().to_string());
            active.update(conn).await?;
            tracing::info!(%email, "promoted existing account to admin");
            return Ok(id);
        }
        return Ok(user.id);
    }

    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;
    let user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Admin".to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        role: Set(Role::Admin.as_str().to_string()),
        avatar: Set(Some(format!("https://i.pravatar.cc/150?u={email}"))),
        created_at: Set(Utc::now().into()),
    }
    .insert(conn)
    .await?;

    tracing::info!(%email, "admin account created");
    Ok(user.id)
}
