use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::{Account, AccountData};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    address: String,
    phone_number: String,
    date_joined: NaiveDate,
}

#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    email: String,
    address: String,
    phone_number: String,
    date_joined: NaiveDate,
}

impl From<AccountData> for SurrealAccountContent {
    fn from(data: AccountData) -> Self {
        SurrealAccountContent {
            name: data.name,
            email: data.email,
            address: data.address,
            phone_number: data.phone_number,
            date_joined: data.date_joined,
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        let id = match acc.id.id {
            Id::Number(id) => id,
            _ => return Err(RepositoryError::InvalidKey(acc.id.to_string())),
        };

        Ok(Account {
            id,
            name: acc.name,
            email: acc.email,
            address: acc.address,
            phone_number: acc.phone_number,
            date_joined: acc.date_joined,
        })
    }
}
