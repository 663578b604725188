use crate::api::dto::validation::is_present;
use crate::domain::models::account::{Account, AccountData};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: i64,
    #[schema(examples("Jane Doe"))]
    name: String,
    #[schema(examples("jane@example.com"))]
    email: String,
    #[schema(examples("1 Main St"))]
    address: String,
    #[schema(examples("555-1111"))]
    phone_number: String,
    #[schema(examples("2024-01-15"))]
    date_joined: NaiveDate,
}

/// Body of create and update requests. Every field is replaced on update.
#[derive(Debug, Validate, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AccountPayloadDTO {
    /// Accepted with any value for round-tripping a serialized account; the
    /// server assigns ids.
    #[serde(default)]
    #[schema(value_type = Option<i64>, read_only)]
    #[allow(dead_code)]
    pub id: Option<Value>,

    #[validate(custom(function = "is_present"))]
    #[schema(examples("Jane Doe"))]
    pub name: String,

    #[validate(custom(function = "is_present"))]
    #[schema(examples("jane@example.com"))]
    pub email: String,

    #[validate(custom(function = "is_present"))]
    #[schema(examples("1 Main St"))]
    pub address: String,

    #[validate(custom(function = "is_present"))]
    #[schema(examples("555-1111"))]
    pub phone_number: String,

    /// Defaults to the current date.
    #[serde(default)]
    #[schema(examples("2024-01-15"))]
    pub date_joined: Option<NaiveDate>,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            address: val.address,
            phone_number: val.phone_number,
            date_joined: val.date_joined,
        }
    }
}

impl From<AccountPayloadDTO> for AccountData {
    fn from(payload: AccountPayloadDTO) -> Self {
        AccountData {
            name: payload.name,
            email: payload.email,
            address: payload.address,
            phone_number: payload.phone_number,
            date_joined: payload
                .date_joined
                .unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}
