use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// Every client-writable field of an account. Used for both creation and
/// wholesale replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountData {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

impl Account {
    pub fn with_data(id: i64, data: AccountData) -> Self {
        Account {
            id,
            name: data.name,
            email: data.email,
            address: data.address,
            phone_number: data.phone_number,
            date_joined: data.date_joined,
        }
    }
}
