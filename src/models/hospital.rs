use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: HospitalStatus,
    pub last_order_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HospitalStatus {
    Active,
    Inactive,
}

impl HospitalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HospitalStatus::Active => "Active",
            HospitalStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for HospitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
