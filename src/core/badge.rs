//! Row badge coloring.
//!
//! Every rule maps a field value to one of three variants. The stylesheet
//! gives `Destructive` the warning color; the other two are neutral.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{HospitalStatus, OrderStatus, PaymentStatus, StockStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

/// Thresholds for the inventory warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRules {
    pub low_stock_threshold: u32,
    pub expiry_warning_days: i64,
}

impl Default for BadgeRules {
    fn default() -> Self {
        Self {
            low_stock_threshold: 20,
            expiry_warning_days: 30,
        }
    }
}

impl BadgeRules {
    pub fn is_low_stock(&self, quantity: u32) -> bool {
        quantity < self.low_stock_threshold
    }

    /// An expiry date counts from midnight UTC of that day.
    pub fn is_near_expiry(&self, expiry: NaiveDate, now: DateTime<Utc>) -> bool {
        let expires_at = expiry.and_time(chrono::NaiveTime::MIN).and_utc();
        expires_at < now + Duration::days(self.expiry_warning_days)
    }

    pub fn quantity(&self, quantity: u32) -> BadgeVariant {
        if self.is_low_stock(quantity) {
            BadgeVariant::Destructive
        } else {
            BadgeVariant::Default
        }
    }

    pub fn expiry(&self, expiry: NaiveDate, now: DateTime<Utc>) -> BadgeVariant {
        if self.is_near_expiry(expiry, now) {
            BadgeVariant::Destructive
        } else {
            BadgeVariant::Default
        }
    }
}

pub fn payment_status(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Paid => BadgeVariant::Default,
        PaymentStatus::Unpaid => BadgeVariant::Destructive,
    }
}

pub fn stock_status(status: StockStatus) -> BadgeVariant {
    match status {
        StockStatus::Available => BadgeVariant::Default,
        StockStatus::Unavailable => BadgeVariant::Destructive,
    }
}

pub fn order_status(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Accepted => BadgeVariant::Default,
        OrderStatus::Declined => BadgeVariant::Destructive,
        OrderStatus::Pending => BadgeVariant::Secondary,
    }
}

pub fn hospital_status(status: HospitalStatus) -> BadgeVariant {
    match status {
        HospitalStatus::Active => BadgeVariant::Default,
        HospitalStatus::Inactive => BadgeVariant::Secondary,
    }
}
