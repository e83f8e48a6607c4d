//! `tabled` renderings of collections for `coverdesk <kind> ls`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::types::{Claim, Collection, Customer, Payment, Policy};

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Date of Birth")]
    dob: String,
}

#[derive(Tabled)]
struct PolicyRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Type")]
    policy_type: String,
    #[tabled(rename = "Premium")]
    premium: String,
    #[tabled(rename = "Coverage")]
    coverage: String,
}

#[derive(Tabled)]
struct ClaimRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Policy")]
    policy_id: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Incident")]
    incident_date: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Customer")]
    customer_id: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Transaction")]
    transaction_id: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn dash(value: Option<&String>) -> String {
    value.cloned().unwrap_or_else(|| "-".to_string())
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            dob: c.dob.clone(),
        }
    }
}

impl From<&Policy> for PolicyRow {
    fn from(p: &Policy) -> Self {
        Self {
            id: p.id,
            customer_id: p.customer_id,
            policy_type: p.policy_type.to_string(),
            premium: p.premium.to_string(),
            coverage: p
                .policy_limit
                .as_ref()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl From<&Claim> for ClaimRow {
    fn from(c: &Claim) -> Self {
        Self {
            id: c.id,
            policy_id: c.policy_id,
            amount: c.claim_amount.to_string(),
            incident_date: c.incident_date.clone(),
            status: dash(c.status.as_ref()),
        }
    }
}

impl From<&Payment> for PaymentRow {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id,
            customer_id: p.customer_id,
            amount: p.amount.to_string(),
            method: p.payment_method.to_string(),
            transaction_id: dash(p.transaction_id.as_ref()),
            status: dash(p.status.as_ref()),
        }
    }
}

fn build<'a, T, R>(records: &'a [T]) -> Table
where
    R: Tabled + From<&'a T>,
{
    let mut table = Table::new(records.iter().map(R::from));
    table.with(Style::modern());
    table
}

/// Render a collection as a table, or `None` when it is empty
pub fn render_table(collection: &Collection) -> Option<String> {
    if collection.is_empty() {
        return None;
    }
    let table = match collection {
        Collection::Customers(v) => build::<_, CustomerRow>(v.as_slice()),
        Collection::Policies(v) => build::<_, PolicyRow>(v.as_slice()),
        Collection::Claims(v) => build::<_, ClaimRow>(v.as_slice()),
        Collection::Payments(v) => build::<_, PaymentRow>(v.as_slice()),
    };
    Some(table.to_string())
}
