use crate::types::{Claim, Collection, Customer, Payment, Policy};

/// Summary of one record as shown in the TUI list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub id: i64,
    pub title: String,
    pub lines: Vec<String>,
    /// Server-assigned status, if the record kind has one
    pub status: Option<String>,
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl From<&Customer> for RecordCard {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            title: c.name.clone(),
            lines: vec![format!("Email: {}", c.email), format!("Born: {}", c.dob)],
            status: None,
        }
    }
}

impl From<&Policy> for RecordCard {
    fn from(p: &Policy) -> Self {
        Self {
            id: p.id,
            title: format!("{} Policy", p.policy_type),
            lines: vec![
                format!("Customer ID: {}", p.customer_id),
                format!("Premium: ${}", p.premium),
                format!("Coverage: ${}", or_dash(p.policy_limit.as_ref())),
            ],
            status: None,
        }
    }
}

impl From<&Claim> for RecordCard {
    fn from(c: &Claim) -> Self {
        Self {
            id: c.id,
            title: format!("Claim #{}", c.id),
            lines: vec![
                format!("Policy ID: {}", c.policy_id),
                format!("Amount: ${}", c.claim_amount),
                format!("Incident: {}", c.incident_date),
            ],
            status: c.status.clone(),
        }
    }
}

impl From<&Payment> for RecordCard {
    fn from(p: &Payment) -> Self {
        Self {
            id: p.id,
            title: format!("Payment #{}", p.id),
            lines: vec![
                format!("Customer ID: {}", p.customer_id),
                format!("Amount: ${}", p.amount),
                format!("Method: {}", p.payment_method),
                format!("Transaction: {}", or_dash(p.transaction_id.as_ref())),
            ],
            status: p.status.clone(),
        }
    }
}

/// Cards for every record of a collection, in server order
pub fn cards_for(collection: &Collection) -> Vec<RecordCard> {
    match collection {
        Collection::Customers(v) => v.iter().map(RecordCard::from).collect(),
        Collection::Policies(v) => v.iter().map(RecordCard::from).collect(),
        Collection::Claims(v) => v.iter().map(RecordCard::from).collect(),
        Collection::Payments(v) => v.iter().map(RecordCard::from).collect(),
    }
}
