use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoverdeskError, Result};

/// One of the four independently managed record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Customer,
    Policy,
    Claim,
    Payment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customer,
        EntityKind::Policy,
        EntityKind::Claim,
        EntityKind::Payment,
    ];

    /// Path segment under the API base (`{base}/{path}`)
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Policy => "policy",
            EntityKind::Claim => "claim",
            EntityKind::Payment => "payment",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::Policy => "policies",
            EntityKind::Claim => "claims",
            EntityKind::Payment => "payments",
        }
    }

    /// Tab title
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Customer => "Customers",
            EntityKind::Policy => "Policies",
            EntityKind::Claim => "Claims",
            EntityKind::Payment => "Payments",
        }
    }

    /// Claims and payments are immutable once created.
    pub fn supports_delete(self) -> bool {
        matches!(self, EntityKind::Customer | EntityKind::Policy)
    }

    pub fn index(self) -> usize {
        match self {
            EntityKind::Customer => 0,
            EntityKind::Policy => 1,
            EntityKind::Claim => 2,
            EntityKind::Payment => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the next tab (wrapping)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous tab (wrapping)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for EntityKind {
    type Err = CoverdeskError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|k| k.path() == lower || k.plural() == lower)
            .ok_or_else(|| {
                CoverdeskError::Config(format!(
                    "unknown entity kind '{}', expected one of: customers, policies, claims, payments",
                    s
                ))
            })
    }
}

/// Monetary value as the server sent it.
///
/// Kept verbatim so the client never reformats server-computed numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Policy type as sent by the server.
///
/// Values outside the known set are kept verbatim in `Other` so a single
/// unexpected record does not fail the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyType {
    Health,
    Auto,
    Life,
    Home,
    Other(String),
}

impl PolicyType {
    pub fn as_str(&self) -> &str {
        match self {
            PolicyType::Health => "HEALTH",
            PolicyType::Auto => "AUTO",
            PolicyType::Life => "LIFE",
            PolicyType::Home => "HOME",
            PolicyType::Other(s) => s,
        }
    }
}

impl From<String> for PolicyType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HEALTH" => PolicyType::Health,
            "AUTO" => PolicyType::Auto,
            "LIFE" => PolicyType::Life,
            "HOME" => PolicyType::Home,
            _ => PolicyType::Other(s),
        }
    }
}

impl From<PolicyType> for String {
    fn from(p: PolicyType) -> Self {
        match p {
            PolicyType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment method as sent by the server; unknown methods land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    BankTransfer,
    Upi,
    Other(String),
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Other(s) => s,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CREDIT_CARD" => PaymentMethod::CreditCard,
            "DEBIT_CARD" => PaymentMethod::DebitCard,
            "BANK_TRANSFER" => PaymentMethod::BankTransfer,
            "UPI" => PaymentMethod::Upi,
            _ => PaymentMethod::Other(s),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(m: PaymentMethod) -> Self {
        match m {
            PaymentMethod::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: i64,
    pub customer_id: i64,
    pub policy_type: PolicyType,
    pub premium: Amount,
    /// Computed by the server from the premium and policy type
    #[serde(default)]
    pub policy_limit: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: i64,
    pub policy_id: i64,
    pub claim_amount: Amount,
    pub incident_date: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub customer_id: i64,
    pub amount: Amount,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A full snapshot of one entity kind as returned by `GET {base}/{kind}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
    Customers(Vec<Customer>),
    Policies(Vec<Policy>),
    Claims(Vec<Claim>),
    Payments(Vec<Payment>),
}

impl Collection {
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Customer => Collection::Customers(Vec::new()),
            EntityKind::Policy => Collection::Policies(Vec::new()),
            EntityKind::Claim => Collection::Claims(Vec::new()),
            EntityKind::Payment => Collection::Payments(Vec::new()),
        }
    }

    /// Parse a JSON array body for the given kind. Order is preserved.
    pub fn from_json(kind: EntityKind, body: &str) -> Result<Self> {
        Ok(match kind {
            EntityKind::Customer => Collection::Customers(serde_json::from_str(body)?),
            EntityKind::Policy => Collection::Policies(serde_json::from_str(body)?),
            EntityKind::Claim => Collection::Claims(serde_json::from_str(body)?),
            EntityKind::Payment => Collection::Payments(serde_json::from_str(body)?),
        })
    }

    pub fn to_json(&self) -> Result<String> {
        let json = match self {
            Collection::Customers(v) => serde_json::to_string_pretty(v)?,
            Collection::Policies(v) => serde_json::to_string_pretty(v)?,
            Collection::Claims(v) => serde_json::to_string_pretty(v)?,
            Collection::Payments(v) => serde_json::to_string_pretty(v)?,
        };
        Ok(json)
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Collection::Customers(_) => EntityKind::Customer,
            Collection::Policies(_) => EntityKind::Policy,
            Collection::Claims(_) => EntityKind::Claim,
            Collection::Payments(_) => EntityKind::Payment,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collection::Customers(v) => v.len(),
            Collection::Policies(v) => v.len(),
            Collection::Claims(v) => v.len(),
            Collection::Payments(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record ids in server order
    pub fn ids(&self) -> Vec<i64> {
        match self {
            Collection::Customers(v) => v.iter().map(|r| r.id).collect(),
            Collection::Policies(v) => v.iter().map(|r| r.id).collect(),
            Collection::Claims(v) => v.iter().map(|r| r.id).collect(),
            Collection::Payments(v) => v.iter().map(|r| r.id).collect(),
        }
    }
}
