//! Invoices and their performances

use serde::{Deserialize, Serialize};

use crate::play::PlayId;

/// One line item on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Catalog key of the play performed
    #[serde(alias = "playID")]
    pub play_id: PlayId,
    /// Seats sold
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice
///
/// Performance order is the order of lines on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_accepts_both_play_id_spellings() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"customer":"BigCo","performances":[{"playID":"hamlet","audience":55},{"playId":"as-like","audience":35}]}"#,
        )
        .unwrap();

        assert_eq!(invoice.customer, "BigCo");
        assert_eq!(
            invoice.performances,
            vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)]
        );
    }

    #[test]
    fn test_negative_audience_is_rejected() {
        let result: Result<Performance, _> =
            serde_json::from_str(r#"{"playId":"hamlet","audience":-1}"#);
        assert!(result.is_err());
    }
}
