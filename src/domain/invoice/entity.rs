use serde::{Deserialize, Serialize};

/// Lifecycle status of a mock invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    New,
    Processing,
    Funded,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Funded => "funded",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// `INV-###-ABBR`
    pub id: String,
    pub client: String,
    /// Whole dollars
    pub amount: u32,
    pub risk: f64,
    /// `TIQ-####`
    #[serde(rename = "tokenId")]
    pub token_id: String,
    pub status: InvoiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_wire_format() {
        let invoice = Invoice {
            id: "INV-123-ACME".to_string(),
            client: "Acme Group".to_string(),
            amount: 120_000,
            risk: 0.0123,
            token_id: "TIQ-4567".to_string(),
            status: InvoiceStatus::Processing,
        };

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["tokenId"], "TIQ-4567");
        assert_eq!(json["status"], "processing");
        assert!(json.get("token_id").is_none());

        let back: Invoice = serde_json::from_value(json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<InvoiceStatus>("\"paid\"");
        assert!(result.is_err());
    }
}
