//! Client (borrower) record and the dashboard payment offers

use serde::Deserialize;

use super::decimal::Decimal;

/// The borrower record returned by `clients/get-client`
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRecord {
    /// Customer display name
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,

    /// Amount closing the loan outright
    #[serde(default)]
    pub fore_closure: Decimal,
    #[serde(default)]
    pub foreclosure_reward: Decimal,

    /// Negotiated settlement amount
    #[serde(default)]
    pub settlement: Decimal,
    #[serde(default)]
    pub settlement_reward: Decimal,

    /// Smallest accepted part payment
    #[serde(default)]
    pub minimum_part_payment: Decimal,
    #[serde(default)]
    pub minimum_part_payment_reward: Decimal,

    /// External payment link shared by all three offers
    #[serde(default)]
    pub payment_url: Option<String>,

    /// Set once the backend has confirmed a payment
    #[serde(default, rename = "isPaid")]
    pub is_paid: bool,
}

/// One of the three repayment offers shown on the dashboard
#[derive(Debug, Clone)]
pub struct PaymentOption {
    pub title: &'static str,
    pub amount: Decimal,
    pub reward: Decimal,
    pub payment_url: Option<String>,
}

impl ClientRecord {
    /// The dashboard's three offers, in display order
    pub fn payment_options(&self) -> Vec<PaymentOption> {
        vec![
            PaymentOption {
                title: "Foreclosure Amount",
                amount: self.fore_closure,
                reward: self.foreclosure_reward,
                payment_url: self.payment_url.clone(),
            },
            PaymentOption {
                title: "Settlement Amount",
                amount: self.settlement,
                reward: self.settlement_reward,
                payment_url: self.payment_url.clone(),
            },
            PaymentOption {
                title: "Minimum Payment",
                amount: self.minimum_part_payment,
                reward: self.minimum_part_payment_reward,
                payment_url: self.payment_url.clone(),
            },
        ]
    }
}

/// Envelope for `clients/get-client`
#[derive(Debug, Clone, Deserialize)]
pub struct ClientResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub client: Option<ClientRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wrapped_decimals_and_defaults() {
        let json = r#"{
            "success": true,
            "client": {
                "customer": "Asha",
                "phone": "9876543210",
                "fore_closure": {"$numberDecimal": "15000"},
                "foreclosure_reward": {"$numberDecimal": "1500.50"},
                "settlement": "9000",
                "minimum_part_payment": 2500,
                "payment_url": "https://pay.example.com/abc",
                "isPaid": false
            }
        }"#;

        let response: ClientResponse = serde_json::from_str(json).expect("decode");
        let client = response.client.expect("client");

        assert_eq!(client.fore_closure.value(), 15000.0);
        assert_eq!(client.foreclosure_reward.value(), 1500.5);
        assert_eq!(client.settlement.value(), 9000.0);
        // Absent fields read as zero
        assert_eq!(client.settlement_reward.value(), 0.0);
        assert!(!client.is_paid);

        let options = client.payment_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].title, "Foreclosure Amount");
        assert_eq!(options[2].amount.value(), 2500.0);
        assert_eq!(
            options[1].payment_url.as_deref(),
            Some("https://pay.example.com/abc")
        );
    }
}
