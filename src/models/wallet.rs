use serde::Deserialize;

/// Body of the wallet endpoints; getWallet has no message field
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletResponse {
    pub wallet_balance: f64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_and_without_message() {
        let response: WalletResponse =
            serde_json::from_str(r#"{"username": "alice", "wallet_balance": 42.5}"#).unwrap();
        assert_eq!(response.wallet_balance, 42.5);
        assert_eq!(response.message, None);

        let response: WalletResponse = serde_json::from_str(
            r#"{"message": "User alice's wallet updated successfully by 10. New balance: 52.5", "wallet_balance": 52.5}"#,
        )
        .unwrap();
        assert_eq!(response.wallet_balance, 52.5);
        assert!(response.message.is_some());
    }
}
