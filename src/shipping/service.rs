//! Terminals service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::ShippingConfig,
    shipping::{
        errors::TerminalsServiceError,
        models::{Terminal, TerminalId},
    },
};

/// Parcel terminal directory behind the shipping-partner proxy.
///
/// Fetched on demand when the shipping delivery method is selected, never
/// eagerly; the directory is not cached.
#[derive(Debug, Clone)]
pub struct RestTerminalsService {
    config: ShippingConfig,
    http: Client,
}

impl RestTerminalsService {
    #[must_use]
    pub fn new(config: ShippingConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl TerminalsService for RestTerminalsService {
    async fn list_terminals(&self) -> Result<Vec<Terminal>, TerminalsServiceError> {
        let response = self.http.get(&self.config.proxy_url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(TerminalsServiceError::Unavailable(format!(
                "terminal request failed with status {status}: {text}"
            )));
        }

        let records: Vec<TerminalRecord> = response.json().await?;
        let mut terminals: Vec<Terminal> = records.into_iter().map(Terminal::from).collect();

        sort_by_city(&mut terminals);

        Ok(terminals)
    }
}

#[automock]
#[async_trait]
pub trait TerminalsService: Send + Sync {
    /// List all parcel terminals, sorted by city.
    async fn list_terminals(&self) -> Result<Vec<Terminal>, TerminalsServiceError>;
}

/// Case-insensitive city ordering, ties broken by address.
fn sort_by_city(terminals: &mut [Terminal]) {
    terminals.sort_by(|a, b| {
        a.city
            .to_lowercase()
            .cmp(&b.city.to_lowercase())
            .then_with(|| a.address.cmp(&b.address))
    });
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TerminalRecord {
    id: TerminalId,
    name: String,
    city: String,
    address: String,
    postal_code: String,
}

impl From<TerminalRecord> for Terminal {
    fn from(record: TerminalRecord) -> Self {
        Terminal {
            id: record.id,
            name: record.name,
            city: record.city,
            address: record.address,
            postal_code: record.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(id: &str, city: &str, address: &str) -> Terminal {
        Terminal {
            id: TerminalId::from(id),
            name: format!("{city} terminal"),
            city: city.to_string(),
            address: address.to_string(),
            postal_code: "00001".to_string(),
        }
    }

    #[test]
    fn terminals_sort_by_city_then_address() {
        let mut terminals = vec![
            terminal("3", "Vilnius", "Gedimino pr. 9"),
            terminal("1", "Kaunas", "Laisvės al. 5"),
            terminal("2", "vilnius", "Antakalnio g. 1"),
        ];

        sort_by_city(&mut terminals);

        let ids: Vec<&str> = terminals.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn record_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "LT0001",
            "name": "Central",
            "city": "Trakai",
            "address": "Vytauto g. 3",
            "postalCode": "21106"
        }"#;

        let record: TerminalRecord = serde_json::from_str(json).expect("record should parse");
        let terminal = Terminal::from(record);

        assert_eq!(terminal.id, TerminalId::from("LT0001"));
        assert_eq!(terminal.postal_code, "21106");
    }
}
