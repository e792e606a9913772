//! Country-to-currency resolution
//!
//! A small injected mapping from ISO 3166 alpha-2 country codes to ISO 4217
//! currency codes. Resolution is total: unmapped or empty input yields the
//! configured fallback.

use crate::constants::fallback;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Injected country → currency mapping with a fixed fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyTable {
    /// Currency returned for unmapped country codes
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Country code (uppercase alpha-2) → currency code (alpha-3)
    #[serde(default = "default_table")]
    pub table: HashMap<String, String>,
}

fn default_fallback() -> String {
    fallback::CURRENCY_CODE.to_string()
}

fn default_table() -> HashMap<String, String> {
    let mut table = HashMap::new();
    table.insert("US".to_string(), "USD".to_string());
    table.insert("GB".to_string(), "GBP".to_string());
    table.insert("EU".to_string(), "EUR".to_string());
    table.insert("AU".to_string(), "AUD".to_string());
    table.insert("CA".to_string(), "CAD".to_string());
    table
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            table: default_table(),
        }
    }
}

impl CurrencyTable {
    /// Resolve a country code to a currency code
    ///
    /// Lookup is case-insensitive; anything not in the table resolves to
    /// the fallback. Never fails.
    pub fn resolve(&self, country_code: &str) -> String {
        self.table
            .get(&country_code.to_uppercase())
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_codes() {
        let table = CurrencyTable::default();
        assert_eq!(table.resolve("US"), "USD");
        assert_eq!(table.resolve("GB"), "GBP");
        assert_eq!(table.resolve("AU"), "AUD");
    }

    #[test]
    fn test_unmapped_code_falls_back() {
        let table = CurrencyTable::default();
        assert_eq!(table.resolve("FR"), "USD");
        assert_eq!(table.resolve("JP"), "USD");
    }

    #[test]
    fn test_empty_code_falls_back() {
        let table = CurrencyTable::default();
        assert_eq!(table.resolve(""), "USD");
    }

    #[test]
    fn test_case_insensitive() {
        let table = CurrencyTable::default();
        assert_eq!(table.resolve("gb"), "GBP");
    }

    #[test]
    fn test_extended_table() {
        let mut table = CurrencyTable::default();
        table.table.insert("JP".to_string(), "JPY".to_string());
        assert_eq!(table.resolve("JP"), "JPY");
        assert_eq!(table.resolve("BR"), "USD");
    }

    #[test]
    fn test_custom_fallback() {
        let table = CurrencyTable {
            fallback: "EUR".to_string(),
            table: HashMap::new(),
        };
        assert_eq!(table.resolve("US"), "EUR");
    }
}
