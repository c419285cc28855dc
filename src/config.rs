//! Runtime Configuration
//!
//! Starts from the JSON embedded in `index.html` (if any), then applies
//! query-string overrides such as `?removal=drop-share&currency=%E2%82%AC`.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;
use split_ledger::BillConfig;

/// Id of the `<script type="application/json">` element holding defaults
const CONFIG_ELEMENT_ID: &str = "split-config";

/// Resolve the config for this page load
pub fn load_config() -> BillConfig {
    let base = embedded_config().unwrap_or_default();
    let search = window().location().search().unwrap_or_default();
    let config = base.with_overrides(parse_query(&search));
    log::info!(
        "[CONFIG] removal={} currency={:?}",
        config.removal.as_str(),
        config.currency
    );
    config
}

fn embedded_config() -> Option<BillConfig> {
    let text = document().get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    match BillConfig::from_json(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("[CONFIG] Ignoring embedded config: {}", e);
            None
        }
    }
}

/// Split `?a=1&b=two` into decoded key/value pairs
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
