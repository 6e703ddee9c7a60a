//! Builds one Gatus endpoint per hostname

use super::schema::{Alert, Endpoint};

pub const CHECK_INTERVAL: &str = "5m";
pub const CONDITIONS: &[&str] = &["[STATUS] == 200", "[RESPONSE_TIME] < 3000"];
pub const ALERT_TYPE: &str = "discord";
pub const FAILURE_THRESHOLD: u32 = 3;
pub const SUCCESS_THRESHOLD: u32 = 2;

/// Marker of the second-generation production cluster domains.
const PRODV2_MARKER: &str = "prodv2";

/// First label of `fqdn`, suffixed with `-prod` for prodv2 hosts.
pub fn endpoint_name(fqdn: &str) -> String {
    let label = fqdn.split('.').next().unwrap_or(fqdn);
    if fqdn.contains(PRODV2_MARKER) {
        format!("{}-prod", label)
    } else {
        label.to_string()
    }
}

pub fn synthesize_endpoint(fqdn: &str) -> Endpoint {
    Endpoint {
        name: endpoint_name(fqdn),
        url: format!("https://{}", fqdn),
        interval: CHECK_INTERVAL.to_string(),
        conditions: CONDITIONS.iter().map(|c| c.to_string()).collect(),
        alerts: vec![Alert {
            alert_type: ALERT_TYPE.to_string(),
            failure_threshold: FAILURE_THRESHOLD,
            success_threshold: SUCCESS_THRESHOLD,
        }],
    }
}
