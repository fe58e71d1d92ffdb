use crate::config::LOOKUP_TIMEOUT;
use curl::easy::Easy;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const IP_API_URL: &str = "http://ip-api.com/json";
const UNAVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transfer(#[from] curl::Error),
    #[error("unexpected HTTP status {0}")]
    Status(u32),
    #[error("lookup rejected: {0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// ASN and organisation shown in the session header.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrgInfo {
    pub asn: String,
    pub org: String,
}

impl OrgInfo {
    pub fn unavailable() -> Self {
        Self {
            asn: UNAVAILABLE.to_string(),
            org: UNAVAILABLE.to_string(),
        }
    }

    /// Any lookup failure degrades to placeholders.
    pub fn from_lookup(result: Result<OrgInfo, LookupError>) -> Self {
        result.unwrap_or_else(|err| {
            warn!(error = %err, "ASN lookup failed");
            Self::unavailable()
        })
    }
}

pub trait OrgLookup {
    fn lookup(&self, ip: IpAddr) -> Result<OrgInfo, LookupError>;
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: Option<String>,
    message: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    asn: Option<String>,
}

/// Queries ip-api.com over plain HTTP.
#[derive(Clone, Debug)]
pub struct IpApiClient {
    timeout: Duration,
}

impl Default for IpApiClient {
    fn default() -> Self {
        Self {
            timeout: LOOKUP_TIMEOUT,
        }
    }
}

impl OrgLookup for IpApiClient {
    fn lookup(&self, ip: IpAddr) -> Result<OrgInfo, LookupError> {
        let mut easy = Easy::new();
        easy.url(&format!("{IP_API_URL}/{ip}?fields=status,message,org,as"))?;
        easy.timeout(self.timeout)?;
        easy.follow_location(false)?;

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        if !(200..300).contains(&status) {
            return Err(LookupError::Status(status));
        }
        debug!(%ip, bytes = body.len(), "ip-api response received");
        parse_ip_info(&body)
    }
}

pub fn parse_ip_info(body: &[u8]) -> Result<OrgInfo, LookupError> {
    let response: IpApiResponse = serde_json::from_slice(body)?;
    if response.status.as_deref() == Some("fail") {
        return Err(LookupError::Rejected(
            response.message.unwrap_or_else(|| "unknown reason".to_string()),
        ));
    }
    Ok(OrgInfo {
        asn: or_unavailable(response.asn),
        org: or_unavailable(response.org),
    })
}

fn or_unavailable(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_org_and_as_fields() {
        let info = parse_ip_info(
            br#"{"status":"success","org":"Google LLC","as":"AS15169 Google LLC"}"#,
        )
        .unwrap();
        assert_eq!(info.asn, "AS15169 Google LLC");
        assert_eq!(info.org, "Google LLC");
    }

    #[test]
    fn missing_or_blank_fields_become_placeholders() {
        let info = parse_ip_info(br#"{"org":""}"#).unwrap();
        assert_eq!(info, OrgInfo::unavailable());
    }

    #[test]
    fn failed_status_is_rejected() {
        let err = parse_ip_info(br#"{"status":"fail","message":"private range"}"#).unwrap_err();
        assert!(matches!(err, LookupError::Rejected(ref msg) if msg == "private range"));
    }

    #[test]
    fn garbage_body_is_a_parse_error() {
        assert!(matches!(
            parse_ip_info(b"<html>"),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn failures_degrade_to_na() {
        let info = OrgInfo::from_lookup(Err(LookupError::Status(503)));
        assert_eq!(info.asn, "N/A");
        assert_eq!(info.org, "N/A");
    }
}
