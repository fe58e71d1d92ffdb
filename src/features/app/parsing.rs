use crate::data_model::target::{MethodKind, Target, TargetPatch, TargetRecord, ValidationError};

/// Parses a 1-based list position typed by the user into a store index.
pub fn parse_index(input: &str, len: usize) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    let number = trimmed
        .parse::<usize>()
        .map_err(|_| ValidationError::NotANumber {
            input: trimmed.to_string(),
        })?;
    match number.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(ValidationError::IndexOutOfRange {
            index: number.saturating_sub(1),
            len,
        }),
    }
}

/// Blank input means no port.
pub fn parse_port(input: &str) -> Result<Option<u32>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::NotANumber {
            input: trimmed.to_string(),
        })
}

/// Case-insensitive `ICMP`/`TCP`. Blank input means unspecified.
pub fn parse_method(input: &str) -> Result<Option<MethodKind>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "icmp" => Ok(Some(MethodKind::Icmp)),
        "tcp" => Ok(Some(MethodKind::Tcp)),
        _ => Err(ValidationError::UnknownMethod {
            input: trimmed.to_string(),
        }),
    }
}

/// Builds an unvalidated record from the create form. The method defaults to ICMP.
pub fn record_from_form(
    name: &str,
    host: &str,
    method: &str,
    port: &str,
) -> Result<TargetRecord, ValidationError> {
    Ok(TargetRecord {
        name: name.trim().to_string(),
        host: host.trim().to_string(),
        method: parse_method(method)?.unwrap_or(MethodKind::Icmp),
        port: parse_port(port)?,
    })
}

/// Builds a patch from the edit form; blank fields keep the current value.
pub fn patch_from_form(
    name: &str,
    host: &str,
    method: &str,
    port: &str,
) -> Result<TargetPatch, ValidationError> {
    Ok(TargetPatch {
        name: non_blank(name),
        host: non_blank(host),
        method: parse_method(method)?,
        port: parse_port(port)?,
    })
}

/// Target for a one-off quick ping.
pub fn quick_target(host: &str, method: &str, port: &str) -> Result<Target, ValidationError> {
    let kind = parse_method(method)?.unwrap_or(MethodKind::Icmp);
    Target::new(host, kind, parse_port(port)?)
}

fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::target::ProbeMethod;

    #[test]
    fn parse_index_converts_to_zero_based() {
        assert_eq!(parse_index("1", 3), Ok(0));
        assert_eq!(parse_index(" 3 ", 3), Ok(2));
    }

    #[test]
    fn parse_index_rejects_out_of_range() {
        assert_eq!(
            parse_index("4", 3),
            Err(ValidationError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            parse_index("0", 3),
            Err(ValidationError::IndexOutOfRange { index: 0, len: 3 })
        );
        assert!(matches!(
            parse_index("two", 3),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn parse_port_handles_blank_and_garbage() {
        assert_eq!(parse_port(""), Ok(None));
        assert_eq!(parse_port(" 8080 "), Ok(Some(8080)));
        assert_eq!(
            parse_port("http"),
            Err(ValidationError::NotANumber {
                input: "http".to_string()
            })
        );
    }

    #[test]
    fn parse_method_is_case_insensitive() {
        assert_eq!(parse_method("tcp"), Ok(Some(MethodKind::Tcp)));
        assert_eq!(parse_method("Icmp"), Ok(Some(MethodKind::Icmp)));
        assert_eq!(parse_method("  "), Ok(None));
        assert!(matches!(
            parse_method("udp"),
            Err(ValidationError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn record_from_form_defaults_to_icmp() {
        let record = record_from_form("Home Router", "192.168.1.1", "", "").unwrap();
        assert_eq!(record.method, MethodKind::Icmp);
        assert_eq!(record.port, None);
    }

    #[test]
    fn patch_from_form_treats_blank_as_keep() {
        let patch = patch_from_form("", "  ", "", "").unwrap();
        assert!(patch.is_empty());

        let patch = patch_from_form("Gateway", "", "TCP", "443").unwrap();
        assert_eq!(patch.name.as_deref(), Some("Gateway"));
        assert_eq!(patch.host, None);
        assert_eq!(patch.method, Some(MethodKind::Tcp));
        assert_eq!(patch.port, Some(443));
    }

    #[test]
    fn quick_target_validates_port() {
        let target = quick_target("example.com", "tcp", "443").unwrap();
        assert_eq!(target.method(), ProbeMethod::Tcp { port: 443 });

        assert_eq!(
            quick_target("example.com", "tcp", "").unwrap_err(),
            ValidationError::MissingPort
        );
        assert_eq!(
            quick_target("", "icmp", "").unwrap_err(),
            ValidationError::EmptyHost
        );
    }
}
