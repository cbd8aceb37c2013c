use crate::router::RouteError;
use regex::Regex;
use std::sync::OnceLock;

pub const INVALID_FORMAT: &str =
    "Invalid proxy URL. Expected format: mysql://<target-url>:[<port>]/[<database>]";

static NATIVE_FORM: OnceLock<Regex> = OnceLock::new();

fn native_form() -> &'static Regex {
    NATIVE_FORM.get_or_init(|| {
        Regex::new(r"^mysql://(.+?)(:([0-9]+)?/([^/:]+)?)$").expect("native form pattern is valid")
    })
}

/// Extracts the embedded target from a double-encoded URL built by the
/// client tool's connection dialog.
///
/// `"mysql://jdbc:mysql://localhost:3306/mysql:3306/mysql"` yields
/// `"jdbc:mysql://localhost:3306/mysql"`. The trailing `:<port>/<db>` group
/// exists only to satisfy the client's own URL validator and is discarded.
pub fn extract_target(url: &str) -> Result<&str, RouteError> {
    let captures = native_form()
        .captures(url)
        .ok_or(RouteError::InvalidConnectionStringFormat)?;
    let target = captures
        .get(1)
        .map(|m| m.as_str())
        .ok_or(RouteError::InvalidConnectionStringFormat)?;

    // The embedded target must still be a complete connection string. When
    // it has no path after its scheme separator, the trailing group was
    // carved out of the embedded URL itself (the client omitted the port
    // and database suffix) and the whole request is malformed.
    let complete = target
        .split_once("://")
        .is_some_and(|(_, rest)| rest.contains('/'));
    if !complete {
        return Err(RouteError::InvalidConnectionStringFormat);
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_port_and_db() {
        let target = extract_target("mysql://jdbc:mysql://localhost:3306/mysql:3306/mysql").unwrap();
        assert_eq!(target, "jdbc:mysql://localhost:3306/mysql");
    }

    #[test]
    fn test_extract_without_port_with_db() {
        let target = extract_target("mysql://jdbc:mysql://localhost/mysql:/mysql").unwrap();
        assert_eq!(target, "jdbc:mysql://localhost/mysql");
    }

    #[test]
    fn test_missing_trailing_group_is_rejected() {
        // Without the appended ":<port>/<db>" the regex would split the
        // embedded URL itself; this must be reported, not silently
        // truncated to "jdbc:mysql://localhost".
        let err = extract_target("mysql://jdbc:mysql://localhost:3306/mysql").unwrap_err();
        assert!(matches!(err, RouteError::InvalidConnectionStringFormat));
    }

    #[test]
    fn test_no_trailing_group_at_all() {
        let err = extract_target("mysql://jdbc:mysql://localhost").unwrap_err();
        assert!(matches!(err, RouteError::InvalidConnectionStringFormat));
    }

    #[test]
    fn test_error_message_is_fixed() {
        assert_eq!(
            RouteError::InvalidConnectionStringFormat.to_string(),
            INVALID_FORMAT
        );
    }
}
