//! Procedure-call statement translation
//!
//! The client tool wraps procedure invocations in an anonymous block,
//! `BEGIN proc(args); END;`, and decorates bind placeholders with numeric
//! and character conversions. Backends reached through this proxy take the
//! generic `CALL proc(args)` form with bare placeholders instead. Anything
//! that is not an anonymous block passes through unchanged.

use regex::Regex;
use std::sync::OnceLock;

static ANONYMOUS_BLOCK: OnceLock<Regex> = OnceLock::new();
static CONVERSION_WRAPPER: OnceLock<Regex> = OnceLock::new();

fn anonymous_block() -> &'static Regex {
    ANONYMOUS_BLOCK.get_or_init(|| {
        Regex::new(r"(?is)^\s*BEGIN\s+(.+?)\s*;\s*END\s*;\s*$")
            .expect("anonymous block pattern is valid")
    })
}

fn conversion_wrapper() -> &'static Regex {
    CONVERSION_WRAPPER.get_or_init(|| {
        Regex::new(r"(?i)TO_(?:NUMBER|CHAR)\s*\(\s*\?\s*\)")
            .expect("conversion wrapper pattern is valid")
    })
}

/// Translate an anonymous-block procedure call into the generic call form.
///
/// `"BEGIN proc_call(TO_NUMBER(?), TO_CHAR(?)); END;"` becomes
/// `"CALL proc_call(?, ?)"`.
pub fn rewrite_call(sql: &str) -> String {
    let Some(captures) = anonymous_block().captures(sql) else {
        return sql.to_string();
    };
    let inner = match captures.get(1) {
        Some(inner) => inner.as_str(),
        None => return sql.to_string(),
    };
    let stripped = conversion_wrapper().replace_all(inner, "?");
    format!("CALL {stripped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_with_conversion_wrappers() {
        assert_eq!(
            rewrite_call("BEGIN proc_call(TO_NUMBER(?), TO_CHAR(?)); END;"),
            "CALL proc_call(?, ?)"
        );
    }

    #[test]
    fn test_block_without_wrappers() {
        assert_eq!(rewrite_call("BEGIN do_stuff(?, 42); END;"), "CALL do_stuff(?, 42)");
    }

    #[test]
    fn test_case_and_whitespace_are_flexible() {
        assert_eq!(
            rewrite_call("  begin Proc( to_number( ? ) );  end ;  "),
            "CALL Proc( ? )"
        );
    }

    #[test]
    fn test_non_block_passes_through() {
        assert_eq!(rewrite_call("CALL proc_call(?)"), "CALL proc_call(?)");
        assert_eq!(rewrite_call("select 1"), "select 1");
    }

    #[test]
    fn test_wrappers_outside_blocks_are_kept() {
        // stripping only happens inside the anonymous block form
        assert_eq!(
            rewrite_call("select TO_CHAR(?) from dual"),
            "select TO_CHAR(?) from dual"
        );
    }

    #[test]
    fn test_placeholder_count_is_preserved() {
        let rewritten = rewrite_call("BEGIN p(TO_NUMBER(?), ?, TO_CHAR(?)); END;");
        assert_eq!(crate::rewrite::placeholder_count(&rewritten), 3);
    }
}
