//! Dialect rewrite engine
//!
//! Rewrites the fixed set of MySQL-flavored introspection queries the client
//! tool issues into the syntax the active backend understands. Full rules
//! match a whole statement byte for byte and run first; partial rules then
//! apply local token substitutions. A statement outside the catalog passes
//! through untouched (apart from the partial pass), so any byte drift in a
//! client query silently degrades to an identity rewrite.

pub mod call;
pub mod catalog;

use crate::dialect::Dialect;
use std::sync::OnceLock;

/// A whole-statement rewrite: one exact match template, one replacement per
/// group of dialects. A dialect missing from every group keeps the statement
/// unchanged.
#[derive(Debug, Clone)]
pub struct FullRule {
    pub name: &'static str,
    pub template: &'static str,
    pub replacements: &'static [(&'static [Dialect], &'static str)],
}

impl FullRule {
    pub fn replacement_for(&self, dialect: Dialect) -> Option<&'static str> {
        self.replacements
            .iter()
            .find(|(dialects, _)| dialects.contains(&dialect))
            .map(|(_, replacement)| *replacement)
    }
}

/// A local token substitution applied to any statement, full-rule output
/// included, except for the dialects listed in `skip`.
#[derive(Debug, Clone)]
pub struct PartialRule {
    pub name: &'static str,
    pub from: char,
    pub to: char,
    pub skip: &'static [Dialect],
}

impl PartialRule {
    pub fn apply(&self, sql: &str, dialect: Dialect) -> Option<String> {
        if self.skip.contains(&dialect) || !sql.contains(self.from) {
            return None;
        }
        Some(sql.replace(self.from, &self.to.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Rewrite rules '{first}' and '{second}' share the same match template")]
    DuplicateTemplate {
        first: &'static str,
        second: &'static str,
    },

    #[error(
        "Rule '{rule}' replacement for {dialect} binds {actual} placeholders, \
         its template binds {expected}"
    )]
    PlaceholderMismatch {
        rule: &'static str,
        dialect: Dialect,
        expected: usize,
        actual: usize,
    },
}

/// The immutable rule table. Built once at process start; construction
/// rejects catalogs that violate the engine's two standing invariants:
/// at most one full rule may match any literal statement, and every
/// replacement must preserve its template's placeholder count.
#[derive(Debug)]
pub struct RuleCatalog {
    full: Vec<FullRule>,
    partial: Vec<PartialRule>,
}

impl RuleCatalog {
    pub fn build(full: Vec<FullRule>, partial: Vec<PartialRule>) -> Result<Self, CatalogError> {
        for (i, rule) in full.iter().enumerate() {
            for other in &full[i + 1..] {
                if rule.template == other.template {
                    return Err(CatalogError::DuplicateTemplate {
                        first: rule.name,
                        second: other.name,
                    });
                }
            }
        }
        for rule in &full {
            let expected = placeholder_count(rule.template);
            for (dialects, replacement) in rule.replacements {
                let actual = placeholder_count(replacement);
                if actual != expected {
                    return Err(CatalogError::PlaceholderMismatch {
                        rule: rule.name,
                        dialect: dialects.first().copied().unwrap_or(Dialect::MySql),
                        expected,
                        actual,
                    });
                }
            }
        }
        Ok(Self { full, partial })
    }

    /// The process-wide catalog of built-in rules.
    pub fn global() -> &'static RuleCatalog {
        static CATALOG: OnceLock<RuleCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            RuleCatalog::build(catalog::full_rules(), catalog::partial_rules())
                .expect("built-in rule catalog is valid")
        })
    }

    pub fn full_rules(&self) -> &[FullRule] {
        &self.full
    }

    pub fn partial_rules(&self) -> &[PartialRule] {
        &self.partial
    }

    /// Rewrite one statement for the given dialect. Pass 1 substitutes the
    /// single matching full rule, if any; pass 2 applies the partial rules
    /// to the outcome.
    pub fn rewrite(&self, sql: &str, dialect: Dialect) -> String {
        if dialect == Dialect::MySql {
            // every rule is a no-op for the source dialect
            return sql.to_string();
        }

        let mut result: Option<String> = None;
        for rule in &self.full {
            if sql == rule.template {
                if let Some(replacement) = rule.replacement_for(dialect) {
                    log::debug!("Applying full rewrite '{}' for {}", rule.name, dialect);
                    result = Some(replacement.to_string());
                }
                // templates are unique, nothing further can match
                break;
            }
        }

        let mut current = result.unwrap_or_else(|| sql.to_string());
        for rule in &self.partial {
            if let Some(replaced) = rule.apply(&current, dialect) {
                log::debug!("Applying partial rewrite '{}' for {}", rule.name, dialect);
                current = replaced;
            }
        }
        current
    }
}

/// Rewrite against the built-in catalog.
pub fn rewrite(sql: &str, dialect: Dialect) -> String {
    RuleCatalog::global().rewrite(sql, dialect)
}

/// Number of `?` bind placeholders in a statement. None of the catalog
/// statements contain a literal question mark, so a plain byte count is
/// exact.
pub fn placeholder_count(sql: &str) -> usize {
    sql.bytes().filter(|&b| b == b'?').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &'static str, template: &'static str) -> FullRule {
        FullRule {
            name,
            template,
            replacements: &[(&[Dialect::Postgres], "SELECT 1")],
        }
    }

    #[test]
    fn test_duplicate_templates_are_rejected() {
        let err = RuleCatalog::build(
            vec![rule("first", "show databases"), rule("second", "show databases")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTemplate { .. }));
    }

    #[test]
    fn test_placeholder_mismatch_is_rejected() {
        let bad = FullRule {
            name: "bad",
            template: "select x where a = ? and b = ?",
            replacements: &[(&[Dialect::Postgres], "select x where a = ?")],
        };
        let err = RuleCatalog::build(vec![bad], vec![]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PlaceholderMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(placeholder_count("select 1"), 0);
        assert_eq!(placeholder_count("where a = ? and b in (?, ?)"), 3);
    }
}
