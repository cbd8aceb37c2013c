use sqlfacade_rs::dialect::Dialect;
use sqlfacade_rs::router::{self, url, RouteError};

#[test]
fn test_double_encoded_mysql_url() {
    let resolved = router::resolve("mysql://jdbc:mysql://localhost:3306/mysql:3306/mysql").unwrap();
    assert_eq!(resolved.backend, Dialect::MySql);
    assert_eq!(resolved.url, "mysql://localhost:3306/mysql");
}

#[test]
fn test_double_encoded_url_without_port_group() {
    let err = router::resolve("mysql://jdbc:mysql://localhost:3306/mysql").unwrap_err();
    assert!(matches!(err, RouteError::InvalidConnectionStringFormat));
    assert_eq!(err.to_string(), url::INVALID_FORMAT);
}

#[test]
fn test_double_encoded_url_without_port_but_with_db() {
    let resolved = router::resolve("mysql://jdbc:mysql://localhost/mysql:/mysql").unwrap();
    assert_eq!(resolved.backend, Dialect::MySql);
    assert_eq!(resolved.url, "mysql://localhost/mysql");
}

#[test]
fn test_double_encoded_foreign_backend() {
    let resolved =
        router::resolve("mysql://jdbc:postgresql://db.example.com:5432/sales:3306/ignored").unwrap();
    assert_eq!(resolved.backend, Dialect::Postgres);
    assert_eq!(resolved.url, "postgresql://db.example.com:5432/sales");
}

#[test]
fn test_proxy_form_for_each_backend() {
    let cases = [
        ("proxy:postgresql://localhost:5432/postgres", Dialect::Postgres),
        ("proxy:postgres://localhost/postgres", Dialect::Postgres),
        (
            "proxy:snowflake://account.snowflakecomputing.com:443",
            Dialect::Snowflake,
        ),
        ("proxy:sqlite:/var/data/app.db", Dialect::Sqlite),
        ("proxy:h2://localhost:5435/test", Dialect::H2),
        ("proxy:mysql://localhost:3306/mysql", Dialect::MySql),
    ];
    for (request, backend) in cases {
        let resolved = router::resolve(request).unwrap();
        assert_eq!(resolved.backend, backend, "for {request}");
        assert_eq!(resolved.url, request.strip_prefix("proxy:").unwrap());
    }
}

#[test]
fn test_legacy_jdbc_prefixes_are_accepted() {
    let resolved = router::resolve("jdbc:proxy:jdbc:postgresql://localhost:5432/postgres").unwrap();
    assert_eq!(resolved.backend, Dialect::Postgres);
    assert_eq!(resolved.url, "postgresql://localhost:5432/postgres");

    let resolved = router::resolve("jdbc:mysql://localhost:3306/mysql").unwrap();
    assert_eq!(resolved.backend, Dialect::MySql);
    assert_eq!(resolved.url, "mysql://localhost:3306/mysql");
}

#[test]
fn test_proxy_form_may_embed_double_encoded_url() {
    let resolved =
        router::resolve("proxy:mysql://jdbc:mysql://localhost:3306/mysql:3306/mysql").unwrap();
    assert_eq!(resolved.backend, Dialect::MySql);
    assert_eq!(resolved.url, "mysql://localhost:3306/mysql");
}

#[test]
fn test_unsupported_connection_string() {
    let err = router::resolve("oracle://localhost:1521/xe").unwrap_err();
    assert!(matches!(err, RouteError::UnsupportedConnectionString(_)));
    assert!(err.to_string().contains("oracle://localhost:1521/xe"));
}

#[test]
fn test_unknown_backend_behind_proxy_prefix() {
    let err = router::resolve("proxy:oracle://localhost:1521/xe").unwrap_err();
    assert!(matches!(err, RouteError::BackendDriverNotFound(_)));
}

#[test]
fn test_accepts_recognized_forms_only() {
    assert!(router::accepts("proxy:postgresql://localhost:5432/postgres"));
    assert!(router::accepts("mysql://localhost:3306/mysql"));
    assert!(router::accepts("jdbc:mysql://localhost:3306/mysql"));
    assert!(router::accepts("jdbc:proxy:jdbc:snowflake://acct.snowflakecomputing.com:443"));
    assert!(!router::accepts("postgresql://localhost:5432/postgres"));
    assert!(!router::accepts("oracle://localhost:1521/xe"));
}

#[test]
fn test_resolution_is_pure() {
    // same input, same output, no state involved
    let first = router::resolve("proxy:sqlite:/tmp/a.db").unwrap();
    let second = router::resolve("proxy:sqlite:/tmp/a.db").unwrap();
    assert_eq!(first, second);
}
