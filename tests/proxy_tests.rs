use sqlfacade_rs::backend::{BackendConnection, BackendError, BackendStatement};
use sqlfacade_rs::dialect::Dialect;
use sqlfacade_rs::proxy::ProxyConnection;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Recording stand-in for a live backend connection.
#[derive(Default)]
struct SpyState {
    product: String,
    version: String,
    product_name_calls: Cell<usize>,
    prepared: RefCell<Vec<String>>,
    executed: RefCell<Vec<String>>,
    commits: Cell<usize>,
    rollbacks: Cell<usize>,
}

#[derive(Clone)]
struct SpyBackend(Rc<SpyState>);

impl SpyBackend {
    fn new(product: &str, version: &str) -> Self {
        Self(Rc::new(SpyState {
            product: product.to_string(),
            version: version.to_string(),
            ..Default::default()
        }))
    }

    fn prepared(&self) -> Vec<String> {
        self.0.prepared.borrow().clone()
    }
}

struct SpyStatement {
    sql: String,
}

impl BackendStatement for SpyStatement {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn query(&mut self, _params: &[String]) -> Result<Vec<Vec<String>>, BackendError> {
        Ok(vec![vec!["1".to_string()]])
    }

    fn execute(&mut self, _params: &[String]) -> Result<(), BackendError> {
        Ok(())
    }
}

impl BackendConnection for SpyBackend {
    fn product_name(&self) -> Result<String, BackendError> {
        self.0.product_name_calls.set(self.0.product_name_calls.get() + 1);
        Ok(self.0.product.clone())
    }

    fn product_version(&self) -> Result<String, BackendError> {
        Ok(self.0.version.clone())
    }

    fn driver_name(&self) -> &str {
        "Spy Driver"
    }

    fn prepare<'c>(&'c self, sql: &str) -> Result<Box<dyn BackendStatement + 'c>, BackendError> {
        self.0.prepared.borrow_mut().push(sql.to_string());
        Ok(Box::new(SpyStatement {
            sql: sql.to_string(),
        }))
    }

    fn execute(&self, sql: &str) -> Result<(), BackendError> {
        self.0.executed.borrow_mut().push(sql.to_string());
        Ok(())
    }

    fn query_single_value(&self, _sql: &str) -> Result<Option<String>, BackendError> {
        Ok(Some("1".to_string()))
    }

    fn commit(&self) -> Result<(), BackendError> {
        self.0.commits.set(self.0.commits.get() + 1);
        Ok(())
    }

    fn rollback(&self) -> Result<(), BackendError> {
        self.0.rollbacks.set(self.0.rollbacks.get() + 1);
        Ok(())
    }

    fn set_autocommit(&self, _enabled: bool) -> Result<(), BackendError> {
        Ok(())
    }
}

fn proxy_over(spy: &SpyBackend) -> ProxyConnection {
    ProxyConnection::new(Box::new(spy.clone()))
}

#[test]
fn test_identity_is_masked_for_foreign_backends() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);
    let metadata = conn.metadata().unwrap();

    assert_eq!(metadata.product_name().unwrap(), "MySQL");
    assert_eq!(metadata.product_version().unwrap(), "8.0.0");
    assert_eq!(metadata.major_version().unwrap(), 8);
    assert_eq!(metadata.minor_version().unwrap(), 0);
    assert_eq!(metadata.true_product_name().unwrap(), "PostgreSQL");
}

#[test]
fn test_true_name_before_masked_name() {
    // call order must not matter
    let spy = SpyBackend::new("Snowflake", "8.23.1");
    let conn = proxy_over(&spy);
    let metadata = conn.metadata().unwrap();

    assert_eq!(metadata.true_product_name().unwrap(), "Snowflake");
    assert_eq!(metadata.product_name().unwrap(), "MySQL");
    assert_eq!(metadata.true_product_name().unwrap(), "Snowflake");
}

#[test]
fn test_native_mysql_identity_passes_through() {
    let spy = SpyBackend::new("MySQL", "8.0.36");
    let conn = proxy_over(&spy);
    let metadata = conn.metadata().unwrap();

    assert_eq!(metadata.product_name().unwrap(), "MySQL");
    assert_eq!(metadata.product_version().unwrap(), "8.0.36");
    assert_eq!(metadata.major_version().unwrap(), 8);
    assert_eq!(metadata.true_product_name().unwrap(), "MySQL");
}

#[test]
fn test_delegated_metadata_is_untouched() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);
    assert_eq!(conn.metadata().unwrap().driver_name(), "Spy Driver");
}

#[test]
fn test_dialect_is_resolved_once() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);

    assert_eq!(conn.dialect().unwrap(), Some(Dialect::Postgres));
    conn.prepare_statement("show databases").unwrap();
    conn.prepare_statement("select 1").unwrap();
    assert_eq!(conn.dialect().unwrap(), Some(Dialect::Postgres));

    assert_eq!(spy.0.product_name_calls.get(), 1);
}

#[test]
fn test_prepare_statement_rewrites_known_queries() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);

    let statement = conn.prepare_statement("show databases").unwrap();
    let expected = "SELECT datname\n  FROM pg_database\n WHERE datistemplate = false\n ORDER BY datname";
    assert_eq!(statement.sql(), expected);
    drop(statement);
    assert_eq!(spy.prepared(), vec![expected.to_string()]);
}

#[test]
fn test_prepare_statement_passes_unknown_queries_through() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);

    conn.prepare_statement("select * from customers").unwrap();
    assert_eq!(spy.prepared(), vec!["select * from customers".to_string()]);
}

#[test]
fn test_unrecognized_product_disables_rewriting() {
    let spy = SpyBackend::new("DuckDB", "1.1.0");
    let conn = proxy_over(&spy);

    assert_eq!(conn.dialect().unwrap(), None);
    conn.prepare_statement("select `x` from t").unwrap();
    // not even the backtick substitution applies
    assert_eq!(spy.prepared(), vec!["select `x` from t".to_string()]);
    // but the identity is still masked
    assert_eq!(conn.metadata().unwrap().product_name().unwrap(), "MySQL");
}

#[test]
fn test_prepare_call_translates_anonymous_blocks() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);

    conn.prepare_call("BEGIN proc_call(TO_NUMBER(?), TO_CHAR(?)); END;")
        .unwrap();
    assert_eq!(spy.prepared(), vec!["CALL proc_call(?, ?)".to_string()]);
}

#[test]
fn test_transaction_calls_are_delegated() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let conn = proxy_over(&spy);

    conn.commit().unwrap();
    conn.rollback().unwrap();
    conn.execute("DROP TABLE tmp").unwrap();

    assert_eq!(spy.0.commits.get(), 1);
    assert_eq!(spy.0.rollbacks.get(), 1);
    assert_eq!(spy.0.executed.borrow().clone(), vec!["DROP TABLE tmp".to_string()]);
}

#[test]
fn test_close_is_idempotent() {
    let spy = SpyBackend::new("PostgreSQL", "15.4");
    let mut conn = proxy_over(&spy);

    assert!(!conn.is_closed());
    conn.close();
    assert!(conn.is_closed());
    conn.close(); // no-op

    let err = conn.prepare_statement("select 1").unwrap_err();
    assert!(matches!(
        err,
        sqlfacade_rs::proxy::ProxyError::Backend(BackendError::Closed)
    ));
    assert!(conn.metadata().is_err());
}
