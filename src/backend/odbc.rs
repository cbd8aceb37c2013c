//! ODBC implementation of the backend seam

use crate::backend::drivers::BackendDriver;
use crate::backend::{BackendConnection, BackendError, BackendStatement};
use log::debug;
use odbc_api::buffers::TextRowSet;
use odbc_api::handles::AsStatementRef;
use odbc_api::parameter::InputParameter;
use odbc_api::{Connection, Cursor, IntoParameter, Prepared};

const BATCH_SIZE: usize = 100;
const MAX_STR_LEN: Option<usize> = Some(4096);

pub struct OdbcConnection {
    connection: Connection<'static>,
    driver: &'static BackendDriver,
    odbc_driver: String,
}

impl OdbcConnection {
    pub(crate) fn new(
        connection: Connection<'static>,
        driver: &'static BackendDriver,
        odbc_driver: String,
    ) -> Self {
        Self {
            connection,
            driver,
            odbc_driver,
        }
    }
}

impl BackendConnection for OdbcConnection {
    fn product_name(&self) -> Result<String, BackendError> {
        Ok(self.connection.database_management_system_name()?)
    }

    fn product_version(&self) -> Result<String, BackendError> {
        self.query_single_value(self.driver.version_query)?
            .ok_or_else(|| BackendError::QueryFailed("version probe returned no rows".to_string()))
    }

    fn driver_name(&self) -> &str {
        &self.odbc_driver
    }

    fn prepare<'c>(&'c self, sql: &str) -> Result<Box<dyn BackendStatement + 'c>, BackendError> {
        debug!("Preparing statement: {}", sql);
        let prepared = self
            .connection
            .prepare(sql)
            .map_err(|e| BackendError::QueryFailed(e.to_string()))?;
        Ok(Box::new(OdbcStatement {
            prepared,
            sql: sql.to_string(),
        }))
    }

    fn execute(&self, sql: &str) -> Result<(), BackendError> {
        self.prepare(sql)?.execute(&[])
    }

    fn query_single_value(&self, sql: &str) -> Result<Option<String>, BackendError> {
        let rows = self.prepare(sql)?.query(&[])?;
        Ok(rows.into_iter().next().and_then(|row| row.into_iter().next()))
    }

    fn commit(&self) -> Result<(), BackendError> {
        Ok(self.connection.commit()?)
    }

    fn rollback(&self) -> Result<(), BackendError> {
        Ok(self.connection.rollback()?)
    }

    fn set_autocommit(&self, enabled: bool) -> Result<(), BackendError> {
        Ok(self.connection.set_autocommit(enabled)?)
    }
}

pub struct OdbcStatement<S> {
    prepared: Prepared<S>,
    sql: String,
}

impl<S> OdbcStatement<S>
where
    S: AsStatementRef,
{
    fn bind(params: &[String]) -> Vec<Box<dyn InputParameter>> {
        params
            .iter()
            .map(|p| Box::new(p.clone().into_parameter()) as Box<dyn InputParameter>)
            .collect()
    }
}

impl<S> BackendStatement for OdbcStatement<S>
where
    S: AsStatementRef,
{
    fn sql(&self) -> &str {
        &self.sql
    }

    fn query(&mut self, params: &[String]) -> Result<Vec<Vec<String>>, BackendError> {
        let params = Self::bind(params);
        let cursor = self
            .prepared
            .execute(&params[..])
            .map_err(|e| BackendError::QueryFailed(e.to_string()))?;

        let Some(mut cursor) = cursor else {
            return Ok(Vec::new());
        };

        let mut buffer = TextRowSet::for_cursor(BATCH_SIZE, &mut cursor, MAX_STR_LEN)?;
        let mut row_set_cursor = cursor.bind_buffer(&mut buffer)?;
        let mut results = Vec::new();

        while let Some(row_set) = row_set_cursor.fetch()? {
            for row_index in 0..row_set.num_rows() {
                let mut row = Vec::new();
                for col_index in 0..row_set.num_cols() {
                    let value = row_set
                        .at(col_index, row_index)
                        .map(|v| String::from_utf8_lossy(v).to_string())
                        .unwrap_or_else(|| "NULL".to_string());
                    row.push(value);
                }
                results.push(row);
            }
        }

        debug!("Statement returned {} rows", results.len());
        Ok(results)
    }

    fn execute(&mut self, params: &[String]) -> Result<(), BackendError> {
        let params = Self::bind(params);
        self.prepared
            .execute(&params[..])
            .map_err(|e| BackendError::QueryFailed(e.to_string()))?;
        Ok(())
    }
}
