use crate::backend::{drivers, ConnectOptions};
use crate::cli::args::{Cli, Commands};
use crate::dialect::{Dialect, MASKED_IDENTITY};
use crate::model::Config;
use crate::proxy;
use crate::rewrite::{self, catalog, placeholder_count, RuleCatalog};
use crate::router;
use log::{debug, error, info};
use std::io::Read;

pub fn handle(cli: Cli, config: Config) {
    match cli.command {
        Commands::Resolve { url } => {
            debug!("Resolving URL: {}", url);
            match router::resolve(&url) {
                Ok(target) => {
                    info!("Backend:    {}", target.backend);
                    info!("Target URL: {}", target.url);
                }
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Rewrite { dialect, sql, call } => {
            let dialect: Dialect = match dialect.parse() {
                Ok(dialect) => dialect,
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            };
            let sql = sql.unwrap_or_else(|| {
                let mut buffer = String::new();
                if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                    error!("Failed to read statement from stdin: {}", e);
                    std::process::exit(1);
                }
                buffer
            });
            let rewritten = if call {
                rewrite::call::rewrite_call(&sql)
            } else {
                rewrite::rewrite(&sql, dialect)
            };
            info!("{}", rewritten);
        }

        Commands::Dialects => {
            info!(
                "Every backend reports itself as {} {}",
                MASKED_IDENTITY.product_name, MASKED_IDENTITY.product_version
            );
            for driver in drivers::DRIVERS {
                info!(
                    "{:<10} prefixes: {:<26} odbc driver: {}",
                    driver.dialect.name(),
                    driver.prefixes.join(", "),
                    config.drivers.odbc_driver(driver.dialect),
                );
            }
        }

        Commands::Verify => {
            match RuleCatalog::build(catalog::full_rules(), catalog::partial_rules()) {
                Ok(built) => {
                    for rule in built.full_rules() {
                        let dialects: usize =
                            rule.replacements.iter().map(|(d, _)| d.len()).sum();
                        info!(
                            "{:<26} {} placeholders, {} dialect replacements",
                            rule.name,
                            placeholder_count(rule.template),
                            dialects,
                        );
                    }
                    info!(
                        "Catalog OK: {} full rules, {} partial rules",
                        built.full_rules().len(),
                        built.partial_rules().len()
                    );
                }
                Err(e) => {
                    error!("Catalog invariant violated: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Test { url, username, password } => {
            let url = url.or(config.database.url.clone()).unwrap_or_else(|| {
                error!("No connection URL provided via --url flag or config file");
                std::process::exit(1);
            });
            let target = match router::resolve(&url) {
                Ok(target) => target,
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            };
            let opts = ConnectOptions {
                username: username.or(config.database.username.clone()),
                password: password.or(config.database.password.clone()),
                odbc_driver: Some(config.drivers.odbc_driver(target.backend).to_string()),
            };
            if let Err(e) = run_test(&url, &opts) {
                error!("Connection test failed: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Config { output, env } => {
            debug!("Output path: {}", output);
            match Config::generate_default_config(&output) {
                Ok(()) => {
                    info!("Generated default configuration file: {}", output);
                    if let Some(env_name) = env {
                        let env_path = format!("config/{}.toml", env_name);
                        match std::fs::create_dir_all("config") {
                            Ok(()) => match Config::generate_default_config(&env_path) {
                                Ok(()) => {
                                    info!("Generated environment configuration file: {}", env_path)
                                }
                                Err(e) => error!("Failed to create environment config: {}", e),
                            },
                            Err(e) => error!("Failed to create config directory: {}", e),
                        }
                    }
                }
                Err(e) => {
                    error!("Failed to generate configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run_test(url: &str, opts: &ConnectOptions) -> Result<(), proxy::ProxyError> {
    let connection = proxy::connect(url, opts)?;
    let metadata = connection.metadata()?;
    info!(
        "Reported product: {} {}",
        metadata.product_name()?,
        metadata.product_version()?
    );
    info!("Actual backend:   {}", metadata.true_product_name()?);
    connection.query_single_value("SELECT 1")?;
    info!("Probe query succeeded");
    Ok(())
}
