//! JSON loaders for catalogs and invoices
//!
//! Catalog files map play ids to plays:
//!
//! ```json
//! { "hamlet": { "name": "Hamlet", "type": "tragedy" } }
//! ```
//!
//! Invoice files hold a customer and ordered performances:
//!
//! ```json
//! { "customer": "BigCo", "performances": [ { "playID": "hamlet", "audience": 55 } ] }
//! ```
//!
//! Play types are not checked here; an unknown type surfaces when the
//! statement is priced.

use std::fs;
use std::path::{Path, PathBuf};

use domain_theater::{Catalog, Invoice};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading input files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a play catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let catalog: Catalog = load_json(path)?;
    info!(path = %path.display(), plays = catalog.len(), "Loaded play catalog");
    Ok(catalog)
}

/// Loads an invoice from a JSON file
pub fn load_invoice(path: &Path) -> Result<Invoice, LoadError> {
    let invoice: Invoice = load_json(path)?;
    info!(
        path = %path.display(),
        customer = %invoice.customer,
        performances = invoice.performances.len(),
        "Loaded invoice"
    );
    Ok(invoice)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
