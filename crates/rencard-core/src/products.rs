use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One sellable product: a fixed SKU and its display label.
///
/// The registry defines the billing pivot's column set and display order;
/// it is static configuration, never derived from transaction data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsFile {
    pub products: Vec<ProductConfig>,
}

impl ProductsFile {
    /// Pivot column ids in registry (file) order.
    #[must_use]
    pub fn column_ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    /// Label for a SKU, if the SKU is registered.
    #[must_use]
    pub fn label_for(&self, sku: &str) -> Option<&str> {
        self.products
            .iter()
            .find(|p| p.id == sku)
            .map(|p| p.label.as_str())
    }
}

/// Load and validate the product registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_products(path: &Path) -> Result<ProductsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProductsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let products_file: ProductsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::ProductsFileParse)?;

    validate_products(&products_file)?;

    Ok(products_file)
}

fn validate_products(products_file: &ProductsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for product in &products_file.products {
        if product.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }

        if product.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty label",
                product.id
            )));
        }

        let lower_id = product.id.to_lowercase();
        if !seen_ids.insert(lower_id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
    }

    Ok(())
}
