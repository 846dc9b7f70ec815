use crate::model::Product;
use std::path::PathBuf;

/// Directory of product images named `<id>.<ext>`.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
    extensions: Vec<String>,
}

impl ImageStore {
    pub fn new<P: Into<PathBuf>>(root: P, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }

    /// First existing image for the product, trying extensions in order.
    /// A missing file is not an error; the product is simply shown without one.
    pub fn resolve(&self, product: &Product) -> Option<PathBuf> {
        if product.id.is_empty() {
            return None;
        }
        self.extensions
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", product.id, ext.trim_start_matches('.'))))
            .find(|path| path.is_file())
    }
}
