// Catalog module: the read-only product table and its image store.

pub mod images;
pub mod loader;

pub use images::ImageStore;
pub use loader::load_catalog;

use crate::model::Product;

/// Products in file order. Never mutated after load.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, row: usize) -> Option<&Product> {
        self.products.get(row)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}
