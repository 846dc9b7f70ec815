// Presenter module: turns a Match Result into rows of product cards.

pub mod telegram;
pub mod terminal;

use crate::catalog::ImageStore;
use crate::model::Product;
use serde::Deserialize;
use std::path::PathBuf;

pub const NO_RESULTS: &str = "No products found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// The first `max_rows` rows of matches, `columns` cards per row.
    Grid {
        #[serde(default = "default_columns")]
        columns: usize,
        #[serde(default = "default_max_rows")]
        max_rows: usize,
    },
    /// The first `limit` matches, one per row.
    Top {
        #[serde(default = "default_limit")]
        limit: usize,
    },
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Grid {
            columns: default_columns(),
            max_rows: default_max_rows(),
        }
    }
}

fn default_columns() -> usize {
    3
}

fn default_max_rows() -> usize {
    5
}

fn default_limit() -> usize {
    10
}

/// What a product looks like once it reaches the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub base_colour: String,
    pub price: String,
    pub image: Option<PathBuf>,
}

impl Card {
    pub fn new(product: &Product, images: &ImageStore) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name().to_string(),
            base_colour: product.base_colour.clone().unwrap_or_default(),
            price: product
                .price
                .map(|p| format!("{:.2}", p))
                .unwrap_or_else(|| "N/A".into()),
            image: images.resolve(product),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Product ID: {}", self.id),
            format!("Product Name: {}", self.name),
            format!("Base Colour: {}", self.base_colour),
            format!("Price: {}", self.price),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Presentation {
    NoResults,
    /// The shown cards and the number of products that matched.
    Rows { rows: Vec<Vec<Card>>, total: usize },
}

impl Presentation {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        let rows: &[Vec<Card>] = match self {
            Presentation::NoResults => &[],
            Presentation::Rows { rows, .. } => rows,
        };
        rows.iter().flatten()
    }

    /// "Showing N of M products." when the layout left matches out.
    pub fn truncation_note(&self) -> Option<String> {
        let Presentation::Rows { total, .. } = self else {
            return None;
        };
        let shown = self.cards().count();
        (shown < *total).then(|| format!("Showing {shown} of {total} products."))
    }
}

/// Lays matched products out in rows according to `layout`.
pub fn present(products: &[&Product], layout: Layout, images: &ImageStore) -> Presentation {
    if products.is_empty() {
        return Presentation::NoResults;
    }

    let (shown, per_row) = match layout {
        Layout::Grid { columns, max_rows } => {
            let columns = columns.max(1);
            (products.len().min(columns * max_rows.max(1)), columns)
        }
        Layout::Top { limit } => (products.len().min(limit.max(1)), 1),
    };

    let rows = products[..shown]
        .chunks(per_row)
        .map(|row| row.iter().map(|p| Card::new(p, images)).collect::<Vec<_>>())
        .collect();

    Presentation::Rows {
        rows,
        total: products.len(),
    }
}
