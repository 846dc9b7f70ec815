// CSV catalog loading
use crate::catalog::Catalog;
use crate::model::{Attribute, CatalogError, Product};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const ID: &str = "id";
const DISPLAY_NAME: &str = "productDisplayName";
const PRICE: &str = "price";

/// Cell texts read as a missing value, the same set pandas treats as NaN.
const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Header positions of every column a product is built from.
struct Columns {
    id: usize,
    display_name: usize,
    attributes: [usize; 7],
    price: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |name: &'static str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(CatalogError::MissingColumn(name));

        let mut attributes = [0usize; 7];
        for (slot, attr) in attributes.iter_mut().zip(Attribute::ALL) {
            *slot = require(attr.column())?;
        }

        Ok(Self {
            id: require(ID)?,
            display_name: require(DISPLAY_NAME)?,
            attributes,
            price: find(PRICE),
        })
    }

    fn product(&self, record: &StringRecord) -> Product {
        let cell = |idx: usize| {
            record
                .get(idx)
                .map(str::trim)
                .filter(|v| !v.is_empty() && !NA_VALUES.contains(v))
                .map(str::to_string)
        };
        let [master, sub, article, colour, season, usage, gender] = self.attributes.map(cell);

        Product {
            id: cell(self.id).unwrap_or_default(),
            display_name: cell(self.display_name),
            master_category: master,
            sub_category: sub,
            article_type: article,
            base_colour: colour,
            season,
            usage,
            gender,
            price: self.price.and_then(cell).and_then(|p| p.parse::<f64>().ok()),
        }
    }
}

/// Loads the catalog from a CSV file with a header row.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(file)?;
    info!("Loaded {} products from {}", catalog.len(), path.display());
    Ok(catalog)
}

pub fn read_catalog<R: Read>(source: R) -> Result<Catalog, CatalogError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut products = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            skipped += 1;
            continue;
        }
        products.push(columns.product(&record));
    }

    if skipped > 0 {
        warn!("Skipped {} catalog rows with more fields than the header", skipped);
    }

    Ok(Catalog::new(products))
}
