use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::models::Product;

/// Rows are synthesized for the trailing 15 days ending today.
pub const HISTORY_DAYS: i64 = 15;

// Random price range in centavos: $5,000.00 to $20,000.00.
const PRICE_CENTS_MIN: u32 = 500_000;
const PRICE_CENTS_MAX: u32 = 2_000_000;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const HEADER: [&str; 3] = ["Fecha de búsqueda", "Producto", "Precio"];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct RecordRow<'a> {
    fecha: String,
    producto: &'a str,
    precio: String,
}

/// Append-only store of per-brand search logs. One CSV per brand, shared
/// across all runs and model codes; never truncated or rotated.
pub struct RecordStore {
    base_dir: PathBuf,
}

impl RecordStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        RecordStore {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self, brand: &str) -> PathBuf {
        self.base_dir.join(format!("registro_busquedas_{brand}.csv"))
    }

    /// Appends a record batch for `brand`. On a brand-new (empty) file the
    /// UTF-8 BOM and header row are written first, and never again.
    ///
    /// Demo policy carried over from the original system: instead of one row
    /// per product with the observed price, 15 rows per product are written,
    /// one per trailing day, each with a freshly generated random price. The
    /// scraped price is not persisted.
    pub fn append(&self, products: &[Product], brand: &str) -> Result<(), StorageError> {
        let path = self.file_path(brand);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let fresh = file.metadata()?.len() == 0;
        if fresh {
            file.write_all(UTF8_BOM)?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if fresh {
            writer.write_record(HEADER)?;
        }

        let today = Local::now().date_naive();
        let mut rng = rand::thread_rng();
        for day in 0..HISTORY_DAYS {
            let fecha = format_date(today - Duration::days(day));
            for product in products {
                let cents = rng.gen_range(PRICE_CENTS_MIN..=PRICE_CENTS_MAX);
                writer.serialize(RecordRow {
                    fecha: fecha.clone(),
                    producto: &product.name,
                    precio: format!("${:.2}", f64::from(cents) / 100.0),
                })?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
