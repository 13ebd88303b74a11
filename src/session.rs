use crate::fetcher::{self, FetchConfig, FetchError};
use crate::models::{Product, ProductTable};
use crate::parser;

/// One search against the listing site. `products` starts empty, is filled
/// in place by [`SearchSession::fetch`], and is read-only afterwards.
pub struct SearchSession {
    pub url: String,
    pub brand: String,
    pub code: String,
    pub products: Vec<Product>,
}

impl SearchSession {
    pub fn new(url: &str, brand: &str, code: &str) -> Self {
        SearchSession {
            url: url.to_string(),
            brand: brand.to_string(),
            code: code.to_string(),
            products: Vec::new(),
        }
    }

    /// Fetches the session URL and parses the result page into `products`.
    /// On a non-200 response `products` is left untouched.
    pub fn fetch(&mut self, config: &FetchConfig) -> Result<(), FetchError> {
        let html = fetcher::fetch_html(&self.url, config)?;
        self.products = parser::parse_products(&html);
        Ok(())
    }

    /// Pure projection into a (Producto, Precio) table; callable repeatedly.
    pub fn to_table(&self) -> ProductTable {
        ProductTable {
            rows: self
                .products
                .iter()
                .map(|p| (p.name.clone(), p.price.clone()))
                .collect(),
        }
    }
}
