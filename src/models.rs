use std::fmt;

use serde::Serialize;

/// One scraped listing entry. The price is kept as the currency-formatted
/// string shown on the page, never parsed to a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: String,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// A (phrase, brand, model code) triple driving one scrape.
#[derive(Debug, Clone)]
pub struct SearchTerm {
    pub phrase: String,
    pub brand: String,
    pub code: String,
}

impl SearchTerm {
    pub fn new(phrase: &str, brand: &str, code: &str) -> Self {
        SearchTerm {
            phrase: phrase.to_string(),
            brand: brand.to_string(),
            code: code.to_string(),
        }
    }

    /// Builds the listing search URL: the phrase hyphenated as the path
    /// segment, plus a %20-encoded copy in the filter fragment.
    pub fn search_url(&self) -> String {
        let segment = self.phrase.trim().replace(' ', "-");
        let filter = self.phrase.replace(' ', "%20");
        format!("https://listado.mercadolibre.com.ar/{segment}#D[A:{filter}]")
    }
}

/// Two-column (Producto, Precio) projection of a session's products.
#[derive(Debug, Default)]
pub struct ProductTable {
    pub rows: Vec<(String, String)>,
}
