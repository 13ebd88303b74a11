use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::models::Product;

/// Only the first 20 candidate items on a page are considered.
pub const MAX_PRODUCTS: usize = 20;

/// Placeholder for a missing title or a missing price fraction.
pub const NOT_AVAILABLE: &str = "No disponible";

#[derive(Debug, Error)]
pub enum ParseFieldError {
    #[error("candidate item has no text content")]
    EmptyItem,
}

struct ItemSelectors {
    title: Selector,
    currency: Selector,
    fraction: Selector,
}

/// Extracts up to [`MAX_PRODUCTS`] products from a search-result page.
///
/// Field policy: missing title -> "No disponible"; missing currency
/// symbol -> "$"; missing price fraction -> price "No disponible" with the
/// product still kept. A candidate that fails extraction outright is
/// logged and skipped, so the result may hold fewer than 20 entries.
pub fn parse_products(html: &str) -> Vec<Product> {
    let doc = Html::parse_document(html);
    let item_selector = Selector::parse("li.ui-search-layout__item").unwrap();
    let selectors = ItemSelectors {
        title: Selector::parse("h2.ui-search-item__title").unwrap(),
        currency: Selector::parse("span.andes-money-amount__currency-symbol").unwrap(),
        fraction: Selector::parse("span.andes-money-amount__fraction").unwrap(),
    };

    let mut products = Vec::new();
    for item in doc.select(&item_selector).take(MAX_PRODUCTS) {
        match extract_product(item, &selectors) {
            Ok(product) => products.push(product),
            Err(err) => log::warn!("skipping candidate item: {err}"),
        }
    }
    products
}

fn extract_product(
    item: ElementRef<'_>,
    selectors: &ItemSelectors,
) -> Result<Product, ParseFieldError> {
    if item.text().all(|t| t.trim().is_empty()) {
        return Err(ParseFieldError::EmptyItem);
    }

    let name = field_text(item, &selectors.title).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let currency = field_text(item, &selectors.currency).unwrap_or_else(|| "$".to_string());
    let price = match field_text(item, &selectors.fraction) {
        Some(fraction) => format!("{currency}{fraction}"),
        None => NOT_AVAILABLE.to_string(),
    };

    Ok(Product { name, price })
}

fn field_text(item: ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>, currency: Option<&str>, fraction: Option<&str>) -> String {
        let mut li = String::from("<li class=\"ui-search-layout__item\">");
        if let Some(t) = title {
            li.push_str(&format!("<h2 class=\"ui-search-item__title\">{t}</h2>"));
        }
        if let Some(c) = currency {
            li.push_str(&format!(
                "<span class=\"andes-money-amount__currency-symbol\">{c}</span>"
            ));
        }
        if let Some(f) = fraction {
            li.push_str(&format!(
                "<span class=\"andes-money-amount__fraction\">{f}</span>"
            ));
        }
        li.push_str("</li>");
        li
    }

    fn page(items: &[String]) -> String {
        format!("<html><body><ol>{}</ol></body></html>", items.concat())
    }

    #[test]
    fn caps_results_at_twenty() {
        let items: Vec<String> = (0..25)
            .map(|i| item(Some(&format!("Tv {i}")), Some("$"), Some("499.999")))
            .collect();
        let products = parse_products(&page(&items));
        assert_eq!(products.len(), MAX_PRODUCTS);
        assert_eq!(products[0].name, "Tv 0");
        assert_eq!(products[19].name, "Tv 19");
    }

    #[test]
    fn missing_title_gets_placeholder_name() {
        let products = parse_products(&page(&[item(None, Some("$"), Some("100"))]));
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, NOT_AVAILABLE);
        assert_eq!(products[0].price, "$100");
    }

    #[test]
    fn missing_currency_symbol_defaults_to_dollar() {
        let products = parse_products(&page(&[item(Some("Tv"), None, Some("750.000"))]));
        assert_eq!(products[0].price, "$750.000");
    }

    #[test]
    fn currency_symbol_from_page_is_kept() {
        let products = parse_products(&page(&[item(Some("Tv"), Some("U$S"), Some("500"))]));
        assert_eq!(products[0].price, "U$S500");
    }

    #[test]
    fn missing_price_keeps_product_with_placeholder() {
        // 25 candidates; items 3 and 17 (1-based) lack the price fraction.
        // The cap applies before loss accounting: 20 products, with the two
        // broken ones at their positions carrying the placeholder price.
        let items: Vec<String> = (1..=25)
            .map(|i| {
                let fraction = if i == 3 || i == 17 { None } else { Some("1.000") };
                item(Some(&format!("Tv {i}")), Some("$"), fraction)
            })
            .collect();
        let products = parse_products(&page(&items));
        assert_eq!(products.len(), 20);
        assert_eq!(products[2].price, NOT_AVAILABLE);
        assert_eq!(products[16].price, NOT_AVAILABLE);
        assert_eq!(products[0].price, "$1.000");
        assert_eq!(products[19].price, "$1.000");
    }

    #[test]
    fn empty_candidate_is_skipped_not_substituted() {
        let items = vec![
            item(Some("Tv 1"), Some("$"), Some("100")),
            "<li class=\"ui-search-layout__item\"></li>".to_string(),
            item(Some("Tv 3"), Some("$"), Some("300")),
        ];
        let products = parse_products(&page(&items));
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Tv 3");
    }

    #[test]
    fn page_without_matches_yields_nothing() {
        assert!(parse_products("<html><body><p>sin resultados</p></body></html>").is_empty());
    }
}
