mod archiver;
mod fetcher;
mod models;
mod parser;
mod recorder;
mod session;

use anyhow::Result;
use log::info;

use archiver::RecordStore;
use fetcher::FetchConfig;
use models::SearchTerm;
use session::SearchSession;

fn main() -> Result<()> {
    env_logger::init();

    // Defaults match the original behavior: no timeout, no retries.
    let config = FetchConfig::default();
    let store = RecordStore::new(".");
    run_searches(&default_search_terms(), &config, &store)?;
    println!("Búsquedas registradas.");
    Ok(())
}

/// Processes terms strictly in order. A failed term aborts the rest; there
/// is no per-term isolation at this level.
fn run_searches(terms: &[SearchTerm], config: &FetchConfig, store: &RecordStore) -> Result<()> {
    for term in terms {
        let url = term.search_url();
        info!("buscando {} ({} {})", term.phrase, term.brand, term.code);

        let mut session = SearchSession::new(&url, &term.brand, &term.code);
        recorder::fetch_and_record(&mut session, store, |s| s.fetch(config))?;

        let table = session.to_table();
        info!("{} productos registrados para {}", table.rows.len(), term.brand);
    }
    Ok(())
}

fn default_search_terms() -> Vec<SearchTerm> {
    [
        ("Smart Tv 50 Pulgadas 4k Ultra Hd 50uq8050psb - LG", "LG", "50uq8050psb"),
        ("smart tv samsung 50 Un50cu7000 led 4k", "Samsung", "un50cu7000"),
        ("smart tv bgh google tv 5023us6g led 4k 50", "BGH", "5023us6g"),
        ("Smart Tv Noblex Dk50x6550pi Led Hdr 4k 50", "Noblex", "dk50x6550pi"),
        ("smart tv tcl L50c645 50 4k qled google tv hdr bidcom", "TCL", "l50c645"),
    ]
    .into_iter()
    .map(|(phrase, brand, code)| SearchTerm::new(phrase, brand, code))
    .collect()
}
