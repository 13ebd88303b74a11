use thiserror::Error;

use crate::archiver::{RecordStore, StorageError};
use crate::fetcher::FetchError;
use crate::session::SearchSession;

#[derive(Debug, Error)]
pub enum RecordedFetchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Runs the fetch operation, then appends a record batch built from the
/// session's current products to the brand's log.
///
/// The append is unconditional: it happens even when the fetch failed and
/// `products` is empty or partial. Callers must not assume that records
/// imply a successful fetch. A fetch failure is propagated unchanged; a
/// storage failure only surfaces when the fetch itself succeeded.
pub fn fetch_and_record<F>(
    session: &mut SearchSession,
    store: &RecordStore,
    fetch: F,
) -> Result<(), RecordedFetchError>
where
    F: FnOnce(&mut SearchSession) -> Result<(), FetchError>,
{
    let outcome = fetch(session);
    log::debug!(
        "registrando {} productos para {} ({})",
        session.products.len(),
        session.brand,
        session.code
    );
    let appended = store.append(&session.products, &session.brand);

    match outcome {
        Ok(()) => Ok(appended?),
        Err(fetch_err) => {
            if let Err(storage_err) = appended {
                log::error!("record append failed after fetch error: {storage_err}");
            }
            Err(fetch_err.into())
        }
    }
}
