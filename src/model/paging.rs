/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::PAGE_PARAM;
use crate::error::AppError;
use crate::model::http::{AuthorizedRequest, Transport};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Reads a list endpoint page by page
///
/// Requests `url?page=0`, `url?page=1`, ... and concatenates the JSON arrays
/// in server order. An empty page ends the listing. With `get_all == false`
/// only page 0 is requested.
///
/// # Arguments
/// * `requests` - Request capability used for every page
/// * `url` - Absolute URL of the list endpoint
/// * `get_all` - Keep requesting pages until an empty one is returned
/// * `max_pages` - Optional cap on the number of pages requested
///
/// # Returns
/// * `Ok(Vec<T>)` - Every record seen, in order
/// * `Err(AppError)` - The first failed page aborts the listing
pub async fn page_data<T, R>(
    requests: &AuthorizedRequest<'_, R>,
    url: &str,
    get_all: bool,
    max_pages: Option<u32>,
) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let mut result: Vec<T> = Vec::new();
    let mut page: u32 = 0;

    loop {
        if let Some(max) = max_pages {
            if page >= max {
                warn!(
                    "Stopped listing {} after {} pages without seeing an empty page",
                    url, max
                );
                break;
            }
        }

        let batch: Vec<T> = requests.get(url, &[(PAGE_PARAM, page.to_string())]).await?;
        if batch.is_empty() {
            break;
        }
        debug!("Page {} of {}: {} records", page, url, batch.len());
        result.extend(batch);

        if !get_all {
            break;
        }
        page += 1;
    }

    Ok(result)
}
