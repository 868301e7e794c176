use std::time::Duration;

use super::model::suggestion_for;

/// Produce the canned suggestion for `waste_type` after `delay`.
pub(crate) async fn suggest(waste_type: String, delay: Duration) -> String {
    tokio::time::sleep(delay).await;
    suggestion_for(&waste_type)
}
