use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::SelectorError;
use crate::model::Bag;
use crate::mvu::runtime::run_selector_all;
use crate::mvu::selector::{Msg, SelectorModel};
use crate::selection::Tuning;

/// The one in-memory form state the server drives.
pub type SessionStore = Arc<RwLock<SelectorModel>>;

/// Build the session and run the initial page-load calculation.
/// An empty bag is not fatal here; the page shows it.
#[must_use]
pub fn new_session(bag: Bag, tuning: Tuning) -> SessionStore {
    let mut model = SelectorModel::new(bag, tuning);
    if let Err(e) = run_selector_all(&mut model, [Msg::PageLoad]) {
        eprintln!("{}", json!({"session":"page_load","error": e.to_string()}));
    }
    Arc::new(RwLock::new(model))
}

/// Runs `msgs` against a copy of the current model, then swaps the copy in.
/// Returns the new snapshot and whatever the loop reported.
pub async fn apply_msgs(
    store: &SessionStore,
    msgs: Vec<Msg>,
) -> (SelectorModel, Result<(), SelectorError>) {
    let mut guard = store.write().await;
    let mut next = guard.clone();
    let result = run_selector_all(&mut next, msgs);
    *guard = next.clone();
    (next, result)
}

pub async fn snapshot(store: &SessionStore) -> SelectorModel {
    store.read().await.clone()
}
