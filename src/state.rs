// sportshub-service/src/state.rs
use crate::models::{Captain, Partner};
use crate::sheets::SheetsClient;
use crate::storage::MemoryStore;

// Shared application state, injected into handlers with `web::Data`.
pub struct AppState {
    pub partners: MemoryStore<Partner>,
    pub captains: MemoryStore<Captain>,
    pub sheets: SheetsClient,
}

impl AppState {
    pub fn new(sheets: SheetsClient) -> Self {
        AppState {
            partners: MemoryStore::new(),
            captains: MemoryStore::new(),
            sheets,
        }
    }
}
