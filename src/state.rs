//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// The concrete service type used by the running application.
pub type Shortener = ShortenerService<SqliteMappingRepository>;

/// State shared by every request handler.
///
/// Created once at startup; the storage handle inside the service is the
/// only route to the mapping table.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<Shortener>,
    pub base_url: String,
}
