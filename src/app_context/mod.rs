use crate::cli::Args;
use crate::geocoding::Geocoder;
use crate::map::MapSettings;
use crate::storage::sessions::HashMapSessionsStorage;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppContext<G: Geocoder> {
    pub sessions: HashMapSessionsStorage,
    pub geocoder: G,
    pub map_settings: Arc<MapSettings>,
}

pub fn init<G: Geocoder>(args: &Args, geocoder: G, map_settings: MapSettings) -> AppContext<G> {
    AppContext {
        sessions: HashMapSessionsStorage::new(Duration::from_secs(args.session_idle_timeout_secs)),
        geocoder,
        map_settings: Arc::new(map_settings),
    }
}

pub struct RequestContext {
    pub session_id: Uuid,
}
