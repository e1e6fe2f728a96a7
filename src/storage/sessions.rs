use crate::deliveries::form::DeliveryForm;
use crate::storage::interface::{DeliveryFormRepo, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

struct Session {
    form: DeliveryForm,
    last_touched: Instant,
}

impl Session {
    fn touch(&mut self) -> &mut DeliveryForm {
        self.last_touched = Instant::now();
        &mut self.form
    }
}

#[derive(Clone)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl HashMapSessionsStorage {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }
}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self) -> Uuid {
        let session_id = Uuid::new_v4();
        self.storage.write().await.insert(
            session_id,
            Session {
                form: DeliveryForm::default(),
                last_touched: Instant::now(),
            },
        );
        session_id
    }

    async fn remove(&self, session_id: Uuid) -> bool {
        self.storage.write().await.remove(&session_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn evict_idle(&self) -> usize {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|_, session| session.last_touched.elapsed() <= self.idle_timeout);
        before - storage.len()
    }
}

impl DeliveryFormRepo for HashMapSessionsStorage {
    async fn read<R>(&self, session_id: Uuid, f: impl FnOnce(&DeliveryForm) -> R) -> Option<R> {
        self.storage
            .write()
            .await
            .get_mut(&session_id)
            .map(|session| f(session.touch()))
    }

    async fn update<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut DeliveryForm) -> R,
    ) -> Option<R> {
        self.storage
            .write()
            .await
            .get_mut(&session_id)
            .map(|session| f(session.touch()))
    }
}
