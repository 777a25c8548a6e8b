use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use artifact_store::BlobStore;

/// In-memory remote tier. Can be flipped unreachable to simulate network
/// loss after hydration.
#[derive(Clone, Default)]
pub struct MockBlobStore {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub downloads: Arc<Mutex<Vec<String>>>,
    pub unreachable: Arc<Mutex<bool>>,
}

impl MockBlobStore {
    pub fn seeded(key: &str, bytes: &[u8]) -> Self {
        let store = MockBlobStore::default();
        store
            .objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        store
    }

    pub fn set_unreachable(&self) {
        *self.unreachable.lock().unwrap() = true;
    }

    fn check_reachable(&self) -> anyhow::Result<()> {
        if *self.unreachable.lock().unwrap() {
            anyhow::bail!("remote tier unreachable");
        }
        Ok(())
    }
}

impl BlobStore for MockBlobStore {
    async fn exists(&self, key: &str) -> anyhow::Result<bool> {
        self.check_reachable()?;
        Ok(self.objects.lock().unwrap().contains_key(key))
    }

    async fn download(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        self.check_reachable()?;
        self.downloads.lock().unwrap().push(key.to_string());
        Ok(self.objects.lock().unwrap().get(key).cloned())
    }

    async fn upload(&self, key: &str, bytes: &[u8]) -> anyhow::Result<()> {
        self.check_reachable()?;
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
