// sportshub-service/src/storage/mod.rs
//
// Process-lifetime repositories. Records created here are lost on restart;
// the spreadsheet copy, when configured, is the only durable one.
use crate::models::{Captain, Partner};
use std::sync::{Mutex, MutexGuard};

// Lookup key shared by every principal stored here.
pub trait EmailKeyed {
    fn email(&self) -> &str;
}

impl EmailKeyed for Partner {
    fn email(&self) -> &str {
        &self.email
    }
}

impl EmailKeyed for Captain {
    fn email(&self) -> &str {
        &self.captain_email
    }
}

pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Clone + EmailKeyed> MemoryStore<T> {
    pub fn new() -> Self {
        MemoryStore {
            records: Mutex::new(Vec::new()),
        }
    }

    // A poisoned lock only means a handler panicked mid-operation; the
    // vector itself is still usable, so recover rather than propagate.
    fn guard(&self) -> MutexGuard<'_, Vec<T>> {
        match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn insert(&self, record: T) {
        self.guard().push(record);
    }

    pub fn find_by_email(&self, email: &str) -> Option<T> {
        self.guard().iter().find(|r| r.email() == email).cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl<T: Clone + EmailKeyed> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Partner;

    fn partner(email: &str) -> Partner {
        Partner {
            id: "1".into(),
            partner_type: "Sponsor".into(),
            organization_name: "Acme".into(),
            contact_person: "Jo".into(),
            email: email.into(),
            phone: "0123456789".into(),
            website: String::new(),
            address: "1 Main St".into(),
            description: "Sponsors local clubs".into(),
            services: "Sponsorship".into(),
            password: Some("secret".into()),
            created_at: Some("2024-01-01T00:00:00.000Z".into()),
        }
    }

    #[test]
    fn insert_and_find_by_email() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.insert(partner("a@x.com"));
        store.insert(partner("b@x.com"));

        assert_eq!(store.len(), 2);
        assert!(store.find_by_email("a@x.com").is_some());
        assert!(store.find_by_email("missing@x.com").is_none());
    }

    #[test]
    fn find_returns_first_match() {
        let store = MemoryStore::new();
        let mut first = partner("dup@x.com");
        first.id = "first".into();
        let mut second = partner("dup@x.com");
        second.id = "second".into();
        store.insert(first);
        store.insert(second);

        let found = store.find_by_email("dup@x.com").unwrap();
        assert_eq!(found.id, "first");
    }
}
