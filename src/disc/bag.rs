use super::profile::{DiscId, DiscProfile};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct BagEntry {
    pub disc: Arc<DiscProfile>,
    pub owner: String,
}

/// A user's discs. Each profile appears at most once; order carries no meaning.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Bag {
    owner: String,
    entries: Vec<BagEntry>,
}

impl Bag {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            entries: Vec::new(),
        }
    }

    /// Collects profiles into a bag, dropping repeats.
    pub fn from_profiles<I>(owner: impl Into<String>, discs: I) -> Self
    where
        I: IntoIterator<Item = Arc<DiscProfile>>,
    {
        let mut bag = Self::new(owner);
        for disc in discs {
            bag.add(disc);
        }
        bag
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns false if the disc was already in the bag.
    pub fn add(&mut self, disc: Arc<DiscProfile>) -> bool {
        if self.contains(disc.id()) {
            return false;
        }
        self.entries.push(BagEntry {
            disc,
            owner: self.owner.clone(),
        });
        true
    }

    pub fn remove(&mut self, id: &DiscId) -> Option<Arc<DiscProfile>> {
        let idx = self.entries.iter().position(|e| e.disc.id() == id)?;
        Some(self.entries.swap_remove(idx).disc)
    }

    pub fn contains(&self, id: &DiscId) -> bool {
        self.entries.iter().any(|e| e.disc.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BagEntry] {
        &self.entries
    }

    pub fn discs(&self) -> impl Iterator<Item = &Arc<DiscProfile>> {
        self.entries.iter().map(|e| &e.disc)
    }
}
