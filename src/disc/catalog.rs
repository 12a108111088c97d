use super::bag::Bag;
use super::profile::{DiscId, DiscProfile, DiscRecord, DiscType};
use crate::error::{DfResult, DiscForgeError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

/// Discs shipped with the engine so it is usable without a catalog file.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownDisc {
    Destroyer,
    Wraith,
    Thunderbird,
    Leopard,
    Teebird,
    River,
    Buzzz,
    Roc,
    Mako,
    Zone,
    Aviar,
    Judge,
}

impl KnownDisc {
    // (manufacturer, display name, speed, glide, turn, fade)
    fn stamp(&self) -> (&'static str, &'static str, f64, f64, f64, f64) {
        match self {
            Self::Destroyer => ("Innova", "Destroyer", 12.0, 5.0, -1.0, 3.0),
            Self::Wraith => ("Innova", "Wraith", 11.0, 5.0, -1.0, 3.0),
            Self::Thunderbird => ("Innova", "Thunderbird", 9.0, 5.0, 0.0, 2.0),
            Self::Leopard => ("Innova", "Leopard", 6.0, 5.0, -2.0, 1.0),
            Self::Teebird => ("Innova", "Teebird", 7.0, 5.0, 0.0, 2.0),
            Self::River => ("Latitude 64", "River", 7.0, 7.0, -1.0, 1.0),
            Self::Buzzz => ("Discraft", "Buzzz", 5.0, 4.0, -1.0, 1.0),
            Self::Roc => ("Innova", "Roc", 4.0, 4.0, 0.0, 3.0),
            Self::Mako => ("Innova", "Mako3", 5.0, 5.0, 0.0, 0.0),
            Self::Zone => ("Discraft", "Zone", 4.0, 3.0, 0.0, 3.0),
            Self::Aviar => ("Innova", "Aviar", 3.0, 3.0, 0.0, 1.0),
            Self::Judge => ("Dynamic Discs", "Judge", 2.0, 4.0, 0.0, 1.0),
        }
    }

    pub fn profile(&self) -> DfResult<DiscProfile> {
        let (maker, name, speed, glide, turn, fade) = self.stamp();
        Ok(DiscProfile::from_numbers(self.to_string(), name, speed, glide, turn, fade)?
            .with_manufacturer(maker))
    }
}

/// Owner of every [`DiscProfile`]; bags hold shared references into it.
#[derive(Debug, Clone, Default)]
pub struct DiscCatalog {
    discs: BTreeMap<DiscId, Arc<DiscProfile>>,
}

impl DiscCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stock() -> DfResult<Self> {
        let mut catalog = Self::new();
        for known in KnownDisc::iter() {
            catalog.insert(known.profile()?)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, profile: DiscProfile) -> DfResult<Arc<DiscProfile>> {
        if self.discs.contains_key(profile.id()) {
            return Err(DiscForgeError::Validation(format!(
                "duplicate disc id '{}'",
                profile.id()
            )));
        }
        let shared = Arc::new(profile);
        self.discs.insert(shared.id().clone(), shared.clone());
        Ok(shared)
    }

    pub fn get(&self, id: &DiscId) -> Option<Arc<DiscProfile>> {
        self.discs.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Discs in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DiscProfile>> {
        self.discs.values()
    }

    pub fn of_type(&self, disc_type: DiscType) -> Vec<Arc<DiscProfile>> {
        self.iter()
            .filter(|d| d.disc_type() == disc_type)
            .cloned()
            .collect()
    }

    /// Rows: `id,name,manufacturer,type,speed,glide,turn,fade`, optionally
    /// followed by `avg_beginner,avg_intermediate,avg_advanced,avg_pro` in feet.
    /// `manufacturer`, `type` and the averages may be left empty.
    pub fn from_csv_reader<R: Read>(reader: R) -> DfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = Self::new();
        for (row_idx, result) in rdr.deserialize::<DiscRecord>().enumerate() {
            let record = result?;
            debug!("   [Row {}] {}", row_idx + 1, record.id);
            catalog.insert(DiscProfile::try_from(record)?)?;
        }
        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> DfResult<Self> {
        let records: Vec<DiscRecord> = serde_json::from_reader(reader)?;
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(DiscProfile::try_from(record)?)?;
        }
        Ok(catalog)
    }

    /// Picks the parser from the extension: `.json` or anything else as CSV.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_reader(file)?
        } else {
            Self::from_csv_reader(file)?
        };
        info!("📀 Loaded {} discs from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Builds a bag for `owner` from catalog ids. Repeated ids collapse into
    /// one entry; unknown ids are an error.
    pub fn resolve_bag<I, S>(&self, owner: &str, ids: I) -> DfResult<Bag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bag = Bag::new(owner);
        for raw in ids {
            let id = DiscId::new(raw.as_ref().trim());
            let disc = self
                .get(&id)
                .ok_or_else(|| DiscForgeError::UnknownDisc(id.to_string()))?;
            bag.add(disc);
        }
        Ok(bag)
    }
}
