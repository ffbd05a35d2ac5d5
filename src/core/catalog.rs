//! Event catalog: which labels may open or close a day, and which side of a
//! work interval they represent.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use std::collections::BTreeMap;

/// Built-in table, in the order the host timesheet lists the categories.
const DEFAULT_KINDS: &[(&str, EventKind)] = &[
    ("Příchod", EventKind::new(true, false, true)),
    ("Odchod", EventKind::new(false, true, false)),
    ("Přestávka", EventKind::new(false, false, false)),
    ("Služební cesta", EventKind::new(true, false, true)),
    ("Dovolená", EventKind::new(true, true, false)),
    ("Lékař", EventKind::new(true, true, true)),
    ("Paragraf", EventKind::new(true, true, true)),
    ("Nemoc", EventKind::new(true, true, true)),
    ("Náhradní volno", EventKind::new(true, true, true)),
    ("Neplacené volno", EventKind::new(true, true, true)),
    ("Školení", EventKind::new(true, true, true)),
    ("Placené volno", EventKind::new(true, true, true)),
    ("OČR", EventKind::new(true, true, true)),
    ("Sick Day", EventKind::new(true, true, true)),
    ("Otcovská", EventKind::new(true, true, true)),
];

/// Immutable label → kind table. Built once per run and passed to the
/// validator; alternative rule sets are just other instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCatalog {
    kinds: BTreeMap<String, EventKind>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_KINDS
                .iter()
                .map(|(label, kind)| (label.to_string(), *kind))
                .collect(),
        }
    }
}

impl EventCatalog {
    pub fn new(kinds: BTreeMap<String, EventKind>) -> Self {
        Self { kinds }
    }

    /// The `catalog` section of the configuration, or the built-in table.
    pub fn from_config(cfg: &Config) -> Self {
        match &cfg.catalog {
            Some(map) if !map.is_empty() => Self::new(map.clone()),
            Some(_) => {
                log::warn!("empty catalog in configuration, using the built-in table");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn lookup(&self, label: &str) -> AppResult<EventKind> {
        self.kinds
            .get(label)
            .copied()
            .ok_or_else(|| AppError::UnknownEventKind(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.kinds.contains_key(label)
    }

    /// Labels with their kinds, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventKind)> {
        self.kinds.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn to_map(&self) -> BTreeMap<String, EventKind> {
        self.kinds.clone()
    }
}
