//! Language record lookup
//!
//! The shipped resolver is an in-memory [`Registry`] filled by callers at
//! runtime. It matches codes exactly (ASCII case-insensitive) and carries no
//! built-in language database.

use std::sync::RwLock;

use slang_abi::{AbiError, LangRecord};

use crate::error::ResolveError;

/// Anything that can turn a language code into a record
pub trait LangResolver {
    /// Resolve `code` to the best matching record
    fn resolve(&self, code: &str) -> Result<LangRecord, ResolveError>;
}

/// Records registered at runtime
#[derive(Debug, Default, Clone)]
pub struct Registry {
    records: Vec<LangRecord>,
}

static GLOBAL: RwLock<Registry> = RwLock::new(Registry::new());

impl Registry {
    /// An empty registry
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Register a record; earlier registrations win ties
    pub fn add(&mut self, record: LangRecord) -> Result<(), AbiError> {
        record.validate()?;
        tracing::debug!(bcp47 = %record.bcp47, name = %record.name, "registering language");
        self.records.push(record);
        Ok(())
    }

    /// Forget every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of registered records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registered records in registration order
    pub fn records(&self) -> &[LangRecord] {
        &self.records
    }

    /// Records whose selected field equals `code`, shortest BCP 47 tag first
    fn select<F>(&self, code: &str, field: F) -> Vec<&LangRecord>
    where
        F: Fn(&LangRecord) -> &str,
    {
        let mut matches: Vec<&LangRecord> = self
            .records
            .iter()
            .filter(|record| {
                let value = field(*record);
                !value.is_empty() && value.eq_ignore_ascii_case(code)
            })
            .collect();
        // stable sort keeps registration order among equal tags
        matches.sort_by(|a, b| {
            a.bcp47
                .len()
                .cmp(&b.bcp47.len())
                .then_with(|| a.bcp47.cmp(&b.bcp47))
        });
        matches
    }
}

impl LangResolver for Registry {
    fn resolve(&self, code: &str) -> Result<LangRecord, ResolveError> {
        let bcp47 = code.replace('_', "-");
        let lookups: [(&str, fn(&LangRecord) -> &str); 5] = [
            (bcp47.as_str(), |r| r.bcp47.as_str()),
            (code, |r| r.iso639_3.as_str()),
            (code, |r| r.iso639_2.as_str()),
            (code, |r| r.iso639_1.as_str()),
            (code, |r| r.win_id.as_str()),
        ];

        for (needle, field) in lookups {
            if let Some(record) = self.select(needle, field).first() {
                return Ok((*record).clone());
            }
        }

        Err(ResolveError::NotFound {
            code: code.to_string(),
        })
    }
}

/// Resolve against the process-wide registry
pub fn resolve_global(code: &str) -> Result<LangRecord, ResolveError> {
    let registry = GLOBAL
        .read()
        .map_err(|_| ResolveError::Backend("language registry lock poisoned".into()))?;
    registry.resolve(code)
}

/// Run `f` with write access to the process-wide registry
pub fn with_global_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> Result<R, ResolveError> {
    let mut registry = GLOBAL
        .write()
        .map_err(|_| ResolveError::Backend("language registry lock poisoned".into()))?;
    Ok(f(&mut registry))
}
