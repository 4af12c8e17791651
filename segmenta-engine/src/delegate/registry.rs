//! Name-to-factory registry with a memoized instance cache

use super::{Chunker, ChunkerError, ChunkerOptions, RecursiveChunker, SentenceChunker};
use crate::error::DependencyError;
use crate::mode::DelegateSpec;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Builds a chunker from its options
pub type ChunkerFactory =
    Arc<dyn Fn(&ChunkerOptions) -> Result<Arc<dyn Chunker>, ChunkerError> + Send + Sync>;

/// Chunkers that exist but depend on an optional cargo feature
const OPTIONAL_CHUNKERS: &[(&str, &str)] = &[("token", "token")];

/// Identity of a delegate configuration: its name plus canonical options
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of a delegate spec
    pub fn of(spec: &DelegateSpec) -> Self {
        Self(format!("{}|{}", spec.name, spec.options.canonical()))
    }

    /// Textual form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Maps chunker names to factories and memoizes constructed instances
///
/// Two requests with the same [`Fingerprint`] share one instance for the
/// lifetime of the registry.
pub struct ChunkerRegistry {
    factories: HashMap<String, ChunkerFactory>,
    cache: Mutex<HashMap<Fingerprint, Arc<dyn Chunker>>>,
}

impl fmt::Debug for ChunkerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkerRegistry")
            .field("chunkers", &self.names())
            .field("cached", &self.cached())
            .finish()
    }
}

impl Default for ChunkerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ChunkerRegistry {
    /// Create a registry with no chunkers
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry holding every built-in chunker this build supports
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(SentenceChunker::NAME, |options| {
            Ok(Arc::new(SentenceChunker::from_options(options)?) as Arc<dyn Chunker>)
        });
        registry.register(RecursiveChunker::NAME, |options| {
            Ok(Arc::new(RecursiveChunker::from_options(options)?) as Arc<dyn Chunker>)
        });
        #[cfg(feature = "token")]
        registry.register(super::TokenChunker::NAME, |options| {
            Ok(Arc::new(super::TokenChunker::from_options(options)?) as Arc<dyn Chunker>)
        });
        registry
    }

    /// Register a factory, replacing any previous one with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ChunkerOptions) -> Result<Arc<dyn Chunker>, ChunkerError> + Send + Sync + 'static,
    {
        let name = name.into();
        log::debug!("Registering chunker '{name}'");
        let prefix = format!("{name}|");
        self.factories.insert(name, Arc::new(factory));
        // Drop instances built by a replaced factory
        self.lock_cache()
            .retain(|fingerprint, _| !fingerprint.as_str().starts_with(&prefix));
    }

    /// Whether a factory is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of memoized instances
    pub fn cached(&self) -> usize {
        self.lock_cache().len()
    }

    /// Resolve a chunker, constructing it on first use
    pub fn resolve(&self, spec: &DelegateSpec) -> Result<Arc<dyn Chunker>, DependencyError> {
        let fingerprint = Fingerprint::of(spec);
        if let Some(chunker) = self.lock_cache().get(&fingerprint) {
            log::debug!("Reusing chunker for {}", fingerprint.as_str());
            return Ok(Arc::clone(chunker));
        }

        let factory = self
            .factories
            .get(&spec.name)
            .ok_or_else(|| self.missing(&spec.name))?;

        // Construct outside the lock so a slow factory does not block lookups
        let chunker = factory(&spec.options).map_err(|source| DependencyError::InvalidOptions {
            name: spec.name.clone(),
            source,
        })?;
        log::info!("Constructed chunker for {}", fingerprint.as_str());

        let mut cache = self.lock_cache();
        Ok(Arc::clone(cache.entry(fingerprint).or_insert(chunker)))
    }

    fn missing(&self, name: &str) -> DependencyError {
        match OPTIONAL_CHUNKERS.iter().find(|(optional, _)| *optional == name) {
            Some((_, feature)) => DependencyError::Unavailable {
                name: name.to_string(),
                feature,
            },
            None => DependencyError::UnknownChunker {
                name: name.to_string(),
                available: self.names().join(", "),
            },
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<Fingerprint, Arc<dyn Chunker>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
