//! Linear schema-migration chains for persisted JSON envelopes.
//!
//! Every persisted blob carries a `schema_version` field (semver). At
//! load time the raw JSON value is run through a linear migration chain
//! to the latest schema before deserialization, so store-format changes
//! don't silently corrupt or reset user data. Each version must migrate
//! through all intermediate versions; this prioritizes safety and
//! debuggability over performance.

use anyhow::{Context, Result, bail};
use semver::Version;
use serde_json::Value;
use std::sync::Arc;

/// Name of the version field every persisted envelope carries.
pub const SCHEMA_VERSION_FIELD: &str = "schema_version";

/// Reads the `schema_version` field of a persisted envelope.
///
/// A blob without a parseable version field predates the envelope format
/// entirely and is treated as unreadable by callers.
pub fn schema_version_of(value: &Value) -> Result<Version> {
    let raw = value
        .get(SCHEMA_VERSION_FIELD)
        .and_then(Value::as_str)
        .context("Persisted value has no schema_version field")?;
    Version::parse(raw).with_context(|| format!("Invalid schema_version '{raw}'"))
}

/// One step of a migration chain, transforming a JSON envelope from one
/// schema version to the next.
pub trait SchemaMigration: Send + Sync + std::fmt::Debug {
    /// The source version this step starts from.
    fn from_version(&self) -> Version;

    /// The target version this step produces.
    fn to_version(&self) -> Version;

    /// Human-readable description, used for logging.
    fn description(&self) -> &str;

    /// Transforms the envelope. The returned value must carry the target
    /// schema_version.
    fn migrate(&self, value: Value) -> Result<Value>;
}

/// A linear chain of migrations for one entity.
///
/// Steps are registered in order and must form a continuous chain:
/// 1.0.0 → 1.1.0 → 2.0.0 → ... `register` validates continuity and
/// panics on a broken chain, which is a programming error caught by the
/// chain constructors' tests.
#[derive(Debug)]
pub struct MigrationChain {
    entity: &'static str,
    latest: Version,
    steps: Vec<Arc<dyn SchemaMigration>>,
}

impl MigrationChain {
    /// Creates an empty chain whose latest schema is `latest`.
    pub fn new(entity: &'static str, latest: Version) -> Self {
        Self {
            entity,
            latest,
            steps: Vec::new(),
        }
    }

    /// The latest version this chain upgrades to.
    pub fn latest(&self) -> &Version {
        &self.latest
    }

    /// Registers the next step, validating chain continuity.
    ///
    /// # Panics
    ///
    /// Panics if the step doesn't connect to the existing chain or
    /// overshoots the latest version.
    pub fn register(&mut self, step: Arc<dyn SchemaMigration>) {
        if let Some(last) = self.steps.last() {
            assert_eq!(
                last.to_version(),
                step.from_version(),
                "Migration chain broken for {}: expected a step from {}, got a step from {}",
                self.entity,
                last.to_version(),
                step.from_version()
            );
        }
        assert!(
            step.to_version() <= self.latest,
            "Migration target {} exceeds latest version {} for {}",
            step.to_version(),
            self.latest,
            self.entity
        );
        self.steps.push(step);
    }

    /// Upgrades an envelope to the latest schema, applying every step
    /// from its current version onward.
    pub fn upgrade(&self, mut value: Value) -> Result<Value> {
        let current = schema_version_of(&value)?;

        if current == self.latest {
            return Ok(value);
        }
        if current > self.latest {
            bail!(
                "{} data version ({current}) is newer than the latest supported version ({})",
                self.entity,
                self.latest
            );
        }

        let start = self
            .steps
            .iter()
            .position(|s| s.from_version() == current)
            .with_context(|| {
                format!(
                    "No migration found for {} starting from version {current}",
                    self.entity
                )
            })?;

        for step in &self.steps[start..] {
            tracing::info!(
                entity = self.entity,
                from = %step.from_version(),
                to = %step.to_version(),
                "applying schema migration: {}",
                step.description()
            );
            value = step.migrate(value).with_context(|| {
                format!(
                    "Migration of {} failed at step {} -> {}",
                    self.entity,
                    step.from_version(),
                    step.to_version()
                )
            })?;
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Rename {
        from: &'static str,
        to: &'static str,
    }

    impl SchemaMigration for Rename {
        fn from_version(&self) -> Version {
            Version::parse(self.from).unwrap()
        }

        fn to_version(&self) -> Version {
            Version::parse(self.to).unwrap()
        }

        fn description(&self) -> &str {
            "test step"
        }

        fn migrate(&self, mut value: Value) -> Result<Value> {
            value[SCHEMA_VERSION_FIELD] = json!(self.to);
            value["steps"] = json!(value["steps"].as_u64().unwrap_or(0) + 1);
            Ok(value)
        }
    }

    fn chain() -> MigrationChain {
        let mut chain = MigrationChain::new("test", Version::new(2, 0, 0));
        chain.register(Arc::new(Rename {
            from: "1.0.0",
            to: "1.1.0",
        }));
        chain.register(Arc::new(Rename {
            from: "1.1.0",
            to: "2.0.0",
        }));
        chain
    }

    #[test]
    fn test_upgrade_runs_every_step() {
        let upgraded = chain()
            .upgrade(json!({"schema_version": "1.0.0", "steps": 0}))
            .unwrap();
        assert_eq!(upgraded["schema_version"], "2.0.0");
        assert_eq!(upgraded["steps"], 2);
    }

    #[test]
    fn test_latest_version_is_untouched() {
        let value = json!({"schema_version": "2.0.0", "steps": 0});
        let upgraded = chain().upgrade(value.clone()).unwrap();
        assert_eq!(upgraded, value);
    }

    #[test]
    fn test_newer_than_latest_is_an_error() {
        assert!(
            chain()
                .upgrade(json!({"schema_version": "3.0.0"}))
                .is_err()
        );
    }

    #[test]
    fn test_missing_version_field_is_an_error() {
        assert!(chain().upgrade(json!({"steps": 0})).is_err());
    }

    #[test]
    #[should_panic(expected = "Migration chain broken")]
    fn test_register_broken_chain_panics() {
        let mut chain = MigrationChain::new("test", Version::new(2, 0, 0));
        chain.register(Arc::new(Rename {
            from: "1.0.0",
            to: "1.1.0",
        }));
        chain.register(Arc::new(Rename {
            from: "1.5.0",
            to: "2.0.0",
        }));
    }
}
