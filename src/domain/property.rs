//! Observable value holders and change tracking
//!
//! The simulation model is a small static dependency graph: three source
//! values (input force, input radius, output radius) and values derived from
//! them (area, output force, view geometry). [`Property`] holds one source
//! value and stamps every accepted change with a new revision; [`Watch`]
//! lets a derived computation ask "did any of my dependencies change since I
//! last ran?" so each derivation runs at most once per upstream change, even
//! when dependencies share an ancestor.
//!
//! Propagation is synchronous and push-based: every mutating entry point on
//! the model re-runs its derivations before returning control to the caller,
//! so no stale intermediate value is ever observable.

use std::fmt;

use thiserror::Error;

/// Errors raised when writing to a [`Property`]
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("value {value} rejected by validator")]
    InvalidValue { value: String },
}

/// Observable value holder with validation and reset support
///
/// Holds the current value, the value supplied at construction (restored by
/// [`Property::reset`]), and an optional validator. Invalid writes are
/// rejected before any dependent can observe them; the prior value is
/// retained.
#[derive(Debug, Clone)]
pub struct Property<T> {
    value: T,
    initial: T,
    validator: Option<fn(&T) -> bool>,
    revision: u64,
}

impl<T: Copy + PartialEq + fmt::Display> Property<T> {
    /// Creates a property with no validation
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            initial,
            validator: None,
            revision: 0,
        }
    }

    /// Creates a property whose writes must satisfy `validator`
    ///
    /// The initial value must itself be valid; this is the caller's
    /// responsibility and is checked in debug builds.
    pub fn with_validator(initial: T, validator: fn(&T) -> bool) -> Self {
        debug_assert!(validator(&initial), "initial property value must be valid");
        Self {
            value: initial,
            initial,
            validator: Some(validator),
            revision: 0,
        }
    }

    /// Returns the current value
    pub fn get(&self) -> T {
        self.value
    }

    /// Returns the value supplied at construction
    pub fn initial(&self) -> T {
        self.initial
    }

    /// Returns the revision stamp, bumped on every accepted change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Writes a new value
    ///
    /// Returns `Ok(true)` if the value changed, `Ok(false)` if the write was
    /// a no-op, and an error if the validator rejected the value. On error
    /// the prior value is retained and the revision does not move.
    pub fn set(&mut self, value: T) -> Result<bool, PropertyError> {
        if let Some(validator) = self.validator {
            if !validator(&value) {
                return Err(PropertyError::InvalidValue {
                    value: value.to_string(),
                });
            }
        }
        if value == self.value {
            return Ok(false);
        }
        self.value = value;
        self.revision += 1;
        Ok(true)
    }

    /// Restores the construction-time value
    pub fn reset(&mut self) {
        if self.value != self.initial {
            self.value = self.initial;
            self.revision += 1;
        }
    }
}

/// Change detector over a fixed set of dependencies
///
/// Records the revisions it last acted on. [`Watch::changed`] answers true
/// exactly once per upstream change and re-arms itself, which gives derived
/// computations their at-most-once-per-transaction guarantee: a diamond in
/// the dependency graph cannot make a downstream node recompute twice for
/// the same change.
#[derive(Debug, Clone, Default)]
pub struct Watch<const N: usize> {
    seen: Option<[u64; N]>,
}

impl<const N: usize> Watch<N> {
    /// Creates a watch that fires on its first poll
    pub fn new() -> Self {
        Self { seen: None }
    }

    /// Polls the watch against the current dependency revisions
    ///
    /// Returns true (and records the revisions) if any dependency moved
    /// since the last poll, or if the watch has never been polled.
    pub fn changed(&mut self, revisions: [u64; N]) -> bool {
        if self.seen == Some(revisions) {
            return false;
        }
        self.seen = Some(revisions);
        true
    }
}
