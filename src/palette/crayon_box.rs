//! A box of named crayons.

use std::collections::HashMap;
use std::sync::Arc;

use super::error::BoxError;
use crate::output::Output;
use crate::style::{Crayon, Style};

/// Name of the crayon every box holds.
pub const BASE: &str = "base";

/// Crayons stored by name.
///
/// Entries are shared handles: the same crayon may sit under several
/// names and still be held by the caller. The box never copies or changes
/// a stored crayon.
///
/// There is always a [`BASE`] crayon. It can't be removed, and
/// [`pick`](CrayonBox::pick) falls back to it for unknown names.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use crayons::{CrayonBox, Output, Style};
///
/// let (output, _capture) = Output::capture(false);
/// let mut crayons = CrayonBox::new(&output, None);
///
/// let accent = Arc::new(output.crayon([Style::FgBrightRed]));
/// crayons.store("accent", accent.clone()).unwrap();
///
/// assert!(Arc::ptr_eq(&crayons.pick("accent"), &accent));
/// assert!(Arc::ptr_eq(&crayons.pick("missing"), &crayons.base()));
/// ```
#[derive(Debug, Clone)]
pub struct CrayonBox {
    base: Arc<Crayon>,
    crayons: HashMap<String, Arc<Crayon>>,
}

impl CrayonBox {
    /// Creates a box around `base`.
    ///
    /// With no base, one is built on `output` using the terminal's default
    /// foreground and background.
    pub fn new(output: &Output, base: Option<Arc<Crayon>>) -> Self {
        let base = base
            .unwrap_or_else(|| Arc::new(Crayon::new(output, [Style::DefaultFg, Style::DefaultBg])));
        Self::with_base(base)
    }

    /// Creates a box around an existing base crayon.
    pub fn with_base(base: Arc<Crayon>) -> Self {
        Self {
            base,
            crayons: HashMap::new(),
        }
    }

    /// Stores `crayon` under `name`.
    ///
    /// # Errors
    ///
    /// [`BoxError::NilCrayon`] if `crayon` is `None`,
    /// [`BoxError::AlreadyExists`] if `name` is taken. The box is unchanged
    /// in both cases.
    pub fn store<C>(&mut self, name: &str, crayon: C) -> Result<(), BoxError>
    where
        C: Into<Option<Arc<Crayon>>>,
    {
        let crayon = crayon.into().ok_or(BoxError::NilCrayon)?;
        if self.contains(name) {
            return Err(BoxError::AlreadyExists {
                name: name.to_string(),
            });
        }
        tracing::debug!(name, "stored crayon");
        self.crayons.insert(name.to_string(), crayon);
        Ok(())
    }

    /// Returns the crayon stored under `name`, or the base crayon.
    pub fn pick(&self, name: &str) -> Arc<Crayon> {
        if name == BASE {
            return self.base();
        }
        match self.crayons.get(name) {
            Some(crayon) => Arc::clone(crayon),
            None => {
                tracing::trace!(name, "no such crayon, picking base");
                self.base()
            }
        }
    }

    /// Returns the base crayon.
    pub fn base(&self) -> Arc<Crayon> {
        Arc::clone(&self.base)
    }

    /// Removes the crayon stored under `name`. Unknown names are ignored.
    ///
    /// # Errors
    ///
    /// [`BoxError::RemoveBase`] for [`BASE`].
    pub fn remove(&mut self, name: &str) -> Result<(), BoxError> {
        if name == BASE {
            return Err(BoxError::RemoveBase);
        }
        if self.crayons.remove(name).is_some() {
            tracing::debug!(name, "removed crayon");
        }
        Ok(())
    }

    /// Returns every stored name, including [`BASE`], in no particular order.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(BASE)
            .chain(self.crayons.keys().map(String::as_str))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        name == BASE || self.crayons.contains_key(name)
    }

    /// Number of stored crayons, counting the base.
    pub fn len(&self) -> usize {
        self.crayons.len() + 1
    }

    /// Always false: the base crayon is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over `(name, crayon)` pairs, base first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Crayon>)> {
        std::iter::once((BASE, &self.base))
            .chain(self.crayons.iter().map(|(name, crayon)| (name.as_str(), crayon)))
    }
}
