use im::OrdSet;

/// A candidate value for a cell, in `1..=N` for an N×N grid.
pub type Value = u8;

/// The set of values still considered possible for one cell.
///
/// Backed by `im::OrdSet`, so cloning a domain (and, transitively, a whole
/// grid of domains) shares structure instead of copying. Iteration is always
/// ascending, which the mutation generator relies on for a reproducible
/// enumeration order.
///
/// During a solve, domains only ever shrink. An empty domain is a
/// contradiction, caught by the validity checker rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(OrdSet<Value>);

impl Domain {
    /// The full domain `{1..=size}` for a blank cell.
    pub fn full(size: usize) -> Self {
        Self((1..=size as Value).collect())
    }

    /// The domain `{value}` for a given (pre-determined) cell.
    pub fn singleton(value: Value) -> Self {
        Self(OrdSet::unit(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A determined cell holds exactly one candidate.
    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns its single value.
    pub fn singleton_value(&self) -> Option<Value> {
        if self.is_singleton() {
            self.0.get_min().copied()
        } else {
            None
        }
    }

    pub fn min_value(&self) -> Option<Value> {
        self.0.get_min().copied()
    }

    pub fn max_value(&self) -> Option<Value> {
        self.0.get_max().copied()
    }

    pub fn contains(&self, value: Value) -> bool {
        self.0.contains(&value)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: Value) -> bool {
        self.0.remove(&value).is_some()
    }

    /// Collapses the domain to exactly `{value}`.
    pub fn collapse_to(&mut self, value: Value) {
        self.0 = OrdSet::unit(value);
    }

    /// Iterates the candidate values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().copied()
    }

    /// `true` if every value of `self` is also in `other`.
    pub fn is_subset_of(&self, other: &Domain) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<Value> for Domain {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
