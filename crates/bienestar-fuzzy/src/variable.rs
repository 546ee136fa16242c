//! Linguistic variables and fuzzification

use crate::error::{FuzzyError, Result};
use crate::membership::{FuzzySet, MembershipFunction};
use crate::universe::Universe;

/// Whether a variable is read from inputs or produced by inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Crisp input, fuzzified before rule evaluation
    Antecedent,
    /// Inferred output, defuzzified after aggregation
    Consequent,
}

impl Role {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Antecedent => "antecedent",
            Role::Consequent => "consequent",
        }
    }
}

/// A linguistic variable: a domain plus its named fuzzy sets
///
/// Sets keep their declaration order, which is also the order of
/// [`Variable::fuzzify`] results.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    universe: Universe,
    role: Role,
    sets: Vec<FuzzySet>,
}

impl Variable {
    /// Create a variable with no sets
    pub fn new(name: impl Into<String>, universe: Universe, role: Role) -> Self {
        Self {
            name: name.into(),
            universe,
            role,
            sets: Vec::new(),
        }
    }

    /// Create an input variable
    pub fn antecedent(name: impl Into<String>, universe: Universe) -> Self {
        Self::new(name, universe, Role::Antecedent)
    }

    /// Create an output variable
    pub fn consequent(name: impl Into<String>, universe: Universe) -> Self {
        Self::new(name, universe, Role::Consequent)
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sampled domain
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Input or output
    pub fn role(&self) -> Role {
        self.role
    }

    /// Declared sets in order
    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    /// Look up a set by name
    pub fn set(&self, name: &str) -> Option<&FuzzySet> {
        self.sets.iter().find(|s| s.name == name)
    }

    /// Whether a set with this name exists
    pub fn has_set(&self, name: &str) -> bool {
        self.set(name).is_some()
    }

    /// Add a named set, validating its breakpoints and name uniqueness
    pub fn define_set(&mut self, name: impl Into<String>, shape: MembershipFunction) -> Result<()> {
        let set = FuzzySet::new(name, shape)?;

        if self.has_set(&set.name) {
            return Err(FuzzyError::Configuration(format!(
                "variable '{}' already defines set '{}'",
                self.name, set.name
            )));
        }

        self.sets.push(set);
        Ok(())
    }

    /// Builder form of [`Variable::define_set`]
    pub fn with_set(mut self, name: impl Into<String>, shape: MembershipFunction) -> Result<Self> {
        self.define_set(name, shape)?;
        Ok(self)
    }

    /// Degree of membership of `value` in every set, in declaration order
    ///
    /// The caller is expected to have clamped `value` into the domain;
    /// no validation happens here.
    pub fn fuzzify(&self, value: f64) -> Vec<(String, f64)> {
        self.sets
            .iter()
            .map(|set| (set.name.clone(), set.membership(value)))
            .collect()
    }
}
