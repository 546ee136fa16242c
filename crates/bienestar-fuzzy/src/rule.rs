//! Fuzzy rules

use crate::expression::{Expression, Snapshot, Term};
use crate::error::{FuzzyError, Result};
use std::fmt;

/// `IF antecedent THEN consequent(s)`
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Optional label used in logs
    pub label: Option<String>,
    /// Condition tree
    pub antecedent: Expression,
    /// Output sets asserted by the rule
    pub consequents: Vec<Term>,
}

impl Rule {
    /// Rule with a single consequent
    pub fn new(antecedent: Expression, consequent: Term) -> Self {
        Self {
            label: None,
            antecedent,
            consequents: vec![consequent],
        }
    }

    /// Rule asserting several consequents at once
    ///
    /// Fails if `consequents` is empty.
    pub fn with_consequents(antecedent: Expression, consequents: Vec<Term>) -> Result<Self> {
        if consequents.is_empty() {
            return Err(FuzzyError::Configuration(format!(
                "rule '{}' has no consequent",
                antecedent
            )));
        }
        Ok(Self {
            label: None,
            antecedent,
            consequents,
        })
    }

    /// Attach a label
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Degree to which the antecedent holds
    pub fn firing_strength(&self, snapshot: &Snapshot) -> Result<f64> {
        self.antecedent.evaluate(snapshot)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "[{}] ", label)?;
        }
        write!(f, "IF {} THEN ", self.antecedent)?;
        for (i, term) in self.consequents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firing_strength() {
        let mut snap = Snapshot::new();
        snap.insert("horas_trabajo", "normales", 1.0);
        snap.insert("carga_mental", "moderada", 0.5);

        let rule = Rule::new(
            Expression::term("horas_trabajo", "normales").and(Expression::term("carga_mental", "moderada")),
            Term::new("nivel_estres", "moderado"),
        );
        assert_eq!(rule.firing_strength(&snap).unwrap(), 0.5);
    }

    #[test]
    fn test_empty_consequents_rejected() {
        let result = Rule::with_consequents(Expression::term("a", "b"), vec![]);
        assert!(matches!(result, Err(FuzzyError::Configuration(_))));
    }

    #[test]
    fn test_display() {
        let rule = Rule::new(Expression::term("horas_trabajo", "normales"), Term::new("nivel_estres", "moderado"))
            .labeled("r11");
        assert_eq!(rule.to_string(), "[r11] IF horas_trabajo.normales THEN nivel_estres.moderado");
    }
}
