//! Antecedent expressions and Zadeh operators

use crate::error::{FuzzyError, Result};
use std::collections::HashMap;
use std::fmt;

/// Fuzzy AND (minimum t-norm)
pub fn and(a: f64, b: f64) -> f64 {
    a.min(b)
}

/// Fuzzy OR (maximum t-conorm)
pub fn or(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Fuzzy NOT (standard complement)
pub fn not(a: f64) -> f64 {
    1.0 - a
}

/// Reference to one fuzzy set of one variable, e.g. `calidad_sueno.mala`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term {
    /// Variable name
    pub variable: String,
    /// Set name within the variable
    pub set: String,
}

impl Term {
    /// Create a term reference
    pub fn new(variable: impl Into<String>, set: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            set: set.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.variable, self.set)
    }
}

/// Degrees of membership for every term known to one evaluation
///
/// Antecedent terms hold their fuzzified degree; consequent terms hold the
/// activation accumulated so far (max firing strength of the rules that
/// conclude them).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    degrees: HashMap<String, HashMap<String, f64>>,
}

impl Snapshot {
    /// Empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the degree of a term, replacing any previous value
    pub fn insert(&mut self, variable: &str, set: &str, degree: f64) {
        self.degrees
            .entry(variable.to_string())
            .or_default()
            .insert(set.to_string(), degree);
    }

    /// Raise the degree of a term to at least `degree`
    pub fn accumulate(&mut self, term: &Term, degree: f64) {
        let slot = self
            .degrees
            .entry(term.variable.clone())
            .or_default()
            .entry(term.set.clone())
            .or_insert(0.0);
        *slot = or(*slot, degree);
    }

    /// Degree of a term, if present
    pub fn degree(&self, variable: &str, set: &str) -> Option<f64> {
        self.degrees.get(variable)?.get(set).copied()
    }
}

/// Antecedent expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Degree of one term
    Term(Term),
    /// Minimum of both sides
    And(Box<Expression>, Box<Expression>),
    /// Maximum of both sides
    Or(Box<Expression>, Box<Expression>),
    /// Complement
    Not(Box<Expression>),
}

impl Expression {
    /// Leaf referencing `variable.set`
    pub fn term(variable: impl Into<String>, set: impl Into<String>) -> Self {
        Expression::Term(Term::new(variable, set))
    }

    /// `self AND other`
    pub fn and(self, other: Expression) -> Self {
        Expression::And(Box::new(self), Box::new(other))
    }

    /// `self OR other`
    pub fn or(self, other: Expression) -> Self {
        Expression::Or(Box::new(self), Box::new(other))
    }

    /// `NOT self`
    pub fn negate(self) -> Self {
        Expression::Not(Box::new(self))
    }

    /// Left fold of `exprs` with AND; `None` for an empty list
    pub fn all(exprs: impl IntoIterator<Item = Expression>) -> Option<Self> {
        exprs.into_iter().reduce(Expression::and)
    }

    /// Left fold of `exprs` with OR; `None` for an empty list
    pub fn any(exprs: impl IntoIterator<Item = Expression>) -> Option<Self> {
        exprs.into_iter().reduce(Expression::or)
    }

    /// Evaluate against a snapshot to a degree in `[0, 1]`
    pub fn evaluate(&self, snapshot: &Snapshot) -> Result<f64> {
        match self {
            Expression::Term(term) => snapshot
                .degree(&term.variable, &term.set)
                .ok_or_else(|| FuzzyError::Inference(format!("term '{}' has no degree", term))),
            Expression::And(lhs, rhs) => Ok(and(lhs.evaluate(snapshot)?, rhs.evaluate(snapshot)?)),
            Expression::Or(lhs, rhs) => Ok(or(lhs.evaluate(snapshot)?, rhs.evaluate(snapshot)?)),
            Expression::Not(inner) => Ok(not(inner.evaluate(snapshot)?)),
        }
    }

    /// Every term referenced by the tree, left to right
    pub fn terms(&self) -> Vec<&Term> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a Term>) {
        match self {
            Expression::Term(term) => out.push(term),
            Expression::And(lhs, rhs) | Expression::Or(lhs, rhs) => {
                lhs.collect_terms(out);
                rhs.collect_terms(out);
            }
            Expression::Not(inner) => inner.collect_terms(out),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term(term) => write!(f, "{}", term),
            Expression::And(lhs, rhs) => write!(f, "({} AND {})", lhs, rhs),
            Expression::Or(lhs, rhs) => write!(f, "({} OR {})", lhs, rhs),
            Expression::Not(inner) => write!(f, "NOT {}", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        let mut snap = Snapshot::new();
        snap.insert("sueno", "mala", 0.25);
        snap.insert("carga", "intensa", 0.75);
        snap.insert("satisf", "alta", 0.0);
        snap
    }

    #[test]
    fn test_operators() {
        assert_eq!(and(0.3, 0.8), 0.3);
        assert_eq!(or(0.3, 0.8), 0.8);
        assert_eq!(not(0.25), 0.75);
    }

    #[test]
    fn test_evaluate_tree() {
        let snap = snapshot();
        let expr = Expression::term("sueno", "mala")
            .or(Expression::term("carga", "intensa"))
            .and(Expression::term("satisf", "alta").negate());
        assert_eq!(expr.evaluate(&snap).unwrap(), 0.75);
    }

    #[test]
    fn test_missing_term_is_inference_error() {
        let snap = snapshot();
        let expr = Expression::term("horas", "altas");
        assert!(matches!(expr.evaluate(&snap), Err(FuzzyError::Inference(_))));
    }

    #[test]
    fn test_all_and_any_folds() {
        let snap = snapshot();
        let all = Expression::all([
            Expression::term("sueno", "mala"),
            Expression::term("carga", "intensa"),
        ])
        .unwrap();
        let any = Expression::any([
            Expression::term("sueno", "mala"),
            Expression::term("carga", "intensa"),
        ])
        .unwrap();
        assert_eq!(all.evaluate(&snap).unwrap(), 0.25);
        assert_eq!(any.evaluate(&snap).unwrap(), 0.75);
        assert!(Expression::all(Vec::new()).is_none());
    }

    #[test]
    fn test_accumulate_keeps_maximum() {
        let mut snap = Snapshot::new();
        let term = Term::new("nivel_estres", "moderado");
        snap.accumulate(&term, 0.4);
        snap.accumulate(&term, 0.2);
        assert_eq!(snap.degree("nivel_estres", "moderado"), Some(0.4));
        snap.accumulate(&term, 0.9);
        assert_eq!(snap.degree("nivel_estres", "moderado"), Some(0.9));
    }

    #[test]
    fn test_terms_and_display() {
        let expr = Expression::term("a", "x").and(Expression::term("b", "y").negate());
        let terms: Vec<String> = expr.terms().iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["a.x", "b.y"]);
        assert_eq!(expr.to_string(), "(a.x AND NOT b.y)");
    }
}
