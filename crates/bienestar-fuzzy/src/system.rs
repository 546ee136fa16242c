//! Fuzzy control system: variable registry, rule base and inference engine
//!
//! A [`FuzzySystem`] is assembled once through [`FuzzySystemBuilder`] and is
//! immutable afterwards, so it can be shared by reference across threads.
//! Every call to [`FuzzySystem::evaluate`] allocates its own snapshot.
//!
//! Rules may read terms of consequent variables (chained inference). The
//! degree of such a term is its activation: the max firing strength of the
//! rules concluding it. Rules are therefore evaluated in dependency order,
//! computed at build time, and the declared order has no effect on results.

use crate::defuzzify::centroid;
use crate::error::{FuzzyError, Result};
use crate::expression::{and, or, Snapshot, Term};
use crate::membership::MembershipFunction;
use crate::rule::Rule;
use crate::variable::{Role, Variable};
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{debug, info};

/// Crisp outputs keyed by consequent variable name
pub type Outputs = BTreeMap<String, f64>;

/// Aggregated output curve of one consequent variable
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCurve {
    /// Consequent variable name
    pub variable: String,
    /// Membership per universe sample
    pub values: Vec<f64>,
}

/// Intermediate results of one inference pass
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// Firing strength per rule, in declared rule order
    pub firing_strengths: Vec<f64>,
    /// One max-aggregated curve per consequent variable, in declaration order
    pub curves: Vec<AggregatedCurve>,
}

impl Inference {
    /// Aggregated curve of a consequent variable
    pub fn curve(&self, variable: &str) -> Option<&AggregatedCurve> {
        self.curves.iter().find(|c| c.variable == variable)
    }
}

/// Collects variables and rules, then validates them into a [`FuzzySystem`]
#[derive(Debug, Clone, Default)]
pub struct FuzzySystemBuilder {
    variables: Vec<Variable>,
    rules: Vec<Rule>,
}

impl FuzzySystemBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable; names must be unique across the system
    pub fn define_variable(&mut self, variable: Variable) -> Result<()> {
        if self.variables.iter().any(|v| v.name() == variable.name()) {
            return Err(FuzzyError::Configuration(format!(
                "variable '{}' is defined twice",
                variable.name()
            )));
        }
        self.variables.push(variable);
        Ok(())
    }

    /// Builder form of [`FuzzySystemBuilder::define_variable`]
    pub fn variable(mut self, variable: Variable) -> Result<Self> {
        self.define_variable(variable)?;
        Ok(self)
    }

    /// Add a set to an already registered variable
    pub fn define_set(&mut self, variable: &str, name: &str, shape: MembershipFunction) -> Result<()> {
        let var = self
            .variables
            .iter_mut()
            .find(|v| v.name() == variable)
            .ok_or_else(|| FuzzyError::Configuration(format!("unknown variable '{}'", variable)))?;
        var.define_set(name, shape)
    }

    /// Append a rule
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder form of [`FuzzySystemBuilder::add_rule`]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Validate every reference and compute the evaluation order
    pub fn build(self) -> Result<FuzzySystem> {
        for (index, rule) in self.rules.iter().enumerate() {
            self.validate_rule(index, rule)?;
        }

        let order = evaluation_order(&self.variables, &self.rules)?;

        info!(
            "Built fuzzy system with {} variables and {} rules",
            self.variables.len(),
            self.rules.len()
        );

        Ok(FuzzySystem {
            variables: self.variables,
            rules: self.rules,
            order,
        })
    }

    fn validate_rule(&self, index: usize, rule: &Rule) -> Result<()> {
        if rule.consequents.is_empty() {
            return Err(FuzzyError::Configuration(format!("rule {} has no consequent", index)));
        }

        for term in rule.antecedent.terms() {
            self.resolve(index, term)?;
        }

        for term in &rule.consequents {
            let var = self.resolve(index, term)?;
            if var.role() != Role::Consequent {
                return Err(FuzzyError::Configuration(format!(
                    "rule {} concludes '{}', but '{}' is an {}",
                    index,
                    term,
                    var.name(),
                    var.role().as_str()
                )));
            }
        }

        Ok(())
    }

    fn resolve(&self, index: usize, term: &Term) -> Result<&Variable> {
        let var = self
            .variables
            .iter()
            .find(|v| v.name() == term.variable)
            .ok_or_else(|| {
                FuzzyError::Configuration(format!(
                    "rule {} references unknown variable '{}'",
                    index, term.variable
                ))
            })?;

        if !var.has_set(&term.set) {
            return Err(FuzzyError::Configuration(format!(
                "rule {} references unknown set '{}'",
                index, term
            )));
        }

        Ok(var)
    }
}

/// Topological order of rules: writers of a consequent term before its readers
fn evaluation_order(variables: &[Variable], rules: &[Rule]) -> Result<Vec<usize>> {
    let is_consequent = |name: &str| {
        variables
            .iter()
            .any(|v| v.name() == name && v.role() == Role::Consequent)
    };

    let mut writers: HashMap<&Term, Vec<usize>> = HashMap::new();
    for (index, rule) in rules.iter().enumerate() {
        for term in &rule.consequents {
            writers.entry(term).or_default().push(index);
        }
    }

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); rules.len()];
    let mut pending = vec![0usize; rules.len()];
    for (reader, rule) in rules.iter().enumerate() {
        for term in rule.antecedent.terms() {
            if !is_consequent(&term.variable) {
                continue;
            }
            for &writer in writers.get(term).map(Vec::as_slice).unwrap_or(&[]) {
                dependents[writer].push(reader);
                pending[reader] += 1;
            }
        }
    }

    let mut ready: VecDeque<usize> = (0..rules.len()).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(rules.len());
    while let Some(index) = ready.pop_front() {
        order.push(index);
        for &next in &dependents[index] {
            pending[next] -= 1;
            if pending[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() != rules.len() {
        let cyclic: Vec<String> = (0..rules.len())
            .filter(|i| pending[*i] > 0)
            .map(|i| i.to_string())
            .collect();
        return Err(FuzzyError::Configuration(format!(
            "rules form a dependency cycle: {}",
            cyclic.join(", ")
        )));
    }

    Ok(order)
}

/// Immutable, validated fuzzy system
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    variables: Vec<Variable>,
    rules: Vec<Rule>,
    order: Vec<usize>,
}

impl FuzzySystem {
    /// Start a new builder
    pub fn builder() -> FuzzySystemBuilder {
        FuzzySystemBuilder::new()
    }

    /// All variables in declaration order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    /// Rules in declared order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Variables with the given role, in declaration order
    pub fn variables_with_role(&self, role: Role) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(move |v| v.role() == role)
    }

    /// Membership of `value` in every set of `variable`
    pub fn fuzzify(&self, variable: &str, value: f64) -> Result<Vec<(String, f64)>> {
        self.variable(variable)
            .map(|v| v.fuzzify(value))
            .ok_or_else(|| FuzzyError::Inference(format!("unknown variable '{}'", variable)))
    }

    /// Fuzzify inputs, fire rules and aggregate per consequent variable
    ///
    /// Every antecedent variable must receive exactly one finite value.
    pub fn infer(&self, inputs: &[(&str, f64)]) -> Result<Inference> {
        let mut snapshot = Snapshot::new();

        for (index, (name, value)) in inputs.iter().enumerate() {
            if inputs[..index].iter().any(|(seen, _)| seen == name) {
                return Err(FuzzyError::Inference(format!("input '{}' given more than once", name)));
            }
            let var = self
                .variable(name)
                .ok_or_else(|| FuzzyError::Inference(format!("unknown input variable '{}'", name)))?;
            if var.role() != Role::Antecedent {
                return Err(FuzzyError::Inference(format!(
                    "'{}' is an output and cannot be set as input",
                    name
                )));
            }
            if value.is_nan() {
                return Err(FuzzyError::Inference(format!("input '{}' is NaN", name)));
            }
            for (set, degree) in var.fuzzify(*value) {
                snapshot.insert(name, &set, degree);
            }
        }

        for var in self.variables_with_role(Role::Antecedent) {
            if !inputs.iter().any(|(name, _)| *name == var.name()) {
                return Err(FuzzyError::Inference(format!("missing input '{}'", var.name())));
            }
        }

        for var in self.variables_with_role(Role::Consequent) {
            for set in var.sets() {
                snapshot.insert(var.name(), &set.name, 0.0);
            }
        }

        let mut firing_strengths = vec![0.0; self.rules.len()];
        for &index in &self.order {
            let rule = &self.rules[index];
            let strength = rule.firing_strength(&snapshot)?;
            if !strength.is_finite() {
                return Err(FuzzyError::Inference(format!("rule {} fired a non-finite strength", index)));
            }
            debug!("Rule {} fired at {:.4}: {}", index, strength, rule);

            for term in &rule.consequents {
                snapshot.accumulate(term, strength);
            }
            firing_strengths[index] = strength;
        }

        let curves = self
            .variables_with_role(Role::Consequent)
            .map(|var| self.aggregate(var, &firing_strengths))
            .collect::<Result<Vec<_>>>()?;

        Ok(Inference {
            firing_strengths,
            curves,
        })
    }

    /// Run inference and defuzzify every consequent variable by centroid
    pub fn evaluate(&self, inputs: &[(&str, f64)]) -> Result<Outputs> {
        let inference = self.infer(inputs)?;
        let mut outputs = Outputs::new();

        for curve in &inference.curves {
            let var = self.variable(&curve.variable).ok_or_else(|| {
                FuzzyError::Inference(format!("unknown output variable '{}'", curve.variable))
            })?;
            let crisp = centroid(var.name(), var.universe(), &curve.values)?;
            debug!("Output {} = {:.4}", var.name(), crisp);
            outputs.insert(var.name().to_string(), crisp);
        }

        Ok(outputs)
    }

    /// Pointwise max over every rule's clipped contribution to `var`
    fn aggregate(&self, var: &Variable, firing_strengths: &[f64]) -> Result<AggregatedCurve> {
        let points = var.universe().points();
        let mut values = vec![0.0; points.len()];

        for (rule, &strength) in self.rules.iter().zip(firing_strengths) {
            for term in rule.consequents.iter().filter(|t| t.variable == var.name()) {
                let set = var.set(&term.set).ok_or_else(|| {
                    FuzzyError::Inference(format!("unknown output set '{}'", term))
                })?;
                for (value, &u) in values.iter_mut().zip(points) {
                    *value = or(*value, and(strength, set.membership(u)));
                }
            }
        }

        Ok(AggregatedCurve {
            variable: var.name().to_string(),
            values,
        })
    }
}
