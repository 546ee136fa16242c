//! Bienestar Fuzzy Engine
//!
//! A small Mamdani-style fuzzy inference engine. It has no domain knowledge
//! of its own: callers declare linguistic variables and rules, and the
//! engine turns crisp inputs into crisp outputs.
//!
//! ## Pipeline
//!
//! 1. **Fuzzification**: each crisp input is mapped to a degree per fuzzy set
//! 2. **Rule evaluation**: antecedent trees are walked with Zadeh operators
//!    (`AND = min`, `OR = max`, `NOT = 1 - x`)
//! 3. **Implication**: each rule clips its consequent set at its firing strength
//! 4. **Aggregation**: clipped contributions are max-combined per output variable
//! 5. **Defuzzification**: the aggregated curve is reduced to its centroid
//!
//! ## Example
//!
//! ```
//! use bienestar_fuzzy::{Expression, FuzzySystem, MembershipFunction, Rule, Term, Universe, Variable};
//!
//! # fn main() -> Result<(), bienestar_fuzzy::FuzzyError> {
//! let service = Variable::antecedent("service", Universe::new(0.0, 10.0, 1.0)?)
//!     .with_set("poor", MembershipFunction::triangle(0.0, 0.0, 5.0)?)?
//!     .with_set("good", MembershipFunction::triangle(5.0, 10.0, 10.0)?)?;
//! let tip = Variable::consequent("tip", Universe::new(0.0, 20.0, 1.0)?)
//!     .with_set("low", MembershipFunction::triangle(0.0, 0.0, 10.0)?)?
//!     .with_set("high", MembershipFunction::triangle(10.0, 20.0, 20.0)?)?;
//!
//! let system = FuzzySystem::builder()
//!     .variable(service)?
//!     .variable(tip)?
//!     .rule(Rule::new(Expression::term("service", "poor"), Term::new("tip", "low")))
//!     .rule(Rule::new(Expression::term("service", "good"), Term::new("tip", "high")))
//!     .build()?;
//!
//! let outputs = system.evaluate(&[("service", 9.0)])?;
//! assert!(outputs["tip"] > 10.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defuzzify;
pub mod error;
pub mod expression;
pub mod membership;
pub mod rule;
pub mod system;
pub mod universe;
pub mod variable;

// Re-exports for convenience
pub use defuzzify::centroid;
pub use error::{FuzzyError, Result};
pub use expression::{Expression, Snapshot, Term};
pub use membership::{FuzzySet, MembershipFunction};
pub use rule::Rule;
pub use system::{AggregatedCurve, FuzzySystem, FuzzySystemBuilder, Inference, Outputs};
pub use universe::Universe;
pub use variable::{Role, Variable};
