//! Canonical linguistic system for workplace wellbeing
//!
//! Four antecedents (hours, sleep quality, mental load, satisfaction) and
//! three consequents (stress, productivity, action priority). Productivity
//! and priority rules read stress and productivity terms, so the rule base
//! is chained.

use crate::config::InferenceConfig;
use bienestar_fuzzy::{
    Expression, FuzzyError, FuzzySystem, MembershipFunction as Mf, Rule, Term, Universe, Variable,
};

/// Weekly hours worked
pub const HORAS_TRABAJO: &str = "horas_trabajo";
/// Sleep quality, 1-10
pub const CALIDAD_SUENO: &str = "calidad_sueno";
/// Mental load, 1-10
pub const CARGA_MENTAL: &str = "carga_mental";
/// Job satisfaction, 1-10
pub const SATISFACCION: &str = "satisfaccion";
/// Stress level, 0-100
pub const NIVEL_ESTRES: &str = "nivel_estres";
/// Estimated productivity, 0-100
pub const PRODUCTIVIDAD: &str = "productividad";
/// Action priority, 1-10
pub const PRIORIDAD_ACCION: &str = "prioridad_accion";

/// Domain of the hours input
pub const HOURS_RANGE: (f64, f64) = (0.0, 80.0);
/// Domain of the 1-10 self-assessment inputs
pub const SCALE_RANGE: (f64, f64) = (1.0, 10.0);
/// Domain of stress and productivity
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);
/// Domain of action priority
pub const PRIORITY_RANGE: (f64, f64) = (1.0, 10.0);

/// Antecedents are sampled on the integer grid
const INPUT_STEP: f64 = 1.0;

fn t(variable: &str, set: &str) -> Expression {
    Expression::term(variable, set)
}

fn then(variable: &str, set: &str) -> Term {
    Term::new(variable, set)
}

/// Three-set trapezoid partition of a 1-10 scale
fn scale_variable(name: &str, low: &str, mid: &str, high: &str) -> Result<Variable, FuzzyError> {
    let (min, max) = SCALE_RANGE;
    Variable::antecedent(name, Universe::new(min, max, INPUT_STEP)?)
        .with_set(low, Mf::trapezoid(1.0, 1.0, 3.0, 5.0)?)?
        .with_set(mid, Mf::trapezoid(3.0, 4.0, 6.0, 7.0)?)?
        .with_set(high, Mf::trapezoid(5.0, 7.0, 10.0, 10.0)?)
}

fn variables(config: &InferenceConfig) -> Result<Vec<Variable>, FuzzyError> {
    let step = config.output_step;

    let horas = Variable::antecedent(HORAS_TRABAJO, Universe::new(HOURS_RANGE.0, HOURS_RANGE.1, INPUT_STEP)?)
        .with_set("bajas", Mf::trapezoid(0.0, 0.0, 30.0, 45.0)?)?
        .with_set("normales", Mf::trapezoid(30.0, 40.0, 50.0, 60.0)?)?
        .with_set("altas", Mf::trapezoid(50.0, 65.0, 80.0, 80.0)?)?;

    let estres = Variable::consequent(NIVEL_ESTRES, Universe::new(PERCENT_RANGE.0, PERCENT_RANGE.1, step)?)
        .with_set("bajo", Mf::triangle(0.0, 0.0, 40.0)?)?
        .with_set("moderado", Mf::triangle(20.0, 50.0, 80.0)?)?
        .with_set("alto", Mf::triangle(60.0, 100.0, 100.0)?)?;

    let productividad = Variable::consequent(PRODUCTIVIDAD, Universe::new(PERCENT_RANGE.0, PERCENT_RANGE.1, step)?)
        .with_set("baja", Mf::triangle(0.0, 0.0, 50.0)?)?
        .with_set("optima", Mf::triangle(30.0, 60.0, 90.0)?)?
        .with_set("sobrecargada", Mf::triangle(70.0, 100.0, 100.0)?)?;

    let prioridad = Variable::consequent(PRIORIDAD_ACCION, Universe::new(PRIORITY_RANGE.0, PRIORITY_RANGE.1, step)?)
        .with_set("baja", Mf::triangle(1.0, 1.0, 5.0)?)?
        .with_set("media", Mf::triangle(3.0, 5.0, 7.0)?)?
        .with_set("alta", Mf::triangle(5.0, 10.0, 10.0)?)?;

    Ok(vec![
        horas,
        scale_variable(CALIDAD_SUENO, "mala", "regular", "buena")?,
        scale_variable(CARGA_MENTAL, "leve", "moderada", "intensa")?,
        scale_variable(SATISFACCION, "baja", "media", "alta")?,
        estres,
        productividad,
        prioridad,
    ])
}

/// The eleven rules of the canonical system, in declared order
pub fn rules() -> Vec<Rule> {
    vec![
        // Any single extreme factor raises stress
        Rule::new(
            t(SATISFACCION, "baja")
                .or(t(CALIDAD_SUENO, "mala"))
                .or(t(CARGA_MENTAL, "intensa"))
                .or(t(HORAS_TRABAJO, "altas")),
            then(NIVEL_ESTRES, "alto"),
        )
        .labeled("estres_alto"),
        Rule::new(
            t(HORAS_TRABAJO, "normales")
                .and(t(CARGA_MENTAL, "moderada"))
                .or(t(CALIDAD_SUENO, "regular").and(t(SATISFACCION, "media")))
                .or(t(HORAS_TRABAJO, "altas").and(t(SATISFACCION, "alta"))),
            then(NIVEL_ESTRES, "moderado"),
        )
        .labeled("estres_moderado"),
        Rule::new(
            t(HORAS_TRABAJO, "bajas")
                .and(t(CALIDAD_SUENO, "buena"))
                .and(t(CARGA_MENTAL, "leve"))
                .and(t(SATISFACCION, "alta")),
            then(NIVEL_ESTRES, "bajo"),
        )
        .labeled("estres_bajo"),
        Rule::new(
            t(NIVEL_ESTRES, "bajo").or(t(SATISFACCION, "alta")),
            then(PRODUCTIVIDAD, "optima"),
        )
        .labeled("productividad_optima"),
        Rule::new(
            t(NIVEL_ESTRES, "alto").or(t(CALIDAD_SUENO, "mala")),
            then(PRODUCTIVIDAD, "baja"),
        )
        .labeled("productividad_baja"),
        Rule::new(
            t(NIVEL_ESTRES, "moderado").and(t(HORAS_TRABAJO, "altas")),
            then(PRODUCTIVIDAD, "sobrecargada"),
        )
        .labeled("productividad_sobrecargada"),
        Rule::new(
            t(NIVEL_ESTRES, "alto").or(t(PRODUCTIVIDAD, "baja")),
            then(PRIORIDAD_ACCION, "alta"),
        )
        .labeled("prioridad_alta"),
        Rule::new(
            t(NIVEL_ESTRES, "moderado").or(t(SATISFACCION, "baja")),
            then(PRIORIDAD_ACCION, "media"),
        )
        .labeled("prioridad_media"),
        Rule::new(
            t(NIVEL_ESTRES, "bajo").and(t(PRODUCTIVIDAD, "optima")),
            then(PRIORIDAD_ACCION, "baja"),
        )
        .labeled("prioridad_baja"),
        // Safety nets so priority and stress always receive some activation
        Rule::new(
            t(CALIDAD_SUENO, "mala").or(t(SATISFACCION, "baja")),
            then(PRIORIDAD_ACCION, "media"),
        )
        .labeled("prioridad_media_respaldo"),
        Rule::new(t(HORAS_TRABAJO, "normales"), then(NIVEL_ESTRES, "moderado"))
            .labeled("estres_moderado_respaldo"),
    ]
}

/// Build the canonical system with the given output sampling
pub fn build_system(config: &InferenceConfig) -> Result<FuzzySystem, FuzzyError> {
    let mut builder = FuzzySystem::builder();
    for variable in variables(config)? {
        builder.define_variable(variable)?;
    }
    for rule in rules() {
        builder.add_rule(rule);
    }
    builder.build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn system_with(rules: Vec<Rule>) -> FuzzySystem {
        let mut builder = FuzzySystem::builder();
        for variable in variables(&InferenceConfig::default()).unwrap() {
            builder.define_variable(variable).unwrap();
        }
        for rule in rules {
            builder.add_rule(rule);
        }
        builder.build().unwrap()
    }

    proptest! {
        /// Property: the chained canonical rule base gives the same curves and
        /// outputs in any declared order
        #[test]
        fn test_canonical_rule_order_independence(
            permuted in Just(rules()).prop_shuffle(),
            horas in 0.0f64..=80.0,
            sueno in 1.0f64..=10.0,
            carga in 1.0f64..=10.0,
            satisf in 1.0f64..=10.0,
        ) {
            let reference = system_with(rules());
            let shuffled = system_with(permuted);
            let inputs = [
                (HORAS_TRABAJO, horas),
                (CALIDAD_SUENO, sueno),
                (CARGA_MENTAL, carga),
                (SATISFACCION, satisf),
            ];

            let a = reference.infer(&inputs).unwrap();
            let b = shuffled.infer(&inputs).unwrap();
            prop_assert_eq!(&a.curves, &b.curves);
            prop_assert_eq!(reference.evaluate(&inputs), shuffled.evaluate(&inputs));
        }
    }
}
