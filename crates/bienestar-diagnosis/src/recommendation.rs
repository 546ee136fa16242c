//! Threshold-based recommendations

use crate::config::RecommendationThresholds;
use serde::Serialize;

/// Catalogue of advisory items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecommendationKind {
    /// Critical stress: seek professional help
    Critical,
    /// Critical stress: take rest days
    Health,
    /// Critical stress: review workload
    Workload,
    /// Moderate stress: relaxation techniques
    Alert,
    /// Moderate stress: sleep hygiene
    Sleep,
    /// Moderate stress: working-hour limits
    Limits,
    /// Healthy stress level
    Optimal,
    /// Low productivity: redistribute tasks
    Productivity,
    /// Low productivity: focus technique
    Focus,
    /// Low productivity: remove distractions
    Distractions,
    /// Very high productivity: burnout risk
    Overload,
    /// High priority: act now
    Priority,
}

/// Visual weight of a recommendation, used by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Needs immediate attention
    Critical,
    /// Needs attention soon
    Warning,
    /// Positive reinforcement
    Success,
    /// Neutral advice
    Info,
}

impl RecommendationKind {
    /// Display label, emoji included
    pub fn tipo(&self) -> &'static str {
        match self {
            RecommendationKind::Critical => "🚨 CRÍTICO",
            RecommendationKind::Health => "🩺 SALUD",
            RecommendationKind::Workload => "⚖️ CARGA",
            RecommendationKind::Alert => "⚠️ ALERTA",
            RecommendationKind::Sleep => "😴 SUEÑO",
            RecommendationKind::Limits => "⏰ LÍMITES",
            RecommendationKind::Optimal => "✅ ÓPTIMO",
            RecommendationKind::Productivity => "📉 PRODUCTIVIDAD",
            RecommendationKind::Focus => "🎯 ENFOQUE",
            RecommendationKind::Distractions => "🚫 DISTRACCIONES",
            RecommendationKind::Overload => "🔥 SOBRECARGA",
            RecommendationKind::Priority => "🎯 PRIORIDAD",
        }
    }

    /// Finding
    pub fn mensaje(&self) -> &'static str {
        match self {
            RecommendationKind::Critical => "Nivel de estrés crítico detectado",
            RecommendationKind::Health => "Considerar días de descanso urgentes",
            RecommendationKind::Workload => "Revisión urgente de carga laboral",
            RecommendationKind::Alert => "Estrés moderado - atención requerida",
            RecommendationKind::Sleep => "Mejorar higiene de sueño",
            RecommendationKind::Limits => "Establecer límites laborales claros",
            RecommendationKind::Optimal => "Nivel de estrés saludable",
            RecommendationKind::Productivity => "Productividad por debajo del óptimo",
            RecommendationKind::Focus => "Implementar técnicas de concentración",
            RecommendationKind::Distractions => "Identificar y eliminar distracciones",
            RecommendationKind::Overload => "Productividad muy alta - riesgo de burnout",
            RecommendationKind::Priority => "ACCIÓN INMEDIATA REQUERIDA",
        }
    }

    /// Suggested action
    pub fn accion(&self) -> &'static str {
        match self {
            RecommendationKind::Critical => "Consulta inmediata con profesional",
            RecommendationKind::Health => "Coordinar con RRHH",
            RecommendationKind::Workload => "Hablar con supervisor",
            RecommendationKind::Alert => "Implementar técnicas de relajación",
            RecommendationKind::Sleep => "Establecer rutina nocturna",
            RecommendationKind::Limits => "Definir horarios de desconexión",
            RecommendationKind::Optimal => "Mantener buenos hábitos actuales",
            RecommendationKind::Productivity => "Revisar distribución de tareas",
            RecommendationKind::Focus => "Usar método Pomodoro",
            RecommendationKind::Distractions => "Bloquear notificaciones innecesarias",
            RecommendationKind::Overload => "Evaluar sostenibilidad del ritmo",
            RecommendationKind::Priority => "Implementar recomendaciones urgentemente",
        }
    }

    /// Badge colour class
    pub fn severity(&self) -> Severity {
        match self {
            RecommendationKind::Critical | RecommendationKind::Alert => Severity::Critical,
            RecommendationKind::Priority => Severity::Warning,
            RecommendationKind::Optimal | RecommendationKind::Health => Severity::Success,
            _ => Severity::Info,
        }
    }
}

/// One advisory item as exposed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Catalogue entry
    #[serde(skip)]
    pub kind: RecommendationKind,
    /// Display label
    pub tipo: &'static str,
    /// Finding
    pub mensaje: &'static str,
    /// Suggested action
    pub accion: &'static str,
}

impl From<RecommendationKind> for Recommendation {
    fn from(kind: RecommendationKind) -> Self {
        Self {
            kind,
            tipo: kind.tipo(),
            mensaje: kind.mensaje(),
            accion: kind.accion(),
        }
    }
}

impl Recommendation {
    /// Badge colour class
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

/// Map the three crisp scores to an ordered list of recommendations
///
/// Each band is evaluated independently. Output order is always the stress
/// block, then the productivity block, then the priority item.
pub fn generate(
    estres: f64,
    productividad: f64,
    prioridad: f64,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    use RecommendationKind::*;

    let mut kinds = Vec::with_capacity(7);

    if estres > thresholds.stress_critical {
        kinds.extend([Critical, Health, Workload]);
    } else if estres > thresholds.stress_moderate {
        kinds.extend([Alert, Sleep, Limits]);
    } else {
        kinds.push(Optimal);
    }

    if productividad < thresholds.productivity_low {
        kinds.extend([Productivity, Focus, Distractions]);
    } else if productividad > thresholds.productivity_high {
        kinds.push(Overload);
    }

    if prioridad > thresholds.priority_urgent {
        kinds.push(Priority);
    }

    kinds.into_iter().map(Recommendation::from).collect()
}
