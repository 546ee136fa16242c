//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use bienestar_diagnosis::{AlertLevel, DiagnosisResult, Severity};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a diagnosis.
    pub fn format_diagnosis(&self, result: &DiagnosisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_diagnosis_table(result)),
        }
    }

    fn format_diagnosis_table(&self, result: &DiagnosisResult) -> String {
        let mut sections = Vec::new();

        if let Some(advertencia) = &result.advertencia {
            sections.push(self.warning(advertencia));
        }

        let mut scores = Builder::default();
        scores.push_record(["Indicador", "Valor", "Alerta"]);
        scores.push_record([
            "Nivel de estrés".to_string(),
            format!("{:.1}", result.nivel_estres),
            self.alert(result.stress_alert()),
        ]);
        scores.push_record([
            "Productividad".to_string(),
            format!("{:.1}", result.productividad),
            self.alert(result.productivity_alert()),
        ]);
        scores.push_record([
            "Prioridad de acción".to_string(),
            format!("{:.1}", result.prioridad_accion),
            self.alert(result.priority_alert()),
        ]);
        sections.push(styled(scores));

        let mut items = Builder::default();
        items.push_record(["Tipo", "Mensaje", "Acción"]);
        for item in &result.recomendaciones {
            items.push_record([
                self.severity(item.tipo, item.severity()),
                item.mensaje.to_string(),
                item.accion.to_string(),
            ]);
        }
        sections.push(styled(items));

        sections.join("\n")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn alert(&self, level: AlertLevel) -> String {
        let color = match level {
            AlertLevel::High => "red",
            AlertLevel::Medium => "yellow",
            AlertLevel::Low => "green",
        };
        self.colorize(level.as_str(), color)
    }

    fn severity(&self, text: &str, severity: Severity) -> String {
        let color = match severity {
            Severity::Critical => "red",
            Severity::Warning => "yellow",
            Severity::Success => "green",
            Severity::Info => "cyan",
        };
        self.colorize(text, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
