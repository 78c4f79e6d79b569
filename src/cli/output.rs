use std::fmt::{self, Write as _};

use colored::{ColoredString, Colorize};
use rust_decimal::Decimal;

use finsight_domain::{RiskLevel, ScenarioDefinition, ScenarioParameters, ScenarioResult};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain: bool,
}

/// Disables ANSI styling when plain output is requested or `NO_COLOR` is set.
pub fn apply_preferences(prefs: OutputPreferences) {
    if prefs.plain || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[ok]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("", ""),
    }
}

pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let (label, icon) = build_label(kind);
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{label}: {icon} {text}"),
    };
    match kind {
        MessageKind::Info => base,
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().bold().to_string(),
        MessageKind::Section => base.bold().to_string(),
    }
}

pub fn risk_badge(level: RiskLevel) -> ColoredString {
    let label = level.as_str().to_uppercase();
    match level {
        RiskLevel::Low => label.green().bold(),
        RiskLevel::Medium => label.yellow().bold(),
        RiskLevel::High => label.red().bold(),
    }
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn signed_money(value: Decimal) -> ColoredString {
    let text = money(value);
    if value < Decimal::ZERO {
        text.red()
    } else {
        text.normal()
    }
}

pub fn describe_parameters(params: &ScenarioParameters) -> String {
    format!(
        "gelir x{} | gider x{} | sabit gider x{} | kredi x{} | {} ay",
        params.income_multiplier.normalize(),
        params.expense_multiplier.normalize(),
        params.fixed_expense_multiplier.normalize(),
        params.credit_payment_multiplier.normalize(),
        params.months_to_project
    )
}

pub fn render_catalog(scenarios: &[ScenarioDefinition]) -> String {
    let mut out = format_message(MessageKind::Section, "Hazır Senaryolar");
    out.push('\n');
    for scenario in scenarios {
        let _ = writeln!(out, "{:<24} {}", scenario.key.bold(), scenario.name);
        let _ = writeln!(out, "{:<24} {}", "", scenario.description);
        let _ = writeln!(out, "{:<24} {}", "", describe_parameters(&scenario.parameters));
    }
    out.push_str(&format_message(
        MessageKind::Info,
        "run one with `finsight analyze --scenario <key>`",
    ));
    out
}

pub fn render_result(result: &ScenarioResult) -> String {
    let mut out = format_message(MessageKind::Section, &result.scenario);
    out.push('\n');
    let _ = writeln!(out, "{}", describe_parameters(&result.parameters));
    let _ = writeln!(
        out,
        "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>16}",
        "ay", "gelir", "gider", "sabit gider", "kredi", "net akış", "kümülatif"
    );
    for month in &result.monthly_projections {
        let _ = writeln!(
            out,
            "{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>16}",
            month.month,
            money(month.income),
            money(month.expenses),
            money(month.fixed_expenses),
            money(month.credit_payments),
            signed_money(month.net_cash_flow),
            signed_money(month.cumulative_balance),
        );
    }
    let forecast = &result.forecast.input;
    let _ = writeln!(
        out,
        "Tahmini bakiye: {} {} (%{} güven: {} .. {})",
        signed_money(result.projected_balance),
        forecast.currency,
        forecast.confidence_interval,
        money(forecast.lower_bound),
        money(forecast.upper_bound),
    );
    let assessment = &result.risk_assessment;
    let _ = writeln!(out, "Risk seviyesi: {}", risk_badge(assessment.risk_level));
    if !assessment.risk_factors.is_empty() {
        let _ = writeln!(out, "Risk faktörleri:");
        for factor in &assessment.risk_factors {
            let _ = writeln!(out, "  - {factor}");
        }
    }
    let _ = writeln!(out, "Öneriler:");
    for recommendation in &assessment.recommendations {
        let _ = writeln!(out, "  - {recommendation}");
    }
    out
}

pub fn render_batch(results: &[ScenarioResult]) -> String {
    let mut out = format_message(MessageKind::Section, "Senaryo Karşılaştırması");
    out.push('\n');
    for result in results {
        let _ = writeln!(
            out,
            "{:<28} {:>16} {}",
            result.scenario,
            signed_money(result.projected_balance),
            risk_badge(result.risk_assessment.risk_level)
        );
    }
    out
}
