// Rust guideline compliant 2026-10-12

//! Output formatting module for the Shipyard CLI.
//!
//! This module provides functionality for formatting ships and command
//! results in various output formats (JSON, table, plain text).

use serde_json::json;
use shipyard_app::{AppError, ErrorCode, ErrorEnvelope, SuccessEnvelope};
use shipyard_core::{OutputFormat, Ship};
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Shipyard data in different output formats.
pub trait OutputFormatter {
    /// Formats a single ship for display.
    fn format_ship(&self, ship: &Ship) -> String;

    /// Formats a page of ships for display.
    fn format_list(&self, ships: &[Ship]) -> String;

    /// Formats the number of ships matching a query.
    fn format_count(&self, count: usize) -> String;

    /// Formats a ship that was just created, updated or deleted.
    ///
    /// # Arguments
    /// * `action` - Past-tense action name, e.g. `"created"`
    /// * `ship` - The ship as stored after the action
    fn format_change(&self, action: &'static str, ship: &Ship) -> String;

    /// Formats a status message for commands without a ship result.
    fn format_message(&self, action: &'static str, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Builds an error envelope for any error reaching the CLI boundary.
pub fn error_envelope(error: &anyhow::Error) -> ErrorEnvelope {
    if let Some(app_error) = error.downcast_ref::<AppError>() {
        return ErrorEnvelope::from_error(app_error);
    }

    let code = if error.downcast_ref::<std::io::Error>().is_some() {
        ErrorCode::IoError
    } else {
        ErrorCode::InvalidArgument
    };
    ErrorEnvelope {
        code,
        message: format!("{error:#}"),
        details: None,
    }
}

/// JSON output formatter.
///
/// Formats ships as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: serde::Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ship(&self, ship: &Ship) -> String {
        Self::render(ship)
    }

    fn format_list(&self, ships: &[Ship]) -> String {
        Self::render(&json!({
            "ships": ships,
            "total": ships.len(),
        }))
    }

    fn format_count(&self, count: usize) -> String {
        Self::render(&json!({ "count": count }))
    }

    fn format_change(&self, action: &'static str, ship: &Ship) -> String {
        Self::render(&SuccessEnvelope::new(action, ship))
    }

    fn format_message(&self, action: &'static str, message: &str) -> String {
        Self::render(&SuccessEnvelope::new(action, message))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        Self::render(&error_envelope(error))
    }
}

/// Table output formatter.
///
/// Formats ships as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_ship(&self, ship: &Ship) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:        {}\n", ship.id()));
        output.push_str(&format!("Name:      {}\n", ship.name));
        output.push_str(&format!("Planet:    {}\n", ship.planet));
        output.push_str(&format!("Type:      {}\n", ship.ship_type));
        output.push_str(&format!("Produced:  {}\n", ship.prod_date.format("%Y-%m-%d")));
        output.push_str(&format!("Speed:     {}\n", ship.speed));
        output.push_str(&format!("Crew:      {}\n", ship.crew_size));
        output.push_str(&format!("Used:      {}\n", if ship.is_used { "yes" } else { "no" }));
        output.push_str(&format!("Rating:    {}\n", ship.rating()));

        output
    }

    fn format_list(&self, ships: &[Ship]) -> String {
        if ships.is_empty() {
            return "No ships found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec![
            "ID", "Name", "Planet", "Type", "Year", "Speed", "Crew", "Used", "Rating",
        ]);

        for ship in ships {
            builder.push_record(vec![
                ship.id().to_string(),
                ship.name.clone(),
                ship.planet.clone(),
                ship.ship_type.to_string(),
                ship.prod_year().to_string(),
                ship.speed.to_string(),
                ship.crew_size.to_string(),
                if ship.is_used { "yes" } else { "no" }.to_string(),
                ship.rating().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_count(&self, count: usize) -> String {
        format!("{} ship(s) match", count)
    }

    fn format_change(&self, action: &'static str, ship: &Ship) -> String {
        format!("✓ Ship {} {}\n{}", ship.id(), action, self.format_ship(ship))
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        format!("✓ {}", message)
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Plain text output formatter.
///
/// Formats ships as simple plain text without tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_ship(&self, ship: &Ship) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
            ship.id(),
            ship.name,
            ship.planet,
            ship.ship_type,
            ship.prod_date.format("%Y-%m-%d"),
            ship.speed,
            ship.crew_size,
            ship.is_used,
            ship.rating()
        )
    }

    fn format_list(&self, ships: &[Ship]) -> String {
        if ships.is_empty() {
            return "No ships found.".to_string();
        }

        let mut output = String::new();
        for ship in ships {
            output.push_str(&format!(
                "{} {} {} {} {}\n",
                ship.id(),
                ship.ship_type,
                ship.prod_year(),
                ship.rating(),
                ship.name
            ));
        }
        output
    }

    fn format_count(&self, count: usize) -> String {
        count.to_string()
    }

    fn format_change(&self, _action: &'static str, ship: &Ship) -> String {
        ship.id().to_string()
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {:#}", error)
    }
}

/// Factory function to create an appropriate formatter.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
