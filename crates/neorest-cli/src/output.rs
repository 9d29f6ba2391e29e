//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use neorest_domain::{Entity, Node, Relationship};
use neorest_sdk::ServiceRoot;
use serde_json::{json, Map, Value};
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

    /// Format a relationship.
    pub fn format_relationship(&self, rel: &Relationship) -> Result<String> {
        let id = rel.id()?.to_string();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&relationship_value(rel)?)?),
            OutputFormat::Table => Ok(self.field_table(&[
                ("ID", id.as_str()),
                ("Type", rel.rel_type()),
                ("Start", rel.start_uri()),
                ("End", rel.end_uri()),
            ])),
            OutputFormat::Quiet => Ok(id),
        }
    }

    /// Format a node.
    pub fn format_node(&self, node: &Node) -> Result<String> {
        let id = node.id()?.to_string();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&node_value(node)?)?),
            OutputFormat::Table => Ok(self.field_table(&[
                ("ID", id.as_str()),
                ("Self", node.self_uri()),
                ("Relationships", node.all_relationships_uri().unwrap_or("-")),
            ])),
            OutputFormat::Quiet => Ok(id),
        }
    }

    /// Format a relationship together with its endpoint nodes.
    ///
    /// JSON output is a single `{relationship, start, end}` document.
    pub fn format_resolved_relationship(&self, rel: &Relationship, start: &Node, end: &Node) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "relationship": relationship_value(rel)?,
                "start": node_value(start)?,
                "end": node_value(end)?,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => {
                let mut sections = vec![self.format_relationship(rel)?];
                if self.format == OutputFormat::Table {
                    sections.push(self.heading("Start node"));
                }
                sections.push(self.format_node(start)?);
                if self.format == OutputFormat::Table {
                    sections.push(self.heading("End node"));
                }
                sections.push(self.format_node(end)?);
                Ok(sections.join("\n"))
            }
        }
    }

    /// Format relationship type names.
    pub fn format_types(&self, types: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(types)?),
            OutputFormat::Quiet => Ok(types.join("\n")),
            OutputFormat::Table => {
                if types.is_empty() {
                    return Ok(self.colorize("No relationship types found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Relationship Type"]);
                for name in types {
                    builder.push_record([name.as_str()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a property map.
    pub fn format_properties(&self, properties: &Map<String, Value>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(properties)?),
            OutputFormat::Quiet => Ok(properties.keys().cloned().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if properties.is_empty() {
                    return Ok(self.colorize("No properties.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Value"]);
                for (key, value) in properties {
                    builder.push_record([key.clone(), value.to_string()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format the service root.
    pub fn format_service_root(&self, root: &ServiceRoot) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(root)?),
            OutputFormat::Quiet => Ok(root.neo4j_version.clone().unwrap_or_default()),
            OutputFormat::Table => {
                let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
                let rows = [
                    ("Version", opt(&root.neo4j_version)),
                    ("Node", opt(&root.node)),
                    ("Relationship types", opt(&root.relationship_types)),
                    ("Node index", opt(&root.node_index)),
                    ("Relationship index", opt(&root.relationship_index)),
                    ("Batch", opt(&root.batch)),
                    ("Cypher", opt(&root.cypher)),
                ];
                let borrowed: Vec<(&str, &str)> = rows.iter().map(|(k, v)| (*k, v.as_str())).collect();
                Ok(self.field_table(&borrowed))
            }
        }
    }

    /// Format a heading printed above a section.
    pub fn heading(&self, text: &str) -> String {
        if self.format == OutputFormat::Table {
            self.colorize(text, "cyan")
        } else {
            String::new()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Two-column Field/Value table.
    fn field_table(&self, rows: &[(&str, &str)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in rows {
            builder.push_record([*field, *value]);
        }
        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn relationship_value(rel: &Relationship) -> Result<Value> {
    Ok(json!({
        "id": rel.id()?.value(),
        "type": rel.rel_type(),
        "self": rel.self_uri(),
        "start": rel.start_uri(),
        "end": rel.end_uri(),
    }))
}

fn node_value(node: &Node) -> Result<Value> {
    Ok(json!({
        "id": node.id()?.value(),
        "self": node.self_uri(),
        "properties": node.properties_uri(),
        "all_relationships": node.all_relationships_uri(),
    }))
}
