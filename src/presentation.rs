// src/presentation.rs
use crate::config::Config;
use crate::options::OutputFormat;
use email_domains_infra::FileWriter;
use email_domains_shared_kernel::{InfrastructureError, Result};
use email_domains_usecase::DomainReport;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Renders `report` and writes it to the configured destination.
pub fn emit(report: &DomainReport, config: &Config) -> Result<()> {
    let rendered = render(report, config.format, config.summary)?;
    match &config.output {
        Some(path) => FileWriter::atomic_write(path, rendered.as_bytes())?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| InfrastructureError::Output {
                    message: "failed to write to stdout".to_string(),
                    source: Some(source),
                })?;
        }
    }
    Ok(())
}

pub fn render(report: &DomainReport, format: OutputFormat, summary: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, summary)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_text(report: &DomainReport, summary: bool) -> String {
    let mut out = String::from("Listing entries:\n");
    for e in &report.entries {
        let _ = writeln!(out, "  - {}: {}", e.domain, e.count);
    }

    if summary {
        out.push('\n');
        out.push_str("Summary:\n");
        let _ = writeln!(out, "  rows read:   {:>9}", report.rows_read);
        let _ = writeln!(out, "  header rows: {:>9}", report.header_rows);
        let _ = writeln!(out, "  customers:   {:>9}", report.customers);
        let _ = writeln!(out, "  domains:     {:>9}", report.distinct_domains());
    }
    out
}

fn render_csv(report: &DomainReport) -> Result<String> {
    let csv_error = |details: String| InfrastructureError::Serialization { format: "CSV".to_string(), details };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["domain", "count"]).map_err(|e| csv_error(e.to_string()))?;
    for entry in &report.entries {
        writer
            .write_record([entry.domain.as_str(), entry.count.to_string().as_str()])
            .map_err(|e| csv_error(e.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| csv_error(e.to_string()))?;
    Ok(String::from_utf8(bytes).map_err(|e| csv_error(e.to_string()))?)
}
