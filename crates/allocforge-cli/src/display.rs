//! Rendering results for humans and machines

use std::io::Write;

use allocforge_core::{AllocForgeError, AllocationRequest, AllocationResult};
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::error::CliError;

/// One batch entry in JSON output.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchEntry<'a> {
    Ok { result: &'a AllocationResult },
    Error { message: String },
}

impl<'a> From<&'a Result<AllocationResult, AllocForgeError>> for BatchEntry<'a> {
    fn from(outcome: &'a Result<AllocationResult, AllocForgeError>) -> Self {
        match outcome {
            Ok(result) => BatchEntry::Ok { result },
            Err(e) => BatchEntry::Error {
                message: e.to_string(),
            },
        }
    }
}

pub struct OutputRenderer {
    json: bool,
    color: bool,
}

impl OutputRenderer {
    /// `color` enables ANSI styling of text output; JSON is never styled.
    pub fn new(json: bool, color: bool) -> Self {
        Self { json, color }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_result(
        &self,
        out: &mut impl Write,
        request: &AllocationRequest,
        result: &AllocationResult,
    ) -> Result<(), CliError> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
            return Ok(());
        }
        self.write_table(out, request, result)?;
        Ok(())
    }

    pub fn render_batch(
        &self,
        out: &mut impl Write,
        requests: &[AllocationRequest],
        outcomes: &[Result<AllocationResult, AllocForgeError>],
    ) -> Result<(), CliError> {
        if self.json {
            let entries: Vec<BatchEntry<'_>> = outcomes.iter().map(BatchEntry::from).collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
            return Ok(());
        }

        for (index, (request, outcome)) in requests.iter().zip(outcomes).enumerate() {
            let heading = format!("Request {}", index);
            writeln!(out, "{}", self.paint(&heading, Style::new().bold()))?;
            match outcome {
                Ok(result) => self.write_table(out, request, result)?,
                Err(e) => writeln!(
                    out,
                    "  {} {}",
                    self.paint("error:", Style::new().bright_red().bold()),
                    e
                )?,
            }
        }
        Ok(())
    }

    fn write_table(
        &self,
        out: &mut impl Write,
        request: &AllocationRequest,
        result: &AllocationResult,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "  {:>5}  {:>12}  {:>12}  {:>8}  {:>12}  {:>12}",
            "item", "weight", "value", "ratio", "taken", "gained"
        )?;
        for &index in &result.fill_order {
            let item = &request.items()[index];
            let a = &result.allocations[index];
            let line = format!(
                "  {:>5}  {:>12.4}  {:>12.4}  {:>8.4}  {:>12.4}  {:>12.4}",
                index,
                item.weight,
                item.value,
                item.ratio(),
                a.taken_weight,
                a.gained_value
            );
            let style = if a.is_untouched() {
                Style::new().bright_black()
            } else if a.is_partial() {
                Style::new().yellow()
            } else {
                Style::new()
            };
            writeln!(out, "{}", self.paint(&line, style))?;
        }
        let bold = Style::new().bold();
        writeln!(
            out,
            "  {} {}   {} {:.4} of {:.4}",
            self.paint("Maximum value:", bold),
            self.paint(
                &format!("{:.4}", result.total_value),
                Style::new().bright_green().bold()
            ),
            self.paint("capacity used:", bold),
            result.used_capacity(),
            result.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocforge_core::Item;
    use allocforge_solver::allocate;

    fn classic() -> (AllocationRequest, AllocationResult) {
        let request = AllocationRequest::new(
            50.0,
            vec![
                Item::new(10.0, 60.0),
                Item::new(20.0, 100.0),
                Item::new(30.0, 120.0),
            ],
        );
        let result = allocate(request.capacity, request.items()).unwrap();
        (request, result)
    }

    #[test]
    fn test_json_result() {
        let (request, result) = classic();
        let mut out = Vec::new();
        OutputRenderer::new(true, false)
            .render_result(&mut out, &request, &result)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let total = value["total_value"].as_f64().unwrap();
        assert!((total - 240.0).abs() < 1e-9);
        assert_eq!(value["allocations"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_text_result_mentions_total() {
        let (request, result) = classic();
        let mut out = Vec::new();
        OutputRenderer::new(false, false)
            .render_result(&mut out, &request, &result)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Maximum value:"));
        assert!(text.contains("240.0000"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_text_result_colored_on_terminal() {
        let (request, result) = classic();
        let mut out = Vec::new();
        OutputRenderer::new(false, true)
            .render_result(&mut out, &request, &result)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\x1b'));
        assert!(text.contains("240.0000"));
    }

    #[test]
    fn test_text_batch_plain_without_color() {
        let (request, result) = classic();
        let outcomes = vec![Ok(result), Err(AllocForgeError::Internal("boom".to_string()))];
        let mut out = Vec::new();
        OutputRenderer::new(false, false)
            .render_batch(&mut out, &[request.clone(), request], &outcomes)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Request 1"));
        assert!(text.contains("error: Internal error: boom"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_json_batch_tags_errors() {
        let (request, result) = classic();
        let outcomes = vec![
            Ok(result),
            Err(AllocForgeError::Internal("boom".to_string())),
        ];
        let mut out = Vec::new();
        OutputRenderer::new(true, false)
            .render_batch(&mut out, &[request.clone(), request], &outcomes)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["status"], "ok");
        assert_eq!(value[1]["status"], "error");
        assert_eq!(value[1]["message"], "Internal error: boom");
    }
}
