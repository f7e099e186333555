use crate::highlight::Operation;
use crate::model::{Frame, Status};
use itertools::Itertools;

/// Formats frame sequences into human-readable transcripts
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format every frame, one block per step.
    ///
    /// With an `operation`, each block also shows the pseudocode lines its
    /// action tag highlights.
    pub fn format_frames(frames: &[Frame], operation: Option<Operation>) -> String {
        let mut out = String::new();
        if let Some(op) = operation {
            out.push_str(&format!("== {} ({} frames) ==\n", op, frames.len()));
        }
        for frame in frames {
            out.push_str(&Self::format_frame(frame, operation));
        }
        out
    }

    /// One frame as a short block of text.
    pub fn format_frame(frame: &Frame, operation: Option<Operation>) -> String {
        let tag = frame
            .action_tag
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut block = format!("[{}] {}: {}\n", frame.step_number, tag, frame.description);

        if let (Some(op), Some(tag)) = (operation, frame.action_tag) {
            let listing = op.pseudocode();
            for line in op.code_lines(tag).unwrap_or_default() {
                if let Some(text) = listing.get(line - 1) {
                    block.push_str(&format!("    {:>2} | {}\n", line, text.trim_start()));
                }
            }
        }

        let highlighted = frame
            .elements
            .iter()
            .filter(|e| e.status != Status::Unfinished && e.status != Status::wall())
            .map(|e| format!("{}={}", e.id, e.status))
            .join(" ");
        if !highlighted.is_empty() {
            block.push_str(&format!("    status: {}\n", highlighted));
        }

        if !frame.variables.is_empty() {
            let vars = frame
                .variables
                .iter()
                .map(|(name, value)| format!("{} = {}", name, value))
                .join(", ");
            block.push_str(&format!("    vars: {}\n", vars));
        }
        block
    }
}
