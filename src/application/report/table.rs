use super::paint::{Paint, paint};
use crate::domain::entities::{Hop, Trace};

pub(crate) const FINAL_MARKER: &str = "(final)";

const HEADERS: [&str; 4] = ["Step", "Status", "From URL", "To URL"];
const GAP: &str = "  ";

/// Plain-text cells for one hop, measured before anything is styled
struct Row<'a> {
    step: String,
    status: String,
    code: u16,
    from: &'a str,
    to: Option<&'a str>,
}

impl<'a> Row<'a> {
    fn new(index: usize, hop: &'a Hop) -> Self {
        Self {
            step: (index + 1).to_string(),
            status: format!("[{}]", hop.status),
            code: hop.status,
            from: &hop.from,
            to: hop.to.as_deref(),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [
            self.step.as_str(),
            self.status.as_str(),
            self.from,
            self.to.unwrap_or(FINAL_MARKER),
        ]
    }
}

fn rows(trace: &Trace) -> Vec<Row<'_>> {
    trace
        .iter()
        .enumerate()
        .map(|(index, hop)| Row::new(index, hop))
        .collect()
}

/// Width of each column: its label or its longest cell, whichever is longer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths(pub [usize; 4]);

impl ColumnWidths {
    fn measure(rows: &[Row<'_>]) -> Self {
        let mut widths = HEADERS.map(|label| label.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        Self(widths)
    }

    pub fn for_trace(trace: &Trace) -> Self {
        Self::measure(&rows(trace))
    }

    /// Widths of all columns plus the gaps between them
    pub fn total(&self) -> usize {
        self.0.iter().sum::<usize>() + GAP.len() * (self.0.len() - 1)
    }
}

/// Pads to `width` first so escape codes never count toward alignment. The
/// last column is left unpadded.
fn cell(text: &str, width: usize, last: bool, style: Paint, colorize: bool) -> String {
    if last {
        paint(text, style, colorize)
    } else {
        paint(&format!("{text:<width$}"), style, colorize)
    }
}

pub(super) fn render(lines: &mut Vec<String>, trace: &Trace, colorize: bool) {
    let rows = rows(trace);
    let widths = ColumnWidths::measure(&rows);
    let [step_w, status_w, from_w, to_w] = widths.0;

    lines.push(String::new());
    lines.push(
        [
            cell(HEADERS[0], step_w, false, Paint::Bold, colorize),
            cell(HEADERS[1], status_w, false, Paint::Bold, colorize),
            cell(HEADERS[2], from_w, false, Paint::Bold, colorize),
            cell(HEADERS[3], to_w, true, Paint::Bold, colorize),
        ]
        .join(GAP),
    );
    lines.push(paint(&"-".repeat(widths.total()), Paint::White, colorize));

    for row in &rows {
        let to = match row.to {
            Some(to) => cell(to, to_w, true, Paint::Magenta, colorize),
            None => cell(FINAL_MARKER, to_w, true, Paint::Green, colorize),
        };
        lines.push(
            [
                cell(&row.step, step_w, false, Paint::Yellow, colorize),
                cell(&row.status, status_w, false, Paint::for_status(row.code), colorize),
                cell(row.from, from_w, false, Paint::Blue, colorize),
                to,
            ]
            .join(GAP),
        );
    }
}
