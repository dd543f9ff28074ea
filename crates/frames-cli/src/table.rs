//! Two-column rendering of frame descriptions

use std::fmt;

use frames::{describe, Frame, FrameNetwork, Row, Section};

fn heading(section: Section) -> &'static str {
    match section {
        Section::Identity => "Frame",
        Section::Inherited => "Inherited",
        Section::Own => "Declared",
    }
}

/// Aligned table of description rows, one block per section.
struct Table<'a> {
    rows: &'a [Row],
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
        let mut current: Option<Section> = None;

        for row in self.rows {
            if current != Some(row.section) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "[{}]", heading(row.section))?;
                current = Some(row.section);
            }
            writeln!(f, "  {:<width$}  {}", row.label, row.value, width = width)?;
        }

        Ok(())
    }
}

/// Render `describe` rows as an aligned table.
pub fn render(network: &FrameNetwork, frame: &Frame) -> String {
    format_rows(&describe(network, frame))
}

pub(crate) fn format_rows(rows: &[Row]) -> String {
    Table { rows }.to_string()
}
