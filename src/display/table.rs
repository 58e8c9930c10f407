use crate::api::models::LeadSearchRecord;
use crate::utils::text::truncate_text_unicode;
use comfy_table::{Attribute, Cell, Color, Table, presets};
use crossterm::terminal;

const VALUE_COLUMN_MAX_WIDTH: usize = 60;

/// Formatter for the payload summary shown on dry runs
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: crate::display::colors_enabled(),
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => {
                let width = cols as usize;
                // Clamp for stability on very narrow or very wide terminals
                Some(width.clamp(40, 200))
            }
            Err(_) => Some(80), // Default width
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render the record as a Field/Value table. Filter rows appear only
    /// when the record carries them.
    pub fn render_payload_summary(&self, record: &LeadSearchRecord) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width as u16);
        }

        if self.use_colors {
            table.set_header(vec![
                Cell::new("Field")
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan),
                Cell::new("Value")
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["Field", "Value"]);
        }

        let mut rows: Vec<(&str, String)> = vec![
            ("Business types", record.business_types.join(", ")),
            ("Location", record.location.clone()),
            (
                "Include filters",
                (if record.include_filters { "yes" } else { "no" }).to_string(),
            ),
            ("Start", record.start.to_string()),
        ];
        if let Some(min_reviews) = record.min_reviews {
            rows.push(("Min reviews", min_reviews.to_string()));
        }
        if let Some(min_ratings) = record.min_ratings {
            rows.push(("Min ratings", min_ratings.to_string()));
        }

        for (field, value) in rows {
            table.add_row(vec![
                Cell::new(field),
                Cell::new(truncate_text_unicode(&value, VALUE_COLUMN_MAX_WIDTH)),
            ]);
        }

        table.to_string()
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}
