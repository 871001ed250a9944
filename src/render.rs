//! Text and JSON rendering of the idea list.
//!
//! Kano and MoSCoW tags each map to a fixed [`Style`]; the mapping lives here
//! rather than on the models.

use serde::Serialize;

use crate::models::{Draft, Kano, Moscow, RiceField};
use crate::scoring::rice_score;
use crate::session::Row;
use crate::validation::ValidationError;

const RESET: &str = "\x1b[0m";

/// Presentation descriptor for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Color name, for non-terminal consumers.
    pub color: &'static str,
    /// ANSI SGR sequence for terminals.
    pub ansi: &'static str,
}

const GRAY: Style = Style {
    color: "gray",
    ansi: "\x1b[37m",
};
const DARK_GRAY: Style = Style {
    color: "dark-gray",
    ansi: "\x1b[90m",
};
const BLUE: Style = Style {
    color: "blue",
    ansi: "\x1b[34m",
};
const GREEN: Style = Style {
    color: "green",
    ansi: "\x1b[32m",
};
const RED: Style = Style {
    color: "red",
    ansi: "\x1b[31m",
};
const ORANGE: Style = Style {
    color: "orange",
    ansi: "\x1b[38;5;208m",
};
const YELLOW: Style = Style {
    color: "yellow",
    ansi: "\x1b[33m",
};

pub fn kano_style(kano: Kano) -> Style {
    match kano {
        Kano::Basic => GRAY,
        Kano::Performance => BLUE,
        Kano::Excitement => GREEN,
    }
}

pub fn moscow_style(moscow: Moscow) -> Style {
    match moscow {
        Moscow::Must => RED,
        Moscow::Should => ORANGE,
        Moscow::Could => YELLOW,
        Moscow::Wont => DARK_GRAY,
    }
}

/// Renders rows as plain or ANSI-colored text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style.ansi, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Render the idea list.
    ///
    /// Example output:
    /// ```text
    /// #0 REST API integration
    ///   RICE Score: 16000.00
    ///   Kano: performance  MoSCoW: must
    /// ```
    pub fn rows(&self, rows: &[Row]) -> String {
        if rows.is_empty() {
            return "No ideas yet.\n".to_string();
        }
        let mut output = String::new();
        for row in rows {
            output.push_str(&format!("#{} {}\n", row.position, row.name));
            output.push_str(&format!("  RICE Score: {}\n", row.score));
            output.push_str(&format!(
                "  {}  {}\n",
                self.paint(kano_style(row.kano), &format!("Kano: {}", row.kano)),
                self.paint(moscow_style(row.moscow), &format!("MoSCoW: {}", row.moscow)),
            ));
        }
        output
    }

    /// Render the draft under edit, with unset inputs left blank and any
    /// pending error beside the name.
    pub fn draft(&self, draft: &Draft, error: Option<ValidationError>) -> String {
        let mut output = format!("name:       {}", draft.name);
        if let Some(e) = error {
            output.push_str(&format!("  ({})", self.paint(RED, &e.to_string())));
        }
        output.push('\n');
        for field in RiceField::ALL {
            let value = draft
                .rice
                .get(field)
                .map(|v| v.to_string())
                .unwrap_or_default();
            output.push_str(&format!("{:<11} {}\n", format!("{}:", field), value));
        }
        output.push_str(&format!("kano:       {}\n", draft.kano));
        output.push_str(&format!("moscow:     {}\n", draft.moscow));
        output.push_str(&format!("score:      {}\n", rice_score(&draft.rice)));
        output
    }
}

/// A row plus the color names of its tags.
#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(flatten)]
    row: &'a Row,
    kano_color: &'static str,
    moscow_color: &'static str,
}

/// Render rows as a pretty-printed JSON array.
pub fn rows_json(rows: &[Row]) -> serde_json::Result<String> {
    let rows: Vec<JsonRow<'_>> = rows
        .iter()
        .map(|row| JsonRow {
            row,
            kano_color: kano_style(row.kano).color,
            moscow_color: moscow_style(row.moscow).color,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rice;
    use crate::scoring::RiceScore;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn make_row(position: usize, name: &str, rice: Rice, kano: Kano, moscow: Moscow) -> Row {
        Row {
            position,
            id: Uuid::new_v4(),
            name: name.to_string(),
            score: rice_score(&rice),
            kano,
            moscow,
            rice,
            added_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(Renderer::new(false).rows(&[]), "No ideas yet.\n");
    }

    #[test]
    fn test_plain_rows() {
        let rows = vec![
            make_row(
                0,
                "A",
                Rice::new(10.0, 1.0, 100.0, 7.0),
                Kano::Basic,
                Moscow::Must,
            ),
            make_row(1, "B", Rice::default(), Kano::Excitement, Moscow::Wont),
        ];
        let output = Renderer::new(false).rows(&rows);
        let expected = "#0 A\n  RICE Score: 1000.00\n  Kano: basic  MoSCoW: must\n\
                        #1 B\n  RICE Score: incomplete\n  Kano: excitement  MoSCoW: won't\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_colored_rows_wrap_tags() {
        let rows = vec![make_row(
            0,
            "A",
            Rice::new(1.0, 1.0, 1.0, 7.0),
            Kano::Performance,
            Moscow::Should,
        )];
        let output = Renderer::new(true).rows(&rows);
        assert!(output.contains("\x1b[34mKano: performance\x1b[0m"));
        assert!(output.contains("\x1b[38;5;208mMoSCoW: should\x1b[0m"));
    }

    #[test]
    fn test_every_tag_has_a_style() {
        let kano: Vec<_> = Kano::ALL.iter().map(|k| kano_style(*k).color).collect();
        assert_eq!(kano, ["gray", "blue", "green"]);
        let moscow: Vec<_> = Moscow::ALL.iter().map(|m| moscow_style(*m).color).collect();
        assert_eq!(moscow, ["red", "orange", "yellow", "dark-gray"]);
    }

    #[test]
    fn test_draft_leaves_unset_blank() {
        let mut draft = Draft::default();
        draft.name = "Idea".to_string();
        draft.rice.reach = Some(100.0);
        let output = Renderer::new(false).draft(&draft, None);
        assert!(output.starts_with("name:       Idea\n"));
        assert!(output.contains("reach:      100\n"));
        assert!(output.contains("impact:     \n"));
        assert!(output.contains("score:      incomplete\n"));
    }

    #[test]
    fn test_draft_shows_error_beside_name() {
        let output =
            Renderer::new(false).draft(&Draft::default(), Some(ValidationError::EmptyName));
        assert!(output.starts_with("name:         (idea name must be filled in)\n"));
    }

    #[test]
    fn test_json_uses_null_for_incomplete() {
        let rows = vec![make_row(0, "B", Rice::default(), Kano::Basic, Moscow::Could)];
        let json: serde_json::Value = serde_json::from_str(&rows_json(&rows).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "B");
        assert!(json[0]["score"].is_null());
        assert_eq!(json[0]["kano"], "basic");
        assert_eq!(json[0]["moscow"], "could");
        assert!(matches!(rows[0].score, RiceScore::Incomplete));
    }

    #[test]
    fn test_json_carries_tag_colors_and_timestamp() {
        let rows = vec![make_row(
            0,
            "A",
            Rice::new(10.0, 1.0, 50.0, 0.0),
            Kano::Excitement,
            Moscow::Should,
        )];
        let json: serde_json::Value = serde_json::from_str(&rows_json(&rows).unwrap()).unwrap();
        assert_eq!(json[0]["kano_color"], "green");
        assert_eq!(json[0]["moscow_color"], "orange");
        assert_eq!(json[0]["added_at"], "2026-03-01T09:30:00Z");
        assert_eq!(json[0]["score"], "inf");
    }
}
