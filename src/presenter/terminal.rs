// Plain-text rendering for the command line
use crate::presenter::{Card, NO_RESULTS, Presentation};

const COLUMN_WIDTH: usize = 38;
const SEPARATOR: &str = " | ";

pub fn render(presentation: &Presentation) -> String {
    let rows = match presentation {
        Presentation::NoResults => return format!("{NO_RESULTS}\n"),
        Presentation::Rows { rows, .. } => rows,
    };

    let mut out = String::new();
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    if let Some(note) = presentation.truncation_note() {
        out.push_str(&note);
        out.push('\n');
    }
    out
}

/// Cards of one row side by side, each clipped to a fixed column width.
fn render_row(cards: &[Card]) -> String {
    let columns: Vec<Vec<String>> = cards.iter().map(card_lines).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut out = String::new();
    for line in 0..height {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| pad(col.get(line).map(String::as_str).unwrap_or("")))
            .collect();
        out.push_str(cells.join(SEPARATOR).trim_end());
        out.push('\n');
    }
    out
}

fn card_lines(card: &Card) -> Vec<String> {
    let mut lines = card.lines();
    if let Some(image) = &card.image {
        lines.push(format!("Image: {}", image.display()));
    }
    lines
}

fn pad(text: &str) -> String {
    let clipped: String = if text.chars().count() > COLUMN_WIDTH {
        let mut s: String = text.chars().take(COLUMN_WIDTH - 1).collect();
        s.push('…');
        s
    } else {
        text.to_string()
    };
    format!("{:<width$}", clipped, width = COLUMN_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn card(id: &str, image: Option<&str>) -> Card {
        Card {
            id: id.into(),
            name: format!("Product {id}"),
            base_colour: "Blue".into(),
            price: "N/A".into(),
            image: image.map(PathBuf::from),
        }
    }

    #[test]
    fn no_results_is_spelled_out() {
        assert_eq!(render(&Presentation::NoResults), "No products found.\n");
    }

    #[test]
    fn row_cards_share_lines() {
        let text = render(&Presentation::Rows {
            rows: vec![vec![card("1", None), card("2", None)]],
            total: 2,
        });
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Product ID: 1"));
        assert!(first.contains(" | Product ID: 2"));
        assert!(text.contains("Price: N/A"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn image_path_is_listed_when_known() {
        let text = render(&Presentation::Rows {
            rows: vec![vec![card("4", Some("images/4.jpg"))]],
            total: 1,
        });
        assert!(text.contains("Image: images/4.jpg"));
    }

    #[test]
    fn truncated_results_end_with_a_count() {
        let text = render(&Presentation::Rows {
            rows: vec![vec![card("1", None)]],
            total: 40,
        });
        assert_eq!(text.lines().last(), Some("Showing 1 of 40 products."));
    }

    #[test]
    fn long_values_are_clipped() {
        let long = "x".repeat(100);
        let padded = pad(&long);
        assert_eq!(padded.chars().count(), COLUMN_WIDTH);
        assert!(padded.ends_with('…'));
    }
}
