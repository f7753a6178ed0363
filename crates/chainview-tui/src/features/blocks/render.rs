//! Block table rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use super::state::{BlockTableState, CellContent};

/// Maps a row's link style class to a terminal style.
fn link_style(class: &str) -> Style {
    match class {
        "muted" => Style::default().fg(Color::DarkGray),
        _ => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Draws the block table into `area`.
pub fn render_table(state: &BlockTableState, frame: &mut Frame, area: Rect) {
    let header = Row::new(
        state
            .layout()
            .columns
            .iter()
            .map(|spec| Cell::from(spec.title.clone())),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = state.rows().iter().map(|row| {
        let link = link_style(&row.link_class);
        Row::new(row.cells.iter().map(|cell| {
            let text = cell.content.text().to_string();
            match cell.content {
                CellContent::Link { .. } => Cell::from(text).style(link),
                CellContent::Age { .. } => {
                    Cell::from(text).style(Style::default().fg(Color::Gray))
                }
                CellContent::Text(_) => Cell::from(text),
            }
        }))
    });

    let widths: Vec<Constraint> = state
        .layout()
        .columns
        .iter()
        .map(|spec| Constraint::Length(spec.width))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Blocks "));
    frame.render_widget(table, area);
}
