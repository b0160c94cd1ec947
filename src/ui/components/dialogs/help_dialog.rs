//! Key bindings overview.

use super::common::{create_dialog_block, modal_area, render_scrollbar};
use super::scroll_behavior::DialogScroll;
use crate::constants::DIALOG_TITLE_HELP;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
ADDING ITEMS
------------
type        Edit the new item text (input line focused)
Enter       Add the item; empty text is ignored
Backspace   Delete the last character
Tab / Esc   Move focus to the list

LIST
----
j/k ↑/↓     Move selection (↑ on the first item returns to input)
g / End     Jump to first / last item
Space/Enter Toggle complete
d / Delete  Remove item
Tab         Move focus to the input line

SORT (press again to turn off)
------------------------------
1           Complete items first
2           Complete items last
3           Alphabetical (case-sensitive)

FILTER (independent toggles)
----------------------------
c           Show only complete items
i           Show only incomplete items
            With both on, nothing matches

GENERAL
-------
t           Cycle icon theme
?           Toggle this help
G           Show logs
q / Esc     Quit (from the list)
Ctrl+C      Quit from anywhere

Items are kept in memory only and are gone when you quit.
";

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let dialog_area = modal_area(f, area);

    let lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible = dialog_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(lines.len(), visible);
    let body = lines.iter().skip(offset).take(visible).copied().collect::<Vec<_>>().join("\n");

    let paragraph = Paragraph::new(body)
        .block(create_dialog_block(DIALOG_TITLE_HELP, Color::Yellow))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, dialog_area);
    render_scrollbar(f, dialog_area, lines.len() > visible, &mut scroll.scrollbar_state);
}
