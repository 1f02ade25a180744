use crate::state::app_state::RankRow;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::Widget;

/// The power ranking list. Each row is one team: rank badge, name, and a
/// clipped write-up preview. The selected row carries a '>' marker; a
/// grabbed team renders highlighted at its would-be slot.
pub struct StandingsTable<'a> {
    pub rows: &'a [RankRow<'a>],
}

/// Podium colors by rank band: contenders, middle of the pack, pretenders,
/// Sacko territory.
fn rank_color(rank: u32) -> Color {
    match rank {
        1..=3 => Color::Yellow,
        4..=6 => Color::Green,
        7..=9 => Color::Blue,
        _ => Color::Red,
    }
}

const NAME_WIDTH: usize = 28;

impl Widget for StandingsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height == 0 {
            return;
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let y = area.y + idx as u16;
            if y >= area.y + area.height {
                break;
            }

            let marker = if row.selected { '>' } else { ' ' };
            let badge = format!("{marker} {:>2}.", row.rank);
            let badge_style = if row.grabbed {
                Style::default().fg(rank_color(row.rank)).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(rank_color(row.rank)).add_modifier(Modifier::BOLD)
            };
            buf.set_string(area.x, y, &badge, badge_style);

            let name_x = area.x + badge.chars().count() as u16 + 1;
            let name_style = if row.grabbed {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if row.selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let name: String = row.team.name.chars().take(NAME_WIDTH).collect();
            buf.set_string(name_x, y, &name, name_style);

            // Write-up preview in whatever width is left.
            let preview_x = name_x + NAME_WIDTH as u16 + 2;
            if preview_x < area.x + area.width {
                let avail = (area.x + area.width - preview_x) as usize;
                let preview: String = row
                    .team
                    .writeup
                    .chars()
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .take(avail)
                    .collect();
                buf.set_string(preview_x, y, &preview, Style::default().fg(Color::DarkGray));
            }
        }
    }
}
