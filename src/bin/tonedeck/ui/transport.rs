//! Now-playing bar - track line plus the clickable seek bar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use tonedeck::{GenreProfile, PlayerView};

/// Render the transport bar. Returns where the seek bar was drawn.
pub fn render_transport(frame: &mut Frame, area: Rect, view: &PlayerView) -> Rect {
    let block = Block::default().title(" tonedeck ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let (play_symbol, play_color) = if view.playing {
        ("▶", Color::Green)
    } else {
        ("⏸", Color::Yellow)
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", play_symbol),
        Style::default().fg(play_color),
    )];

    match view.track {
        Some(track) => {
            spans.push(Span::styled(
                format!("{}  ", track.title),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!("{}  ", track.author),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(
                    "{} ({})  ",
                    track.genre,
                    GenreProfile::lookup(track.genre).waveform.label()
                ),
                Style::default().fg(Color::Cyan),
            ));
        }
        None => spans.push(Span::styled(
            "Pick a track  ",
            Style::default().fg(Color::DarkGray),
        )),
    }

    if let Some(freq) = view.frequency {
        spans.push(Span::styled(
            format!("{:.1} Hz  ", freq),
            Style::default().fg(Color::Magenta),
        ));
    }
    spans.push(Span::styled(
        format!("Vol {:.0}%", view.volume * 100.0),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let ratio = (f64::from(view.progress) / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{} / {}", view.elapsed, view.total));
    frame.render_widget(gauge, rows[1]);

    rows[1]
}

/// Percent of the track under terminal column `column` of the seek bar.
pub fn seek_percent(bar: Rect, column: u16) -> Option<f32> {
    if bar.width == 0 || column < bar.x || column >= bar.x + bar.width {
        return None;
    }
    Some(f32::from(column - bar.x) / f32::from(bar.width) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_percent_maps_columns() {
        let bar = Rect::new(10, 2, 50, 1);
        assert_eq!(seek_percent(bar, 10), Some(0.0));
        assert_eq!(seek_percent(bar, 35), Some(50.0));
        assert_eq!(seek_percent(bar, 59), Some(98.0));
    }

    #[test]
    fn seek_percent_outside_bar() {
        let bar = Rect::new(10, 2, 50, 1);
        assert_eq!(seek_percent(bar, 9), None);
        assert_eq!(seek_percent(bar, 60), None);
        assert_eq!(seek_percent(Rect::default(), 0), None);
    }
}
