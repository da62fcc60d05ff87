//! Track list widget - the catalog with the active track marked

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use tonedeck::{PlayerView, Track};

pub fn render_tracklist(
    frame: &mut Frame,
    area: Rect,
    tracks: &[Track],
    view: &PlayerView,
    highlighted: usize,
) {
    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let active = view.index == Some(i);
            let marker = match (active, view.playing) {
                (true, true) => "▶",
                (true, false) => "⏸",
                (false, _) => " ",
            };
            let title_style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {}. ", marker, i + 1), title_style),
                Span::styled(format!("{:<16}", track.title), title_style),
                Span::styled(
                    format!("{:<16}", track.author),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<12}", track.genre),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    format!("{:>7}  ", track.plays),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(track.duration),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Tracks ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default().with_selected(Some(highlighted));
    frame.render_stateful_widget(list, area, &mut state);
}
