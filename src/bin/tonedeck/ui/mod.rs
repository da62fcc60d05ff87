//! TUI module for tonedeck
//!
//! Drives the player from a ~60fps loop: the frame time feeds the player's
//! simulated clock, keys and clicks become player commands.

pub mod state;
mod tracklist;
mod transport;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use tonedeck::{EngineEvent, Player, ToneSink};

use state::{map_key, ControlMessage, SCRUB_STEP, VOLUME_STEP};
use tracklist::render_tracklist;
use transport::{render_transport, seek_percent};

/// UI application state
pub struct UiApp<S: ToneSink> {
    player: Player<S>,
    /// Row the track list cursor is on
    highlighted: usize,
    /// Where the seek bar was last drawn, for mouse hits
    seek_area: Rect,
    /// Output sample rate, `None` when running silent
    sample_rate: Option<f32>,
    last_frame: Instant,
    should_quit: bool,
}

impl<S: ToneSink> UiApp<S> {
    pub fn new(player: Player<S>, sample_rate: Option<f32>) -> Self {
        Self {
            player,
            highlighted: 0,
            seek_area: Rect::default(),
            sample_rate,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        self.last_frame = Instant::now();

        while !self.should_quit {
            let now = Instant::now();
            if let Some(EngineEvent::TrackFinished) = self.player.advance(now - self.last_frame) {
                if let Some(track) = self.player.current_track() {
                    info!(track = track.title, "advanced to next track");
                }
                self.follow_current();
            }
            self.last_frame = now;

            terminal.draw(|frame| self.render(frame))?;

            // Handle input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(msg) = map_key(key.code) {
                            self.apply(msg);
                        }
                    }
                    Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                        self.handle_click(mouse.column, mouse.row);
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::TogglePlayback => {
                self.player.toggle_play_pause();
                self.follow_current();
            }
            ControlMessage::Next => {
                self.player.next();
                self.follow_current();
            }
            ControlMessage::Prev => {
                self.player.prev();
                self.follow_current();
            }
            ControlMessage::VolumeUp => {
                let volume = self.player.engine().volume();
                self.player.set_volume(volume + VOLUME_STEP);
            }
            ControlMessage::VolumeDown => {
                let volume = self.player.engine().volume();
                self.player.set_volume(volume - VOLUME_STEP);
            }
            ControlMessage::Select(index) => self.select(index),
            ControlMessage::SelectHighlighted => self.select(self.highlighted),
            ControlMessage::HighlightUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            ControlMessage::HighlightDown => {
                let last = self.player.tracks().len().saturating_sub(1);
                self.highlighted = (self.highlighted + 1).min(last);
            }
            ControlMessage::ScrubForward => {
                let progress = self.player.engine().progress();
                self.player.scrub(progress + SCRUB_STEP);
            }
            ControlMessage::ScrubBack => {
                let progress = self.player.engine().progress();
                self.player.scrub(progress - SCRUB_STEP);
            }
            ControlMessage::Quit => self.should_quit = true,
        }
    }

    fn select(&mut self, index: usize) {
        match self.player.select_track(index) {
            Ok(()) => self.highlighted = index,
            Err(err) => warn!(error = %err, "ignoring track selection"),
        }
    }

    /// Keep the list cursor on the track that is playing
    fn follow_current(&mut self) {
        if let Some(index) = self.player.controller().current() {
            self.highlighted = index;
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if !self.seek_area.contains(Position::new(column, row)) {
            return;
        }
        if let Some(percent) = seek_percent(self.seek_area, column) {
            self.player.scrub(percent);
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: transport, track list, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Now playing + seek bar
                Constraint::Min(8),    // Track list
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let view = self.player.snapshot();

        self.seek_area = render_transport(frame, chunks[0], &view);
        render_tracklist(
            frame,
            chunks[1],
            self.player.tracks(),
            &view,
            self.highlighted,
        );

        let output = match self.sample_rate {
            Some(rate) => format!("{:.1}kHz", rate / 1000.0),
            None => "no audio".to_string(),
        };
        let help = Paragraph::new(format!(
            " [Space] Play/Pause  [n/p] Next/Prev  [+/-] Volume  [1-6] Track  [[/]] Seek  [Q] Quit   {}",
            output
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
