//! HSV color picker component for the modal edit screen.

use crossterm_actions::{NavigationEvent, TuiEvent};
use palette::{Hsv, IntoColor, Srgb};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::color::Argb;
use crate::tui::canvas::to_color;
use crate::tui::event::{UserEvent, dispatcher};
use crate::tui::msg::PickerMsg;

/// Channel rows in display order.
const CHANNELS: [&str; 3] = ["Hue", "Saturation", "Value"];

const HUE_STEP: f32 = 2.0;
const UNIT_STEP: f32 = 0.02;

/// Modal HSV picker seeded from the slot under edit. Alpha is carried
/// through from the seed untouched.
pub struct HsvPicker {
    props: Props,
    hue: f32,
    saturation: f32,
    value: f32,
    alpha: u8,
    channel: usize,
}

impl HsvPicker {
    pub fn new(seed: Argb) -> Self {
        let (r, g, b) = seed.rgb();
        let hsv: Hsv = Srgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
        .into_color();
        Self {
            props: Props::default(),
            hue: hsv.hue.into_positive_degrees(),
            saturation: hsv.saturation,
            value: hsv.value,
            alpha: seed.alpha(),
            channel: 0,
        }
    }

    /// The currently composed color.
    pub fn color(&self) -> Argb {
        let rgb: Srgb = Hsv::new(self.hue, self.saturation, self.value).into_color();
        Argb::from_channels(
            self.alpha,
            (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    fn adjust(&mut self, direction: f32) {
        match self.channel {
            0 => self.hue = (self.hue + direction * HUE_STEP).rem_euclid(360.0),
            1 => self.saturation = (self.saturation + direction * UNIT_STEP).clamp(0.0, 1.0),
            _ => self.value = (self.value + direction * UNIT_STEP).clamp(0.0, 1.0),
        }
    }

    fn channel_prev(&mut self) {
        self.channel = (self.channel + CHANNELS.len() - 1) % CHANNELS.len();
    }

    fn channel_next(&mut self) {
        self.channel = (self.channel + 1) % CHANNELS.len();
    }

    fn channel_ratio(&self, channel: usize) -> f32 {
        match channel {
            0 => self.hue / 360.0,
            1 => self.saturation,
            _ => self.value,
        }
    }

    fn channel_text(&self, channel: usize) -> String {
        match channel {
            0 => format!("{:>5.0}°", self.hue),
            1 => format!("{:>5.0}%", self.saturation * 100.0),
            _ => format!("{:>5.0}%", self.value * 100.0),
        }
    }

    fn draw_channel(&self, frame: &mut Frame, area: Rect, channel: usize) {
        let active = self.channel == channel;

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(10),
                Constraint::Length(7),
            ])
            .split(area);

        let label_style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(
            Paragraph::new(format!("{}:", CHANNELS[channel])).style(label_style),
            cols[0],
        );

        let bar_width = cols[1].width.saturating_sub(1) as usize;
        let filled = (self.channel_ratio(channel) * bar_width as f32).round() as usize;
        let filled = filled.min(bar_width);
        let bar_style = if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let bar = Line::from(vec![
            Span::styled("█".repeat(filled), bar_style),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(bar), cols[1]);

        frame.render_widget(
            Paragraph::new(self.channel_text(channel)).style(label_style),
            cols[2],
        );
    }
}

impl MockComponent for HsvPicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // preview
                Constraint::Length(1), // hue
                Constraint::Length(1), // saturation
                Constraint::Length(1), // value
                Constraint::Length(1), // hex readout
            ])
            .split(area);

        let color = self.color();
        let preview = Paragraph::new("").style(Style::default().bg(to_color(color)));
        frame.render_widget(preview, rows[0]);

        for channel in 0..CHANNELS.len() {
            self.draw_channel(frame, rows[channel + 1], channel);
        }

        let hex = Paragraph::new(color.to_string()).style(Style::default().fg(Color::Gray));
        frame.render_widget(hex, rows[4]);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::U32(self.color().0))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.adjust(-1.0);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.adjust(1.0);
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Up) => {
                self.channel_prev();
                CmdResult::None
            }
            Cmd::Move(CmdDirection::Down) => {
                self.channel_next();
                CmdResult::None
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<PickerMsg, UserEvent> for HsvPicker {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<PickerMsg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // The picker is modal: Enter and Esc are handled raw so they cannot
        // be shadowed by dispatcher bindings.
        match key_event.code {
            tuirealm::event::Key::Enter => return Some(PickerMsg::Committed(self.color())),
            tuirealm::event::Key::Esc => return Some(PickerMsg::Cancelled),
            _ => {}
        }

        let action = dispatcher().dispatch(&key_event)?;

        match action {
            TuiEvent::App(crossterm_actions::AppEvent::Quit) => Some(PickerMsg::Quit),

            TuiEvent::Navigation(NavigationEvent::Up) => {
                self.channel_prev();
                None
            }
            TuiEvent::Navigation(NavigationEvent::Down) => {
                self.channel_next();
                None
            }
            TuiEvent::Navigation(NavigationEvent::Left) => {
                self.adjust(-1.0);
                None
            }
            TuiEvent::Navigation(NavigationEvent::Right) => {
                self.adjust(1.0);
                None
            }

            _ => None,
        }
    }
}
