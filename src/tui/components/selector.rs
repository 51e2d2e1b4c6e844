//! Single-choice selector for one half of the default color pair.

use crossterm_actions::{NavigationEvent, SelectionEvent, TuiEvent};
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

use crate::adapter::{SelectorAdapter, SwatchBinder, SwatchPool};
use crate::color::{PALETTE_SIZE, Palette};
use crate::controller::SelectorSlot;
use crate::swatch::MeasureSpec;
use crate::tui::canvas::{CellMetrics, TermCanvas, bounds_of};
use crate::tui::event::{UserEvent, dispatcher, handle_global_events};
use crate::tui::msg::Msg;

/// A selector that cycles through the palette slots, previewing the current
/// choice as an inline swatch.
pub struct DefaultSelector {
    props: Props,
    palette: Palette,
    pool: SwatchPool,
    selected: usize,
    label: String,
    slot: SelectorSlot,
}

impl DefaultSelector {
    pub fn new(
        label: impl Into<String>,
        slot: SelectorSlot,
        palette: Palette,
        initial: usize,
    ) -> Self {
        Self {
            props: Props::default(),
            palette,
            // one recycled instance is enough; the selector shows a single
            // swatch at a time
            pool: SwatchPool::with_capacity(1),
            selected: initial.min(PALETTE_SIZE - 1),
            label: label.into(),
            slot,
        }
    }

    fn cycle_next(&mut self) {
        self.selected = (self.selected + 1) % PALETTE_SIZE;
    }

    fn cycle_prev(&mut self) {
        self.selected = (self.selected + PALETTE_SIZE - 1) % PALETTE_SIZE;
    }

    fn msg_for_change(&self) -> Option<Msg> {
        match self.slot {
            SelectorSlot::Foreground => Some(Msg::ForegroundSelected(self.selected)),
            SelectorSlot::Background => Some(Msg::BackgroundSelected(self.selected)),
        }
    }

    fn draw_swatch(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let metrics = CellMetrics;
        let adapter = SelectorAdapter::new(&self.palette);
        let Ok(swatch) = adapter.bind(self.selected, self.pool.take(0)) else {
            return;
        };
        let size = swatch.measure(
            MeasureSpec::AtMost(i32::from(area.width)),
            MeasureSpec::Exact(i32::from(area.height)),
            &metrics,
        );
        let target = Rect {
            x: area.x,
            y: area.y,
            width: (size.width.max(0) as u16).min(area.width),
            height: (size.height.max(0) as u16).min(area.height),
        };
        swatch.render(
            &mut TermCanvas::new(frame.buffer_mut(), area),
            bounds_of(target),
            &metrics,
        );
        self.pool.put(0, swatch);
    }
}

impl MockComponent for DefaultSelector {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12), // label
                Constraint::Length(2),  // left arrow
                Constraint::Length(6),  // swatch
                Constraint::Length(2),  // right arrow
                Constraint::Min(9),     // hex readout
            ])
            .split(area);

        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let label_text = Paragraph::new(format!("{}:", self.label)).style(label_style);
        frame.render_widget(label_text, cols[0]);

        let arrow_style = if focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        frame.render_widget(Paragraph::new(Span::styled("◂ ", arrow_style)), cols[1]);
        frame.render_widget(Paragraph::new(Span::styled(" ▸", arrow_style)), cols[3]);

        self.draw_swatch(frame, cols[2]);

        if let Ok(color) = self.palette.get(self.selected) {
            let hex_style = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            let hex = Line::from(Span::styled(color.to_string(), hex_style));
            frame.render_widget(Paragraph::new(hex), cols[4]);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.cycle_prev();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.cycle_next();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for DefaultSelector {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        if !focused {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_events(&action) {
            return Some(msg);
        }

        match action {
            TuiEvent::Selection(SelectionEvent::Next) => Some(Msg::FocusNext),
            TuiEvent::Selection(SelectionEvent::Prev) => Some(Msg::FocusPrev),

            TuiEvent::Navigation(NavigationEvent::Left) => {
                if let CmdResult::Changed(_) = self.perform(Cmd::Move(CmdDirection::Left)) {
                    self.msg_for_change()
                } else {
                    None
                }
            }
            TuiEvent::Navigation(NavigationEvent::Right) => {
                if let CmdResult::Changed(_) = self.perform(Cmd::Move(CmdDirection::Right)) {
                    self.msg_for_change()
                } else {
                    None
                }
            }

            _ => None,
        }
    }
}
