//! 16-slot palette grid component built from recyclable swatches.

use crossterm_actions::{InputEvent, NavigationEvent, SelectionEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::adapter::{GridAdapter, SwatchBinder, SwatchPool};
use crate::color::{PALETTE_SIZE, Palette};
use crate::swatch::MeasureSpec;
use crate::tui::canvas::{CellMetrics, TermCanvas, bounds_of};
use crate::tui::event::{UserEvent, dispatcher, handle_global_events};
use crate::tui::msg::Msg;

/// Grid geometry: two rows of eight (the normal and bright ANSI ranges).
const GRID_COLS: usize = 8;

/// Palette grid showing one square swatch per ANSI slot.
pub struct SwatchGrid {
    props: Props,
    palette: Palette,
    pool: SwatchPool,
    selected: usize,
}

impl SwatchGrid {
    pub fn new(palette: Palette) -> Self {
        Self {
            props: Props::default(),
            palette,
            pool: SwatchPool::with_capacity(PALETTE_SIZE),
            selected: 0,
        }
    }

    fn move_up(&mut self) {
        if self.selected >= GRID_COLS {
            self.selected -= GRID_COLS;
        }
    }

    fn move_down(&mut self) {
        if self.selected + GRID_COLS < PALETTE_SIZE {
            self.selected += GRID_COLS;
        }
    }

    fn move_left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.selected + 1 < PALETTE_SIZE {
            self.selected += 1;
        }
    }

    fn draw_cell(&mut self, frame: &mut Frame, area: Rect, position: usize, highlight: bool) {
        if highlight {
            let marker = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            frame.render_widget(marker, area);
        }

        // Swatches draw inside a one-cell margin whether or not the
        // selection frame is present, so sizes stay stable.
        let inner = area.inner(ratatui::layout::Margin::new(1, 1));
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let metrics = CellMetrics;
        let adapter = GridAdapter::new(&self.palette);
        let Ok(swatch) = adapter.bind(position, self.pool.take(position)) else {
            return;
        };

        let size = swatch.measure(
            MeasureSpec::AtMost(i32::from(inner.width)),
            MeasureSpec::AtMost(i32::from(inner.height)),
            &metrics,
        );
        let target = centered(inner, size.width, size.height);

        swatch.render(
            &mut TermCanvas::new(frame.buffer_mut(), inner),
            bounds_of(target),
            &metrics,
        );
        self.pool.put(position, swatch);
    }
}

/// Center a width x height rectangle inside `area`, clamping to it.
fn centered(area: Rect, width: i32, height: i32) -> Rect {
    let w = (width.max(0) as u16).min(area.width);
    let h = (height.max(0) as u16).min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

impl MockComponent for SwatchGrid {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self
            .props
            .get_or(Attribute::Focus, AttrValue::Flag(false))
            .unwrap_flag();

        let block = Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(inner);

        for (row_idx, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 8); GRID_COLS])
                .split(*row_area);

            for (col_idx, col_area) in cols.iter().enumerate() {
                let position = row_idx * GRID_COLS + col_idx;
                self.draw_cell(
                    frame,
                    *col_area,
                    position,
                    focused && self.selected == position,
                );
            }
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
            Cmd::Move(CmdDirection::Up) => {
                self.move_up();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) => {
                self.move_down();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Left) => {
                self.move_left();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.move_right();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for SwatchGrid {
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
            // Tab bubbles up for component navigation
            TuiEvent::Selection(SelectionEvent::Next) => Some(Msg::FocusNext),
            TuiEvent::Selection(SelectionEvent::Prev) => Some(Msg::FocusPrev),

            // Enter opens the modal editor for the selected slot
            TuiEvent::Input(InputEvent::Confirm) => Some(Msg::EditColor(self.selected)),

            // Arrows move between cells
            TuiEvent::Navigation(NavigationEvent::Up) => {
                self.move_up();
                None
            }
            TuiEvent::Navigation(NavigationEvent::Down) => {
                self.move_down();
                None
            }
            TuiEvent::Navigation(NavigationEvent::Left) => {
                self.move_left();
                None
            }
            TuiEvent::Navigation(NavigationEvent::Right) => {
                self.move_right();
                None
            }

            _ => None,
        }
    }
}
