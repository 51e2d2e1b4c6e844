//! Picker activity - the modal color edit screen.
//!
//! Opened when a grid slot is tapped. Commits at most once through the
//! shared context; cancelling leaves the slot untouched. While this
//! activity runs the colors screen is unmounted, so no other grid or
//! selector interaction can race the in-flight edit.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy};

use crate::color::Argb;
use crate::controller::EditTarget;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{HsvPicker, PICKER_FOOTER};
use crate::tui::event::UserEvent;
use crate::tui::msg::PickerMsg;

/// Unique identifiers for all components in PickerActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Picker,
}

/// The modal color edit activity.
#[derive(Default)]
pub struct PickerActivity {
    app: Option<Application<Id, PickerMsg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    /// 1-based slot number shown in the title.
    slot_number: usize,
}

impl PickerActivity {
    fn create_application() -> Application<Id, PickerMsg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }
}

impl Activity for PickerActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);
        let model = &self.context.as_ref().expect("context should be set").model;

        // Seed from the slot under edit. The edit target was set before the
        // switch, so a missing one is a wiring bug; fall back to black
        // rather than crash the screen.
        let seed = match model.controller.edit_target() {
            EditTarget::Editing(index) => {
                self.slot_number = index + 1;
                model.controller.palette().get(index).unwrap_or_else(|e| {
                    tracing::error!("Failed to read edit seed: {e}");
                    Argb::OPAQUE_BLACK
                })
            }
            EditTarget::Idle => {
                tracing::error!("picker opened with no edit in flight");
                Argb::OPAQUE_BLACK
            }
        };

        let mut app = Self::create_application();
        if let Err(e) = app.mount(Id::Picker, Box::new(HsvPicker::new(seed)), vec![]) {
            tracing::error!("Failed to mount picker: {e}");
        }
        let _ = app.active(&Id::Picker);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");
        let model = &mut self.context.as_mut().expect("context should be set").model;

        let slot_number = self.slot_number;
        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Length(8), // Picker
                    Constraint::Min(0),
                    Constraint::Length(1), // Footer
                ])
                .split(area);

            let title = format!(" edit slot {slot_number} ");
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            let block = Block::default().title(" Color ").borders(Borders::ALL);
            let inner = block.inner(main_rows[1]);
            frame.render_widget(block, main_rows[1]);
            app.view(&Id::Picker, frame, inner);

            let footer =
                Paragraph::new(PICKER_FOOTER).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(footer, main_rows[3]);
        })?;

        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    match msg {
                        PickerMsg::Committed(value) => {
                            model.pending_pick = Some(value);
                            self.exit_reason = Some(ExitReason::SwitchToColors);
                            return Ok(());
                        }
                        PickerMsg::Cancelled => {
                            model.pending_pick = None;
                            self.exit_reason = Some(ExitReason::SwitchToColors);
                            return Ok(());
                        }
                        PickerMsg::Quit => {
                            // Quitting mid-edit abandons it; the commit
                            // callback never fires.
                            model.pending_pick = None;
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        PickerMsg::None => {}
                    }
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}
