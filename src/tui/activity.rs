//! Activity-based architecture for the TUI.
//!
//! Each screen is an Activity with its own Application instance, component
//! IDs, and message types. The ActivityManager orchestrates transitions.
//! The colors activity releases the store handle in `on_destroy` and
//! reacquires it in `on_create`, so the picker runs with no handle held.

use std::io::Stdout;

use color_eyre::eyre::Result;
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::Model;
use super::activities::{ColorsActivity, PickerActivity};

/// Shared context passed between activities.
pub struct Context {
    pub model: Model,
}

/// Exit reasons for activity transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitReason {
    Quit,
    SwitchToColors,
    SwitchToPicker,
}

/// Activity lifecycle trait.
///
/// Each activity owns its own tui-realm Application and handles its own
/// events.
pub trait Activity {
    /// Initialize the activity with context from the manager.
    fn on_create(&mut self, context: Context);

    /// Draw the UI and handle one tick of events.
    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>;

    /// Check if activity wants to exit. Returns Some(reason) to exit, None
    /// to continue.
    fn will_umount(&self) -> Option<&ExitReason>;

    /// Clean up and return the context to the manager.
    fn on_destroy(&mut self) -> Option<Context>;
}

/// Activity types available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Colors,
    Picker,
}

/// Manages activity lifecycle and transitions.
pub struct ActivityManager {
    context: Option<Context>,
    current: ActivityType,
}

impl ActivityManager {
    pub fn new(context: Context) -> Self {
        Self {
            context: Some(context),
            current: ActivityType::Colors,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            let mut activity: Box<dyn Activity> = match self.current {
                ActivityType::Colors => Box::<ColorsActivity>::default(),
                ActivityType::Picker => Box::<PickerActivity>::default(),
            };

            activity.on_create(self.context.take().expect("context should be available"));

            loop {
                activity.on_draw(terminal)?;

                if let Some(reason) = activity.will_umount() {
                    match reason {
                        ExitReason::Quit => {
                            activity.on_destroy();
                            return Ok(());
                        }
                        ExitReason::SwitchToColors => {
                            self.context = activity.on_destroy();
                            self.current = ActivityType::Colors;
                            break;
                        }
                        ExitReason::SwitchToPicker => {
                            self.context = activity.on_destroy();
                            self.current = ActivityType::Picker;
                            break;
                        }
                    }
                }
            }
        }
    }
}
