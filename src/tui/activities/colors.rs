//! Colors activity - the palette configuration screen.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::controller::SelectorSlot;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{COLORS_FOOTER, DefaultSelector, SwatchGrid, render_help};
use crate::tui::event::UserEvent;
use crate::tui::msg::Msg;

// ============================================================================
// Component identifiers (scoped to ColorsActivity)
// ============================================================================

/// Unique identifiers for all components in ColorsActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    Grid,
    ForegroundSelector,
    BackgroundSelector,
}

// ============================================================================
// Focus management (scoped to ColorsActivity)
// ============================================================================

/// All focusable component IDs in order.
const ALL_FOCUS_IDS: &[Id] = &[Id::Grid, Id::ForegroundSelector, Id::BackgroundSelector];

/// Manages focus state for Tab navigation.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        Self { current_idx: 0 }
    }

    /// Get the current focus component ID.
    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::Grid)
    }

    /// Move focus to next component and return its ID.
    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    /// Move focus to previous component and return its ID.
    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ColorsActivity
// ============================================================================

/// The palette configuration activity: grid of 16 slots plus the two
/// default-color selectors.
#[derive(Default)]
pub struct ColorsActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl ColorsActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    /// Mount all initial components, pre-selecting the stored defaults.
    fn mount_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) -> Result<()> {
        let palette = *model.controller.palette();
        let defaults = model.controller.defaults();

        let grid = SwatchGrid::new(palette);
        app.mount(Id::Grid, Box::new(grid), vec![])?;

        let fg_selector = DefaultSelector::new(
            "Foreground",
            SelectorSlot::Foreground,
            palette,
            defaults.foreground(),
        );
        app.mount(Id::ForegroundSelector, Box::new(fg_selector), vec![])?;

        let bg_selector = DefaultSelector::new(
            "Background",
            SelectorSlot::Background,
            palette,
            defaults.background(),
        );
        app.mount(Id::BackgroundSelector, Box::new(bg_selector), vec![])?;

        app.active(&Id::Grid)?;

        Ok(())
    }

    /// Remount palette-backed components after the palette changed.
    fn sync_display_components(app: &mut Application<Id, Msg, UserEvent>, model: &Model) {
        let palette = *model.controller.palette();
        let defaults = model.controller.defaults();

        let _ = app.umount(&Id::Grid);
        let _ = app.mount(Id::Grid, Box::new(SwatchGrid::new(palette)), vec![]);

        let _ = app.umount(&Id::ForegroundSelector);
        let fg_selector = DefaultSelector::new(
            "Foreground",
            SelectorSlot::Foreground,
            palette,
            defaults.foreground(),
        );
        let _ = app.mount(Id::ForegroundSelector, Box::new(fg_selector), vec![]);

        let _ = app.umount(&Id::BackgroundSelector);
        let bg_selector = DefaultSelector::new(
            "Background",
            SelectorSlot::Background,
            palette,
            defaults.background(),
        );
        let _ = app.mount(Id::BackgroundSelector, Box::new(bg_selector), vec![]);
    }
}

impl Activity for ColorsActivity {
    fn on_create(&mut self, context: Context) {
        self.context = Some(context);
        let model = &mut self
            .context
            .as_mut()
            .expect("context should be set")
            .model;

        // Acquire the store handle: first entry loads palette state, return
        // from the picker reattaches without refetching.
        if let Err(e) = model.reattach_store() {
            tracing::error!("Failed to open palette store: {e}");
            model.message = Some(e.to_string());
        }

        // Returning from the picker: commit or cancel the in-flight edit.
        if let Err(e) = model.resolve_pending_edit() {
            tracing::error!("Failed to commit edit: {e}");
            model.message = Some(e.to_string());
        }

        // The mounts below render from current state already.
        let _ = model.controller.take_redraw_request();

        let mut app = Self::create_application();
        if let Err(e) = Self::mount_components(&mut app, model) {
            tracing::error!("Failed to mount components: {e}");
        }

        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let app = self.app.as_mut().expect("app should be initialized");
        let model = &mut self.context.as_mut().expect("context should be set").model;

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Grid
                    Constraint::Length(4), // Defaults
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let title = format!(" swatchboard - {} palette ", model.controller.scope());
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            // Palette grid
            app.view(&Id::Grid, frame, main_rows[1]);

            // Default foreground/background selectors
            let defaults_block = Block::default().title(" Defaults ").borders(Borders::ALL);
            let defaults_inner = defaults_block.inner(main_rows[2]);
            frame.render_widget(defaults_block, main_rows[2]);

            let selector_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(1)])
                .split(defaults_inner);

            app.view(&Id::ForegroundSelector, frame, selector_rows[0]);
            app.view(&Id::BackgroundSelector, frame, selector_rows[1]);

            // Status bar
            let status = model
                .message
                .clone()
                .unwrap_or_else(|| COLORS_FOOTER.to_string());
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[3]);

            // Help modal overlay
            if model.show_help {
                render_help(frame);
            }
        })?;

        // Handle help modal events separately (intercepts all input when
        // visible)
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.show_help = false;
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    // Handle focus and transitions at activity level
                    match &msg {
                        Msg::FocusNext => {
                            let next = self.focus.focus_next();
                            let _ = app.active(&next);
                        }
                        Msg::FocusPrev => {
                            let prev = self.focus.focus_prev();
                            let _ = app.active(&prev);
                        }
                        Msg::EditColor(position) => {
                            match model.controller.begin_edit(*position) {
                                Ok(_) => {
                                    self.exit_reason = Some(ExitReason::SwitchToPicker);
                                    return Ok(());
                                }
                                Err(e) => {
                                    tracing::error!("Failed to start edit: {e}");
                                    model.message = Some(e.to_string());
                                }
                            }
                        }
                        _ => {}
                    }

                    // Check for quit
                    if matches!(msg, Msg::Quit) {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }

                    // Process through model, handle chained messages
                    let mut current = Some(msg);
                    while let Some(m) = current {
                        current = model.update(Some(m));
                    }
                }

                // The controller flags a redraw when the palette or default
                // pair changed under the mounted components.
                if model.controller.take_redraw_request() {
                    Self::sync_display_components(app, model);
                    let _ = app.active(&self.focus.current_focus());
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
        // Teardown: release the store handle. In-memory palette state stays
        // valid in the context for the next activity or resume.
        if let Some(context) = self.context.as_mut() {
            context.model.controller.detach();
        }
        self.app = None;
        self.context.take()
    }
}
