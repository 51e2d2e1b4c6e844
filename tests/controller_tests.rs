use std::cell::RefCell;
use std::rc::Rc;

use swatchboard::color::{Argb, DefaultColors, Palette, PaletteError, Scope};
use swatchboard::controller::{EditTarget, PaletteController, SelectorSlot};
use swatchboard::store::{PaletteStore, StoreError};

/// Every call made against the store, shared with the test body.
#[derive(Default)]
struct CallLog {
    get_colors: usize,
    get_defaults: usize,
    set_color: Vec<(Scope, usize, Argb)>,
    set_defaults: Vec<(Scope, usize, usize)>,
}

/// In-memory store that records every call.
struct RecordingStore {
    log: Rc<RefCell<CallLog>>,
    palette: Palette,
    defaults: DefaultColors,
}

impl RecordingStore {
    fn new(log: Rc<RefCell<CallLog>>, palette: Palette, defaults: DefaultColors) -> Self {
        Self {
            log,
            palette,
            defaults,
        }
    }
}

impl PaletteStore for RecordingStore {
    fn colors(&self, _scope: &Scope) -> Result<Palette, StoreError> {
        self.log.borrow_mut().get_colors += 1;
        Ok(self.palette)
    }

    fn default_colors(&self, _scope: &Scope) -> Result<DefaultColors, StoreError> {
        self.log.borrow_mut().get_defaults += 1;
        Ok(self.defaults)
    }

    fn set_color(&mut self, scope: &Scope, index: usize, value: Argb) -> Result<(), StoreError> {
        self.log
            .borrow_mut()
            .set_color
            .push((scope.clone(), index, value));
        Ok(())
    }

    fn set_default_colors(
        &mut self,
        scope: &Scope,
        defaults: DefaultColors,
    ) -> Result<(), StoreError> {
        self.log.borrow_mut().set_defaults.push((
            scope.clone(),
            defaults.foreground(),
            defaults.background(),
        ));
        Ok(())
    }
}

fn all_black() -> Palette {
    Palette::new([Argb(0xFF000000); 16])
}

fn attached(
    scope: Scope,
    palette: Palette,
    defaults: DefaultColors,
) -> (PaletteController<RecordingStore>, Rc<RefCell<CallLog>>) {
    let log = Rc::new(RefCell::new(CallLog::default()));
    let store = RecordingStore::new(Rc::clone(&log), palette, defaults);
    let mut controller = PaletteController::new(scope);
    controller.attach(store).unwrap();
    (controller, log)
}

#[test]
fn test_commit_edit_updates_slot_and_persists_once() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    let seed = controller.begin_edit(3).unwrap();
    assert_eq!(seed, Argb(0xFF000000));
    assert_eq!(controller.edit_target(), EditTarget::Editing(3));

    controller.commit_edit(Argb(0xFF112233)).unwrap();

    assert_eq!(controller.palette().get(3).unwrap(), Argb(0xFF112233));
    assert_eq!(controller.edit_target(), EditTarget::Idle);
    assert!(controller.take_redraw_request());
    assert_eq!(
        log.borrow().set_color,
        vec![(Scope::global(), 3, Argb(0xFF112233))]
    );
}

#[test]
fn test_redraw_request_is_consumed() {
    let (mut controller, _log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    controller.begin_edit(0).unwrap();
    controller.commit_edit(Argb(0xFFABCDEF)).unwrap();

    assert!(controller.take_redraw_request());
    assert!(!controller.take_redraw_request());
}

#[test]
fn test_begin_edit_out_of_range_fails_fast() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    assert!(matches!(
        controller.begin_edit(16),
        Err(PaletteError::IndexOutOfRange(16))
    ));
    assert_eq!(controller.edit_target(), EditTarget::Idle);
    assert!(log.borrow().set_color.is_empty());
}

#[test]
fn test_begin_edit_twice_fails() {
    let (mut controller, _log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    controller.begin_edit(2).unwrap();
    assert!(matches!(
        controller.begin_edit(5),
        Err(PaletteError::AlreadyEditing(2))
    ));
}

#[test]
fn test_commit_without_edit_fails() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    assert!(matches!(
        controller.commit_edit(Argb(0xFF112233)),
        Err(PaletteError::NotEditing)
    ));
    assert!(log.borrow().set_color.is_empty());
}

#[test]
fn test_cancel_edit_leaves_palette_untouched() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    controller.begin_edit(2).unwrap();
    controller.cancel_edit();

    assert_eq!(controller.edit_target(), EditTarget::Idle);
    assert_eq!(controller.palette().get(2).unwrap(), Argb(0xFF000000));
    assert!(log.borrow().set_color.is_empty());

    // a fresh edit can start after a cancel
    controller.begin_edit(4).unwrap();
}

#[test]
fn test_selector_reselect_is_idempotent() {
    let defaults = DefaultColors::new(7, 2).unwrap();
    let (mut controller, log) = attached(Scope::global(), all_black(), defaults);

    let changed = controller
        .select_default(SelectorSlot::Foreground, 7)
        .unwrap();

    assert!(!changed);
    assert!(log.borrow().set_defaults.is_empty());
    assert_eq!(controller.defaults(), defaults);
}

#[test]
fn test_selector_change_persists_full_pair_once() {
    let defaults = DefaultColors::new(7, 2).unwrap();
    let (mut controller, log) = attached(Scope::global(), all_black(), defaults);

    let changed = controller
        .select_default(SelectorSlot::Foreground, 5)
        .unwrap();
    assert!(changed);
    assert_eq!(controller.defaults(), DefaultColors::new(5, 2).unwrap());
    assert_eq!(log.borrow().set_defaults, vec![(Scope::global(), 5, 2)]);

    // re-selecting the new value triggers no further write
    let changed = controller
        .select_default(SelectorSlot::Foreground, 5)
        .unwrap();
    assert!(!changed);
    assert_eq!(log.borrow().set_defaults.len(), 1);
}

#[test]
fn test_selector_background_leaves_foreground() {
    let defaults = DefaultColors::new(7, 2).unwrap();
    let (mut controller, log) = attached(Scope::global(), all_black(), defaults);

    controller
        .select_default(SelectorSlot::Background, 9)
        .unwrap();

    assert_eq!(controller.defaults(), DefaultColors::new(7, 9).unwrap());
    assert_eq!(log.borrow().set_defaults, vec![(Scope::global(), 7, 9)]);
}

#[test]
fn test_selector_out_of_range_fails_fast() {
    let defaults = DefaultColors::new(7, 2).unwrap();
    let (mut controller, log) = attached(Scope::global(), all_black(), defaults);

    assert!(matches!(
        controller.select_default(SelectorSlot::Foreground, 16),
        Err(PaletteError::IndexOutOfRange(16))
    ));
    assert_eq!(controller.defaults(), defaults);
    assert!(log.borrow().set_defaults.is_empty());
}

#[test]
fn test_slot_writes_target_global_even_for_host_scope() {
    let scope = Scope::host("rack-1");
    let (mut controller, log) = attached(scope.clone(), all_black(), DefaultColors::default());

    controller.begin_edit(1).unwrap();
    controller.commit_edit(Argb(0xFF445566)).unwrap();
    controller.select_default(SelectorSlot::Background, 4).unwrap();

    let log = log.borrow();
    // slot writes land in the global palette, the default pair in the
    // screen's own scope
    assert_eq!(log.set_color, vec![(Scope::global(), 1, Argb(0xFF445566))]);
    assert_eq!(log.set_defaults, vec![(scope, 7, 4)]);
}

#[test]
fn test_mutation_after_detach_fails() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    controller.begin_edit(3).unwrap();
    controller.detach();

    assert!(matches!(
        controller.commit_edit(Argb(0xFF112233)),
        Err(PaletteError::StoreDetached)
    ));
    assert!(matches!(
        controller.select_default(SelectorSlot::Foreground, 3),
        Err(PaletteError::StoreDetached)
    ));
    assert!(log.borrow().set_color.is_empty());
}

#[test]
fn test_reattach_keeps_in_memory_state_without_refetch() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());
    assert_eq!(log.borrow().get_colors, 1);

    controller.begin_edit(3).unwrap();
    controller.commit_edit(Argb(0xFF112233)).unwrap();
    controller.detach();
    assert!(!controller.is_attached());

    // resume: the new handle sees a store whose palette never had the edit
    let resumed = RecordingStore::new(Rc::clone(&log), all_black(), DefaultColors::default());
    controller.attach(resumed).unwrap();

    assert!(controller.is_attached());
    assert_eq!(log.borrow().get_colors, 1, "resume must not refetch");
    assert_eq!(
        controller.palette().get(3).unwrap(),
        Argb(0xFF112233),
        "in-memory state survives the handle gap"
    );
}

#[test]
fn test_reload_refetches_from_attached_store() {
    let (mut controller, log) =
        attached(Scope::global(), all_black(), DefaultColors::default());

    controller.detach();
    let mut fresh = all_black();
    fresh.set(0, Argb(0xFF998877)).unwrap();
    let store = RecordingStore::new(Rc::clone(&log), fresh, DefaultColors::new(1, 0).unwrap());
    controller.attach(store).unwrap();

    controller.reload().unwrap();

    assert_eq!(controller.palette().get(0).unwrap(), Argb(0xFF998877));
    assert_eq!(controller.defaults(), DefaultColors::new(1, 0).unwrap());
    assert!(controller.take_redraw_request());
    assert_eq!(log.borrow().get_colors, 2);
}

#[test]
fn test_reload_detached_fails() {
    let (mut controller, _log) =
        attached(Scope::global(), all_black(), DefaultColors::default());
    controller.detach();
    assert!(matches!(
        controller.reload(),
        Err(PaletteError::StoreDetached)
    ));
}
