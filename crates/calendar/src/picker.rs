//! The date picker state machine.
//!
//! `DatePicker` is either closed or open. While open it tracks a keyboard
//! focus date and a popover placement; both are reset on every open. The
//! selected date is only changed by [`DatePicker::select`],
//! [`DatePicker::clear`] or a sync from the host, and every local change is
//! reported through a [`ChangeSink`] straight away.

use crate::bounds::DateBounds;
use crate::event::{ChangeEvent, ChangeSink};
use crate::format::{canonical, DateFormat};
use crate::grid::{month_anchor, shift_month, MonthGrid};
use crate::input::RawDateInput;
use crate::keys::PickerKey;
use crate::placement::{Placement, PlacementPolicy, TriggerMetrics, DEFAULT_POPOVER_HEIGHT};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// What the picker needs from its surroundings.
pub trait PickerEnv {
    /// Today's date in the user's local calendar.
    fn today(&self) -> NaiveDate;

    /// Trigger position measured just before opening. `None` when the
    /// trigger is not laid out yet.
    fn measure(&self) -> Option<TriggerMetrics>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Field name echoed back in change events.
    pub name: Option<String>,
    pub placeholder: String,
    pub label: Option<String>,
    pub disabled: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub show_clear_button: bool,
    pub date_format: DateFormat,
    pub popover_height: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            name: None,
            placeholder: "Select Date".to_string(),
            label: None,
            disabled: false,
            min_date: None,
            max_date: None,
            show_clear_button: true,
            date_format: DateFormat::default(),
            popover_height: DEFAULT_POPOVER_HEIGHT,
        }
    }
}

impl PickerConfig {
    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }

    pub fn placement_policy(&self) -> PlacementPolicy {
        PlacementPolicy::new(self.popover_height)
    }
}

/// Result of feeding an interaction to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing happened; the host should let the event through.
    None,
    Opened,
    /// Closed by the user from inside the widget (Escape, trigger click).
    Closed,
    /// Closed by a pointer-down outside the widget.
    Dismissed,
    FocusMoved,
    MonthChanged,
    Selected,
    Cleared,
    /// A selection was attempted on a date outside the bounds.
    Rejected,
}

impl Transition {
    /// Whether keyboard focus should go back to the trigger element.
    pub fn returns_focus_to_trigger(&self) -> bool {
        matches!(self, Transition::Closed | Transition::Selected)
    }

    /// Whether the originating DOM event was consumed.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Transition::None | Transition::Dismissed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open { focused: NaiveDate },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatePicker {
    config: PickerConfig,
    bounds: DateBounds,
    policy: PlacementPolicy,
    selected: Option<NaiveDate>,
    phase: Phase,
    current_month: NaiveDate,
    placement: Placement,
    focus_styled: bool,
}

impl DatePicker {
    /// A closed picker with no selection, showing the month of `today`.
    pub fn new(config: PickerConfig, today: NaiveDate) -> Self {
        Self {
            bounds: config.bounds(),
            policy: config.placement_policy(),
            config,
            selected: None,
            phase: Phase::Closed,
            current_month: month_anchor(today),
            placement: Placement::Below,
            focus_styled: false,
        }
    }

    pub fn with_value(mut self, raw: &RawDateInput) -> Self {
        self.selected = raw.parse();
        if let Some(date) = self.selected {
            self.current_month = month_anchor(date);
        }
        self
    }

    // ---- queries ---------------------------------------------------------

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn has_value(&self) -> bool {
        self.selected.is_some()
    }

    pub fn focused(&self) -> Option<NaiveDate> {
        match self.phase {
            Phase::Open { focused } => Some(focused),
            Phase::Closed => None,
        }
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_anchor(self.current_month)
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.bounds.is_disabled(date)
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    pub fn is_focused(&self, date: NaiveDate) -> bool {
        self.focused() == Some(date)
    }

    /// Open, or still highlighted after the last interaction.
    pub fn is_active(&self) -> bool {
        self.is_open() || self.focus_styled
    }

    pub fn shows_clear_button(&self) -> bool {
        self.config.show_clear_button && self.has_value() && !self.config.disabled
    }

    /// The selection in the configured display format, or `""`.
    pub fn display_text(&self) -> String {
        self.selected
            .map(|date| self.config.date_format.format(date))
            .unwrap_or_default()
    }

    /// Text shown inside the trigger. A label takes the place of the
    /// placeholder when there is no selection.
    pub fn trigger_text(&self) -> String {
        if self.has_value() {
            self.display_text()
        } else if self.config.label.is_some() {
            String::new()
        } else {
            self.config.placeholder.clone()
        }
    }

    // ---- host sync -------------------------------------------------------

    /// Takes a new value from the host. Returns whether the selection changed.
    pub fn sync_value(&mut self, raw: &RawDateInput, env: &impl PickerEnv) -> bool {
        let next = raw.parse();
        if next == self.selected {
            return false;
        }
        log::trace!("date picker value synced: {:?} -> {:?}", self.selected, next);
        self.selected = next;
        if self.is_open() {
            self.seed_focus(env);
        }
        true
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.phase = Phase::Closed;
            self.focus_styled = false;
        }
    }

    // ---- open / close ----------------------------------------------------

    pub fn open(&mut self, env: &impl PickerEnv) -> Transition {
        if self.config.disabled || self.is_open() {
            return Transition::None;
        }
        self.placement = env
            .measure()
            .map(|metrics| self.policy.decide(&metrics))
            .unwrap_or_default();
        self.seed_focus(env);
        self.focus_styled = true;
        log::debug!(
            "date picker opened at {} ({:?})",
            self.current_month,
            self.placement
        );
        Transition::Opened
    }

    /// Click on the trigger.
    pub fn toggle(&mut self, env: &impl PickerEnv) -> Transition {
        if self.is_open() {
            self.close()
        } else {
            self.open(env)
        }
    }

    pub fn close(&mut self) -> Transition {
        if !self.is_open() {
            return Transition::None;
        }
        self.phase = Phase::Closed;
        log::debug!("date picker closed");
        Transition::Closed
    }

    /// Pointer-down outside the widget.
    pub fn dismiss_outside(&mut self) -> Transition {
        let was_open = self.is_open();
        self.phase = Phase::Closed;
        self.focus_styled = false;
        if was_open {
            log::debug!("date picker dismissed by outside click");
            Transition::Dismissed
        } else {
            Transition::None
        }
    }

    // ---- browsing --------------------------------------------------------

    pub fn navigate_month(&mut self, delta: i32) -> Transition {
        let next = shift_month(self.current_month, delta);
        if next == self.current_month {
            return Transition::None;
        }
        self.current_month = next;
        Transition::MonthChanged
    }

    // ---- selection -------------------------------------------------------

    pub fn select(&mut self, date: NaiveDate, sink: &mut impl ChangeSink) -> Transition {
        if self.config.disabled {
            return Transition::None;
        }
        if self.bounds.is_disabled(date) {
            log::debug!("date picker rejected out-of-range date {}", date);
            return Transition::Rejected;
        }

        self.selected = Some(date);
        self.phase = Phase::Closed;
        self.focus_styled = false;
        sink.emit(ChangeEvent::new(self.config.name.clone(), canonical(date)));
        log::debug!("date picker selected {}", date);
        Transition::Selected
    }

    /// The popover's "Today" shortcut.
    pub fn select_today(&mut self, env: &impl PickerEnv, sink: &mut impl ChangeSink) -> Transition {
        self.select(env.today(), sink)
    }

    /// Drops the selection. Emits only if there was one and the widget is
    /// enabled.
    pub fn clear(&mut self, sink: &mut impl ChangeSink) -> bool {
        if self.config.disabled || self.selected.is_none() {
            return false;
        }
        self.selected = None;
        sink.emit(ChangeEvent::cleared(self.config.name.clone()));
        log::debug!("date picker cleared");
        true
    }

    // ---- keyboard --------------------------------------------------------

    pub fn handle_key(
        &mut self,
        key: PickerKey,
        env: &impl PickerEnv,
        sink: &mut impl ChangeSink,
    ) -> Transition {
        if self.config.disabled {
            return Transition::None;
        }

        let focused = match self.phase {
            Phase::Closed if key.opens() => return self.open(env),
            Phase::Closed => return Transition::None,
            Phase::Open { focused } => focused,
        };

        if key == PickerKey::Escape {
            return self.close();
        }
        if let Some(offset) = key.focus_offset() {
            return self.move_focus(focused, offset);
        }
        if key.activates() {
            return self.select(focused, sink);
        }
        Transition::None
    }

    fn move_focus(&mut self, from: NaiveDate, offset: i64) -> Transition {
        let Some(to) = from.checked_add_signed(Duration::days(offset)) else {
            return Transition::None;
        };
        if !MonthGrid::for_anchor(self.current_month).contains(to) {
            self.current_month = month_anchor(to);
        }
        self.phase = Phase::Open { focused: to };
        log::trace!("date picker focus {} -> {}", from, to);
        Transition::FocusMoved
    }

    fn seed_focus(&mut self, env: &impl PickerEnv) {
        let focused = self.selected.unwrap_or_else(|| env.today());
        self.phase = Phase::Open { focused };
        self.current_month = month_anchor(focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    struct FixedEnv {
        today: NaiveDate,
        metrics: Option<TriggerMetrics>,
    }

    impl FixedEnv {
        fn on(today: NaiveDate) -> Self {
            Self {
                today,
                metrics: Some(TriggerMetrics {
                    trigger_bottom: 100.0,
                    viewport_height: 900.0,
                    footer_top: None,
                }),
            }
        }
    }

    impl PickerEnv for FixedEnv {
        fn today(&self) -> NaiveDate {
            self.today
        }

        fn measure(&self) -> Option<TriggerMetrics> {
            self.metrics
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn config() -> PickerConfig {
        PickerConfig {
            name: Some("date".to_string()),
            ..PickerConfig::default()
        }
    }

    fn picker(config: PickerConfig, env: &FixedEnv) -> DatePicker {
        DatePicker::new(config, env.today)
    }

    #[test]
    fn test_select_in_iso_format() {
        let env = FixedEnv::on(date(2025, 2, 20));
        let mut p = picker(
            PickerConfig {
                date_format: DateFormat::Iso,
                ..config()
            },
            &env,
        );
        let mut events = Vec::new();

        p.open(&env);
        assert_eq!(p.select(date(2025, 3, 3), &mut events), Transition::Selected);

        assert_eq!(p.display_text(), "2025-03-03");
        assert_eq!(events, vec![ChangeEvent::new(Some("date".into()), "2025-03-03")]);
        assert!(!p.is_open());
        assert_eq!(p.focused(), None);
    }

    #[test]
    fn test_emitted_value_ignores_display_format() {
        let env = FixedEnv::on(date(2025, 2, 20));
        for format in DateFormat::all() {
            let mut p = picker(
                PickerConfig {
                    date_format: format,
                    ..config()
                },
                &env,
            );
            let mut events = Vec::new();
            p.select(date(2024, 11, 5), &mut events);
            assert_eq!(events.len(), 1);
            assert_eq!(events[0].value(), "2024-11-05");
            assert_eq!(p.display_text(), format.format(date(2024, 11, 5)));
        }
    }

    #[test]
    fn test_selection_before_min_is_rejected() {
        let env = FixedEnv::on(date(2025, 1, 2));
        let mut p = picker(
            PickerConfig {
                min_date: Some(date(2025, 1, 10)),
                ..config()
            },
            &env,
        )
        .with_value(&RawDateInput::from("2025-01-15"));
        let mut events = Vec::new();

        p.open(&env);
        assert_eq!(p.select(date(2025, 1, 5), &mut events), Transition::Rejected);
        assert!(events.is_empty());
        assert_eq!(p.selected(), Some(date(2025, 1, 15)));
        assert!(p.is_open());
    }

    #[test]
    fn test_out_of_range_dates_never_selectable() {
        let env = FixedEnv::on(date(2025, 6, 15));
        let mut p = picker(
            PickerConfig {
                min_date: Some(date(2025, 6, 10)),
                max_date: Some(date(2025, 6, 20)),
                ..config()
            },
            &env,
        );
        p.open(&env);

        for day in p.grid().days().to_vec() {
            let mut events = Vec::new();
            let mut probe = p.clone();
            let outcome = probe.select(day, &mut events);
            if day < date(2025, 6, 10) || day > date(2025, 6, 20) {
                assert!(p.is_date_disabled(day));
                assert_eq!(outcome, Transition::Rejected);
                assert!(events.is_empty());
            } else {
                assert_eq!(outcome, Transition::Selected);
            }
        }

        // Keyboard: walk focus to a disabled day and try to activate it.
        let mut events = Vec::new();
        for _ in 0..6 {
            p.handle_key(PickerKey::ArrowLeft, &env, &mut events);
        }
        assert_eq!(p.focused(), Some(date(2025, 6, 9)));
        assert_eq!(p.handle_key(PickerKey::Enter, &env, &mut events), Transition::Rejected);
        assert_eq!(p.handle_key(PickerKey::Space, &env, &mut events), Transition::Rejected);
        assert!(events.is_empty());
        assert_eq!(p.selected(), None);
    }

    #[test]
    fn test_today_shortcut_respects_bounds() {
        let env = FixedEnv::on(date(2025, 6, 15));
        let mut p = picker(
            PickerConfig {
                min_date: Some(date(2025, 7, 1)),
                ..config()
            },
            &env,
        );
        let mut events = Vec::new();
        p.open(&env);
        assert_eq!(p.select_today(&env, &mut events), Transition::Rejected);
        assert!(events.is_empty());

        let mut p = picker(config(), &env);
        p.open(&env);
        assert_eq!(p.select_today(&env, &mut events), Transition::Selected);
        assert_eq!(events[0].value(), "2025-06-15");
    }

    #[test]
    fn test_open_without_value_focuses_today() {
        let env = FixedEnv::on(date(2025, 1, 28));
        let mut p = picker(config(), &env).with_value(&RawDateInput::Empty);
        let mut events = Vec::new();

        assert_eq!(p.open(&env), Transition::Opened);
        assert_eq!(p.focused(), Some(date(2025, 1, 28)));
        assert_eq!(p.current_month(), date(2025, 1, 1));

        assert_eq!(p.handle_key(PickerKey::ArrowDown, &env, &mut events), Transition::FocusMoved);
        assert_eq!(p.focused(), Some(date(2025, 2, 4)));
        assert_eq!(p.current_month(), date(2025, 2, 1));

        for _ in 1..7 {
            p.handle_key(PickerKey::ArrowDown, &env, &mut events);
        }
        assert_eq!(p.focused(), Some(date(2025, 1, 28) + Duration::days(49)));
        assert_eq!(p.current_month(), month_anchor(date(2025, 3, 18)));
        assert!(p.grid().contains(p.focused().unwrap()));
        assert!(events.is_empty());
    }

    #[test]
    fn test_arrow_keys_move_by_day_and_week() {
        let env = FixedEnv::on(date(2025, 1, 1));
        let mut p = picker(config(), &env).with_value(&"2025-03-15".into());
        let mut events = Vec::new();
        p.open(&env);

        p.handle_key(PickerKey::ArrowUp, &env, &mut events);
        assert_eq!(p.focused(), Some(date(2025, 3, 8)));
        p.handle_key(PickerKey::ArrowRight, &env, &mut events);
        assert_eq!(p.focused(), Some(date(2025, 3, 9)));
        p.handle_key(PickerKey::ArrowLeft, &env, &mut events);
        p.handle_key(PickerKey::ArrowLeft, &env, &mut events);
        assert_eq!(p.focused(), Some(date(2025, 3, 7)));
        assert_eq!(p.current_month(), date(2025, 3, 1));

        // Crossing back over a year boundary.
        let mut p = picker(config(), &env).with_value(&"2025-01-03".into());
        p.open(&env);
        p.handle_key(PickerKey::ArrowUp, &env, &mut events);
        assert_eq!(p.focused(), Some(date(2024, 12, 27)));
        assert_eq!(p.current_month(), date(2024, 12, 1));
        assert_eq!(p.current_month().year(), 2024);
    }

    #[test]
    fn test_keyboard_select_emits_and_closes() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env);
        let mut events = Vec::new();

        assert_eq!(p.handle_key(PickerKey::Enter, &env, &mut events), Transition::Opened);
        p.handle_key(PickerKey::ArrowRight, &env, &mut events);
        let outcome = p.handle_key(PickerKey::Enter, &env, &mut events);

        assert_eq!(outcome, Transition::Selected);
        assert!(outcome.returns_focus_to_trigger());
        assert_eq!(events, vec![ChangeEvent::new(Some("date".into()), "2025-04-11")]);
        assert!(!p.is_open());
    }

    #[test]
    fn test_opening_keys() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut events = Vec::new();
        for key in [PickerKey::Enter, PickerKey::Space, PickerKey::ArrowDown] {
            let mut p = picker(config(), &env);
            assert_eq!(p.handle_key(key, &env, &mut events), Transition::Opened);
        }
        for key in [PickerKey::ArrowUp, PickerKey::Escape, PickerKey::Other] {
            let mut p = picker(config(), &env);
            let outcome = p.handle_key(key, &env, &mut events);
            assert_eq!(outcome, Transition::None);
            assert!(!outcome.prevents_default());
            assert!(!p.is_open());
        }
    }

    #[test]
    fn test_escape_closes_and_keeps_selection() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env).with_value(&"2025-04-02".into());
        let mut events = Vec::new();

        p.open(&env);
        p.handle_key(PickerKey::ArrowDown, &env, &mut events);
        let outcome = p.handle_key(PickerKey::Escape, &env, &mut events);

        assert_eq!(outcome, Transition::Closed);
        assert!(outcome.returns_focus_to_trigger());
        assert!(!p.is_open());
        assert_eq!(p.focused(), None);
        assert_eq!(p.selected(), Some(date(2025, 4, 2)));
        assert!(events.is_empty());
    }

    #[test]
    fn test_opens_upward_near_viewport_bottom() {
        let env = FixedEnv {
            today: date(2025, 4, 10),
            metrics: Some(TriggerMetrics {
                trigger_bottom: 600.0,
                viewport_height: 900.0,
                footer_top: None,
            }),
        };
        let mut p = picker(config(), &env);
        p.open(&env);
        assert_eq!(p.placement(), Placement::Above);
    }

    #[test]
    fn test_placement_fixed_for_open_session() {
        let mut env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env);
        let mut events = Vec::new();

        p.open(&env);
        assert_eq!(p.placement(), Placement::Below);

        env.metrics = Some(TriggerMetrics {
            trigger_bottom: 850.0,
            viewport_height: 900.0,
            footer_top: None,
        });
        p.handle_key(PickerKey::ArrowDown, &env, &mut events);
        p.navigate_month(1);
        assert_eq!(p.placement(), Placement::Below);

        p.close();
        p.open(&env);
        assert_eq!(p.placement(), Placement::Above);

        // Unmeasurable trigger falls back to opening downward.
        p.close();
        env.metrics = None;
        p.open(&env);
        assert_eq!(p.placement(), Placement::Below);
    }

    #[test]
    fn test_clear_rules() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut events = Vec::new();

        let mut empty = picker(config(), &env);
        assert!(!empty.clear(&mut events));
        assert!(events.is_empty());

        let mut p = picker(config(), &env).with_value(&"2025-04-02".into());
        assert!(p.shows_clear_button());
        assert!(p.clear(&mut events));
        assert_eq!(events, vec![ChangeEvent::cleared(Some("date".into()))]);
        assert_eq!(p.selected(), None);
        assert!(!p.clear(&mut events));
        assert_eq!(events.len(), 1);

        let mut disabled = picker(
            PickerConfig {
                disabled: true,
                ..config()
            },
            &env,
        )
        .with_value(&"2025-04-02".into());
        assert!(!disabled.shows_clear_button());
        assert!(!disabled.clear(&mut events));
        assert_eq!(events.len(), 1);
        assert_eq!(disabled.selected(), Some(date(2025, 4, 2)));
    }

    #[test]
    fn test_disabled_never_opens() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(
            PickerConfig {
                disabled: true,
                ..config()
            },
            &env,
        );
        let mut events = Vec::new();

        assert_eq!(p.open(&env), Transition::None);
        assert_eq!(p.toggle(&env), Transition::None);
        assert_eq!(p.handle_key(PickerKey::Enter, &env, &mut events), Transition::None);
        assert_eq!(p.select(date(2025, 4, 11), &mut events), Transition::None);
        assert!(!p.is_open());
        assert!(events.is_empty());
    }

    #[test]
    fn test_disabling_closes_open_picker() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env);
        p.open(&env);
        p.set_disabled(true);
        assert!(!p.is_open());
        assert_eq!(p.focused(), None);
    }

    #[test]
    fn test_outside_click_dismisses() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env);

        assert_eq!(p.dismiss_outside(), Transition::None);
        p.open(&env);
        assert!(p.is_active());
        let outcome = p.dismiss_outside();
        assert_eq!(outcome, Transition::Dismissed);
        assert!(!outcome.returns_focus_to_trigger());
        assert!(!p.is_open());
        assert!(!p.is_active());
    }

    #[test]
    fn test_toggle_and_navigate() {
        let env = FixedEnv::on(date(2024, 12, 31));
        let mut p = picker(config(), &env);

        assert_eq!(p.toggle(&env), Transition::Opened);
        assert_eq!(p.navigate_month(1), Transition::MonthChanged);
        assert_eq!(p.current_month(), date(2025, 1, 1));
        // Browsing does not move keyboard focus.
        assert_eq!(p.focused(), Some(date(2024, 12, 31)));
        p.navigate_month(-2);
        assert_eq!(p.current_month(), date(2024, 11, 1));
        assert_eq!(p.toggle(&env), Transition::Closed);
        assert_eq!(p.focused(), None);
    }

    #[test]
    fn test_reopen_reseeds_focus() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env).with_value(&"2025-08-20".into());
        let mut events = Vec::new();

        p.open(&env);
        p.handle_key(PickerKey::ArrowDown, &env, &mut events);
        p.navigate_month(3);
        p.close();
        p.open(&env);
        assert_eq!(p.focused(), Some(date(2025, 8, 20)));
        assert_eq!(p.current_month(), date(2025, 8, 1));
    }

    #[test]
    fn test_sync_value() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let mut p = picker(config(), &env);

        assert!(p.sync_value(&"2025-05-01".into(), &env));
        assert_eq!(p.selected(), Some(date(2025, 5, 1)));
        assert!(!p.sync_value(&"2025-05-01".into(), &env));

        // Garbage collapses to no selection.
        assert!(p.sync_value(&"31/31/2025".into(), &env));
        assert_eq!(p.selected(), None);

        // While open, focus follows the new value.
        p.open(&env);
        p.sync_value(&RawDateInput::Date(date(2026, 1, 9)), &env);
        assert_eq!(p.focused(), Some(date(2026, 1, 9)));
        assert_eq!(p.current_month(), date(2026, 1, 1));
    }

    #[test]
    fn test_trigger_text() {
        let env = FixedEnv::on(date(2025, 4, 10));
        let p = picker(config(), &env);
        assert_eq!(p.trigger_text(), "Select Date");

        let labelled = picker(
            PickerConfig {
                label: Some("Preferred Date".into()),
                ..config()
            },
            &env,
        );
        assert_eq!(labelled.trigger_text(), "");

        let dmy = picker(
            PickerConfig {
                date_format: DateFormat::DayMonthYear,
                ..config()
            },
            &env,
        )
        .with_value(&"2025-04-02".into());
        assert_eq!(dmy.trigger_text(), "02/04/2025");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let cfg: PickerConfig =
            serde_json::from_str(r#"{ "date_format": "DD/MM/YYYY", "min_date": "2025-01-10" }"#)
                .unwrap();
        assert_eq!(cfg.date_format, DateFormat::DayMonthYear);
        assert_eq!(cfg.min_date, Some(date(2025, 1, 10)));
        assert_eq!(cfg.placeholder, "Select Date");
        assert!(cfg.show_clear_button);
        assert_eq!(cfg.popover_height, 380.0);
    }
}
