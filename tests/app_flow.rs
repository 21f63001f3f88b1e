//! Whole-plugin flows: splash, dashboard loading, tabs, leave requests, toasts.

use rollcall::app::{AttendanceSummary, DashboardPhase, DashboardSummary, ShiftSummary, ToastKind};
use rollcall::ui::helpers::strip_ansi;
use rollcall::ui::viewmodel::PendingRow;
use rollcall::ui::{render_to_string, ScreenView};
use rollcall::{handle_event, initialize, Action, AppState, Config, Event, InputMode, Screen, TextTarget};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn send(state: &mut AppState, event: Event, at: u64) -> (bool, Vec<Action>) {
    handle_event(state, &event, ms(at)).unwrap()
}

fn started() -> AppState {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let mut state = initialize(&Config::default(), today);
    send(&mut state, Event::Started, 0);
    state
}

fn on_leave() -> AppState {
    let mut state = started();
    send(&mut state, Event::Tick, 2_000);
    send(&mut state, Event::Tick, 4_000);
    send(&mut state, Event::PrevTab, 4_000);
    assert_eq!(state.screen, Screen::Leave);
    assert_eq!(state.next_deadline(), None);
    state
}

fn screen_text(state: &AppState) -> String {
    strip_ansi(&render_to_string(state, 24, 80))
}

#[test]
fn splash_hands_over_to_a_loading_dashboard() {
    let mut state = started();
    assert!(screen_text(&state).contains("Rollcall"));

    send(&mut state, Event::Tick, 2_000);
    assert_eq!(state.screen, Screen::Dashboard);
    assert_eq!(state.dashboard.phase, DashboardPhase::Loading);
    assert!(screen_text(&state).contains("Loading"));

    let (render, actions) = send(&mut state, Event::Tick, 4_000);
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(
        state.dashboard.phase,
        DashboardPhase::Ready(DashboardSummary {
            attendance: AttendanceSummary {
                present: 2,
                absent: 1,
                late: 1,
                total: 4,
            },
            shifts: ShiftSummary {
                morning: 2,
                evening: 1,
                night: 1,
            },
            shift_changes: 1,
        })
    );

    let text = screen_text(&state);
    assert!(text.contains("Upcoming Shift Details"));
    assert!(text.contains("Morning: 2 Employees"));
    assert!(text.contains("Night: 1 Employee"));
    assert!(text.contains("Shift Change: 1 Request"));
}

#[test]
fn pending_leave_count_follows_submissions() {
    let mut state = on_leave();
    send(&mut state, Event::OpenLeaveForm, 4_000);
    send(&mut state, Event::Char('x'), 4_000);
    send(&mut state, Event::SubmitLeave, 4_000);
    send(&mut state, Event::Tick, 6_000);
    send(&mut state, Event::NextTab, 6_100);
    assert_eq!(state.screen, Screen::Dashboard);

    let ScreenView::Dashboard(view) = state.compute_viewmodel(24, 80).body else {
        panic!("expected the dashboard view");
    };
    assert_eq!(
        view.pending,
        vec![
            PendingRow {
                label: "Leave".to_string(),
                count: 1,
            },
            PendingRow {
                label: "Shift Change".to_string(),
                count: 1,
            },
        ]
    );
    assert!(screen_text(&state).contains("Leave: 1 Request"));
}

#[test]
fn dashboard_loads_only_once() {
    let mut state = started();
    send(&mut state, Event::Tick, 2_000);
    send(&mut state, Event::Tick, 4_000);

    send(&mut state, Event::NextTab, 5_000);
    let (_, actions) = send(&mut state, Event::PrevTab, 6_000);

    assert_eq!(state.screen, Screen::Dashboard);
    assert!(actions.is_empty());
    assert!(matches!(state.dashboard.phase, DashboardPhase::Ready(_)));
}

#[test]
fn tabs_cycle_in_both_directions() {
    let mut state = started();
    send(&mut state, Event::Tick, 2_000);

    let mut forward = vec![];
    for _ in 0..3 {
        send(&mut state, Event::NextTab, 2_100);
        forward.push(state.screen);
    }
    assert_eq!(forward, vec![Screen::Employees, Screen::Leave, Screen::Dashboard]);

    send(&mut state, Event::PrevTab, 2_200);
    assert_eq!(state.screen, Screen::Leave);
    assert!(state.directory.is_none());

    send(&mut state, Event::PrevTab, 2_300);
    assert_eq!(state.screen, Screen::Employees);
    assert!(state.directory.is_some());
}

#[test]
fn dark_mode_switches_the_palette() {
    let mut state = started();
    send(&mut state, Event::Tick, 2_000);
    assert_eq!(state.theme().name, "catppuccin-latte");

    send(&mut state, Event::ToggleDarkMode, 2_100);
    assert_eq!(state.theme().name, "catppuccin-mocha");
}

#[test]
fn blank_reason_is_rejected_with_a_toast() {
    let mut state = on_leave();
    send(&mut state, Event::OpenLeaveForm, 4_000);
    assert_eq!(state.input_mode(), InputMode::Typing(TextTarget::LeaveReason));

    send(&mut state, Event::Char(' '), 4_000);
    let (_, actions) = send(&mut state, Event::SubmitLeave, 4_500);

    let toast = state.toast.clone().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please enter a reason");
    assert!(state.leave.validation_failed);
    assert!(!state.leave.is_submitting());
    assert_eq!(actions, vec![Action::ScheduleWakeup { after: ms(2_000) }]);
    assert!(screen_text(&state).contains("Please enter a reason"));

    send(&mut state, Event::Tick, 6_500);
    assert!(state.toast.is_none());
    assert!(state.leave.form_open);
}

#[test]
fn valid_request_submits_after_a_delay() {
    let mut state = on_leave();
    send(&mut state, Event::OpenLeaveForm, 4_000);
    for c in "Sick".chars() {
        send(&mut state, Event::Char(c), 4_000);
    }
    send(&mut state, Event::ShiftLeaveDate(1), 4_000);

    let (render, actions) = send(&mut state, Event::SubmitLeave, 5_000);
    assert!(render);
    assert!(state.leave.is_submitting());
    assert!(state.toast.is_none());
    assert_eq!(actions, vec![Action::ScheduleWakeup { after: ms(2_000) }]);

    // A second submit while in flight is ignored.
    let (render, _) = send(&mut state, Event::SubmitLeave, 5_500);
    assert!(!render);

    send(&mut state, Event::Tick, 6_999);
    assert!(state.leave.is_submitting());

    send(&mut state, Event::Tick, 7_000);
    assert!(!state.leave.form_open);
    assert!(state.leave.reason.is_empty());
    let submitted = state.leave.last_submitted().cloned().unwrap();
    assert_eq!(submitted.reason, "Sick");
    assert_eq!(submitted.date, chrono::NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());

    let toast = state.toast.clone().unwrap();
    assert_eq!(toast.kind, ToastKind::Info);
    assert_eq!(toast.message, "Leave Request Submitted!");

    send(&mut state, Event::Tick, 9_000);
    assert!(state.toast.is_none());
}

#[test]
fn new_toast_restarts_the_timer() {
    let mut state = on_leave();
    send(&mut state, Event::OpenLeaveForm, 4_000);
    send(&mut state, Event::SubmitLeave, 4_000);

    // The wake-up armed for the first toast still comes first.
    let (_, actions) = send(&mut state, Event::SubmitLeave, 5_500);
    assert!(actions.is_empty());

    let (_, actions) = send(&mut state, Event::Tick, 6_000);
    assert!(state.toast.is_some());
    assert_eq!(actions, vec![Action::ScheduleWakeup { after: ms(1_500) }]);

    send(&mut state, Event::Tick, 7_500);
    assert!(state.toast.is_none());
}

#[test]
fn closing_the_form_keeps_the_submission_running() {
    let mut state = on_leave();
    send(&mut state, Event::OpenLeaveForm, 4_000);
    send(&mut state, Event::Char('x'), 4_000);
    send(&mut state, Event::SubmitLeave, 4_000);
    send(&mut state, Event::CloseLeaveForm, 4_100);

    send(&mut state, Event::Tick, 6_000);
    assert_eq!(state.toast.unwrap().message, "Leave Request Submitted!");
}

#[test]
fn every_deadline_gets_a_wakeup() {
    let mut state = started();
    let mut now = 0;
    let mut wakeups = 0;

    send(&mut state, Event::Tick, 2_000);
    send(&mut state, Event::NextTab, 2_000);
    send(&mut state, Event::Refresh, 2_000);

    while let Some(deadline) = state.next_deadline() {
        now = u64::try_from(deadline.as_millis()).unwrap();
        send(&mut state, Event::Tick, now);
        wakeups += 1;
        assert!(wakeups < 10, "deadlines never drained");
    }

    assert_eq!(now, 4_000);
    assert!(matches!(state.dashboard.phase, DashboardPhase::Ready(_)));
    assert!(!state.directory.as_ref().unwrap().is_refreshing());
}

#[test]
fn close_focus_is_forwarded_to_the_host() {
    let mut state = started();
    let (_, actions) = send(&mut state, Event::CloseFocus, 100);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
