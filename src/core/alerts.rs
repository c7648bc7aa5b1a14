//! Alert derivation.
//!
//! Alerts are never maintained incrementally: every evaluation rebuilds the
//! full list from the snapshot. Rule passes are independent and their
//! outputs are concatenated in a fixed order (fuel spikes, missing daily
//! data, missing photos, invalid spare counts).

use crate::models::alert::{Alert, AlertType, Severity};
use crate::models::app_state::AppState;
use crate::models::daily_log::DailyLog;
use crate::models::user::User;
use crate::utils::date::{fmt_date, yesterday_of};
use crate::utils::fmt_number;
use chrono::NaiveDate;

/// Today's fuel must exceed this multiple of yesterday's to count as a spike.
pub const FUEL_SPIKE_FACTOR: f64 = 2.0;

/// Compute the alert list for `today`, stamping each alert with `now`
/// (epoch millis).
pub fn evaluate(state: &AppState, today: NaiveDate, now: i64) -> Vec<Alert> {
    let today_str = fmt_date(today);
    let yesterday_str = fmt_date(yesterday_of(today));

    let mut alerts = Vec::new();
    alerts.extend(fuel_spikes(state, &today_str, &yesterday_str, now));
    alerts.extend(missing_daily_data(state, &today_str, now));
    alerts.extend(missing_photos(state, &today_str, now));
    alerts.extend(invalid_spare_counts(state, now));
    alerts
}

/// Recompute and store alerts, but only while someone is logged in.
/// Returns whether the stored list changed.
pub fn refresh_alerts(state: &mut AppState, today: NaiveDate, now: i64) -> bool {
    if state.current_user.is_none() {
        return false;
    }

    let fresh = evaluate(state, today, now);
    if same_alerts(&fresh, &state.alerts) {
        return false;
    }
    state.alerts = fresh;
    true
}

/// Alerts a user may see: all of them for the owner, otherwise those raised
/// on the user's own machines or inventory.
pub fn visible_to<'a>(state: &'a AppState, user: &User) -> Vec<&'a Alert> {
    state
        .alerts
        .iter()
        .filter(|a| {
            user.is_owner()
                || a.supervisor_id.as_deref() == Some(user.id.as_str())
                || a.machine_id
                    .as_deref()
                    .is_some_and(|mid| state.machines_of(&user.id).any(|m| m.id == mid))
        })
        .collect()
}

/// Equality ignoring the evaluation timestamp.
fn same_alerts(a: &[Alert], b: &[Alert]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.id == y.id && x.message == y.message && x.kind == y.kind)
}

fn fuel_spikes(state: &AppState, today: &str, yesterday: &str, now: i64) -> Vec<Alert> {
    state
        .logs
        .iter()
        .filter(|log| log.date == today)
        .filter_map(|log| {
            // first match in list order (newest first)
            let prev = state
                .logs
                .iter()
                .find(|l| l.machine_id == log.machine_id && l.date == yesterday)?;

            if prev.fuel_used > 0.0 && log.fuel_used > prev.fuel_used * FUEL_SPIKE_FACTOR {
                Some(fuel_spike_alert(log, prev, now))
            } else {
                None
            }
        })
        .collect()
}

fn fuel_spike_alert(log: &DailyLog, prev: &DailyLog, now: i64) -> Alert {
    Alert {
        id: format!("spike-{}", log.id),
        kind: AlertType::FuelSpike,
        severity: Severity::High,
        message: format!(
            "FUEL SPIKE ALERT: \"{}\" used {}L today vs {}L yesterday (>100% increase).",
            log.machine_name,
            fmt_number(log.fuel_used),
            fmt_number(prev.fuel_used)
        ),
        timestamp: now,
        machine_id: Some(log.machine_id.clone()),
        supervisor_id: None,
        log_id: Some(log.id.clone()),
    }
}

fn missing_daily_data(state: &AppState, today: &str, now: i64) -> Vec<Alert> {
    state
        .machines
        .iter()
        .filter(|m| {
            !state
                .logs
                .iter()
                .any(|l| l.machine_id == m.id && l.date == today)
        })
        .map(|m| Alert {
            id: format!("missing-{}-{}", m.id, today),
            kind: AlertType::MissingData,
            severity: Severity::Medium,
            message: format!(
                "MISSING DATA ALERT: No operational entry for machine \"{}\" today.",
                m.name
            ),
            timestamp: now,
            machine_id: Some(m.id.clone()),
            supervisor_id: None,
            log_id: None,
        })
        .collect()
}

fn missing_photos(state: &AppState, today: &str, now: i64) -> Vec<Alert> {
    state
        .logs
        .iter()
        .filter(|l| l.date == today && !l.has_photo())
        .map(|l| Alert {
            id: format!("photo-{}", l.id),
            kind: AlertType::MissingPhoto,
            severity: Severity::Medium,
            message: format!(
                "MISSING PHOTO ALERT: Daily entry for \"{}\" submitted without an inventory/site photo.",
                l.machine_name
            ),
            timestamp: now,
            machine_id: Some(l.machine_id.clone()),
            supervisor_id: None,
            log_id: Some(l.id.clone()),
        })
        .collect()
}

fn invalid_spare_counts(state: &AppState, now: i64) -> Vec<Alert> {
    state
        .spare_tools
        .iter()
        .flat_map(|cat| {
            cat.items
                .iter()
                .filter(|item| item.quantity < 0)
                .map(move |item| Alert {
                    id: format!("spare-{}", item.id),
                    kind: AlertType::InvalidSpareCount,
                    severity: Severity::Medium,
                    message: format!(
                        "INVALID SPARE COUNT: \"{}\" in category \"{}\" has dropped below zero ({}).",
                        item.name, cat.name, item.quantity
                    ),
                    timestamp: now,
                    machine_id: None,
                    supervisor_id: Some(cat.supervisor_id.clone()),
                    log_id: None,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::machine::Machine;
    use crate::models::spare_tool::{SpareToolCategory, SpareToolItem};
    use crate::models::user::{UserRole, UserStatus};

    const NOW: i64 = 1_750_000_000_000;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    fn machine(id: &str, name: &str) -> Machine {
        Machine {
            id: id.into(),
            name: name.into(),
            supervisor_id: "sup-1".into(),
            date_added: 0,
        }
    }

    fn log(id: &str, machine_id: &str, date: &str, fuel: f64, photo: bool) -> DailyLog {
        DailyLog {
            id: id.into(),
            machine_id: machine_id.into(),
            machine_name: format!("Machine {machine_id}"),
            timestamp: 0,
            date: date.into(),
            fuel_used: fuel,
            hours_worked: 8.0,
            notes: String::new(),
            photo_url: photo.then(|| "data:image/png;base64,AAAA".to_string()),
            supervisor_id: "sup-1".into(),
            supervisor_name: "Sam".into(),
        }
    }

    fn of_kind(alerts: &[Alert], kind: AlertType) -> Vec<&Alert> {
        alerts.iter().filter(|a| a.kind == kind).collect()
    }

    #[test]
    fn fuel_more_than_double_is_one_high_alert() {
        let mut state = AppState::default();
        state.machines.push(machine("m1", "Excavator"));
        state.logs = vec![
            log("today", "m1", "2025-06-18", 120.0, true),
            log("yday", "m1", "2025-06-17", 50.0, true),
        ];

        let alerts = evaluate(&state, today(), NOW);
        let spikes = of_kind(&alerts, AlertType::FuelSpike);
        assert_eq!(spikes.len(), 1);
        assert_eq!(spikes[0].id, "spike-today");
        assert_eq!(spikes[0].severity, Severity::High);
        assert_eq!(spikes[0].log_id.as_deref(), Some("today"));
        assert_eq!(
            spikes[0].message,
            "FUEL SPIKE ALERT: \"Machine m1\" used 120L today vs 50L yesterday (>100% increase)."
        );
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn exactly_double_is_not_a_spike() {
        let mut state = AppState::default();
        state.logs = vec![
            log("t", "m1", "2025-06-18", 100.0, true),
            log("y", "m1", "2025-06-17", 50.0, true),
        ];
        assert!(of_kind(&evaluate(&state, today(), NOW), AlertType::FuelSpike).is_empty());
    }

    #[test]
    fn zero_fuel_yesterday_never_spikes() {
        let mut state = AppState::default();
        state.logs = vec![
            log("t", "m1", "2025-06-18", 100.0, true),
            log("y", "m1", "2025-06-17", 0.0, true),
        ];
        assert!(of_kind(&evaluate(&state, today(), NOW), AlertType::FuelSpike).is_empty());
    }

    #[test]
    fn spike_compares_against_first_yesterday_log_only() {
        let mut state = AppState::default();
        state.logs = vec![
            log("t", "m1", "2025-06-18", 100.0, true),
            log("y2", "m1", "2025-06-17", 60.0, true),
            log("y1", "m1", "2025-06-17", 10.0, true),
        ];
        assert!(of_kind(&evaluate(&state, today(), NOW), AlertType::FuelSpike).is_empty());
    }

    #[test]
    fn other_machine_yesterday_does_not_count() {
        let mut state = AppState::default();
        state.logs = vec![
            log("t", "m1", "2025-06-18", 100.0, true),
            log("y", "m2", "2025-06-17", 10.0, true),
        ];
        assert!(of_kind(&evaluate(&state, today(), NOW), AlertType::FuelSpike).is_empty());
    }

    #[test]
    fn machine_without_log_today_is_missing_data() {
        let mut state = AppState::default();
        state.machines = vec![machine("m1", "Excavator"), machine("m2", "Loader")];
        state.logs = vec![
            log("t", "m1", "2025-06-18", 10.0, true),
            log("y", "m2", "2025-06-17", 10.0, true),
        ];

        let alerts = evaluate(&state, today(), NOW);
        let missing = of_kind(&alerts, AlertType::MissingData);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id, "missing-m2-2025-06-18");
        assert_eq!(missing[0].severity, Severity::Medium);
        assert_eq!(
            missing[0].message,
            "MISSING DATA ALERT: No operational entry for machine \"Loader\" today."
        );
    }

    #[test]
    fn todays_log_without_photo_is_flagged() {
        let mut state = AppState::default();
        let mut empty_photo = log("e", "m1", "2025-06-18", 10.0, false);
        empty_photo.photo_url = Some(String::new());
        state.logs = vec![
            log("a", "m1", "2025-06-18", 10.0, false),
            empty_photo,
            log("b", "m1", "2025-06-18", 10.0, true),
            log("old", "m1", "2025-06-10", 10.0, false),
        ];

        let alerts = evaluate(&state, today(), NOW);
        let ids: Vec<&str> = of_kind(&alerts, AlertType::MissingPhoto)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["photo-a", "photo-e"]);
    }

    #[test]
    fn negative_quantity_is_one_medium_alert() {
        let mut state = AppState::default();
        state.spare_tools.push(SpareToolCategory {
            id: "cat-1".into(),
            name: "Drills".into(),
            supervisor_id: "sup-1".into(),
            items: vec![
                SpareToolItem {
                    id: "item-1".into(),
                    name: "Bit".into(),
                    quantity: -1,
                    photo_url: None,
                },
                SpareToolItem {
                    id: "item-2".into(),
                    name: "Chuck".into(),
                    quantity: 0,
                    photo_url: None,
                },
            ],
        });

        let alerts = evaluate(&state, today(), NOW);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "spare-item-1");
        assert_eq!(alerts[0].kind, AlertType::InvalidSpareCount);
        assert_eq!(alerts[0].supervisor_id.as_deref(), Some("sup-1"));
        assert_eq!(
            alerts[0].message,
            "INVALID SPARE COUNT: \"Bit\" in category \"Drills\" has dropped below zero (-1)."
        );
    }

    #[test]
    fn rule_outputs_keep_fixed_order() {
        let mut state = AppState::default();
        state.machines = vec![machine("m1", "Excavator"), machine("m2", "Loader")];
        state.logs = vec![
            log("t", "m1", "2025-06-18", 100.0, false),
            log("y", "m1", "2025-06-17", 10.0, true),
        ];
        state.spare_tools.push(SpareToolCategory {
            id: "c".into(),
            name: "C".into(),
            supervisor_id: "s".into(),
            items: vec![SpareToolItem {
                id: "i".into(),
                name: "I".into(),
                quantity: -3,
                photo_url: None,
            }],
        });

        let kinds: Vec<AlertType> = evaluate(&state, today(), NOW)
            .iter()
            .map(|a| a.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                AlertType::FuelSpike,
                AlertType::MissingData,
                AlertType::MissingPhoto,
                AlertType::InvalidSpareCount
            ]
        );
    }

    #[test]
    fn refresh_requires_a_session() {
        let mut state = AppState::default();
        state.machines.push(machine("m1", "Excavator"));

        assert!(!refresh_alerts(&mut state, today(), NOW));
        assert!(state.alerts.is_empty());

        state.current_user = Some(User::default_owner());
        assert!(refresh_alerts(&mut state, today(), NOW));
        assert_eq!(state.alerts.len(), 1);

        // unchanged inputs keep the stored list
        assert!(!refresh_alerts(&mut state, today(), NOW + 1000));
        assert_eq!(state.alerts[0].timestamp, NOW);
    }

    #[test]
    fn supervisors_only_see_their_own_alerts() {
        let mut state = AppState::default();
        state.machines.push(machine("m1", "Excavator"));
        let mut other = machine("m2", "Crane");
        other.supervisor_id = "sup-2".into();
        state.machines.push(other);
        state.alerts = evaluate(&state, today(), NOW);
        assert_eq!(state.alerts.len(), 2);

        let sam = User {
            id: "sup-1".into(),
            name: "Sam".into(),
            username: "sam".into(),
            pin: "1234".into(),
            role: UserRole::Supervisor,
            phone: None,
            status: UserStatus::Active,
        };
        let seen = visible_to(&state, &sam);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].machine_id.as_deref(), Some("m1"));

        assert_eq!(visible_to(&state, &User::default_owner()).len(), 2);
    }
}
