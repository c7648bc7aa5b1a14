use chrono::{Duration, Utc};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_machine, login, ok, photo_file, sc, snapshot, supervisor_site};

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

fn yesterday() -> String {
    (Utc::now().date_naive() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn test_machine_without_entry_raises_missing_data() {
    let db_path = supervisor_site("site_missing_data");
    let id = add_machine(&db_path, "Excavator CAT 320");
    assert!(id.starts_with("mac-"));

    sc().args(["--db", &db_path, "alerts"])
        .assert()
        .success()
        .stdout(contains(
            "MISSING DATA ALERT: No operational entry for machine \"Excavator CAT 320\" today.",
        ));

    let state = snapshot(&db_path);
    assert_eq!(state.alerts.len(), 1);
    assert_eq!(state.alerts[0].id, format!("missing-{}-{}", id, today()));
}

#[test]
fn test_log_with_photo_clears_alerts() {
    let db_path = supervisor_site("site_log_photo");
    let id = add_machine(&db_path, "Loader");
    let photo = photo_file("site_log_photo");

    sc().args([
        "--db", &db_path, "log", "add", "--machine", &id, "--fuel", "40.5", "--hours", "7",
        "--notes", "north pit", "--photo", &photo,
    ])
    .assert()
    .success()
    .stdout(contains("Log entry saved successfully!"));

    let state = snapshot(&db_path);
    let log = &state.logs[0];
    assert_eq!(log.date, today());
    assert_eq!(log.fuel_used, 40.5);
    assert_eq!(log.supervisor_name, "Sam Site");
    assert!(log.photo_url.as_deref().unwrap().starts_with("data:image/png;base64,"));
    assert!(state.alerts.is_empty());

    sc().args(["--db", &db_path, "alerts"])
        .assert()
        .success()
        .stdout(contains("No active alerts."));
}

#[test]
fn test_log_without_photo_is_flagged() {
    let db_path = supervisor_site("site_log_nophoto");
    let id = add_machine(&db_path, "Roller");
    ok(&db_path, &["log", "add", "--machine", &id, "--fuel", "10", "--hours", "2"]);

    sc().args(["--db", &db_path, "alerts", "--json"])
        .assert()
        .success()
        .stdout(contains("\"type\": \"MISSING_PHOTO\"").and(contains("\"severity\": \"MEDIUM\"")));
}

#[test]
fn test_fuel_spike_against_yesterday() {
    let db_path = supervisor_site("site_spike");
    let id = add_machine(&db_path, "Excavator");
    let photo = photo_file("site_spike");

    ok(
        &db_path,
        &[
            "log", "add", "--machine", &id, "--fuel", "50", "--hours", "8", "--date",
            &yesterday(), "--photo", &photo,
        ],
    );
    ok(
        &db_path,
        &[
            "log", "add", "--machine", &id, "--fuel", "120", "--hours", "8", "--photo", &photo,
        ],
    );

    sc().args(["--db", &db_path, "alerts"])
        .assert()
        .success()
        .stdout(contains(
            "FUEL SPIKE ALERT: \"Excavator\" used 120L today vs 50L yesterday (>100% increase).",
        ));

    let state = snapshot(&db_path);
    assert_eq!(state.logs.len(), 2);
    // newest entry first
    assert_eq!(state.logs[0].fuel_used, 120.0);
    assert_eq!(state.alerts.len(), 1);
    assert_eq!(state.alerts[0].id, format!("spike-{}", state.logs[0].id));
}

#[test]
fn test_log_rejects_foreign_machine_and_bad_date() {
    let db_path = supervisor_site("site_log_reject");
    let id = add_machine(&db_path, "Crane");

    sc().args([
        "--db", &db_path, "log", "add", "--machine", "mac-zzzzz", "--fuel", "1", "--hours", "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Machine not found"));

    sc().args([
        "--db", &db_path, "log", "add", "--machine", &id, "--fuel", "1", "--hours", "1",
        "--date", "18/06/2025",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));

    sc().args([
        "--db", &db_path, "log", "add", "--machine", &id, "--fuel", "", "--hours", "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Missing required field: fuel"));
}

#[test]
fn test_negative_spare_count_alert() {
    let db_path = supervisor_site("site_tools");
    ok(&db_path, &["tools", "add-category", "Electric Drills"]);
    let cat_id = snapshot(&db_path).spare_tools[0].id.clone();
    ok(&db_path, &["tools", "add-item", &cat_id, "Bit 8mm", "1"]);
    let item_id = snapshot(&db_path).spare_tools[0].items[0].id.clone();

    ok(&db_path, &["tools", "dec", &cat_id, &item_id]);
    sc().args(["--db", &db_path, "tools", "dec", &cat_id, &item_id])
        .assert()
        .success()
        .stdout(contains("below zero"));

    let state = snapshot(&db_path);
    assert_eq!(state.spare_tools[0].items[0].quantity, -1);
    assert_eq!(state.alerts[0].id, format!("spare-{}", item_id));
    assert_eq!(
        state.alerts[0].message,
        "INVALID SPARE COUNT: \"Bit 8mm\" in category \"Electric Drills\" has dropped below zero (-1)."
    );

    ok(&db_path, &["tools", "adjust", &cat_id, &item_id, "5"]);
    let state = snapshot(&db_path);
    assert_eq!(state.spare_tools[0].items[0].quantity, 4);
    assert!(state.alerts.is_empty());
}

#[test]
fn test_owner_sees_whole_fleet_supervisor_only_own() {
    let db_path = supervisor_site("site_views");
    add_machine(&db_path, "Dozer D6");

    login(&db_path, "owner", "8888");
    ok(
        &db_path,
        &[
            "user", "add", "--name", "Lee Field", "--username", "lee", "--pin", "5555",
        ],
    );
    login(&db_path, "lee", "5555");
    add_machine(&db_path, "Grader 140");

    sc().args(["--db", &db_path, "machine", "list"])
        .assert()
        .success()
        .stdout(contains("Grader 140").and(contains("Dozer D6").not()));

    sc().args(["--db", &db_path, "machine", "add", "Paver"])
        .assert()
        .success();

    login(&db_path, "owner", "8888");
    sc().args(["--db", &db_path, "machine", "list"])
        .assert()
        .success()
        .stdout(contains("Grader 140").and(contains("Dozer D6")).and(contains("Sam Site")));

    sc().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Owner dashboard").and(contains("Supervisors     : 2 (2 active)")));

    // owners do not register machines
    sc().args(["--db", &db_path, "machine", "add", "Truck"])
        .assert()
        .failure()
        .stderr(contains("requires the SUPERVISOR role"));
}

#[test]
fn test_supervisor_dashboard_shows_own_site_only() {
    let db_path = supervisor_site("site_sup_dashboard");
    let loader = add_machine(&db_path, "Loader");
    add_machine(&db_path, "Roller");
    let photo = photo_file("site_sup_dashboard");
    ok(
        &db_path,
        &[
            "log", "add", "--machine", &loader, "--fuel", "30", "--hours", "6", "--photo", &photo,
        ],
    );
    ok(&db_path, &["tools", "add-category", "Hand Tools"]);

    login(&db_path, "owner", "8888");
    ok(
        &db_path,
        &[
            "user", "add", "--name", "Lee Field", "--username", "lee", "--pin", "5555",
        ],
    );
    login(&db_path, "lee", "5555");
    add_machine(&db_path, "Crane");

    login(&db_path, "sam", "1234");
    sc().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(
            contains("Supervisor dashboard - Sam Site")
                .and(contains("logged"))
                .and(contains("missing"))
                .and(contains("Hand Tools"))
                .and(contains(
                    "MISSING DATA ALERT: No operational entry for machine \"Roller\" today.",
                ))
                .and(contains("Crane").not()),
        );

    // the other supervisor's alert is stored but not shown to sam
    let state = snapshot(&db_path);
    assert!(state.alerts.iter().any(|a| a.message.contains("\"Crane\"")));
}

#[test]
fn test_owner_fleet_shows_totals() {
    let db_path = supervisor_site("site_fleet_totals");
    let id = add_machine(&db_path, "Excavator");
    ok(
        &db_path,
        &[
            "log", "add", "--machine", &id, "--fuel", "40.5", "--hours", "8", "--date",
            &yesterday(),
        ],
    );
    ok(
        &db_path,
        &["log", "add", "--machine", &id, "--fuel", "12.25", "--hours", "3.5"],
    );

    login(&db_path, "owner", "8888");
    sc().args(["--db", &db_path, "machine", "list"])
        .assert()
        .success()
        .stdout(contains("52.8L").and(contains("11.5h")).and(contains("Total fuel")));

    sc().args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("52.8L").and(contains("11.5h")));
}
