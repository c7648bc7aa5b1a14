//! Role-specific overview printed by `sitecontrol dashboard`.

use crate::config::Config;
use crate::core::alerts::visible_to;
use crate::core::auth::current_user;
use crate::core::fleet::fleet_overview;
use crate::core::inventory::inventory_rows;
use crate::core::users::supervisors;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::models::app_state::AppState;
use crate::models::user::User;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_quantity, color_for_severity, paint};
use crate::utils::date::fmt_date;
use crate::utils::fmt_number;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;
    let user = current_user(&ws.state)?.clone();
    ws.sync_alerts()?;

    let today = fmt_date(ws.today());
    if user.is_owner() {
        owner_view(&ws.state, &user, &today, &cfg.separator_char);
    } else {
        supervisor_view(&ws.state, &user, &today, &cfg.separator_char);
    }
    print_alerts(&ws.state, &user);
    Ok(())
}

fn owner_view(state: &AppState, user: &User, today: &str, sep: &str) {
    header(format!("Owner dashboard - {} ({})", user.name, today));

    let sups = supervisors(state);
    let active = sups.iter().filter(|u| u.is_active()).count();
    let logged_today = state.logs.iter().filter(|l| l.date == today).count();
    println!("👷 Supervisors     : {} ({} active)", sups.len(), active);
    println!("🚜 Machines        : {}", state.machines.len());
    println!("⛽ Entries today   : {}", logged_today);
    println!("🧰 Tool categories : {}", state.spare_tools.len());

    header("Fleet");
    let mut fleet = Table::with_headers(&[
        "Machine",
        "Supervisor",
        "Logs",
        "Total fuel",
        "Total hours",
        "Last entry",
    ]);
    for e in fleet_overview(state) {
        fleet.add_row(vec![
            e.machine.name.clone(),
            e.supervisor_name.to_string(),
            e.log_count.to_string(),
            format!("{:.1}L", e.total_fuel),
            format!("{:.1}h", e.total_hours),
            e.latest.map_or_else(|| "-".to_string(), |l| l.date.clone()),
        ]);
    }
    if fleet.is_empty() {
        info("No machines registered.");
    } else {
        print!("{}", fleet.render(sep));
    }

    header("Spare tools");
    let mut tools = Table::with_headers(&["Category", "Item", "Qty", "Managed by"]);
    for row in inventory_rows(state) {
        tools.add_row(vec![
            row.category.name.clone(),
            row.item.name.clone(),
            row.item.quantity.to_string(),
            row.managed_by.to_string(),
        ]);
    }
    if tools.is_empty() {
        info("No spare tools recorded.");
    } else {
        print!("{}", tools.render(sep));
    }
}

fn supervisor_view(state: &AppState, user: &User, today: &str, sep: &str) {
    header(format!("Supervisor dashboard - {} ({})", user.name, today));

    let mut fleet = Table::with_headers(&["ID", "Machine", "Today", "Fuel (L)", "Hours"]);
    for m in state.machines_of(&user.id) {
        let todays = state
            .logs
            .iter()
            .find(|l| l.machine_id == m.id && l.date == today);
        fleet.add_row(match todays {
            Some(l) => vec![
                m.id.clone(),
                m.name.clone(),
                "logged".into(),
                fmt_number(l.fuel_used),
                fmt_number(l.hours_worked),
            ],
            None => vec![
                m.id.clone(),
                m.name.clone(),
                "missing".into(),
                "-".into(),
                "-".into(),
            ],
        });
    }
    if fleet.is_empty() {
        info("No machines yet. Register one with `sitecontrol machine add`.");
    } else {
        print!("{}", fleet.render(sep));
    }

    for cat in state.tools_of(&user.id) {
        println!("\n📦 {} [{}]", cat.name, cat.id);
        for item in &cat.items {
            let qty = format!("{:>6}", item.quantity);
            println!(
                "   {:<30} {}",
                item.name,
                paint(&qty, color_for_quantity(item.quantity))
            );
        }
    }
}

fn print_alerts(state: &AppState, user: &User) {
    header("Alerts");
    let visible = visible_to(state, user);
    if visible.is_empty() {
        success("No active alerts.");
        return;
    }
    for a in visible {
        println!(
            "[{}] {}",
            paint(a.severity.as_str(), color_for_severity(a.severity)),
            a.message
        );
    }
}
