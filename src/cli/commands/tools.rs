use crate::cli::parser::ToolsCommands;
use crate::config::Config;
use crate::core::auth::current_user;
use crate::core::inventory;
use crate::core::photo;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{color_for_quantity, paint};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &ToolsCommands, cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;

    match cmd {
        ToolsCommands::AddCategory { name } => {
            let cat = inventory::add_category(&mut ws.state, name)?;
            ws.commit("tools_add", &cat.id, &format!("Created category {}", cat.name))?;
            success(format!("Category '{}' created with id {}", cat.name, cat.id));
        }

        ToolsCommands::DelCategory { id } => {
            let cat = inventory::delete_category(&mut ws.state, id)?;
            ws.commit(
                "tools_del",
                &cat.id,
                &format!("Deleted category {} ({} items)", cat.name, cat.items.len()),
            )?;
            success(format!("Category '{}' deleted.", cat.name));
        }

        ToolsCommands::AddItem {
            category,
            name,
            quantity,
            photo: photo_path,
        } => {
            let photo_url = match photo_path {
                Some(p) => Some(photo::encode_file(&expand_tilde(p))?),
                None => None,
            };
            let item = inventory::add_item(&mut ws.state, category, name, quantity, photo_url)?;
            ws.commit(
                "item_add",
                &item.id,
                &format!("Added {} (qty {})", item.name, item.quantity),
            )?;
            success(format!("Item '{}' added with id {}", item.name, item.id));
        }

        ToolsCommands::Adjust {
            category,
            item,
            delta,
        } => adjust(&mut ws, category, item, *delta)?,
        ToolsCommands::Inc { category, item } => adjust(&mut ws, category, item, 1)?,
        ToolsCommands::Dec { category, item } => adjust(&mut ws, category, item, -1)?,

        ToolsCommands::List => {
            let user = current_user(&ws.state)?.clone();
            let mut shown = 0;

            for cat in &ws.state.spare_tools {
                if !user.is_owner() && cat.supervisor_id != user.id {
                    continue;
                }
                shown += 1;

                let manager = ws.state.user_name(&cat.supervisor_id).unwrap_or("Unknown");
                println!("\n📦 {} [{}] - managed by {}", cat.name, cat.id, manager);

                if cat.items.is_empty() {
                    println!("   (no items)");
                }
                for item in &cat.items {
                    let qty = format!("{:>6}", item.quantity);
                    println!(
                        "   {:<12} {:<30} {}{}",
                        item.id,
                        item.name,
                        paint(&qty, color_for_quantity(item.quantity)),
                        if item.photo_url.is_some() { "  📷" } else { "" }
                    );
                }
            }

            if shown == 0 {
                info("No spare-tool categories.");
            }
        }
    }

    Ok(())
}

fn adjust(ws: &mut Workspace, category: &str, item: &str, delta: i64) -> AppResult<()> {
    let updated = inventory::adjust_item(&mut ws.state, category, item, delta)?;
    ws.commit(
        "item_adjust",
        &updated.id,
        &format!("{} {:+} -> {}", updated.name, delta, updated.quantity),
    )?;

    if updated.quantity < 0 {
        warning(format!(
            "'{}' count is now {} (below zero)",
            updated.name, updated.quantity
        ));
    } else {
        success(format!("'{}' count is now {}", updated.name, updated.quantity));
    }
    Ok(())
}
