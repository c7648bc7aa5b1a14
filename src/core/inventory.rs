//! Spare-tool categories and item counts.

use crate::core::auth::require_supervisor;
use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use crate::models::spare_tool::{SpareToolCategory, SpareToolItem};
use crate::utils::ids;
use crate::utils::input::parse_int_lenient;

pub fn add_category(state: &mut AppState, name: &str) -> AppResult<SpareToolCategory> {
    let supervisor = require_supervisor(state)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }

    let category = SpareToolCategory {
        id: ids::category_id(),
        name: name.to_string(),
        items: Vec::new(),
        supervisor_id: supervisor.id,
    };
    state.spare_tools.push(category.clone());
    Ok(category)
}

fn own_category_mut<'a>(
    state: &'a mut AppState,
    supervisor_id: &str,
    category_id: &str,
) -> AppResult<&'a mut SpareToolCategory> {
    state
        .spare_tools
        .iter_mut()
        .find(|c| c.id == category_id && c.supervisor_id == supervisor_id)
        .ok_or_else(|| AppError::CategoryNotFound(category_id.to_string()))
}

pub fn delete_category(state: &mut AppState, category_id: &str) -> AppResult<SpareToolCategory> {
    let supervisor = require_supervisor(state)?;
    let removed = own_category_mut(state, &supervisor.id, category_id)?.clone();
    state.spare_tools.retain(|c| c.id != category_id);
    Ok(removed)
}

/// Add an item; the quantity is coerced like a form integer field.
pub fn add_item(
    state: &mut AppState,
    category_id: &str,
    name: &str,
    quantity: &str,
    photo_url: Option<String>,
) -> AppResult<SpareToolItem> {
    let supervisor = require_supervisor(state)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if quantity.trim().is_empty() {
        return Err(AppError::MissingField("quantity"));
    }

    let item = SpareToolItem {
        id: ids::item_id(),
        name: name.to_string(),
        quantity: parse_int_lenient(quantity),
        photo_url: photo_url.filter(|p| !p.is_empty()),
    };

    own_category_mut(state, &supervisor.id, category_id)?
        .items
        .push(item.clone());
    Ok(item)
}

/// Apply `delta` to an item count. No lower bound is enforced.
pub fn adjust_item(
    state: &mut AppState,
    category_id: &str,
    item_id: &str,
    delta: i64,
) -> AppResult<SpareToolItem> {
    let supervisor = require_supervisor(state)?;
    let category = own_category_mut(state, &supervisor.id, category_id)?;
    let item = category
        .item_mut(item_id)
        .ok_or_else(|| AppError::ItemNotFound(item_id.to_string()))?;

    item.quantity = item.quantity.saturating_add(delta);
    Ok(item.clone())
}

/// Owner inventory view line.
pub struct InventoryRow<'a> {
    pub category: &'a SpareToolCategory,
    pub item: &'a SpareToolItem,
    pub managed_by: &'a str,
}

pub fn inventory_rows(state: &AppState) -> Vec<InventoryRow<'_>> {
    state
        .spare_tools
        .iter()
        .flat_map(|cat| {
            let managed_by = state.user_name(&cat.supervisor_id).unwrap_or("Unknown");
            cat.items.iter().map(move |item| InventoryRow {
                category: cat,
                item,
                managed_by,
            })
        })
        .collect()
}
