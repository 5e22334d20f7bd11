use chrono::Utc;
use uuid::Uuid;

use crate::{AppState, error::AlertError, models::AlertRule, models::Direction};

pub struct NewRule {
    pub asset_id: String,
    pub direction: Direction,
    pub target_price: f64,
    pub currency: String,
}

/// Validates and appends a new rule. Validation happens before anything is
/// persisted; the created rule starts active and untriggered.
pub async fn create_rule(state: &AppState, new: NewRule) -> Result<AlertRule, AlertError> {
    let asset_id = new.asset_id.trim().to_string();
    let currency = new.currency.trim().to_lowercase();

    if asset_id.is_empty() {
        return Err(AlertError::InvalidInput("asset id must not be empty"));
    }
    if currency.is_empty() {
        return Err(AlertError::InvalidInput("currency must not be empty"));
    }
    if !new.target_price.is_finite() || new.target_price <= 0.0 {
        return Err(AlertError::InvalidInput(
            "target price must be a positive number",
        ));
    }

    let rule = AlertRule {
        id: Uuid::new_v4().to_string(),
        asset_id,
        direction: new.direction,
        target_price: new.target_price,
        currency,
        active: true,
        triggered_at: None,
        created_at: Utc::now().timestamp_millis(),
    };

    {
        let _guard = state.write_lock.lock().await;
        let mut rules = state.store.load().await;
        rules.push(rule.clone());
        state.store.save(&rules).await;
    }

    // the active set just grew; evaluate without waiting out the interval
    state.poll_kick.notify_one();

    Ok(rule)
}

/// Removes the rule if present; an absent id is a no-op, not an error.
pub async fn delete_rule(state: &AppState, id: &str) {
    let _guard = state.write_lock.lock().await;

    let mut rules = state.store.load().await;
    let before = rules.len();
    rules.retain(|r| r.id != id);

    if rules.len() != before {
        state.store.save(&rules).await;
    }
}

/// Flips `active`; an absent id is a no-op.
pub async fn toggle_rule(state: &AppState, id: &str) {
    let mut activated = false;

    {
        let _guard = state.write_lock.lock().await;

        let mut rules = state.store.load().await;
        let mut changed = false;
        for r in rules.iter_mut() {
            if r.id == id {
                r.active = !r.active;
                activated = r.active;
                changed = true;
            }
        }

        if changed {
            state.store.save(&rules).await;
        }
    }

    if activated {
        state.poll_kick.notify_one();
    }
}

/// Records a trigger: sets `triggered_at` and deactivates the rule in one
/// write. Returns false without writing when the id is absent or the rule is
/// already inactive, which is what makes the trigger at-most-once per
/// activation (a re-armed rule may trigger again; the timestamp then holds
/// the most recent trigger).
pub async fn mark_triggered(state: &AppState, id: &str) -> bool {
    let _guard = state.write_lock.lock().await;

    let mut rules = state.store.load().await;
    let now = Utc::now().timestamp_millis();

    let mut newly_triggered = false;
    for r in rules.iter_mut() {
        if r.id == id && r.active {
            r.active = false;
            r.triggered_at = Some(now);
            newly_triggered = true;
        }
    }

    if newly_triggered {
        state.store.save(&rules).await;
    }

    newly_triggered
}

pub async fn list_rules(state: &AppState) -> Vec<AlertRule> {
    state.store.load().await
}

pub async fn active_count(state: &AppState) -> usize {
    state.store.load().await.iter().filter(|r| r.active).count()
}
