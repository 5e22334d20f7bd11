use serde::{Deserialize, Serialize};

/// Which side of the target price fires the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    pub id: String,

    // CoinGecko-style slug, e.g. "bitcoin"
    pub asset_id: String,
    pub direction: Direction,
    pub target_price: f64,

    // quote currency code, e.g. "usd"
    pub currency: String,

    pub active: bool,

    // epoch millis; None until the rule first triggers
    pub triggered_at: Option<i64>,
    pub created_at: i64,
}

impl AlertRule {
    /// Inclusive on the boundary: a spot exactly at the target counts as a
    /// hit for both directions.
    pub fn is_hit(&self, spot: f64) -> bool {
        match self.direction {
            Direction::Above => spot >= self.target_price,
            Direction::Below => spot <= self.target_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlertRule, Direction};

    fn rule(direction: Direction, target_price: f64) -> AlertRule {
        AlertRule {
            id: "r1".to_string(),
            asset_id: "bitcoin".to_string(),
            direction,
            target_price,
            currency: "usd".to_string(),
            active: true,
            triggered_at: None,
            created_at: 0,
        }
    }

    #[test]
    fn above_hits_at_and_past_target() {
        let r = rule(Direction::Above, 100.0);
        assert!(r.is_hit(100.0));
        assert!(r.is_hit(100.01));
        assert!(!r.is_hit(99.99));
    }

    #[test]
    fn below_hits_at_and_under_target() {
        let r = rule(Direction::Below, 100.0);
        assert!(r.is_hit(100.0));
        assert!(r.is_hit(99.99));
        assert!(!r.is_hit(100.01));
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Above).unwrap(), "\"above\"");
        assert_eq!(
            serde_json::from_str::<Direction>("\"below\"").unwrap(),
            Direction::Below
        );
    }
}
