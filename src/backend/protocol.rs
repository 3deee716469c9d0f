//! Wire types for the plan endpoint
//!
//! The backend's field naming is mixed (`selectedCity` camel-case next to
//! `is_festival` snake-case), so renames are spelled out explicitly rather
//! than applied container-wide.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/get-plan`
#[derive(Debug, Clone, Serialize)]
pub struct PlanRequest {
    #[serde(rename = "crisisData")]
    pub crisis_data: CrisisData,
    #[serde(rename = "recipientEmail")]
    pub recipient_email: String,
}

/// The user's selection, built fresh from control values on every submit
#[derive(Debug, Clone, Serialize)]
pub struct CrisisData {
    #[serde(rename = "selectedCity")]
    pub selected_city: String,
    pub is_festival: bool,
    pub is_flood_alert: bool,
}

/// Success body for `POST /api/get-plan`
#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    pub plan: Plan,
    #[serde(rename = "actionsLog")]
    pub actions_log: Vec<ActionLogEntry>,
    #[serde(rename = "liveAqi")]
    pub live_aqi: Option<f64>,
    #[serde(rename = "chatterCount")]
    pub chatter_count: i64,
    #[serde(rename = "chatterTweets")]
    pub chatter_tweets: Vec<ChatterTweet>,
}

/// The backend-computed response plan (opaque beyond these fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub analysis: String,
    pub actions: PlanActions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanActions {
    pub supply_order: SupplyOrder,
}

/// Mock logistics order suggested by the plan (never actually placed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyOrder {
    pub order: bool,
    pub quantity: i64,
    pub item: String,
}

/// One externally performed side effect attempted by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionLogEntry {
    Email {
        success: bool,
        #[serde(default)]
        destination: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    Tweet {
        success: bool,
        #[serde(rename = "tweetId", default)]
        tweet_id: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    /// Entry types this client does not know; tolerated, rendered generically
    #[serde(other)]
    Unknown,
}

/// A short social-media snippet related to the selected city
#[derive(Debug, Clone, Deserialize)]
pub struct ChatterTweet {
    pub text: String,
}

/// Optional error body on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_wire_field_names() {
        let request = PlanRequest {
            crisis_data: CrisisData {
                selected_city: "Mumbai".to_string(),
                is_festival: true,
                is_flood_alert: false,
            },
            recipient_email: "ops@example.com".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["crisisData"]["selectedCity"], "Mumbai");
        assert_eq!(value["crisisData"]["is_festival"], true);
        assert_eq!(value["crisisData"]["is_flood_alert"], false);
        assert_eq!(value["recipientEmail"], "ops@example.com");
    }

    #[test]
    fn test_response_parses_full_body() {
        let json = r#"{
            "plan": {
                "analysis": "Heavy smog expected.",
                "actions": {
                    "supply_order": { "order": true, "quantity": 500, "item": "N95 masks" }
                }
            },
            "actionsLog": [
                { "type": "email", "success": true, "destination": "ops@example.com" },
                { "type": "tweet", "success": false, "error": "rate limited" }
            ],
            "liveAqi": 175,
            "chatterCount": 12,
            "chatterTweets": [ { "text": "can barely see the road" } ]
        }"#;

        let response: PlanResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.plan.analysis, "Heavy smog expected.");
        assert!(response.plan.actions.supply_order.order);
        assert_eq!(response.plan.actions.supply_order.quantity, 500);
        assert_eq!(response.live_aqi, Some(175.0));
        assert_eq!(response.chatter_count, 12);
        assert_eq!(response.chatter_tweets.len(), 1);
        assert!(matches!(
            response.actions_log[0],
            ActionLogEntry::Email { success: true, .. }
        ));
        assert!(matches!(
            response.actions_log[1],
            ActionLogEntry::Tweet { success: false, .. }
        ));
    }

    #[test]
    fn test_response_parses_null_aqi() {
        let json = r#"{
            "plan": { "analysis": "", "actions": { "supply_order": { "order": false, "quantity": 0, "item": "" } } },
            "actionsLog": [],
            "liveAqi": null,
            "chatterCount": 0,
            "chatterTweets": []
        }"#;

        let response: PlanResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.live_aqi, None);
    }

    #[test]
    fn test_unknown_action_type_is_tolerated() {
        let json = r#"{ "type": "sms", "success": true }"#;
        let entry: ActionLogEntry = serde_json::from_str(json).unwrap();
        assert!(matches!(entry, ActionLogEntry::Unknown));
    }

    #[test]
    fn test_error_body_with_and_without_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"backend down"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("backend down"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.error.is_none());
    }

    #[test]
    fn test_plan_round_trips_for_raw_panel() {
        let plan = Plan {
            analysis: "ok".to_string(),
            actions: PlanActions {
                supply_order: SupplyOrder {
                    order: true,
                    quantity: 3,
                    item: "tarpaulins".to_string(),
                },
            },
        };

        let pretty = serde_json::to_string_pretty(&plan).unwrap();
        assert!(pretty.contains("supply_order"));
        assert!(pretty.contains("tarpaulins"));
    }
}
