use serde_json::{json, Value};
use std::sync::LazyLock;

/// Accepted report layouts. Upper-case, camelCase and snake_case keys are
/// all allowed since the upstream producers disagree.
pub static REPORT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "anyOf": [
            { "required": ["MONITORING"] },
            { "required": ["monitoring"] }
        ],
        "properties": {
            "TIMESTAMP": { "type": "string" },
            "timestamp": { "type": "string" },
            "MONITORING": { "$ref": "#/$defs/monitoring" },
            "monitoring": { "$ref": "#/$defs/monitoring" },
            "OPTIMIZATION": { "$ref": "#/$defs/optimization" },
            "optimization": { "$ref": "#/$defs/optimization" },
            "recommendations": { "type": "array", "items": { "$ref": "#/$defs/recommendation" } },
            "AUTOMATION": { "$ref": "#/$defs/automation" },
            "automation": { "$ref": "#/$defs/automation" }
        },
        "$defs": {
            "monitoring": {
                "type": "object",
                "anyOf": [
                    { "required": ["total_cost"] },
                    { "required": ["totalCost"] }
                ],
                "properties": {
                    "total_cost": { "type": "number" },
                    "totalCost": { "type": "number" },
                    "anomalies": { "type": "integer", "minimum": 0 },
                    "alerts": { "type": "array", "items": { "$ref": "#/$defs/alert" } },
                    "by_service": { "type": "object", "additionalProperties": { "type": "number" } }
                }
            },
            "alert": {
                "type": "object",
                "required": ["service", "severity", "message"],
                "properties": {
                    "service": { "type": "string" },
                    "severity": { "type": "string", "enum": ["high", "medium", "low"] },
                    "message": { "type": "string" },
                    "type": { "type": "string" }
                }
            },
            "optimization": {
                "type": "object",
                "properties": {
                    "potential_savings": { "type": "number" },
                    "recommendations_count": { "type": "integer", "minimum": 0 },
                    "top_recommendations": { "type": "array", "items": { "$ref": "#/$defs/recommendation" } }
                }
            },
            "recommendation": {
                "type": "object",
                "required": ["service", "message"],
                "anyOf": [
                    { "required": ["potential_savings"] },
                    { "required": ["savings"] }
                ],
                "properties": {
                    "service": { "type": "string" },
                    "message": { "type": "string" },
                    "potential_savings": { "type": ["number", "string"] },
                    "savings": { "type": ["number", "string"] },
                    "confidence": { "type": "string" }
                }
            },
            "automation": {
                "type": "object",
                "properties": {
                    "actions_executed": { "type": "integer", "minimum": 0 },
                    "actionsExecuted": { "type": "integer", "minimum": 0 },
                    "success_rate": { "type": "number", "minimum": 0, "maximum": 1 },
                    "successRate": { "type": "number", "minimum": 0, "maximum": 1 },
                    "recent_actions": { "type": "array", "items": { "$ref": "#/$defs/action" } },
                    "recentActions": { "type": "array", "items": { "$ref": "#/$defs/action" } }
                }
            },
            "action": {
                "type": "object",
                "required": ["status"],
                "properties": {
                    "service": { "type": "string" },
                    "action": { "type": "string" },
                    "status": { "type": "string" },
                    "message": { "type": "string" }
                }
            }
        }
    })
});
