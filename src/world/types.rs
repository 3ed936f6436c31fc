use serde::{Deserialize, Serialize};

/// One entry of the world list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldItem {
    pub world_id: String,
    pub name: String,
}

impl WorldItem {
    /// Label shown in the world picker.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.world_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldResponse {
    pub items: Option<Vec<WorldItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldDetail {
    pub world_id: String,
    pub name: String,
    pub seed: i64,
    pub radius: f32,
    pub version: String,
    pub created_at: String,
    pub dirty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_world_list() {
        let json = r#"{"items":[{"worldId":"w-1","name":"Alpha"},{"worldId":"w-2","name":"Beta"}]}"#;
        let response: WorldResponse = serde_json::from_str(json).unwrap();
        let items = response.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].world_id, "w-2");
        assert_eq!(items[0].label(), "Alpha (w-1)");
    }

    #[test]
    fn list_without_items_is_none() {
        let response: WorldResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_none());
        let response: WorldResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(response.items.is_none());
    }

    #[test]
    fn parses_world_detail() {
        let json = r#"{
            "worldId": "w-7",
            "name": "Petri",
            "seed": 9007199254740993,
            "radius": 512,
            "version": "1.4.0",
            "createdAt": "2025-11-02T10:00:00Z",
            "dirty": true
        }"#;
        let detail: WorldDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.world_id, "w-7");
        assert_eq!(detail.seed, 9_007_199_254_740_993);
        assert_eq!(detail.radius, 512.0);
        assert_eq!(detail.created_at, "2025-11-02T10:00:00Z");
        assert!(detail.dirty);
    }

    #[test]
    fn detail_fields_default_when_missing() {
        let detail: WorldDetail = serde_json::from_str(r#"{"worldId":"w-3"}"#).unwrap();
        assert_eq!(detail.radius, 0.0);
        assert!(detail.name.is_empty());
        assert!(!detail.dirty);
    }
}
