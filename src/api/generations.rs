use super::{Ack, ApiClient};
use crate::error::ApiError;
use crate::state::{Generation, WireGeneration};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const GENERATIONS: &str = "/generations";

#[derive(Serialize)]
struct GenId {
    gen_id: u64,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    generations: Vec<WireGeneration>,
}

#[derive(Debug, Deserialize)]
struct SavedResponse {
    #[serde(default)]
    saved_generations: Vec<WireGeneration>,
}

#[derive(Debug, Deserialize)]
struct OneResponse {
    #[serde(alias = "generations")]
    generation: WireGeneration,
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    #[serde(default)]
    generations: Vec<Value>,
}

fn decode_all(generations: Vec<WireGeneration>) -> Vec<Generation> {
    generations.into_iter().map(Generation::from).collect()
}

impl ApiClient {
    pub async fn generations(&self) -> Result<Vec<Generation>, ApiError> {
        let request = self.authorized(self.get(GENERATIONS));
        let response: ListResponse = self.send(request).await?;
        Ok(decode_all(response.generations))
    }

    pub async fn generation(&self, id: u64) -> Result<Generation, ApiError> {
        let request = self.authorized(self.get(&format!("{GENERATIONS}/{id}")));
        let response: OneResponse = self.send(request).await?;
        Ok(response.generation.into())
    }

    pub async fn saved_generations(&self) -> Result<Vec<Generation>, ApiError> {
        let request = self.authorized(self.get(&format!("{GENERATIONS}/saved")));
        let response: SavedResponse = self.send(request).await?;
        Ok(decode_all(response.saved_generations))
    }

    /// Raw values, so the exported file holds exactly what the backend sent.
    pub async fn export_generations(&self) -> Result<Vec<Value>, ApiError> {
        let request = self.authorized(self.get(&format!("{GENERATIONS}/export")));
        let response: ExportResponse = self.send(request).await?;
        Ok(response.generations)
    }

    pub async fn save_generation(&self, id: u64) -> Result<(), ApiError> {
        let request = self.authorized(self.post(&format!("{GENERATIONS}/save"), &GenId { gen_id: id }));
        self.send::<Ack>(request).await?;
        Ok(())
    }

    pub async fn unsave_generation(&self, id: u64) -> Result<(), ApiError> {
        let request =
            self.authorized(self.post(&format!("{GENERATIONS}/unsave"), &GenId { gen_id: id }));
        self.send::<Ack>(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode;
    use crate::state::{Content, GenerationKind};

    #[test]
    fn test_list_body() {
        let body = r##"{
            "success": true,
            "generations": [
                {"id": 1, "type": "video_script", "prompt": "torta", "content": "# Guión", "created_at": "2025-01-01"},
                {"id": 2, "type": "newsletter", "prompt": "ia", "content": "{\"title\":\"T\",\"subject\":\"S\",\"content\":[\"x\"]}", "created_at": "2025-01-02"}
            ]
        }"##;
        let response: ListResponse = decode(200, true, body).unwrap();
        let generations = decode_all(response.generations);
        assert_eq!(generations[0].content, Content::Markdown("# Guión".into()));
        assert_eq!(generations[1].kind, GenerationKind::Newsletter);
        assert!(matches!(generations[1].content, Content::Newsletter(_)));
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let response: SavedResponse = decode(200, true, r#"{"success": true}"#).unwrap();
        assert!(response.saved_generations.is_empty());
    }

    #[test]
    fn test_gen_id_body() {
        let body = serde_json::to_value(GenId { gen_id: 9 }).unwrap();
        assert_eq!(body, serde_json::json!({"gen_id": 9}));
    }
}
