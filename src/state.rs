use leptos::logging::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target_audience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_context: String,
    #[serde(default)]
    pub generations: Vec<u64>,
    #[serde(default)]
    pub favorite_generations: Vec<u64>,
}

impl Profile {
    /// Both mandatory setup fields hold something other than whitespace.
    pub fn is_configured(&self) -> bool {
        !self.content_type.trim().is_empty() && !self.target_audience.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    VideoScript,
    ContentIdea,
    Newsletter,
    Thread,
}

impl GenerationKind {
    pub const ALL: [GenerationKind; 4] = [
        GenerationKind::VideoScript,
        GenerationKind::ContentIdea,
        GenerationKind::Newsletter,
        GenerationKind::Thread,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => "Guión de video",
            GenerationKind::ContentIdea => "Idea de contenido",
            GenerationKind::Newsletter => "Newsletter",
            GenerationKind::Thread => "Hilo de X",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => "video-script",
            GenerationKind::ContentIdea => "content-idea",
            GenerationKind::Newsletter => "newsletter",
            GenerationKind::Thread => "thread",
        }
    }

    pub fn route(self) -> String {
        format!("/generate/{}", self.slug())
    }

    pub fn endpoint(self) -> String {
        format!("/generate/{}", self.slug())
    }

    pub fn title(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => "Generar guión de video",
            GenerationKind::ContentIdea => "Generar ideas de contenido",
            GenerationKind::Newsletter => "Generar Newsletter",
            GenerationKind::Thread => "Generar Hilo de X",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => {
                "ej. tutorial paso a paso de como hacer una torta de chocolate"
            }
            GenerationKind::ContentIdea => "ej. ideas de tips de Python para principiantes",
            GenerationKind::Newsletter => {
                "ej. newsletter sobre como utilizar la IA eficientemente como programadores"
            }
            GenerationKind::Thread => {
                "ej. hilo explicando una funcionalidad poco conocida pero muy util de JavaScript"
            }
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => "Generar guión",
            GenerationKind::ContentIdea => "Generar idea",
            GenerationKind::Newsletter => "Generar newsletter",
            GenerationKind::Thread => "Generar hilo",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            GenerationKind::VideoScript => "🎬",
            GenerationKind::ContentIdea => "💡",
            GenerationKind::Newsletter => "📰",
            GenerationKind::Thread => "🧵",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Newsletter {
    pub title: String,
    pub subject: String,
    pub content: Vec<String>,
}

impl Newsletter {
    pub fn body(&self) -> String {
        self.content.join("\n\n")
    }
}

/// Generated payload, decoded once per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Markdown(String),
    Newsletter(Newsletter),
    Thread(Vec<String>),
}

impl Content {
    /// Decodes a payload that is either a JSON-encoded string or an already
    /// structured JSON value.
    pub fn decode(kind: GenerationKind, value: Value) -> Self {
        match value {
            Value::String(raw) => Self::decode_str(kind, raw),
            Value::Null => Content::Markdown(String::new()),
            structured => match kind {
                GenerationKind::Newsletter | GenerationKind::Thread => {
                    let raw = structured.to_string();
                    Self::from_structured(kind, structured).unwrap_or_else(|| {
                        warn!("Unexpected {kind:?} payload, rendering as text");
                        Content::Markdown(raw)
                    })
                }
                _ => Content::Markdown(structured.to_string()),
            },
        }
    }

    pub fn decode_str(kind: GenerationKind, raw: String) -> Self {
        match kind {
            GenerationKind::VideoScript | GenerationKind::ContentIdea => Content::Markdown(raw),
            GenerationKind::Newsletter | GenerationKind::Thread => {
                match serde_json::from_str::<Value>(&raw)
                    .ok()
                    .and_then(|value| Self::from_structured(kind, value))
                {
                    Some(content) => content,
                    None => {
                        warn!("Could not decode {kind:?} content, rendering as text");
                        Content::Markdown(raw)
                    }
                }
            }
        }
    }

    fn from_structured(kind: GenerationKind, value: Value) -> Option<Self> {
        match kind {
            GenerationKind::Newsletter => serde_json::from_value(value).ok().map(Content::Newsletter),
            GenerationKind::Thread => serde_json::from_value(value).ok().map(Content::Thread),
            _ => None,
        }
    }

    /// Length used to decide whether a preview is truncated.
    pub fn text_len(&self) -> usize {
        match self {
            Content::Markdown(text) => text.chars().count(),
            Content::Newsletter(newsletter) => newsletter.body().chars().count(),
            Content::Thread(posts) => posts.len(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireGeneration {
    id: u64,
    #[serde(rename = "type")]
    kind: GenerationKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    prompt: String,
    #[serde(default)]
    content: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    created_at: String,
    #[serde(default)]
    saved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub id: u64,
    pub kind: GenerationKind,
    pub prompt: String,
    pub content: Content,
    pub created_at: String,
    pub saved: bool,
}

impl From<WireGeneration> for Generation {
    fn from(wire: WireGeneration) -> Self {
        Self {
            id: wire.id,
            kind: wire.kind,
            prompt: wire.prompt,
            content: Content::decode(wire.kind, wire.content),
            created_at: wire.created_at,
            saved: wire.saved,
        }
    }
}

/// One configurable profile field, as sent to the settings endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    ContentType(String),
    TargetAudience(String),
    AdditionalContext(String),
}

impl Setting {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Setting::ContentType(_) => "/settings/content-type",
            Setting::TargetAudience(_) => "/settings/target",
            Setting::AdditionalContext(_) => "/settings/additional-context",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Setting::ContentType(_) => "content_type",
            Setting::TargetAudience(_) => "target_audience",
            Setting::AdditionalContext(_) => "additional_context",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Setting::ContentType(value)
            | Setting::TargetAudience(value)
            | Setting::AdditionalContext(value) => value,
        }
    }

    pub fn body(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert(self.key().to_string(), Value::String(self.value().to_string()));
        Value::Object(body)
    }

    pub fn apply(&self, profile: &mut Profile) {
        let value = self.value().to_string();
        match self {
            Setting::ContentType(_) => profile.content_type = value,
            Setting::TargetAudience(_) => profile.target_audience = value,
            Setting::AdditionalContext(_) => profile.additional_context = value,
        }
    }
}

#[cfg(test)]
pub(crate) fn profile(content_type: &str, target_audience: &str) -> Profile {
    Profile {
        id: 1,
        username: "lucia".into(),
        content_type: content_type.into(),
        target_audience: target_audience.into(),
        additional_context: String::new(),
        generations: vec![],
        favorite_generations: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_nulls() {
        let profile: Profile = serde_json::from_value(json!({
            "id": 7,
            "username": "ana",
            "content_type": null,
            "target_audience": "devs",
            "additional_context": null,
            "generations": [1, 2],
            "favorite_generations": []
        }))
        .unwrap();
        assert_eq!(profile.content_type, "");
        assert_eq!(profile.generations, vec![1, 2]);
        assert!(!profile.is_configured());
    }

    #[test]
    fn test_is_configured() {
        assert!(profile("tutoriales", "estudiantes").is_configured());
        assert!(!profile("   ", "estudiantes").is_configured());
        assert!(!profile("tutoriales", "\n\t").is_configured());
        assert!(!profile("", "").is_configured());
    }

    #[test]
    fn test_decode_newsletter() {
        let raw = r#"{"title":"IA","subject":"Semana 1","content":["Hola","Adiós"]}"#;
        let content = Content::decode(GenerationKind::Newsletter, json!(raw));
        let Content::Newsletter(newsletter) = content else {
            panic!("expected newsletter, got {content:?}");
        };
        assert_eq!(newsletter.title, "IA");
        assert_eq!(newsletter.body(), "Hola\n\nAdiós");

        let structured = json!({"title": "T", "subject": "S", "content": ["a"]});
        assert!(matches!(
            Content::decode(GenerationKind::Newsletter, structured),
            Content::Newsletter(_)
        ));
    }

    #[test]
    fn test_decode_thread() {
        assert_eq!(
            Content::decode(GenerationKind::Thread, json!(r#"["uno","dos"]"#)),
            Content::Thread(vec!["uno".into(), "dos".into()])
        );
        assert_eq!(
            Content::decode(GenerationKind::Thread, json!(["uno"])),
            Content::Thread(vec!["uno".into()])
        );
    }

    #[test]
    fn test_decode_fallback() {
        assert_eq!(
            Content::decode(GenerationKind::Thread, json!("no es json")),
            Content::Markdown("no es json".into())
        );
        assert_eq!(
            Content::decode(GenerationKind::Newsletter, json!({"title": 3})),
            Content::Markdown(r#"{"title":3}"#.into())
        );
        // Plain kinds never try to parse.
        assert_eq!(
            Content::decode(GenerationKind::VideoScript, json!("[1,2]")),
            Content::Markdown("[1,2]".into())
        );
    }

    #[test]
    fn test_wire_generation() {
        let wire: WireGeneration = serde_json::from_value(json!({
            "id": 12,
            "type": "thread",
            "prompt": "hilo",
            "content": "[\"a\",\"b\"]",
            "created_at": "2025-03-01T10:00:00"
        }))
        .unwrap();
        let generation = Generation::from(wire);
        assert_eq!(generation.kind, GenerationKind::Thread);
        assert_eq!(generation.content, Content::Thread(vec!["a".into(), "b".into()]));
        assert!(!generation.saved);
    }

    #[test]
    fn test_wire_generation_nulls() {
        let wire: WireGeneration = serde_json::from_value(json!({
            "id": 3,
            "type": "content_idea",
            "prompt": null,
            "content": "idea",
            "created_at": null
        }))
        .unwrap();
        let generation = Generation::from(wire);
        assert_eq!(generation.prompt, "");
        assert_eq!(generation.created_at, "");
        assert_eq!(generation.content, Content::Markdown("idea".into()));
    }

    #[test]
    fn test_setting() {
        let setting = Setting::TargetAudience("estudiantes".into());
        assert_eq!(setting.endpoint(), "/settings/target");
        assert_eq!(setting.body(), json!({"target_audience": "estudiantes"}));

        let mut profile = profile("", "");
        setting.apply(&mut profile);
        Setting::ContentType("tutoriales".into()).apply(&mut profile);
        assert_eq!(profile.target_audience, "estudiantes");
        assert!(profile.is_configured());
    }

    #[test]
    fn test_kind_routes() {
        assert_eq!(GenerationKind::VideoScript.route(), "/generate/video-script");
        assert_eq!(GenerationKind::ContentIdea.endpoint(), "/generate/content-idea");
        let kind: GenerationKind = serde_json::from_value(json!("content_idea")).unwrap();
        assert_eq!(kind, GenerationKind::ContentIdea);
    }
}
