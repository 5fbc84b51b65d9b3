use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStyle {
    Formal,
    #[default]
    Friendly,
    Humorous,
    Caring,
    Professional,
    Casual,
}

/// Static prompt material for one reply style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
}

impl ReplyStyle {
    /// Every style, in catalogue order.
    pub const ALL: [ReplyStyle; 6] = [
        ReplyStyle::Formal,
        ReplyStyle::Friendly,
        ReplyStyle::Humorous,
        ReplyStyle::Caring,
        ReplyStyle::Professional,
        ReplyStyle::Casual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyStyle::Formal => "formal",
            ReplyStyle::Friendly => "friendly",
            ReplyStyle::Humorous => "humorous",
            ReplyStyle::Caring => "caring",
            ReplyStyle::Professional => "professional",
            ReplyStyle::Casual => "casual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|style| style.as_str() == wanted)
    }

    pub fn profile(&self) -> StyleProfile {
        match self {
            ReplyStyle::Formal => StyleProfile {
                name: "Formal",
                description: "Formal, polite language suited to business or ceremonial occasions",
                instruction: "Use a formal and polite register with careful wording and a dignified tone.",
            },
            ReplyStyle::Friendly => StyleProfile {
                name: "Friendly",
                description: "Warm and kind, suited to everyday chats between friends",
                instruction: "Use a friendly, warm register that sounds approachable and natural.",
            },
            ReplyStyle::Humorous => StyleProfile {
                name: "Humorous",
                description: "Light-hearted and funny, good for livening up the mood",
                instruction: "Use a humorous, relaxed register; playful remarks or emoji are welcome.",
            },
            ReplyStyle::Caring => StyleProfile {
                name: "Caring",
                description: "Considerate and attentive, suited to comforting someone or showing care",
                instruction: "Use a caring, considerate register that expresses concern and understanding.",
            },
            ReplyStyle::Professional => StyleProfile {
                name: "Professional",
                description: "Rigorous and precise, suited to work discussions",
                instruction: "Use a professional, rigorous register with clear logic and precise wording.",
            },
            ReplyStyle::Casual => StyleProfile {
                name: "Casual",
                description: "Relaxed and easy-going, suited to informal chatting",
                instruction: "Use a relaxed, casual register; internet slang and emoji are fine.",
            },
        }
    }

    pub fn info(&self) -> StyleInfo {
        let profile = self.profile();
        StyleInfo {
            value: *self,
            name: profile.name.to_string(),
            description: profile.description.to_string(),
        }
    }
}

impl std::fmt::Display for ReplyStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReplyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(|s| s.as_str()).collect();
            format!("unknown reply style '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

/// Public listing entry for a reply style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleInfo {
    pub value: ReplyStyle,
    pub name: String,
    pub description: String,
}
