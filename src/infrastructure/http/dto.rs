//! Data Transfer Objects - Skill 请求/响应信封
//!
//! 入站信封在这里被一次性分类为 [`VoiceEvent`]，之后不再做字符串匹配

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{SpokenResponse, VoiceEvent};

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const CAPTURE_SPEECH_INTENT: &str = "CaptureSpeechIntent";
pub const SPEECH_SLOT: &str = "speech";

// ============================================================================
// Request envelope
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<SessionDto>,
    pub request: SkillRequestDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub new: Option<bool>,
    #[serde(default)]
    pub application: Option<ApplicationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
}

#[derive(Debug, Deserialize)]
pub struct IntentDto {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotDto>,
}

#[derive(Debug, Deserialize)]
pub struct SlotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()?
            .application
            .as_ref()
            .map(|app| app.application_id.as_str())
    }

    /// 分类为封闭的事件类型
    pub fn into_event(self) -> VoiceEvent {
        let request = self.request;
        match (request.request_type.as_str(), request.intent) {
            (LAUNCH_REQUEST, _) => VoiceEvent::SessionStart,
            (INTENT_REQUEST, Some(mut intent)) if intent.name == CAPTURE_SPEECH_INTENT => {
                VoiceEvent::Capture {
                    speech: intent.slots.remove(SPEECH_SLOT).and_then(|slot| slot.value),
                }
            }
            (INTENT_REQUEST, Some(intent)) => {
                VoiceEvent::other(format!("{}:{}", INTENT_REQUEST, intent.name))
            }
            (other, _) => VoiceEvent::other(other),
        }
    }
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SimpleCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: &'static str,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: String) -> Self {
        Self {
            speech_type: "PlainText",
            text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimpleCard {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl From<SpokenResponse> for ResponseEnvelope {
    fn from(spoken: SpokenResponse) -> Self {
        let card = spoken.has_card().then(|| SimpleCard {
            card_type: "Simple",
            title: spoken.card_title,
            content: spoken.card_body,
        });

        Self {
            version: "1.0",
            response: ResponseBody {
                output_speech: OutputSpeech::plain_text(spoken.spoken_text),
                card,
                reprompt: spoken.reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session: spoken.should_end_session,
            },
        }
    }
}
