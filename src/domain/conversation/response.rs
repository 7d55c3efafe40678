//! Conversation Context - Spoken Response

/// 对一个对话事件的语音响应
///
/// `card_title` / `card_body` 同时为空时表示不附带卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenResponse {
    pub spoken_text: String,
    pub card_title: String,
    pub card_body: String,
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}

impl SpokenResponse {
    /// 只有语音、不结束会话的响应
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            spoken_text: text.into(),
            card_title: String::new(),
            card_body: String::new(),
            reprompt: None,
            should_end_session: false,
        }
    }

    pub fn with_card(mut self, title: impl Into<String>, body: impl Into<String>) -> Self {
        self.card_title = title.into();
        self.card_body = body.into();
        self
    }

    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn end_session(mut self, should_end_session: bool) -> Self {
        self.should_end_session = should_end_session;
        self
    }

    pub fn has_card(&self) -> bool {
        !self.card_title.is_empty() || !self.card_body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let resp = SpokenResponse::speak("hi")
            .with_card("Title", "Body")
            .with_reprompt("again?");
        assert_eq!(resp.spoken_text, "hi");
        assert!(resp.has_card());
        assert_eq!(resp.reprompt.as_deref(), Some("again?"));
        assert!(!resp.should_end_session);
    }

    #[test]
    fn test_no_card_by_default() {
        let resp = SpokenResponse::speak("hi").end_session(true);
        assert!(!resp.has_card());
        assert!(resp.should_end_session);
    }
}
