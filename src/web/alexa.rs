//! Alexa Skills Kit request and response envelopes.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! platform's JSON is ignored.

use quick_xml::escape::partial_escape;
use std::collections::HashMap;

pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize)]
pub struct AlexaRequest {
    pub request: RequestBody,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    LaunchRequest {},
    IntentRequest {
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Value of a slot, if it was filled with something non-empty.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_ref())
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// SSML fragment to be spoken, without the surrounding `<speak>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SpokenReply {
    ssml: String,
}

impl SpokenReply {
    /// Plain text; markup characters are escaped.
    pub fn text(text: &str) -> Self {
        SpokenReply { ssml: escape_ssml(text) }
    }

    /// Text that already carries SSML markup such as `<break/>`.
    pub fn ssml(fragment: &str) -> Self {
        SpokenReply { ssml: fragment.to_owned() }
    }

    pub fn as_ssml(&self) -> &str {
        &self.ssml
    }
}

fn escape_ssml(text: &str) -> String {
    partial_escape(text).into_owned()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlexaResponse {
    pub version: String,
    pub response: ResponseBody,
    #[serde(default)]
    pub session_attributes: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl AlexaResponse {
    /// Every reply closes the session; `None` sends no speech at all.
    pub fn new(reply: Option<SpokenReply>) -> Self {
        AlexaResponse {
            version: PROTOCOL_VERSION.to_owned(),
            response: ResponseBody {
                output_speech: reply.map(|reply| OutputSpeech {
                    kind: String::from("SSML"),
                    ssml: format!("<speak>{}</speak>", reply.as_ssml()),
                }),
                should_end_session: true,
            },
            session_attributes: HashMap::new(),
        }
    }

    #[cfg(test)]
    pub fn ssml(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(|speech| speech.ssml.as_str())
    }
}
