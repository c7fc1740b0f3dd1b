use super::{CaseFile, Signal};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Raw inbound body: `{ "action": ..., "payload": ... }`.
///
/// Both fields are loosely typed here; a missing or non-string action is
/// reported as an invalid action rather than a malformed body.
#[derive(Debug, Default)]
pub struct ActionRequest {
    pub action: Option<Value>,
    pub payload: Option<Value>,
}

impl ActionRequest {
    /// Pick `action` and `payload` out of a parsed body.
    ///
    /// Only objects have fields: arrays and scalars yield an empty request.
    /// Repeated keys were already collapsed by the parser, last one wins.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                action: fields.remove("action"),
                payload: fields.remove("payload").filter(|p| !p.is_null()),
            },
            _ => Self::default(),
        }
    }

    /// The action name, if one was sent as a string.
    pub fn action_name(&self) -> Option<&str> {
        self.action.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GenerateCase,
    GetResponse,
    ScoreDiagnosis,
    GetModelAnswer,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::GenerateCase,
        Action::GetResponse,
        Action::ScoreDiagnosis,
        Action::GetModelAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GenerateCase => "generateCase",
            Action::GetResponse => "getResponse",
            Action::ScoreDiagnosis => "scoreDiagnosis",
            Action::GetModelAnswer => "getModelAnswer",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponsePayload {
    pub question: String,
    pub case_file: CaseFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDiagnosisPayload {
    pub signal: Signal,
    pub submitted_root_cause: String,
    pub submitted_goal: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetModelAnswerPayload {
    pub case_file: CaseFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_actions() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn action_names_are_case_sensitive() {
        assert!("GenerateCase".parse::<Action>().is_err());
        assert_eq!(
            "bogus".parse::<Action>(),
            Err(UnknownAction("bogus".to_string()))
        );
    }

    fn request(raw: &str) -> ActionRequest {
        ActionRequest::from_body(serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn request_without_payload_deserializes() {
        let req = request(r#"{"action":"bogus"}"#);
        assert_eq!(req.action_name(), Some("bogus"));
        assert!(req.payload.is_none());
    }

    #[test]
    fn non_string_action_has_no_name() {
        let req = request(r#"{"action":42}"#);
        assert_eq!(req.action_name(), None);
    }

    #[test]
    fn arrays_and_scalars_carry_no_action() {
        for raw in [r#"["generateCase"]"#, r#"["generateCase", {}]"#, r#""generateCase""#, "7"] {
            let req = request(raw);
            assert!(req.action.is_none(), "{raw}");
            assert!(req.payload.is_none(), "{raw}");
        }
    }

    #[test]
    fn repeated_action_key_keeps_last_value() {
        let req = request(r#"{"action":"bogus","action":"generateCase"}"#);
        assert_eq!(req.action_name(), Some("generateCase"));
    }
}
