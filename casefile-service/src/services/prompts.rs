//! Prompt templates and output schemas, one per action.
//!
//! Schemas use the upstream's OpenAPI-subset type names (`OBJECT`, `STRING`,
//! `NUMBER`, `BOOLEAN`) and are attached to the request as `responseSchema`.

use super::random::{choose, RandomSource};
use crate::models::{
    Action, CaseFile, GetModelAnswerPayload, GetResponsePayload, ScoreDiagnosisPayload,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Business domains a generated case can be themed on.
pub const CASE_TOPICS: [&str; 6] = [
    "SaaS Platform",
    "E-commerce Website",
    "Internal IT Project",
    "Healthcare Software",
    "Financial Services App",
    "Logistics Management",
];

/// Roles the player can be coached as.
pub const PLAYER_ROLES: [&str; 2] = ["Customer Success Manager", "Project Manager"];

/// Prompt text plus the optional schema the upstream must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub prompt: String,
    pub schema: Option<Value>,
}

impl PromptSpec {
    pub fn is_structured(&self) -> bool {
        self.schema.is_some()
    }
}

/// Build the prompt for `action`, reading whatever fields it needs from `payload`.
pub fn build_prompt(
    action: Action,
    payload: Option<Value>,
    random: &dyn RandomSource,
) -> Result<PromptSpec, serde_json::Error> {
    let spec = match action {
        Action::GenerateCase => generate_case(random),
        Action::GetResponse => get_response(&parse_payload(payload)?),
        Action::ScoreDiagnosis => score_diagnosis(&parse_payload(payload)?),
        Action::GetModelAnswer => {
            let payload: GetModelAnswerPayload = parse_payload(payload)?;
            get_model_answer(&payload.case_file)
        }
    };
    Ok(spec)
}

fn parse_payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, serde_json::Error> {
    serde_json::from_value(payload.unwrap_or(Value::Null))
}

fn generate_case(random: &dyn RandomSource) -> PromptSpec {
    let topic = choose(random, &CASE_TOPICS);
    let role = choose(random, &PLAYER_ROLES);

    let prompt = format!(
        "Generate a new, unique case file for a business simulation game. \
         The game helps a {role} improve their probing skills. \
         The theme for this case file should be: {topic}. \
         The JSON object must have \"title\", \"noise\", and \"signal\" properties. \
         \"signal\" must contain \"rootCause\" and \"goal\"."
    );

    PromptSpec {
        prompt,
        schema: Some(object_schema(json!({
            "title": string(),
            "noise": string(),
            "signal": object_schema(json!({
                "rootCause": string(),
                "goal": string(),
            })),
        }))),
    }
}

fn get_response(payload: &GetResponsePayload) -> PromptSpec {
    let case = &payload.case_file;
    let prompt = format!(
        "You are a role-playing AI and a game judge. First, role-play as a frustrated \
         customer based on the scenario. Second, evaluate the user's question.\n\
         SCENARIO: {noise}\n\
         SECRET INFO: The root cause is \"{root_cause}\". The real goal is \"{goal}\".\n\
         USER'S QUESTION: \"{question}\"\n\
         Return a JSON object with \"response\" (string), \"score\" (number, -5 for noise, \
         5 for mixed, 10 for signal), and \"justification\" (string).",
        noise = case.noise,
        root_cause = case.signal.root_cause,
        goal = case.signal.goal,
        question = payload.question,
    );

    PromptSpec {
        prompt,
        schema: Some(object_schema(json!({
            "response": string(),
            "score": { "type": "NUMBER" },
            "justification": string(),
        }))),
    }
}

fn score_diagnosis(payload: &ScoreDiagnosisPayload) -> PromptSpec {
    let prompt = format!(
        "You are a game judge. Compare the user's submitted diagnosis with the correct answer.\n\
         CORRECT ROOT CAUSE: \"{root_cause}\"\n\
         CORRECT GOAL: \"{goal}\"\n\
         USER'S SUBMITTED ROOT CAUSE: \"{submitted_root_cause}\"\n\
         USER'S SUBMITTED GOAL: \"{submitted_goal}\"\n\
         Return a JSON object with \"correctRootCause\" (boolean), \"correctGoal\" (boolean), \
         and \"feedback\" (string).",
        root_cause = payload.signal.root_cause,
        goal = payload.signal.goal,
        submitted_root_cause = payload.submitted_root_cause,
        submitted_goal = payload.submitted_goal,
    );

    PromptSpec {
        prompt,
        schema: Some(object_schema(json!({
            "correctRootCause": boolean(),
            "correctGoal": boolean(),
            "feedback": string(),
        }))),
    }
}

fn get_model_answer(case: &CaseFile) -> PromptSpec {
    let prompt = format!(
        "You are an expert consultant. Based on the case file, provide a brief summary \
         of a perfect \"10/10\" diagnosis.\n\
         INITIAL COMPLAINT: {noise}\n\
         REAL SITUATION: Root cause is \"{root_cause}\". Real goal is \"{goal}\".\n\
         Return a single string with your summary.",
        noise = case.noise,
        root_cause = case.signal.root_cause,
        goal = case.signal.goal,
    );

    // Free text; the upstream answer is relayed verbatim.
    PromptSpec {
        prompt,
        schema: None,
    }
}

fn object_schema(properties: Value) -> Value {
    json!({ "type": "OBJECT", "properties": properties })
}

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn boolean() -> Value {
    json!({ "type": "BOOLEAN" })
}
