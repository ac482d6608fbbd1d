mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use toycycle_api::{
    dto::chat::{ChatRequest, ChatTurn},
    llm::{ChatMessage, ChatModel, FunctionCall, LlmError, ToolCall, ToolSpec},
    services::{assistant_service, dashboard_service},
};

/// Replays canned replies and records every conversation it was sent.
struct Scripted {
    replies: Mutex<Vec<ChatMessage>>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl Scripted {
    fn new(mut replies: Vec<ChatMessage>) -> Arc<Self> {
        replies.reverse();
        Arc::new(Self {
            replies: Mutex::new(replies),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChatModel for Scripted {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _tools: &[ToolSpec],
    ) -> Result<ChatMessage, LlmError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.replies.lock().unwrap().pop().ok_or(LlmError::EmptyResponse)
    }
}

fn tool_request(name: &str, arguments: &str) -> ChatMessage {
    ChatMessage {
        role: "assistant".into(),
        content: None,
        tool_calls: Some(vec![ToolCall {
            id: "call_1".into(),
            kind: "function".into(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }]),
        tool_call_id: None,
    }
}

#[tokio::test]
async fn chat_without_model_uses_fallback_reply() -> anyhow::Result<()> {
    let (state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let reply = assistant_service::chat(
        &state,
        &donor,
        ChatRequest {
            history: vec![],
            prompt: "hello".into(),
        },
    )
    .await?
    .data
    .expect("reply");
    assert_eq!(reply.text, assistant_service::NOT_CONFIGURED_REPLY);
    Ok(())
}

#[tokio::test]
async fn chat_schedules_pickup_through_tool() -> anyhow::Result<()> {
    let (mut state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let model = Scripted::new(vec![
        tool_request(
            "schedule_pickup",
            r#"{"pickup_date":"2026-11-20","time_slot":"1pm - 4pm","pickup_type":"drop-off","location_id":2}"#,
        ),
        ChatMessage::assistant("All set for November 20th!"),
    ]);
    state.llm = Some(model.clone());

    let reply = assistant_service::chat(
        &state,
        &donor,
        ChatRequest {
            history: vec![ChatTurn {
                role: "model".into(),
                content: "How can I help?".into(),
            }],
            prompt: "Please book a drop-off at the library on Nov 20".into(),
        },
    )
    .await?
    .data
    .expect("reply");
    assert_eq!(reply.text, "All set for November 20th!");

    let seen = model.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0][0].role, "system");
    let tool_result = seen[1].last().expect("tool result");
    assert_eq!(tool_result.role, "tool");
    assert_eq!(tool_result.tool_call_id.as_deref(), Some("call_1"));
    assert!(tool_result.content.as_deref().unwrap_or_default().contains("\"success\":true"));

    let date = chrono::NaiveDate::from_ymd_opt(2026, 11, 20).expect("date");
    let pickups = toycycle_api::services::pickup_service::list_for_date(&state, &donor, date)
        .await?
        .data
        .expect("list");
    assert_eq!(pickups.items.len(), 1);
    assert_eq!(pickups.items[0].pickup.location_id, Some(2));
    assert_eq!(pickups.items[0].pickup.email, "dana@example.com");
    Ok(())
}

#[tokio::test]
async fn tool_validation_errors_go_back_to_the_model() -> anyhow::Result<()> {
    let (mut state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;

    let model = Scripted::new(vec![
        tool_request(
            "schedule_pickup",
            r#"{"pickup_date":"2026-11-20","time_slot":"1pm - 4pm","pickup_type":"my-address","address":"short"}"#,
        ),
        ChatMessage::assistant("Could you share your full address?"),
    ]);
    state.llm = Some(model.clone());

    let reply = assistant_service::chat(
        &state,
        &donor,
        ChatRequest {
            history: vec![],
            prompt: "Pick up from my place".into(),
        },
    )
    .await?
    .data
    .expect("reply");
    assert_eq!(reply.text, "Could you share your full address?");

    let seen = model.seen.lock().unwrap().clone();
    let tool_result = seen[1].last().expect("tool result");
    let content = tool_result.content.clone().unwrap_or_default();
    assert!(content.contains("\"success\":false"));
    assert!(content.contains("Please enter a valid address."));
    Ok(())
}

#[tokio::test]
async fn impact_report_uses_model_text() -> anyhow::Result<()> {
    let (mut state, _admin) = common::setup_state().await?;
    let donor = common::register_donor(&state, "Dana Donor", "dana@example.com").await?;
    state.llm = Some(Scripted::new(vec![ChatMessage::assistant(
        "Dana, your toys made kids smile!",
    )]));

    let report = dashboard_service::impact_report(&state, &donor)
        .await?
        .data
        .expect("report");
    assert!(report.generated);
    assert_eq!(report.report, "Dana, your toys made kids smile!");
    assert_eq!(report.stats.user_donations, Some(0));
    Ok(())
}
