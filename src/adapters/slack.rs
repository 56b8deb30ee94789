//! Slack slash command transport
//!
//! Decodes the `application/x-www-form-urlencoded` body Slack posts for a
//! slash command, checks the verification token, runs the roll and builds the
//! JSON reply Slack renders.

use crate::core::roller::{to_reply, DiceRoller};
use crate::core::{CommandTokenProvider, DieSource, FormattedResponse, RollReply};
use crate::utils::error::{DiceRollerError, Result};
use serde::{Deserialize, Serialize};

/// The fields of a slash command invocation this handler cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommand {
    pub token: Option<String>,
    pub user_name: Option<String>,
    pub command: Option<String>,
    pub channel_name: Option<String>,
    pub text: Option<String>,
}

impl SlashCommand {
    /// Blank values are treated as absent. Repeated keys keep the first value.
    pub fn from_form(body: &str) -> Self {
        let mut command = SlashCommand::default();

        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "token" => &mut command.token,
                "user_name" => &mut command.user_name,
                "command" => &mut command.command,
                "channel_name" => &mut command.channel_name,
                "text" => &mut command.text,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        command
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub title: String,
    pub fallback: String,
    pub fields: Vec<AttachmentField>,
    pub mrkdwn_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub response_type: String,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl SlackMessage {
    pub fn from_response(response: FormattedResponse, response_type: &str) -> Self {
        Self {
            response_type: response_type.to_string(),
            text: response.headline.clone(),
            attachments: vec![Attachment {
                title: response.headline,
                fallback: response.summary,
                fields: vec![
                    AttachmentField {
                        title: "Dice rolls".to_string(),
                        value: response.dice_field,
                        short: false,
                    },
                    AttachmentField {
                        title: "Sum".to_string(),
                        value: response.sum_field,
                        short: true,
                    },
                ],
                mrkdwn_in: vec!["fields".to_string()],
            }],
        }
    }
}

/// A rolled result is posted as a message; a rejection is a bare string,
/// which Slack shows only to the invoking user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlackReply {
    Message(SlackMessage),
    Plain(String),
}

impl SlackReply {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct SlashCommandHandler<C: CommandTokenProvider> {
    config: C,
    roller: DiceRoller,
}

impl<C: CommandTokenProvider> SlashCommandHandler<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            roller: DiceRoller::new(),
        }
    }

    pub fn handle(&self, body: &str) -> Result<SlackReply> {
        self.handle_with(body, &mut rand::rng())
    }

    /// Fails with `Unauthorized` when the token is missing or wrong; the
    /// roller is never reached in that case.
    pub fn handle_with<S: DieSource + ?Sized>(
        &self,
        body: &str,
        source: &mut S,
    ) -> Result<SlackReply> {
        let command = SlashCommand::from_form(body);

        if command.token.as_deref() != Some(self.config.expected_token()) {
            tracing::error!(
                channel = command.channel_name.as_deref().unwrap_or("-"),
                "Request token does not match expected"
            );
            return Err(DiceRollerError::Unauthorized);
        }

        let (Some(user), Some(text)) = (command.user_name.as_deref(), command.text.as_deref())
        else {
            tracing::info!("Slash command without user or text");
            let reply = to_reply(&DiceRollerError::EmptyNotation);
            return Ok(reply_for(reply, self.config.response_type()));
        };

        tracing::info!(
            user,
            command = command.command.as_deref().unwrap_or("-"),
            channel = command.channel_name.as_deref().unwrap_or("-"),
            "Handling slash command"
        );

        let reply = self.roller.handle_with(user, text, source);
        Ok(reply_for(reply, self.config.response_type()))
    }
}

fn reply_for(reply: RollReply, response_type: &str) -> SlackReply {
    match reply {
        RollReply::Rolled(response) => {
            SlackReply::Message(SlackMessage::from_response(response, response_type))
        }
        RollReply::Rejected(message) => SlackReply::Plain(message),
    }
}
