//! Transactional email through the SendGrid v3 API.
//!
//! When no SendGrid credentials are configured every send is skipped and
//! reported as [`MailOutcome::Skipped`], so callers never fail on mail.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::MailConfig;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("SendGrid returned {status}: {body}")]
    Provider { status: u16, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailOutcome {
    Sent,
    /// Mail is not configured.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub body_html: String,
}

#[derive(Clone)]
pub struct Mailer {
    config: Option<MailConfig>,
    http: reqwest::Client,
}

impl Mailer {
    pub fn new(config: Option<MailConfig>, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_some()
    }

    pub async fn send(&self, message: EmailMessage) -> Result<MailOutcome, MailError> {
        let Some(config) = &self.config else {
            debug!(to = %message.to, subject = %message.subject, "mail not configured, skipping send");
            return Ok(MailOutcome::Skipped);
        };

        let mut recipient = serde_json::json!({ "email": message.to });
        if let Some(name) = &message.to_name {
            recipient["name"] = serde_json::json!(name);
        }

        let body = serde_json::json!({
            "personalizations": [{ "to": [recipient] }],
            "from": { "email": config.from_email },
            "subject": message.subject,
            "content": [{ "type": "text/html", "value": message.body_html }],
        });

        let response = self
            .http
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&config.sendgrid_api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::SendFailed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(to = %message.to, subject = %message.subject, "email sent via SendGrid");
            return Ok(MailOutcome::Sent);
        }

        let body = response.text().await.unwrap_or_default();
        error!(status = %status, error = %body, "SendGrid API error");
        Err(MailError::Provider {
            status: status.as_u16(),
            body,
        })
    }
}

/// Where a scheduled pickup happens, as shown in the confirmation email.
#[derive(Debug, Clone)]
pub enum PickupPlace {
    Address(String),
    DropOff { name: String, address: String },
    Partner { name: String },
}

pub struct ScheduledPickupEmail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub date: NaiveDate,
    pub time_slot: &'a str,
    pub place: Option<PickupPlace>,
    pub notes: Option<&'a str>,
}

pub fn pickup_scheduled(details: &ScheduledPickupEmail<'_>) -> EmailMessage {
    let place = match &details.place {
        Some(PickupPlace::Address(address)) => {
            format!("<li><strong>Address:</strong> {}</li>", escape_html(address))
        }
        Some(PickupPlace::DropOff { name, address }) => format!(
            "<li><strong>Drop-off Location:</strong> {} - {}</li>",
            escape_html(name),
            escape_html(address)
        ),
        Some(PickupPlace::Partner { name }) => {
            format!("<li><strong>Partner Location:</strong> {}</li>", escape_html(name))
        }
        None => String::new(),
    };
    let notes = details
        .notes
        .map(|n| format!("<li><strong>Notes:</strong> {}</li>", escape_html(n)))
        .unwrap_or_default();

    let body_html = format!(
        r#"<h1>Thank you for your donation, {name}!</h1>
<p>Your pickup has been successfully scheduled.</p>
<h2>Pickup Details:</h2>
<ul>
  <li><strong>Date:</strong> {date}</li>
  <li><strong>Time Slot:</strong> {slot}</li>
  {place}
  {notes}
</ul>
<p>Our team will see you then. Thanks for helping us turn unused toys into smiles!</p>
<p>- The ToyCycle Team</p>"#,
        name = escape_html(details.name),
        date = details.date.format("%A, %B %-d, %Y"),
        slot = escape_html(details.time_slot),
    );

    EmailMessage {
        to: details.email.to_string(),
        to_name: Some(details.name.to_string()),
        subject: "Your ToyCycle Pickup is Scheduled!".to_string(),
        body_html,
    }
}

pub fn pickup_completed(name: &str, email: &str) -> EmailMessage {
    let body_html = format!(
        r#"<h1>Thank you, {name}!</h1>
<p>We're writing to let you know that your toy donation pickup has been successfully completed.</p>
<p>Your generosity is already on its way to making a difference. The toys you've donated will soon be cleaned, sorted, and sent to children who will cherish them.</p>
<p>You can track the journey of your donation on your "My Donations" page.</p>
<p>Thank you for being a vital part of the ToyCycle community!</p>
<p>- The ToyCycle Team</p>"#,
        name = escape_html(name),
    );

    EmailMessage {
        to: email.to_string(),
        to_name: Some(name.to_string()),
        subject: "Your ToyCycle Pickup is Complete!".to_string(),
        body_html,
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn scheduled_email_lists_details() {
        let msg = pickup_scheduled(&ScheduledPickupEmail {
            name: "Dana <script>",
            email: "dana@example.com",
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            time_slot: "10:00 - 12:00",
            place: Some(PickupPlace::DropOff {
                name: "Northwood Community Center".into(),
                address: "4500 Northwood Ave".into(),
            }),
            notes: None,
        });

        assert_eq!(msg.subject, "Your ToyCycle Pickup is Scheduled!");
        assert_eq!(msg.to, "dana@example.com");
        assert!(msg.body_html.contains("Friday, March 7, 2025"));
        assert!(msg.body_html.contains("Drop-off Location:</strong> Northwood Community Center - 4500 Northwood Ave"));
        assert!(msg.body_html.contains("Dana &lt;script&gt;"));
        assert!(!msg.body_html.contains("Notes:"));
    }

    #[test]
    fn completed_email_has_subject() {
        let msg = pickup_completed("Sam", "sam@example.com");
        assert_eq!(msg.subject, "Your ToyCycle Pickup is Complete!");
        assert!(msg.body_html.starts_with("<h1>Thank you, Sam!</h1>"));
    }

    #[tokio::test]
    async fn unconfigured_mailer_skips() {
        let mailer = Mailer::new(None, reqwest::Client::new());
        assert!(!mailer.is_enabled());
        let outcome = mailer
            .send(pickup_completed("Sam", "sam@example.com"))
            .await
            .unwrap();
        assert_eq!(outcome, MailOutcome::Skipped);
    }
}
