//! Registration notification email composition.

use crate::config::EmailConfig;
use crate::submission::{display_value, is_falsy, Submission};
use mailchannels_client::{Content, EmailAddress, Personalization, SendRequest};

/// Render the notification body for one submission.
///
/// Every embedded value goes through [`display_value`], so user input is
/// HTML-escaped and absent optional fields read as "Not provided".
fn render_html_body(submission: &Submission) -> String {
    let field = |name: &str| display_value(submission.get(name));
    let coc = if is_falsy(submission.get("coc")) { "No" } else { "Yes" };

    format!(
        "<h2>New Hack the Valley Registration</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>University:</strong> {university}</p>\n\
         <p><strong>Year:</strong> {year}</p>\n\
         <p><strong>Major:</strong> {major}</p>\n\
         <p><strong>Experience Level:</strong> {experience}</p>\n\
         <p><strong>Dietary:</strong> {dietary}</p>\n\
         <p><strong>T-Shirt:</strong> {tshirt}</p>\n\
         <p><strong>Agreed to CoC:</strong> {coc}</p>\n\
         <p><strong>Submitted:</strong> {timestamp}</p>\n",
        name = field("name"),
        email = field("email"),
        university = field("university"),
        year = field("year"),
        major = field("major"),
        experience = field("experience"),
        dietary = field("dietary"),
        tshirt = field("tshirt"),
        coc = coc,
        timestamp = field("timestamp"),
    )
}

/// Build the MailChannels payload for one submission.
pub fn compose_registration_email(submission: &Submission, config: &EmailConfig) -> SendRequest {
    SendRequest {
        personalizations: vec![Personalization {
            to: vec![EmailAddress::new(config.to_addr.clone())],
        }],
        from: EmailAddress::named(config.from_addr.clone(), config.from_name.clone()),
        reply_to: Some(EmailAddress::new(display_value(submission.get("email")))),
        subject: format!("New registration: {}", display_value(submission.get("name"))),
        content: vec![Content::html(render_html_body(submission))],
    }
}
