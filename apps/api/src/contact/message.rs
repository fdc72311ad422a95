use crate::contact::models::ContactSubmission;
use crate::mailer::OutgoingMail;

pub const ACK_MESSAGE: &str =
    "Thank you for your interest! I'll get back to you within 24 hours with the requested information.";
pub const ACK_NOTE: &str = "Please check your email (including spam folder) for my response.";

/// Joined tag ids, or "None" when nothing was requested.
pub fn requested_info_line(submission: &ContactSubmission) -> String {
    if submission.requested_info.is_empty() {
        return "None".to_string();
    }
    submission
        .requested_info
        .iter()
        .map(|tag| tag.id())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the plain-text notification sent to the site owner.
pub fn compose_mail(submission: &ContactSubmission, from: &str, to: &str) -> OutgoingMail {
    let text = format!(
        "Name: {}\nEmail: {}\nCompany: {}\nPosition: {}\nMessage: {}\nRequested Info: {}",
        submission.name.trim(),
        submission.email.trim(),
        submission.company.trim(),
        submission.position.trim(),
        submission.message.trim(),
        requested_info_line(submission),
    );

    OutgoingMail {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!(
            "Recruiter Contact Form Submission from {}",
            submission.name.trim()
        ),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::models::RequestedInfo;

    fn jane() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@co.com".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            message: "Hi".to_string(),
            requested_info: vec![RequestedInfo::Cv, RequestedInfo::Availability],
        }
    }

    #[test]
    fn test_compose_embeds_every_field() {
        let mail = compose_mail(&jane(), "bot@site.dev", "me@site.dev");
        assert_eq!(mail.from, "bot@site.dev");
        assert_eq!(mail.to, "me@site.dev");
        assert_eq!(mail.subject, "Recruiter Contact Form Submission from Jane Doe");
        assert_eq!(
            mail.text,
            "Name: Jane Doe\nEmail: jane@co.com\nCompany: Acme\nPosition: Engineer\nMessage: Hi\nRequested Info: cv, availability"
        );
    }

    #[test]
    fn test_empty_requested_info_renders_none() {
        let mut s = jane();
        s.requested_info.clear();
        assert_eq!(requested_info_line(&s), "None");
        assert!(compose_mail(&s, "a@b.co", "c@d.co")
            .text
            .ends_with("Requested Info: None"));
    }

    #[test]
    fn test_multiline_message_is_kept() {
        let mut s = jane();
        s.message = "Line one\nLine two".to_string();
        let mail = compose_mail(&s, "a@b.co", "c@d.co");
        assert!(mail.text.contains("Message: Line one\nLine two\n"));
    }
}
