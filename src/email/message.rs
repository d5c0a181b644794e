//! Message construction and HTML escaping

/// A fully-populated transactional email
///
/// Constructed per request and owned by the dispatch call that sends it.
/// HTML bodies are built only through the constructors below, which escape
/// every untrusted field; text bodies are plain and unescaped.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub reply_to: Option<String>,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Escape the five HTML-special characters in untrusted input
///
/// Values interpolated into an HTML body must pass through here first so a
/// donor name like `<script>` cannot inject markup into the rendered email.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

impl EmailMessage {
    /// Thank-you receipt sent to a donor after a completed payment
    pub fn donation_receipt(
        from: &str,
        to: &str,
        name: &str,
        amount: f64,
        transaction_id: &str,
    ) -> Self {
        let subject = "Thank you for your donation".to_string();

        let html_body = format!(
            "<h2>Thank You, {name}!</h2>\n\
             <p>We received your donation of ${amount}.</p>\n\
             <p><strong>Transaction ID:</strong> {txn}</p>\n\
             <p>Your support makes our work possible. We will send you updates \
             on the impact your donation is making.</p>\n\
             <p>Best regards,<br>The Team</p>",
            name = escape_html(name),
            amount = amount,
            txn = escape_html(transaction_id),
        );

        let text_body = format!(
            "Thank you, {name}!\n\n\
             We received your donation of ${amount}.\n\
             Transaction ID: {transaction_id}\n\n\
             Your support makes our work possible. We will send you updates \
             on the impact your donation is making.\n\n\
             Best regards,\nThe Team\n",
        );

        Self {
            from: from.to_string(),
            reply_to: None,
            to: to.to_string(),
            subject,
            html_body,
            text_body,
        }
    }

    /// Join/contact notification forwarded to the configured inbox
    ///
    /// Reply-To carries the visitor's address so the inbox can answer
    /// directly (the visitor address is untrusted, so it is never the
    /// envelope From).
    pub fn join_request(
        from: &str,
        to: &str,
        name: &str,
        visitor_email: &str,
        message: &str,
        help_type: Option<&str>,
        subject: Option<&str>,
    ) -> Self {
        let subject = match subject {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => format!("New Join Request from {name}"),
        };

        let interest_html = match help_type {
            Some(h) => format!("<p><strong>Interest:</strong> {}</p>\n", escape_html(h)),
            None => String::new(),
        };
        let html_body = format!(
            "<h2>New Join Request</h2>\n\
             <p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             {interest}\
             <p><strong>Message:</strong></p>\n\
             <p>{message}</p>",
            name = escape_html(name),
            email = escape_html(visitor_email),
            interest = interest_html,
            message = escape_html(message).replace('\n', "<br>"),
        );

        let interest_text = match help_type {
            Some(h) => format!("Interest: {h}\n"),
            None => String::new(),
        };
        let text_body = format!(
            "New Join Request\n\n\
             Name: {name}\n\
             Email: {visitor_email}\n\
             {interest_text}\n\
             Message:\n{message}\n",
        );

        Self {
            from: from.to_string(),
            reply_to: Some(visitor_email.to_string()),
            to: to.to_string(),
            subject,
            html_body,
            text_body,
        }
    }
}
