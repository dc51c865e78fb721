use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
};

use crate::config::SmtpConfig;
use crate::models::Order;

/// Best-effort SMTP notification sender. Callers treat every send as
/// fire-and-forget: a failed delivery is logged and never turned into a
/// request failure.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }

    pub async fn send_welcome(&self, to: &str) -> anyhow::Result<()> {
        let body = concat!(
            "<h1>Welcome!</h1>",
            "<p>Thank you for registering at the Artwork Store.</p>",
            "<p>Explore our collection of artworks.</p>"
        )
        .to_string();
        self.send(to, "Welcome to the Artwork Store", body).await
    }

    pub async fn send_order_confirmation(&self, to: &str, order: &Order) -> anyhow::Result<()> {
        let subject = format!("Order Confirmation #{}", order.id);
        let body = format!(
            "<h1>Order Confirmation</h1>\
             <p>Your order #{} has been placed successfully.</p>\
             <p>Total Amount: ${}</p>\
             <p>Status: {}</p>",
            order.id,
            format_amount(order.total_amount),
            order.status,
        );
        self.send(to, &subject, body).await
    }

    async fn send(&self, to: &str, subject: &str, html_body: String) -> anyhow::Result<()> {
        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(to.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body)?;

        self.transport.send(email).await?;
        tracing::info!(to = %to, subject = %subject, "email sent");
        Ok(())
    }
}

/// Render cents as a dollar amount, e.g. `2500` -> `"25.00"`.
pub fn format_amount(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_as_dollars() {
        assert_eq!(format_amount(2500), "25.00");
        assert_eq!(format_amount(1005), "10.05");
        assert_eq!(format_amount(99), "0.99");
        assert_eq!(format_amount(0), "0.00");
    }
}
