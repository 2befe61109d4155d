//! Outbound account mail: confirmation links, password reset links and
//! reset codes. The identity layer around this crate mints the links and
//! codes; this module only delivers them.

use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::TeamMember;

/// Delivery of account mail to a team member.
pub trait EmailSender {
    fn send_confirmation_link(
        &self,
        member: &TeamMember,
        email: &str,
        confirmation_link: &str,
    ) -> Result<()>;

    fn send_password_reset_link(
        &self,
        member: &TeamMember,
        email: &str,
        reset_link: &str,
    ) -> Result<()>;

    fn send_password_reset_code(
        &self,
        member: &TeamMember,
        email: &str,
        reset_code: &str,
    ) -> Result<()>;
}

/// The default sender: accepts every message and delivers none. Swap in
/// [`SmtpEmailSender`] once a relay is configured.
pub struct NoOpEmailSender;

impl EmailSender for NoOpEmailSender {
    fn send_confirmation_link(
        &self,
        member: &TeamMember,
        email: &str,
        _confirmation_link: &str,
    ) -> Result<()> {
        debug!(member = %member.full_name(), email, "mail transport disabled, dropping confirmation link");
        Ok(())
    }

    fn send_password_reset_link(
        &self,
        member: &TeamMember,
        email: &str,
        _reset_link: &str,
    ) -> Result<()> {
        debug!(member = %member.full_name(), email, "mail transport disabled, dropping password reset link");
        Ok(())
    }

    fn send_password_reset_code(
        &self,
        member: &TeamMember,
        email: &str,
        _reset_code: &str,
    ) -> Result<()> {
        debug!(member = %member.full_name(), email, "mail transport disabled, dropping password reset code");
        Ok(())
    }
}

/// SMTP-backed sender over an authenticated relay.
pub struct SmtpEmailSender {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new(server: &str, username: &str, password: &str, from: &str) -> Result<Self> {
        let credentials = Credentials::new(username.to_string(), password.to_string());
        let transport = SmtpTransport::relay(server)?.credentials(credentials).build();

        Ok(Self {
            transport,
            from: from.parse()?,
        })
    }

    /// Build a sender from the optional SMTP block of the configuration.
    /// Fails with [`Error::SmtpNotConfigured`] when any setting is
    /// missing, so callers can fall back to [`NoOpEmailSender`].
    pub fn from_config(config: &Config) -> Result<Self> {
        match (
            &config.smtp_server,
            &config.smtp_username,
            &config.smtp_password,
            &config.mail_from,
        ) {
            (Some(server), Some(username), Some(password), Some(from)) => {
                Self::new(server, username, password, from)
            }
            _ => Err(Error::SmtpNotConfigured),
        }
    }

    fn send_html(&self, to: &str, subject: &str, body: String) -> Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(subject)
            .singlepart(SinglePart::html(body))?;

        self.transport.send(&message)?;

        info!(to, subject, "account mail sent");
        Ok(())
    }
}

impl EmailSender for SmtpEmailSender {
    fn send_confirmation_link(
        &self,
        _member: &TeamMember,
        email: &str,
        confirmation_link: &str,
    ) -> Result<()> {
        self.send_html(
            email,
            "Confirm your email",
            format!("Please confirm your account by <a href='{confirmation_link}'>clicking here</a>."),
        )
    }

    fn send_password_reset_link(
        &self,
        _member: &TeamMember,
        email: &str,
        reset_link: &str,
    ) -> Result<()> {
        self.send_html(
            email,
            "Reset your password",
            format!("Please reset your password by <a href='{reset_link}'>clicking here</a>."),
        )
    }

    fn send_password_reset_code(
        &self,
        _member: &TeamMember,
        email: &str,
        reset_code: &str,
    ) -> Result<()> {
        self.send_html(
            email,
            "Reset your password",
            format!("Please reset your password using the following code: {reset_code}"),
        )
    }
}
