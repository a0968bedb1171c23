//! Construction of verification notification messages.
//!
//! The full templating subsystem lives with the host application; this
//! module renders the small set of plain-text notifications the
//! verification subsystem owns.

use crate::domain::entities::user_profile::UserProfile;

use super::types::EmailMessage;

/// Build the "verification approved" notification for a learner
///
/// # Arguments
///
/// * `platform_name` - platform branding used in subject and body
/// * `profile` - the recipient
/// * `expiration_date` - already formatted as `%m/%d/%Y`
pub fn approval_email(
    platform_name: &str,
    profile: &UserProfile,
    expiration_date: &str,
) -> EmailMessage {
    let subject = format!("Your {} ID verification was approved!", platform_name);

    let body = format!(
        "Hello {full_name},\n\n\
         Congratulations! Your {platform_name} ID verification photos have been approved.\n\n\
         Your approved verification is valid until {expiration_date}. After that date you \
         will be prompted to verify your identity again.\n\n\
         Thank you,\n\
         The {platform_name} team",
        full_name = profile.full_name,
        platform_name = platform_name,
        expiration_date = expiration_date,
    );

    EmailMessage {
        to_email: profile.email.clone(),
        to_name: profile.full_name.clone(),
        subject,
        body,
    }
}
