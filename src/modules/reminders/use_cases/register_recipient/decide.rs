use crate::modules::reminders::use_cases::register_recipient::{
    command::RegisterRecipient,
    decision::{DecideError, Decision},
};

/// Trims the address and requires a non-empty local part and domain around a
/// single `@`.
pub fn decide_register(command: RegisterRecipient) -> Decision {
    let email = command.email.trim();
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !well_formed {
        return Decision::Rejected {
            reason: DecideError::InvalidEmail(command.email),
        };
    }
    Decision::Accepted {
        user_id: command.user_id,
        email: email.to_string(),
    }
}
