//! # Text Formatting for the Greeter Page
//!
//! Pure helpers that turn session data into page copy.
//!
//! ## Functions
//!
//! - [`greeting`] - the page title for the current identity
//! - [`wrong_network_notice`] - alert text asking the user to switch networks
//! - [`alert_text`] - alert text for a failed connection, if it warrants one

use lib_connect::{ConnectError, DisplayIdentity, Network};

use super::constants::{COLLECTION_NAME, GREETING_PREFIX, WRONG_NETWORK_NOTICE};

/// Greeting title. The identity is shown verbatim: name, else full address, else nothing.
///
/// # Examples
///
/// ```rust
/// use greeter_web::utils::format::greeting;
/// use lib_connect::DisplayIdentity;
///
/// assert_eq!(
///     greeting(&DisplayIdentity::Name("alice.eth".into())),
///     "Bienvenid@ a Crypto Devs Punks alice.eth!"
/// );
/// ```
pub fn greeting(identity: &DisplayIdentity) -> String {
    format!("{} {} {}!", GREETING_PREFIX, COLLECTION_NAME, identity)
}

/// Ask the user to switch to the chain with `expected` id.
pub fn wrong_network_notice(expected: u64) -> String {
    format!("{} {}", WRONG_NETWORK_NOTICE, Network::from_chain_id(expected).label())
}

/// Alert text for a connection failure. Only a wrong network is worth interrupting the user for.
pub fn alert_text(err: &ConnectError) -> Option<String> {
    match err {
        ConnectError::WrongNetwork { expected, .. } => Some(wrong_network_notice(*expected)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_connect::ClientError;

    #[test]
    fn test_greeting() {
        assert_eq!(
            greeting(&DisplayIdentity::Name("alice.eth".into())),
            "Bienvenid@ a Crypto Devs Punks alice.eth!"
        );
        assert_eq!(
            greeting(&DisplayIdentity::Address("0xABCDef0000000000000000000000000000001234".into())),
            "Bienvenid@ a Crypto Devs Punks 0xABCDef0000000000000000000000000000001234!"
        );
        assert_eq!(greeting(&DisplayIdentity::Empty), "Bienvenid@ a Crypto Devs Punks !");
    }

    #[test]
    fn test_wrong_network_notice() {
        assert_eq!(wrong_network_notice(4), "Por favor cambia tu red a Rinkeby");
    }

    #[test]
    fn test_alert_text_only_for_wrong_network() {
        let wrong = ConnectError::WrongNetwork { expected: 4, actual: 1 };
        assert_eq!(alert_text(&wrong).as_deref(), Some("Por favor cambia tu red a Rinkeby"));

        assert_eq!(alert_text(&ConnectError::ConnectionRejected("closed".into())), None);
        assert_eq!(alert_text(&ConnectError::Resolution(ClientError::NoAccounts)), None);
    }
}
