//! Login hand-off that precedes the board screen.
//!
//! The board core never reads the username; it is carried only for the
//! greeting and for front-end display.

use crate::errors::BoardErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Trims the input and rejects a blank name.
    pub fn login(raw_username: &str) -> Result<Self, BoardErrors> {
        let username = raw_username.trim();
        if username.is_empty() {
            return Err(BoardErrors::EmptyUsername);
        }
        Ok(Self {
            username: username.to_owned(),
        })
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome to Chess, {}!", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::errors::BoardErrors;

    #[test]
    fn login_trims_and_greets() {
        let session = Session::login("  magnus \n").expect("non-blank name");
        assert_eq!(session.username(), "magnus");
        assert_eq!(session.welcome_message(), "Welcome to Chess, magnus!");
    }

    #[test]
    fn blank_login_is_rejected() {
        assert_eq!(Session::login(""), Err(BoardErrors::EmptyUsername));
        assert_eq!(Session::login(" \t "), Err(BoardErrors::EmptyUsername));
        assert_eq!(
            BoardErrors::EmptyUsername.to_string(),
            "Enter username to continue"
        );
    }
}
