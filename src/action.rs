use std::fmt;

use super::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// No thrust this turn.
    Wait,
    /// Eject a droplet so the chip moves toward `target`.
    Propel { target: Vec2 },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => f.write_str("WAIT"),
            Action::Propel { target } => write!(f, "{target}"),
        }
    }
}

/// One output line: an action plus optional text shown above the chip.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub action: Action,
    pub message: Option<String>,
}

impl Command {
    pub fn new<M>(action: Action, message: M) -> Self
    where
        M: Into<Option<String>>,
    {
        Command {
            action,
            message: message.into(),
        }
    }

    pub fn wait() -> Self {
        Action::Wait.into()
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Command::new(action, None)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;

        if let Some(message) = &self.message {
            write!(f, " {message}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format() {
        assert_eq!(Command::wait().to_string(), "WAIT");

        let propel = Command::from(Action::Propel {
            target: Vec2::new(120.5, 33.),
        });
        assert_eq!(propel.to_string(), "120.5 33");

        let chatty = Command::new(Action::Wait, "hi".to_string());
        assert_eq!(chatty.to_string(), "WAIT hi");
    }
}
