//! Lines typed while watching.

use std::str::FromStr;

use easypanel_domain::action::ServiceAction;

pub const HELP: &str = "commands: start|stop|restart <service>, status, dismiss, help, quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Service(ServiceAction, String),
    Status,
    Dismiss,
    Help,
    Quit,
    Empty,
}

impl FromStr for Input {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Empty);
        };
        let rest: Vec<&str> = words.collect();
        let input = match (verb.to_lowercase().as_str(), rest.as_slice()) {
            ("status", []) => Self::Status,
            ("dismiss", []) => Self::Dismiss,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (verb, [name]) => {
                let action = ServiceAction::from_str(verb).map_err(|err| err.to_string())?;
                Self::Service(action, (*name).to_string())
            }
            (verb, _) => return Err(format!("cannot understand {verb:?}; {HELP}")),
        };
        Ok(input)
    }
}
