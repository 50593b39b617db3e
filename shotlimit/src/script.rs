use std::str::FromStr;

use shotlimit_core::{math::vector3::Vector3, FlagId};
use shotlimit_plugin::ServerEvent;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplayError {
    #[error("line {line}: unknown event '{keyword}'")]
    UnknownEvent { line: usize, keyword: String },
    #[error("line {line}: '{keyword}' is missing its {argument}")]
    MissingArgument {
        line: usize,
        keyword: String,
        argument: &'static str,
    },
    #[error("line {line}: invalid {argument} '{value}'")]
    InvalidArgument {
        line: usize,
        argument: &'static str,
        value: String,
    },
}

struct Arguments<'a, I> {
    line: usize,
    keyword: &'a str,
    tokens: I,
}

impl<'a, I: Iterator<Item = &'a str>> Arguments<'a, I> {
    fn next<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ReplayError> {
        let value = self
            .tokens
            .next()
            .ok_or_else(|| ReplayError::MissingArgument {
                line: self.line,
                keyword: self.keyword.to_string(),
                argument,
            })?;
        value.parse().map_err(|_| ReplayError::InvalidArgument {
            line: self.line,
            argument,
            value: value.to_string(),
        })
    }
}

/// Parses one line of an event script. Blank lines and `#` comments give `Ok(None)`.
///
/// ```text
/// join <player>
/// die <player>
/// grab <flag> <player> <x> <y> <z> <KIND>
/// drop <flag> <player>
/// shot <player>
/// ```
pub fn parse_event(content: &str, line: usize) -> Result<Option<ServerEvent>, ReplayError> {
    let content = content.split_once('#').map_or(content, |(event, _)| event);
    let mut tokens = content.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let mut args = Arguments {
        line,
        keyword,
        tokens,
    };

    let event = match keyword.to_ascii_lowercase().as_str() {
        "join" => ServerEvent::PlayerJoined {
            player: args.next("player")?,
        },
        "die" => ServerEvent::PlayerDied {
            player: args.next("player")?,
        },
        "grab" => ServerEvent::FlagGrabbed {
            flag: FlagId(args.next("flag")?),
            player: args.next("player")?,
            position: Vector3::new(args.next("x")?, args.next("y")?, args.next("z")?),
            kind: args.next("flag kind")?,
        },
        "drop" => ServerEvent::FlagDropped {
            flag: FlagId(args.next("flag")?),
            player: args.next("player")?,
        },
        "shot" => ServerEvent::ShotFired {
            player: args.next("player")?,
        },
        _ => {
            return Err(ReplayError::UnknownEvent {
                line,
                keyword: keyword.to_string(),
            })
        }
    };
    Ok(Some(event))
}

#[cfg(test)]
mod test {
    use shotlimit_core::{math::vector3::Vector3, FlagId};
    use shotlimit_plugin::ServerEvent;

    use super::{parse_event, ReplayError};

    #[test]
    fn test_grab() {
        assert_eq!(
            parse_event("GRAB 4 2 1.5 -3 0 GM  # in the zone", 1),
            Ok(Some(ServerEvent::FlagGrabbed {
                flag: FlagId(4),
                player: 2,
                position: Vector3::new(1.5, -3.0, 0.0),
                kind: "GM".to_string(),
            }))
        );
    }

    #[test]
    fn test_simple_events() {
        assert_eq!(
            parse_event("join 1", 1),
            Ok(Some(ServerEvent::PlayerJoined { player: 1 }))
        );
        assert_eq!(
            parse_event("drop 4 -1", 2),
            Ok(Some(ServerEvent::FlagDropped {
                flag: FlagId(4),
                player: -1
            }))
        );
        assert_eq!(
            parse_event("shot 7", 3),
            Ok(Some(ServerEvent::ShotFired { player: 7 }))
        );
    }

    #[test]
    fn test_blank_and_comment() {
        assert_eq!(parse_event("   ", 1), Ok(None));
        assert_eq!(parse_event("# join 1", 1), Ok(None));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_event("teleport 1", 3),
            Err(ReplayError::UnknownEvent {
                line: 3,
                keyword: "teleport".to_string()
            })
        );
        assert_eq!(
            parse_event("drop 4", 4),
            Err(ReplayError::MissingArgument {
                line: 4,
                keyword: "drop".to_string(),
                argument: "player"
            })
        );
        assert_eq!(
            parse_event("shot one", 5),
            Err(ReplayError::InvalidArgument {
                line: 5,
                argument: "player",
                value: "one".to_string()
            })
        );
    }
}
