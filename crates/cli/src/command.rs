use cardpattern_core::{Pattern, RuleTier};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Hand,
    Goals,
    Status,
    Draw(usize),
    Take,
    Discard(Vec<usize>),
    Play {
        indices: Vec<usize>,
        pattern: Option<Pattern>,
    },
    Detect(Vec<usize>),
    Hint,
    Tier(RuleTier),
    Save(PathBuf),
    Quit,
}

impl Command {
    /// Commands that change the session. Refused once the level is over.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Draw(_)
                | Command::Take
                | Command::Discard(_)
                | Command::Play { .. }
                | Command::Tier(_)
        )
    }
}

/// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let command = match head.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "hand" | "h" => Command::Hand,
        "goals" | "g" => Command::Goals,
        "status" | "s" => Command::Status,
        "draw" | "d" => match args.as_slice() {
            [] => Command::Draw(1),
            [count] => {
                let count = count
                    .parse::<usize>()
                    .map_err(|_| format!("invalid count '{count}'"))?;
                if count == 0 {
                    return Err("draw count must be at least 1".to_string());
                }
                Command::Draw(count)
            }
            _ => return Err("usage: draw [n]".to_string()),
        },
        "take" | "t" => Command::Take,
        "discard" | "x" => Command::Discard(parse_indices(&args)?),
        "play" | "p" => {
            let (pattern, rest) = match args.split_last() {
                Some((last, rest)) if last.starts_with(|c: char| c.is_ascii_alphabetic()) => {
                    (Some(last.parse::<Pattern>()?), rest)
                }
                _ => (None, args.as_slice()),
            };
            Command::Play {
                indices: parse_indices(rest)?,
                pattern,
            }
        }
        "detect" => Command::Detect(parse_indices(&args)?),
        "hint" => Command::Hint,
        "tier" => match args.as_slice() {
            [tier] => Command::Tier(parse_tier(tier)?),
            _ => return Err("usage: tier <early|mid>".to_string()),
        },
        "save" => match args.as_slice() {
            [path] => Command::Save(PathBuf::from(path)),
            _ => return Err("usage: save FILE".to_string()),
        },
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

/// Hand indices as space or comma separated values and inclusive ranges
/// (`0 2`, `0,2`, `1-3`).
pub fn parse_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((start, end)) = part.split_once('-') {
                let start = start
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range start".to_string())?;
                let end = end
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range end".to_string())?;
                if start > end {
                    return Err("range start larger than end".to_string());
                }
                indices.extend(start..=end);
            } else {
                let idx = part
                    .parse::<usize>()
                    .map_err(|_| format!("invalid index '{part}'"))?;
                indices.push(idx);
            }
        }
    }
    if indices.is_empty() {
        return Err("missing indices".to_string());
    }
    Ok(indices)
}

fn parse_tier(value: &str) -> Result<RuleTier, String> {
    match value.to_ascii_lowercase().as_str() {
        "tutorial" => Ok(RuleTier::Tutorial),
        "early" => Ok(RuleTier::Early),
        "mid" => Ok(RuleTier::Mid),
        _ => Err(format!("unknown rule tier '{value}'")),
    }
}
