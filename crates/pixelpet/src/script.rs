//! Scripted input: `"<command>@<secs>,..."`
//!
//! Commands are the simulator actions plus `restart`.

use anyhow::{Context, Result, anyhow, bail};
use pixelpet_life::Action;

/// Something the player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Restart,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restart" | "reset" => Ok(Command::Restart),
            other => other.parse().map(Command::Act),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Act(action) => write!(f, "{action}"),
            Command::Restart => write!(f, "restart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub at_secs: f32,
    pub command: Command,
}

/// Time-ordered list of commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<ScriptStep>,
    cursor: usize,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        let mut steps = Vec::new();

        for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, at) = entry
                .split_once('@')
                .ok_or_else(|| anyhow!("Script entry '{entry}' is missing '@<secs>'"))?;
            let command: Command = name.parse().map_err(|e: String| anyhow!(e))?;
            let at_secs: f32 = at
                .trim()
                .parse()
                .with_context(|| format!("Invalid time in script entry '{entry}'"))?;
            if !at_secs.is_finite() || at_secs < 0.0 {
                bail!("Script time must be a non-negative number, got '{at}'");
            }
            steps.push(ScriptStep { at_secs, command });
        }

        // stable, so same-time entries keep their written order
        steps.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Ok(Self { steps, cursor: 0 })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Time of the next pending step
    pub fn next_at(&self) -> Option<f32> {
        self.steps.get(self.cursor).map(|step| step.at_secs)
    }

    /// Take every step scheduled at or before `now`
    pub fn due(&mut self, now: f32) -> Vec<Command> {
        let mut due = Vec::new();
        while let Some(step) = self.steps.get(self.cursor)
            && step.at_secs <= now
        {
            due.push(step.command);
            self.cursor += 1;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorted() {
        let script = Script::parse("play@10, feed@2.5,restart@30").unwrap();
        let times: Vec<f32> = script.steps().iter().map(|s| s.at_secs).collect();
        assert_eq!(times, vec![2.5, 10.0, 30.0]);
        assert_eq!(script.steps()[0].command, Command::Act(Action::Feed));
        assert_eq!(script.steps()[2].command, Command::Restart);
    }

    #[test]
    fn test_parse_empty() {
        let script = Script::parse("").unwrap();
        assert!(script.is_finished());
        assert_eq!(script.next_at(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Script::parse("feed").is_err());
        assert!(Script::parse("dance@3").is_err());
        assert!(Script::parse("feed@soon").is_err());
        assert!(Script::parse("feed@-1").is_err());
    }

    #[test]
    fn test_due_drains_in_order() {
        let mut script = Script::parse("feed@1,play@1,clean@5").unwrap();
        assert!(script.due(0.5).is_empty());
        assert_eq!(
            script.due(1.0),
            vec![Command::Act(Action::Feed), Command::Act(Action::Play)]
        );
        assert_eq!(script.next_at(), Some(5.0));
        assert_eq!(script.due(100.0), vec![Command::Act(Action::Clean)]);
        assert!(script.is_finished());
    }
}
