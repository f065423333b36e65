//! Canned transcript scripts for simulated live calls

use callsense_core::Speaker;

/// One scripted utterance, stamped with the session clock when it plays
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// Which side of the call speaks
    pub speaker: Speaker,

    /// Utterance text
    pub text: String,

    /// Sentiment score in `[0, 1]`
    pub score: f64,
}

impl ScriptLine {
    /// Create a script line
    pub fn new(speaker: Speaker, text: impl Into<String>, score: f64) -> Self {
        Self {
            speaker,
            text: text.into(),
            score,
        }
    }
}

/// An ordered list of scripted utterances fed to a live session
#[derive(Debug, Clone, PartialEq)]
pub struct LiveScript {
    lines: Vec<ScriptLine>,
}

impl LiveScript {
    /// Build a script from explicit lines
    #[must_use]
    pub fn new(lines: Vec<ScriptLine>) -> Self {
        Self { lines }
    }

    /// Number of scripted lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at an index, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScriptLine> {
        self.lines.get(index)
    }
}

impl Default for LiveScript {
    /// The demo billing-complaint call
    fn default() -> Self {
        Self::new(vec![
            ScriptLine::new(Speaker::Agent, "Hello! How can I assist you today?", 0.78),
            ScriptLine::new(Speaker::Customer, "I'm very upset about my bill.", 0.22),
            ScriptLine::new(Speaker::Agent, "I understand, let me check that for you.", 0.55),
            ScriptLine::new(Speaker::Customer, "Thank you, I appreciate it.", 0.81),
            ScriptLine::new(Speaker::Agent, "Is there anything else I can help you with?", 0.75),
            ScriptLine::new(Speaker::Customer, "No, that will be all.", 0.65),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_script_shape() {
        let script = LiveScript::default();
        assert_eq!(script.len(), 6);
        assert!(!script.is_empty());

        let first = script.get(0).unwrap();
        assert_eq!(first.speaker, Speaker::Agent);
        assert!((0.0..=1.0).contains(&first.score));
        assert!(script.get(6).is_none());
    }

    #[test]
    fn test_default_script_alternates_speakers() {
        let script = LiveScript::default();
        for index in 0..script.len() {
            let expected = if index % 2 == 0 {
                Speaker::Agent
            } else {
                Speaker::Customer
            };
            assert_eq!(script.get(index).unwrap().speaker, expected);
        }
    }
}
