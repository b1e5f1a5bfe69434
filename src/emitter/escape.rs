//! Literal substitutions applied to expected file content before it is
//! embedded in a double-quoted Ruby string.
//!
//! Rules run in order over the whole text, so a rule sees the output of the
//! ones before it. The backslash rule has to stay first.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeRule {
    pub pattern: String,
    pub replacement: String,
}

impl EscapeRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeRules {
    rules: Vec<EscapeRule>,
}

impl Default for EscapeRules {
    fn default() -> Self {
        Self::new(vec![
            EscapeRule::new("\\", "\\\\"),
            EscapeRule::new("\"", "\\\""),
            EscapeRule::new("@", "\\@"),
            EscapeRule::new("$;", "\\$;"),
            // A Ruby special global; rsyslog configs use it as a directive.
            EscapeRule::new(
                "$EscapeControlCharactersOnReceive",
                "\\$EscapeControlCharactersOnReceive",
            ),
        ])
    }
}

impl EscapeRules {
    pub fn new(rules: Vec<EscapeRule>) -> Self {
        Self { rules }
    }

    /// Append a rule; it runs after every existing one.
    pub fn push(&mut self, rule: EscapeRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[EscapeRule] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .filter(|rule| !rule.pattern.is_empty())
            .fold(text.to_string(), |acc, rule| {
                acc.replace(&rule.pattern, &rule.replacement)
            })
    }
}
