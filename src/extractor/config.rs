/// Tag vocabulary and dialect switches for one model family.
///
/// Every delimiter the extractor recognizes is carried here so legacy
/// and alternate vocabularies are a configuration, not a fork of the
/// scanning logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Opening think tag, e.g. `<think>`
    pub think_start_token: String,
    /// Closing think tag, e.g. `</think>`
    pub think_end_token: String,
    /// Opening code-block tag
    pub code_env_start_token: String,
    /// Closing code-block tag
    pub code_env_end_token: String,
    /// Function opener up to the name, e.g. `<function=`
    pub function_prefix: String,
    /// Closing function tag
    pub function_end_token: String,
    /// Parameter opener up to the name, e.g. `<parameter=`
    pub parameter_prefix: String,
    /// Closing parameter tag
    pub parameter_end_token: String,
    /// Whether a turn opens inside the think region with no start tag
    /// (reasoning-first model families)
    pub initial_inside_think: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            think_start_token: "<think>".to_string(),
            think_end_token: "</think>".to_string(),
            code_env_start_token: "<code_env>".to_string(),
            code_env_end_token: "</code_env>".to_string(),
            function_prefix: "<function=".to_string(),
            function_end_token: "</function>".to_string(),
            parameter_prefix: "<parameter=".to_string(),
            parameter_end_token: "</parameter>".to_string(),
            initial_inside_think: false,
        }
    }
}

impl ExtractorConfig {
    /// Default vocabulary with a custom think tag name.
    pub fn with_think_tag(name: &str) -> Self {
        Self {
            think_start_token: format!("<{}>", name),
            think_end_token: format!("</{}>", name),
            ..Self::default()
        }
    }

    /// Dialect for a model name, matched case-insensitively.
    ///
    /// Unknown models get the default vocabulary; reasoning-first
    /// families start each turn inside the think region.
    pub fn for_model(model: &str) -> Self {
        let name = model.to_lowercase();
        let mut config = Self::default();
        if name.contains("thinking") || name.contains("-r1") {
            config.initial_inside_think = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let config = ExtractorConfig::default();
        assert_eq!(config.think_start_token, "<think>");
        assert_eq!(config.function_prefix, "<function=");
        assert!(!config.initial_inside_think);
    }

    #[test]
    fn test_custom_think_tag() {
        let config = ExtractorConfig::with_think_tag("reasoning");
        assert_eq!(config.think_start_token, "<reasoning>");
        assert_eq!(config.think_end_token, "</reasoning>");
        assert_eq!(config.code_env_start_token, "<code_env>");
    }

    #[test]
    fn test_for_model_reasoning_first() {
        assert!(ExtractorConfig::for_model("ui-agent-7b-thinking").initial_inside_think);
        assert!(ExtractorConfig::for_model("Agent-R1-32B").initial_inside_think);
        assert!(!ExtractorConfig::for_model("gui-agent-7b").initial_inside_think);
    }
}
