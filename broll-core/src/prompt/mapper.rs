use crate::config::model::SceneConfig;
use crate::foundation::error::{BrollError, BrollResult};
use crate::prompt::vocab::{Assign, PromptRule, VOCABULARY};

/// Prompt the app starts from before the user types anything.
pub const DEFAULT_PROMPT: &str = "minimal backlit silhouette";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// A rule that fired, and the keyword that triggered it.
pub struct RuleMatch {
    /// Rule name from the table.
    pub rule: &'static str,
    /// First keyword of the rule found in the prompt.
    pub keyword: &'static str,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Result of mapping a prompt, with the audit trail of fired rules.
pub struct PromptMapping {
    /// Fully populated configuration.
    pub config: SceneConfig,
    /// Fired rules in application order; later entries override earlier ones.
    pub matches: Vec<RuleMatch>,
}

#[derive(Clone, Copy, Debug)]
/// Keyword-table prompt classifier.
///
/// Matching is case-insensitive; `_` and `-` count as spaces. A keyword matches whole words
/// only; a trailing `*` (`"contemplat*"`) lets it match any word it starts. Rules run in table
/// order and the last rule to assign a field wins.
pub struct PromptMapper<'a> {
    rules: &'a [PromptRule],
    defaults: SceneConfig,
}

impl PromptMapper<'static> {
    /// Mapper over [`VOCABULARY`] with [`SceneConfig::default`] as fallback.
    pub fn builtin() -> Self {
        Self {
            rules: VOCABULARY,
            defaults: SceneConfig::default(),
        }
    }
}

impl Default for PromptMapper<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> PromptMapper<'a> {
    /// Build a mapper over a custom table.
    ///
    /// Fails if `defaults` is invalid, a keyword is empty, not in normalized form or has a `*`
    /// anywhere but the end, or an assignment would produce an invalid configuration.
    pub fn new(rules: &'a [PromptRule], defaults: SceneConfig) -> BrollResult<Self> {
        defaults.validate()?;
        for rule in rules {
            if rule.keywords.is_empty() {
                return Err(BrollError::validation(format!(
                    "prompt rule '{}' has no keywords",
                    rule.name
                )));
            }
            for &kw in rule.keywords {
                let stem = kw.strip_suffix('*').unwrap_or(kw);
                if stem.is_empty() || stem.contains('*') || normalize(kw) != kw {
                    return Err(BrollError::validation(format!(
                        "prompt rule '{}' keyword \"{kw}\" must be non-empty, lowercase and single-spaced",
                        rule.name
                    )));
                }
            }
            // Fields are range-checked independently, so one assignment at a time is enough.
            for &assign in rule.assigns {
                let mut probe = defaults;
                apply(&mut probe, assign);
                probe.validate().map_err(|e| {
                    BrollError::validation(format!("prompt rule '{}': {e}", rule.name))
                })?;
            }
        }
        Ok(Self { rules, defaults })
    }

    /// Configuration used when nothing matches.
    pub fn defaults(&self) -> &SceneConfig {
        &self.defaults
    }

    /// Rule table in evaluation order.
    pub fn rules(&self) -> &'a [PromptRule] {
        self.rules
    }

    /// Map `text` to a configuration.
    pub fn map(&self, text: &str) -> SceneConfig {
        self.explain(text).config
    }

    /// Map `text` and report which rules fired.
    #[tracing::instrument(level = "debug", skip(self, text), fields(chars = text.chars().count()))]
    pub fn explain(&self, text: &str) -> PromptMapping {
        let normalized = normalize(text);
        let mut config = self.defaults;
        let mut matches = Vec::new();

        for rule in self.rules {
            let Some(keyword) = rule
                .keywords
                .iter()
                .copied()
                .find(|kw| contains_keyword(&normalized, kw))
            else {
                continue;
            };
            tracing::debug!(rule = rule.name, keyword, "prompt rule matched");
            for &assign in rule.assigns {
                apply(&mut config, assign);
            }
            matches.push(RuleMatch {
                rule: rule.name,
                keyword,
            });
        }

        PromptMapping { config, matches }
    }
}

/// Map free text to a [`SceneConfig`] using the built-in vocabulary. Never fails.
pub fn map_prompt_to_params(text: &str) -> SceneConfig {
    PromptMapper::builtin().map(text)
}

/// Like [`map_prompt_to_params`], also returning the fired rules.
pub fn explain_prompt(text: &str) -> PromptMapping {
    PromptMapper::builtin().explain(text)
}

fn apply(cfg: &mut SceneConfig, assign: Assign) {
    match assign {
        Assign::Mood(m) => cfg.mood = m,
        Assign::Pose(p) => cfg.pose = p,
        Assign::Camera(c) => cfg.camera_path = c,
        Assign::LightColor(c) => cfg.light_color = c,
        Assign::Fov(v) => cfg.fov_deg = v,
        Assign::KeyIntensity(v) => cfg.key_intensity = v,
        Assign::RimIntensity(v) => cfg.rim_intensity = v,
    }
}

pub(crate) fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for word in lowered
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let (needle, prefix) = match keyword.strip_suffix('*') {
        Some(stem) => (stem, true),
        None => (keyword, false),
    };
    let is_boundary = |c: Option<char>| c.is_none_or(|c| !c.is_alphanumeric());
    haystack.match_indices(needle).any(|(i, _)| {
        is_boundary(haystack[..i].chars().next_back())
            && (prefix || is_boundary(haystack[i + needle.len()..].chars().next()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/mapper.rs"]
mod tests;
