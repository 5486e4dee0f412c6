use crate::error::{Result, ThemeshiftError};
use regex::{NoExpand, Regex};

/// How a rule locates the text it rewrites.
#[derive(Debug)]
pub enum Matcher {
	/// An exact substring, matched byte-for-byte including line endings.
	Literal(String),

	/// A compiled regex pattern.
	Pattern(Regex),
}

/// A single substitution rule: matcher, literal replacement, and scope.
///
/// Replacements are always inserted verbatim (no capture-group expansion);
/// every replacement in the migration plan is a fixed block of text.
#[derive(Debug)]
pub struct Rule {
	/// Short name describing what the rule does.
	pub name: &'static str,

	/// What the rule matches.
	pub matcher: Matcher,

	/// The text substituted for each match.
	pub replacement: String,

	/// Whether to replace all occurrences or only the first.
	pub global: bool,
}

/// The result of applying one rule to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
	/// Name of the rule that ran.
	pub name: &'static str,

	/// Whether applying the rule changed the buffer.
	pub fired: bool,
}

impl Rule {
	/// Build a rule that matches an exact substring.
	pub fn literal(name: &'static str, needle: &str, replacement: &str, global: bool) -> Self {
		Rule {
			name,
			matcher: Matcher::Literal(needle.to_string()),
			replacement: replacement.to_string(),
			global,
		}
	}

	/// Build a rule that matches a regex pattern.
	pub fn pattern(name: &'static str, pattern: &str, replacement: &str, global: bool) -> Result<Self> {
		let regex = Regex::new(pattern).map_err(|source| ThemeshiftError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(Rule {
			name,
			matcher: Matcher::Pattern(regex),
			replacement: replacement.to_string(),
			global,
		})
	}

	/// Apply this rule to the input, returning the rewritten text.
	///
	/// A rule that matches nothing returns the input unchanged.
	pub fn apply(&self, input: &str) -> String {
		match &self.matcher {
			Matcher::Literal(needle) => {
				if self.global {
					input.replace(needle.as_str(), &self.replacement)
				} else {
					input.replacen(needle.as_str(), &self.replacement, 1)
				}
			}
			Matcher::Pattern(regex) => {
				if self.global {
					regex
						.replace_all(input, NoExpand(&self.replacement))
						.into_owned()
				} else {
					regex.replace(input, NoExpand(&self.replacement)).into_owned()
				}
			}
		}
	}
}

/// Run an ordered rule slice over one buffer.
///
/// Each rule's output becomes the next rule's input. Returns the final text
/// together with a per-rule outcome recording whether the buffer changed.
pub fn apply_rules(input: &str, rules: &[Rule]) -> (String, Vec<RuleOutcome>) {
	let mut content = input.to_string();
	let mut outcomes = Vec::with_capacity(rules.len());

	for rule in rules {
		let rewritten = rule.apply(&content);
		outcomes.push(RuleOutcome {
			name: rule.name,
			fired: rewritten != content,
		});
		content = rewritten;
	}

	(content, outcomes)
}
