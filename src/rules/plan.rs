//! The fixed migration plan.
//!
//! Thirteen rules, applied in a strict total order: one root-block
//! replacement, five variable-reference renames, four dark-mode media-query
//! removals (one rethemed onto a `[data-theme]` selector), and three
//! anchored transition insertions. The target stylesheet uses CRLF line
//! endings, so the literal anchors do too; the pattern rules accept either.

use crate::error::Result;
use crate::rules::engine::Rule;

/// Replacement for the top-level variable block: theme-independent tokens,
/// light-mode defaults, and the dark-mode override block appended after it.
const THEMED_ROOT_BLOCK: &str = r#":root {
    /* Brand Colors (theme-independent) */
    --color-primary: #0d59f2;
    --color-primary-hover: #0a47c2;
    --color-primary-dark: #0A2342;
    --color-secondary: #FF6700;
    --color-secondary-hover: #e05a00;

    /* Typography (theme-independent) */
    --font-family-display: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    --font-weight-normal: 400;
    --font-weight-medium: 500;
    --font-weight-semibold: 600;
    --font-weight-bold: 700;
    --font-weight-extrabold: 800;
    --font-weight-black: 900;

    /* Spacing (theme-independent) */
    --spacing-xs: 0.25rem;
    --spacing-sm: 0.5rem;
    --spacing-md: 1rem;
    --spacing-lg: 1.5rem;
    --spacing-xl: 2rem;
    --spacing-2xl: 3rem;
    --spacing-3xl: 4rem;

    /* Border Radius (theme-independent) */
    --radius-sm: 0.25rem;
    --radius-md: 0.5rem;
    --radius-lg: 0.75rem;
    --radius-xl: 1rem;
    --radius-full: 9999px;

    /* Shadows (theme-independent) */
    --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
    --shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1);
    --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1);
    --shadow-xl: 0 20px 25px -5px rgb(0 0 0 / 0.1);

    /* Breakpoints (for reference) */
    --breakpoint-sm: 640px;
    --breakpoint-md: 768px;
    --breakpoint-lg: 1024px;
    --breakpoint-xl: 1280px;

    /* Light Mode (Default) - Based on design screenshots */
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f6f8;
    --color-card-bg: #ffffff;
    --color-text-primary: #333333;
    --color-text-secondary: #6b7280;
    --color-border: #e5e7eb;
    --color-header-bg: rgba(255, 255, 255, 0.8);
}

/* Dark Mode Theme */
[data-theme="dark"] {
    --color-bg-primary: #101622;
    --color-bg-secondary: #0d1117;
    --color-card-bg: #0d1117;
    --color-text-primary: #e5e7eb;
    --color-text-secondary: #9ca3af;
    --color-border: #374151;
    --color-header-bg: rgba(13, 17, 23, 0.8);
}"#;

/// Matches the `:root` block through its closing brace, and also any
/// immediately-following dark override block from a previous run, so that
/// re-applying the plan rewrites the migrated region to identical text.
const ROOT_BLOCK_PATTERN: &str =
	r#"(?s):root \{.*?\r?\n\}(?:\r?\n\r?\n/\* Dark Mode Theme \*/\r?\n\[data-theme="dark"\] \{.*?\r?\n\})?"#;

// The media-query matchers approximate the block body with non-nested brace
// matching: the first closing-brace pattern ends the match. Nested braces
// inside a targeted block are out of scope for this stylesheet.
const BODY_DARK_MEDIA_PATTERN: &str =
	r"/\* Dark mode support \*/\r?\n@media \(prefers-color-scheme: dark\) \{\r?\n    body \{[^}]+\}[^}]+\}";
const HEADER_DARK_MEDIA_PATTERN: &str =
	r"@media \(prefers-color-scheme: dark\) \{\r?\n    \.header \{[^}]+\}[^}]+\}";
const NAV_BRAND_DARK_MEDIA_PATTERN: &str =
	r"@media \(prefers-color-scheme: dark\) \{\r?\n    \.nav-brand \{[^}]+\}[^}]+\}";
const NAV_LINK_DARK_MEDIA_PATTERN: &str =
	r"@media \(prefers-color-scheme: dark\) \{\r?\n    \.nav-link \{[^}]+\}[^}]+\}";

/// The `.nav-brand` media query is the one removal that keeps its styling,
/// rethemed onto the attribute selector.
const NAV_BRAND_DARK_RULESET: &str =
	"\r\n\r\n[data-theme=\"dark\"] .nav-brand {\r\n    color: white;\r\n}";

const BODY_RULESET: &str = concat!(
	"body {\r\n",
	"    font-family: var(--font-family-display);\r\n",
	"    font-size: 16px;\r\n",
	"    line-height: 1.5;\r\n",
	"    color: var(--color-text-primary);\r\n",
	"    background-color: var(--color-bg-primary);\r\n",
	"    -webkit-font-smoothing: antialiased;\r\n",
	"    -moz-osx-font-smoothing: grayscale;\r\n",
	"}",
);

const BODY_RULESET_WITH_TRANSITION: &str = concat!(
	"body {\r\n",
	"    font-family: var(--font-family-display);\r\n",
	"    font-size: 16px;\r\n",
	"    line-height: 1.5;\r\n",
	"    color: var(--color-text-primary);\r\n",
	"    background-color: var(--color-bg-primary);\r\n",
	"    -webkit-font-smoothing: antialiased;\r\n",
	"    -moz-osx-font-smoothing: grayscale;\r\n",
	"    transition: background-color 0.3s ease, color 0.3s ease;\r\n",
	"}",
);

const HEADER_RULESET_PREFIX: &str = concat!(
	".header {\r\n",
	"    position: sticky;\r\n",
	"    top: 0;\r\n",
	"    z-index: 50;\r\n",
	"    background-color: rgba(255, 255, 255, 0.8);",
);

const HEADER_RULESET_PREFIX_THEMED: &str = concat!(
	".header {\r\n",
	"    position: sticky;\r\n",
	"    top: 0;\r\n",
	"    z-index: 50;\r\n",
	"    background-color: var(--color-header-bg);",
);

/// Matches the header's border declaration, tolerating an already-inserted
/// transition so a second pass rewrites the region to identical text.
const HEADER_BORDER_PATTERN: &str =
	r"border-bottom: 1px solid var\(--color-border\);(?:\r\n    transition: background-color 0\.3s ease, border-color 0\.3s ease;)?";

const HEADER_BORDER_WITH_TRANSITION: &str =
	"border-bottom: 1px solid var(--color-border);\r\n    transition: background-color 0.3s ease, border-color 0.3s ease;";

/// Build the ordered migration plan.
///
/// Order matters: the renames produce the exact anchor text the insertion
/// rules match against, and the root replacement must run before the header
/// rules so the new `--color-header-bg` declaration cannot shadow an anchor.
pub fn migration_rules() -> Result<Vec<Rule>> {
	Ok(vec![
		Rule::pattern("replace-root-variables", ROOT_BLOCK_PATTERN, THEMED_ROOT_BLOCK, false)?,
		Rule::literal("rename-bg-light", "var(--color-bg-light)", "var(--color-bg-primary)", true),
		Rule::literal("rename-card-light", "var(--color-card-light)", "var(--color-card-bg)", true),
		Rule::literal(
			"rename-text-light",
			"var(--color-text-light)",
			"var(--color-text-primary)",
			true,
		),
		Rule::literal(
			"rename-text-gray-light",
			"var(--color-text-gray-light)",
			"var(--color-text-secondary)",
			true,
		),
		Rule::literal(
			"rename-border-light",
			"var(--color-border-light)",
			"var(--color-border)",
			true,
		),
		Rule::pattern("remove-body-dark-media", BODY_DARK_MEDIA_PATTERN, "", false)?,
		Rule::pattern("remove-header-dark-media", HEADER_DARK_MEDIA_PATTERN, "", false)?,
		Rule::pattern(
			"retheme-nav-brand",
			NAV_BRAND_DARK_MEDIA_PATTERN,
			NAV_BRAND_DARK_RULESET,
			false,
		)?,
		Rule::pattern("remove-nav-link-dark-media", NAV_LINK_DARK_MEDIA_PATTERN, "", false)?,
		Rule::literal("add-body-transition", BODY_RULESET, BODY_RULESET_WITH_TRANSITION, true),
		Rule::literal(
			"theme-header-background",
			HEADER_RULESET_PREFIX,
			HEADER_RULESET_PREFIX_THEMED,
			true,
		),
		Rule::pattern(
			"add-header-transition",
			HEADER_BORDER_PATTERN,
			HEADER_BORDER_WITH_TRANSITION,
			false,
		)?,
	])
}
