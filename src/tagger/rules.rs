//! Contextual transformation rules and their text format.
//!
//! One rule per line:
//!
//! ```text
//! FROM TO KIND [c1 [c2 [c3]]] [+verify] [+second]
//! ```
//!
//! `KIND` names the condition family (`PREVTAG`, `NEXT1OR2WD`, ...). Word
//! operands are compared against lowercased tokens, tag operands exactly.
//! `+verify` only lets the rule fire when the target tag is one of the
//! token's dictionary alternatives (or the token is unknown); `+second`
//! restricts the rule to the second pass.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, warn};
use regex::Regex;
use strum::{Display, EnumIter, EnumString};

/// Condition family of a rule. Offsets are relative to the token being
/// rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ConditionKind {
    /// First token of the sentence, written exactly as `c1`.
    StartWord,
    /// Last token of the sentence.
    End,
    CurrentWd,
    /// `c1` is a regex matched against the current word.
    CurrentWdRgx,
    WdNextWd,
    WdPrevWd,
    PrevWord,
    Prev2Wd,
    /// Word at -1 is `c1` and word at -2 is `c2`.
    Prev2Words,
    NextWd,
    Next2Wd,
    Prev1Or2Wd,
    Next1Or2Wd,
    PrevTag,
    PrevTag2,
    /// Tag at -2 is `c1` and tag at -1 is `c2`.
    Prev2Tag,
    Prev2TagNextTag,
    Prev1Or2Tag,
    Prev1Or2Or3Tag,
    NextTag,
    NextTag2,
    Next2Tag,
    Next1Or2Tag,
    Next1Or2Or3Tag,
    SurroundTag,
    SurroundTagWd,
    WdPrevTag,
    WdNextTag,
    PrevWordPrevTag,
}

impl ConditionKind {
    /// Number of operands the condition reads.
    pub fn arity(self) -> usize {
        use ConditionKind::*;
        match self {
            End => 0,
            StartWord | CurrentWd | CurrentWdRgx | PrevWord | Prev2Wd | NextWd | Next2Wd
            | Prev1Or2Wd | Next1Or2Wd | PrevTag | PrevTag2 | Prev1Or2Tag | Prev1Or2Or3Tag
            | NextTag | NextTag2 | Next1Or2Tag | Next1Or2Or3Tag => 1,
            WdNextWd | WdPrevWd | Prev2Words | Prev2Tag | Next2Tag | SurroundTag | WdPrevTag
            | WdNextTag | PrevWordPrevTag => 2,
            Prev2TagNextTag | SurroundTagWd => 3,
        }
    }
}

/// One row of the transformation table.
#[derive(Debug, Clone)]
pub struct ContextRule {
    pub kind: ConditionKind,
    pub from: String,
    pub to: String,
    pub c1: Option<String>,
    pub c2: Option<String>,
    pub c3: Option<String>,
    /// Compiled `c1` of a [`ConditionKind::CurrentWdRgx`] rule.
    pub pattern: Option<Regex>,
    pub verify: bool,
    pub second_run: bool,
}

impl FromStr for ContextRule {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut fields = line.split_whitespace();
        let (Some(from), Some(to), Some(kind)) = (fields.next(), fields.next(), fields.next())
        else {
            bail!("expected `FROM TO KIND [operands] [+verify] [+second]`");
        };
        let kind = ConditionKind::from_str(kind)
            .map_err(|_| anyhow!("unknown condition kind `{}`", kind))?;

        let mut operands = Vec::new();
        let mut verify = false;
        let mut second_run = false;
        for field in fields {
            match field {
                "+verify" => verify = true,
                "+second" => second_run = true,
                flag if flag.starts_with('+') && flag.len() > 1 => bail!("unknown flag `{}`", flag),
                operand => operands.push(operand.to_string()),
            }
        }

        if operands.len() != kind.arity() {
            bail!(
                "{} takes {} operand(s), found {}",
                kind,
                kind.arity(),
                operands.len()
            );
        }

        let pattern = match kind {
            ConditionKind::CurrentWdRgx => Some(
                Regex::new(&operands[0])
                    .with_context(|| format!("invalid pattern `{}`", operands[0]))?,
            ),
            _ => None,
        };

        let mut operands = operands.into_iter();
        Ok(ContextRule {
            kind,
            from: from.to_string(),
            to: to.to_string(),
            c1: operands.next(),
            c2: operands.next(),
            c3: operands.next(),
            pattern,
            verify,
            second_run,
        })
    }
}

/// Parse a rule table. Malformed lines are logged and skipped.
pub fn parse_rules(text: &str, source: &str) -> Vec<ContextRule> {
    let mut rules = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<ContextRule>() {
            Ok(rule) => rules.push(rule),
            Err(e) => warn!("{}:{}: skipping rule {:?}: {:#}", source, index + 1, line, e),
        }
    }
    rules
}

/// Load a rule table from disk.
pub fn load_rules(path: &Path) -> Result<Vec<ContextRule>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file {}", path.display()))?;
    let rules = parse_rules(&text, &path.display().to_string());
    debug!("Loaded {} rules from {}", rules.len(), path.display());
    Ok(rules)
}

const DEFAULT_RULES_TEXT: &str = include_str!("../../resources/rules/contextual.txt");

static DEFAULT_RULES: LazyLock<Arc<[ContextRule]>> = LazyLock::new(|| {
    let rules = parse_rules(DEFAULT_RULES_TEXT, "contextual.txt");
    debug!("Loaded {} embedded contextual rules", rules.len());
    rules.into()
});

/// The compiled-in rule table, parsed once per process.
pub fn default_rules() -> Arc<[ContextRule]> {
    Arc::clone(&DEFAULT_RULES)
}
