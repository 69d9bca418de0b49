//! Read lexicon resource files, embedded or from a directory on disk.
//!
//! All files are line oriented: `#` starts a comment, blank lines are
//! ignored. Malformed lines are skipped with a warning so one bad entry does
//! not take the whole table down.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, include_dir};
use log::{debug, warn};

static EMBEDDED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources/lexicon");

pub(super) const DICTIONARY_FILE: &str = "dictionary.txt";
pub(super) const GIVEN_NAMES_FILE: &str = "given_names.txt";
pub(super) const CITIES_FILE: &str = "cities.txt";
pub(super) const CONTRACTIONS_FILE: &str = "contractions.txt";
pub(super) const SLANG_FILE: &str = "slang.txt";
pub(super) const COMPLEX_WORDS_FILE: &str = "complex_words.txt";
pub(super) const ING_EXCEPTIONS_FILE: &str = "ing_exceptions.txt";

/// Raw text of every lexicon resource.
pub(super) struct LexiconSources {
    pub(super) dictionary: Cow<'static, str>,
    pub(super) given_names: Cow<'static, str>,
    pub(super) cities: Cow<'static, str>,
    pub(super) contractions: Cow<'static, str>,
    pub(super) slang: Cow<'static, str>,
    pub(super) complex_words: Cow<'static, str>,
    pub(super) ing_exceptions: Cow<'static, str>,
}

impl LexiconSources {
    pub(super) fn embedded() -> Self {
        Self {
            dictionary: Cow::Borrowed(embedded_text(DICTIONARY_FILE)),
            given_names: Cow::Borrowed(embedded_text(GIVEN_NAMES_FILE)),
            cities: Cow::Borrowed(embedded_text(CITIES_FILE)),
            contractions: Cow::Borrowed(embedded_text(CONTRACTIONS_FILE)),
            slang: Cow::Borrowed(embedded_text(SLANG_FILE)),
            complex_words: Cow::Borrowed(embedded_text(COMPLEX_WORDS_FILE)),
            ing_exceptions: Cow::Borrowed(embedded_text(ING_EXCEPTIONS_FILE)),
        }
    }

    pub(super) fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("Lexicon path is not a directory: {}", dir.display());
        }

        Ok(Self {
            dictionary: read_or_embedded(dir, DICTIONARY_FILE)?,
            given_names: read_or_embedded(dir, GIVEN_NAMES_FILE)?,
            cities: read_or_embedded(dir, CITIES_FILE)?,
            contractions: read_or_embedded(dir, CONTRACTIONS_FILE)?,
            slang: read_or_embedded(dir, SLANG_FILE)?,
            complex_words: read_or_embedded(dir, COMPLEX_WORDS_FILE)?,
            ing_exceptions: read_or_embedded(dir, ING_EXCEPTIONS_FILE)?,
        })
    }
}

fn embedded_text(name: &str) -> &'static str {
    EMBEDDED
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .unwrap_or_else(|| panic!("Embedded lexicon resource missing or not UTF-8: {}", name))
}

fn read_or_embedded(dir: &Path, name: &'static str) -> Result<Cow<'static, str>> {
    let path = dir.join(name);
    if !path.exists() {
        debug!("{} not found in {}, using embedded copy", name, dir.display());
        return Ok(Cow::Borrowed(embedded_text(name)));
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
    Ok(Cow::Owned(text))
}

/// Iterate the meaningful lines of a resource: trimmed, comments and blank
/// lines removed, paired with their 1-based line number.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some((index + 1, line))
        }
    })
}

/// Parse `word TAG|TAG|...` lines.
pub(super) fn parse_tag_entries(text: &str, source: &str) -> Vec<(String, Vec<String>)> {
    let mut entries = Vec::new();

    for (line_number, line) in data_lines(text) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [word, tags] = fields.as_slice() else {
            warn!(
                "{}:{}: expected `word TAG|TAG`, skipping: {:?}",
                source, line_number, line
            );
            continue;
        };

        let tags: Vec<String> = tags
            .split('|')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        if tags.is_empty() {
            warn!("{}:{}: entry without tags, skipping: {:?}", source, line_number, line);
            continue;
        }

        entries.push((word.to_string(), tags));
    }

    entries
}

/// Parse one-word-per-line lists.
pub(super) fn parse_word_list(text: &str) -> Vec<String> {
    data_lines(text).map(|(_, line)| line.to_string()).collect()
}
