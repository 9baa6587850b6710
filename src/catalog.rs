//! Lesson catalog loading.
//!
//! Lessons live in a directory as `lesson1.csv`, `lesson2.csv`, ... and
//! are loaded once at startup. The catalog is read-only afterwards; a
//! missing or unreadable lesson file becomes an empty lesson rather than
//! an error, so a broken file can never take the whole catalog down.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Flashcard, Lesson};

/// Bundled starter lesson, installed on first run.
const BUNDLED_LESSON_1: &str = include_str!("../bundled_lessons/lesson1.csv");

/// The full lesson catalog for one run of the program.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub lessons: Vec<Lesson>,
}

impl Catalog {
    /// Load every numbered lesson from `lessons_dir`.
    ///
    /// The highest `lessonN.csv` present determines the catalog size;
    /// gaps in the numbering load as empty lessons.
    pub fn load(lessons_dir: &Path) -> Result<Self> {
        let count = highest_lesson_number(lessons_dir)
            .with_context(|| format!("Failed to scan lessons directory: {:?}", lessons_dir))?;

        let lessons = (1..=count)
            .map(|number| load_lesson(&lesson_path(lessons_dir, number), number))
            .collect();

        Ok(Self { lessons })
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Get the default lessons location.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hanzi")
            .join("lessons")
    }
}

/// Install the bundled starter lesson if the directory holds no lessons.
pub fn install_starter_lessons(lessons_dir: &Path) -> Result<()> {
    fs::create_dir_all(lessons_dir)
        .with_context(|| format!("Failed to create lessons directory: {:?}", lessons_dir))?;

    if highest_lesson_number(lessons_dir)? > 0 {
        return Ok(()); // User already has lessons, don't overwrite
    }

    let path = lesson_path(lessons_dir, 1);
    fs::write(&path, BUNDLED_LESSON_1)
        .with_context(|| format!("Failed to write starter lesson: {:?}", path))?;
    log::info!("installed starter lesson at {:?}", path);
    Ok(())
}

fn lesson_path(lessons_dir: &Path, number: usize) -> PathBuf {
    lessons_dir.join(format!("lesson{}.csv", number))
}

/// Scan the directory for `lessonN.csv` files and return the highest N.
fn highest_lesson_number(lessons_dir: &Path) -> Result<usize> {
    if !lessons_dir.exists() {
        return Ok(0);
    }

    let mut highest = 0;
    for entry in fs::read_dir(lessons_dir)? {
        let path = entry?.path();
        if let Some(number) = parse_lesson_number(&path) {
            highest = highest.max(number);
        }
    }
    Ok(highest)
}

fn parse_lesson_number(path: &Path) -> Option<usize> {
    if !path.extension().map_or(false, |e| e == "csv") {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix("lesson")?
        .parse()
        .ok()
}

fn load_lesson(path: &Path, number: usize) -> Lesson {
    let cards = match fs::read_to_string(path) {
        Ok(content) => parse_rows(&content),
        Err(e) => {
            log::warn!("failed to read {:?}: {}, loading empty lesson", path, e);
            Vec::new()
        }
    };
    Lesson { number, cards }
}

/// Parse `english,pinyin,chinese` rows. Malformed rows are dropped.
fn parse_rows(content: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();

    for (i, line) in content.lines().enumerate() {
        // Skip header
        if i == 0 && line.to_lowercase().contains("english") {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            if !line.trim().is_empty() {
                log::debug!("dropping malformed row {}: {:?}", i + 1, line);
            }
            continue;
        }

        let english = parts[0].trim();
        let pinyin = parts[1].trim();
        let chinese = parts[2].trim();

        if english.is_empty() || pinyin.is_empty() || chinese.is_empty() {
            log::debug!("dropping row {} with empty field", i + 1);
            continue;
        }

        cards.push(Flashcard::new(
            english.to_string(),
            pinyin.to_string(),
            chinese.to_string(),
        ));
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_rows_and_skips_header() {
        let cards = parse_rows("english,pinyin,chinese\ntea,chá,茶\nbook,shū,书\n");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].english, "tea");
        assert_eq!(cards[0].pinyin, "chá");
        assert_eq!(cards[0].chinese, "茶");
    }

    #[test]
    fn drops_malformed_rows() {
        let cards = parse_rows("tea,chá,茶\njust-one-field\n,,\nbook,shū,书\n\n");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].english, "book");
    }

    #[test]
    fn trims_whitespace() {
        let cards = parse_rows(" tea , chá , 茶 \n");
        assert_eq!(cards[0].english, "tea");
        assert_eq!(cards[0].chinese, "茶");
    }

    #[test]
    fn loads_numbered_lessons_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lesson2.csv"), "book,shū,书\n").unwrap();
        fs::write(dir.path().join("lesson1.csv"), "tea,chá,茶\nwater,shuǐ,水\n").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lessons[0].number, 1);
        assert_eq!(catalog.lessons[0].cards.len(), 2);
        assert_eq!(catalog.lessons[1].cards[0].english, "book");
    }

    #[test]
    fn missing_lesson_in_sequence_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lesson1.csv"), "tea,chá,茶\n").unwrap();
        fs::write(dir.path().join("lesson3.csv"), "book,shū,书\n").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.lessons[1].cards.is_empty());
        assert_eq!(catalog.lessons[2].cards.len(), 1);
    }

    #[test]
    fn ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        fs::write(dir.path().join("deck5.csv"), "a,b,c").unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_directory_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(&dir.path().join("nope")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn starter_lesson_installed_once() {
        let dir = tempfile::tempdir().unwrap();
        install_starter_lessons(dir.path()).unwrap();

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.lessons[0].cards.is_empty());

        // A second install must not clobber user edits.
        fs::write(dir.path().join("lesson1.csv"), "tea,chá,茶\n").unwrap();
        install_starter_lessons(dir.path()).unwrap();
        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.lessons[0].cards.len(), 1);
    }
}
