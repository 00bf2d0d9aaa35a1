//! Named work/break presets.

use serde::{Deserialize, Serialize};

use crate::error::TaskTokError;

/// A named pair of work and break durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Work phase length in minutes.
    pub work_minutes: u32,
    /// Break phase length in minutes.
    pub break_minutes: u32,
}

impl Preset {
    /// Create a preset.
    #[must_use]
    pub fn new(name: impl Into<String>, work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            name: name.into(),
            work_minutes,
            break_minutes,
        }
    }

    /// The quick presets every install ships with.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new("25 min Focus", 25, 5),
            Self::new("5 min Break", 15, 5),
            Self::new("15 min Break", 15, 15),
            Self::new("1 Hour Focus", 60, 10),
        ]
    }

    /// Short `work/break` summary, e.g. `25/5`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{}", self.work_minutes, self.break_minutes)
    }
}

/// Built-in presets followed by user-defined ones.
#[derive(Debug, Clone)]
pub struct PresetBook {
    presets: Vec<Preset>,
}

impl PresetBook {
    /// Combine the built-ins with extra presets from the config file.
    ///
    /// A user preset whose name matches a built-in replaces it in place.
    #[must_use]
    pub fn new(extra: &[Preset]) -> Self {
        let mut presets = Preset::builtin();
        for preset in extra {
            if let Some(existing) = presets
                .iter_mut()
                .find(|p| p.name.eq_ignore_ascii_case(&preset.name))
            {
                *existing = preset.clone();
            } else {
                presets.push(preset.clone());
            }
        }
        Self { presets }
    }

    /// All presets in display order.
    #[must_use]
    pub fn all(&self) -> &[Preset] {
        &self.presets
    }

    /// Preset at a 1-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Preset> {
        index.checked_sub(1).and_then(|i| self.presets.get(i))
    }

    /// Look up a preset by 1-based index or case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns `TaskTokError::NotFound` if nothing matches.
    pub fn find(&self, key: &str) -> Result<&Preset, TaskTokError> {
        let key = key.trim();
        let found = match key.parse::<usize>() {
            Ok(index) => self.get(index),
            Err(_) => self
                .presets
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(key)),
        };
        found.ok_or_else(|| TaskTokError::NotFound(format!("preset '{key}'")))
    }
}

impl Default for PresetBook {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_presets() {
        let presets = Preset::builtin();
        assert_eq!(presets.len(), 4);
        assert_eq!(presets[0].summary(), "25/5");
        assert_eq!(presets[3], Preset::new("1 Hour Focus", 60, 10));
    }

    #[test]
    fn test_find_by_index_and_name() {
        let book = PresetBook::default();
        assert_eq!(book.find("2").unwrap().summary(), "15/5");
        assert_eq!(book.find("15 MIN break").unwrap().summary(), "15/15");
        assert!(book.find("0").is_err());
        assert!(book.find("5").is_err());
        assert!(matches!(
            book.find("marathon"),
            Err(TaskTokError::NotFound(_))
        ));
    }

    #[test]
    fn test_user_presets_extend_and_override() {
        let extra = vec![
            Preset::new("Deep Work", 50, 10),
            Preset::new("25 min focus", 30, 5),
        ];
        let book = PresetBook::new(&extra);

        assert_eq!(book.all().len(), 5);
        assert_eq!(book.get(1).unwrap().work_minutes, 30);
        assert_eq!(book.get(5).unwrap().name, "Deep Work");
    }
}
