//! Fonts available to text drawn on a canvas.

use std::path::PathBuf;
use std::sync::Arc;

/// Font sources and generic-family preferences for one canvas.
///
/// Nothing is loaded until the canvas first draws text; the configuration
/// is then turned into a `fontdb` database once and kept.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// In-memory font files (TTF/OTF) registered before anything else.
    pub custom_fonts: Vec<CustomFont>,
    /// Preferred concrete families behind `sans-serif`, `serif` and `monospace`.
    pub generic_families: GenericFamilyMap,
    /// Scan the platform's font locations. Default: true.
    pub load_system_fonts: bool,
    /// Extra directories to scan.
    pub font_dirs: Vec<PathBuf>,
    /// Hint glyph outlines. Default: false.
    pub hinting_enabled: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::default(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
            hinting_enabled: false,
        }
    }
}

impl FontConfig {
    /// A configuration that only sees explicitly added fonts.
    pub fn empty() -> Self {
        Self {
            load_system_fonts: false,
            ..Self::default()
        }
    }

    pub fn with_font_data(mut self, data: Vec<u8>) -> Self {
        self.custom_fonts.push(CustomFont {
            data: Arc::new(data),
        });
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    /// Build the font database described by this configuration.
    pub(crate) fn build_database(&self) -> fontdb::Database {
        let mut db = fontdb::Database::new();

        if self.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.font_dirs {
            db.load_fonts_dir(dir);
        }
        for font in &self.custom_fonts {
            db.load_font_data(font.data.as_ref().clone());
        }

        self.generic_families.install(&mut db);
        log::debug!(target: "canvas", "font database ready with {} faces", db.len());
        db
    }
}

/// Raw font file data, shared between clones of a configuration.
#[derive(Clone, Debug)]
pub struct CustomFont {
    pub data: Arc<Vec<u8>>,
}

/// Candidate concrete families for each generic family, best first.
#[derive(Clone, Debug)]
pub struct GenericFamilyMap {
    pub sans_serif: Vec<String>,
    pub serif: Vec<String>,
    pub monospace: Vec<String>,
}

impl Default for GenericFamilyMap {
    fn default() -> Self {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            sans_serif: names(&["DejaVu Sans", "Liberation Sans", "Arial", "Helvetica"]),
            serif: names(&["DejaVu Serif", "Liberation Serif", "Times New Roman"]),
            monospace: names(&["DejaVu Sans Mono", "Liberation Mono", "Courier New"]),
        }
    }
}

impl GenericFamilyMap {
    /// First candidate present in `db`.
    fn pick<'a>(db: &fontdb::Database, candidates: &'a [String]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|name| {
                db.faces()
                    .any(|face| face.families.iter().any(|(family, _)| family == *name))
            })
            .map(String::as_str)
    }

    /// Point each generic family of `db` at its first available candidate.
    /// Generic families with no available candidate keep fontdb's default.
    fn install(&self, db: &mut fontdb::Database) {
        if let Some(name) = Self::pick(db, &self.sans_serif) {
            db.set_sans_serif_family(name);
        }
        if let Some(name) = Self::pick(db, &self.serif) {
            db.set_serif_family(name);
        }
        if let Some(name) = Self::pick(db, &self.monospace) {
            db.set_monospace_family(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FontConfig::default();
        assert!(config.custom_fonts.is_empty());
        assert!(config.load_system_fonts);
        assert!(!config.hinting_enabled);
        assert_eq!(config.generic_families.sans_serif[0], "DejaVu Sans");
        assert_eq!(config.generic_families.monospace[0], "DejaVu Sans Mono");
    }

    #[test]
    fn test_empty_config_has_no_faces() {
        let db = FontConfig::empty().build_database();
        assert_eq!(db.faces().count(), 0);
    }

    #[test]
    fn test_builders() {
        let config = FontConfig::empty()
            .with_font_dir("/nonexistent/fonts")
            .with_font_data(vec![1, 2, 3]);
        assert_eq!(config.font_dirs, vec![PathBuf::from("/nonexistent/fonts")]);
        assert_eq!(config.custom_fonts.len(), 1);
        // Unreadable directories and invalid data are skipped.
        assert_eq!(config.build_database().faces().count(), 0);
    }

    #[test]
    fn test_clones_share_font_data() {
        let config = FontConfig::empty().with_font_data(vec![0u8; 1000]);
        let cloned = config.clone();
        assert!(Arc::ptr_eq(
            &config.custom_fonts[0].data,
            &cloned.custom_fonts[0].data
        ));
    }
}
