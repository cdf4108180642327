use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::parser::CsvParser;
use super::writer::CsvWriter;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Raw,
    Table,
}

/// Which representation holds edits the other one has not seen yet.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum SyncState {
    Clean,
    RawAhead,
    GridAhead,
}

/// Holds one CSV document as raw text and as a grid.
///
/// Only one side is authoritative at a time: raw text while it is being
/// typed, the grid while cells are being edited. The other side is derived
/// when it is asked for, not after every keystroke.
pub struct Editor {
    mode: ViewMode,
    raw: String,
    grid: Grid,
    sync: SyncState,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Raw,
            raw: String::new(),
            grid: Grid::new(),
            sync: SyncState::Clean,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let mut editor = Self::new();
        editor.set_raw(text);
        editor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_raw(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.sync = SyncState::RawAhead;
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.derive_grid();
        self.grid.set_cell(row, col, value);
        self.sync = SyncState::GridAhead;
    }

    pub fn switch_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        match mode {
            ViewMode::Table => {
                // the raw text comes back normalized from the grid
                self.derive_grid();
                self.sync = SyncState::GridAhead;
            }
            ViewMode::Raw => self.derive_raw(),
        }
        tracing::debug!(from = ?self.mode, to = ?mode, "switching view mode");
        self.mode = mode;
    }

    pub fn grid(&mut self) -> &Grid {
        self.derive_grid();
        &self.grid
    }

    pub fn raw(&mut self) -> &str {
        self.derive_raw();
        &self.raw
    }

    /// Edits the raw text in place. `edit` returns whether it changed
    /// anything; only then does the raw side become authoritative.
    pub fn edit_raw(&mut self, edit: impl FnOnce(&mut String) -> bool) -> bool {
        self.derive_raw();
        let changed = edit(&mut self.raw);
        if changed {
            self.sync = SyncState::RawAhead;
        }
        changed
    }

    /// Text to save: the serialized grid in table mode, the raw text as
    /// typed in raw mode.
    pub fn export_text(&mut self) -> String {
        match self.mode {
            ViewMode::Table => CsvWriter::serialize(self.grid()),
            ViewMode::Raw => self.raw().to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.grid.clear();
        self.mode = ViewMode::Raw;
        self.sync = SyncState::Clean;
        tracing::debug!("cleared document");
    }

    pub fn is_empty(&self) -> bool {
        match self.sync {
            SyncState::GridAhead => self.grid.is_empty(),
            SyncState::RawAhead => self.raw.is_empty(),
            SyncState::Clean => self.raw.is_empty() && self.grid.is_empty(),
        }
    }

    fn derive_grid(&mut self) {
        if self.sync == SyncState::RawAhead {
            self.grid = CsvParser::parse(&self.raw);
            self.sync = SyncState::Clean;
        }
    }

    fn derive_raw(&mut self) {
        if self.sync == SyncState::GridAhead {
            self.raw = CsvWriter::serialize(&self.grid);
            self.sync = SyncState::Clean;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_is_empty_raw_mode() {
        let mut editor = Editor::new();
        assert_eq!(editor.mode(), ViewMode::Raw);
        assert!(editor.is_empty());
        assert!(editor.grid().is_empty());
        assert_eq!(editor.raw(), "");
    }

    #[test]
    fn test_raw_text_parsed_on_switch_to_table() {
        let mut editor = Editor::from_text("a,b\r\nc,d\r\n");
        editor.switch_mode(ViewMode::Table);
        assert_eq!(editor.mode(), ViewMode::Table);
        assert_eq!(editor.grid(), &Grid::from(vec![vec!["a", "b"], vec!["c", "d"]]));
    }

    #[test]
    fn test_cell_edits_regenerate_raw_on_switch_back() {
        let mut editor = Editor::from_text("a,b\r\nc,d\r\n");
        editor.switch_mode(ViewMode::Table);
        editor.set_cell(0, 1, "x,y");
        editor.set_cell(2, 0, "new");
        editor.switch_mode(ViewMode::Raw);
        assert_eq!(editor.raw(), "a,\"x,y\"\nc,d\nnew");
    }

    #[test]
    fn test_table_visit_normalizes_raw_text() {
        let mut editor = Editor::from_text("a,b\r\nc,\"d\"\r\n");
        editor.switch_mode(ViewMode::Table);
        editor.switch_mode(ViewMode::Raw);
        assert_eq!(editor.raw(), "a,b\nc,d");
    }

    #[test]
    fn test_table_visit_resolves_stray_quotes() {
        let mut editor = Editor::from_text("ab\"c,d\"e,f\r");
        editor.switch_mode(ViewMode::Table);
        assert_eq!(editor.export_text(), "\"abc,de\",f");
        editor.switch_mode(ViewMode::Raw);
        assert_eq!(editor.raw(), "\"abc,de\",f");
    }

    #[test]
    fn test_raw_mode_without_table_visit_keeps_raw_text() {
        let mut editor = Editor::from_text("a,b\r\n");
        assert_eq!(editor.raw(), "a,b\r\n");
        assert_eq!(editor.export_text(), "a,b\r\n");
    }

    #[test]
    fn test_export_text_depends_on_mode() {
        let mut editor = Editor::from_text("a,\"b\"\r\n");
        assert_eq!(editor.export_text(), "a,\"b\"\r\n");

        editor.switch_mode(ViewMode::Table);
        assert_eq!(editor.export_text(), "a,b");
    }

    #[test]
    fn test_set_cell_after_raw_edit_sees_raw_text() {
        let mut editor = Editor::new();
        editor.switch_mode(ViewMode::Table);
        editor.set_raw("a,b");
        editor.set_cell(0, 2, "c");
        assert_eq!(editor.grid(), &Grid::from(vec![vec!["a", "b", "c"]]));
    }

    #[test]
    fn test_edit_raw_marks_raw_authoritative() {
        let mut editor = Editor::new();
        assert!(editor.edit_raw(|raw| {
            raw.push_str("x,y");
            true
        }));
        assert_eq!(editor.grid(), &Grid::from(vec![vec!["x", "y"]]));
    }

    #[test]
    fn test_unchanged_raw_edit_keeps_grid_edits() {
        let mut editor = Editor::new();
        editor.switch_mode(ViewMode::Table);
        editor.set_cell(0, 0, "kept");
        assert!(!editor.edit_raw(|_| false));
        assert_eq!(editor.grid(), &Grid::from(vec![vec!["kept"]]));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut editor = Editor::from_text("a,b");
        editor.switch_mode(ViewMode::Table);
        editor.set_cell(3, 3, "z");
        editor.clear();
        assert_eq!(editor.mode(), ViewMode::Raw);
        assert!(editor.is_empty());
        assert_eq!(editor.export_text(), "");
    }
}
