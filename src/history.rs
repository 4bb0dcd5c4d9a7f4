use crate::error::ApiError;
use crate::state::Generation;
use std::collections::HashSet;

/// What the saved endpoint answers when the user has no saved generations.
pub const NO_SAVED_MESSAGE: &str = "No se encontraron generaciones favoritas para este usuario";

/// Reads the saved endpoint's outcome. The "nothing saved" rejection is an
/// empty list; any other failure becomes a screen message.
pub fn saved_or_empty(
    outcome: Result<Vec<Generation>, ApiError>,
    fallback: &str,
) -> Result<Vec<Generation>, String> {
    match outcome {
        Ok(saved) => Ok(saved),
        Err(ApiError::Rejected(message)) if message == NO_SAVED_MESSAGE => Ok(Vec::new()),
        Err(err) => Err(err.message_or(fallback)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Saved,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    pub tab: Tab,
    pub entries: Vec<Generation>,
    pub saved_ids: HashSet<u64>,
}

fn newest_first(entries: &mut [Generation]) {
    entries.sort_by(|a, b| b.id.cmp(&a.id));
}

impl History {
    /// The "all" tab: the backend list doesn't carry saved state, so it is
    /// joined against the separately fetched saved ids.
    pub fn load_all(&mut self, mut entries: Vec<Generation>, saved_ids: HashSet<u64>) {
        newest_first(&mut entries);
        for entry in &mut entries {
            entry.saved = saved_ids.contains(&entry.id);
        }
        self.tab = Tab::All;
        self.entries = entries;
        self.saved_ids = saved_ids;
    }

    pub fn load_saved(&mut self, mut entries: Vec<Generation>) {
        newest_first(&mut entries);
        for entry in &mut entries {
            entry.saved = true;
        }
        self.tab = Tab::Saved;
        self.saved_ids = entries.iter().map(|entry| entry.id).collect();
        self.entries = entries;
    }

    pub fn mark_saved(&mut self, id: u64) {
        self.saved_ids.insert(id);
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.saved = true;
        }
    }

    pub fn mark_unsaved(&mut self, id: u64) {
        self.saved_ids.remove(&id);
        match self.tab {
            Tab::All => {
                if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
                    entry.saved = false;
                }
            }
            Tab::Saved => self.entries.retain(|entry| entry.id != id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn empty_message(&self) -> &'static str {
        match self.tab {
            Tab::All => "No hay generaciones para mostrar",
            Tab::Saved => "No tienes generaciones guardadas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Content, GenerationKind};

    fn generation(id: u64) -> Generation {
        Generation {
            id,
            kind: GenerationKind::ContentIdea,
            prompt: format!("prompt {id}"),
            content: Content::Markdown(format!("idea {id}")),
            created_at: String::new(),
            saved: false,
        }
    }

    fn ids(history: &History) -> Vec<u64> {
        history.entries.iter().map(|entry| entry.id).collect()
    }

    #[test]
    fn test_sorted_newest_first() {
        let mut history = History::default();
        history.load_all([3, 1, 4, 5].map(generation).to_vec(), HashSet::new());
        assert_eq!(ids(&history), vec![5, 4, 3, 1]);

        history.load_saved([2, 9, 7].map(generation).to_vec());
        assert_eq!(ids(&history), vec![9, 7, 2]);
        assert!(history.entries.iter().all(|entry| entry.saved));
    }

    #[test]
    fn test_saved_join() {
        let mut history = History::default();
        history.load_all([1, 2, 3].map(generation).to_vec(), HashSet::from([2, 42]));
        let saved: Vec<_> = history.entries.iter().map(|entry| entry.saved).collect();
        assert_eq!(saved, vec![false, true, false]);
    }

    #[test]
    fn test_toggle() {
        let mut history = History::default();
        history.load_all([1, 2, 3].map(generation).to_vec(), HashSet::new());
        let before = history.clone();

        history.mark_saved(2);
        assert!(history.entries[1].saved);
        assert!(history.saved_ids.contains(&2));
        assert_eq!(history.entries[0], before.entries[0]);
        assert_eq!(history.entries[2], before.entries[2]);

        history.mark_unsaved(2);
        assert_eq!(history, before);
    }

    #[test]
    fn test_unsave_in_saved_tab() {
        let mut history = History::default();
        history.load_saved([4, 8].map(generation).to_vec());
        history.mark_unsaved(8);
        assert_eq!(ids(&history), vec![4]);
        assert!(!history.saved_ids.contains(&8));
        history.mark_unsaved(4);
        assert!(history.is_empty());
        assert_eq!(history.empty_message(), "No tienes generaciones guardadas");
    }

    #[test]
    fn test_no_saved_message_is_empty() {
        let outcome = Err(ApiError::Rejected(NO_SAVED_MESSAGE.to_string()));
        assert_eq!(saved_or_empty(outcome, "fallo"), Ok(Vec::new()));

        let saved = vec![generation(4)];
        assert_eq!(saved_or_empty(Ok(saved.clone()), "fallo"), Ok(saved));
    }

    #[test]
    fn test_other_saved_failures() {
        let outcome = Err(ApiError::Rejected("Token inválido".to_string()));
        assert_eq!(saved_or_empty(outcome, "fallo"), Err("Token inválido".to_string()));

        assert_eq!(saved_or_empty(Err(ApiError::Status(500)), "fallo"), Err("fallo".to_string()));
    }
}
