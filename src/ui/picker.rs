//! Selection overlay state for the model picker.

use crate::core::catalog::PREFERRED_MODELS;

#[derive(Debug, Clone)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    pub title: String,
    pub items: Vec<PickerItem>,
    pub selected: usize,
}

impl PickerState {
    /// Picker over the model catalog, with the currently bound model
    /// preselected and preferred ids marked.
    pub fn for_models(models: &[String], current: &str) -> Self {
        let items = models
            .iter()
            .map(|id| PickerItem {
                id: id.clone(),
                label: if PREFERRED_MODELS.contains(&id.as_str()) {
                    format!("{id} ★")
                } else {
                    id.clone()
                },
            })
            .collect::<Vec<_>>();
        let selected = items
            .iter()
            .position(|item| item.id == current)
            .unwrap_or(0);

        PickerState {
            title: "Select Model".to_string(),
            items,
            selected,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|item| item.id.as_str())
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            if self.selected == 0 {
                self.selected = self.items.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models() -> Vec<String> {
        vec![
            "gemini-2.5-flash".to_string(),
            "gemini-2.5-pro".to_string(),
            "gemini-exp-1206".to_string(),
        ]
    }

    #[test]
    fn current_model_is_preselected() {
        let picker = PickerState::for_models(&models(), "gemini-2.5-pro");
        assert_eq!(picker.selected_id(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn unknown_current_selects_first() {
        let picker = PickerState::for_models(&models(), "gone");
        assert_eq!(picker.selected_id(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn movement_wraps_both_ways() {
        let mut picker = PickerState::for_models(&models(), "gemini-2.5-flash");
        picker.move_up();
        assert_eq!(picker.selected_id(), Some("gemini-exp-1206"));
        picker.move_down();
        assert_eq!(picker.selected_id(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn preferred_models_are_marked() {
        let picker = PickerState::for_models(&models(), "gemini-2.5-flash");
        assert!(picker.items[0].label.ends_with('★'));
        assert_eq!(picker.items[2].label, "gemini-exp-1206");
    }
}
