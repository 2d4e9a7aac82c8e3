//! Focus handling shared by all forms

use super::field::FormField;

/// Trait for common form operations.
///
/// Slots `0..field_count() - 1` are input fields; the last slot is the
/// button row.
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }

    /// The focused input field, `None` on the buttons row
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TwoFieldForm {
        first: FormField,
        second: FormField,
        active_field_index: usize,
    }

    impl TwoFieldForm {
        fn new() -> Self {
            Self {
                first: FormField::text("first", "First"),
                second: FormField::text("second", "Second"),
                active_field_index: 0,
            }
        }
    }

    impl Form for TwoFieldForm {
        fn field_count(&self) -> usize {
            3
        }
        fn active_field(&self) -> usize {
            self.active_field_index
        }
        fn set_active_field(&mut self, index: usize) {
            self.active_field_index = index.min(2);
        }
        fn get_field(&self, index: usize) -> Option<&FormField> {
            match index {
                0 => Some(&self.first),
                1 => Some(&self.second),
                _ => None,
            }
        }
        fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
            match index {
                0 => Some(&mut self.first),
                1 => Some(&mut self.second),
                _ => None,
            }
        }
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = TwoFieldForm::new();
        for _ in 0..3 {
            form.next_field();
        }
        assert_eq!(form.active_field(), 0);
    }

    #[test]
    fn test_prev_field_wraps_to_buttons() {
        let mut form = TwoFieldForm::new();
        form.prev_field();
        assert_eq!(form.active_field(), 2);
        assert!(form.is_buttons_row_active());
    }

    #[test]
    fn test_active_field_mut_none_on_buttons_row() {
        let mut form = TwoFieldForm::new();
        assert_eq!(form.get_active_field_mut().unwrap().name, "first");
        form.set_active_field(100);
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_get_field() {
        let form = TwoFieldForm::new();
        assert_eq!(form.get_field(1).unwrap().name, "second");
        assert!(form.get_field(2).is_none());
    }
}
