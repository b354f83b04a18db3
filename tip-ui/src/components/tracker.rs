use tip_core::TipForm;

/// The editable text fields on the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Bill,
    CustomTip,
    People,
}

/// Last text seen in each input widget.
///
/// Input widgets notify observers for cursor and focus changes as well as
/// edits; only a real change in text is forwarded to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTracker {
    bill: String,
    custom_tip: String,
    people: String,
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self {
            bill: String::new(),
            custom_tip: String::new(),
            people: "1".to_string(),
        }
    }
}

impl ChangeTracker {
    fn slot(
        &mut self,
        field: FormField,
    ) -> &mut String {
        match field {
            FormField::Bill => &mut self.bill,
            FormField::CustomTip => &mut self.custom_tip,
            FormField::People => &mut self.people,
        }
    }

    /// Records `value` for `field`, returning `true` if it differs from the
    /// previous text.
    pub fn update(
        &mut self,
        field: FormField,
        value: &str,
    ) -> bool {
        let slot = self.slot(field);
        if slot.as_str() == value {
            return false;
        }
        value.clone_into(slot);
        true
    }

    /// Records text written programmatically so it is not replayed as an edit.
    pub fn record(
        &mut self,
        field: FormField,
        value: &str,
    ) {
        value.clone_into(self.slot(field));
    }
}

/// Routes edited text to the matching [`TipForm`] handler.
pub fn apply_field(
    form: &mut TipForm,
    field: FormField,
    value: &str,
) {
    match field {
        FormField::Bill => form.set_bill_amount(value),
        FormField::CustomTip => form.set_custom_tip(value),
        FormField::People => form.set_number_of_people(value),
    }
}

/// Routes focus on an input to the form. Only the custom tip field reacts:
/// focusing it makes the custom tip active before anything is typed.
///
/// Returns `true` if the form changed.
pub fn apply_focus(
    form: &mut TipForm,
    field: FormField,
) -> bool {
    match field {
        FormField::CustomTip if !form.is_custom_active() => {
            form.activate_custom_tip();
            true
        }
        _ => false,
    }
}

/// Text the people field should show after `typed` was applied, when it
/// differs from what was typed (e.g. `"0"` is shown as `"1"`).
///
/// An empty field is left alone so the user can clear it and type a new count.
pub fn people_correction(
    form: &TipForm,
    typed: &str,
) -> Option<String> {
    if typed.trim().is_empty() {
        return None;
    }
    let shown = form.number_of_people().to_string();
    (shown != typed).then_some(shown)
}
