//! Live validation of the recharge form

use crate::state::forms::validation::{
    check_live, is_valid_recharge_amount, is_valid_recharge_mobile,
};
use crate::state::{Form, FormField, ValidationError};

/// What the enabled submit button hands over for initiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RechargeRequest {
    pub mobile: String,
    pub amount: u32,
}

/// Render projection of the recharge form
#[derive(Debug, Clone, Copy)]
pub struct RechargeView<'a> {
    pub mobile: &'a FormField,
    pub amount: &'a FormField,
    pub submit_enabled: bool,
    pub active_field: usize,
}

/// Validates the mobile and amount fields on every keystroke and gates the
/// submit button on both being valid.
#[derive(Debug, Clone)]
pub struct RechargeFormValidator {
    mobile: FormField,
    amount: FormField,
    active_field_index: usize,
}

impl RechargeFormValidator {
    pub fn new() -> Self {
        Self {
            mobile: FormField::text("mobileNumber", "Mobile Number"),
            amount: FormField::text("amount", "Amount (10-100)"),
            active_field_index: 0,
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.validate();
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.validate();
        }
    }

    #[allow(dead_code)]
    pub fn set_mobile(&mut self, value: &str) {
        self.mobile.set_text(value);
        self.validate();
    }

    #[allow(dead_code)]
    pub fn set_amount(&mut self, value: &str) {
        self.amount.set_text(value);
        self.validate();
    }

    /// Re-validate both fields. Raw values are checked; no trimming.
    pub fn validate(&mut self) {
        let mobile = check_live(
            self.mobile.as_text(),
            is_valid_recharge_mobile,
            ValidationError::RechargeMobile,
        );
        self.mobile.set_validity(mobile);

        let amount = check_live(
            self.amount.as_text(),
            is_valid_recharge_amount,
            ValidationError::RechargeAmount,
        );
        self.amount.set_validity(amount);
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.mobile.is_valid() && self.amount.is_valid()
    }

    #[allow(dead_code)]
    pub fn mobile(&self) -> &FormField {
        &self.mobile
    }

    #[allow(dead_code)]
    pub fn amount(&self) -> &FormField {
        &self.amount
    }

    /// The submit action. `None` while the button is disabled.
    pub fn initiate(&self) -> Option<RechargeRequest> {
        if !self.is_submit_enabled() {
            return None;
        }
        let amount = self.amount.as_text().parse().ok()?;
        Some(RechargeRequest {
            mobile: self.mobile.as_text().to_string(),
            amount,
        })
    }

    pub fn view(&self) -> RechargeView<'_> {
        RechargeView {
            mobile: &self.mobile,
            amount: &self.amount,
            submit_enabled: self.is_submit_enabled(),
            active_field: self.active_field_index,
        }
    }
}

impl Default for RechargeFormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RechargeFormValidator {
    fn field_count(&self) -> usize {
        3 // mobile, amount, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.mobile),
            1 => Some(&self.amount),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.mobile),
            1 => Some(&mut self.amount),
            _ => None,
        }
    }
}
