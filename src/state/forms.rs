//! Form editing state types.
//!
//! Each form owns its field values and the cursor over its fields.
//! Validation returns the user-facing message for a danger notification;
//! a failed validation never mutates anything outside the form.

use crate::utils::text_processing::is_valid_email;
use chrono::NaiveDate;

/// Specifying the authentication screen modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthMode {
    Login,
    Register,
}

/// Specifying auth form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AuthField {
    Name,
    Email,
    Password,
    Confirm,
}

/// Login / registration form.
///
pub struct AuthForm {
    pub mode: AuthMode,
    pub field: AuthField,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl AuthForm {
    pub fn new() -> AuthForm {
        AuthForm {
            mode: AuthMode::Login,
            field: AuthField::Email,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
        }
    }

    /// Switch between login and registration, clearing entered values.
    ///
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.reset();
    }

    /// Fields for the current mode, in navigation order.
    ///
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::Confirm,
            ],
        }
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + fields.len() - 1) % fields.len()];
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Confirm => &mut self.confirm,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Clear entered values, keeping the mode.
    ///
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm.clear();
        self.field = match self.mode {
            AuthMode::Login => AuthField::Email,
            AuthMode::Register => AuthField::Name,
        };
    }

    /// Validate the form for the current mode.
    ///
    pub fn validate(&self) -> Result<(), String> {
        match self.mode {
            AuthMode::Login => {
                if self.email.is_empty() || self.password.is_empty() {
                    return Err("Please enter email and password".to_string());
                }
            }
            AuthMode::Register => {
                if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
                    return Err("Please fill all required fields".to_string());
                }
                if self.password != self.confirm {
                    return Err("Passwords do not match".to_string());
                }
            }
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }
        Ok(())
    }
}

/// Specifying goal form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GoalField {
    Title,
    Category,
    Target,
    Unit,
}

/// Health goal entry form.
///
pub struct GoalForm {
    pub field: GoalField,
    pub title: String,
    pub category: String,
    pub target: String,
    pub unit: String,
}

impl GoalForm {
    pub fn new() -> GoalForm {
        GoalForm {
            field: GoalField::Title,
            title: String::new(),
            category: String::new(),
            target: String::new(),
            unit: String::new(),
        }
    }

    const FIELDS: [GoalField; 4] = [
        GoalField::Title,
        GoalField::Category,
        GoalField::Target,
        GoalField::Unit,
    ];

    pub fn next_field(&mut self) {
        let index = Self::FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = Self::FIELDS[(index + 1) % Self::FIELDS.len()];
    }

    pub fn prev_field(&mut self) {
        let index = Self::FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = Self::FIELDS[(index + Self::FIELDS.len() - 1) % Self::FIELDS.len()];
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            GoalField::Title => &mut self.title,
            GoalField::Category => &mut self.category,
            GoalField::Target => &mut self.target,
            GoalField::Unit => &mut self.unit,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn reset(&mut self) {
        *self = GoalForm::new();
    }

    /// Title, category and target are required; unit is optional.
    ///
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() || self.category.is_empty() || self.target.is_empty() {
            return Err("Please fill all required fields".to_string());
        }
        Ok(())
    }
}

/// Specifying medication form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MedicationField {
    Name,
    Dosage,
    Unit,
    Time(usize),
}

/// Medication entry form with a growable list of dose times.
///
pub struct MedicationForm {
    pub field: MedicationField,
    pub name: String,
    pub dosage: String,
    pub unit: String,
    pub times: Vec<String>,
}

impl MedicationForm {
    pub fn new() -> MedicationForm {
        MedicationForm {
            field: MedicationField::Name,
            name: String::new(),
            dosage: String::new(),
            unit: String::new(),
            times: vec![String::new()],
        }
    }

    fn fields(&self) -> Vec<MedicationField> {
        let mut fields = vec![
            MedicationField::Name,
            MedicationField::Dosage,
            MedicationField::Unit,
        ];
        for index in 0..self.times.len() {
            fields.push(MedicationField::Time(index));
        }
        fields
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + 1) % fields.len()];
    }

    pub fn prev_field(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(index + fields.len() - 1) % fields.len()];
    }

    /// Append a dose time row and move the cursor onto it.
    ///
    pub fn add_time(&mut self) {
        self.times.push(String::new());
        self.field = MedicationField::Time(self.times.len() - 1);
    }

    /// Remove the dose time row under the cursor, keeping at least one row.
    ///
    pub fn remove_time(&mut self) {
        if let MedicationField::Time(index) = self.field {
            if self.times.len() > 1 {
                self.times.remove(index);
                let last = self.times.len() - 1;
                self.field = MedicationField::Time(index.min(last));
            }
        }
    }

    pub fn active_value_mut(&mut self) -> &mut String {
        match self.field {
            MedicationField::Name => &mut self.name,
            MedicationField::Dosage => &mut self.dosage,
            MedicationField::Unit => &mut self.unit,
            MedicationField::Time(index) => {
                let last = self.times.len() - 1;
                &mut self.times[index.min(last)]
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    pub fn reset(&mut self) {
        *self = MedicationForm::new();
    }

    /// Name and dosage are required.
    ///
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() || self.dosage.is_empty() {
            return Err("Please fill all required fields".to_string());
        }
        Ok(())
    }
}

/// Specifying appointment form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppointmentField {
    Provider,
    Kind,
    Date,
    Time,
}

/// Appointment scheduling form. The provider is a selection over the fixed
/// roster rather than free text.
///
pub struct AppointmentForm {
    pub field: AppointmentField,
    pub provider_index: usize,
    pub kind: String,
    pub date: String,
    pub time: String,
}

impl AppointmentForm {
    pub fn new() -> AppointmentForm {
        AppointmentForm {
            field: AppointmentField::Provider,
            provider_index: 0,
            kind: String::new(),
            date: String::new(),
            time: String::new(),
        }
    }

    const FIELDS: [AppointmentField; 4] = [
        AppointmentField::Provider,
        AppointmentField::Kind,
        AppointmentField::Date,
        AppointmentField::Time,
    ];

    pub fn next_field(&mut self) {
        let index = Self::FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = Self::FIELDS[(index + 1) % Self::FIELDS.len()];
    }

    pub fn prev_field(&mut self) {
        let index = Self::FIELDS.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = Self::FIELDS[(index + Self::FIELDS.len() - 1) % Self::FIELDS.len()];
    }

    /// Cycle the provider selection over a roster of `count` providers.
    ///
    pub fn cycle_provider(&mut self, count: usize) {
        if count > 0 {
            self.provider_index = (self.provider_index + 1) % count;
        }
    }

    pub fn active_value_mut(&mut self) -> Option<&mut String> {
        match self.field {
            AppointmentField::Provider => None,
            AppointmentField::Kind => Some(&mut self.kind),
            AppointmentField::Date => Some(&mut self.date),
            AppointmentField::Time => Some(&mut self.time),
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(value) = self.active_value_mut() {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(value) = self.active_value_mut() {
            value.pop();
        }
    }

    pub fn reset(&mut self) {
        *self = AppointmentForm::new();
    }

    /// Date and time are required, and the date must parse.
    ///
    pub fn validate(&self) -> Result<(), String> {
        if self.date.is_empty() || self.time.is_empty() {
            return Err("Please fill all required fields".to_string());
        }
        if self.parsed_date().is_none() {
            return Err("Please enter a valid date (YYYY-MM-DD)".to_string());
        }
        Ok(())
    }

    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Long-format appointment date, e.g. "Monday, March 10, 2026".
    /// Falls back to the raw input when the date does not parse.
    ///
    pub fn formatted_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%A, %B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_email_and_password() {
        let mut form = AuthForm::new();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter email and password"
        );

        form.email = "a@b.com".to_string();
        form.password = "secret".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let mut form = AuthForm::new();
        form.email = "not-an-email".to_string();
        form.password = "secret".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_register_requires_matching_passwords() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        form.name = "A".to_string();
        form.email = "a@b.com".to_string();
        form.password = "secret".to_string();
        form.confirm = "other".to_string();
        assert_eq!(form.validate().unwrap_err(), "Passwords do not match");

        form.confirm = "secret".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_auth_field_cycle_respects_mode() {
        let mut form = AuthForm::new();
        assert_eq!(form.field, AuthField::Email);
        form.next_field();
        assert_eq!(form.field, AuthField::Password);
        form.next_field();
        assert_eq!(form.field, AuthField::Email);

        form.toggle_mode();
        assert_eq!(form.field, AuthField::Name);
        form.prev_field();
        assert_eq!(form.field, AuthField::Confirm);
    }

    #[test]
    fn test_toggle_mode_clears_values() {
        let mut form = AuthForm::new();
        form.email = "a@b.com".to_string();
        form.toggle_mode();
        assert!(form.email.is_empty());
        assert_eq!(form.mode, AuthMode::Register);
    }

    #[test]
    fn test_goal_form_requires_title_category_target() {
        let mut form = GoalForm::new();
        assert!(form.validate().is_err());

        form.title = "Walk more".to_string();
        form.category = "Activity".to_string();
        form.target = "10000".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_goal_form_unit_optional() {
        let mut form = GoalForm::new();
        form.title = "Sleep".to_string();
        form.category = "Rest".to_string();
        form.target = "8".to_string();
        assert!(form.unit.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_medication_form_requires_name_and_dosage() {
        let mut form = MedicationForm::new();
        assert!(form.validate().is_err());

        form.name = "Lisinopril".to_string();
        form.dosage = "10".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_medication_time_rows() {
        let mut form = MedicationForm::new();
        assert_eq!(form.times.len(), 1);

        form.add_time();
        assert_eq!(form.times.len(), 2);
        assert_eq!(form.field, MedicationField::Time(1));

        form.remove_time();
        assert_eq!(form.times.len(), 1);
        assert_eq!(form.field, MedicationField::Time(0));

        // Last row cannot be removed
        form.remove_time();
        assert_eq!(form.times.len(), 1);
    }

    #[test]
    fn test_appointment_requires_date_and_time() {
        let mut form = AppointmentForm::new();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please fill all required fields"
        );

        form.date = "2026-03-10".to_string();
        form.time = "14:30".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_appointment_rejects_unparseable_date() {
        let mut form = AppointmentForm::new();
        form.date = "next tuesday".to_string();
        form.time = "14:30".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Please enter a valid date (YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_appointment_formatted_date() {
        let mut form = AppointmentForm::new();
        form.date = "2026-03-10".to_string();
        assert_eq!(form.formatted_date(), "Tuesday, March 10, 2026");
    }

    #[test]
    fn test_appointment_provider_cycling() {
        let mut form = AppointmentForm::new();
        form.cycle_provider(3);
        form.cycle_provider(3);
        assert_eq!(form.provider_index, 2);
        form.cycle_provider(3);
        assert_eq!(form.provider_index, 0);
    }
}
