use outreach_common::forms::account::PasswordForm;
use outreach_common::model::user::AuthUser;

use super::messages::{PasswordField, ProfileField};

pub struct AccountComponent {
    /// Editable copy of the signed-in user.
    pub profile: AuthUser,
    pub passwords: PasswordForm,
    pub saving_profile: bool,
    pub saving_password: bool,
}

impl AccountComponent {
    pub fn new(user: &AuthUser) -> Self {
        Self {
            profile: user.clone(),
            passwords: PasswordForm::default(),
            saving_profile: false,
            saving_password: false,
        }
    }

    pub fn profile_field(&self, field: ProfileField) -> &str {
        let p = &self.profile;
        match field {
            ProfileField::FirstName => &p.first_name,
            ProfileField::MiddleName => &p.middle_name,
            ProfileField::LastName => &p.last_name,
            ProfileField::Email => &p.email,
            ProfileField::Phone => &p.phone,
            ProfileField::Address => &p.address,
        }
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: String) {
        let p = &mut self.profile;
        match field {
            ProfileField::FirstName => p.first_name = value,
            ProfileField::MiddleName => p.middle_name = value,
            ProfileField::LastName => p.last_name = value,
            ProfileField::Email => p.email = value,
            ProfileField::Phone => p.phone = value,
            ProfileField::Address => p.address = value,
        }
    }

    pub fn password_field(&self, field: PasswordField) -> &str {
        let f = &self.passwords;
        match field {
            PasswordField::Current => &f.current_password,
            PasswordField::New => &f.new_password,
            PasswordField::Confirm => &f.confirm_password,
        }
    }

    pub fn set_password_field(&mut self, field: PasswordField, value: String) {
        let f = &mut self.passwords;
        match field {
            PasswordField::Current => f.current_password = value,
            PasswordField::New => f.new_password = value,
            PasswordField::Confirm => f.confirm_password = value,
        }
    }
}
