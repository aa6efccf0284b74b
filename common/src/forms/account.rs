use super::{FormError, require};
use crate::model::user::AuthUser;
use crate::requests::{LoginRequest, UpdatePasswordRequest, UpdateProfileRequest};

pub fn login(username: &str, password: &str) -> Result<LoginRequest, Vec<FormError>> {
    let mut errors = Vec::new();
    require(username, "Username", &mut errors);
    require(password, "Password", &mut errors);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}

/// Builds the profile update from the edited copy of the signed-in user.
/// Every profile field is optional; values are sent trimmed.
pub fn profile(user: &AuthUser) -> UpdateProfileRequest {
    UpdateProfileRequest {
        username: user.username.clone(),
        email: user.email.trim().to_string(),
        phone: user.phone.trim().to_string(),
        address: user.address.trim().to_string(),
        firstname: user.first_name.trim().to_string(),
        middlename: user.middle_name.trim().to_string(),
        lastname: user.last_name.trim().to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<UpdatePasswordRequest, Vec<FormError>> {
        let mut errors = Vec::new();
        require(&self.current_password, "Current password", &mut errors);
        require(&self.new_password, "New password", &mut errors);
        require(&self.confirm_password, "Confirm password", &mut errors);
        if errors.is_empty() && self.new_password != self.confirm_password {
            errors.push(FormError::PasswordMismatch);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(UpdatePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mismatched_passwords_are_rejected() {
        let form = PasswordForm {
            current_password: "old".into(),
            new_password: "a".into(),
            confirm_password: "b".into(),
        };
        assert_eq!(form.validate().unwrap_err(), vec![FormError::PasswordMismatch]);
    }

    #[test]
    fn matching_passwords_build_request() {
        let form = PasswordForm {
            current_password: "old".into(),
            new_password: "new".into(),
            confirm_password: "new".into(),
        };
        assert_eq!(form.validate().unwrap().new_password, "new");
    }

    #[test]
    fn profile_maps_to_lowercase_backend_keys() {
        let user = AuthUser {
            username: "ada".into(),
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            ..AuthUser::default()
        };
        let json = serde_json::to_value(profile(&user)).unwrap();
        assert_eq!(json["firstname"], "Ada");
        assert_eq!(json["lastname"], "Lovelace");
        assert_eq!(json["username"], "ada");
    }

    #[test]
    fn profile_fields_may_be_left_blank() {
        let user = AuthUser {
            username: "ada".into(),
            first_name: "Ada".into(),
            ..AuthUser::default()
        };
        let request = profile(&user);
        assert_eq!(request.firstname, "Ada");
        assert_eq!(request.lastname, "");
        assert_eq!(request.email, "");
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            login("", "").unwrap_err(),
            vec![FormError::Required("Username"), FormError::Required("Password")]
        );
        assert_eq!(login(" ada ", "pw").unwrap().username, "ada");
    }
}
