use crate::api::{CreateMember, Member, MemberRole, UpdateMember};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: MemberRole,
    pub password: String,
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl MemberFormState {
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            phone: member.phone.clone().unwrap_or_default(),
            role: member.role,
            password: String::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn validate_identity(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        if !email.contains('@') {
            return Err("Enter a valid email address".into());
        }
        Ok(())
    }

    pub fn to_create(&self) -> Result<CreateMember, String> {
        self.validate_identity()?;
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        validate_password(&self.password)?;
        Ok(CreateMember {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            role: self.role,
            password: self.password.clone(),
        })
    }

    /// A blank password leaves the stored one unchanged.
    pub fn to_update(&self) -> Result<UpdateMember, String> {
        self.validate_identity()?;
        let password = if self.password.is_empty() {
            None
        } else {
            validate_password(&self.password)?;
            Some(self.password.clone())
        };
        Ok(UpdateMember {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            role: self.role,
            password,
        })
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Case-insensitive match on name or email; a blank query keeps everything.
pub fn filter_members(members: &[Member], query: &str) -> Vec<Member> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return members.to_vec();
    }
    members
        .iter()
        .filter(|member| {
            member.name.to_lowercase().contains(&needle)
                || member.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn can_delete(member: &Member, current_user_id: Option<&str>) -> bool {
    current_user_id != Some(member.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, email: &str) -> Member {
        Member {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            role: MemberRole::Regular,
            created_at: None,
        }
    }

    fn filled() -> MemberFormState {
        MemberFormState {
            name: "Siti Aminah".into(),
            email: "siti@espoint.test".into(),
            phone: " ".into(),
            role: MemberRole::Admin,
            password: "longenough".into(),
        }
    }

    #[test]
    fn create_requires_password_of_minimum_length() {
        let mut form = filled();
        assert!(form.to_create().is_ok());
        form.password = String::new();
        assert_eq!(form.to_create().unwrap_err(), "Password is required");
        form.password = "short".into();
        assert_eq!(
            form.to_create().unwrap_err(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn update_treats_blank_password_as_unchanged() {
        let mut form = filled();
        form.password = String::new();
        let payload = form.to_update().unwrap();
        assert_eq!(payload.password, None);
        assert_eq!(payload.phone, None);

        form.password = "1234567".into();
        assert!(form.to_update().is_err());
    }

    #[test]
    fn identity_fields_are_validated() {
        let mut form = filled();
        form.email = "siti.espoint.test".into();
        assert_eq!(form.to_update().unwrap_err(), "Enter a valid email address");
        form.name = " ".into();
        assert_eq!(form.to_create().unwrap_err(), "Name is required");
    }

    #[test]
    fn filter_matches_name_or_email_case_insensitively() {
        let members = vec![
            member("1", "Aina Rahman", "aina@espoint.test"),
            member("2", "Ben Tan", "ben@clinic.test"),
        ];
        assert_eq!(filter_members(&members, "").len(), 2);
        assert_eq!(filter_members(&members, "AINA")[0].id, "1");
        assert_eq!(filter_members(&members, "clinic")[0].id, "2");
        assert!(filter_members(&members, "zzz").is_empty());
    }

    #[test]
    fn admins_cannot_delete_themselves() {
        let me = member("m-1", "Me", "me@espoint.test");
        assert!(!can_delete(&me, Some("m-1")));
        assert!(can_delete(&me, Some("m-2")));
        assert!(can_delete(&me, None));
    }
}
