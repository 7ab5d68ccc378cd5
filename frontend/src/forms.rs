use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MembershipCategory {
    #[serde(rename = "smie")]
    Student,
    #[serde(rename = "amie")]
    Associate,
    #[serde(rename = "mie")]
    Corporate,
}

impl MembershipCategory {
    pub const ALL: [MembershipCategory; 3] = [
        MembershipCategory::Student,
        MembershipCategory::Associate,
        MembershipCategory::Corporate,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            MembershipCategory::Student => "smie",
            MembershipCategory::Associate => "amie",
            MembershipCategory::Corporate => "mie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MembershipCategory::Student => "Student Member (SMIE)",
            MembershipCategory::Associate => "Associate Member (AMIE)",
            MembershipCategory::Corporate => "Corporate Member (MIE/FIE)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MembershipField {
    FullName,
    Department,
    Email,
    Phone,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipApplication {
    pub full_name: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub category: Option<MembershipCategory>,
    pub message: String,
}

impl MembershipApplication {
    pub fn with(&self, field: MembershipField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            MembershipField::FullName => next.full_name = value,
            MembershipField::Department => next.department = value,
            MembershipField::Email => next.email = value,
            MembershipField::Phone => next.phone = value,
            MembershipField::Message => next.message = value,
        }
        next
    }

    /// Unknown select values clear the category.
    pub fn with_category(&self, value: &str) -> Self {
        Self {
            category: MembershipCategory::from_value(value),
            ..self.clone()
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_fields_update_independently() {
        let form = ContactForm::default()
            .with(ContactField::Name, "Ada".into())
            .with(ContactField::Email, "ada@example.com".into());
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert!(form.message.is_empty());
    }

    #[test]
    fn category_values_round_trip_through_select() {
        for category in MembershipCategory::ALL {
            assert_eq!(MembershipCategory::from_value(category.value()), Some(category));
        }
        assert_eq!(MembershipCategory::from_value(""), None);
    }

    #[test]
    fn application_serializes_like_the_form_fields() {
        let application = MembershipApplication::default()
            .with(MembershipField::FullName, "Jane Smith".into())
            .with(MembershipField::Department, "Electrical Engineering".into())
            .with_category("amie");

        let json: serde_json::Value = serde_json::from_str(&application.to_json()).unwrap();
        assert_eq!(json["fullName"], "Jane Smith");
        assert_eq!(json["department"], "Electrical Engineering");
        assert_eq!(json["category"], "amie");
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn unknown_category_clears_selection() {
        let application = MembershipApplication::default().with_category("mie").with_category("bogus");
        assert_eq!(application.category, None);
    }
}
