use crate::api::{Service, ServicePayload};

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFormState {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub capacity: String,
    pub is_active: bool,
}

impl Default for ServiceFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            price: String::new(),
            capacity: String::new(),
            is_active: true,
        }
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Price is required".into());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("Price must be a number of zero or more".into()),
    }
}

pub fn parse_capacity(raw: &str) -> Result<Option<u32>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err("Capacity must be a whole number greater than zero".into()),
    }
}

impl ServiceFormState {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone().unwrap_or_default(),
            category: service.category.clone().unwrap_or_default(),
            price: service.price.to_string(),
            capacity: service.capacity.map(|c| c.to_string()).unwrap_or_default(),
            is_active: service.is_active,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> Result<ServicePayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Service name is required".into());
        }
        Ok(ServicePayload {
            name: name.to_string(),
            description: optional(&self.description),
            category: optional(&self.category),
            price: parse_price(&self.price)?,
            capacity: parse_capacity(&self.capacity)?,
            is_active: self.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::service;

    fn filled() -> ServiceFormState {
        ServiceFormState {
            name: " Yoga ".into(),
            description: "".into(),
            category: "Fitness".into(),
            price: "45.50".into(),
            capacity: "12".into(),
            is_active: true,
        }
    }

    #[test]
    fn to_payload_trims_and_parses_fields() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.name, "Yoga");
        assert_eq!(payload.description, None);
        assert_eq!(payload.category.as_deref(), Some("Fitness"));
        assert_eq!(payload.price, 45.5);
        assert_eq!(payload.capacity, Some(12));
    }

    #[test]
    fn to_payload_requires_name() {
        let mut form = filled();
        form.name = "   ".into();
        assert_eq!(form.to_payload(), Err("Service name is required".to_string()));
    }

    #[test]
    fn price_must_be_non_negative_number() {
        assert!(parse_price("").is_err());
        assert!(parse_price("-1").is_err());
        assert!(parse_price("abc").is_err());
        assert!(parse_price("NaN").is_err());
        assert_eq!(parse_price("0"), Ok(0.0));
    }

    #[test]
    fn capacity_is_optional_but_positive() {
        assert_eq!(parse_capacity(""), Ok(None));
        assert_eq!(parse_capacity(" 3 "), Ok(Some(3)));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("2.5").is_err());
        assert!(parse_capacity("-4").is_err());
    }

    #[test]
    fn from_service_round_trips_through_payload() {
        let mut existing = service("svc-1", "Massage");
        existing.capacity = Some(2);
        existing.is_active = false;
        let form = ServiceFormState::from_service(&existing);
        assert_eq!(form.capacity, "2");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload, ServicePayload::from(&existing));
    }
}
