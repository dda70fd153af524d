use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::definition::ServiceDefinition;
use crate::constants::SERVICES_KEY;
use crate::error::RegistrationError;

/// Parses the first YAML document of a definition file into service
/// definitions, in the order they appear under `services:`.
pub fn parse_definitions(content: &str) -> Result<Vec<ServiceDefinition>, RegistrationError> {
    let root = match serde_yaml::Deserializer::from_str(content).next() {
        Some(document) => Value::deserialize(document)?,
        None => Value::Null,
    };

    let Value::Mapping(root) = root else {
        return Err(RegistrationError::Parse(format!(
            "document root must be a mapping, found {}",
            kind_of(&root)
        )));
    };

    let services = match root.get(SERVICES_KEY) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(services)) => services,
        Some(other) => {
            return Err(RegistrationError::Parse(format!(
                "'{}' must be a mapping, found {}",
                SERVICES_KEY,
                kind_of(other)
            )))
        }
    };

    services
        .iter()
        .map(|(key, body)| parse_service(key, body))
        .collect()
}

fn parse_service(key: &Value, body: &Value) -> Result<ServiceDefinition, RegistrationError> {
    let name = scalar_text(key).ok_or_else(|| {
        RegistrationError::Parse(format!("service names must be scalars, found {}", kind_of(key)))
    })?;

    let empty = Mapping::new();
    let properties = match body {
        Value::Mapping(properties) => properties,
        Value::Null => &empty,
        other => {
            return Err(RegistrationError::Parse(format!(
                "service '{}' must be a mapping, found {}",
                name,
                kind_of(other)
            )))
        }
    };

    let mut definition = ServiceDefinition::new(name, "", "", "");
    for (property, value) in properties {
        let Some(property) = property.as_str() else {
            continue;
        };
        if !matches!(property, "class" | "interface" | "lifetime") {
            continue;
        }

        let text = scalar_text(value).ok_or_else(|| {
            RegistrationError::Parse(format!(
                "property '{}' of service '{}' must be a scalar, found {}",
                property,
                definition.name,
                kind_of(value)
            ))
        })?;

        match property {
            "class" => definition.class = text,
            "interface" => definition.interface = text,
            _ => definition.lifetime = text,
        }
    }

    Ok(definition)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
