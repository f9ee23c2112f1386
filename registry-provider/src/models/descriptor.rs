use serde::{Deserialize, Serialize};

/**
 * Stable serializable identity of a registry, not its contents.
 * Carried by every lifecycle event and used when the registry itself needs to
 * be serialized.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryDescriptor {
    #[serde(rename = "type")]
    pub registry_type: String,
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_serialized_form() {
        let d = RegistryDescriptor {
            registry_type: "Asset".to_owned(),
            id: "org.example.Vehicle".to_owned(),
            name: "Vehicle registry".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({
                "type": "Asset",
                "id": "org.example.Vehicle",
                "name": "Vehicle registry",
            })
        );
        let back: RegistryDescriptor = serde_json::from_value(json!({
            "type": "Asset",
            "id": "org.example.Vehicle",
            "name": "Vehicle registry",
        }))
        .unwrap();
        assert_eq!(back, d);
    }
}
