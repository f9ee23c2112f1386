mod collection;
mod serdes;

pub use collection::MemoryCollection;
pub use serdes::SerdeSerializer;

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde::{Deserialize, Serialize};
    use tokio::sync::RwLock;

    use registry_provider::{
        DataCollection, Registry, RegistryError, RegistryEvent, RegistryListener, RemoveTarget,
        Resource, SerializeOptions, Serializer,
    };

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Vehicle {
        vin: String,
        owner: String,
        mileage: u64,
    }

    impl Vehicle {
        fn new(vin: &str, owner: &str, mileage: u64) -> Self {
            Self {
                vin: vin.to_owned(),
                owner: owner.to_owned(),
                mileage,
            }
        }
    }

    impl Resource for Vehicle {
        fn identifier(&self) -> &str {
            &self.vin
        }
    }

    #[derive(Debug, Default)]
    struct RecordingListener {
        events: Mutex<Vec<RegistryEvent<Vehicle>>>,
    }

    impl RegistryListener<Vehicle> for RecordingListener {
        fn on_event(&self, event: &RegistryEvent<Vehicle>) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn vehicle_registry() -> (Arc<RecordingListener>, Registry<Vehicle>) {
        common_utils::init_logger();
        let collection = Arc::new(RwLock::new(MemoryCollection::new()));
        let serializer = Arc::new(SerdeSerializer::<Vehicle>::new());
        let mut registry = Registry::new(
            collection as Arc<RwLock<dyn DataCollection>>,
            serializer as Arc<dyn Serializer<Vehicle>>,
            "Asset",
            "org.example.Vehicle",
            "Vehicle registry",
        );
        let listener = Arc::new(RecordingListener::default());
        registry.listeners.push(listener.clone());
        (listener, registry)
    }

    #[tokio::test]
    async fn added_resources_are_retrievable_until_removed() {
        let (_, registry) = vehicle_registry();
        let car = Vehicle::new("VIN_A", "alice", 1000);

        registry.add(&car, &SerializeOptions::default()).await.unwrap();
        assert!(registry.exists("VIN_A").await.unwrap());
        assert_eq!(registry.get("VIN_A").await.unwrap(), car);

        registry.remove("VIN_A".into()).await.unwrap();
        assert!(!registry.exists("VIN_A").await.unwrap());
        assert!(matches!(
            registry.get("VIN_A").await,
            Err(RegistryError::ResourceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn get_all_is_set_equal_regardless_of_order() {
        let (_, registry) = vehicle_registry();
        let a = Vehicle::new("VIN_A", "alice", 1000);
        let b = Vehicle::new("VIN_B", "bob", 2000);
        registry.add(&a, &SerializeOptions::default()).await.unwrap();
        registry.add(&b, &SerializeOptions::default()).await.unwrap();

        let mut all = registry.get_all().await.unwrap();
        all.sort_by(|x, y| x.vin.cmp(&y.vin));
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn add_all_short_circuits_on_store_failure() {
        let (_, registry) = vehicle_registry();
        let a = Vehicle::new("VIN_A", "alice", 1000);
        let b = Vehicle::new("VIN_B", "bob", 2000);
        // VIN_A is already stored, so the batch fails on its first item
        registry.add(&a, &SerializeOptions::default()).await.unwrap();

        assert!(matches!(
            registry
                .add_all(&[a, b], &SerializeOptions::default())
                .await,
            Err(RegistryError::ResourceExists(_))
        ));
        assert!(!registry.exists("VIN_B").await.unwrap());
    }

    #[tokio::test]
    async fn update_emits_previous_value() {
        let (listener, registry) = vehicle_registry();
        let before = Vehicle::new("VIN_A", "alice", 1000);
        let after = Vehicle::new("VIN_A", "bob", 1500);

        registry
            .add(&before, &SerializeOptions::default())
            .await
            .unwrap();
        registry
            .update(&after, &SerializeOptions::default())
            .await
            .unwrap();

        assert_eq!(registry.get("VIN_A").await.unwrap(), after);
        let events = listener.events.lock().unwrap();
        assert!(matches!(
            events.last().unwrap(),
            RegistryEvent::ResourceUpdated {
                old_resource,
                new_resource,
                ..
            } if old_resource == &before && new_resource == &after
        ));
    }

    #[tokio::test]
    async fn remove_accepts_resource_or_identifier() {
        let (listener, registry) = vehicle_registry();
        let a = Vehicle::new("VIN_A", "alice", 1000);
        let b = Vehicle::new("VIN_B", "bob", 2000);
        registry
            .add_all(&[a.clone(), b], &SerializeOptions::default())
            .await
            .unwrap();

        registry.remove(RemoveTarget::ByResource(a)).await.unwrap();
        registry.remove("VIN_B".into()).await.unwrap();

        let removed_ids: Vec<String> = listener
            .events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                RegistryEvent::ResourceRemoved { resource_id, .. } => Some(resource_id.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(removed_ids, ["VIN_A", "VIN_B"]);
    }

    #[tokio::test]
    async fn every_mutation_emits_exactly_one_event_per_resource() {
        let (listener, registry) = vehicle_registry();
        let fleet = [
            Vehicle::new("VIN_A", "alice", 1000),
            Vehicle::new("VIN_B", "bob", 2000),
            Vehicle::new("VIN_C", "carol", 3000),
        ];
        registry
            .add_all(&fleet, &SerializeOptions::default())
            .await
            .unwrap();
        registry
            .update_all(&fleet, &SerializeOptions::default())
            .await
            .unwrap();
        registry
            .remove_all(fleet.iter().map(|v| RemoveTarget::ByResource(v.clone())).collect())
            .await
            .unwrap();

        let events = listener.events.lock().unwrap();
        assert_eq!(events.len(), 9);
        // Every event carries the registry identity
        assert!(events.iter().all(|e| match e {
            RegistryEvent::ResourceAdded { registry, .. }
            | RegistryEvent::ResourceUpdated { registry, .. }
            | RegistryEvent::ResourceRemoved { registry, .. } =>
                registry.id == "org.example.Vehicle",
        }));
    }
}
