use std::fmt;

use uuid::Uuid;

/// Client-generated identifiers. Never sent to the backend.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

/// Backend-assigned identifiers. Only ever constructed from data the backend returned.
macro_rules! define_backend_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Editing-session identity
define_id!(StepTempId);

// Persisted identity
define_backend_id!(StepDbId);
define_backend_id!(TemplateId);
define_backend_id!(RuleChainId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_ids_are_unique() {
        let a = StepTempId::new();
        let b = StepTempId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn temp_id_round_trips_through_uuid() {
        let uuid = Uuid::new_v4();
        let id = StepTempId::from_uuid(uuid);
        assert_eq!(id.to_uuid(), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn backend_ids_convert_to_and_from_integers() {
        let id = StepDbId::from(42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(TemplateId::new(7).to_string(), "7");
    }
}
