mod builtin;

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use super::{ComponentParameters, LibraryError, Methods, PureComponent, ReferenceState};

/// A named collection of pure components.
///
/// # JSON format
///
/// ```json
/// {
///   "reference": { "temperature": 298.15, "pressure": 100000.0 },
///   "components": {
///     "water": {
///       "methods": { "saturation": "antoine" },
///       "parameters": {
///         "molar_mass": 0.0180153,
///         "saturation_pressure": { "A": 4.6543, "B": 1435.264, "C": -64.848 }
///       }
///     }
///   }
/// }
/// ```
///
/// `reference` is optional and applies to every component in the document.
/// See [`Methods`] and [`ComponentParameters`] for the per-component fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentLibrary {
    components: BTreeMap<String, PureComponent>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LibraryDocument {
    #[serde(default)]
    reference: ReferenceState,
    components: BTreeMap<String, ComponentRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentRecord {
    #[serde(default)]
    methods: Methods,
    parameters: ComponentParameters,
}

impl ComponentLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a library from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Parse`] if the document is malformed, has
    /// unknown fields, or carries non-physical reference or critical values.
    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let document: LibraryDocument = serde_json::from_str(json)?;
        let reference = document.reference;

        let mut library = Self::new();
        for (name, record) in document.components {
            debug!(component = %name, methods = %record.methods, "loaded component");
            library.insert(
                PureComponent::new(name, record.methods, record.parameters)
                    .with_reference(reference),
            );
        }

        Ok(library)
    }

    /// Returns a library with benzene, toluene and water.
    ///
    /// Benzene and toluene use the RPP ideal-gas and Wagner methods with
    /// Perry's liquid properties. Water uses NIST Shomate, Antoine and Perry's.
    #[must_use]
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for component in [builtin::benzene(), builtin::toluene(), builtin::water()] {
            library.insert(component);
        }
        library
    }

    /// Adds a component, returning any component it replaced by name.
    pub fn insert(&mut self, component: PureComponent) -> Option<PureComponent> {
        self.components
            .insert(component.name().to_owned(), component)
    }

    /// Looks up a component by name.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::UnknownComponent`] if no component has `name`.
    pub fn get(&self, name: &str) -> Result<&PureComponent, LibraryError> {
        self.components
            .get(name)
            .ok_or_else(|| LibraryError::UnknownComponent {
                name: name.to_owned(),
            })
    }

    /// Component names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
