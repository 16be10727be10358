use std::fmt;

use serde::{Deserialize, Serialize};

/// Ideal-gas heat capacity, enthalpy and entropy method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdealGasMethod {
    /// NIST Shomate equation, see [`crate::correlation::shomate`].
    Nist,
    /// Reid, Prausnitz & Poling cubic, see [`crate::correlation::rpp`].
    Rpp,
}

/// Saturation pressure method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationMethod {
    /// Antoine equation, see [`crate::correlation::antoine`].
    Antoine,
    /// Wagner equation from Reid, Prausnitz & Poling.
    Rpp,
}

/// Liquid heat capacity, enthalpy, entropy and density method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidMethod {
    /// Perry's Chemical Engineers' Handbook, see [`crate::correlation::perrys`].
    Perrys,
}

/// Method selection for each property group of a component.
///
/// Groups left as `None` are unavailable for that component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Methods {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_gas: Option<IdealGasMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<SaturationMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid: Option<LiquidMethod>,
}

impl Methods {
    #[must_use]
    pub fn with_ideal_gas(mut self, method: IdealGasMethod) -> Self {
        self.ideal_gas = Some(method);
        self
    }

    #[must_use]
    pub fn with_saturation(mut self, method: SaturationMethod) -> Self {
        self.saturation = Some(method);
        self
    }

    #[must_use]
    pub fn with_liquid(mut self, method: LiquidMethod) -> Self {
        self.liquid = Some(method);
        self
    }
}

impl fmt::Display for Methods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ideal_gas={:?} saturation={:?} liquid={:?}",
            self.ideal_gas, self.saturation, self.liquid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snake_case_names() {
        let methods: Methods = serde_json::from_str(
            r#"{ "ideal_gas": "nist", "saturation": "antoine", "liquid": "perrys" }"#,
        )
        .unwrap();

        assert_eq!(
            methods,
            Methods::default()
                .with_ideal_gas(IdealGasMethod::Nist)
                .with_saturation(SaturationMethod::Antoine)
                .with_liquid(LiquidMethod::Perrys)
        );
    }

    #[test]
    fn omitted_groups_are_unavailable() {
        let methods: Methods = serde_json::from_str(r#"{ "saturation": "rpp" }"#).unwrap();

        assert_eq!(methods.ideal_gas, None);
        assert_eq!(methods.saturation, Some(SaturationMethod::Rpp));
        assert_eq!(methods.liquid, None);
    }

    #[test]
    fn rejects_unknown_method() {
        assert!(serde_json::from_str::<Methods>(r#"{ "ideal_gas": "janaf" }"#).is_err());
        assert!(serde_json::from_str::<Methods>(r#"{ "solid": "perrys" }"#).is_err());
    }
}
