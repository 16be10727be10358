use uom::si::{
    f64::{
        MassDensity, MolarConcentration, MolarHeatCapacity, MolarMass, Pressure,
        ThermodynamicTemperature,
    },
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    ratio::ratio,
};

use crate::{
    correlation::{
        CoefficientSet, CorrelationError, CriticalPoint, antoine, perrys, rpp,
        rpp::SaturationTemperatureConfig, shomate,
    },
    support::{
        constraint::{Constraint, StrictlyPositive},
        units::{MolarEnthalpy, MolarEntropy, PressureTemperatureSlope},
    },
};

use super::{
    ComponentError, ComponentParameters, IdealGasMethod, LiquidMethod, Methods, ReferenceState,
    SaturationMethod,
};

/// Molar gas constant [J/mol·K].
const GAS_CONSTANT: f64 = 8.314_462_618;

/// A pure chemical component with selected property methods.
///
/// Every property is evaluated on demand from the component's parameters;
/// nothing is cached, so a component can be shared freely across threads.
///
/// # Example
///
/// ```
/// use twine_pure::component::ComponentLibrary;
/// use uom::si::{f64::Pressure, pressure::atmosphere, thermodynamic_temperature::kelvin};
///
/// let library = ComponentLibrary::builtin();
/// let benzene = library.get("benzene")?;
///
/// let t_boil = benzene.saturation_temperature(Pressure::new::<atmosphere>(1.0))?;
/// assert!((t_boil.get::<kelvin>() - 353.3).abs() < 0.5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PureComponent {
    name: String,
    methods: Methods,
    parameters: ComponentParameters,
    reference: ReferenceState,
    solver: SaturationTemperatureConfig,
}

impl PureComponent {
    /// Creates a component at the standard reference state.
    #[must_use]
    pub fn new(name: impl Into<String>, methods: Methods, parameters: ComponentParameters) -> Self {
        Self {
            name: name.into(),
            methods,
            parameters,
            reference: ReferenceState::standard(),
            solver: SaturationTemperatureConfig::default(),
        }
    }

    /// Returns the component with a different reference state.
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceState) -> Self {
        self.reference = reference;
        self
    }

    /// Returns the component with a different saturation temperature solver
    /// configuration, used by [`SaturationMethod::Rpp`].
    #[must_use]
    pub fn with_solver_config(mut self, solver: SaturationTemperatureConfig) -> Self {
        self.solver = solver;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn methods(&self) -> Methods {
        self.methods
    }

    #[must_use]
    pub fn parameters(&self) -> &ComponentParameters {
        &self.parameters
    }

    #[must_use]
    pub fn reference(&self) -> ReferenceState {
        self.reference
    }

    /// Returns the molar mass.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::MissingParameter`] if no molar mass is set.
    pub fn molar_mass(&self) -> Result<MolarMass, ComponentError> {
        let mw = self
            .parameters
            .molar_mass
            .ok_or_else(|| self.missing("molar_mass"))?;
        StrictlyPositive::check(&mw)
            .map_err(|err| CorrelationError::domain(format!("molar mass {mw} kg/mol: {err}")))?;

        Ok(MolarMass::new::<kilogram_per_mole>(mw))
    }

    /// Ideal-gas molar heat capacity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if no ideal-gas method is selected, its
    /// parameters are missing, or the correlation fails.
    pub fn ideal_gas_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, ComponentError> {
        let method = self.ideal_gas_method()?;
        let coeffs = self.ideal_gas_cp()?;
        let cp = match method {
            IdealGasMethod::Nist => shomate::heat_capacity(coeffs, temperature)?,
            IdealGasMethod::Rpp => rpp::heat_capacity(coeffs, temperature)?,
        };
        Ok(cp)
    }

    /// Ideal-gas molar enthalpy at `temperature`.
    ///
    /// Equal to the vapor formation enthalpy (zero if unset) at the reference
    /// temperature.
    ///
    /// # Errors
    ///
    /// Same as [`Self::ideal_gas_heat_capacity`].
    pub fn ideal_gas_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnthalpy, ComponentError> {
        let method = self.ideal_gas_method()?;
        let coeffs = self.ideal_gas_cp()?;
        let t_ref = self.reference.temperature();
        let h_form = enthalpy(self.parameters.vapor_formation_enthalpy);

        let h = match method {
            IdealGasMethod::Nist => h_form + shomate::enthalpy(coeffs, temperature, t_ref)?,
            IdealGasMethod::Rpp => rpp::enthalpy(coeffs, temperature, t_ref, h_form)?,
        };
        Ok(h)
    }

    /// Ideal-gas molar entropy at `temperature` and the reference pressure.
    ///
    /// Shomate entropy is absolute. RPP entropy is measured from the vapor
    /// formation entropy at the reference temperature.
    ///
    /// # Errors
    ///
    /// Same as [`Self::ideal_gas_heat_capacity`], plus
    /// [`ComponentError::MissingParameter`] if the RPP method is selected
    /// without a vapor formation entropy.
    pub fn ideal_gas_entropy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEntropy, ComponentError> {
        let method = self.ideal_gas_method()?;
        let coeffs = self.ideal_gas_cp()?;

        let s = match method {
            IdealGasMethod::Nist => shomate::entropy(coeffs, temperature)?,
            IdealGasMethod::Rpp => {
                let s_form = self
                    .parameters
                    .vapor_formation_entropy
                    .ok_or_else(|| self.missing("vapor_formation_entropy"))?;
                rpp::entropy(
                    coeffs,
                    temperature,
                    self.reference.temperature(),
                    entropy(s_form),
                )?
            }
        };
        Ok(s)
    }

    /// Ideal-gas molar entropy at `temperature` and `pressure`,
    /// `s(T, P) = s(T) − R·ln(P / P_ref)`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::ideal_gas_entropy`], plus [`CorrelationError::Domain`]
    /// if `pressure` is not strictly positive.
    pub fn ideal_gas_entropy_at(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MolarEntropy, ComponentError> {
        StrictlyPositive::check(&pressure).map_err(|err| {
            CorrelationError::domain(format!("P = {} Pa: {err}", pressure.get::<pascal>()))
        })?;

        let s = self.ideal_gas_entropy(temperature)?;
        let ln_pr = (pressure / self.reference.pressure()).get::<ratio>().ln();

        Ok(s - MolarHeatCapacity::new::<joule_per_kelvin_mole>(GAS_CONSTANT) * ln_pr)
    }

    /// Saturation pressure at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if no saturation method is selected, its
    /// parameters are missing, or the correlation fails.
    pub fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, ComponentError> {
        let method = self.saturation_method()?;
        let coeffs = self.saturation_coefficients()?;
        let p = match method {
            SaturationMethod::Antoine => {
                antoine::saturation_pressure_in(coeffs, temperature, self.parameters.antoine_basis)?
            }
            SaturationMethod::Rpp => rpp::saturation_pressure(coeffs, temperature, self.critical()?)?,
        };
        Ok(p)
    }

    /// Slope of the saturation curve, `dPsat/dT`, at `temperature`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::saturation_pressure`].
    pub fn saturation_pressure_derivative(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<PressureTemperatureSlope, ComponentError> {
        let method = self.saturation_method()?;
        let coeffs = self.saturation_coefficients()?;
        let slope = match method {
            SaturationMethod::Antoine => antoine::saturation_pressure_derivative_in(
                coeffs,
                temperature,
                self.parameters.antoine_basis,
            )?,
            SaturationMethod::Rpp => {
                rpp::saturation_pressure_derivative(coeffs, temperature, self.critical()?)?
            }
        };
        Ok(slope)
    }

    /// Temperature at which the saturation pressure equals `pressure`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::saturation_pressure`], plus
    /// [`ComponentError::SaturationTemperature`] if the RPP solve fails.
    pub fn saturation_temperature(
        &self,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, ComponentError> {
        let method = self.saturation_method()?;
        let coeffs = self.saturation_coefficients()?;
        let t = match method {
            SaturationMethod::Antoine => {
                antoine::saturation_temperature_in(coeffs, pressure, self.parameters.antoine_basis)?
            }
            SaturationMethod::Rpp => {
                rpp::saturation_temperature(coeffs, pressure, self.critical()?, self.solver)?
            }
        };
        Ok(t)
    }

    /// Liquid molar heat capacity at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`ComponentError`] if no liquid method is selected, its
    /// parameters are missing, or the correlation fails.
    pub fn liquid_heat_capacity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, ComponentError> {
        let LiquidMethod::Perrys = self.liquid_method()?;
        Ok(perrys::heat_capacity(self.liquid_cp()?, temperature)?)
    }

    /// Liquid molar enthalpy at `temperature`.
    ///
    /// Equal to the liquid formation enthalpy (zero if unset) at the reference
    /// temperature.
    ///
    /// # Errors
    ///
    /// Same as [`Self::liquid_heat_capacity`].
    pub fn liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEnthalpy, ComponentError> {
        let LiquidMethod::Perrys = self.liquid_method()?;
        Ok(perrys::enthalpy(
            self.liquid_cp()?,
            temperature,
            self.reference.temperature(),
            enthalpy(self.parameters.liquid_formation_enthalpy),
        )?)
    }

    /// Liquid molar entropy at `temperature`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::liquid_heat_capacity`], plus
    /// [`ComponentError::MissingParameter`] if no liquid formation entropy is
    /// set.
    pub fn liquid_entropy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarEntropy, ComponentError> {
        let LiquidMethod::Perrys = self.liquid_method()?;
        let s_form = self
            .parameters
            .liquid_formation_entropy
            .ok_or_else(|| self.missing("liquid_formation_entropy"))?;

        Ok(perrys::entropy(
            self.liquid_cp()?,
            temperature,
            self.reference.temperature(),
            entropy(s_form),
        )?)
    }

    /// Liquid molar density at `temperature`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::liquid_heat_capacity`].
    pub fn liquid_density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarConcentration, ComponentError> {
        let LiquidMethod::Perrys = self.liquid_method()?;
        let coeffs = self
            .parameters
            .liquid_density
            .as_ref()
            .ok_or_else(|| self.missing("liquid_density"))?;

        Ok(perrys::density(coeffs, temperature)?)
    }

    /// Liquid mass density at `temperature`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::liquid_density`] and [`Self::molar_mass`].
    pub fn liquid_mass_density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, ComponentError> {
        Ok(self.liquid_density(temperature)? * self.molar_mass()?)
    }

    fn ideal_gas_method(&self) -> Result<IdealGasMethod, ComponentError> {
        self.methods
            .ideal_gas
            .ok_or_else(|| self.no_method("ideal gas"))
    }

    fn saturation_method(&self) -> Result<SaturationMethod, ComponentError> {
        self.methods
            .saturation
            .ok_or_else(|| self.no_method("saturation"))
    }

    fn liquid_method(&self) -> Result<LiquidMethod, ComponentError> {
        self.methods.liquid.ok_or_else(|| self.no_method("liquid"))
    }

    fn ideal_gas_cp(&self) -> Result<&CoefficientSet, ComponentError> {
        self.parameters
            .ideal_gas_cp
            .as_ref()
            .ok_or_else(|| self.missing("ideal_gas_cp"))
    }

    fn saturation_coefficients(&self) -> Result<&CoefficientSet, ComponentError> {
        self.parameters
            .saturation_pressure
            .as_ref()
            .ok_or_else(|| self.missing("saturation_pressure"))
    }

    fn liquid_cp(&self) -> Result<&CoefficientSet, ComponentError> {
        self.parameters
            .liquid_cp
            .as_ref()
            .ok_or_else(|| self.missing("liquid_cp"))
    }

    fn critical(&self) -> Result<&CriticalPoint, ComponentError> {
        self.parameters
            .critical
            .as_ref()
            .ok_or_else(|| self.missing("critical"))
    }

    fn missing(&self, parameter: &'static str) -> ComponentError {
        ComponentError::MissingParameter {
            component: self.name.clone(),
            parameter,
        }
    }

    fn no_method(&self, group: &'static str) -> ComponentError {
        ComponentError::NoMethod {
            component: self.name.clone(),
            group,
        }
    }
}

fn enthalpy(value: Option<f64>) -> MolarEnthalpy {
    MolarEnthalpy::new::<joule_per_mole>(value.unwrap_or(0.0))
}

fn entropy(value: f64) -> MolarEntropy {
    MolarEntropy::new::<joule_per_kelvin_mole>(value)
}
