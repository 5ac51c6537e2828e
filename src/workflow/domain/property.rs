//! Property record supplied by the persistence collaborator.

use super::{ParsePropertyAttributeError, PowerStatus, PropertyId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional property attribute that switches on one or more tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyAttribute {
    /// An asbestos survey is required.
    AsbestosSurvey,
    /// Rot works need surveying.
    RotWorks,
    /// The kitchen is being renewed.
    KitchenRenewal,
    /// Asbestos must be removed.
    AsbestosRemoval,
    /// The heating needs a referral.
    HeatingReferral,
    /// A glazier is needed.
    Glazier,
    /// Altro flooring is to be fitted.
    AltroFlooring,
    /// The bathroom is being renewed.
    BathroomRenewal,
    /// Paint lines are required.
    PaintLines,
    /// An isolator must be fitted.
    IsolatorRequired,
    /// EPC/EICR certification closes out the works.
    Epc,
}

impl PropertyAttribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::AsbestosSurvey,
        Self::RotWorks,
        Self::KitchenRenewal,
        Self::AsbestosRemoval,
        Self::HeatingReferral,
        Self::Glazier,
        Self::AltroFlooring,
        Self::BathroomRenewal,
        Self::PaintLines,
        Self::IsolatorRequired,
        Self::Epc,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AsbestosSurvey => "asbestos_survey",
            Self::RotWorks => "rot_works",
            Self::KitchenRenewal => "kitchen_renewal",
            Self::AsbestosRemoval => "asbestos_removal",
            Self::HeatingReferral => "heating_referral",
            Self::Glazier => "glazier",
            Self::AltroFlooring => "altro_flooring",
            Self::BathroomRenewal => "bathroom_renewal",
            Self::PaintLines => "paint_lines",
            Self::IsolatorRequired => "isolator_required",
            Self::Epc => "epc",
        }
    }
}

impl fmt::Display for PropertyAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PropertyAttribute {
    type Error = ParsePropertyAttributeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == normalized)
            .ok_or_else(|| ParsePropertyAttributeError(value.to_owned()))
    }
}

/// Boolean attribute flags of a property.
///
/// Missing flags deserialize as `false` and unknown flags are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "one flag per checklist item, mirrored from the property form"
)]
pub struct PropertyAttributes {
    /// See [`PropertyAttribute::AsbestosSurvey`].
    pub asbestos_survey: bool,
    /// See [`PropertyAttribute::RotWorks`].
    pub rot_works: bool,
    /// See [`PropertyAttribute::KitchenRenewal`].
    pub kitchen_renewal: bool,
    /// See [`PropertyAttribute::AsbestosRemoval`].
    pub asbestos_removal: bool,
    /// See [`PropertyAttribute::HeatingReferral`].
    pub heating_referral: bool,
    /// See [`PropertyAttribute::Glazier`].
    pub glazier: bool,
    /// See [`PropertyAttribute::AltroFlooring`].
    pub altro_flooring: bool,
    /// See [`PropertyAttribute::BathroomRenewal`].
    pub bathroom_renewal: bool,
    /// See [`PropertyAttribute::PaintLines`].
    pub paint_lines: bool,
    /// See [`PropertyAttribute::IsolatorRequired`].
    pub isolator_required: bool,
    /// See [`PropertyAttribute::Epc`].
    pub epc: bool,
}

impl PropertyAttributes {
    /// Creates a set with the given attributes switched on.
    #[must_use]
    pub fn with(attributes: impl IntoIterator<Item = PropertyAttribute>) -> Self {
        let mut flags = Self::default();
        for attribute in attributes {
            flags.set(attribute, true);
        }
        flags
    }

    /// Returns whether an attribute is set.
    #[must_use]
    pub const fn is_set(&self, attribute: PropertyAttribute) -> bool {
        match attribute {
            PropertyAttribute::AsbestosSurvey => self.asbestos_survey,
            PropertyAttribute::RotWorks => self.rot_works,
            PropertyAttribute::KitchenRenewal => self.kitchen_renewal,
            PropertyAttribute::AsbestosRemoval => self.asbestos_removal,
            PropertyAttribute::HeatingReferral => self.heating_referral,
            PropertyAttribute::Glazier => self.glazier,
            PropertyAttribute::AltroFlooring => self.altro_flooring,
            PropertyAttribute::BathroomRenewal => self.bathroom_renewal,
            PropertyAttribute::PaintLines => self.paint_lines,
            PropertyAttribute::IsolatorRequired => self.isolator_required,
            PropertyAttribute::Epc => self.epc,
        }
    }

    /// Sets or clears an attribute.
    pub const fn set(&mut self, attribute: PropertyAttribute, value: bool) {
        let flag = match attribute {
            PropertyAttribute::AsbestosSurvey => &mut self.asbestos_survey,
            PropertyAttribute::RotWorks => &mut self.rot_works,
            PropertyAttribute::KitchenRenewal => &mut self.kitchen_renewal,
            PropertyAttribute::AsbestosRemoval => &mut self.asbestos_removal,
            PropertyAttribute::HeatingReferral => &mut self.heating_referral,
            PropertyAttribute::Glazier => &mut self.glazier,
            PropertyAttribute::AltroFlooring => &mut self.altro_flooring,
            PropertyAttribute::BathroomRenewal => &mut self.bathroom_renewal,
            PropertyAttribute::PaintLines => &mut self.paint_lines,
            PropertyAttribute::IsolatorRequired => &mut self.isolator_required,
            PropertyAttribute::Epc => &mut self.epc,
        };
        *flag = value;
    }

    /// Returns the set attributes in declaration order.
    pub fn iter_set(&self) -> impl Iterator<Item = PropertyAttribute> + '_ {
        PropertyAttribute::ALL
            .into_iter()
            .filter(|attribute| self.is_set(*attribute))
    }
}

/// Property as held by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    id: PropertyId,
    #[serde(default)]
    attributes: PropertyAttributes,
    #[serde(default)]
    power_status: PowerStatus,
}

impl PropertyRecord {
    /// Creates a record with a fresh identifier.
    #[must_use]
    pub fn new(attributes: PropertyAttributes, power_status: PowerStatus) -> Self {
        Self::with_id(PropertyId::new(), attributes, power_status)
    }

    /// Creates a record for an existing identifier.
    #[must_use]
    pub const fn with_id(
        id: PropertyId,
        attributes: PropertyAttributes,
        power_status: PowerStatus,
    ) -> Self {
        Self {
            id,
            attributes,
            power_status,
        }
    }

    /// Returns the property identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the attribute flags.
    #[must_use]
    pub const fn attributes(&self) -> &PropertyAttributes {
        &self.attributes
    }

    /// Returns the power status.
    #[must_use]
    pub const fn power_status(&self) -> PowerStatus {
        self.power_status
    }

    /// Replaces the power status.
    pub(crate) const fn set_power_status(&mut self, power_status: PowerStatus) {
        self.power_status = power_status;
    }
}
