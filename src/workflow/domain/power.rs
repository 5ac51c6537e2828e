//! Power readiness status of a property.

use super::ParsePowerStatusError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Progress of the electrical supply work at a property.
///
/// Only [`PowerStatus::PowerReady`] satisfies the power gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerStatus {
    /// Supply has not been looked at yet.
    #[default]
    NotChecked,
    /// On BGAS, waiting to learn the meter type.
    BgasAwaitingMeterType,
    /// On BGAS, meter exchange appointment booked.
    BgasMeterExchangeAppointment,
    /// E10 meter in place.
    E10,
    /// Appointment booked for a fault or meter exchange.
    AppointmentFaultExchange,
    /// Supply work is complete.
    PowerReady,
}

impl PowerStatus {
    /// Every status, in progression order.
    pub const ALL: [Self; 6] = [
        Self::NotChecked,
        Self::BgasAwaitingMeterType,
        Self::BgasMeterExchangeAppointment,
        Self::E10,
        Self::AppointmentFaultExchange,
        Self::PowerReady,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotChecked => "not_checked",
            Self::BgasAwaitingMeterType => "bgas_awaiting_meter_type",
            Self::BgasMeterExchangeAppointment => "bgas_meter_exchange_appointment",
            Self::E10 => "e10",
            Self::AppointmentFaultExchange => "appointment_fault_exchange",
            Self::PowerReady => "power_ready",
        }
    }

    /// Returns the label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotChecked => "NOT CHECKED",
            Self::BgasAwaitingMeterType => "BGAS - AWAITING METER TYPE",
            Self::BgasMeterExchangeAppointment => "BGAS - METER EXCHANGE APPOINTMENT",
            Self::E10 => "E10",
            Self::AppointmentFaultExchange => "APPOINTMENT FOR FAULT/EXCHANGE",
            Self::PowerReady => "POWER READY",
        }
    }

    /// Returns `true` when power-dependent work may proceed.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::PowerReady)
    }

    /// Parses a status, falling back to [`PowerStatus::NotChecked`] for
    /// anything unrecognized so that the power gate stays closed.
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            tracing::warn!(%err, "treating unrecognized power status as not ready");
            Self::NotChecked
        })
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PowerStatus {
    type Error = ParsePowerStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParsePowerStatusError(value.to_owned()))
    }
}

impl<'de> Deserialize<'de> for PowerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}
