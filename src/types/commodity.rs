//! Commodity catalog and market hubs shown on the market intel page

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Commodity {
    SteelHrc,
    AluminiumIngot,
    CopperCathode,
    LithiumCarbonate,
}

impl Commodity {
    pub const ALL: [Commodity; 4] = [
        Commodity::SteelHrc,
        Commodity::AluminiumIngot,
        Commodity::CopperCathode,
        Commodity::LithiumCarbonate,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Commodity::SteelHrc => "Steel (HRC)",
            Commodity::AluminiumIngot => "Aluminium Ingot",
            Commodity::CopperCathode => "Copper Cathode",
            Commodity::LithiumCarbonate => "Lithium Carbonate",
        }
    }

    /// Reference spot price per tonne used to anchor the random walk.
    pub fn base_price(&self) -> f64 {
        match self {
            Commodity::SteelHrc => 45_000.0,
            Commodity::LithiumCarbonate => 750_000.0,
            Commodity::AluminiumIngot | Commodity::CopperCathode => 200_000.0,
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarketHub {
    MumbaiSpot,
    DelhiNcr,
    ChennaiPort,
    Kolkata,
}

impl MarketHub {
    pub const ALL: [MarketHub; 4] = [
        MarketHub::MumbaiSpot,
        MarketHub::DelhiNcr,
        MarketHub::ChennaiPort,
        MarketHub::Kolkata,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MarketHub::MumbaiSpot => "Mumbai Spot",
            MarketHub::DelhiNcr => "Delhi NCR",
            MarketHub::ChennaiPort => "Chennai Port",
            MarketHub::Kolkata => "Kolkata",
        }
    }
}

impl fmt::Display for MarketHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
