//! The hardcoded station directory.
//!
//! These are the docks we care about, grouped into the neighbourhoods they
//! are shown under. Order here is display order.

/// A station we report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    /// Upstream GBFS `station_id`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// A named group of stations.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub stations: &'static [Station],
}

/// All regions, in display order.
pub static REGIONS: &[Region] = &[
    Region {
        name: "Embarcadero",
        stations: &[
            Station {
                id: "22",
                name: "Howard St at Beale St",
            },
            Station {
                id: "17",
                name: "Beale St at Market St",
            },
            Station {
                id: "20",
                name: "Market St at Bush St",
            },
        ],
    },
    Region {
        name: "Mission",
        stations: &[
            Station {
                id: "139",
                name: "25th St at Harrison St",
            },
            Station {
                id: "129",
                name: "Harrison St at 20th St",
            },
            Station {
                id: "125",
                name: "20th St at Bryant St",
            },
            Station {
                id: "124",
                name: "19th St at Florida St",
            },
        ],
    },
    Region {
        name: "Potrero",
        stations: &[
            Station {
                id: "130",
                name: "22nd St Caltrain Station",
            },
            Station {
                id: "126",
                name: "Esprit Park",
            },
        ],
    },
];
