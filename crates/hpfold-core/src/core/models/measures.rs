use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the seven measured quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureField {
    HH,
    PP,
    HP,
    BB,
    HB,
    PB,
    Collisions,
}

impl MeasureField {
    pub const ALL: [MeasureField; 7] = [
        MeasureField::HH,
        MeasureField::PP,
        MeasureField::HP,
        MeasureField::BB,
        MeasureField::HB,
        MeasureField::PB,
        MeasureField::Collisions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::HH => "hh",
            Self::PP => "pp",
            Self::HP => "hp",
            Self::BB => "bb",
            Self::HB => "hb",
            Self::PB => "pb",
            Self::Collisions => "collisions",
        }
    }
}

impl fmt::Display for MeasureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Corrected contact and collision counts, before square-root compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactCounts {
    pub hh: i64,
    pub pp: i64,
    pub hp: i64,
    pub bb: i64,
    pub hb: i64,
    pub pb: i64,
    pub collisions: i64,
}

impl ContactCounts {
    pub fn get(&self, field: MeasureField) -> i64 {
        match field {
            MeasureField::HH => self.hh,
            MeasureField::PP => self.pp,
            MeasureField::HP => self.hp,
            MeasureField::BB => self.bb,
            MeasureField::HB => self.hb,
            MeasureField::PB => self.pb,
            MeasureField::Collisions => self.collisions,
        }
    }

    fn get_mut(&mut self, field: MeasureField) -> &mut i64 {
        match field {
            MeasureField::HH => &mut self.hh,
            MeasureField::PP => &mut self.pp,
            MeasureField::HP => &mut self.hp,
            MeasureField::BB => &mut self.bb,
            MeasureField::HB => &mut self.hb,
            MeasureField::PB => &mut self.pb,
            MeasureField::Collisions => &mut self.collisions,
        }
    }

    /// Fields whose value is below zero, in declaration order.
    pub fn negative_fields(&self) -> impl Iterator<Item = (MeasureField, i64)> + '_ {
        MeasureField::ALL
            .into_iter()
            .map(|f| (f, self.get(f)))
            .filter(|&(_, v)| v < 0)
    }

    pub fn clamped(mut self) -> Self {
        for field in MeasureField::ALL {
            let value = self.get_mut(field);
            *value = (*value).max(0);
        }
        self
    }

    /// Square root of every field. Negative fields must be resolved first.
    pub fn compress(&self) -> MeasurementRecord {
        let root = |v: i64| (v as f64).sqrt();
        MeasurementRecord {
            hh: root(self.hh),
            pp: root(self.pp),
            hp: root(self.hp),
            bb: root(self.bb),
            hb: root(self.hb),
            pb: root(self.pb),
            collisions: root(self.collisions),
        }
    }
}

/// Square-root compressed counts handed to the fitness function.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub hh: f64,
    pub pp: f64,
    pub hp: f64,
    pub bb: f64,
    pub hb: f64,
    pub pb: f64,
    pub collisions: f64,
}

impl MeasurementRecord {
    pub fn get(&self, field: MeasureField) -> f64 {
        match field {
            MeasureField::HH => self.hh,
            MeasureField::PP => self.pp,
            MeasureField::HP => self.hp,
            MeasureField::BB => self.bb,
            MeasureField::HB => self.hb,
            MeasureField::PB => self.pb,
            MeasureField::Collisions => self.collisions,
        }
    }
}

/// Gyration radii of the H and P side-chain beads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GyrationPair {
    pub h: f64,
    pub p: f64,
}

impl GyrationPair {
    pub fn new(h: f64, p: f64) -> Self {
        Self { h, p }
    }
}
