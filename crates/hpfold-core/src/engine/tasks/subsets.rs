use crate::core::metrics::pairs::{count_collisions, count_contacts};
use crate::core::models::chain::ResidueLabel;
use crate::core::models::lattice::LatticePoint;

/// The seven overlapping bead sets measured for every conformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeadSubset {
    /// Backbone and side-chain beads together.
    All,
    /// Backbone beads.
    BB,
    /// Backbone beads plus H side chains.
    HB,
    /// Backbone beads plus P side chains.
    PB,
    /// H side chains.
    HH,
    /// Every side chain.
    HP,
    /// P side chains.
    PP,
}

impl BeadSubset {
    pub const COUNT: usize = 7;

    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::BB => 1,
            Self::HB => 2,
            Self::PB => 3,
            Self::HH => 4,
            Self::HP => 5,
            Self::PP => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Contacts,
    Collisions,
}

/// One independent unit of the measurement fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetTask {
    pub subset: BeadSubset,
    pub metric: MetricKind,
}

impl SubsetTask {
    const fn new(subset: BeadSubset, metric: MetricKind) -> Self {
        Self { subset, metric }
    }

    pub fn run(&self, buffers: &SubsetBuffers) -> i64 {
        let beads = buffers.beads(self.subset);
        match self.metric {
            MetricKind::Contacts => count_contacts(beads),
            MetricKind::Collisions => count_collisions(beads),
        }
    }
}

pub static MEASUREMENT_TASKS: [SubsetTask; BeadSubset::COUNT] = [
    SubsetTask::new(BeadSubset::HH, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::PP, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::HP, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::BB, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::HB, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::PB, MetricKind::Contacts),
    SubsetTask::new(BeadSubset::All, MetricKind::Collisions),
];

/// Bead coordinates copied out per subset, ready for read-only sharing.
#[derive(Debug, Clone, Default)]
pub struct SubsetBuffers {
    all: Vec<LatticePoint>,
    hb: Vec<LatticePoint>,
    pb: Vec<LatticePoint>,
    hh: Vec<LatticePoint>,
    pp: Vec<LatticePoint>,
    backbone_len: usize,
}

impl SubsetBuffers {
    /// Slices must share one length; the caller validates this.
    pub fn partition(
        backbone: &[LatticePoint],
        sidechain: &[LatticePoint],
        labels: &[ResidueLabel],
    ) -> Self {
        let n = backbone.len();
        let mut buffers = Self {
            all: Vec::with_capacity(2 * n),
            hb: Vec::with_capacity(2 * n),
            pb: Vec::with_capacity(2 * n),
            hh: Vec::with_capacity(n),
            pp: Vec::with_capacity(n),
            backbone_len: n,
        };

        buffers.all.extend_from_slice(backbone);
        buffers.all.extend_from_slice(sidechain);
        buffers.hb.extend_from_slice(backbone);
        buffers.pb.extend_from_slice(backbone);

        for (&bead, &label) in sidechain.iter().zip(labels) {
            match label {
                ResidueLabel::H => {
                    buffers.hh.push(bead);
                    buffers.hb.push(bead);
                }
                ResidueLabel::P => {
                    buffers.pp.push(bead);
                    buffers.pb.push(bead);
                }
            }
        }

        buffers
    }

    pub fn beads(&self, subset: BeadSubset) -> &[LatticePoint] {
        let n = self.backbone_len;
        match subset {
            BeadSubset::All => &self.all,
            BeadSubset::BB => &self.all[..n],
            BeadSubset::HP => &self.all[n..],
            BeadSubset::HB => &self.hb,
            BeadSubset::PB => &self.pb,
            BeadSubset::HH => &self.hh,
            BeadSubset::PP => &self.pp,
        }
    }

    pub fn h_count(&self) -> usize {
        self.hh.len()
    }

    pub fn p_count(&self) -> usize {
        self.pp.len()
    }
}
