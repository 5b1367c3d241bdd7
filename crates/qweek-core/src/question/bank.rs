//! The QWeek question set.

use super::model::{Round1Item, Round2Item};

/// Round 1: match each complaint reason with its number of complaints.
pub const ROUND1_ITEMS: &[Round1Item] = &[
    Round1Item { id: "r1-1", prompt: "Mezcla de tabaco en trials", quantity: 3 },
    Round1Item { id: "r1-2", prompt: "NTRM piedras en caja de lámina", quantity: 2 },
    Round1Item { id: "r1-3", prompt: "Papel dañado en caja de lámina", quantity: 1 },
    Round1Item { id: "r1-4", prompt: "NTRM sintético en caja de lámina", quantity: 1 },
    Round1Item { id: "r1-5", prompt: "NTRM ave en caja de lámina.", quantity: 1 },
];

/// Round 2: match each complaint reason with its action plan.
pub const ROUND2_ITEMS: &[Round2Item] = &[
    Round2Item {
        id: "r2-1",
        prompt: "Mezcla de tabaco en trials",
        action_plan: "Revisión y adecuación del procedimiento local y LUPs para cambio de marcas.\n\
                      Capacitación al personal respecto a la documentación revisada.\n\
                      Negociación con clientes para alineación de trials Crop 2026.",
    },
    Round2Item {
        id: "r2-2",
        prompt: "NTRM piedras en caja de lámina",
        action_plan: "Seguimiento a CTJ sobre plan de acción para control de piedras en proceso.",
    },
    Round2Item {
        id: "r2-3",
        prompt: "Papel dañado en caja de lámina",
        action_plan: "Revisión del procedimiento local de gestión y trazabilidad de material de empaque.\n\
                      Revisión de circuitos de gestión de cajas entre producción-logística.",
    },
    Round2Item {
        id: "r2-4",
        prompt: "NTRM sintético en caja de lámina",
        action_plan: "Se realizó trazabilidad del reclamo y no se logró confirmar que el NTRM tuviera origen en Lerma",
    },
    Round2Item {
        id: "r2-5",
        prompt: "NTRM ave en caja de lámina.",
        action_plan: "Identificación y definición de alternativas para control de plagas.",
    },
];

/// Read-only view over the items of both rounds.
///
/// `QuestionBank::default()` is the QWeek set; `new` accepts any static set,
/// which keeps game tests independent of the real questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    round1: &'static [Round1Item],
    round2: &'static [Round2Item],
}

impl QuestionBank {
    pub const fn new(round1: &'static [Round1Item], round2: &'static [Round2Item]) -> Self {
        Self { round1, round2 }
    }

    pub fn round1(&self) -> &'static [Round1Item] {
        self.round1
    }

    pub fn round2(&self) -> &'static [Round2Item] {
        self.round2
    }

    /// Number of questions across both rounds.
    pub fn total_questions(&self) -> usize {
        self.round1.len() + self.round2.len()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(ROUND1_ITEMS, ROUND2_ITEMS)
    }
}
